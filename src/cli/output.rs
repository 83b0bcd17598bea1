use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    /// Nothing left to print, e.g. after an interactive session.
    Empty,
    Str(String),
    Table(base::tableview::Config),
    Barchart(base::barchart::Config),
    Piechart(base::piechart::Config),
    /// A titled part of a page.
    Section(&'static str, Box<Output>),
    /// Load notices followed by the page's sections, separated by blank lines.
    Page {
        notices: Vec<String>,
        sections: Vec<Output>,
    },
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Empty => Ok(()),
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(config) => {
                if config.table.is_empty() {
                    writeln!(f, "No operations.")
                } else {
                    write!(f, "{}", config.to_tableview())
                }
            }
            Output::Barchart(config) => {
                if config.bars.is_empty() {
                    writeln!(f, "No data.")
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
            Output::Piechart(config) => {
                if config.slices.is_empty() {
                    writeln!(f, "No data.")
                } else {
                    write!(f, "{}", config.to_piechart())
                }
            }
            Output::Section(title, inner) => {
                writeln!(f, "{}", title)?;
                write!(f, "{}", inner)
            }
            Output::Page { notices, sections } => {
                for n in notices {
                    writeln!(f, "warning: {}", n)?;
                }
                for (i, section) in sections.iter().enumerate() {
                    if i > 0 || !notices.is_empty() {
                        writeln!(f)?;
                    }
                    write!(f, "{}", section)?;
                }
                Ok(())
            }
        }
    }
}
