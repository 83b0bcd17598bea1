use crate::base;
use crate::cli;

/// Plot the number of operations per person
#[derive(clap::Parser)]
pub struct People {
    /// Full names of interest
    ///
    /// Use commas to separate multiple names. Values must match exactly. All
    /// people are included if omitted.
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    names: Vec<String>,
}

impl People {
    pub fn run(&self, session: &mut cli::Session<'_>) -> anyhow::Result<cli::Output> {
        let selection = base::Selection {
            fullnames: cli::util::selection_set(&self.names),
            ..base::Selection::default()
        };
        let charset = session.charset();
        let term_width = session.term_width();
        session.load()?.render("people", |merged| {
            let by_person = base::pipeline::people_page(merged, &selection)?;
            Ok(vec![cli::Output::Barchart(base::barchart::Config {
                charset,
                term_width,
                bars: by_person.pairs()?,
            })])
        })
    }
}
