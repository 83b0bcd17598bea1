use crate::cli;

/// List the distinct values of a column
///
/// These are the options available to the page filters, e.g. '-o' takes
/// values of 'Operation' and 'people -n' takes values of 'Fullname'.
#[derive(clap::Parser)]
pub struct Values {
    /// Column of the joined operations and users tables
    column: String,

    /// Wildcard patterns to match values of interest
    #[arg(default_value = "*")]
    patterns: Vec<String>,
}

impl Values {
    pub fn run(&self, session: &mut cli::Session<'_>) -> anyhow::Result<cli::Output> {
        session.load()?.render("values", |merged| {
            if merged.is_schemaless() {
                return Ok(vec![cli::Output::Str("No values.".to_string())]);
            }
            let values =
                cli::util::distinct_values(&merged, &self.column, self.patterns.as_slice())?;
            Ok(vec![cli::Output::Str(match values.is_empty() {
                true => "No values.".to_string(),
                false => values.join("\n"),
            })])
        })
    }
}
