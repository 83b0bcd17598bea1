use crate::base;
use crate::cli;
use crate::cli::sharedopts;

/// Show operation counts per person
///
/// Each person is listed once, with the user ID, date and operation of their
/// first operation and the number of operations in total.
#[derive(clap::Parser)]
pub struct Summary {
    #[command(flatten)]
    filter: sharedopts::OperationsFilter,
}

pub fn view(summary: base::Table, charset: base::Charset) -> cli::Output {
    cli::Output::Table(base::tableview::Config {
        charset,
        table: summary,
    })
}

impl Summary {
    pub fn run(&self, session: &mut cli::Session<'_>) -> anyhow::Result<cli::Output> {
        let selection = self.filter.to_selection();
        let charset = session.charset();
        session.load()?.render("summary", |merged| {
            let selected = base::pipeline::select_operations(merged, &selection)?;
            Ok(vec![view(base::pipeline::summary(&selected)?, charset)])
        })
    }
}
