use crate::base;
use crate::cli;
use crate::cli::sharedopts;

/// Plot the number of operations per day
#[derive(clap::Parser)]
pub struct Dates {
    #[command(flatten)]
    filter: sharedopts::OperationsFilter,
}

pub fn view(
    by_date: &base::Table,
    charset: base::Charset,
    term_width: usize,
) -> Result<cli::Output, base::TableError> {
    Ok(cli::Output::Barchart(base::barchart::Config {
        charset,
        term_width,
        bars: by_date.pairs()?,
    }))
}

impl Dates {
    pub fn run(&self, session: &mut cli::Session<'_>) -> anyhow::Result<cli::Output> {
        let selection = self.filter.to_selection();
        let charset = session.charset();
        let term_width = session.term_width();
        session.load()?.render("dates", |merged| {
            let selected = base::pipeline::select_operations(merged, &selection)?;
            Ok(vec![view(&base::pipeline::by_date(&selected)?, charset, term_width)?])
        })
    }
}
