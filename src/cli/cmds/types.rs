use crate::base;
use crate::cli;
use crate::cli::sharedopts;

/// Chart record types summed per operation
#[derive(clap::Parser)]
pub struct Types {
    #[command(flatten)]
    filter: sharedopts::OperationsFilter,
}

pub fn view(
    by_operation: &base::Table,
    charset: base::Charset,
    term_width: usize,
) -> Result<cli::Output, base::TableError> {
    Ok(cli::Output::Piechart(base::piechart::Config {
        charset,
        term_width,
        slices: by_operation.decimal_pairs()?,
    }))
}

impl Types {
    pub fn run(&self, session: &mut cli::Session<'_>) -> anyhow::Result<cli::Output> {
        let selection = self.filter.to_selection();
        let charset = session.charset();
        let term_width = session.term_width();
        session.load()?.render("types", |merged| {
            let selected = base::pipeline::select_operations(merged, &selection)?;
            Ok(vec![view(
                &base::pipeline::by_operation(&selected)?,
                charset,
                term_width,
            )?])
        })
    }
}
