use crate::base;
use crate::cli;
use crate::cli::sharedopts;

/// Show all operations views at once
#[derive(clap::Parser)]
pub struct Dash {
    #[command(flatten)]
    filter: sharedopts::OperationsFilter,
}

impl Dash {
    pub fn run(&self, session: &mut cli::Session<'_>) -> anyhow::Result<cli::Output> {
        let selection = self.filter.to_selection();
        let charset = session.charset();
        let term_width = session.term_width();
        session.load()?.render("dashboard", |merged| {
            let selected = base::pipeline::select_operations(merged, &selection)?;
            let summary = base::pipeline::summary(&selected)
                .map(|t| cli::cmds::summary::view(t, charset.clone()));
            let by_date = base::pipeline::by_date(&selected)
                .and_then(|t| cli::cmds::dates::view(&t, charset.clone(), term_width));
            let by_operation = base::pipeline::by_operation(&selected)
                .and_then(|t| cli::cmds::types::view(&t, charset, term_width));
            Ok(vec![
                section("Operations per person", summary),
                section("Operations per day", by_date),
                section("Record types per operation", by_operation),
            ])
        })
    }
}

/// A view that could not be built shows its error in place, so the other
/// views still render.
fn section(title: &'static str, view: Result<cli::Output, base::TableError>) -> cli::Output {
    let view = view.unwrap_or_else(|e| {
        tracing::debug!(section = title, error = %e, "view failed");
        cli::Output::Str(format!("error: {}", e))
    });
    cli::Output::Section(title, Box::new(view))
}
