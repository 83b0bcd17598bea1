use crate::cli;

/// The dashboard's pages. Each one loads the sources, applies its filters and
/// renders its views from scratch.
#[derive(clap::Subcommand)]
pub enum Page {
    Summary(cli::cmds::summary::Summary),
    Dates(cli::cmds::dates::Dates),
    Types(cli::cmds::types::Types),
    People(cli::cmds::people::People),
    Dash(cli::cmds::dash::Dash),
}

impl Page {
    pub fn run(&self, session: &mut cli::Session<'_>) -> anyhow::Result<cli::Output> {
        match self {
            Page::Summary(cmd) => cmd.run(session),
            Page::Dates(cmd) => cmd.run(session),
            Page::Types(cmd) => cmd.run(session),
            Page::People(cmd) => cmd.run(session),
            Page::Dash(cmd) => cmd.run(session),
        }
    }
}
