use crate::base;
use crate::cli;

/// Operations dashboard for CSV exports
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    #[command(flatten)]
    Page(cli::cmds::page::Page),
    Values(cli::cmds::values::Values),
    Interactive(cli::cmds::interactive::Interactive),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        // `init` must work without a readable config, so it opens no session.
        match self.command {
            Commands::Init(cmd) => cmd.run(fs),
            Commands::Page(cmd) => cmd.run(&mut cli::Session::open(fs)?),
            Commands::Values(cmd) => cmd.run(&mut cli::Session::open(fs)?),
            Commands::Interactive(cmd) => cmd.run(
                &mut cli::Session::open(fs)?,
                std::io::stdin().lock(),
                std::io::stdout(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::cli::testing;

    #[rstest]
    #[case(&["", "summary"])]
    #[case(&["", "dates"])]
    #[case(&["", "types"])]
    #[case(&["", "people"])]
    #[case(&["", "dash"])]
    #[case(&["", "values", "Operation"])]
    fn test_error_if_config_is_invalid(#[case] args: &[&str]) {
        let (fs, _td) = testing::tempfs();
        std::fs::write(fs.path::<base::Config>(), "{\"usersFile\": 3}").unwrap();
        let root = match <Root as clap::Parser>::try_parse_from(args) {
            Ok(cmd) => cmd,
            Err(e) => panic!("{}", e),
        };
        let res = root.run(&fs);
        testing::ResultMatcher::ErrGlob("failed to read '*.opsdash.json': *").assert_matches(res);
    }

    #[test]
    fn test_init_ignores_invalid_config() {
        let (fs, _td) = testing::tempfs();
        std::fs::write(fs.path::<base::Config>(), "[]").unwrap();
        let root = <Root as clap::Parser>::try_parse_from(["", "init", "--reset-config"]).unwrap();
        testing::ResultMatcher::OkStrGlob("dashboard configuration reset to defaults.")
            .assert_matches(root.run(&fs));
    }

    #[test]
    fn test_command_line() {
        <Root as clap::CommandFactory>::command().debug_assert();
    }
}
