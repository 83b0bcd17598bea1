use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize a dashboard in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing dashboard's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_initialized = fs.is_initialized();

        let path = fs.path::<base::Config>();
        let config = if self.reset_config || !path.exists() {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote config");

        Ok(cli::Output::Str(if !already_initialized {
            format!("Dashboard initialized in '{}'", fs.dir().display())
        } else if self.reset_config {
            "Dashboard configuration reset to defaults.".to_string()
        } else {
            format!("Dashboard reinitialized in '{}'", fs.dir().display())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cli::testing::generate_testcases![
        (
            empty_dir,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init"],
                    res: cli::testing::ResultMatcher::OkStrGlob("dashboard initialized in*"),
                }],
                initial_state: cli::testing::StrState::new(),
                final_state: cli::testing::State::new().with_config(initial_config()),
            }
        ),
        (
            empty_dir_reset_config,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init", "--reset-config"],
                    res: cli::testing::ResultMatcher::OkStrGlob("dashboard initialized in*"),
                }],
                initial_state: cli::testing::StrState::new(),
                final_state: cli::testing::State::new().with_config(initial_config()),
            }
        ),
        (
            data_files_untouched,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init"],
                    res: cli::testing::ResultMatcher::OkStrGlob("dashboard initialized in*"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_operations(cli::testing::OPERATIONS)
                    .with_users(cli::testing::USERS),
                final_state: cli::testing::State::new()
                    .with_config(initial_config())
                    .with_operations(cli::testing::OPERATIONS)
                    .with_users(cli::testing::USERS),
            }
        ),
        (
            existing_dashboard,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init"],
                    res: cli::testing::ResultMatcher::OkStrGlob("dashboard reinitialized in*"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"operationsFile":"ops.csv","useColoredOutput":true}"#),
            }
        ),
        (
            existing_dashboard_reset_config,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init", "--reset-config"],
                    res: cli::testing::ResultMatcher::OkStrGlob(
                        "dashboard configuration reset to defaults."
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"operationsFile":"ops.csv","useColoredOutput":true}"#),
                final_state: cli::testing::State::new().with_config(initial_config()),
            }
        ),
    ];
}
