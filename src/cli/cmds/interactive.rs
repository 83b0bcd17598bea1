use anyhow::Context;

use crate::cli;

const PROMPT: &str = "> ";

/// Read page commands from stdin, one per line
///
/// Each line is a page command as accepted on the command line, without the
/// binary name, e.g. 'summary -o Login'. Every line recomputes its page from
/// the input files. Type 'quit' or 'exit' to stop.
#[derive(clap::Parser)]
pub struct Interactive {}

/// A single line of input.
#[derive(clap::Parser)]
#[command(no_binary_name = true, color = clap::ColorChoice::Never)]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(clap::Subcommand)]
enum LineCommand {
    #[command(flatten)]
    Page(cli::cmds::page::Page),
    Values(cli::cmds::values::Values),
}

impl LineCommand {
    fn run(&self, session: &mut cli::Session<'_>) -> anyhow::Result<cli::Output> {
        match self {
            LineCommand::Page(cmd) => cmd.run(session),
            LineCommand::Values(cmd) => cmd.run(session),
        }
    }
}

impl Interactive {
    /// Runs until `input` is exhausted or a quit command is read. Errors of
    /// individual lines are written to `output` and do not end the loop.
    pub fn run<R, W>(
        &self,
        session: &mut cli::Session<'_>,
        mut input: R,
        mut output: W,
    ) -> anyhow::Result<cli::Output>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line).context("failed to read input")? == 0 {
                writeln!(output)?;
                break;
            }
            let args = match cli::util::split_args(&line) {
                Ok(args) => args,
                Err(e) => {
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };
            match args.first().map(String::as_str) {
                None => continue,
                Some("quit" | "exit") => break,
                Some(_) => {}
            }

            let res = match <Line as clap::Parser>::try_parse_from(&args) {
                Ok(line) => line.command.run(session),
                Err(e) => {
                    write!(output, "{}", e)?;
                    continue;
                }
            };
            match res {
                Ok(page) => write!(output, "{}", page)?,
                Err(e) => {
                    tracing::debug!(line = line.trim_end(), "page failed");
                    writeln!(output, "{}", cli::util::error_chain(&e))?
                }
            }
        }
        Ok(cli::Output::Empty)
    }
}
