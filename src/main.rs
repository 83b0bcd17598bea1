mod base;
mod cli;

use anyhow::Context;

fn main() {
    fn try_main() -> anyhow::Result<()> {
        let root = <cli::Root as clap::Parser>::parse();
        let cwd = std::env::current_dir().context("failed to resolve current working directory")?;
        let fs = base::Fs::new(cwd);
        let output = root.run(&fs)?;
        print!("{}", output);
        Ok(())
    }

    init_logging();
    if let Err(e) = try_main() {
        eprintln!("{}", cli::error_chain(&e));
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with rendered pages. Defaults to
/// warnings only; `RUST_LOG` overrides.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}
