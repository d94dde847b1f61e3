use anyhow::Context;
use clap::Parser;
use matchat::cli::Cli;
use matchat::command::{execute, read_text};
use matchat::output::Output;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "off" };
    let filter =
        EnvFilter::try_from_env("MATCHAT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    let text = read_text(cli, std::io::stdin().lock())?;
    let matched = execute(cli, &text, &mut output)
        .with_context(|| format!("matching /{}/ at position {}", cli.pattern, cli.position))?;
    Ok(matched)
}

fn main() {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("matchat: {:#}", e);
            2
        }
    };

    std::process::exit(code);
}
