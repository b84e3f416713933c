use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use depsweep_unused_packages::{CheckResult, Config};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "depsweep")]
#[command(about = "Find dependencies a JavaScript build never uses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report package.json dependencies that no bundled module imports
    UnusedPackages(Config),
}

/// Unused packages only fail the run when asked to; cycle errors never do.
fn should_fail(result: &CheckResult, fail_on_unused: bool) -> bool {
    fail_on_unused && !result.unused.is_empty()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::UnusedPackages(cfg) => {
            info!("Running unused packages check on graph {}", cfg.graph.display());
            debug!("Config: context={:?}, scoped_names={}", cfg.context, cfg.scoped_names);
            let fail_on_unused = cfg.fail_on_unused;

            let result =
                depsweep_unused_packages::run_unused_packages_check(cfg, &mut stdout).await?;
            stdout.flush()?;

            if !result.errors.is_empty() {
                let mut stderr = std::io::stderr().lock();
                depsweep_unused_packages::print_errors(&mut stderr, &result.errors)?;
            }

            info!(
                "Finished in {}ms on {} modules ({} declared, {} referenced)",
                start.elapsed().as_millis(),
                result.modules_analyzed,
                result.declared,
                result.referenced
            );

            if should_fail(&result, fail_on_unused) {
                eprintln!(
                    "{} {} unused packages",
                    "●".bright_blue(),
                    result.unused.len().to_string().red().bold()
                );
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
