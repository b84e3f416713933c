use std::io::{self, Write};

use colored::Colorize;
use depsweep_core::DetectorError;
use log::debug;

use crate::types::UnusedPackage;

const HEADER: &str = "==========unused packages in project===========";

/// Builds the uninstall report for a non-empty list of unused packages.
pub fn format_report(unused: &[UnusedPackage]) -> String {
    let names = unused.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(" ");

    let mut report = format!("\n{HEADER}\n").red().to_string();
    for pkg in unused {
        report.push_str(&format!("{}: {}\n", pkg.name, pkg.version).red().to_string());
    }
    report.push_str("\n\n");
    report.push_str("You can uninstall them by the command\n\n");
    report.push_str(&format!("npm uninstall {names}").yellow().bold().underline().to_string());
    report.push_str("\n\nor\n\n");
    report.push_str(&format!("yarn remove {names}").yellow().bold().underline().to_string());
    report
}

pub fn print_report<W: Write + ?Sized>(writer: &mut W, unused: &[UnusedPackage]) -> io::Result<()> {
    if unused.is_empty() {
        return Ok(());
    }
    debug!("Printing report for {} unused packages", unused.len());
    writeln!(writer, "{}", format_report(unused))?;
    writer.flush()?;
    Ok(())
}

/// Prints the errors recorded on a build cycle. Manifest failures only skip
/// the check, so they get a warning marker rather than an error one.
pub fn print_errors<W: Write + ?Sized>(writer: &mut W, errors: &[DetectorError]) -> io::Result<()> {
    for err in errors {
        let marker =
            if err.is_manifest_error() { "⚠".yellow().bold() } else { "✗".red().bold() };
        writeln!(writer, "{} {}", marker, err)?;
    }
    writer.flush()?;
    Ok(())
}
