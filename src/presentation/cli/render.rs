//! Terminal rendering of check results

use crate::application::dto::CheckSummary;
use crate::domain::entities::{FileRecord, Status};
use crate::domain::services::{FormatDetector, SortDirection, sort_natural};
use console::{Style, style};

/// Colour used for each status
pub fn status_style(status: Status) -> Style {
    match status {
        Status::Ok => Style::new().green(),
        Status::Mismatch => Style::new().yellow(),
        Status::Corrupted => Style::new().magenta(),
        Status::Unknown => Style::new().red(),
        Status::Empty => Style::new().dim(),
    }
}

/// Prints the results table sorted by file name
pub fn print_records(records: &[FileRecord], direction: SortDirection) {
    let mut rows: Vec<(String, &FileRecord)> =
        records.iter().map(|r| (r.file_name(), r)).collect();
    sort_natural(&mut rows, direction, |(name, _)| name.as_str());

    let width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max(9);
    println!(
        "{:<width$}  {:<10} {}",
        style("FILE NAME").bold(),
        style("STATUS").bold(),
        style("DETECTED").bold()
    );
    println!("{}", "-".repeat(width + 22));
    for (name, record) in rows {
        println!(
            "{:<width$}  {:<10} {}",
            name,
            status_style(record.status()).apply_to(record.status().as_str()),
            record.detection().label()
        );
    }
}

/// Prints totals, failures and the report location
pub fn print_summary(summary: &CheckSummary) {
    println!();
    println!("{}", summary.summary());
    for failure in &summary.failures {
        println!("[!] {}: {}", failure.path.display(), style(&failure.message).yellow());
    }
    if let Some(path) = &summary.report_path {
        println!("Report saved to {}", style(path.display()).cyan());
    }
}

/// Prints the registry and the fallback chain
pub fn print_signatures(detector: &FormatDetector) {
    println!("{}", style("Signatures:").green().bold());
    println!(
        "{:<8} {:<7} {}",
        style("FORMAT").bold(),
        style("OFFSET").bold(),
        style("PATTERN").bold()
    );
    for entry in detector.registry().all() {
        println!("{}", entry);
    }

    println!();
    println!("{}", style("Fallback rules:").green().bold());
    for rule in detector.resolver().policy().rules() {
        println!(
            "{:<8} {} -> {}",
            rule.container(),
            hex::encode_upper(rule.magic()),
            rule.target()
        );
    }
}
