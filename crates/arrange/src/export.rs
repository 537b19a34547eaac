use crate::error::{CliError, Result};
use crate::report::RunReport;
use csv::WriterBuilder;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

const HEADER: [&str; 10] = [
    "Timestamp",
    "Command",
    "Direction",
    "Outcome",
    "Moves",
    "TopLevel",
    "Containers",
    "Plain",
    "Nested",
    "Detail",
];

/// Backs up one run report as `arrange_<timestamp>.csv` under `output_dir`
pub fn export_report_csv(report: &RunReport, output_dir: &Path) -> Result<PathBuf> {
    let timestamp = report.timestamp.format("%Y-%m-%d_%H-%M-%S_%3f");
    let filename = format!("arrange_{timestamp}.csv");

    std::fs::create_dir_all(output_dir).map_err(|e| CliError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let file_path = output_dir.join(&filename);

    let file = File::create(&file_path).map_err(|e| CliError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    let writer = BufWriter::new(file);
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.from_writer(writer);
    wtr.write_record(HEADER)?;

    let census = report.census;
    let direction = report
        .direction
        .map(|d| d.to_string())
        .unwrap_or_default();
    wtr.write_record([
        report.timestamp.to_rfc3339(),
        report.command.clone(),
        direction,
        report.outcome.as_str().to_string(),
        report.moves.to_string(),
        census.top_level.to_string(),
        census.containers.to_string(),
        census.plain.to_string(),
        census.nested.to_string(),
        report.detail.clone(),
    ])?;

    wtr.flush()?;
    Ok(file_path)
}
