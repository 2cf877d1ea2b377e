//! CSV report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::Report;
use crate::error::Result;

const HEADER: [&str; 4] = ["Sender", "Messages", "FirstMessages", "AvgSentiment"];

/// Writes the per-user table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Messages`, `FirstMessages`, `AvgSentiment`
/// - Sentiment is printed with two decimals
/// - Encoding: UTF-8
pub fn write_csv(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(report, file)
}

/// Converts the per-user table to a CSV string.
pub fn to_csv(report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(report, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_rows<W: Write>(report: &Report, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;

    for row in &report.users {
        writer.write_record([
            row.sender.clone(),
            row.messages.to_string(),
            row.first_messages.to_string(),
            format!("{:.2}", row.avg_sentiment),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
