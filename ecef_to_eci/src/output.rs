use std::io::Write;

use aerospace::transformations::TransformationReport;
use clap::ValueEnum;

use crate::errors::CliErrors;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// x, y and z on separate lines, 3 decimals, no labels
    #[default]
    Lines,
    /// the full report, including julian date and gmst
    Json,
}

pub fn write_report(
    out: &mut impl Write,
    report: &TransformationReport,
    format: OutputFormat,
) -> Result<(), CliErrors> {
    match format {
        OutputFormat::Lines => {
            for value in report.output.km.iter() {
                writeln!(out, "{value:.3}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
