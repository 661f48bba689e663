use std::io::Write;

use aerospace::prelude::*;
use clap::{Parser, ValueEnum};
use time::prelude::*;
use tracing::info;

use crate::errors::CliErrors;
use crate::output::{OutputFormat, write_report};

pub const USAGE: &str =
    "Usage: ecef_to_eci year month day hour minute second ecef_x_km ecef_y_km ecef_z_km";

const TIME_FIELDS: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];
const ECEF_FIELDS: [&str; 3] = ["ecef_x_km", "ecef_y_km", "ecef_z_km"];
const ECI_FIELDS: [&str; 3] = ["eci_x_km", "eci_y_km", "eci_z_km"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DayNumberArg {
    /// real-valued divisions, truncated once (default)
    #[default]
    Reference,
    /// integer divisions, calendar-correct
    FliegelVanFlandern,
}

impl From<DayNumberArg> for DayNumberRule {
    fn from(value: DayNumberArg) -> Self {
        match value {
            DayNumberArg::Reference => DayNumberRule::Reference,
            DayNumberArg::FliegelVanFlandern => DayNumberRule::FliegelVanFlandern,
        }
    }
}

/// Converts a position from the earth-fixed frame to the inertial frame at a
/// UTC timestamp, rotating about the polar axis by Greenwich mean sidereal
/// time. Prints x, y and z in km.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// year month day hour minute second ecef_x_km ecef_y_km ecef_z_km
    /// (options go before the values)
    #[arg(allow_hyphen_values = true, value_name = "VALUES")]
    pub values: Vec<String>,

    /// Treat the vector as ECI and convert it to ECEF instead
    #[arg(long)]
    pub inverse: bool,

    /// Reject timestamps that are not a real civil date and time of day
    #[arg(long)]
    pub strict: bool,

    /// Rule used for the day number of the julian date
    #[arg(long, value_enum, default_value_t = DayNumberArg::Reference)]
    pub day_number: DayNumberArg,

    /// Output as three lines or a JSON report
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Log to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn transformation(&self) -> Transformation {
        Transformation::new(self.day_number.into(), self.strict)
    }

    /// Reads the positional values. `None` when there are not exactly nine.
    pub fn invocation(&self) -> Result<Option<(Timestamp, Position)>, CliErrors> {
        let Ok(values) = <&[String; 9]>::try_from(self.values.as_slice()) else {
            info!(count = self.values.len(), "expected 9 positional arguments");
            return Ok(None);
        };

        let (frame, vector_fields) = if self.inverse {
            (Frame::Eci, ECI_FIELDS)
        } else {
            (Frame::Ecef, ECEF_FIELDS)
        };
        let names = TIME_FIELDS.iter().chain(vector_fields.iter());
        let mut parsed = [0.0; 9];
        for ((slot, value), name) in parsed.iter_mut().zip(values).zip(names) {
            *slot = parse_number(*name, value)?;
        }

        let [year, month, day, hour, minute, second, x, y, z] = parsed;
        let timestamp = Timestamp::new(year, month, day, hour, minute, second);
        Ok(Some((timestamp, Position::new(frame, x, y, z))))
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, CliErrors> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CliErrors::InvalidNumber(name, value.to_string()))
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliErrors> {
    let Some((timestamp, position)) = cli.invocation()? else {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    };

    let report = cli.transformation().apply(&timestamp, position)?;
    info!(
        "{} -> {} at {}, gmst {:.9} rad",
        report.input.frame, report.output.frame, report.julian_date, report.gmst
    );
    write_report(out, &report, cli.format)
}
