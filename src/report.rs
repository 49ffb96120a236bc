use crate::error::ReportError;
use crate::session::{Session, VehicleClass};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const REPORT_FILE: &str = "report.txt";

pub const DRIVER_WIDTH: usize = 15;
pub const TRACK_WIDTH: usize = 15;
pub const VEHICLE_WIDTH: usize = 12;
pub const AVG_WIDTH: usize = 10;

const SEPARATOR: &str = "-----------------------------------------------";

/// One data row of the report as read back from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub driver_name: String,
    pub track_name: String,
    pub vehicle: VehicleClass,
    pub average_lap: f64,
}

impl From<&Session> for ReportRow {
    fn from(s: &Session) -> Self {
        Self {
            driver_name: s.driver_name().to_string(),
            track_name: s.track_name().to_string(),
            vehicle: s.vehicle(),
            average_lap: s.average_lap(),
        }
    }
}

pub fn write_report<'a, W, I>(out: &mut W, sessions: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Session>,
{
    writeln!(
        out,
        "{:<DRIVER_WIDTH$}{:<TRACK_WIDTH$}{:<VEHICLE_WIDTH$}{:<AVG_WIDTH$}",
        "Driver", "Track", "Vehicle", "Avg Lap"
    )?;
    writeln!(out, "{SEPARATOR}")?;

    let mut rows = 0;
    for s in sessions {
        writeln!(
            out,
            "{:<DRIVER_WIDTH$}{:<TRACK_WIDTH$}{:<VEHICLE_WIDTH$}{:<AVG_WIDTH$.2}",
            s.driver_name(),
            s.track_name(),
            s.vehicle(),
            s.average_lap()
        )?;
        rows += 1;
    }
    Ok(rows)
}

/// Creates or truncates `path` and writes the report table into it.
pub fn save_report<'a, I>(path: &Path, sessions: I) -> Result<usize, ReportError>
where
    I: IntoIterator<Item = &'a Session>,
{
    let io_err = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let rows = write_report(&mut out, sessions).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!(path = %path.display(), rows, "report written");
    Ok(rows)
}

/// Splits `line` at a char offset, tolerating lines shorter than `at`.
fn take_column(line: &str, at: usize) -> (&str, &str) {
    match line.char_indices().nth(at) {
        Some((idx, _)) => line.split_at(idx),
        None => (line, ""),
    }
}

/// Reads the fixed-width table written by [`write_report`] back into rows.
pub fn parse_report(text: &str) -> Result<Vec<ReportRow>, ReportError> {
    let mut lines = text.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.starts_with("Driver") => {}
        _ => return Err(ReportError::MissingHeader),
    }
    match lines.next() {
        Some((_, sep)) if sep.trim().chars().all(|c| c == '-') && !sep.trim().is_empty() => {}
        _ => return Err(ReportError::MissingHeader),
    }

    let mut rows = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = |reason: String| ReportError::MalformedRow {
            line: idx + 1,
            reason,
        };

        let (driver, rest) = take_column(line, DRIVER_WIDTH);
        let (track, rest) = take_column(rest, TRACK_WIDTH);
        let (vehicle, avg) = take_column(rest, VEHICLE_WIDTH);

        let vehicle = vehicle
            .trim()
            .parse::<VehicleClass>()
            .map_err(|e| malformed(e.to_string()))?;
        let average_lap = avg
            .trim()
            .parse::<f64>()
            .map_err(|e| malformed(format!("bad average '{}': {e}", avg.trim())))?;

        rows.push(ReportRow {
            driver_name: driver.trim_end().to_string(),
            track_name: track.trim_end().to_string(),
            vehicle,
            average_lap,
        });
    }
    Ok(rows)
}
