//! Reads process tables from CSV.
//!
//! Each record is `id,burst,arrival[,priority]` with no header row. Any bad
//! record fails the whole load.

use crate::{
    error::LoadError,
    scheduler::{Process, ProcessTable},
};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, trace};
use std::{fs::File, io::Read, path::Path, str::FromStr};

pub fn load_file(path: &Path) -> Result<ProcessTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let table = load_processes(file)?;
    info!("Loaded {} processes from {}", table.len(), path.display());
    Ok(table)
}

pub fn load_processes<R: Read>(reader: R) -> Result<ProcessTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut processes = Vec::new();
    for record in reader.records() {
        let process = parse_record(&record?)?;
        trace!("{process:?}");
        processes.push(process);
    }

    Ok(ProcessTable::new(processes)?)
}

fn parse_record(record: &StringRecord) -> Result<Process, LoadError> {
    let line = record.position().map_or(0, |position| position.line());
    if !(3..=4).contains(&record.len()) {
        return Err(LoadError::FieldCount {
            line,
            found: record.len(),
        });
    }

    let pid = parse_field(record, line, 0, "id")?;
    let burst = parse_field(record, line, 1, "burst")?;
    let arrival = parse_field(record, line, 2, "arrival")?;
    let priority = match record.get(3) {
        Some(_) => parse_field(record, line, 3, "priority")?,
        None => Process::DEFAULT_PRIORITY,
    };

    Ok(Process::with_priority(pid, burst, arrival, priority))
}

fn parse_field<T>(
    record: &StringRecord,
    line: u64,
    index: usize,
    field: &'static str,
) -> Result<T, LoadError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let value = record.get(index).unwrap_or_default();
    value.parse().map_err(|source| LoadError::InvalidNumber {
        line,
        field,
        value: value.to_owned(),
        source,
    })
}
