//! CSV decoding into a header plus owned string rows.

use std::io::Read;

use crate::error::PlanError;

/// A decoded CSV file: the header row and every data row as text fields.
#[derive(Debug)]
pub struct RowSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read an entire CSV stream into memory.
///
/// The first row is the header; every record must have the same number of
/// fields (the csv reader enforces this). Fields stay as text - type
/// interpretation happens in the database via placeholder casts.
pub fn read_rows<R: Read>(data: R) -> Result<RowSet, PlanError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(data);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|field| field.to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|field| field.is_empty()) {
        return Err(PlanError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(RowSet { headers, rows })
}
