use super::traits::{LandmarkFile, WriteError};
use crate::core::models::landmark::SubjectRecord;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PointRow<'a> {
    label: &'a str,
    x: f64,
    y: f64,
    z: f64,
}

/// Plain `label,x,y,z` table with a header row.
pub struct CsvFile;

impl LandmarkFile for CsvFile {
    type Error = WriteError;

    const EXTENSION: &'static str = "csv";

    fn write_to(record: &SubjectRecord, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for point in record.points() {
            csv_writer.serialize(PointRow {
                label: &point.label,
                x: point.position.x,
                y: point.position.y,
                z: point.position.z,
            })?;
        }
        if record.is_empty() {
            csv_writer.write_record(["label", "x", "y", "z"])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
