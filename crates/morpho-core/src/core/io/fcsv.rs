use super::traits::{LandmarkFile, WriteError};
use crate::core::models::landmark::SubjectRecord;
use std::io::Write;

const FCSV_VERSION: &str = "4.10";
// 0 = RAS
const FCSV_COORDINATE_SYSTEM: u8 = 0;
const FCSV_COLUMNS: &str = "id,x,y,z,ow,ox,oy,oz,vis,sel,lock,label,desc,associatedNodeID";
const FCSV_ID_PREFIX: &str = "vtkMRMLMarkupsFiducialNode";

/// 3D Slicer markups fiducial list (`.fcsv`).
///
/// Orientation is written as the identity quaternion and every point is visible,
/// selected and unlocked.
pub struct FcsvFile;

impl LandmarkFile for FcsvFile {
    type Error = WriteError;

    const EXTENSION: &'static str = "fcsv";

    fn write_to(record: &SubjectRecord, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "# Markups fiducial file version = {}", FCSV_VERSION)?;
        writeln!(writer, "# CoordinateSystem = {}", FCSV_COORDINATE_SYSTEM)?;
        writeln!(writer, "# columns = {}", FCSV_COLUMNS)?;

        for (i, point) in record.points().iter().enumerate() {
            writeln!(
                writer,
                "{}_{},{},{},{},0,0,0,1,1,1,0,{},,",
                FCSV_ID_PREFIX,
                i + 1,
                point.position.x,
                point.position.y,
                point.position.z,
                point.label
            )?;
        }
        Ok(())
    }
}
