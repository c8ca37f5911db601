use crate::core::io::format::OutputFormat;
use crate::core::io::traits::WriteError;
use crate::core::models::landmark::{LandmarkPoint, SubjectRecord};
use nalgebra::Point3;
use std::path::Path;

/// A mutable, named collection of labeled points owned by a [`PointStore`].
///
/// The emitter fills one collection per subject, saves it, then clears its points
/// and reuses it for the next subject.
pub trait PointCollection {
    type Error: std::error::Error + Send + Sync + 'static;

    fn add_point(&mut self, position: Point3<f64>, label: &str);

    fn set_name(&mut self, name: &str);

    /// Persists the collection at `path`.
    fn save(&mut self, path: &Path) -> Result<(), Self::Error>;

    /// Removes all points; the collection's identity is kept for reuse.
    fn clear_points(&mut self);
}

/// The host-side persistence collaborator.
pub trait PointStore {
    type Collection: PointCollection;

    /// Extension, without the dot, of the files this store saves.
    fn extension(&self) -> &str;

    fn create_collection(&mut self) -> Self::Collection;

    /// Releases a collection created by [`PointStore::create_collection`].
    fn discard(&mut self, collection: Self::Collection);
}

/// Writes each saved collection straight to disk in one [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore {
    format: OutputFormat,
}

impl FileStore {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl PointStore for FileStore {
    type Collection = FileCollection;

    fn extension(&self) -> &str {
        self.format.extension()
    }

    fn create_collection(&mut self) -> Self::Collection {
        FileCollection {
            record: SubjectRecord::default(),
            format: self.format,
        }
    }

    fn discard(&mut self, collection: Self::Collection) {
        drop(collection);
    }
}

#[derive(Debug)]
pub struct FileCollection {
    record: SubjectRecord,
    format: OutputFormat,
}

impl FileCollection {
    pub fn record(&self) -> &SubjectRecord {
        &self.record
    }
}

impl PointCollection for FileCollection {
    type Error = WriteError;

    fn add_point(&mut self, position: Point3<f64>, label: &str) {
        self.record.push(LandmarkPoint::new(label, position));
    }

    fn set_name(&mut self, name: &str) {
        self.record.set_name(name);
    }

    fn save(&mut self, path: &Path) -> Result<(), Self::Error> {
        self.format.write_to_path(&self.record, path)
    }

    fn clear_points(&mut self) {
        self.record.clear_points();
    }
}
