use super::error::ConvertError;
use super::store::{PointCollection, PointStore};
use super::validation::ValidatedInput;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Saves one collection per subject into `output_directory`, in subject order.
///
/// A single collection is created up front and reused: for each subject its
/// points are added with labels `"0".."L-1"`, it is named, saved to
/// `<output_directory>/<subject>.<ext>` and cleared. The first failed save aborts
/// the run; files written before it are left in place. The collection is
/// discarded whether or not the run succeeds.
pub fn emit<S: PointStore>(
    input: &ValidatedInput,
    output_directory: &Path,
    store: &mut S,
) -> Result<Vec<PathBuf>, ConvertError> {
    let mut collection = store.create_collection();
    let extension = store.extension().to_string();
    let result = emit_into(input, output_directory, &extension, &mut collection);
    store.discard(collection);
    result
}

fn emit_into<C: PointCollection>(
    input: &ValidatedInput,
    output_directory: &Path,
    extension: &str,
    collection: &mut C,
) -> Result<Vec<PathBuf>, ConvertError> {
    let mut written = Vec::with_capacity(input.subject_ids().len());

    for (index, subject) in input.subject_ids().iter().enumerate() {
        for (landmark, position) in input.subject_points(index).iter().enumerate() {
            collection.add_point(*position, &landmark.to_string());
        }
        collection.set_name(subject);

        let path = output_directory.join(format!("{}.{}", subject, extension));
        debug!("Saving subject '{}' to {:?}", subject, &path);
        collection
            .save(&path)
            .map_err(|e| ConvertError::PersistenceFailure {
                subject: subject.clone(),
                path: path.clone(),
                source: Box::new(e),
            })?;
        collection.clear_points();

        written.push(path);
    }

    Ok(written)
}
