use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::types::{DatasetError, DatasetResult, ReidDataset};

/// Write an assembled dataset to `path` as pretty-printed JSON.
pub fn export_dataset(dataset: &ReidDataset, path: &Path) -> DatasetResult<()> {
    let file = File::create(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, dataset).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source: source.into(),
    })
}
