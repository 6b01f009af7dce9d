use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// Image formats accepted when scanning a split directory
pub const IMG_FORMATS: &[&str] = &["jpg", "png"];

pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("required dataset source is missing: {path}")]
    MissingSource { path: PathBuf },
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record in {path}: {msg}")]
    MalformedRecord { path: PathBuf, msg: String },
    #[error("label {label:?} has no entry in class list {path}")]
    UnknownLabel { path: PathBuf, label: String },
}

impl DatasetError {
    /// Classify a read failure, keeping absent inputs distinct from other io errors.
    pub(crate) fn open(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::MissingSource {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// One indexed image: where it lives, who it depicts, and which camera shot it.
///
/// `identifier` is a file path in directory mode and an opaque token in
/// index-file mode; it is never parsed further. Ids are signed so raw-pid
/// passthrough is representable; every emitted record carries ids >= 0 for
/// well-formed inputs (cameras numbered from 1, pids >= 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub identifier: String,
    pub identity_id: i64,
    pub camera_id: i64,
}

/// The records of one split plus its identity/image counts.
///
/// `num_identities` counts distinct raw identities observed in the source,
/// whether or not relabeling was applied. For a non-relabeled directory split
/// `identity_id` stays the raw pid and may exceed `num_identities`; consumers
/// must not assume `identity_id < num_identities` for those splits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Split {
    pub records: Vec<Sample>,
    pub num_identities: usize,
    pub num_records: usize,
}

/// The three assembled splits of a re-identification dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReidDataset {
    pub train: Split,
    pub query: Split,
    pub gallery: Split,
}

impl ReidDataset {
    /// Distinct train identities plus distinct query identities. Gallery
    /// identities overlap the query set and are not counted separately.
    pub fn num_total_identities(&self) -> usize {
        self.train.num_identities + self.query.num_identities
    }

    pub fn num_total_records(&self) -> usize {
        self.train.num_records + self.query.num_records + self.gallery.num_records
    }

    pub fn print_summary(&self) {
        info!("Dataset statistics:");
        info!("  ------------------------------");
        info!("  subset   | # ids | # images");
        info!("  ------------------------------");
        info!(
            "  train    | {:5} | {:8}",
            self.train.num_identities, self.train.num_records
        );
        info!(
            "  query    | {:5} | {:8}",
            self.query.num_identities, self.query.num_records
        );
        info!(
            "  gallery  | {:5} | {:8}",
            self.gallery.num_identities, self.gallery.num_records
        );
        info!("  ------------------------------");
        info!(
            "  total    | {:5} | {:8}",
            self.num_total_identities(),
            self.num_total_records()
        );
        info!("  ------------------------------");
    }
}
