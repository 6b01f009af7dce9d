//! Sample-index builders for person re-identification datasets
//!
//! This library turns either a directory of images whose filenames encode
//! identity and camera, or pre-generated `token label` index files, into a
//! uniform list of (identifier, identity_id, camera_id) records plus
//! identity/image counts for each train/query/gallery split.

pub mod config;
pub mod dir_dataset;
pub mod index_dataset;
pub mod io;
pub mod labels;
pub mod types;

// Re-export commonly used types and functions
pub use config::{Args, Source};
pub use dir_dataset::{load_directory_dataset, parse_image_name, scan_directory};
pub use index_dataset::{load_index_dataset, read_index, IndexPaths, QUERY_CAMID_OFFSET};
pub use io::export_dataset;
pub use labels::{label_map_from_class_list, label_map_from_observed};
pub use types::{DatasetError, DatasetResult, ReidDataset, Sample, Split};
