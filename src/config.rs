use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for building a re-identification sample index.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Where samples come from: a scanned image directory or pre-generated
    /// index files
    #[arg(long = "source", value_enum, default_value = "directory")]
    pub source: Source,

    /// Dataset root containing bounding_box_train/query/bounding_box_test
    /// (directory mode)
    #[arg(short = 'd', long = "data_dir")]
    pub data_dir: Option<PathBuf>,

    /// Relabel training identities onto a dense [0, N) range
    #[arg(long = "relabel")]
    pub relabel: bool,

    /// Index file for the training split (index mode)
    #[arg(long = "train_index")]
    pub train_index: Option<PathBuf>,

    /// Index file for the query split (index mode)
    #[arg(long = "query_index")]
    pub query_index: Option<PathBuf>,

    /// Index file for the gallery split (index mode)
    #[arg(long = "gallery_index")]
    pub gallery_index: Option<PathBuf>,

    /// Class list whose line order defines query/gallery identity ids
    #[arg(long = "class_list")]
    pub class_list: Option<PathBuf>,

    /// Write the assembled splits to a JSON file
    #[arg(long = "export")]
    pub export: Option<PathBuf>,
}

// Enumeration for the supported sample sources
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Source {
    Directory,
    Index,
}
