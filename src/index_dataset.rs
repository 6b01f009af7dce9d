use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::labels::{label_map_from_class_list, label_map_from_observed};
use crate::types::{DatasetError, DatasetResult, ReidDataset, Sample, Split};

/// Camera-id offset for the query split, so query and gallery camera ids
/// never collide. Index files carry no real camera information; the ids are
/// synthetic counters that only exist to satisfy downstream consumers.
pub const QUERY_CAMID_OFFSET: i64 = 100_000_000;

/// Paths to the three pre-generated index files of a dataset, plus an
/// optional class list shared by query and gallery.
#[derive(Debug, Clone)]
pub struct IndexPaths {
    pub train: PathBuf,
    pub query: PathBuf,
    pub gallery: PathBuf,
    pub class_list: Option<PathBuf>,
}

/// Load a dataset from pre-generated `token label` index files.
///
/// The training split derives its own label map from the labels it observes.
/// Query and gallery share one identity numbering: the class list's line
/// order when one is supplied, otherwise each file's sorted observed labels.
pub fn load_index_dataset(paths: &IndexPaths) -> DatasetResult<ReidDataset> {
    info!("Reading index files...");

    let class_list = paths.class_list.as_deref();
    let (train, (query, gallery)) = rayon::join(
        || read_index(&paths.train, None, 0),
        || {
            rayon::join(
                || read_index(&paths.query, class_list, QUERY_CAMID_OFFSET),
                || read_index(&paths.gallery, class_list, 0),
            )
        },
    );

    Ok(ReidDataset {
        train: train?,
        query: query?,
        gallery: gallery?,
    })
}

/// Read one index file into records and counts.
///
/// Each line must hold exactly two whitespace-separated fields,
/// `token label`. Identity ids come from the class list's line order when one
/// is given (a label missing from the list is a hard error) and from the
/// sorted distinct observed labels otherwise. Camera ids are
/// `init_camid + line position`.
pub fn read_index(path: &Path, class_list: Option<&Path>, init_camid: i64) -> DatasetResult<Split> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::open(path, source))?;

    let mut pairs = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(token), Some(label), None) => pairs.push((token, label)),
            _ => {
                return Err(DatasetError::MalformedRecord {
                    path: path.to_path_buf(),
                    msg: format!("line {}: expected `token label`", lineno + 1),
                })
            }
        }
    }

    let label2id: HashMap<String, usize> = match class_list {
        Some(list_path) => label_map_from_class_list(list_path)?,
        None => label_map_from_observed(pairs.iter().map(|&(_, label)| label.to_string())),
    };
    let num_identities = label2id.len();

    let records: Vec<Sample> = pairs
        .into_iter()
        .enumerate()
        .map(|(pos, (token, label))| {
            let identity_id =
                label2id
                    .get(label)
                    .copied()
                    .ok_or_else(|| DatasetError::UnknownLabel {
                        // only reachable with a class list; observed maps are total
                        path: class_list.unwrap_or(path).to_path_buf(),
                        label: label.to_string(),
                    })?;
            Ok(Sample {
                identifier: token.to_string(),
                identity_id: identity_id as i64,
                camera_id: init_camid + pos as i64,
            })
        })
        .collect::<DatasetResult<_>>()?;

    Ok(Split {
        num_identities,
        num_records: records.len(),
        records,
    })
}
