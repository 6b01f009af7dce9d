use log::info;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::labels::label_map_from_observed;
use crate::types::{DatasetError, DatasetResult, ReidDataset, Sample, Split, IMG_FORMATS};

// Market1501-style directory layout
pub const TRAIN_DIR: &str = "bounding_box_train";
pub const QUERY_DIR: &str = "query";
pub const GALLERY_DIR: &str = "bounding_box_test";

/// Load a dataset from a Market1501-style directory tree.
///
/// `root` must contain `bounding_box_train`, `query` and `bounding_box_test`
/// subdirectories. The training split is relabeled onto a dense `[0, N)`
/// range when `relabel_train` is set; query and gallery always keep raw pids
/// so evaluation code can compare identities across the two splits.
pub fn load_directory_dataset(root: &Path, relabel_train: bool) -> DatasetResult<ReidDataset> {
    let train_dir = root.join(TRAIN_DIR);
    let query_dir = root.join(QUERY_DIR);
    let gallery_dir = root.join(GALLERY_DIR);

    // Check all sources up front so a missing subdirectory is reported
    // before any scanning work starts.
    for dir in [root, train_dir.as_path(), query_dir.as_path(), gallery_dir.as_path()] {
        if !dir.is_dir() {
            return Err(DatasetError::MissingSource {
                path: dir.to_path_buf(),
            });
        }
    }

    info!("Scanning dataset at {}...", root.display());

    // The splits share no state, so scan them concurrently.
    let (train, (query, gallery)) = rayon::join(
        || scan_directory(&train_dir, relabel_train),
        || {
            rayon::join(
                || scan_directory(&query_dir, false),
                || scan_directory(&gallery_dir, false),
            )
        },
    );

    Ok(ReidDataset {
        train: train?,
        query: query?,
        gallery: gallery?,
    })
}

/// Scan one split directory into records and counts.
///
/// Every regular `.jpg`/`.png` file must carry a `<pid>_c<camid>` name;
/// anything else is a malformed record. Files with pid `-1` are junk and are
/// excluded from the records and from both counts. With `relabel` set,
/// distinct pids are mapped onto `[0, num_identities)` in ascending pid
/// order; otherwise the raw pid is kept. Camera ids are shifted to start
/// from 0 in both modes.
pub fn scan_directory(dir: &Path, relabel: bool) -> DatasetResult<Split> {
    let mut paths = list_image_files(dir)?;
    // Directory-entry order is platform-dependent; sort so two runs over the
    // same tree produce identical record lists.
    paths.sort();

    let mut parsed = Vec::new();
    for path in paths {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let (pid, camid) = parse_image_name(name).ok_or_else(|| DatasetError::MalformedRecord {
            path: path.clone(),
            msg: "file name does not match `<pid>_c<camid>`".to_string(),
        })?;
        if pid == -1 {
            continue; // junk images are just ignored
        }
        parsed.push((path, pid, camid));
    }

    let pids: BTreeSet<i64> = parsed.iter().map(|&(_, pid, _)| pid).collect();
    let num_identities = pids.len();
    let pid2label = label_map_from_observed(pids);

    let records: Vec<Sample> = parsed
        .into_iter()
        .map(|(path, pid, camid)| Sample {
            identifier: path.to_string_lossy().into_owned(),
            identity_id: if relabel { pid2label[&pid] as i64 } else { pid },
            camera_id: camid - 1, // cameras are numbered from 1
        })
        .collect();

    Ok(Split {
        num_identities,
        num_records: records.len(),
        records,
    })
}

/// Extract `(pid, camid)` from an image file name such as
/// `0002_c1_f000451.jpg`. The pid runs up to the first `_c`, the camera id is
/// the integer immediately after it; both may carry a leading `-`.
pub fn parse_image_name(name: &str) -> Option<(i64, i64)> {
    let (pid, rest) = name.split_once("_c")?;
    let pid: i64 = pid.parse().ok()?;
    let camid_len = rest
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && c == '-'))
        .count();
    let camid: i64 = rest[..camid_len].parse().ok()?;
    Some((pid, camid))
}

fn list_image_files(dir: &Path) -> DatasetResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| DatasetError::open(dir, source))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DatasetError::open(dir, source))?;
        let file_type = entry
            .file_type()
            .map_err(|source| DatasetError::open(dir, source))?;
        if !file_type.is_file() {
            continue;
        }
        let path = entry.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMG_FORMATS.contains(&ext));
        if is_image {
            paths.push(path);
        }
    }
    Ok(paths)
}
