use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::hash::Hash;
use std::path::Path;

use crate::types::{DatasetError, DatasetResult};

/// Build a label map from the tokens observed in a source.
///
/// Distinct tokens are enumerated in ascending natural order, so the
/// assignment is deterministic for a given token set: the smallest token maps
/// to 0 and so on up to `len - 1`. Works for both integer pids (directory
/// mode) and string labels (index-file mode).
pub fn label_map_from_observed<T, I>(tokens: I) -> HashMap<T, usize>
where
    T: Ord + Hash,
    I: IntoIterator<Item = T>,
{
    let distinct: BTreeSet<T> = tokens.into_iter().collect();
    distinct
        .into_iter()
        .enumerate()
        .map(|(id, token)| (token, id))
        .collect()
}

/// Build a label map from an external class-list file.
///
/// One label per line; the 0-based line position is the label's id. Lines are
/// trimmed of surrounding whitespace.
pub fn label_map_from_class_list(path: &Path) -> DatasetResult<HashMap<String, usize>> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::open(path, source))?;
    Ok(content
        .lines()
        .enumerate()
        .map(|(id, line)| (line.trim().to_string(), id))
        .collect())
}
