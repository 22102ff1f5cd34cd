//! Filesystem scanning: discovery of candidate item directories.
//!
//! Stage 1 of the catalog build. The content root follows a fixed three-level
//! layout — collection, category, item — and only the third level is yielded:
//!
//! ```text
//! catalog/                         # Content root
//! ├── 2024-01-Session/             # Collection
//! │   ├── Tops/                    # Category
//! │   │   ├── CAM-0012/            # Item directory (name = item id)
//! │   │   │   ├── metadata.json
//! │   │   │   ├── CAM-0012_Frente_Mini.jpg
//! │   │   │   └── CAM-0012_Espalda_Mini.jpg
//! │   │   └── CAM-0019/
//! │   └── Pants/
//! │       └── PAN-0003/
//! └── 2024-02-Session/
//! ```
//!
//! Non-directory entries are skipped at every level, so stray files (notes,
//! exports, `.DS_Store`) never surface as items. The scan opens no files;
//! metadata and image resolution happen in later stages.
//!
//! ## Failure posture
//!
//! The walk fails soft: a collection or category that cannot be read is
//! skipped and the scan continues. Only an unreadable content root is fatal,
//! since then there is nothing to catalog at all.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read catalog root {root}: {source}")]
    RootUnreadable {
        root: PathBuf,
        source: std::io::Error,
    },
}

/// A candidate item directory found by the scan.
///
/// Discovery at this stage only asserts that the directory exists at the
/// right depth — whether it holds valid metadata and a cover image is
/// decided later, per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDir {
    /// Directory name, used as the item's unique id.
    pub id: String,
    /// Root-joined path to the directory.
    pub path: PathBuf,
}

/// Walk the three-level hierarchy under `root` and return every item
/// directory found, in deterministic (lexicographic) discovery order.
///
/// Discovery order is the tie-break order for every later stable sort, so
/// it must not depend on the OS's directory enumeration order.
pub fn scan(root: &Path) -> Result<Vec<ItemDir>, ScanError> {
    let collections = read_subdirs(root).map_err(|source| ScanError::RootUnreadable {
        root: root.to_path_buf(),
        source,
    })?;

    let mut items = Vec::new();
    for collection in &collections {
        let Ok(categories) = read_subdirs(collection) else {
            continue;
        };
        for category in &categories {
            let Ok(dirs) = read_subdirs(category) else {
                continue;
            };
            for dir in dirs {
                // Ids appear in cover filenames, so non-UTF-8 names could
                // never match a cover candidate anyway.
                let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                items.push(ItemDir {
                    id: name.to_string(),
                    path: dir.clone(),
                });
            }
        }
    }
    Ok(items)
}

/// Sorted subdirectories of `path`. Non-directory entries are skipped.
fn read_subdirs(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}
