//! Path utilities

use std::path::{Path, PathBuf};

use crate::error::{ScanError, ScanResult};
use crate::pipeline::FileSystem;

/// Make `root` absolute (without resolving symlinks) and require it to be a directory.
/// Records then carry absolute directory names regardless of how the root was given.
pub fn resolve_root<F: FileSystem>(fs: &F, root: &Path) -> ScanResult<PathBuf> {
    let invalid = || ScanError::InvalidRoot {
        path: root.to_path_buf(),
    };
    let root = std::path::absolute(root).map_err(|_| invalid())?;
    if !fs.is_directory(&root) {
        return Err(invalid());
    }
    Ok(root)
}
