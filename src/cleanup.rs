// this_file: fontresolve/src/cleanup.rs
//
// Removal of the temporary dependency cache entry

use crate::{installer::PackageManager, name::PackageId, Result};
use log::debug;
use std::fs;

/// Remove the package's dependency cache entry if it exists.
///
/// Returns `true` when something was removed.
pub fn remove_cache_entry<P: PackageManager + ?Sized>(
    manager: &P,
    package: &PackageId,
) -> Result<bool> {
    let entry = manager.cache_entry(package);
    if !entry.exists() {
        debug!("nothing to clean up at {}", entry.display());
        return Ok(false);
    }

    fs::remove_dir_all(&entry)?;
    debug!("removed {}", entry.display());
    Ok(true)
}
