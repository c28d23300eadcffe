//! Entry filtering against an ignore list.
//!
//! Directories are always dropped: they are walked for traversal but never
//! stored as archive entries. Every other entry is dropped if it is the file
//! the ignore list was loaded from, or if any ignore pattern matches it (see
//! [`IgnorePattern::matches`] for the rules).
//!
//! [`IgnorePattern::matches`]: crate::creation::ignore::IgnorePattern::matches

use crate::Result;
use crate::creation::ignore::IgnoreList;
use crate::creation::walker::Entry;
use std::fs;

/// Returns the entries that should be archived, in their original order.
///
/// Each entry's metadata is read again here, following symlinks, so a
/// symlink to a directory is treated as a directory.
///
/// # Examples
///
/// ```no_run
/// use zipproject_core::creation::filters::filter_entries;
/// use zipproject_core::creation::ignore::IgnoreList;
/// use zipproject_core::creation::walker::enumerate_entries;
///
/// let entries = enumerate_entries("./project")?;
/// let ignore = IgnoreList::from_patterns(["*.log", "target"]);
/// let kept = filter_entries(&entries, &ignore)?;
/// # Ok::<(), zipproject_core::ZipProjectError>(())
/// ```
///
/// # Errors
///
/// Returns an error if an entry's metadata cannot be read, e.g. it vanished
/// after enumeration or is a dangling symlink.
pub fn filter_entries(entries: &[Entry], ignore: &IgnoreList) -> Result<Vec<Entry>> {
    let mut kept = Vec::with_capacity(entries.len());

    for entry in entries {
        let metadata = fs::metadata(&entry.path)?;
        if metadata.is_dir() {
            continue;
        }

        if ignore.is_source_file(&entry.path) {
            log::trace!("skipping {} (ignore file)", entry.path.display());
            continue;
        }

        if is_ignored(entry, metadata.is_dir(), ignore) {
            continue;
        }

        kept.push(entry.clone());
    }

    log::debug!(
        "kept {} of {} entries after filtering",
        kept.len(),
        entries.len()
    );
    Ok(kept)
}

/// Checks whether any ignore pattern matches the entry.
///
/// # Examples
///
/// ```
/// use zipproject_core::creation::filters::is_ignored;
/// use zipproject_core::creation::ignore::IgnoreList;
/// use zipproject_core::creation::walker::Entry;
///
/// let ignore = IgnoreList::from_patterns(["*.log"]);
/// assert!(is_ignored(&Entry::new("a.log", false), false, &ignore));
/// assert!(!is_ignored(&Entry::new("a.txt", false), false, &ignore));
/// ```
#[must_use]
pub fn is_ignored(entry: &Entry, is_dir: bool, ignore: &IgnoreList) -> bool {
    let path = entry.path.to_string_lossy();
    let name = entry.name();

    match ignore.first_match(&path, name.as_deref(), is_dir) {
        Some(pattern) => {
            log::trace!(
                "skipping {} (pattern {:?}, {:?})",
                path,
                pattern.as_str(),
                pattern.kind()
            );
            true
        }
        None => false,
    }
}
