//! Recursive discovery of dependency archives in a source tree.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::collections::BTreeSet;
use std::io;

/// Collects every regular file under `root` whose name ends with
/// `extension`, compared case-insensitively.
///
/// Returned paths are `root` joined with the path of the archive inside the
/// tree. Symbolic links are not followed.
///
/// # Errors
///
/// Returns the I/O error raised while opening or listing a directory.
pub fn collect_dependency_archives(
    root: &Utf8Path,
    extension: &str,
) -> io::Result<BTreeSet<Utf8PathBuf>> {
    let dir = Dir::open_ambient_dir(root, ambient_authority())?;
    let mut archives = BTreeSet::new();
    collect_into(&dir, root, &extension.to_ascii_lowercase(), &mut archives)?;
    Ok(archives)
}

fn collect_into(
    dir: &Dir,
    path: &Utf8Path,
    extension: &str,
    archives: &mut BTreeSet<Utf8PathBuf>,
) -> io::Result<()> {
    for entry_result in dir.entries()? {
        let entry = entry_result?;
        let name = entry.file_name()?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            let child = entry.open_dir()?;
            collect_into(&child, &path.join(&name), extension, archives)?;
        } else if file_type.is_file() && name.to_ascii_lowercase().ends_with(extension) {
            archives.insert(path.join(&name));
        }
    }
    Ok(())
}
