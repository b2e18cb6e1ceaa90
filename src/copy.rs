//! File and directory copying that keeps metadata.
//!
//! Static assets and fragments are copied with their permissions and
//! access/modification times intact, so a packaged theme looks the same as
//! its sources to anything that inspects timestamps.

use std::fs::{self, FileTimes};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Copy one file, preserving permissions and timestamps.
///
/// Overwrites `dst` if it exists. Timestamps the platform cannot report are
/// left as whatever the copy produced.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    let metadata = fs::metadata(src)?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    {
        let mut reader = fs::File::open(src)?;
        let mut writer = fs::File::create(dst)?;
        io::copy(&mut reader, &mut writer)?;
        writer.set_times(times)?;
    }

    // Last, so a read-only source still yields a writable handle above.
    fs::set_permissions(dst, metadata.permissions())
}

/// Recursively copy the contents of `src` into `dst`, creating `dst`.
///
/// Symlinks inside `src` are followed, so the copy holds real files only.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src).map_err(io::Error::other)?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn copy_file_copies_contents() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.css");
        let dst = tmp.path().join("b.css");
        fs::write(&src, "* { color: red; }").unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "* { color: red; }");
    }

    #[test]
    fn copy_file_preserves_modified_time() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.css");
        let dst = tmp.path().join("b.css");
        fs::write(&src, "x").unwrap();

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        fs::File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(fs::metadata(&dst).unwrap().modified().unwrap(), past);
    }

    #[cfg(unix)]
    #[test]
    fn copy_file_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.css");
        let dst = tmp.path().join("b.css");
        fs::write(&src, "x").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o640)).unwrap();

        copy_file(&src, &dst).unwrap();
        let mode = fs::metadata(&dst).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn copy_file_handles_read_only_source() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.css");
        let dst = tmp.path().join("b.css");
        fs::write(&src, "locked").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o444)).unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "locked");
        assert!(fs::metadata(&dst).unwrap().permissions().readonly());
    }

    #[test]
    fn copy_file_overwrites() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.css");
        let dst = tmp.path().join("b.css");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "old contents").unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn copy_dir_recursive_reproduces_tree() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("accent")).unwrap();
        fs::write(src.join("gtk.css"), "root").unwrap();
        fs::write(src.join("accent/ocean.css"), "blue").unwrap();

        let dst = tmp.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(tree_snapshot(&src), tree_snapshot(&dst));
    }

    #[test]
    fn copy_dir_recursive_missing_source_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = copy_dir_recursive(&tmp.path().join("nope"), &tmp.path().join("dst"));
        assert!(result.is_err());
    }
}
