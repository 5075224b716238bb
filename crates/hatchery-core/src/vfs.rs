use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_file: bool,
}

impl DirEntry {
    /// The final path component, if it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file.
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate a file and write `contents` to it.
    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// List the direct children of `root`, sorted by file name.
    /// This is NOT a recursive search.
    fn read_dir(&self, root: &Path) -> io::Result<Vec<DirEntry>>;

    fn exists(&self, path: &Path) -> bool;

    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn read_dir(&self, root: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => entries.push(DirEntry {
                    path: entry.path().to_path_buf(),
                    is_file: entry.file_type().is_file(),
                }),
                // A child that cannot be resolved (e.g. a dangling symlink) is listed
                // as a non-file; only a failure on the root itself fails the listing.
                Err(err) if err.depth() > 0 && err.path().is_some() => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    log::debug!("Unresolvable entry {:?}: {}", path, err);
                    entries.push(DirEntry {
                        path,
                        is_file: false,
                    });
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}
