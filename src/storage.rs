// Named-file storage behind the monitor and the mailbox ("the SD card").
//
// DirStorage maps the card onto one flat host directory. Only plain file
// names are accepted; anything that could escape the directory is refused.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub size: u64,
}

pub type EntryIter = Box<dyn Iterator<Item = DirEntry> + Send>;

pub trait Storage: Send {
    fn exists(&self, name: &str) -> bool;
    fn open_read(&self, name: &str) -> io::Result<Box<dyn Read>>;
    /// Must fail with `AlreadyExists` rather than overwrite.
    fn open_write(&self, name: &str) -> io::Result<Box<dyn Write>>;
    fn delete(&self, name: &str) -> io::Result<()>;
    fn size(&self, name: &str) -> io::Result<u64>;
    /// Lazy, finite listing. Call again to restart.
    fn entries(&self) -> io::Result<EntryIter>;
}

// ─────────────────────────────────────────────────────────────────────────────
//  Host directory backend
// ─────────────────────────────────────────────────────────────────────────────

pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    /// Open (creating if needed) the directory that stands in for the card.
    pub fn open(root: &Path) -> Result<Self, String> {
        fs::create_dir_all(root)
            .map_err(|e| format!("Cannot create storage dir {}: {e}", root.display()))?;
        if !root.is_dir() {
            return Err(format!("{} is not a directory", root.display()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> io::Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("bad file name {name:?}"),
            ));
        }
        Ok(self.root.join(name))
    }
}

impl Storage for DirStorage {
    fn exists(&self, name: &str) -> bool {
        self.path(name).map(|p| p.is_file()).unwrap_or(false)
    }

    fn open_read(&self, name: &str) -> io::Result<Box<dyn Read>> {
        let f = File::open(self.path(name)?)?;
        Ok(Box::new(io::BufReader::new(f)))
    }

    fn open_write(&self, name: &str) -> io::Result<Box<dyn Write>> {
        let f = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path(name)?)?;
        Ok(Box::new(io::BufWriter::new(f)))
    }

    fn delete(&self, name: &str) -> io::Result<()> {
        fs::remove_file(self.path(name)?)
    }

    fn size(&self, name: &str) -> io::Result<u64> {
        Ok(fs::metadata(self.path(name)?)?.len())
    }

    fn entries(&self) -> io::Result<EntryIter> {
        if !self.root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is gone", self.root.display()),
            ));
        }
        let iter = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let size = e.metadata().ok()?.len();
                Some(DirEntry {
                    name: e.file_name().to_string_lossy().into_owned(),
                    size,
                })
            });
        Ok(Box::new(iter))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  In-memory backend (tests)
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub use mem::MemStorage;


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!("cerberus-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn dir_storage_round_trip() {
        let dir = scratch_dir("rt");
        let sd = DirStorage::open(&dir).unwrap();

        {
            let mut w = sd.open_write("prog.bin").unwrap();
            w.write_all(&[1, 2, 3]).unwrap();
            w.flush().unwrap();
        }
        assert!(sd.exists("prog.bin"));
        assert_eq!(sd.size("prog.bin").unwrap(), 3);

        let mut data = Vec::new();
        sd.open_read("prog.bin").unwrap().read_to_end(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3]);

        let err = sd.open_write("prog.bin").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);

        sd.delete("prog.bin").unwrap();
        assert!(!sd.exists("prog.bin"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn dir_storage_lists_files_only() {
        let dir = scratch_dir("ls");
        let sd = DirStorage::open(&dir).unwrap();
        fs::write(dir.join("b.bin"), [0u8; 5]).unwrap();
        fs::write(dir.join("a.bin"), [0u8; 2]).unwrap();
        fs::create_dir(dir.join("sub")).unwrap();

        let names: Vec<DirEntry> = sd.entries().unwrap().collect();
        assert_eq!(
            names,
            vec![
                DirEntry { name: "a.bin".into(), size: 2 },
                DirEntry { name: "b.bin".into(), size: 5 },
            ]
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn dir_storage_refuses_paths() {
        let dir = scratch_dir("esc");
        let sd = DirStorage::open(&dir).unwrap();
        assert!(!sd.exists("../etc/passwd"));
        assert!(sd.open_read("a/b").is_err());
        assert!(sd.open_write("..").is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn mem_storage_keeps_order() {
        let sd = MemStorage::new().with_file("z", b"zz").with_file("a", b"a");
        let names: Vec<String> = sd.entries().unwrap().map(|e| e.name).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
