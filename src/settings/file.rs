use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{SettingsError, SettingsStore};

/// Settings persisted as a flat TOML table.
///
/// Values this store writes are strings. Other entries keep whatever TOML
/// type they were written with, and reading one of them yields `None`.
/// Writes hold an exclusive lock on a sidecar `.lock` file and replace the
/// settings file via temp file + rename, so readers never see a partial write.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, SettingsError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SettingsError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn sidecar(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    /// Replace the settings file with `content` via a temp file. The temp
    /// file never outlives a failed write.
    fn commit(&self, content: &[u8]) -> Result<(), SettingsError> {
        let tmp_path = self.sidecar(".tmp");
        replace_via(&tmp_path, &self.path, content).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            self.write_err(e)
        })
    }

    fn write_err(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self
            .read_table()?
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_owned))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
            }
        }

        let lock_path = self.sidecar(".lock");
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| self.write_err(e))?;
        lock.lock_exclusive().map_err(|e| SettingsError::Lock {
            path: lock_path.clone(),
            source: e,
        })?;

        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        let content = toml::to_string(&table)?;

        self.commit(content.as_bytes())?;

        let _ = FileExt::unlock(&lock);
        tracing::debug!(path = %self.path.display(), key, "settings written");
        Ok(())
    }
}

/// Write `content` to `tmp_path`, then rename it over `path`.
fn replace_via(tmp_path: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut tmp = File::create(tmp_path)?;
    tmp.write_all(content)?;
    tmp.sync_all()?;
    drop(tmp);
    fs::rename(tmp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let settings = FileSettings::new(dir.path().join("settings.toml"));
        assert_eq!(settings.get("groceryItems").unwrap(), None);
    }

    #[test]
    fn set_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut settings = FileSettings::new(&path);
        settings.set("k", "v").unwrap();
        assert!(path.exists());
        assert_eq!(settings.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn set_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "selectedHat = \"beret\"\n").unwrap();

        let mut settings = FileSettings::new(&path);
        settings.set("groceryItems", "[]").unwrap();

        assert_eq!(
            settings.get("selectedHat").unwrap().as_deref(),
            Some("beret")
        );
        assert_eq!(settings.get("groceryItems").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn corrupt_file_is_parse_error_and_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let mut settings = FileSettings::new(&path);
        assert!(matches!(
            settings.get("k"),
            Err(SettingsError::Parse { .. })
        ));
        assert!(settings.set("k", "v").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not = [valid");
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        let mut settings = FileSettings::new(&path);
        settings.set("k", "v").unwrap();
        assert!(!dir.path().join("settings.toml.tmp").exists());
    }

    #[test]
    fn typed_neighbour_keys_survive_reads_and_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        let mut settings = FileSettings::new(&path);
        settings.set("groceryItems", "[1]").unwrap();

        let mut content = std::fs::read_to_string(&path).unwrap();
        content.push_str("showingAllItems = true\nselectedHat = 3\n");
        std::fs::write(&path, content).unwrap();

        assert_eq!(settings.get("groceryItems").unwrap().as_deref(), Some("[1]"));
        assert_eq!(settings.get("showingAllItems").unwrap(), None);

        settings.set("groceryItems", "[1,2]").unwrap();
        assert_eq!(
            settings.get("groceryItems").unwrap().as_deref(),
            Some("[1,2]")
        );

        let table: toml::Table = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(table["showingAllItems"].as_bool(), Some(true));
        assert_eq!(table["selectedHat"].as_integer(), Some(3));
    }

    #[test]
    fn failed_commit_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        // A non-empty directory at the target path makes the rename fail
        std::fs::create_dir_all(path.join("occupied")).unwrap();

        let settings = FileSettings::new(&path);
        assert!(matches!(
            settings.commit(b"k = \"v\"\n"),
            Err(SettingsError::Write { .. })
        ));
        assert!(!dir.path().join("settings.toml.tmp").exists());
        assert!(path.join("occupied").is_dir());
    }
}
