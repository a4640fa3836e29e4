// Config store: reads and writes the settings JSON file that lives next to
// the executable.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::settings::Settings;

pub const CONFIG_FILE_NAME: &str = "scp_config.json";

/// Handle to the settings file on disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ConfigStore { path: path.into() }
    }

    /// Store placed in the directory of the running executable. Falls back
    /// to the home directory, then to the current directory.
    pub fn beside_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        ConfigStore::new(dir.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings. A missing file is not an error and yields the
    /// defaults; unreadable or malformed files are reported to the caller.
    pub fn load(&self) -> Result<Settings> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };
        let settings = serde_json::from_str(&data).map_err(|source| Error::ConfigParse {
            path: self.path.display().to_string(),
            source,
        })?;
        debug!(path = %self.path.display(), "loaded settings");
        Ok(settings)
    }

    /// Write the settings as JSON indented with four spaces.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        settings.serialize(&mut ser)?;
        std::fs::write(&self.path, buf).map_err(|source| Error::ConfigWrite {
            path: self.path.display().to_string(),
            source,
        })?;
        info!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Settings {
        Settings {
            remote_ip: "10.0.0.5".into(),
            remote_user: "alice".into(),
            ssh_port: "2222".into(),
        }
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load_returns_same_settings() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());

        let odd = Settings {
            remote_ip: "".into(),
            remote_user: "bob \"quoted\"".into(),
            ssh_port: "".into(),
        };
        store.save(&odd).unwrap();
        assert_eq!(store.load().unwrap(), odd);
    }

    #[test]
    fn saved_file_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        store.save(&sample()).unwrap();
        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n    \"remote_ip\": \"10.0.0.5\","));
        assert!(text.contains("\n    \"ssh_port\": \"2222\"\n}"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();
        let store = ConfigStore::new(path);
        assert!(matches!(store.load(), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nope").join(CONFIG_FILE_NAME));
        assert!(matches!(store.save(&sample()), Err(Error::ConfigWrite { .. })));
    }
}
