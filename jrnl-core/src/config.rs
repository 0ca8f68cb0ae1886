use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

pub const DEFAULT_JOURNAL_FILE: &str = "journal.json";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct Config {
    /// The storage document. Relative paths resolve against the working directory.
    pub journal_file: PathBuf,
    /// chrono format used to stamp new entries. Default is `%Y-%m-%d %H:%M:%S`.
    pub date_format: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_file: Option<PathBuf>,
    date_format: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A config file that cannot be read or parsed is ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    /// Replaces the storage document path, eg. from a command line flag.
    pub fn with_journal_file(mut self, journal_file: Option<PathBuf>) -> Self {
        if let Some(path) = journal_file {
            self.journal_file = path;
        }
        self
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let journal_file = file_config
            .journal_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JOURNAL_FILE));

        let date_format = match file_config.date_format {
            Some(format) if Self::is_valid_date_format(&format) => format,
            Some(format) => {
                warn!("invalid date_format `{format}`, using `{DEFAULT_DATE_FORMAT}`");
                DEFAULT_DATE_FORMAT.to_string()
            }
            None => DEFAULT_DATE_FORMAT.to_string(),
        };

        Self {
            journal_file,
            date_format,
        }
    }

    fn is_valid_date_format(format: &str) -> bool {
        !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("jrnl").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("jrnl").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}
