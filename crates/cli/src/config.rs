//! CLI configuration from the environment.
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the content directory.
pub const DATA_DIR_ENV: &str = "LOADOUT_DATA_DIR";

const ITEMS_FILE: &str = build_content::ContentFactory::ITEMS_FILE;

/// Where the CLI finds its content.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LOADOUT_DATA_DIR` - directory holding `items.ron` and `config.toml`
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os(DATA_DIR_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }

    /// A `--data-dir` flag takes precedence over the environment.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }

    /// Resolves the content directory: explicit setting, then the platform
    /// data directory when it holds a catalog, then `./data`.
    pub fn data_dir(&self) -> PathBuf {
        let platform = directories::ProjectDirs::from("", "", "loadout")
            .map(|dirs| dirs.data_dir().to_path_buf());
        pick_data_dir(self.data_dir.as_deref(), platform.as_deref())
    }
}

fn pick_data_dir(explicit: Option<&Path>, platform: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match platform {
        Some(dir) if dir.join(ITEMS_FILE).is_file() => dir.to_path_buf(),
        _ => PathBuf::from("./data"),
    }
}
