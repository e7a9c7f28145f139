use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ScError, ScResult};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    pub plot_file_name: String,
    pub merged_file_name: String,
    pub plot_width: u32,
    pub plot_height: u32,

    /// TrueType font used for plot text; system fonts are searched when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("task3_output"),
            plot_file_name: "sentiment_vs_return.png".to_string(),
            merged_file_name: "merged_output.csv".to_string(),
            plot_width: 800,
            plot_height: 600,
            font_path: None,
        }
    }
}

impl Config {
    /// Loads `path`, else the user config file if one exists, else defaults.
    pub fn load(path: Option<&Path>) -> ScResult<Self> {
        if let Some(path) = path {
            debug!("Loading config from {}", path.to_string_lossy());
            return Self::from_file(path);
        }

        if let Some(path) = default_path() {
            if path.is_file() {
                debug!("Loading config from {}", path.to_string_lossy());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> ScResult<Self> {
        if !path.is_file() {
            return Err(ScError::NotExists {
                code: "CONFIG_NOT_FOUND",
                message: format!("Config file '{}' does not exist", path.to_string_lossy()),
            });
        }

        confy::load_path(path).map_err(Into::into)
    }

    pub fn merged_path(&self) -> PathBuf {
        self.output_dir.join(&self.merged_file_name)
    }

    pub fn plot_path(&self) -> PathBuf {
        self.output_dir.join(&self.plot_file_name)
    }
}

fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();

        assert_eq!(
            config.plot_path(),
            Path::new("task3_output").join("sentiment_vs_return.png")
        );
        assert_eq!(
            config.merged_path(),
            Path::new("task3_output").join("merged_output.csv")
        );
    }

    #[test]
    fn test_from_file() {
        let dir = env::temp_dir().join(format!("sentcorr-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "output_dir = \"reports\"\nplot_width = 1024\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.plot_width, 1024);
        assert_eq!(config.plot_height, 600);
        assert_eq!(config.merged_file_name, "merged_output.csv");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/sentcorr.toml")));

        assert_eq!(result.unwrap_err().code(), Some("CONFIG_NOT_FOUND"));
    }
}
