use crate::error::{Result, SoilCheckError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_FILE: &str = "nasa_soil_moisture_data.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "soil_moisture_output.csv";
pub const DATA_DIR_ENV: &str = "SOILCHECK_DATA_DIR";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesConfig {
    /// Directory holding the input and output files.
    /// Defaults to the parent of the working directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_input_file() -> String {
    DEFAULT_INPUT_FILE.into()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.into()
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            input_file: default_input_file(),
            output_file: default_output_file(),
        }
    }
}

/// Resolved input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Load configuration from `config_override`, or from the first standard
    /// location that exists. With no file anywhere, the built-in defaults apply.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(SoilCheckError::Config(format!(
                    "Config file not found at {:?}",
                    p
                )));
            }
            Some(p) => p.to_path_buf(),
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::info!("Loading configuration from {}", config_path.display());

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SoilCheckError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    /// Parse YAML text, substituting `${VAR}` references from the environment first.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| SoilCheckError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Search for a config file in the working directory, then the XDG config directory.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/soilcheck.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("soilcheck").join("config.yaml"))
            .filter(|p| p.exists())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    /// Resolve the data directory: CLI override, then `SOILCHECK_DATA_DIR`,
    /// then the config file, then the parent of the working directory.
    pub fn data_dir(&self, data_dir_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = data_dir_override {
            return Ok(dir.to_path_buf());
        }

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        if let Some(ref dir) = self.files.data_dir {
            return Ok(dir.clone());
        }

        let cwd = std::env::current_dir()?;
        Ok(parent_or_self(&cwd))
    }

    /// Build input and output paths inside the resolved data directory.
    /// File name overrides replace the configured names.
    pub fn resolve_paths(
        &self,
        data_dir_override: Option<&Path>,
        input_override: Option<&str>,
        output_override: Option<&str>,
    ) -> Result<DataPaths> {
        let data_dir = self.data_dir(data_dir_override)?;
        let input = data_dir.join(input_override.unwrap_or(self.files.input_file.as_str()));
        let output = data_dir.join(output_override.unwrap_or(self.files.output_file.as_str()));

        Ok(DataPaths {
            data_dir,
            input,
            output,
        })
    }
}

fn parent_or_self(dir: &Path) -> PathBuf {
    dir.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf())
}
