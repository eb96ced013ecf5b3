//! Configuration loading and root folder resolution
//!
//! Bootstrap configuration comes from an optional TOML file. Every field has
//! a compiled default, so a missing file is a warning rather than an error.
//!
//! Root folders (resources, upload, database) resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)

use crate::env::EnvLookup;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "REMARC_CONFIG";
/// Environment variable overriding the resources root
pub const RESOURCES_ROOT_ENV_VAR: &str = "REMARC_RESOURCES_ROOT";
/// Environment variable overriding the upload root
pub const UPLOAD_ROOT_ENV_VAR: &str = "REMARC_UPLOAD_ROOT";
/// Environment variable overriding the database path
pub const DATABASE_ENV_VAR: &str = "REMARC_DATABASE";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TomlConfig {
    /// Root of the type-specific content folders
    #[serde(default)]
    pub resources_root: Option<PathBuf>,

    /// Directory tree that uploads are unpacked into
    #[serde(default)]
    pub upload_root: Option<PathBuf>,

    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Destination folder names per content kind
    #[serde(default)]
    pub folders: FolderConfig,

    /// Content URL construction
    #[serde(default)]
    pub urls: UrlConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Destination folder names, relative to the resources root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolderConfig {
    #[serde(default = "default_image_folder")]
    pub image: String,
    #[serde(default = "default_audio_folder")]
    pub audio: String,
    #[serde(default = "default_video_folder")]
    pub video: String,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            image: default_image_folder(),
            audio: default_audio_folder(),
            video: default_video_folder(),
        }
    }
}

/// Content URL configuration
///
/// The URL stored for a content file is `base + kind path + file name`, where
/// `base` is `<override> + content_dir` when the override variable named by
/// `base_url_env` is set, and `default_base_url` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UrlConfig {
    #[serde(default = "default_base_url")]
    pub default_base_url: String,
    #[serde(default = "default_base_url_env")]
    pub base_url_env: String,
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    #[serde(default = "default_image_folder_url")]
    pub image_path: String,
    #[serde(default = "default_audio_folder_url")]
    pub audio_path: String,
    #[serde(default = "default_video_folder_url")]
    pub video_path: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default_base_url: default_base_url(),
            base_url_env: default_base_url_env(),
            content_dir: default_content_dir(),
            image_path: default_image_folder_url(),
            audio_path: default_audio_folder_url(),
            video_path: default_video_folder_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr only if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_image_folder() -> String {
    "images".to_string()
}

fn default_audio_folder() -> String {
    "audio".to_string()
}

fn default_video_folder() -> String {
    "video".to_string()
}

fn default_base_url() -> String {
    "/content/".to_string()
}

fn default_base_url_env() -> String {
    "REMARC_BASE_URL".to_string()
}

fn default_content_dir() -> String {
    "content/".to_string()
}

fn default_image_folder_url() -> String {
    "images/".to_string()
}

fn default_audio_folder_url() -> String {
    "audio/".to_string()
}

fn default_video_folder_url() -> String {
    "video/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Read config {} failed: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Parse config {} failed: {}", path.display(), e))
        })
    }

    /// Load config if a file was located, otherwise fall back to defaults
    ///
    /// A located file that does not exist degrades to defaults with a warning.
    /// A file that exists but cannot be parsed is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => {
                let config = Self::load(path)?;
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Some(path) => {
                warn!(
                    "Config file {} not found, using built-in defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                info!("No config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Locate the config file
///
/// **Priority:** CLI → `REMARC_CONFIG` → platform config dir (if present)
pub fn locate_config_file(cli_arg: Option<&Path>, env: &dyn EnvLookup) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Some(path) = env.non_empty_var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|d| d.join("remarc").join("remarc.toml"))
        .filter(|p| p.exists())
}

/// Get OS-dependent default data folder
pub fn get_default_data_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/remarc (or /var/lib/remarc for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("remarc"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/remarc"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("remarc"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/remarc"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("remarc"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\remarc"))
    } else {
        PathBuf::from("./remarc_data")
    }
}

/// Resolves root folders from CLI, environment, TOML and compiled defaults
pub struct RootFolderResolver<'a> {
    env: &'a dyn EnvLookup,
    toml: &'a TomlConfig,
    default_root: PathBuf,
}

impl<'a> RootFolderResolver<'a> {
    pub fn new(env: &'a dyn EnvLookup, toml: &'a TomlConfig) -> Self {
        Self {
            env,
            toml,
            default_root: get_default_data_folder(),
        }
    }

    /// Override the compiled default data folder
    pub fn with_default_root(mut self, default_root: PathBuf) -> Self {
        self.default_root = default_root;
        self
    }

    /// Resolve the resources root (destination of relocated content)
    pub fn resources_root(&self, cli_arg: Option<&Path>) -> PathBuf {
        self.resolve(
            "resources root",
            cli_arg,
            RESOURCES_ROOT_ENV_VAR,
            self.toml.resources_root.as_deref(),
            "resources",
        )
    }

    /// Resolve the upload root (source tree for ingestion)
    pub fn upload_root(&self, cli_arg: Option<&Path>) -> PathBuf {
        self.resolve(
            "upload root",
            cli_arg,
            UPLOAD_ROOT_ENV_VAR,
            self.toml.upload_root.as_deref(),
            "upload",
        )
    }

    /// Resolve the SQLite database file path
    pub fn database_path(&self, cli_arg: Option<&Path>) -> PathBuf {
        self.resolve(
            "database",
            cli_arg,
            DATABASE_ENV_VAR,
            self.toml.database_path.as_deref(),
            "remarc.db",
        )
    }

    fn resolve(
        &self,
        what: &str,
        cli_arg: Option<&Path>,
        env_var: &str,
        toml_value: Option<&Path>,
        default_leaf: &str,
    ) -> PathBuf {
        // Priority 1: Command-line argument
        if let Some(path) = cli_arg {
            info!("{}: {} (from command line)", what, path.display());
            return path.to_path_buf();
        }

        // Priority 2: Environment variable
        if let Some(path) = self.env.non_empty_var(env_var) {
            info!("{}: {} (from {})", what, path, env_var);
            return PathBuf::from(path);
        }

        // Priority 3: TOML config file
        if let Some(path) = toml_value {
            info!("{}: {} (from config file)", what, path.display());
            return path.to_path_buf();
        }

        // Priority 4: OS-dependent compiled default
        let path = self.default_root.join(default_leaf);
        info!("{}: {} (default)", what, path.display());
        path
    }
}
