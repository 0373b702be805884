//! Configuration loading and root folder resolution
//!
//! Every setting is resolved in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing or malformed TOML file never prevents startup: a warning is
//! logged and the compiled defaults are used instead.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the root folder
pub const ENV_ROOT_FOLDER: &str = "FIP_ROOT_FOLDER";
/// Environment variable overriding the listen host
pub const ENV_HOST: &str = "FIP_HOST";
/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "FIP_PORT";

/// Database file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "feedback.db";

/// Compiled defaults used when no other source provides a value
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
}

impl CompiledDefaults {
    /// Defaults for the platform this binary was compiled for
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            host: "127.0.0.1".to_string(),
            port: 8001,
            log_level: "info".to_string(),
            // Vite dev server used by the web client
            cors_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/fip (or /var/lib/fip for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("fip"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/fip"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/fip
        dirs::data_dir()
            .map(|d| d.join("fip"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/fip"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\fip
        dirs::data_local_dir()
            .map(|d| d.join("fip"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\fip"))
    } else {
        PathBuf::from("./fip_data")
    }
}

/// `[server]` section of the TOML config
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub cors_origins: Option<Vec<String>>,
}

/// `[logging]` section of the TOML config
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// tracing filter level ("trace", "debug", "info", "warn", "error")
    #[serde(default)]
    pub level: Option<String>,
}

/// On-disk TOML configuration
///
/// Every field is optional so that partial files stay valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TomlConfig {
    #[serde(default)]
    pub root_folder: Option<PathBuf>,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default TOML config location for a module: `~/.config/fip/<module>.toml`
pub fn default_config_path(module_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fip").join(format!("{}.toml", module_name)))
}

/// Load and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))
}

/// Load a TOML config file, falling back to defaults on any problem
///
/// A missing file is expected on first run and only logged at info level;
/// an unreadable or malformed file is logged as a warning.
pub fn load_toml_config_or_default(path: Option<&Path>) -> TomlConfig {
    let Some(path) = path else {
        info!("No config file location available, using compiled defaults");
        return TomlConfig::default();
    };

    if !path.exists() {
        info!("Config file not found at {}, using defaults", path.display());
        return TomlConfig::default();
    }

    match load_toml_config(path) {
        Ok(config) => {
            info!("Loaded config file: {}", path.display());
            config
        }
        Err(e) => {
            warn!("{} - continuing with compiled defaults", e);
            TomlConfig::default()
        }
    }
}

/// Resolves the root folder from CLI → ENV → TOML → compiled default
#[derive(Debug, Clone)]
pub struct RootFolderResolver {
    module_name: String,
    cli_arg: Option<PathBuf>,
    toml_root: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            cli_arg: None,
            toml_root: None,
        }
    }

    /// Command-line override (priority 1)
    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    /// Root folder from an already loaded TOML config (priority 3)
    pub fn with_toml(mut self, config: &TomlConfig) -> Self {
        self.toml_root = config.root_folder.clone();
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            info!("[{}] Root folder from command line: {}", self.module_name, path.display());
            return path.clone();
        }

        if let Ok(path) = std::env::var(ENV_ROOT_FOLDER) {
            if !path.trim().is_empty() {
                info!("[{}] Root folder from {}: {}", self.module_name, ENV_ROOT_FOLDER, path);
                return PathBuf::from(path);
            }
        }

        if let Some(path) = &self.toml_root {
            info!("[{}] Root folder from TOML config: {}", self.module_name, path.display());
            return path.clone();
        }

        let path = CompiledDefaults::for_current_platform().root_folder;
        info!("[{}] Root folder from compiled default: {}", self.module_name, path.display());
        path
    }
}

/// Creates the root folder and locates the database inside it
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    /// Create the root folder (and parents) if missing
    pub fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_folder.exists() {
            std::fs::create_dir_all(&self.root_folder)?;
            info!("Created root folder: {}", self.root_folder.display());
        }
        Ok(())
    }

    pub fn root_folder(&self) -> &Path {
        &self.root_folder
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE_NAME)
    }
}

/// Command-line overrides, already parsed by the binary
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root_folder: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved settings for the HTTP service
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub root_folder: PathBuf,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl ServerSettings {
    /// Resolve every setting in CLI → ENV → TOML → default order
    ///
    /// # Errors
    /// Returns `Error::Config` if `FIP_PORT` is set but is not a valid port.
    pub fn resolve(module_name: &str, cli: &CliOverrides, toml: &TomlConfig) -> Result<Self> {
        let defaults = CompiledDefaults::for_current_platform();

        let root_folder = RootFolderResolver::new(module_name)
            .with_cli_arg(cli.root_folder.clone())
            .with_toml(toml)
            .resolve();

        let host = cli
            .host
            .clone()
            .or_else(|| non_empty_env(ENV_HOST))
            .or_else(|| toml.server.host.clone())
            .unwrap_or(defaults.host);

        let env_port = match non_empty_env(ENV_PORT) {
            Some(value) => Some(value.trim().parse::<u16>().map_err(|_| {
                Error::Config(format!("{} must be a port number, got '{}'", ENV_PORT, value))
            })?),
            None => None,
        };

        let port = cli
            .port
            .or(env_port)
            .or(toml.server.port)
            .unwrap_or(defaults.port);

        let cors_origins = toml
            .server
            .cors_origins
            .clone()
            .unwrap_or(defaults.cors_origins);

        let log_level = toml.logging.level.clone().unwrap_or(defaults.log_level);

        Ok(Self {
            root_folder,
            host,
            port,
            cors_origins,
            log_level,
        })
    }

    /// `host:port` string for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
