//! Traversal settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Local config: a file passed to [`Settings::load`]
//! 4. Environment variables: `BINTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

/// How the depth-first orders are computed by [`Tree::traverse`](crate::tree::Tree::traverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Structural recursion; stack use grows with tree height.
    #[default]
    Recursive,
    /// Explicit-stack iterators; constant call-stack use.
    Iterative,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

impl FromStr for Strategy {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "iterative" => Ok(Strategy::Iterative),
            other => Err(TreeError::Config {
                message: format!("unknown strategy: {}", other),
            }),
        }
    }
}

/// Effective traversal settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Trees taller than this are refused by checked traversals; `None` means unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Strategy for preorder, inorder and postorder
    pub strategy: Strategy,
}

/// Raw settings for intermediate parsing.
///
/// `None` means the field was not specified and the lower layer is kept.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    max_depth: Option<usize>,
    strategy: Option<Strategy>,
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

fn load_raw_settings(path: &Path) -> TreeResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| TreeError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| TreeError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_depth: overlay.max_depth.or(self.max_depth),
            strategy: overlay.strategy.unwrap_or(self.strategy),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional settings file; unlike the global file it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
    /// 3. Local config file
    /// 4. Environment variables: `BINTREE_MAX_DEPTH`, `BINTREE_STRATEGY`
    pub fn load(local: Option<&Path>) -> TreeResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = local {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply BINTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> TreeResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("BINTREE"))
            .build()
            .map_err(config_err)?;
        Self::apply_overrides(settings, &config)
    }

    fn apply_overrides(mut settings: Self, config: &Config) -> TreeResult<Self> {
        if let Ok(val) = config.get_string("max_depth") {
            let depth = val.trim().parse::<usize>().map_err(|e| TreeError::Config {
                message: format!("max_depth '{}': {}", val, e),
            })?;
            settings.max_depth = Some(depth);
        }
        if let Ok(val) = config.get_string("strategy") {
            settings.strategy = val.parse()?;
        }
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bintree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: $XDG_CONFIG_HOME/bintree/bintree.toml
#   Local:  file passed to Settings::load
#   Env:    BINTREE_MAX_DEPTH, BINTREE_STRATEGY

# Refuse checked traversals of trees taller than this
# max_depth = 10000

# "recursive" or "iterative"
# strategy = "recursive"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}
