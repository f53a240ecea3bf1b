use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".esperrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the translation tables, relative to the project root.
    #[serde(default = "default_lang_root", alias = "langDir")]
    pub lang_root: String,
    #[serde(default = "default_lang_extension")]
    pub lang_extension: String,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_call_name")]
    pub call_name: String,
    #[serde(default = "default_exemption_marker")]
    pub exemption_marker: String,
    #[serde(default = "default_patches")]
    pub patches: Vec<PatchConfig>,
}

/// One vendored file to patch once.
///
/// `target` and `sentinel` are relative to `dependency_dir`; `dependency_dir`
/// and `patch` are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchConfig {
    pub dependency_dir: String,
    pub target: String,
    pub patch: String,
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

fn default_lang_root() -> String {
    "data/lang".to_string()
}

fn default_lang_extension() -> String {
    "lang".to_string()
}

fn default_source_extensions() -> Vec<String> {
    ["cpp", "c", "h", "hpp", "ino"].map(String::from).to_vec()
}

fn default_call_name() -> String {
    "localized_string".to_string()
}

fn default_exemption_marker() -> String {
    "esper:untranslated".to_string()
}

fn default_sentinel() -> String {
    ".patching-done".to_string()
}

fn default_patches() -> Vec<PatchConfig> {
    vec![PatchConfig {
        dependency_dir: ".pio/libdeps/esp32dev/ArduinoAudioTools".to_string(),
        target: "src/AudioTools/CoreAudio/AudioHttp/HttpLineReader.h".to_string(),
        patch: "helper/patches/yield_in_linereader.patch".to_string(),
        sentinel: default_sentinel(),
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_root: default_lang_root(),
            lang_extension: default_lang_extension(),
            source_extensions: default_source_extensions(),
            ignores: Vec::new(),
            call_name: default_call_name(),
            exemption_marker: default_exemption_marker(),
            patches: default_patches(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// lookup call name is empty.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns()?;

        if self.call_name.trim().is_empty() {
            bail!("'callName' must not be empty");
        }

        // An empty marker would exempt every line.
        if self.exemption_marker.is_empty() {
            bail!("'exemptionMarker' must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignores` globs.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
