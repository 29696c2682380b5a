use crate::error::{LoanError, Result};
use crate::types::config::LoanscoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "loanscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".loanscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/loanscore/config.toml";

/// Sections and keys a config layer may set.
const SECTIONS: &[(&str, &[&str])] = &[
    ("history", &["dir"]),
    ("calculator", &["annual_rate"]),
    ("scoring", &["seed"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Global,
    Repo,
    Local,
}

impl Layer {
    fn label(self) -> &'static str {
        match self {
            Layer::Global => "global",
            Layer::Repo => "repo",
            Layer::Local => "local",
        }
    }
}

pub fn load_config(root: &Path) -> Result<Option<LoanscoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Loads `loanscore.toml` from `root`, layered over the global file and under
/// `.loanscore/local.toml`. Without the repo file there is no config at all.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<LoanscoreConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let mut layers: Vec<(Layer, &Path)> = Vec::with_capacity(3);
    if let Some(path) = global_path {
        layers.push((Layer::Global, path));
    }
    layers.push((Layer::Repo, repo_path.as_path()));
    layers.push((Layer::Local, local_path.as_path()));

    let mut merged = Map::new();
    for (layer, path) in layers {
        if !path.exists() {
            continue;
        }
        let sections = read_sections(path)?;
        debug!(layer = layer.label(), path = %path.display(), "applying config layer");
        apply_sections(&mut merged, sections);
    }

    let cfg: LoanscoreConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| LoanError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_sections(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content)
        .map_err(|e| LoanError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    let Value::Table(table) = value else {
        return Err(LoanError::ConfigParse(format!(
            "{}: expected a table of sections",
            path.display()
        )));
    };
    check_sections(path, &table)?;
    Ok(table)
}

fn check_sections(path: &Path, table: &Map<String, Value>) -> Result<()> {
    for (name, value) in table {
        let Some((_, keys)) = SECTIONS
            .iter()
            .find(|(section, _)| *section == name.as_str())
        else {
            return Err(LoanError::ConfigParse(format!(
                "{}: unknown section [{name}]",
                path.display()
            )));
        };
        let Value::Table(entries) = value else {
            return Err(LoanError::ConfigParse(format!(
                "{}: [{name}] must be a table",
                path.display()
            )));
        };
        if let Some(key) = entries.keys().find(|key| !keys.contains(&key.as_str())) {
            return Err(LoanError::ConfigParse(format!(
                "{}: unknown key {name}.{key}",
                path.display()
            )));
        }
    }
    Ok(())
}

/// Later layers replace individual keys; untouched keys keep earlier values.
fn apply_sections(merged: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (name, value) in overlay {
        let Value::Table(entries) = value else {
            continue;
        };
        match merged.get_mut(&name) {
            Some(Value::Table(existing)) => {
                for (key, entry) in entries {
                    existing.insert(key, entry);
                }
            }
            _ => {
                merged.insert(name, Value::Table(entries));
            }
        }
    }
}
