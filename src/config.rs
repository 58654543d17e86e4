use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use component_for_applet::catalog::{Catalog, Template};

const CONFIG_FILE: &str = ".component-for-applet.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) templates: IndexMap<String, TemplateConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TemplateConfig {
    #[serde(default)]
    pub(crate) description: String,
    pub(crate) path: PathBuf, // relative to the config file
}

impl Config {
    /// Reads `~/.component-for-applet.toml` when present. The file is never created.
    pub(crate) fn init() -> Result<Self> {
        match home::home_dir() {
            Some(home) => Self::load(home.join(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    pub(crate) fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .context(format!("failed to read config: '{}'", path.display()))?;
        let mut config = toml::from_str::<Self>(&contents)
            .context(format!("failed to parse config: '{}'", path.display()))?;

        let root = path.parent().unwrap_or_else(|| Path::new("."));
        for template in config.templates.values_mut() {
            if template.path.is_relative() {
                template.path = root.join(&template.path);
            }
        }
        Ok(config)
    }

    /// Bundled templates followed by the configured ones.
    pub(crate) fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::bundled();
        for (name, template) in &self.templates {
            catalog.insert(Template::local(
                name,
                &template.description,
                &template.path,
            ));
        }
        catalog
    }
}
