use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::component::COMPONENTS_DIR;
use crate::naming;
use crate::utils::{Error, Result};

pub const APP_JSON: &str = "app.json";
pub const USING_COMPONENTS: &str = "usingComponents";

/// A `usingComponents` entry added to `app.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub key: String,
    pub path: String,
    pub manifest: PathBuf,
}

/// Registers `<dest>/components/<name>` in `<dest>/app.json` under the
/// kebab-case form of `name`.
///
/// The file is rewritten in full, with 2-space indentation, only when every
/// check passed.
pub fn register(dest: impl AsRef<Path>, name: &str) -> Result<Registration> {
    let key = naming::kebab(name);
    let manifest = dest.as_ref().join(APP_JSON);
    fs::metadata(&manifest).map_err(|source| Error::ConfigMissing {
        path: manifest.clone(),
        source,
    })?;

    let contents = fs::read_to_string(&manifest)?;
    let mut config = serde_json::from_str::<Value>(&contents).map_err(|source| {
        Error::ConfigParse {
            path: manifest.clone(),
            source,
        }
    })?;

    let path = format!("{COMPONENTS_DIR}/{name}");
    insert_component(&mut config, &key, &path)?;

    fs::write(&manifest, serde_json::to_string_pretty(&config)?)?;
    Ok(Registration {
        key,
        path,
        manifest,
    })
}

/// Adds `key: path` to the `usingComponents` object of `config`, creating
/// the object when it is absent or `null`.
pub fn insert_component(config: &mut Value, key: &str, path: &str) -> Result<()> {
    let shape = |what| Error::ConfigShape { what };
    let root = config.as_object_mut().ok_or_else(|| shape("the top-level value"))?;
    let using = root
        .entry(USING_COMPONENTS)
        .or_insert_with(|| Value::Object(Map::new()));
    if using.is_null() {
        *using = Value::Object(Map::new());
    }
    let using = using
        .as_object_mut()
        .ok_or_else(|| shape(USING_COMPONENTS))?;

    if using.contains_key(key) {
        return Err(Error::ConfigKeyConflict {
            key: key.to_string(),
        });
    }
    using.insert(key.to_string(), Value::String(path.to_string()));
    Ok(())
}
