use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use hocon::{Hocon, HoconLoader};
use log::debug;

/// Reads settings from a HOCON file.
///
/// Lookups check, in order: an environment variable named after the upper cased key, the
/// key inside `scope`, then the key at the top level of the file.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
    dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let env = std::env::vars().collect::<HashMap<_, _>>();

        Self::with_env(path, scope, env)
    }

    pub fn with_env(
        path: impl AsRef<Path>,
        scope: String,
        env: HashMap<String, String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(anyhow!("The config file {:?} was not found", path));
        }

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()
            .with_context(|| format!("Failed to parse config file at: {:?}", path))?;

        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        debug!("Loaded config {:?} with scope {}", path, scope);

        Ok(Self {
            hocon,
            env,
            scope,
            dir,
        })
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(&name.to_uppercase()) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    /// Resolves a path setting against the directory holding the config file.
    pub fn get_relative_path(&self, name: &str) -> Result<PathBuf> {
        let value = self
            .get(name)
            .and_then(|v| v.as_string())
            .ok_or_else(|| anyhow!("Missing config value: {}", name))?;

        Ok(self.dir.join(value))
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        let res = T::load(self)?;
        Ok(res)
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(Value::Float(*f64 as f32)),
            Hocon::Integer(i64) => Some(Value::Integer(*i64)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => Hocon::String(val.clone()).as_bool(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => usize::try_from(*val).ok(),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(val) => i32::try_from(*val).ok(),
            Value::String(val) => val.parse::<i32>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(true) => Some("true".to_string()),
            Value::Boolean(false) => Some("false".to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONF: &str = r#"
        output_path = "top.jsonl"
        batch {
            snapshots_dir = "states"
            limit = 25
            fail_fast = false
        }
    "#;

    fn loader(env: &[(&str, &str)]) -> (tempfile::TempDir, ConfigLoader) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.conf");
        std::fs::write(&path, CONF).unwrap();

        let env = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let loader = ConfigLoader::with_env(&path, "batch".to_string(), env).unwrap();

        (dir, loader)
    }

    #[test]
    fn test_get_prefers_scope_then_top_level() {
        let (_dir, config) = loader(&[]);

        assert_eq!(config.get("limit").and_then(|v| v.as_usize()), Some(25));
        assert_eq!(config.get("fail_fast").and_then(|v| v.as_bool()), Some(false));
        assert_eq!(
            config.get("output_path").and_then(|v| v.as_string()),
            Some("top.jsonl".to_string())
        );
        assert_eq!(config.get("missing"), None);
    }

    #[test]
    fn test_env_overrides_file() {
        let (_dir, config) = loader(&[("LIMIT", "3"), ("FAIL_FAST", "true")]);

        assert_eq!(config.get("limit").and_then(|v| v.as_usize()), Some(3));
        assert_eq!(config.get("fail_fast").and_then(|v| v.as_bool()), Some(true));
    }

    #[test]
    fn test_get_relative_path_uses_config_dir() {
        let (dir, config) = loader(&[]);

        assert_eq!(
            config.get_relative_path("snapshots_dir").unwrap(),
            dir.path().join("states")
        );
        assert!(config.get_relative_path("missing_dir").is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = ConfigLoader::new(dir.path().join("nope.conf"), "batch".to_string()).unwrap_err();

        assert!(err.to_string().contains("was not found"));
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::Integer(-4).as_usize(), None);
        assert_eq!(Value::Integer(-4).as_i32(), Some(-4));
        assert_eq!(Value::String("12".to_string()).as_i32(), Some(12));
        assert_eq!(Value::Boolean(true).as_string(), Some("true".to_string()));
    }
}
