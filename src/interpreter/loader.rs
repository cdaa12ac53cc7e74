//! Script loader - YAML file loading and parsing

use super::script::Script;
use super::types::ScriptDefinition;
use crate::error::{CarnageError, ScriptError};
use std::fs;
use std::path::Path;

/// Loads command scripts from YAML files
pub struct ScriptLoader;

impl ScriptLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and compile a script from a YAML file
    pub fn load_script<P: AsRef<Path>>(&self, path: P) -> Result<Script, CarnageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScriptError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)?;
        log::info!("Loading script from {}", path.display());
        Ok(Script::compile(Self::parse_yaml(&content)?)?)
    }

    /// Parse a script definition from a YAML string
    pub fn parse_yaml(content: &str) -> Result<ScriptDefinition, CarnageError> {
        let def: ScriptDefinition = serde_yaml::from_str(content)?;
        Ok(def)
    }
}

impl Default for ScriptLoader {
    fn default() -> Self {
        Self::new()
    }
}
