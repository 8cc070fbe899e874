// Wed Oct 14 2026 - Alex

use crate::platform::{Engine, KeyScheme, Platform};
use serde::{Deserialize, Serialize};

/// Which slice of a gamedata document a [`crate::Config`] resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub platform: Platform,
    pub engine: Engine,
    pub key_scheme: KeyScheme,
    pub max_action_depth: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            engine: Engine::current(),
            key_scheme: KeyScheme::default(),
            max_action_depth: 32,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_key_scheme(mut self, key_scheme: KeyScheme) -> Self {
        self.key_scheme = key_scheme;
        self
    }

    pub fn with_max_action_depth(mut self, depth: usize) -> Self {
        self.max_action_depth = depth;
        self
    }

    /// Selector string of the configured platform.
    pub fn platform_key(&self) -> &'static str {
        self.platform.key(self.key_scheme)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_action_depth == 0 {
            return Err("max_action_depth must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_this_build() {
        let options = LoadOptions::default();
        assert_eq!(options.platform, Platform::current());
        assert_eq!(options.engine, Engine::current());
        assert_eq!(options.key_scheme, KeyScheme::SteamRuntime);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let options = LoadOptions::new()
            .with_platform(Platform::Windows64)
            .with_engine(Engine::Dota)
            .with_key_scheme(KeyScheme::Legacy);

        assert_eq!(options.platform_key(), "windows64");
        assert_eq!(options.engine, Engine::Dota);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        assert!(LoadOptions::new().with_max_action_depth(0).validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options =
            LoadOptions::from_json_str(r#"{ "platform": "linux64", "key_scheme": "legacy" }"#)
                .unwrap();
        assert_eq!(options.platform, Platform::Linux64);
        assert_eq!(options.key_scheme, KeyScheme::Legacy);
        assert_eq!(options.engine, Engine::current());
        assert_eq!(options.max_action_depth, 32);

        let text = options.to_json_string().unwrap();
        assert_eq!(LoadOptions::from_json_str(&text).unwrap(), options);
    }
}
