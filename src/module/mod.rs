// Wed Oct 14 2026 - Alex

pub mod binary;
pub mod image;

pub use image::ImageModule;

use crate::memory::Address;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

pub const ENGINE_LIBRARY: &str = "engine";
pub const SERVER_LIBRARY: &str = "server";

/// A loaded library the signature and vtable sections resolve against.
pub trait Module: Send + Sync {
    fn name(&self) -> &str;

    fn find_pattern(&self, pattern: &str) -> Option<Address>;

    fn find_vtable(&self, name: &str) -> Option<Address>;
}

/// Maps the `library` member of a gamedata entry to a module.
pub trait LibraryResolver {
    fn find_library(&self, name: &str) -> Option<&dyn Module>;
}

/// Process-wide library registry handed to [`crate::Config::load`].
#[derive(Default, Clone)]
pub struct GameData {
    libraries: IndexMap<String, Arc<dyn Module>>,
}

impl GameData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the two libraries every engine section expects.
    pub fn init(&mut self, engine: Arc<dyn Module>, server: Arc<dyn Module>) {
        self.insert(ENGINE_LIBRARY, engine);
        self.insert(SERVER_LIBRARY, server);
    }

    pub fn insert(&mut self, name: &str, module: Arc<dyn Module>) -> Option<Arc<dyn Module>> {
        log::debug!("Registered \"{}\" library ({})", name, module.name());
        self.libraries.insert(name.to_string(), module)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.libraries.shift_remove(name).is_some()
    }

    pub fn clear(&mut self) {
        self.libraries.clear();
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    pub fn library_names(&self) -> impl Iterator<Item = &str> {
        self.libraries.keys().map(String::as_str)
    }
}

impl LibraryResolver for GameData {
    fn find_library(&self, name: &str) -> Option<&dyn Module> {
        self.libraries.get(name).map(|module| module.as_ref())
    }
}

impl fmt::Debug for GameData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameData")
            .field("libraries", &self.libraries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> Arc<dyn Module> {
        Arc::new(ImageModule::new(name, Address::new(0x1000), vec![0; 16]))
    }

    #[test]
    fn test_init_registers_engine_and_server() {
        let mut gamedata = GameData::new();
        gamedata.init(module("libengine2.so"), module("libserver.so"));

        assert_eq!(gamedata.find_library("engine").map(|m| m.name()), Some("libengine2.so"));
        assert_eq!(gamedata.find_library("server").map(|m| m.name()), Some("libserver.so"));
        assert!(gamedata.find_library("client").is_none());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut gamedata = GameData::new();
        gamedata.insert("tier0", module("tier0.dll"));

        assert!(gamedata.remove("tier0"));
        assert!(!gamedata.remove("tier0"));

        gamedata.insert("a", module("a"));
        gamedata.insert("b", module("b"));
        assert_eq!(gamedata.library_names().collect::<Vec<_>>(), vec!["a", "b"]);

        gamedata.clear();
        assert!(gamedata.is_empty());
    }
}
