// Wed Oct 14 2026 - Alex

use crate::config::Config;
use crate::document::Node;
use crate::error::GameDataError;
use crate::loader::{find_library, load_entries, platform_member, report, LoadContext};
use crate::memory::Address;

pub fn load(
    config: &mut Config,
    ctx: LoadContext<'_>,
    section: &Node,
    messages: &mut Vec<String>,
) -> bool {
    load_entries(section, messages, |name, entry, messages| {
        match resolve(config, ctx, name, entry) {
            Ok(address) => {
                log::debug!("Signature \"{}\" found at {}", name, address);
                let symbol = config.symbols.intern(name);
                config.addresses.set(symbol, address);
                true
            }
            Err(err) => report(messages, err),
        }
    })
}

fn resolve(
    config: &Config,
    ctx: LoadContext<'_>,
    name: &str,
    entry: &Node,
) -> Result<Address, GameDataError> {
    let module = find_library(ctx.libraries, name, entry)?;
    let pattern = platform_member(&config.options, name, entry)?;

    module
        .find_pattern(pattern.get_string(""))
        .ok_or_else(|| GameDataError::PatternNotFound { entry: name.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{GameData, ImageModule};
    use crate::options::LoadOptions;
    use serde_json::json;
    use std::sync::Arc;

    fn libraries() -> GameData {
        let mut image = vec![0x90; 0x20];
        image[0x08..0x0B].copy_from_slice(&[0xE8, 0x11, 0x22]);

        let mut gamedata = GameData::new();
        let server = ImageModule::new("libserver.so", Address::new(0x4000), image);
        gamedata.insert("server", Arc::new(server));
        gamedata
    }

    fn load_section(section: serde_json::Value) -> (Config, Vec<String>, bool) {
        let gamedata = libraries();
        let memory = ImageModule::new("empty", Address::zero(), Vec::new());
        let ctx = LoadContext { libraries: &gamedata, memory: &memory };

        let mut config = Config::new();
        let mut messages = Vec::new();
        let loaded = load(&mut config, ctx, &Node::from(section), &mut messages);
        (config, messages, loaded)
    }

    fn platform() -> &'static str {
        LoadOptions::default().platform_key()
    }

    #[test]
    fn test_signature_is_stored_under_entry_name() {
        let (config, messages, loaded) = load_section(json!({
            "CallSite": { "library": "server", platform(): "E8 ? 22" }
        }));

        assert!(loaded, "{:?}", messages);
        assert_eq!(config.get_address("CallSite"), Some(Address::new(0x4008)));
    }

    #[test]
    fn test_unknown_library_fails_only_that_entry() {
        let (config, messages, loaded) = load_section(json!({
            "Before": { "library": "server", platform(): "E8 11" },
            "Broken": { "library": "client", platform(): "E8 11" },
            "After": { "library": "server", platform(): "11 22" }
        }));

        assert!(!loaded);
        assert_eq!(messages, vec!["Unknown \"client\" library at \"Broken\"".to_string()]);
        assert_eq!(config.get_address("Before"), Some(Address::new(0x4008)));
        assert_eq!(config.get_address("Broken"), None);
        assert_eq!(config.get_address("After"), Some(Address::new(0x4009)));
    }

    #[test]
    fn test_missing_members_and_no_match() {
        let (config, messages, loaded) = load_section(json!({
            "NoLibrary": { platform(): "E8" },
            "NoPlatform": { "library": "server", "some_other_os": "E8" },
            "NoMatch": { "library": "server", platform(): "0F 0B" }
        }));

        assert!(!loaded);
        assert_eq!(
            messages,
            vec![
                "Failed to get \"library\" key at \"NoLibrary\"".to_string(),
                format!("Failed to get platform (\"{}\" key) at \"NoPlatform\"", platform()),
                "Failed to find \"NoMatch\" signature".to_string(),
            ]
        );
        assert!(config.addresses().is_empty());
    }
}
