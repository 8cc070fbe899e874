// Wed Oct 14 2026 - Alex

use crate::config::Config;
use crate::document::Node;
use crate::error::GameDataError;
use crate::loader::{load_entries, platform_member, report};

pub fn load(config: &mut Config, section: &Node, messages: &mut Vec<String>) -> bool {
    load_entries(section, messages, |name, entry, messages| {
        let offset = match resolve(config, name, entry) {
            Ok(offset) => offset,
            Err(err) => return report(messages, err),
        };

        log::debug!("Offset \"{}\" = {:#x}", name, offset);
        let symbol = config.symbols.intern(name);
        config.offsets.set(symbol, offset);
        true
    })
}

fn resolve(config: &Config, name: &str, entry: &Node) -> Result<isize, GameDataError> {
    let value = platform_member(&config.options, name, entry)?;

    value.read_offset().ok_or_else(|| GameDataError::InvalidValue {
        key: config.options.platform_key().to_string(),
        entry: name.to_string(),
        found: value.type_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LoadOptions;
    use crate::platform::Platform;
    use serde_json::json;

    fn load_section(section: serde_json::Value) -> (Config, Vec<String>, bool) {
        let mut config = Config::with_options(LoadOptions::new().with_platform(Platform::Linux64));
        let mut messages = Vec::new();
        let loaded = load(&mut config, &Node::from(section), &mut messages);
        (config, messages, loaded)
    }

    #[test]
    fn test_numerals_and_integers() {
        let (config, messages, loaded) = load_section(json!({
            "Health": { "linuxsteamrt64": "0x344" },
            "Team": { "linuxsteamrt64": "010" },
            "Back": { "linuxsteamrt64": -8 },
            "Plain": { "linuxsteamrt64": 12, "win64": 16 }
        }));

        assert!(loaded, "{:?}", messages);
        assert_eq!(config.get_offset("Health"), Some(0x344));
        assert_eq!(config.get_offset("Team"), Some(8));
        assert_eq!(config.get_offset("Back"), Some(-8));
        assert_eq!(config.get_offset("Plain"), Some(12));
    }

    #[test]
    fn test_invalid_value_is_skipped() {
        let (config, messages, loaded) = load_section(json!({
            "Flag": { "linuxsteamrt64": true },
            "Ok": { "linuxsteamrt64": "4" }
        }));

        assert!(!loaded);
        assert_eq!(
            messages,
            vec![concat!(
                "Invalid \"linuxsteamrt64\" value at \"Flag\": ",
                "expected integer or numeral string, found bool"
            )
            .to_string()]
        );
        assert_eq!(config.get_offset("Flag"), None);
        assert_eq!(config.get_offset("Ok"), Some(4));
    }

    #[test]
    fn test_empty_section() {
        let (_, messages, loaded) = load_section(json!({}));
        assert!(!loaded);
        assert_eq!(messages, vec!["Section is empty".to_string()]);
    }
}
