// Wed Oct 14 2026 - Alex

use crate::config::Config;
use crate::memory::Address;
use crate::options::LoadOptions;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Serializable view of everything a [`Config`] has resolved, keyed by the
/// names as first written.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    pub options: LoadOptions,
    pub addresses: IndexMap<String, Address>,
    pub offsets: IndexMap<String, isize>,
    pub keys: IndexMap<String, Value>,
}

impl ConfigSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Config {
    pub fn snapshot(&self) -> ConfigSnapshot {
        let name = |symbol| self.symbols.resolve(symbol).unwrap_or_default().to_string();

        ConfigSnapshot {
            options: self.options.clone(),
            addresses: self
                .addresses
                .iter()
                .map(|(&symbol, &address)| (name(symbol), address))
                .collect(),
            offsets: self.offsets.iter().map(|(&symbol, &offset)| (name(symbol), offset)).collect(),
            keys: self.keys.iter().map(|(&symbol, node)| (name(symbol), node.to_json())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Node;
    use serde_json::json;

    #[test]
    fn test_snapshot_uses_original_names() {
        let mut config = Config::new();
        let target = config.symbol("Target");
        let health = config.symbol("m_iHealth");
        let slots = config.symbol("Slots");

        config.addresses_mut().set(target, Address::new(0x2000));
        config.offsets_mut().set(health, 0x344);
        config.keys_mut().set(slots, Node::from(json!([1, 2])));

        let snapshot = config.snapshot();
        assert_eq!(snapshot.addresses.get("Target"), Some(&Address::new(0x2000)));
        assert_eq!(snapshot.offsets.get("m_iHealth"), Some(&0x344));

        let value: Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["addresses"]["Target"], json!(0x2000));
        assert_eq!(value["keys"]["Slots"], json!([1, 2]));
    }
}
