// Wed Oct 14 2026 - Alex

use crate::config::Config;
use crate::document::Node;
use crate::loader::{load_entries, platform_member, report};

/// Stores a copy of each entry's platform member verbatim.
pub fn load(config: &mut Config, section: &Node, messages: &mut Vec<String>) -> bool {
    load_entries(section, messages, |name, entry, messages| {
        let value = match platform_member(&config.options, name, entry) {
            Ok(value) => value.clone(),
            Err(err) => return report(messages, err),
        };

        log::debug!("Key \"{}\" loaded ({})", name, value.type_name());
        let symbol = config.symbols.intern(name);
        config.keys.set(symbol, value);
        true
    })
}
