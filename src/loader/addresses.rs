// Wed Oct 14 2026 - Alex

use crate::config::Config;
use crate::document::Node;
use crate::error::GameDataError;
use crate::loader::{load_entries, push_nested, ActionInterpreter, LoadContext};
use crate::memory::Address;

/// Evaluates every entry with the action interpreter, starting from zero.
///
/// Entries may seed from signatures, vtables and addresses resolved earlier
/// in the same section. A walk ending on a null address resolves nothing, so the entry is not
/// stored.
pub fn load(
    config: &mut Config,
    ctx: LoadContext<'_>,
    section: &Node,
    messages: &mut Vec<String>,
) -> bool {
    load_entries(section, messages, |name, entry, messages| {
        let mut entry_messages = Vec::new();
        let interpreter =
            ActionInterpreter::new(&config.symbols, &config.addresses, ctx.memory, &config.options);
        let result = interpreter
            .resolve(name, entry, Address::zero(), &mut entry_messages)
            .and_then(|address| {
                if address.is_null() {
                    Err(GameDataError::NullAddress {
                        address: name.to_string(),
                        platform: config.options.platform_key(),
                    })
                } else {
                    Ok(address)
                }
            });

        match result {
            Ok(address) => {
                log::debug!("Address \"{}\" resolved to {}", name, address);
                let symbol = config.symbols.intern(name);
                config.addresses.set(symbol, address);

                if entry_messages.is_empty() {
                    return true;
                }
                messages.push(GameDataError::AddressIncomplete(name.to_string()).to_string());
            }
            Err(err) => {
                log::warn!("{}", err);
                entry_messages.push(err.to_string());
                messages.push(GameDataError::AddressFailed(name.to_string()).to_string());
            }
        }

        push_nested(messages, entry_messages);
        false
    })
}
