// Wed Oct 14 2026 - Alex

use crate::config::Config;
use crate::document::Node;
use crate::error::GameDataError;
use crate::loader::{find_library, load_entries, report, LoadContext};
use crate::memory::Address;

pub fn load(
    config: &mut Config,
    ctx: LoadContext<'_>,
    section: &Node,
    messages: &mut Vec<String>,
) -> bool {
    load_entries(section, messages, |name, entry, messages| match resolve(ctx, name, entry) {
        Ok(address) => {
            log::debug!("Virtual table \"{}\" found at {}", name, address);
            let symbol = config.symbols.intern(name);
            config.addresses.set(symbol, address);
            true
        }
        Err(err) => report(messages, err),
    })
}

fn resolve(ctx: LoadContext<'_>, name: &str, entry: &Node) -> Result<Address, GameDataError> {
    let module = find_library(ctx.libraries, name, entry)?;
    // The class name defaults to the entry name.
    let class = entry.find_member("name").map_or(name, |node| node.get_string(name));

    module.find_vtable(class).ok_or_else(|| GameDataError::VTableNotFound {
        name: class.to_string(),
        entry: name.to_string(),
    })
}
