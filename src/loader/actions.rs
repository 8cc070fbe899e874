// Wed Oct 14 2026 - Alex

//! Interpreter for the address action mini-language.
//!
//! An action node is a table walked in document order against an address
//! accumulator:
//!
//! ```text
//! "Target": {
//!     "signature": "Base",
//!     "offset": 16,
//!     "read": 0,
//!     "linuxsteamrt64": { "read_offs32": 3 }
//! }
//! ```
//!
//! `signature` seeds the accumulator from an already resolved address.
//! `offset` adds, `read` dereferences a pointer and `read_offs32` follows a
//! rip-relative 32-bit displacement. A member named after the current
//! platform replaces the rest of the walk; members of other platforms are
//! ignored.

use crate::config::AddressStorage;
use crate::document::Node;
use crate::error::GameDataError;
use crate::memory::{Address, MemoryError, MemoryReader};
use crate::options::LoadOptions;
use crate::platform::Platform;
use crate::symbol::SymbolTable;

const SIGNATURE: &str = "signature";
const OFFSET: &str = "offset";
const READ: &str = "read";
const READ_OFFS32: &str = "read_offs32";

#[derive(Clone, Copy)]
pub struct ActionInterpreter<'a> {
    symbols: &'a SymbolTable,
    addresses: &'a AddressStorage,
    memory: &'a dyn MemoryReader,
    options: &'a LoadOptions,
}

impl<'a> ActionInterpreter<'a> {
    pub fn new(
        symbols: &'a SymbolTable,
        addresses: &'a AddressStorage,
        memory: &'a dyn MemoryReader,
        options: &'a LoadOptions,
    ) -> Self {
        Self {
            symbols,
            addresses,
            memory,
            options,
        }
    }

    /// Evaluates the actions of the `address` entry starting from `base`.
    ///
    /// Unknown members and bad values are appended to `messages` and
    /// skipped. An unresolved signature, a failed read or runaway nesting
    /// is returned as the error and nothing further is evaluated.
    pub fn resolve(
        &self,
        address: &str,
        actions: &Node,
        base: Address,
        messages: &mut Vec<String>,
    ) -> Result<Address, GameDataError> {
        self.walk(address, actions, base, 0, messages)
    }

    fn walk(
        &self,
        address: &str,
        actions: &Node,
        mut acc: Address,
        depth: usize,
        messages: &mut Vec<String>,
    ) -> Result<Address, GameDataError> {
        if depth >= self.options.max_action_depth {
            return Err(GameDataError::ActionTooDeep {
                address: address.to_string(),
                limit: self.options.max_action_depth,
            });
        }

        if let Some(signature) = actions.find_member(SIGNATURE) {
            acc = self.seed(address, signature)?;
        }

        let scheme = self.options.key_scheme;
        let pointer_size = self.options.platform.pointer_size();

        for (key, value) in actions.members() {
            if key == SIGNATURE {
                continue;
            }

            if let Some(platform) = Platform::from_key(key, scheme) {
                if platform != self.options.platform {
                    continue;
                }
                log::trace!("{}: entering \"{}\" branch at {}", address, key, acc);
                return self.walk(address, value, acc, depth + 1, messages);
            }

            let action = match key {
                OFFSET | READ | READ_OFFS32 => key,
                _ if key.starts_with(READ) => {
                    self.skip(messages, GameDataError::UnknownReadAction {
                        key: key.to_string(),
                        address: address.to_string(),
                    });
                    continue;
                }
                _ => {
                    self.skip(messages, GameDataError::UnknownAction {
                        key: key.to_string(),
                        address: address.to_string(),
                    });
                    continue;
                }
            };

            let Some(delta) = value.read_offset() else {
                self.skip(messages, GameDataError::InvalidValue {
                    key: key.to_string(),
                    entry: address.to_string(),
                    found: value.type_name(),
                });
                continue;
            };

            let target = acc.offset(delta).truncate(pointer_size);
            acc = match action {
                READ => self
                    .memory
                    .read_pointer(target, pointer_size)
                    .map_err(|source| self.read_error(READ, target, address, source))?,
                READ_OFFS32 => {
                    let displacement = self
                        .memory
                        .read_i32(target)
                        .map_err(|source| self.read_error(READ_OFFS32, target, address, source))?;
                    target.offset(4).offset(displacement as isize)
                }
                _ => target,
            }
            .truncate(pointer_size);

            log::trace!("{}: {} {:#x} -> {}", address, key, delta, acc);
        }

        Ok(acc)
    }

    fn seed(&self, address: &str, signature: &Node) -> Result<Address, GameDataError> {
        let name = signature.as_str().ok_or_else(|| GameDataError::InvalidValue {
            key: SIGNATURE.to_string(),
            entry: address.to_string(),
            found: signature.type_name(),
        })?;

        self.symbols
            .find(name)
            .and_then(|symbol| self.addresses.find(&symbol))
            .copied()
            .ok_or_else(|| GameDataError::UnresolvedSignature {
                signature: name.to_string(),
                address: address.to_string(),
            })
    }

    fn skip(&self, messages: &mut Vec<String>, err: GameDataError) {
        log::warn!("{}", err);
        messages.push(err.to_string());
    }

    fn read_error(
        &self,
        action: &'static str,
        target: Address,
        address: &str,
        source: MemoryError,
    ) -> GameDataError {
        GameDataError::MemoryRead {
            action,
            target: target.as_u64(),
            address: address.to_string(),
            source,
        }
    }
}
