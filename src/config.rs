// Wed Oct 14 2026 - Alex

use crate::document::Node;
use crate::error::GameDataError;
use crate::loader;
use crate::memory::{Address, MemoryReader};
use crate::module::LibraryResolver;
use crate::options::LoadOptions;
use crate::storage::Storage;
use crate::symbol::{Symbol, SymbolTable};
use crate::utils::scoped_timer;

pub type AddressStorage = Storage<Symbol, Address>;
pub type KeyStorage = Storage<Symbol, Node>;
pub type OffsetStorage = Storage<Symbol, isize>;

/// Values resolved from one engine section of a gamedata document.
///
/// Register listeners on the storages before calling [`Config::load`] to be
/// told about each value as it resolves.
#[derive(Debug, Default)]
pub struct Config {
    pub(crate) symbols: SymbolTable,
    pub(crate) addresses: AddressStorage,
    pub(crate) keys: KeyStorage,
    pub(crate) offsets: OffsetStorage,
    pub(crate) options: LoadOptions,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Starts from storages that already carry values or listeners.
    ///
    /// `symbols` must be the table their keys were interned in.
    pub fn with_storages(
        options: LoadOptions,
        symbols: SymbolTable,
        addresses: AddressStorage,
        keys: KeyStorage,
        offsets: OffsetStorage,
    ) -> Self {
        Self {
            symbols,
            addresses,
            keys,
            offsets,
            options,
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Interns `name`, so listeners can be keyed before the value exists.
    pub fn symbol(&mut self, name: &str) -> Symbol {
        self.symbols.intern(name)
    }

    pub fn find_symbol(&self, name: &str) -> Option<Symbol> {
        self.symbols.find(name)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn get_address(&self, name: &str) -> Option<Address> {
        self.find_symbol(name).and_then(|symbol| self.address(symbol))
    }

    pub fn get_offset(&self, name: &str) -> Option<isize> {
        self.find_symbol(name).and_then(|symbol| self.offset(symbol))
    }

    pub fn get_key(&self, name: &str) -> Option<&Node> {
        self.find_symbol(name).and_then(|symbol| self.key(symbol))
    }

    pub fn address(&self, symbol: Symbol) -> Option<Address> {
        self.addresses.find(&symbol).copied()
    }

    pub fn offset(&self, symbol: Symbol) -> Option<isize> {
        self.offsets.find(&symbol).copied()
    }

    pub fn key(&self, symbol: Symbol) -> Option<&Node> {
        self.keys.find(&symbol)
    }

    pub fn addresses(&self) -> &AddressStorage {
        &self.addresses
    }

    pub fn keys(&self) -> &KeyStorage {
        &self.keys
    }

    pub fn offsets(&self) -> &OffsetStorage {
        &self.offsets
    }

    pub fn addresses_mut(&mut self) -> &mut AddressStorage {
        &mut self.addresses
    }

    pub fn keys_mut(&mut self) -> &mut KeyStorage {
        &mut self.keys
    }

    pub fn offsets_mut(&mut self) -> &mut OffsetStorage {
        &mut self.offsets
    }

    /// Forgets every resolved value. Listeners and symbols stay registered.
    pub fn clear_values(&mut self) {
        self.addresses.clear_values();
        self.keys.clear_values();
        self.offsets.clear_values();
    }

    /// Replays every stored value to the listeners, e.g. after adding one late.
    pub fn trigger_callbacks(&mut self) {
        self.addresses.trigger_callbacks();
        self.keys.trigger_callbacks();
        self.offsets.trigger_callbacks();
    }

    /// Loads the configured engine's section of `document`.
    ///
    /// Problems are appended to `messages`. Returns false only when the
    /// options are invalid or the engine section itself is missing.
    pub fn load(
        &mut self,
        root: &dyn LibraryResolver,
        memory: &dyn MemoryReader,
        document: &Node,
        messages: &mut Vec<String>,
    ) -> bool {
        if let Err(reason) = self.options.validate() {
            let err = GameDataError::InvalidOptions(reason);
            log::warn!("{}", err);
            messages.push(err.to_string());
            return false;
        }

        let engine = self.options.engine.key();

        let Some(section) = document.find_member(engine) else {
            let err = GameDataError::EngineSectionNotFound(engine.to_string());
            log::warn!("{}", err);
            messages.push(err.to_string());
            return false;
        };

        let _timer = scoped_timer("gamedata load");
        log::debug!(
            "Loading \"{}\" gamedata for {}",
            engine,
            self.options.platform_key()
        );
        loader::load_engine(self, root, memory, section, messages);

        true
    }
}
