// Wed Oct 14 2026 - Alex

//! Resolves addresses, offsets and keys for a game's native libraries from
//! a gamedata document, notifying registered listeners as values resolve.

pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod memory;
pub mod module;
pub mod options;
pub mod pattern;
pub mod platform;
pub mod snapshot;
pub mod storage;
pub mod symbol;
pub mod utils;

pub use config::{AddressStorage, Config, KeyStorage, OffsetStorage};
pub use document::{DocumentError, Node};
pub use error::GameDataError;
pub use loader::{ActionInterpreter, Section};
pub use memory::{Address, LocalMemory, MemoryError, MemoryReader};
pub use module::{GameData, ImageModule, LibraryResolver, Module};
pub use options::LoadOptions;
pub use platform::{Engine, KeyScheme, Platform};
pub use snapshot::ConfigSnapshot;
pub use storage::{
    bind, bind_with, slot, Collector, Listener, ListenerId, Multiplicity, Slot, Storage,
};
pub use symbol::{Symbol, SymbolTable};
