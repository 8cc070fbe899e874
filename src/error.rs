// Wed Oct 14 2026 - Alex

use crate::memory::MemoryError;
use thiserror::Error;

/// Problems met while loading a gamedata document.
///
/// None of these abort a load: each is rendered into the diagnostics list
/// and the loader moves on to the next entry or section.
#[derive(Error, Debug)]
pub enum GameDataError {
    #[error("Failed to find \"{0}\" section")]
    EngineSectionNotFound(String),
    #[error("Failed to load \"{0}\" section:")]
    SectionFailed(&'static str),
    #[error("Section is empty")]
    EmptySection,
    #[error("Failed to get \"{key}\" key at \"{entry}\"")]
    MissingKey { key: &'static str, entry: String },
    #[error("Failed to get platform (\"{platform}\" key) at \"{entry}\"")]
    MissingPlatform { platform: &'static str, entry: String },
    #[error("Unknown \"{library}\" library at \"{entry}\"")]
    UnknownLibrary { library: String, entry: String },
    #[error("Failed to find \"{entry}\" signature")]
    PatternNotFound { entry: String },
    #[error("Failed to find \"{name}\" virtual table at \"{entry}\"")]
    VTableNotFound { name: String, entry: String },
    #[error(
        "Invalid \"{key}\" value at \"{entry}\": expected integer or numeral string, found {found}"
    )]
    InvalidValue { key: String, entry: String, found: &'static str },
    #[error("Failed to get \"{signature}\" signature in \"{address}\" address")]
    UnresolvedSignature { signature: String, address: String },
    #[error("Unknown \"{key}\" read key at \"{address}\" address")]
    UnknownReadAction { key: String, address: String },
    #[error("Unknown \"{key}\" key at \"{address}\" address")]
    UnknownAction { key: String, address: String },
    #[error("Failed to \"{action}\" at {target:#x} in \"{address}\" address: {source}")]
    MemoryRead {
        action: &'static str,
        target: u64,
        address: String,
        #[source]
        source: MemoryError,
    },
    #[error("No usable actions for \"{address}\" on {platform}: the result is null")]
    NullAddress { address: String, platform: &'static str },
    #[error("Invalid load options: {0}")]
    InvalidOptions(String),
    #[error("Address action nesting in \"{address}\" exceeds {limit} levels")]
    ActionTooDeep { address: String, limit: usize },
    #[error("Failed to resolve \"{0}\" address:")]
    AddressFailed(String),
    #[error("Resolved \"{0}\" address with problems:")]
    AddressIncomplete(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_entry() {
        let err = GameDataError::UnknownLibrary {
            library: "client".to_string(),
            entry: "CreateInterface".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown \"client\" library at \"CreateInterface\"");

        let err = GameDataError::UnresolvedSignature {
            signature: "Foo".to_string(),
            address: "Target".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to get \"Foo\" signature in \"Target\" address");
    }

    #[test]
    fn test_memory_read_keeps_source() {
        let err = GameDataError::MemoryRead {
            action: "read",
            target: 0x10,
            address: "Target".to_string(),
            source: MemoryError::ReadFailed(0x10),
        };
        assert_eq!(
            err.to_string(),
            "Failed to \"read\" at 0x10 in \"Target\" address: Read failed at address 0x10"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
