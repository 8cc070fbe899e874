// Wed Oct 14 2026 - Alex

//! Section loaders for one engine section of a gamedata document.

pub mod actions;
pub mod addresses;
pub mod keys;
pub mod offsets;
pub mod signatures;
pub mod vtables;

pub use actions::ActionInterpreter;

use crate::config::Config;
use crate::document::Node;
use crate::error::GameDataError;
use crate::memory::MemoryReader;
use crate::module::{LibraryResolver, Module};
use crate::options::LoadOptions;
use std::fmt;

const INDENT: &str = "  ";

/// Collaborators a section needs besides the [`Config`] it fills.
#[derive(Clone, Copy)]
pub struct LoadContext<'a> {
    pub libraries: &'a dyn LibraryResolver,
    pub memory: &'a dyn MemoryReader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Signatures,
    VTables,
    Keys,
    Offsets,
    Addresses,
}

impl Section {
    /// Load order. Addresses come last since they seed from signatures.
    pub const ALL: [Section; 5] = [
        Section::Signatures,
        Section::VTables,
        Section::Keys,
        Section::Offsets,
        Section::Addresses,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Section::Signatures => "Signatures",
            Section::VTables => "VTables",
            Section::Keys => "Keys",
            Section::Offsets => "Offsets",
            Section::Addresses => "Addresses",
        }
    }

    pub fn load(
        self,
        config: &mut Config,
        ctx: LoadContext<'_>,
        section: &Node,
        messages: &mut Vec<String>,
    ) -> bool {
        match self {
            Section::Signatures => signatures::load(config, ctx, section, messages),
            Section::VTables => vtables::load(config, ctx, section, messages),
            Section::Keys => keys::load(config, section, messages),
            Section::Offsets => offsets::load(config, section, messages),
            Section::Addresses => addresses::load(config, ctx, section, messages),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs every present section of `engine` in [`Section::ALL`] order.
pub(crate) fn load_engine(
    config: &mut Config,
    libraries: &dyn LibraryResolver,
    memory: &dyn MemoryReader,
    engine: &Node,
    messages: &mut Vec<String>,
) {
    let ctx = LoadContext { libraries, memory };

    for section in Section::ALL {
        let Some(node) = engine.find_member(section.name()) else {
            continue;
        };

        let mut section_messages = Vec::new();
        if !section.load(config, ctx, node, &mut section_messages) {
            messages.push(GameDataError::SectionFailed(section.name()).to_string());
            push_nested(messages, section_messages);
        }
    }
}

/// Appends `nested` one indent level below the current block.
pub(crate) fn push_nested(messages: &mut Vec<String>, nested: Vec<String>) {
    messages.extend(nested.into_iter().map(|message| format!("{}{}", INDENT, message)));
}

/// Shared shape of every section: each entry either resolves or yields
/// one diagnostic, and the section fails if any entry did.
pub(crate) fn load_entries<F>(section: &Node, messages: &mut Vec<String>, mut load_entry: F) -> bool
where
    F: FnMut(&str, &Node, &mut Vec<String>) -> bool,
{
    if section.member_count() == 0 {
        messages.push(GameDataError::EmptySection.to_string());
        return false;
    }

    let mut loaded = true;
    for (name, entry) in section.members() {
        if !load_entry(name, entry, messages) {
            loaded = false;
        }
    }
    loaded
}

pub(crate) fn report(messages: &mut Vec<String>, err: GameDataError) -> bool {
    log::warn!("{}", err);
    messages.push(err.to_string());
    false
}

pub(crate) fn find_library<'a>(
    libraries: &'a dyn LibraryResolver,
    name: &str,
    entry: &Node,
) -> Result<&'a dyn Module, GameDataError> {
    let library = entry
        .find_member("library")
        .and_then(Node::as_str)
        .ok_or_else(|| GameDataError::MissingKey {
            key: "library",
            entry: name.to_string(),
        })?;

    libraries
        .find_library(library)
        .ok_or_else(|| GameDataError::UnknownLibrary {
            library: library.to_string(),
            entry: name.to_string(),
        })
}

pub(crate) fn platform_member<'n>(
    options: &LoadOptions,
    name: &str,
    entry: &'n Node,
) -> Result<&'n Node, GameDataError> {
    let platform = options.platform_key();
    entry
        .find_member(platform)
        .ok_or_else(|| GameDataError::MissingPlatform {
            platform,
            entry: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_order() {
        let names: Vec<_> = Section::ALL.iter().map(|section| section.name()).collect();
        assert_eq!(names, ["Signatures", "VTables", "Keys", "Offsets", "Addresses"]);
    }

    #[test]
    fn test_empty_section() {
        let mut messages = Vec::new();
        let loaded = load_entries(&Node::table(), &mut messages, |_, _, _| true);

        assert!(!loaded);
        assert_eq!(messages, vec!["Section is empty".to_string()]);
    }

    #[test]
    fn test_failed_entry_does_not_stop_the_loop() {
        let section = Node::from(json!({ "a": 1, "b": 2, "c": 3 }));
        let mut visited = Vec::new();
        let mut messages = Vec::new();

        let loaded = load_entries(&section, &mut messages, |name, _, messages| {
            visited.push(name.to_string());
            name != "b"
                || report(messages, GameDataError::PatternNotFound { entry: name.to_string() })
        });

        assert!(!loaded);
        assert_eq!(visited, ["a", "b", "c"]);
        assert_eq!(messages, vec!["Failed to find \"b\" signature".to_string()]);
    }

    #[test]
    fn test_nested_messages_are_indented() {
        let mut messages = vec!["header:".to_string()];
        push_nested(&mut messages, vec!["inner:".to_string(), "  detail".to_string()]);
        assert_eq!(messages, ["header:", "  inner:", "    detail"]);
    }
}
