// Wed Oct 14 2026 - Alex

use crate::symbol::Symbol;
use ahash::AHashMap;

/// Case-insensitive string interner.
///
/// Names are folded to ASCII lowercase when they are interned, so every map
/// keyed by [`Symbol`] is case-insensitive without a custom comparator.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    index: AHashMap<String, Symbol>,
    names: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, text: &str) -> Symbol {
        let folded = text.to_ascii_lowercase();

        if let Some(&symbol) = self.index.get(&folded) {
            return symbol;
        }

        let symbol = Symbol::from_index(self.names.len());
        self.names.push(text.to_string());
        self.index.insert(folded, symbol);
        symbol
    }

    pub fn find(&self, text: &str) -> Option<Symbol> {
        self.index.get(&text.to_ascii_lowercase()).copied()
    }

    /// Text the symbol was first interned with.
    pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.names.get(symbol.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (Symbol::from_index(i), name.as_str()))
    }
}
