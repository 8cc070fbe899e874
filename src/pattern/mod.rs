// Wed Oct 14 2026 - Alex

pub mod pattern;

pub use pattern::Pattern;

use crate::memory::Address;

/// Scans an image mapped at `base` and returns the address of the first match.
pub fn scan_for_pattern(image: &[u8], base: Address, pattern: &Pattern) -> Option<Address> {
    pattern.find_in(image).map(|offset| base + offset as u64)
}
