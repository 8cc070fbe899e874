// Wed Oct 14 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};
use crate::module::Module;
use crate::pattern::{scan_for_pattern, Pattern};
use ahash::AHashMap;

/// Module backed by a byte image mapped at a fixed base address.
///
/// Useful for resolving gamedata against a dumped library, and as the test
/// double for a loaded module. Virtual tables are looked up by name among
/// those registered with [`ImageModule::with_vtable`].
#[derive(Debug, Clone)]
pub struct ImageModule {
    name: String,
    base: Address,
    image: Vec<u8>,
    vtables: AHashMap<String, Address>,
}

impl ImageModule {
    pub fn new(name: &str, base: Address, image: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            base,
            image,
            vtables: AHashMap::new(),
        }
    }

    pub fn with_vtable(mut self, name: &str, address: Address) -> Self {
        self.vtables.insert(name.to_string(), address);
        self
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn size(&self) -> usize {
        self.image.len()
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr >= self.base && addr.distance(self.base) < self.image.len() as i64
    }

    /// Overwrites bytes of the image at `addr`.
    pub fn patch(&mut self, addr: Address, bytes: &[u8]) -> Result<(), MemoryError> {
        let range = self.image_range(addr, bytes.len())?;
        self.image[range].copy_from_slice(bytes);
        Ok(())
    }

    fn image_range(
        &self,
        addr: Address,
        len: usize,
    ) -> Result<std::ops::Range<usize>, MemoryError> {
        if addr < self.base {
            return Err(MemoryError::OutOfBounds(addr.as_u64()));
        }

        let start = (addr.as_u64() - self.base.as_u64()) as usize;
        match start.checked_add(len) {
            Some(end) if end <= self.image.len() => Ok(start..end),
            _ => Err(MemoryError::OutOfBounds(addr.as_u64())),
        }
    }
}

impl Module for ImageModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn find_pattern(&self, pattern: &str) -> Option<Address> {
        let pattern = Pattern::from_ida_pattern(pattern);
        if pattern.is_empty() {
            log::warn!("Empty signature passed to \"{}\"", self.name);
            return None;
        }

        scan_for_pattern(&self.image, self.base, &pattern)
    }

    fn find_vtable(&self, name: &str) -> Option<Address> {
        self.vtables.get(name).copied()
    }
}

impl MemoryReader for ImageModule {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        let range = self.image_range(addr, len)?;
        Ok(self.image[range].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImageModule {
        let mut image = vec![0xCC; 0x40];
        image[0x10..0x15].copy_from_slice(&[0x48, 0x8B, 0x05, 0x10, 0x00]);
        ImageModule::new("server", Address::new(0x7000_0000), image)
    }

    #[test]
    fn test_find_pattern_returns_absolute_address() {
        let module = sample();
        assert_eq!(module.find_pattern("48 8B 05 ? 00"), Some(Address::new(0x7000_0010)));
        assert_eq!(module.find_pattern("48 8B 0D"), None);
        assert_eq!(module.find_pattern(""), None);
    }

    #[test]
    fn test_find_vtable_by_name() {
        let module = sample().with_vtable("CCSPlayerPawn", Address::new(0x7000_0020));
        assert_eq!(module.find_vtable("CCSPlayerPawn"), Some(Address::new(0x7000_0020)));
        assert_eq!(module.find_vtable("CBaseEntity"), None);
    }

    #[test]
    fn test_reads_are_bounds_checked() {
        let mut module = sample();
        module.patch(Address::new(0x7000_0038), &0x1122_3344_5566_7788u64.to_le_bytes()).unwrap();

        assert_eq!(module.read_u64(Address::new(0x7000_0038)).unwrap(), 0x1122_3344_5566_7788);
        assert!(matches!(
            module.read_u64(Address::new(0x7000_003C)),
            Err(MemoryError::OutOfBounds(0x7000_003C))
        ));
        assert!(module.read_bytes(Address::new(0x10), 1).is_err());
        assert!(module.contains(Address::new(0x7000_003F)));
        assert!(!module.contains(Address::new(0x7000_0040)));
    }
}
