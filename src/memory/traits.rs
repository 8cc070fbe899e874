// Wed Oct 14 2026 - Alex

use crate::memory::{Address, MemoryError};

/// Read access to the memory an address action dereferences.
pub trait MemoryReader: Send + Sync {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError>;

    fn read_u32(&self, addr: Address) -> Result<u32, MemoryError> {
        read_array::<Self, 4>(self, addr).map(u32::from_le_bytes)
    }

    fn read_i32(&self, addr: Address) -> Result<i32, MemoryError> {
        read_array::<Self, 4>(self, addr).map(i32::from_le_bytes)
    }

    fn read_u64(&self, addr: Address) -> Result<u64, MemoryError> {
        read_array::<Self, 8>(self, addr).map(u64::from_le_bytes)
    }

    /// Reads a pointer of the given width (4 or 8 bytes).
    fn read_pointer(&self, addr: Address, pointer_size: usize) -> Result<Address, MemoryError> {
        match pointer_size {
            4 => self.read_u32(addr).map(|value| Address::new(value as u64)),
            8 => self.read_u64(addr).map(Address::new),
            other => Err(MemoryError::UnsupportedPointerSize(other)),
        }
    }
}

fn read_array<R: MemoryReader + ?Sized, const N: usize>(
    reader: &R,
    addr: Address,
) -> Result<[u8; N], MemoryError> {
    let bytes = reader.read_bytes(addr, N)?;
    bytes.as_slice().try_into().map_err(|_| MemoryError::ShortRead {
        address: addr.as_u64(),
        wanted: N,
        got: bytes.len(),
    })
}
