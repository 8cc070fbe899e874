// Wed Oct 14 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Null pointer dereference")]
    NullPointer,
    #[error("Read failed at address {0:#x}")]
    ReadFailed(u64),
    #[error("Short read at address {address:#x}: wanted {wanted} bytes, got {got}")]
    ShortRead { address: u64, wanted: usize, got: usize },
    #[error("Out of bounds: address {0:#x} not in range")]
    OutOfBounds(u64),
    #[error("Binary parse error: {0}")]
    BinaryParse(String),
    #[error("Unsupported pointer size: {0}")]
    UnsupportedPointerSize(usize),
}
