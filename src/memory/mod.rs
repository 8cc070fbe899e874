// Wed Oct 14 2026 - Alex

pub mod address;
pub mod error;
pub mod local;
pub mod traits;

pub use address::Address;
pub use error::MemoryError;
pub use local::LocalMemory;
pub use traits::MemoryReader;
