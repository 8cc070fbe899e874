// Wed Oct 14 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};
#[cfg(target_os = "linux")]
use std::io;

/// Reads the memory of the current process.
///
/// On Linux reads go through `process_vm_readv`, so an unmapped address is
/// reported as [`MemoryError::ReadFailed`] instead of faulting. Elsewhere,
/// and when the kernel refuses the syscall, bytes are copied directly.
#[derive(Debug)]
pub struct LocalMemory {
    _private: (),
}

impl LocalMemory {
    /// # Safety
    ///
    /// Unless the checked Linux path is available, every address handed to
    /// this reader must point to mapped, readable memory for the requested
    /// length. Addresses derived from a gamedata document are only as good
    /// as that document.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl MemoryReader for LocalMemory {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        if addr.is_null() {
            return Err(MemoryError::NullPointer);
        }

        let mut buffer = vec![0u8; len];
        if len == 0 {
            return Ok(buffer);
        }

        #[cfg(target_os = "linux")]
        {
            match read_checked(addr, &mut buffer) {
                Ok(read) if read == len => return Ok(buffer),
                Ok(read) => {
                    return Err(MemoryError::ShortRead {
                        address: addr.as_u64(),
                        wanted: len,
                        got: read,
                    })
                }
                Err(err) if !syscall_unavailable(&err) => {
                    log::trace!("process_vm_readv at {} failed: {}", addr, err);
                    return Err(MemoryError::ReadFailed(addr.as_u64()));
                }
                Err(_) => {}
            }
        }

        // SAFETY: upheld by the contract of `LocalMemory::new`.
        unsafe {
            std::ptr::copy_nonoverlapping(addr.as_ptr::<u8>(), buffer.as_mut_ptr(), len);
        }
        Ok(buffer)
    }
}

#[cfg(target_os = "linux")]
fn read_checked(addr: Address, buffer: &mut [u8]) -> io::Result<usize> {
    let local = libc::iovec {
        iov_base: buffer.as_mut_ptr() as *mut libc::c_void,
        iov_len: buffer.len(),
    };
    let remote = libc::iovec {
        iov_base: addr.as_usize() as *mut libc::c_void,
        iov_len: buffer.len(),
    };

    let read = unsafe { libc::process_vm_readv(libc::getpid(), &local, 1, &remote, 1, 0) };
    if read < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(read as usize)
    }
}

#[cfg(target_os = "linux")]
fn syscall_unavailable(err: &io::Error) -> bool {
    matches!(err.raw_os_error(), Some(libc::ENOSYS) | Some(libc::EPERM))
}
