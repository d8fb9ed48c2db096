/*!
loader.rs - Loader bridge: reading a NUL-terminated filename out of
simulated memory before handing it to the external `ProgramLoader`.

Grounded in the source's `copia_str_da_mem`: a byte outside `[0, 255]` or a
failed memory read aborts the copy; a `0` byte terminates it successfully;
running past the maximum length without a terminator is also a failure.
*/

use crate::constants::MAX_FILENAME_LEN;
use crate::contracts::Memory;
use crate::error::KernelError;

/// Copies a NUL-terminated ASCII-ish filename out of `memory` starting at
/// `addr`, one byte per word, up to `MAX_FILENAME_LEN` bytes.
pub(crate) fn read_cstring_from_memory<M: Memory>(
    memory: &M,
    addr: i64,
) -> Result<String, KernelError> {
    let mut bytes = Vec::new();
    for offset in 0..MAX_FILENAME_LEN as i64 {
        let word = memory
            .read(addr + offset)
            .map_err(|_| KernelError::BadRequest("unreadable filename pointer".into()))?;
        if !(0..=255).contains(&word) {
            return Err(KernelError::BadRequest("filename byte out of range".into()));
        }
        if word == 0 {
            return String::from_utf8(bytes)
                .map_err(|_| KernelError::BadRequest("filename is not valid UTF-8".into()));
        }
        bytes.push(word as u8);
    }
    Err(KernelError::BadRequest("filename exceeds maximum length".into()))
}
