//! Block representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Copies a 16-byte chunk into an owned block.
///
/// Callers only pass chunks produced by `chunks_exact(BLOCK_SIZE)`.
#[inline]
pub(crate) fn load(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}
