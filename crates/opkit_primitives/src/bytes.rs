//! Fixed-length byte replacement.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplaceError {
    #[error("replacement out of bounds: {start} + {len} exceeds target length {target_len}")]
    OutOfBounds {
        start: usize,
        len: usize,
        target_len: usize,
    },
}

/// Copy of `target` with `replacement` written over it starting at `start`.
///
/// The result always has the same length as `target`.
pub fn replace(target: &[u8], start: usize, replacement: &[u8]) -> Result<Vec<u8>, ReplaceError> {
    let oob = ReplaceError::OutOfBounds {
        start,
        len: replacement.len(),
        target_len: target.len(),
    };
    let end = start.checked_add(replacement.len()).ok_or(oob)?;
    if end > target.len() {
        tracing::debug!(start, end, target_len = target.len(), "replace out of bounds");
        return Err(oob);
    }
    let mut out = target.to_vec();
    out[start..end].copy_from_slice(replacement);
    Ok(out)
}
