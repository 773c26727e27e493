//! Qualified-name packing into caller-supplied wide-character buffers.
//!
//! Names cross the boundary as NUL-terminated UTF-16 buffers. A qualified
//! name is `namespace '.' name` when the namespace is non-empty, otherwise
//! just `name`. Length queries and buffer fills follow the same two-call
//! shape as the item fetchers: the caller asks for the length, allocates
//! `length + 1` characters, then asks for the fill.
//!
//! Lengths count UTF-16 code units, matching the native character type.

use crate::error::InteropError;

/// Separator between namespace and simple name.
pub const SEPARATOR: u16 = b'.' as u16;
/// Wide NUL terminator.
pub const TERMINATOR: u16 = 0;

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Character length of the packed qualified name, excluding the terminator.
pub fn qualified_name_length(namespace: &str, name: &str) -> usize {
    let ns = utf16_len(namespace);
    let prefix = if ns > 0 { ns + 1 } else { 0 };
    prefix + utf16_len(name)
}

/// Copy `src` into `dst` followed by one terminator character.
///
/// Returns the number of characters written, excluding the terminator.
pub fn write_terminated(
    dst: &mut [u16],
    src: &str,
    terminator: u16,
) -> Result<usize, InteropError> {
    let needed = utf16_len(src);
    if dst.len() < needed + 1 {
        return Err(InteropError::BufferTooSmall {
            needed: needed + 1,
            capacity: dst.len(),
        });
    }
    for (slot, unit) in dst.iter_mut().zip(src.encode_utf16()) {
        *slot = unit;
    }
    dst[needed] = terminator;
    Ok(needed)
}

/// Report the qualified-name length, fill a buffer, or both in one pass.
///
/// `length_out` receives the character count excluding the terminator.
/// `buffer`, when supplied, must hold at least that count plus one; it is
/// written as namespace, separator, name (namespace and separator omitted
/// for an empty namespace) with a single NUL at index `length`.
pub fn pack_qualified_name(
    namespace: &str,
    name: &str,
    length_out: Option<&mut usize>,
    buffer: Option<&mut [u16]>,
) -> Result<(), InteropError> {
    let length = qualified_name_length(namespace, name);

    if let Some(out) = length_out {
        *out = length;
    }

    if let Some(buf) = buffer {
        if buf.len() < length + 1 {
            return Err(InteropError::BufferTooSmall {
                needed: length + 1,
                capacity: buf.len(),
            });
        }
        let mut offset = 0;
        if !namespace.is_empty() {
            offset = write_terminated(buf, namespace, SEPARATOR)? + 1;
        }
        write_terminated(&mut buf[offset..], name, TERMINATOR)?;
    }

    Ok(())
}

/// Decode a NUL-terminated wide-character buffer produced by a name query.
///
/// The buffer's final character must be the terminator; it is stripped.
/// Unpaired surrogates decode to the replacement character.
pub fn buffer_to_string(buffer: &[u16]) -> String {
    debug_assert_eq!(buffer.last(), Some(&TERMINATOR));
    let end = buffer.len().saturating_sub(1);
    String::from_utf16_lossy(&buffer[..end])
}
