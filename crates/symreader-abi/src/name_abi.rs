//! Qualified-name marshaling through raw out-params.
//!
//! Mirrors the native convention exactly: the caller may pass a null
//! length pointer, a null buffer pointer, or both, and a non-null buffer
//! must already hold the queried length plus one terminator character.
//! The bounds-checked variant of this operation lives in
//! `symreader_core::qname`.

use symreader_core::qname;

/// Write `src` and one terminator character through a raw wide-character
/// pointer.
///
/// # Safety
///
/// `dst` must be valid for writes of `src`'s UTF-16 length plus one
/// character.
pub unsafe fn string_copy(dst: *mut u16, src: &str, terminator: u16) {
    let mut written = 0usize;
    for unit in src.encode_utf16() {
        // SAFETY: caller provides capacity for every source character.
        unsafe { dst.add(written).write(unit) };
        written += 1;
    }
    // SAFETY: one slot past the last character is within the promised range.
    unsafe { dst.add(written).write(terminator) };
}

/// Report a qualified name's length, fill its buffer, or both.
///
/// Either output pointer may be null independently; a length-only query is
/// how callers size the buffer for a second, filling call.
///
/// # Safety
///
/// When non-null, `length_out` must be valid for one `i32` write and
/// `buffer` must be valid for writes of
/// `qname::qualified_name_length(namespace, name) + 1` characters.
pub unsafe fn copy_qualified_type_name(
    buffer: *mut u16,
    length_out: *mut i32,
    namespace: &str,
    name: &str,
) {
    if !length_out.is_null() {
        // SAFETY: caller promises a valid out-slot.
        unsafe { length_out.write(qname::qualified_name_length(namespace, name) as i32) };
    }

    if !buffer.is_null() {
        let mut dst = buffer;
        if !namespace.is_empty() {
            // SAFETY: capacity covers namespace, separator, name, terminator.
            unsafe {
                string_copy(dst, namespace, qname::SEPARATOR);
                dst = dst.add(namespace.encode_utf16().count() + 1);
            }
        }
        // SAFETY: remaining capacity covers the simple name and terminator.
        unsafe { string_copy(dst, name, qname::TERMINATOR) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_copy_writes_both_outputs() {
        let mut buffer = [0xffffu16; 7];
        let mut length = 0i32;
        unsafe {
            copy_qualified_type_name(buffer.as_mut_ptr(), &mut length, "NS", "Foo");
        }
        assert_eq!(length, 6);
        assert_eq!(&buffer[..], wide("NS.Foo\0"));
    }

    #[test]
    fn test_length_only_query_leaves_buffer_alone() {
        let mut length = 0i32;
        unsafe {
            copy_qualified_type_name(std::ptr::null_mut(), &mut length, "", "Foo");
        }
        assert_eq!(length, 3);
    }

    #[test]
    fn test_buffer_only_query_omits_separator_for_empty_namespace() {
        let mut buffer = [0xffffu16; 4];
        unsafe {
            copy_qualified_type_name(buffer.as_mut_ptr(), std::ptr::null_mut(), "", "Foo");
        }
        assert_eq!(&buffer[..], wide("Foo\0"));
    }

    #[test]
    fn test_string_copy_places_terminator_after_source() {
        let mut buffer = [0u16; 3];
        unsafe {
            string_copy(buffer.as_mut_ptr(), "NS", qname::SEPARATOR);
        }
        assert_eq!(&buffer[..], wide("NS."));
    }
}
