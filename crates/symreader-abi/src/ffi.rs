//! Raw calling-convention shapes of the native reader's item queries.
//!
//! Each operation is an `extern "system"` function returning an HRESULT,
//! with the item count as an `i32` out-param and a caller-allocated buffer.
//! The adapters translate out-params into the `(status, count)` pairs
//! consumed by `symreader_core::fetch` and never interpret the entity
//! pointer themselves.

use std::ffi::c_void;
use std::ptr;

use symreader_core::InteropError;
use symreader_core::fetch;
use symreader_core::hresult::HResult;

/// `count_op(this, out count)` shape.
pub type CountGetterFn = unsafe extern "system" fn(this: *mut c_void, count: *mut i32) -> HResult;

/// `fill_op(this, buffer_length, out count, buffer)` shape.
///
/// The buffer pointer may be null only when `buffer_length` is zero.
pub type ItemsGetterFn<T> = unsafe extern "system" fn(
    this: *mut c_void,
    buffer_length: i32,
    count: *mut i32,
    buffer: *mut T,
) -> HResult;

/// Fetch items through a dedicated raw count operation plus a raw fill
/// operation.
///
/// # Safety
///
/// `this` must be valid for both operations for the duration of the call,
/// and `items_op` must write at most `buffer_length` items through the
/// buffer pointer it is given.
pub unsafe fn get_items_counted_raw<T: Default + Clone>(
    this: *mut c_void,
    count_op: CountGetterFn,
    items_op: ItemsGetterFn<T>,
) -> Result<Option<Vec<T>>, InteropError> {
    fetch::get_items_counted(
        &this,
        |&entity| {
            let mut count = 0i32;
            // SAFETY: `count` is a valid out-slot; caller vouches for `this`.
            let hr = unsafe { count_op(entity, &mut count) };
            (hr, count)
        },
        |&entity, len, buf: &mut [T]| {
            let mut count = 0i32;
            // SAFETY: the buffer holds exactly `len` items per the protocol.
            let hr = unsafe { items_op(entity, len, &mut count, buf.as_mut_ptr()) };
            (hr, count)
        },
    )
}

/// Fetch items through a self-describing raw fill operation: a null buffer
/// with zero length discovers the count.
///
/// # Safety
///
/// Same contract as [`get_items_counted_raw`].
pub unsafe fn get_items_raw<T: Default + Clone>(
    this: *mut c_void,
    items_op: ItemsGetterFn<T>,
) -> Result<Option<Vec<T>>, InteropError> {
    fetch::get_items(&this, |&entity, len, buf: Option<&mut [T]>| {
        let mut count = 0i32;
        let ptr = buf.map_or(ptr::null_mut(), <[T]>::as_mut_ptr);
        // SAFETY: a null pointer only travels with a zero length; otherwise
        // the buffer holds exactly `len` items.
        let hr = unsafe { items_op(entity, len, &mut count, ptr) };
        (hr, count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symreader_core::hresult::S_OK;

    struct FakeReader {
        items: [u32; 3],
        misreport: Option<i32>,
    }

    unsafe extern "system" fn fake_count(this: *mut c_void, count: *mut i32) -> HResult {
        let reader = unsafe { &*this.cast::<FakeReader>() };
        unsafe { count.write(reader.items.len() as i32) };
        S_OK
    }

    unsafe extern "system" fn fake_fill(
        this: *mut c_void,
        buffer_length: i32,
        count: *mut i32,
        buffer: *mut u32,
    ) -> HResult {
        let reader = unsafe { &*this.cast::<FakeReader>() };
        if buffer.is_null() || buffer_length == 0 {
            unsafe { count.write(reader.items.len() as i32) };
            return S_OK;
        }
        let len = (buffer_length as usize).min(reader.items.len());
        unsafe { ptr::copy_nonoverlapping(reader.items.as_ptr(), buffer, len) };
        let reported = reader.misreport.unwrap_or(len as i32);
        unsafe { count.write(reported) };
        S_OK
    }

    fn entity(reader: &mut FakeReader) -> *mut c_void {
        (reader as *mut FakeReader).cast()
    }

    #[test]
    fn test_counted_raw_round_trip() {
        let mut reader = FakeReader {
            items: [1, 2, 3],
            misreport: None,
        };
        let items =
            unsafe { get_items_counted_raw::<u32>(entity(&mut reader), fake_count, fake_fill) }
                .unwrap();
        assert_eq!(items, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_self_describing_raw_round_trip() {
        let mut reader = FakeReader {
            items: [9, 8, 7],
            misreport: None,
        };
        let items = unsafe { get_items_raw::<u32>(entity(&mut reader), fake_fill) }.unwrap();
        assert_eq!(items, Some(vec![9, 8, 7]));
    }

    #[test]
    fn test_raw_misreport_is_incomplete_read() {
        let mut reader = FakeReader {
            items: [1, 2, 3],
            misreport: Some(2),
        };
        let err = unsafe { get_items_raw::<u32>(entity(&mut reader), fake_fill) }.unwrap_err();
        assert_eq!(
            err,
            InteropError::IncompleteRead {
                actual: 2,
                expected: 3
            }
        );
    }
}
