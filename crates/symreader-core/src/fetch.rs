//! Two-call sized-buffer fetch protocol.
//!
//! "Get N items" from the native reader is a two-step exchange: one call
//! reports how many items are available, a second call fills a
//! caller-allocated buffer of exactly that many elements. Both steps return
//! a status code, and the fill step also reports how many items it actually
//! wrote, which must match the promised count exactly.
//!
//! Some native operations have no dedicated count query; those are
//! self-describing, answering the count when called with a zero buffer
//! length and no buffer.

use crate::error::InteropError;
use crate::hresult::{HResult, check_hr};

/// Exact-fill invariant of the two-call protocol.
///
/// A mismatch in either direction is a defect in the native side and is
/// reported with both numbers; the buffer is never truncated or padded.
pub fn validate_items(actual: i32, expected: i32) -> Result<(), InteropError> {
    if actual != expected {
        return Err(InteropError::IncompleteRead { actual, expected });
    }
    Ok(())
}

fn checked_len(count: i32) -> Result<usize, InteropError> {
    usize::try_from(count).map_err(|_| InteropError::InvalidCount(count))
}

/// Fetch items using a dedicated count operation.
///
/// `count_op` returns `(status, available)`. A zero count short-circuits to
/// `Ok(None)` without ever invoking `items_op`. Otherwise a buffer of
/// exactly `available` items is allocated and `items_op` is called as
/// `(entity, buffer_length, buffer)`, returning `(status, written)`.
///
/// Operations that take extra fixed arguments capture them in the closures.
pub fn get_items_counted<E, T, C, F>(
    entity: &E,
    count_op: C,
    items_op: F,
) -> Result<Option<Vec<T>>, InteropError>
where
    T: Default + Clone,
    C: FnOnce(&E) -> (HResult, i32),
    F: FnOnce(&E, i32, &mut [T]) -> (HResult, i32),
{
    let (hr, count) = count_op(entity);
    check_hr(hr)?;
    let len = checked_len(count)?;
    if len == 0 {
        return Ok(None);
    }

    let mut buffer = vec![T::default(); len];
    let (hr, actual) = items_op(entity, count, &mut buffer);
    check_hr(hr)?;
    validate_items(actual, count)?;
    Ok(Some(buffer))
}

/// Fetch items from a self-describing fill operation.
///
/// The discovery call passes a zero buffer length and no buffer; the
/// operation answers with the available count. The second call supplies a
/// buffer of exactly that size and follows the same exact-fill rules as
/// [`get_items_counted`].
pub fn get_items<E, T, F>(entity: &E, mut items_op: F) -> Result<Option<Vec<T>>, InteropError>
where
    T: Default + Clone,
    F: FnMut(&E, i32, Option<&mut [T]>) -> (HResult, i32),
{
    let (hr, count) = items_op(entity, 0, None);
    check_hr(hr)?;
    let len = checked_len(count)?;
    if len == 0 {
        return Ok(None);
    }

    let mut buffer = vec![T::default(); len];
    let (hr, actual) = items_op(entity, count, Some(&mut buffer));
    check_hr(hr)?;
    validate_items(actual, count)?;
    Ok(Some(buffer))
}

/// Collapse an absent item sequence to the canonical empty vector.
///
/// `Vec::new()` does not allocate, so the empty result is as cheap as a
/// shared constant.
pub fn null_to_empty<T>(items: Option<Vec<T>>) -> Vec<T> {
    items.unwrap_or_default()
}

/// Slice form of [`null_to_empty`].
pub fn null_to_empty_slice<T>(items: Option<&[T]>) -> &[T] {
    items.unwrap_or(&[])
}
