//! # symreader-core
//!
//! Safe implementations of the marshaling protocol spoken by a COM-style
//! debug-symbol reader: status-code classification, the two-call sized
//! buffer fetch, and qualified-name packing into wide-character buffers.
//!
//! No `unsafe` code is permitted at the crate level. The raw-pointer
//! boundary that mirrors the native calling convention lives in
//! `symreader-abi` and delegates here.

#![deny(unsafe_code)]

pub mod error;
pub mod fetch;
pub mod hresult;
pub mod qname;

pub use error::InteropError;
pub use fetch::{get_items, get_items_counted, null_to_empty, null_to_empty_slice, validate_items};
pub use hresult::{E_FAIL, E_NOTIMPL, HResult, HrClass, S_FALSE, S_OK, check_hr};
pub use qname::{buffer_to_string, pack_qualified_name, qualified_name_length};
