//! # symreader-abi
//!
//! Raw-pointer boundary for the symbol-reader interop protocol.
//!
//! Entry points here speak the native calling convention — `extern
//! "system"` operations returning HRESULTs, `i32` out-params, caller-owned
//! wide-character buffers — and delegate all protocol logic to the safe
//! implementations in `symreader-core`.
//!
//! # Architecture
//!
//! ```text
//! native vtable -> raw adapter (this crate) -> safe protocol (symreader-core)
//! ```

pub mod ffi;
pub mod name_abi;

pub use ffi::{CountGetterFn, ItemsGetterFn, get_items_counted_raw, get_items_raw};
pub use name_abi::{copy_qualified_type_name, string_copy};
