//! `#[repr(C)]` mirrors of the structs libclang passes and returns by value.
//!
//! These types double as the FFI signature shapes in the symbol table, so
//! the platform's C ABI handles by-value passing and struct returns. All
//! other layout knowledge (byte offsets, sizes) is derived from these
//! definitions; nothing else in the workspace hardcodes an offset.

use std::ffi::c_void;
use std::os::raw::{c_char, c_ulong};

/// Machine word width. Opaque struct fields are address-sized.
pub const WORD: usize = size_of::<*const c_void>();

/// An AST cursor. Only `kind` is interpreted by this layer; the three
/// data words are forwarded verbatim to subsequent calls and never
/// dereferenced locally.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawCursor {
    pub kind: u32,
    pub xdata: i32,
    pub data: [*const c_void; 3],
}

/// Size in bytes of a cursor as returned by value.
pub const CURSOR_SIZE: usize = size_of::<RawCursor>();

/// A type descriptor. Only `kind` is interpreted; `reserved` covers the
/// alignment padding the C layout carries between the kind enum and the
/// data words.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawType {
    pub kind: u32,
    pub reserved: u32,
    pub data: [*const c_void; 2],
}

pub const TYPE_SIZE: usize = size_of::<RawType>();

/// A source location. `int_data` is treated here as a packed integer
/// (low 32 bits = line, high 32 bits = column); see
/// [`value::SourceLocation`](crate::value::SourceLocation) for the caveats.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSourceLocation {
    pub ptr_data: [*const c_void; 2],
    pub int_data: u64,
}

pub const SOURCE_LOCATION_SIZE: usize = size_of::<RawSourceLocation>();

/// A source range: begin and end locations sharing the same pointer data
/// layout as [`RawSourceLocation`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSourceRange {
    pub ptr_data: [*const c_void; 2],
    pub begin_int_data: u64,
    pub end_int_data: u64,
}

pub const SOURCE_RANGE_SIZE: usize = size_of::<RawSourceRange>();

/// A string handle returned by value from string-producing calls. The
/// character data is reached through `clang_getCString` and MUST be
/// released with `clang_disposeString` exactly once.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawString {
    pub data: *const c_void,
    pub private_flags: u32,
}

pub const STRING_SIZE: usize = size_of::<RawString>();

/// One element of the unsaved-file array passed to parse and reparse.
/// `contents` is not NUL-terminated; `length` gives its byte count.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawUnsavedFile {
    pub filename: *const c_char,
    pub contents: *const c_char,
    pub length: c_ulong,
}

pub const UNSAVED_FILE_SIZE: usize = size_of::<RawUnsavedFile>();

// The kind/xdata header is 8 bytes regardless of pointer width, so the
// data words always start at offset 8. Pinned here so a layout edit that
// breaks the codec fails to compile instead of decoding garbage.
const _: () = assert!(std::mem::offset_of!(RawCursor, data) == 8);
const _: () = assert!(std::mem::offset_of!(RawType, data) == 8);
const _: () = assert!(CURSOR_SIZE == 8 + 3 * WORD);
const _: () = assert!(TYPE_SIZE == 8 + 2 * WORD);
