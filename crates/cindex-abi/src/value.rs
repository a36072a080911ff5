//! Decoded, host-side views of the ABI structs.
//!
//! These are plain value types: equality and validity are structural, and
//! none of them owns native resources. The opaque words are carried as
//! `usize` so values stay `Send`-neutral plain data; they are only ever
//! turned back into pointers at the FFI boundary.

use std::ffi::c_void;

use crate::codec;
use crate::kind::{CursorKind, TypeKind};
use crate::layout::{CURSOR_SIZE, RawCursor, RawSourceLocation, RawSourceRange, RawType};

/// A decoded AST cursor.
///
/// `kind` is the only field this layer interprets. The data words belong
/// to the native library and are forwarded verbatim; lifetime is tied to
/// the translation unit the cursor came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub kind: CursorKind,
    pub xdata: i32,
    pub data: [usize; 3],
}

impl Cursor {
    /// The null-cursor sentinel: kind zero, all words zero.
    pub const fn null() -> Cursor {
        Cursor {
            kind: CursorKind(0),
            xdata: 0,
            data: [0; 3],
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind.0 == 0 && self.data == [0; 3]
    }

    pub fn from_raw(raw: RawCursor) -> Cursor {
        Cursor {
            kind: CursorKind(raw.kind),
            xdata: raw.xdata,
            data: [
                raw.data[0] as usize,
                raw.data[1] as usize,
                raw.data[2] as usize,
            ],
        }
    }

    pub fn to_raw(&self) -> RawCursor {
        RawCursor {
            kind: self.kind.0,
            xdata: self.xdata,
            data: [
                self.data[0] as *const c_void,
                self.data[1] as *const c_void,
                self.data[2] as *const c_void,
            ],
        }
    }
}

/// A decoded type descriptor. The C layout's padding word is dropped;
/// it re-encodes as zero, which the native side never reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Type {
    pub kind: TypeKind,
    pub data: [usize; 2],
}

impl Type {
    /// The invalid-type sentinel returned for out-of-range queries.
    pub const fn invalid() -> Type {
        Type {
            kind: TypeKind::INVALID,
            data: [0; 2],
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.kind.is_invalid()
    }

    pub fn from_raw(raw: RawType) -> Type {
        Type {
            kind: TypeKind(raw.kind),
            data: [raw.data[0] as usize, raw.data[1] as usize],
        }
    }

    pub fn to_raw(&self) -> RawType {
        RawType {
            kind: self.kind.0,
            reserved: 0,
            data: [self.data[0] as *const c_void, self.data[1] as *const c_void],
        }
    }
}

/// A decoded source location.
///
/// The line/column split of `int_data` (low 32 bits = line, high 32 bits
/// = column) is this layer's own convention, not a documented part of the
/// native ABI; when the bound library exports an expansion-location call
/// the accessors prefer that and only fall back to this split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub ptr_data: [usize; 2],
    pub int_data: u64,
}

impl SourceLocation {
    /// The default location: null file, line and column zero.
    pub const fn null() -> SourceLocation {
        SourceLocation {
            ptr_data: [0; 2],
            int_data: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.ptr_data == [0; 2] && self.int_data == 0
    }

    /// Line number per the packed-integer convention.
    pub fn line(&self) -> u32 {
        self.int_data as u32
    }

    /// Column number per the packed-integer convention.
    pub fn column(&self) -> u32 {
        (self.int_data >> 32) as u32
    }

    pub fn from_raw(raw: RawSourceLocation) -> SourceLocation {
        SourceLocation {
            ptr_data: [raw.ptr_data[0] as usize, raw.ptr_data[1] as usize],
            int_data: raw.int_data,
        }
    }

    pub fn to_raw(&self) -> RawSourceLocation {
        RawSourceLocation {
            ptr_data: [
                self.ptr_data[0] as *const c_void,
                self.ptr_data[1] as *const c_void,
            ],
            int_data: self.int_data,
        }
    }
}

/// A decoded source range. Either end may independently be the null
/// location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRange {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceRange {
    pub const fn null() -> SourceRange {
        SourceRange {
            start: SourceLocation::null(),
            end: SourceLocation::null(),
        }
    }

    pub fn from_raw(raw: RawSourceRange) -> SourceRange {
        let ptr_data = [raw.ptr_data[0] as usize, raw.ptr_data[1] as usize];
        SourceRange {
            start: SourceLocation {
                ptr_data,
                int_data: raw.begin_int_data,
            },
            end: SourceLocation {
                ptr_data,
                int_data: raw.end_int_data,
            },
        }
    }
}

/// A decoded string handle. Transient: the underlying native string must
/// be copied out and disposed by the accessor that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringHandle {
    pub data: usize,
    pub private_flags: u32,
}

/// A by-value snapshot of one visited node's raw bytes.
///
/// The buffer a traversal callback receives is only valid for the
/// duration of the callback; snapshots copy it so callers can keep using
/// visited nodes after the native call unwinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeSnapshot {
    bytes: [u8; CURSOR_SIZE],
}

impl NodeSnapshot {
    pub fn from_raw(raw: RawCursor) -> NodeSnapshot {
        let mut bytes = [0u8; CURSOR_SIZE];
        // SAFETY: RawCursor is repr(C) plain data of exactly CURSOR_SIZE
        // bytes; copying it as bytes is a plain memcpy.
        unsafe {
            std::ptr::copy_nonoverlapping(
                (&raw as *const RawCursor).cast::<u8>(),
                bytes.as_mut_ptr(),
                CURSOR_SIZE,
            );
        }
        NodeSnapshot { bytes }
    }

    /// The raw snapshot bytes, e.g. for packing into a history buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decode into a typed cursor.
    pub fn cursor(&self) -> Cursor {
        codec::decode_cursor(&self.bytes, 0)
    }
}

/// Normalization to the native-callable cursor form.
///
/// Accessors take any of: a decoded [`Cursor`] (re-encoded), a raw
/// [`RawCursor`] (passed through), or a [`NodeSnapshot`] (byte copy, no
/// decode/re-encode round trip).
pub trait AsRawCursor {
    fn as_raw(&self) -> RawCursor;
}

impl AsRawCursor for Cursor {
    fn as_raw(&self) -> RawCursor {
        self.to_raw()
    }
}

impl AsRawCursor for RawCursor {
    fn as_raw(&self) -> RawCursor {
        *self
    }
}

impl AsRawCursor for NodeSnapshot {
    fn as_raw(&self) -> RawCursor {
        // SAFETY: the bytes were produced from a RawCursor by `from_raw`;
        // an unaligned read reconstitutes it without decoding.
        unsafe { std::ptr::read_unaligned(self.bytes.as_ptr().cast::<RawCursor>()) }
    }
}

/// Normalization to the native-callable type-descriptor form.
pub trait AsRawType {
    fn as_raw(&self) -> RawType;
}

impl AsRawType for Type {
    fn as_raw(&self) -> RawType {
        self.to_raw()
    }
}

impl AsRawType for RawType {
    fn as_raw(&self) -> RawType {
        *self
    }
}
