//! Byte-buffer encode/decode for the by-value ABI structs.
//!
//! Decoding takes an explicit `(buffer, offset)` window so a struct can be
//! read back out of a larger block, such as a snapshot log that packs many
//! cursors end to end. All offsets come from `offset_of!` on the `layout`
//! structs, keeping the codec and the FFI signatures in lockstep.
//!
//! Multi-byte integers are little-endian; opaque words are pointer-width.
//! Decoders panic if the window is shorter than the struct - windows are
//! produced by this workspace, never by native code.

use std::mem::offset_of;

use crate::kind::{CursorKind, TypeKind};
use crate::layout::{
    CURSOR_SIZE, RawCursor, RawSourceLocation, RawSourceRange, RawType, SOURCE_LOCATION_SIZE,
    SOURCE_RANGE_SIZE, STRING_SIZE, TYPE_SIZE, WORD,
};
use crate::value::{Cursor, SourceLocation, SourceRange, StringHandle, Type};

fn read_u32(buf: &[u8], off: usize) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[off..off + 4]);
    u32::from_le_bytes(b)
}

fn read_i32(buf: &[u8], off: usize) -> i32 {
    read_u32(buf, off) as i32
}

fn read_u64(buf: &[u8], off: usize) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&buf[off..off + 8]);
    u64::from_le_bytes(b)
}

fn read_word(buf: &[u8], off: usize) -> usize {
    let mut b = [0u8; WORD];
    b.copy_from_slice(&buf[off..off + WORD]);
    usize::from_le_bytes(b)
}

fn write_u32(buf: &mut [u8], off: usize, v: u32) {
    buf[off..off + 4].copy_from_slice(&v.to_le_bytes());
}

fn write_u64(buf: &mut [u8], off: usize, v: u64) {
    buf[off..off + 8].copy_from_slice(&v.to_le_bytes());
}

fn write_word(buf: &mut [u8], off: usize, v: usize) {
    buf[off..off + WORD].copy_from_slice(&v.to_le_bytes());
}

/// Decode a cursor from `buf` starting at `offset`.
pub fn decode_cursor(buf: &[u8], offset: usize) -> Cursor {
    let w = &buf[offset..offset + CURSOR_SIZE];
    let data_off = offset_of!(RawCursor, data);
    Cursor {
        kind: CursorKind(read_u32(w, offset_of!(RawCursor, kind))),
        xdata: read_i32(w, offset_of!(RawCursor, xdata)),
        data: [
            read_word(w, data_off),
            read_word(w, data_off + WORD),
            read_word(w, data_off + 2 * WORD),
        ],
    }
}

/// Encode a cursor into a fresh buffer of exactly [`CURSOR_SIZE`] bytes.
pub fn encode_cursor(cursor: &Cursor) -> [u8; CURSOR_SIZE] {
    let mut buf = [0u8; CURSOR_SIZE];
    let data_off = offset_of!(RawCursor, data);
    write_u32(&mut buf, offset_of!(RawCursor, kind), cursor.kind.0);
    write_u32(&mut buf, offset_of!(RawCursor, xdata), cursor.xdata as u32);
    write_word(&mut buf, data_off, cursor.data[0]);
    write_word(&mut buf, data_off + WORD, cursor.data[1]);
    write_word(&mut buf, data_off + 2 * WORD, cursor.data[2]);
    buf
}

/// Decode a type descriptor from `buf` starting at `offset`.
pub fn decode_type(buf: &[u8], offset: usize) -> Type {
    let w = &buf[offset..offset + TYPE_SIZE];
    let data_off = offset_of!(RawType, data);
    Type {
        kind: TypeKind(read_u32(w, offset_of!(RawType, kind))),
        data: [read_word(w, data_off), read_word(w, data_off + WORD)],
    }
}

/// Encode a type descriptor. The reserved padding word encodes as zero.
pub fn encode_type(ty: &Type) -> [u8; TYPE_SIZE] {
    let mut buf = [0u8; TYPE_SIZE];
    let data_off = offset_of!(RawType, data);
    write_u32(&mut buf, offset_of!(RawType, kind), ty.kind.0);
    write_word(&mut buf, data_off, ty.data[0]);
    write_word(&mut buf, data_off + WORD, ty.data[1]);
    buf
}

/// Decode a source location from `buf` starting at `offset`.
pub fn decode_location(buf: &[u8], offset: usize) -> SourceLocation {
    let w = &buf[offset..offset + SOURCE_LOCATION_SIZE];
    let ptr_off = offset_of!(RawSourceLocation, ptr_data);
    SourceLocation {
        ptr_data: [read_word(w, ptr_off), read_word(w, ptr_off + WORD)],
        int_data: read_u64(w, offset_of!(RawSourceLocation, int_data)),
    }
}

pub fn encode_location(loc: &SourceLocation) -> [u8; SOURCE_LOCATION_SIZE] {
    let mut buf = [0u8; SOURCE_LOCATION_SIZE];
    let ptr_off = offset_of!(RawSourceLocation, ptr_data);
    write_word(&mut buf, ptr_off, loc.ptr_data[0]);
    write_word(&mut buf, ptr_off + WORD, loc.ptr_data[1]);
    write_u64(&mut buf, offset_of!(RawSourceLocation, int_data), loc.int_data);
    buf
}

/// Decode a source range. Both ends share the range's pointer data; a
/// range whose words are all zero decodes to two null locations rather
/// than failing.
pub fn decode_range(buf: &[u8], offset: usize) -> SourceRange {
    let w = &buf[offset..offset + SOURCE_RANGE_SIZE];
    let ptr_off = offset_of!(RawSourceRange, ptr_data);
    let ptr_data = [read_word(w, ptr_off), read_word(w, ptr_off + WORD)];
    SourceRange {
        start: SourceLocation {
            ptr_data,
            int_data: read_u64(w, offset_of!(RawSourceRange, begin_int_data)),
        },
        end: SourceLocation {
            ptr_data,
            int_data: read_u64(w, offset_of!(RawSourceRange, end_int_data)),
        },
    }
}

pub fn encode_range(range: &SourceRange) -> [u8; SOURCE_RANGE_SIZE] {
    let mut buf = [0u8; SOURCE_RANGE_SIZE];
    let ptr_off = offset_of!(RawSourceRange, ptr_data);
    write_word(&mut buf, ptr_off, range.start.ptr_data[0]);
    write_word(&mut buf, ptr_off + WORD, range.start.ptr_data[1]);
    write_u64(
        &mut buf,
        offset_of!(RawSourceRange, begin_int_data),
        range.start.int_data,
    );
    write_u64(
        &mut buf,
        offset_of!(RawSourceRange, end_int_data),
        range.end.int_data,
    );
    buf
}

/// Decode a string handle from `buf` starting at `offset`.
pub fn decode_string(buf: &[u8], offset: usize) -> StringHandle {
    let w = &buf[offset..offset + STRING_SIZE];
    StringHandle {
        data: read_word(w, offset_of!(crate::layout::RawString, data)),
        private_flags: read_u32(w, offset_of!(crate::layout::RawString, private_flags)),
    }
}

pub fn encode_string(s: &StringHandle) -> [u8; STRING_SIZE] {
    let mut buf = [0u8; STRING_SIZE];
    write_word(&mut buf, offset_of!(crate::layout::RawString, data), s.data);
    write_u32(
        &mut buf,
        offset_of!(crate::layout::RawString, private_flags),
        s.private_flags,
    );
    buf
}
