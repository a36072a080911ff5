use crate::kind::{CursorKind, TypeKind};
use crate::layout::{RawCursor, RawType};
use crate::value::{AsRawCursor, AsRawType, Cursor, NodeSnapshot, SourceLocation, Type};

#[test]
fn null_cursor_sentinel() {
    let c = Cursor::null();
    assert!(c.is_null());
    assert_eq!(c.kind, CursorKind(0));
    assert_eq!(c.data, [0; 3]);

    let mut nonnull = Cursor::null();
    nonnull.data[2] = 1;
    assert!(!nonnull.is_null());
}

#[test]
fn cursor_raw_round_trip() {
    let c = Cursor {
        kind: CursorKind::STRUCT_DECL,
        xdata: 11,
        data: [1, 2, usize::MAX],
    };
    assert_eq!(Cursor::from_raw(c.to_raw()), c);
}

#[test]
fn type_raw_round_trip() {
    let t = Type {
        kind: TypeKind::RECORD,
        data: [5, 6],
    };
    assert_eq!(Type::from_raw(t.to_raw()), t);
    assert!(Type::invalid().is_invalid());
}

#[test]
fn snapshot_preserves_cursor() {
    let c = Cursor {
        kind: CursorKind::FIELD_DECL,
        xdata: -1,
        data: [7, 8, 9],
    };
    let snap = NodeSnapshot::from_raw(c.to_raw());
    assert_eq!(snap.cursor(), c);
}

#[test]
fn snapshot_normalizes_without_decode() {
    let raw = RawCursor {
        kind: 8,
        xdata: 3,
        data: [std::ptr::null(); 3],
    };
    let snap = NodeSnapshot::from_raw(raw);
    assert_eq!(snap.as_raw(), raw);
}

#[test]
fn decoded_and_raw_normalize_identically() {
    let c = Cursor {
        kind: CursorKind::VAR_DECL,
        xdata: 0,
        data: [10, 20, 30],
    };
    let from_decoded = c.as_raw();
    let from_snapshot = NodeSnapshot::from_raw(c.to_raw()).as_raw();
    assert_eq!(from_decoded, from_snapshot);
}

#[test]
fn raw_type_passes_through() {
    let raw = RawType {
        kind: 17,
        reserved: 0xffff_ffff,
        data: [std::ptr::null(); 2],
    };
    // Raw input keeps every byte, including the padding word.
    assert_eq!(raw.as_raw(), raw);
    // Decoded input re-encodes padding as zero.
    assert_eq!(Type::from_raw(raw).as_raw().reserved, 0);
}

#[test]
fn location_packed_split() {
    let loc = SourceLocation {
        ptr_data: [0; 2],
        int_data: (12u64 << 32) | 34,
    };
    assert_eq!(loc.line(), 34);
    assert_eq!(loc.column(), 12);
    assert!(SourceLocation::null().is_null());
}
