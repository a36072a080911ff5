use crate::codec::{
    decode_cursor, decode_location, decode_range, decode_string, decode_type, encode_cursor,
    encode_location, encode_range, encode_string, encode_type,
};
use crate::kind::{CursorKind, TypeKind};
use crate::layout::{CURSOR_SIZE, SOURCE_LOCATION_SIZE, TYPE_SIZE, WORD};
use crate::value::{Cursor, SourceLocation, SourceRange, StringHandle, Type};

fn sample_cursor() -> Cursor {
    Cursor {
        kind: CursorKind::FUNCTION_DECL,
        xdata: -7,
        data: [0xdead_beef, 0, usize::MAX],
    }
}

#[test]
fn cursor_round_trip() {
    let c = sample_cursor();
    assert_eq!(decode_cursor(&encode_cursor(&c), 0), c);
}

#[test]
fn cursor_round_trip_null() {
    let c = Cursor::null();
    assert_eq!(decode_cursor(&encode_cursor(&c), 0), c);
}

#[test]
fn cursor_round_trip_max_words() {
    let c = Cursor {
        kind: CursorKind(u32::MAX),
        xdata: i32::MIN,
        data: [usize::MAX; 3],
    };
    assert_eq!(decode_cursor(&encode_cursor(&c), 0), c);
}

#[test]
fn cursor_decodes_from_window() {
    // A cursor embedded mid-buffer, as in a packed snapshot log.
    let c = sample_cursor();
    let mut log = vec![0xab_u8; 8];
    log.extend_from_slice(&encode_cursor(&c));
    log.extend_from_slice(&[0xcd; 4]);
    assert_eq!(decode_cursor(&log, 8), c);
}

#[test]
fn cursor_field_offsets() {
    let buf = encode_cursor(&sample_cursor());
    assert_eq!(u32::from_le_bytes(buf[0..4].try_into().unwrap()), 8);
    assert_eq!(i32::from_le_bytes(buf[4..8].try_into().unwrap()), -7);
    let mut word = [0u8; WORD];
    word.copy_from_slice(&buf[8..8 + WORD]);
    assert_eq!(usize::from_le_bytes(word), 0xdead_beef);
}

#[test]
fn type_round_trip() {
    let t = Type {
        kind: TypeKind::POINTER,
        data: [1, usize::MAX],
    };
    assert_eq!(decode_type(&encode_type(&t), 0), t);
    assert_eq!(decode_type(&encode_type(&Type::invalid()), 0), Type::invalid());
}

#[test]
fn type_reserved_word_encodes_zero() {
    let buf = encode_type(&Type {
        kind: TypeKind::INT,
        data: [usize::MAX; 2],
    });
    assert_eq!(&buf[4..8], &[0, 0, 0, 0]);
}

#[test]
fn location_round_trip() {
    let loc = SourceLocation {
        ptr_data: [42, usize::MAX],
        int_data: (99 << 32) | 7,
    };
    assert_eq!(decode_location(&encode_location(&loc), 0), loc);
    assert_eq!(loc.line(), 7);
    assert_eq!(loc.column(), 99);
}

#[test]
fn range_round_trip() {
    let r = SourceRange {
        start: SourceLocation {
            ptr_data: [3, 4],
            int_data: 1,
        },
        end: SourceLocation {
            ptr_data: [3, 4],
            int_data: u64::MAX,
        },
    };
    assert_eq!(decode_range(&encode_range(&r), 0), r);
}

#[test]
fn range_of_zeros_decodes_to_null_ends() {
    let r = decode_range(&encode_range(&SourceRange::null()), 0);
    assert!(r.start.is_null());
    assert!(r.end.is_null());
}

#[test]
fn string_handle_round_trip() {
    let s = StringHandle {
        data: usize::MAX,
        private_flags: 3,
    };
    assert_eq!(decode_string(&encode_string(&s), 0), s);
}

#[test]
fn struct_sizes_match_layout() {
    assert_eq!(encode_cursor(&Cursor::null()).len(), CURSOR_SIZE);
    assert_eq!(encode_type(&Type::invalid()).len(), TYPE_SIZE);
    assert_eq!(
        encode_location(&SourceLocation::null()).len(),
        SOURCE_LOCATION_SIZE
    );
    assert_eq!(CURSOR_SIZE, 8 + 3 * WORD);
}
