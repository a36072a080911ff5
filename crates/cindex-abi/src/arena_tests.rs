use std::ffi::CStr;

use crate::arena::{ArenaError, CStringArray, UnsavedFile, UnsavedFileArray};

#[test]
fn cstring_array_layout() {
    let args = CStringArray::new(&["-I/usr/include", "-DNDEBUG"]).unwrap();
    assert_eq!(args.len(), 2);
    let ptrs = args.as_ptr();
    assert!(!ptrs.is_null());
    unsafe {
        assert_eq!(
            CStr::from_ptr(*ptrs).to_str().unwrap(),
            "-I/usr/include"
        );
        assert_eq!(CStr::from_ptr(*ptrs.add(1)).to_str().unwrap(), "-DNDEBUG");
    }
}

#[test]
fn cstring_array_empty_is_null() {
    let args = CStringArray::new::<&str>(&[]).unwrap();
    assert!(args.is_empty());
    assert!(args.as_ptr().is_null());
}

#[test]
fn cstring_array_survives_a_move() {
    let args = CStringArray::new(&["alpha"]).unwrap();
    let before = unsafe { *args.as_ptr() };
    let moved = args;
    assert_eq!(unsafe { *moved.as_ptr() }, before);
}

#[test]
fn cstring_array_rejects_interior_nul() {
    let err = CStringArray::new(&["ok", "bad\0arg"]).unwrap_err();
    assert!(matches!(err, ArenaError::InteriorNul { position: 3 }));
}

#[test]
fn unsaved_file_array_layout() {
    let files = [
        UnsavedFile::new("a.c", "int a;"),
        UnsavedFile::new("b.c", "int bb;"),
    ];
    let arr = UnsavedFileArray::new(&files).unwrap();
    assert_eq!(arr.len(), 2);
    assert!(!arr.as_ptr().is_null());

    let elems = arr.elements();
    unsafe {
        assert_eq!(CStr::from_ptr(elems[0].filename).to_str().unwrap(), "a.c");
        assert_eq!(CStr::from_ptr(elems[1].filename).to_str().unwrap(), "b.c");
    }
    assert_eq!(elems[0].length, 6);
    assert_eq!(elems[1].length, 7);
    assert_eq!(arr.contents_of(1), b"int bb;");
    // Contents pointers reach the owned buffers, not temporaries.
    assert_eq!(elems[0].contents.cast::<u8>(), arr.contents_of(0).as_ptr());
}

#[test]
fn unsaved_file_array_empty_is_null() {
    let arr = UnsavedFileArray::new(&[]).unwrap();
    assert!(arr.is_empty());
    assert!(arr.as_ptr().is_null());
}

#[test]
fn unsaved_file_array_rejects_nul_in_filename() {
    let err = UnsavedFileArray::new(&[UnsavedFile::new("a\0.c", "")]).unwrap_err();
    assert!(matches!(err, ArenaError::InteriorNul { position: 1 }));
}

#[test]
fn unsaved_contents_may_contain_nul() {
    // Contents are length-delimited, so interior NUL is legal there.
    let arr = UnsavedFileArray::new(&[UnsavedFile::new("a.c", "a\0b")]).unwrap();
    assert_eq!(arr.elements()[0].length, 3);
    assert_eq!(arr.contents_of(0), b"a\0b");
}
