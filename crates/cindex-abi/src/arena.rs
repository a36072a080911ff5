//! Keep-alive arenas for pointer arguments.
//!
//! A native call that receives `const char**` or a struct array reads
//! through those pointers while it runs, and a parse call may keep reading
//! for the lifetime of the translation unit it returns. Each arena value
//! owns every byte buffer its exposed pointer reaches, so keeping the
//! value alive discharges the whole obligation. The arenas only guarantee
//! correct construction; dropping one while native code can still read
//! through its pointer is undefined behavior on the native side and
//! cannot be detected here.

use std::ffi::CString;
use std::os::raw::{c_char, c_ulong};
use std::ptr;

use crate::layout::RawUnsavedFile;

/// Errors constructing an arena from host strings.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArenaError {
    /// C strings are NUL-terminated; an interior NUL cannot be encoded.
    #[error("string argument contains an interior NUL byte at position {position}")]
    InteriorNul { position: usize },
}

fn to_cstring(s: &str) -> Result<CString, ArenaError> {
    CString::new(s).map_err(|e| ArenaError::InteriorNul {
        position: e.nul_position(),
    })
}

/// An ordered `const char*[]` argument with its backing strings.
///
/// Two layers, both owned here: each string NUL-terminated on the heap,
/// plus the array of their addresses. Both stay at fixed addresses when
/// the value moves.
#[derive(Debug)]
pub struct CStringArray {
    owned: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl CStringArray {
    pub fn new<S: AsRef<str>>(items: &[S]) -> Result<CStringArray, ArenaError> {
        let mut owned = Vec::with_capacity(items.len());
        for item in items {
            owned.push(to_cstring(item.as_ref())?);
        }
        let ptrs = owned.iter().map(|s| s.as_ptr()).collect();
        Ok(CStringArray { owned, ptrs })
    }

    /// Pointer to the address array, or null for an empty list. Native
    /// calls treat (null, 0) as "no items"; a non-null zero-length array
    /// is deliberately never produced.
    pub fn as_ptr(&self) -> *const *const c_char {
        if self.ptrs.is_empty() {
            ptr::null()
        } else {
            self.ptrs.as_ptr()
        }
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}

/// An in-memory override of one file's contents, used for speculative or
/// incremental parsing without touching disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedFile {
    pub filename: String,
    pub contents: String,
}

impl UnsavedFile {
    pub fn new(filename: impl Into<String>, contents: impl Into<String>) -> UnsavedFile {
        UnsavedFile {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

/// A contiguous unsaved-file struct array with its backing buffers.
///
/// Element layout is [`RawUnsavedFile`]: two string pointers plus a byte
/// length. Filenames are NUL-terminated; contents are length-delimited
/// and may contain any bytes.
#[derive(Debug)]
pub struct UnsavedFileArray {
    filenames: Vec<CString>,
    contents: Vec<Box<[u8]>>,
    raw: Vec<RawUnsavedFile>,
}

impl UnsavedFileArray {
    pub fn new(files: &[UnsavedFile]) -> Result<UnsavedFileArray, ArenaError> {
        let mut filenames = Vec::with_capacity(files.len());
        let mut contents: Vec<Box<[u8]>> = Vec::with_capacity(files.len());
        for file in files {
            filenames.push(to_cstring(&file.filename)?);
            contents.push(file.contents.as_bytes().into());
        }
        let raw = filenames
            .iter()
            .zip(&contents)
            .map(|(name, body)| RawUnsavedFile {
                filename: name.as_ptr(),
                contents: body.as_ptr().cast::<c_char>(),
                length: body.len() as c_ulong,
            })
            .collect();
        Ok(UnsavedFileArray {
            filenames,
            contents,
            raw,
        })
    }

    /// Pointer to the element array, or null for an empty list.
    pub fn as_ptr(&self) -> *mut RawUnsavedFile {
        if self.raw.is_empty() {
            ptr::null_mut()
        } else {
            self.raw.as_ptr().cast_mut()
        }
    }

    pub fn len(&self) -> usize {
        self.filenames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty()
    }

    /// The raw elements, for inspection in tests.
    pub fn elements(&self) -> &[RawUnsavedFile] {
        &self.raw
    }

    /// Backing contents buffer for element `index`.
    pub fn contents_of(&self, index: usize) -> &[u8] {
        &self.contents[index]
    }
}
