//! Translation unit lifecycle: parse, reparse, dispose.
//!
//! A parse call hands libclang pointers into argument and unsaved-file
//! arenas. libclang may keep reading through the unsaved-file pointers
//! for the life of the returned handle, so the arenas move into the
//! `TranslationUnit` and drop only after the handle is disposed.

use std::sync::Arc;

use cindex_abi::arena::{CStringArray, UnsavedFile, UnsavedFileArray};
use cindex_abi::value::Cursor;

use crate::client::Clang;
use crate::index::Index;
use crate::symbols::CXTranslationUnit;
use crate::{Error, Result};

/// Parse option flags, forwarded verbatim as the native options word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ParseOptions(pub u32);

impl ParseOptions {
    pub const NONE: ParseOptions = ParseOptions(0);
    pub const DETAILED_PREPROCESSING_RECORD: ParseOptions = ParseOptions(0x01);
    pub const INCOMPLETE: ParseOptions = ParseOptions(0x02);
    pub const PRECOMPILED_PREAMBLE: ParseOptions = ParseOptions(0x04);
    pub const CACHE_COMPLETION_RESULTS: ParseOptions = ParseOptions(0x08);
    pub const SKIP_FUNCTION_BODIES: ParseOptions = ParseOptions(0x40);
    pub const KEEP_GOING: ParseOptions = ParseOptions(0x200);
    pub const SINGLE_FILE_PARSE: ParseOptions = ParseOptions(0x400);

    pub fn with(self, other: ParseOptions) -> ParseOptions {
        ParseOptions(self.0 | other.0)
    }
}

/// Buffers the native side may still read through; owned by the
/// translation unit so they outlive the handle.
#[derive(Debug)]
struct KeepAlive {
    _args: CStringArray,
    _unsaved: UnsavedFileArray,
}

/// A parsed translation unit. States: parsed, reparsed any number of
/// times (same handle identity), disposed once on drop.
#[derive(Debug)]
pub struct TranslationUnit {
    clang: Arc<Clang>,
    handle: CXTranslationUnit,
    keep_alive: KeepAlive,
}

fn validate_source_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::InvalidSourcePath {
            reason: "empty path".to_string(),
        });
    }
    if path.contains('\0') {
        return Err(Error::InvalidSourcePath {
            reason: "path contains a NUL byte".to_string(),
        });
    }
    Ok(())
}

impl Index {
    /// Parse `source_path` with default options.
    pub fn parse<S: AsRef<str>>(
        &self,
        source_path: &str,
        args: &[S],
        unsaved: &[UnsavedFile],
    ) -> Result<TranslationUnit> {
        self.parse_with_options(source_path, args, unsaved, ParseOptions::NONE)
    }

    /// Parse `source_path` into a translation unit.
    ///
    /// Inputs are validated before any native call: a bad path never
    /// reaches the ABI. A null handle from the native side becomes
    /// [`Error::ParseFailed`]; libclang does not say why, so the error
    /// carries the path and the caller decides whether to retry with
    /// different arguments.
    pub fn parse_with_options<S: AsRef<str>>(
        &self,
        source_path: &str,
        args: &[S],
        unsaved: &[UnsavedFile],
        options: ParseOptions,
    ) -> Result<TranslationUnit> {
        validate_source_path(source_path)?;
        let c_path = std::ffi::CString::new(source_path).map_err(|e| {
            cindex_abi::ArenaError::InteriorNul {
                position: e.nul_position(),
            }
        })?;
        let c_args = CStringArray::new(args)?;
        let c_unsaved = UnsavedFileArray::new(unsaved)?;

        let handle = unsafe {
            (self.clang.sym.parse_translation_unit)(
                self.handle,
                c_path.as_ptr(),
                c_args.as_ptr(),
                c_args.len() as i32,
                c_unsaved.as_ptr(),
                c_unsaved.len() as u32,
                options.0,
            )
        };
        if handle.is_null() {
            return Err(Error::ParseFailed {
                path: source_path.to_string(),
            });
        }
        Ok(TranslationUnit {
            clang: Arc::clone(&self.clang),
            handle,
            keep_alive: KeepAlive {
                _args: c_args,
                _unsaved: c_unsaved,
            },
        })
    }
}

impl TranslationUnit {
    /// The root cursor covering the whole unit.
    pub fn cursor(&self) -> Cursor {
        let raw = unsafe { (self.clang.sym.get_translation_unit_cursor)(self.handle) };
        Cursor::from_raw(raw)
    }

    /// Reparse in place with a fresh set of unsaved overrides.
    ///
    /// Handle identity is preserved; cursors from before the reparse are
    /// stale. A non-zero native status surfaces as
    /// [`Error::ReparseFailed`] with the raw code; no retry here. On
    /// success the new unsaved buffers replace the old keep-alive set.
    pub fn reparse(&mut self, unsaved: &[UnsavedFile]) -> Result<()> {
        let c_unsaved = UnsavedFileArray::new(unsaved)?;
        let code = unsafe {
            (self.clang.sym.reparse_translation_unit)(
                self.handle,
                c_unsaved.len() as u32,
                c_unsaved.as_ptr(),
                0,
            )
        };
        if code != 0 {
            return Err(Error::ReparseFailed { code });
        }
        self.keep_alive._unsaved = c_unsaved;
        Ok(())
    }

    pub(crate) fn clang(&self) -> &Arc<Clang> {
        &self.clang
    }

    pub(crate) fn handle(&self) -> CXTranslationUnit {
        self.handle
    }
}

impl Drop for TranslationUnit {
    fn drop(&mut self) {
        unsafe { (self.clang.sym.dispose_translation_unit)(self.handle) };
    }
}

#[cfg(test)]
#[path = "tu_tests.rs"]
mod tu_tests;
