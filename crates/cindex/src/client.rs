//! The `Clang` client context and the process-wide load/unload surface.
//!
//! A [`Clang`] owns one loaded library handle and its resolved symbol
//! table; every operation is a method on it (or on a handle type holding
//! an `Arc` to it). The free functions [`load`]/[`unload`] manage one
//! shared client for callers that want the classic process-wide
//! lifecycle; both are idempotent in both directions.

use std::ffi::CStr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cindex_abi::layout::RawString;
use libloading::Library;

use crate::locate;
use crate::symbols::SymbolTable;
use crate::visit::VisitEncoding;
use crate::{Error, Result};

/// A loaded libclang client: library handle, resolved symbols, and the
/// traversal continuation encoding.
///
/// Handles derived from a client must stay on the thread that uses them;
/// the client itself is immutable after construction.
pub struct Clang {
    pub(crate) sym: SymbolTable,
    visit_encoding: VisitEncoding,
    path: PathBuf,
    // Held for its Drop: symbols in `sym` point into this mapping.
    _lib: Library,
}

impl Clang {
    /// Load the library at `path` and resolve the full symbol table.
    pub fn open(path: &Path) -> Result<Clang> {
        // SAFETY: loading libclang runs its initializers; there is no way
        // to validate a shared library beyond trusting the file.
        let lib = unsafe { Library::new(path) }.map_err(|e| Error::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let sym = SymbolTable::resolve(&lib, path)?;
        log::debug!("loaded libclang from {}", path.display());
        Ok(Clang {
            sym,
            visit_encoding: VisitEncoding::default(),
            path: path.to_path_buf(),
            _lib: lib,
        })
    }

    /// Override the traversal continuation encoding. The default matches
    /// libclang's documented break/continue/recurse values; some foreign
    /// calling conventions have been observed to invert the continue
    /// code, so the mapping is data rather than a constant.
    pub fn with_visit_encoding(mut self, encoding: VisitEncoding) -> Clang {
        self.visit_encoding = encoding;
        self
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn visit_encoding(&self) -> VisitEncoding {
        self.visit_encoding
    }

    /// Copy a native string handle into an owned `String`, then release
    /// the handle. The release happens on every path, including a null
    /// character pointer.
    pub(crate) fn take_string(&self, raw: RawString) -> String {
        let ptr = unsafe { (self.sym.get_cstring)(raw) };
        let out = if ptr.is_null() {
            String::new()
        } else {
            // SAFETY: libclang returns a NUL-terminated string valid
            // until the handle is disposed below.
            unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
        };
        unsafe { (self.sym.dispose_string)(raw) };
        out
    }
}

impl std::fmt::Debug for Clang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clang").field("path", &self.path).finish()
    }
}

static LOADED: Mutex<Option<Arc<Clang>>> = Mutex::new(None);

fn slot() -> std::sync::MutexGuard<'static, Option<Arc<Clang>>> {
    LOADED.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Load the process-wide client, locating the library on well-known
/// paths. A second call while loaded is a no-op returning the live
/// client; no second native open happens.
pub fn load() -> Result<Arc<Clang>> {
    let mut guard = slot();
    if let Some(clang) = &*guard {
        return Ok(Arc::clone(clang));
    }
    let path = locate::find_library()?;
    let clang = Arc::new(Clang::open(&path)?);
    *guard = Some(Arc::clone(&clang));
    Ok(clang)
}

/// Load the process-wide client from an explicit path. Idempotent like
/// [`load`]: if a client is already live it is returned unchanged, even
/// if it was loaded from a different path.
pub fn load_from(path: impl AsRef<Path>) -> Result<Arc<Clang>> {
    let mut guard = slot();
    if let Some(clang) = &*guard {
        return Ok(Arc::clone(clang));
    }
    let clang = Arc::new(Clang::open(path.as_ref())?);
    *guard = Some(Arc::clone(&clang));
    Ok(clang)
}

/// Drop the process-wide client. The library unloads once the last
/// outstanding `Arc<Clang>` drops. Unloading when nothing is loaded is a
/// no-op.
pub fn unload() {
    slot().take();
}

/// The live process-wide client, if any. Use when an operation should
/// fail with [`Error::NotLoaded`] rather than trigger a load:
/// `cindex::loaded().ok_or(Error::NotLoaded)?`.
pub fn loaded() -> Option<Arc<Clang>> {
    slot().as_ref().map(Arc::clone)
}
