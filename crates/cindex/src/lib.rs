//! cindex: dynamically-loaded libclang bindings.
//!
//! Binds libclang's C ABI at runtime through `libloading`: no link-time
//! dependency, one [`Clang`] client per loaded library. The client holds
//! the resolved symbol table and is injected into every operation, so the
//! library's single-threaded usage contract is visible in the signatures
//! instead of hiding behind ambient globals.
//!
//! # Example
//!
//! ```no_run
//! use cindex::Visit;
//!
//! let clang = cindex::load()?;
//! let index = cindex::Index::new(&clang, false, true)?;
//! let tu = index.parse("point.c", &["-std=c11"], &[])?;
//! for snap in clang.visit_children(&tu.cursor(), |node, _parent| {
//!     println!("{:?}", node.kind);
//!     Visit::Continue
//! }) {
//!     println!("spelling: {}", clang.cursor_spelling(&snap));
//! }
//! # Ok::<(), cindex::Error>(())
//! ```
//!
//! Handles (index, translation unit) must not cross threads; give each
//! concurrent unit of work its own [`Index`] and translation units.

use std::path::PathBuf;

pub mod client;
pub mod cursor;
pub mod diag;
pub mod index;
pub mod locate;
pub mod symbols;
pub mod tu;
pub mod ty;
pub mod visit;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod locate_tests;

pub use cindex_abi::{
    ArenaError, AsRawCursor, AsRawType, Availability, CStringArray, Cursor, CursorKind,
    NodeSnapshot, Severity, SourceLocation, SourceRange, Type, TypeKind, UnsavedFile,
    UnsavedFileArray,
};

pub use client::{Clang, load, load_from, loaded, unload};
pub use cursor::Position;
pub use diag::Diagnostic;
pub use index::Index;
pub use tu::{ParseOptions, TranslationUnit};
pub use visit::{Visit, VisitEncoding};

/// Errors surfaced by the binding layer.
///
/// Accessor edge cases (out-of-range argument index, non-function
/// argument counts) are NOT errors: they pass through libclang's sentinel
/// values unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No library file found at any well-known location.
    #[error("libclang not found after checking {searched} locations; {hint}")]
    LibraryNotFound { searched: usize, hint: &'static str },

    /// The OS loader rejected the library file.
    #[error("failed to load libclang from `{path}`: {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    /// A required function is absent from the loaded library, typically a
    /// version mismatch.
    #[error("symbol `{name}` is missing from `{path}`")]
    MissingSymbol { name: &'static str, path: PathBuf },

    /// An operation needs the process-wide client before any `load()`.
    #[error("libclang is not loaded; call cindex::load() first")]
    NotLoaded,

    /// The source path was rejected before reaching the native ABI.
    #[error("invalid source path: {reason}")]
    InvalidSourcePath { reason: String },

    /// An argument string could not be encoded for the C side.
    #[error(transparent)]
    Arena(#[from] ArenaError),

    /// `clang_createIndex` returned a null index handle.
    #[error("clang_createIndex returned a null index")]
    IndexCreateFailed,

    /// The native parse returned a null translation unit.
    #[error("failed to parse `{path}`: libclang returned a null translation unit")]
    ParseFailed { path: String },

    /// Reparse returned a non-zero status. The raw code is preserved for
    /// the caller; this layer does not interpret it and does not retry.
    #[error("reparse failed with status code {code}")]
    ReparseFailed { code: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
