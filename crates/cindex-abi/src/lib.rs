//! ABI layer for the cindex libclang bindings.
//!
//! Three layers:
//! - **Layouts** (`layout`): `#[repr(C)]` mirrors of every struct libclang
//!   passes or returns by value, used directly as FFI signatures.
//! - **Codec** (`codec`): byte-buffer encode/decode for the same shapes,
//!   reading fields at fixed offsets so a struct can be recovered from a
//!   window into a larger buffer (e.g. a traversal snapshot log).
//! - **Arena** (`arena`): owned backing buffers for pointer arguments
//!   (string arrays, unsaved-file arrays) that native code reads through.
//!
//! The layouts are the single source of truth: codec offsets are derived
//! with `offset_of!`, so the two can not drift apart.

pub mod arena;
pub mod codec;
pub mod kind;
pub mod layout;
pub mod value;

#[cfg(test)]
mod arena_tests;
#[cfg(test)]
mod codec_tests;
#[cfg(test)]
mod value_tests;

pub use arena::{ArenaError, CStringArray, UnsavedFile, UnsavedFileArray};
pub use kind::{Availability, CursorKind, Severity, TypeKind};
pub use value::{
    AsRawCursor, AsRawType, Cursor, NodeSnapshot, SourceLocation, SourceRange, StringHandle, Type,
};
