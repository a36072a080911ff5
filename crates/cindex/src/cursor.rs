//! Cursor accessors.
//!
//! Every accessor takes its cursor in decoded or raw-snapshot form (see
//! [`AsRawCursor`]), normalizes it, calls the resolved symbol, and
//! decodes struct-shaped results. `kind` is the exception: newer library
//! versions carry the kind as a struct field, so it is read directly and
//! never goes through a symbol.

use cindex_abi::kind::{Availability, CursorKind};
use cindex_abi::value::{AsRawCursor, Cursor, SourceLocation, SourceRange, Type};

use crate::client::Clang;

/// A resolved line/column position.
///
/// `offset` is the byte offset when the bound library exports
/// `clang_getExpansionLocation`; `None` when the position came from the
/// packed-integer fallback, which cannot provide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: Option<u32>,
}

impl Clang {
    /// Kind of the cursor. Direct field read; no native call.
    pub fn cursor_kind<C: AsRawCursor>(&self, cursor: &C) -> CursorKind {
        CursorKind(cursor.as_raw().kind)
    }

    /// Short name of the entity the cursor refers to.
    pub fn cursor_spelling<C: AsRawCursor>(&self, cursor: &C) -> String {
        self.take_string(unsafe { (self.sym.get_cursor_spelling)(cursor.as_raw()) })
    }

    /// Display name, e.g. a function name with its argument types.
    pub fn cursor_display_name<C: AsRawCursor>(&self, cursor: &C) -> String {
        self.take_string(unsafe { (self.sym.get_cursor_display_name)(cursor.as_raw()) })
    }

    /// Unified Symbol Resolution string, empty for cursors without one.
    pub fn cursor_usr<C: AsRawCursor>(&self, cursor: &C) -> String {
        self.take_string(unsafe { (self.sym.get_cursor_usr)(cursor.as_raw()) })
    }

    /// Source location of the cursor.
    pub fn cursor_location<C: AsRawCursor>(&self, cursor: &C) -> SourceLocation {
        SourceLocation::from_raw(unsafe { (self.sym.get_cursor_location)(cursor.as_raw()) })
    }

    /// Source extent (begin/end locations) of the cursor.
    pub fn cursor_extent<C: AsRawCursor>(&self, cursor: &C) -> SourceRange {
        SourceRange::from_raw(unsafe { (self.sym.get_cursor_extent)(cursor.as_raw()) })
    }

    /// Type of the entity the cursor refers to.
    pub fn cursor_type<C: AsRawCursor>(&self, cursor: &C) -> Type {
        Type::from_raw(unsafe { (self.sym.get_cursor_type)(cursor.as_raw()) })
    }

    /// Cursor this cursor references, or the null cursor.
    pub fn cursor_referenced<C: AsRawCursor>(&self, cursor: &C) -> Cursor {
        Cursor::from_raw(unsafe { (self.sym.get_cursor_referenced)(cursor.as_raw()) })
    }

    /// Defining cursor for the referenced entity, or the null cursor.
    pub fn cursor_definition<C: AsRawCursor>(&self, cursor: &C) -> Cursor {
        Cursor::from_raw(unsafe { (self.sym.get_cursor_definition)(cursor.as_raw()) })
    }

    /// Availability of the entity.
    ///
    /// Fallback: libraries without `clang_getCursorAvailability` report
    /// everything as `Available`; there is no other source for this bit.
    pub fn cursor_availability<C: AsRawCursor>(&self, cursor: &C) -> Availability {
        match self.sym.get_cursor_availability {
            Some(f) => Availability::from_raw(unsafe { f(cursor.as_raw()) } as u32),
            None => Availability::Available,
        }
    }

    /// Signed value of an enum constant declaration.
    pub fn enum_constant_value<C: AsRawCursor>(&self, cursor: &C) -> i64 {
        unsafe { (self.sym.get_enum_constant_value)(cursor.as_raw()) }
    }

    /// Unsigned value of an enum constant declaration.
    pub fn enum_constant_unsigned_value<C: AsRawCursor>(&self, cursor: &C) -> u64 {
        unsafe { (self.sym.get_enum_constant_unsigned_value)(cursor.as_raw()) }
    }

    /// Underlying type of a typedef declaration cursor.
    pub fn typedef_underlying_type<C: AsRawCursor>(&self, cursor: &C) -> Type {
        Type::from_raw(unsafe { (self.sym.get_typedef_underlying_type)(cursor.as_raw()) })
    }

    /// Resolve a location to line/column.
    ///
    /// Preferred path is `clang_getExpansionLocation`, which asks the
    /// library itself. Without it, the packed-integer split on
    /// [`SourceLocation`] is used; that split is this layer's own
    /// convention and has no byte offset to give.
    pub fn position_of(&self, location: &SourceLocation) -> Position {
        match self.sym.get_expansion_location {
            Some(f) => {
                let mut file = std::ptr::null_mut();
                let mut line = 0u32;
                let mut column = 0u32;
                let mut offset = 0u32;
                unsafe {
                    f(
                        location.to_raw(),
                        &mut file,
                        &mut line,
                        &mut column,
                        &mut offset,
                    )
                };
                Position {
                    line,
                    column,
                    offset: Some(offset),
                }
            }
            None => Position {
                line: location.line(),
                column: location.column(),
                offset: None,
            },
        }
    }
}
