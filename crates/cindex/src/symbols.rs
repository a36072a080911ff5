//! The dynamic symbol table: every bound libclang function's marshaling
//! shape, resolved once against a loaded library handle.
//!
//! Struct parameters and returns use the `#[repr(C)]` layouts from
//! `cindex_abi::layout`, so the declared shapes here and the codec's byte
//! offsets share one definition. Required symbols fail resolution with a
//! typed error naming the symbol; version-conditional symbols resolve to
//! `Option` capabilities and the accessor that would have used a missing
//! one falls back instead.

use std::ffi::c_void;
use std::os::raw::{c_char, c_int, c_longlong, c_uint, c_ulonglong};
use std::path::Path;

use cindex_abi::layout::{
    RawCursor, RawSourceLocation, RawSourceRange, RawString, RawType, RawUnsavedFile,
};
use libloading::Library;

use crate::{Error, Result};

/// Opaque native handles. Meaningful only to libclang; never dereferenced
/// here. Null denotes absent/invalid.
pub type CXIndex = *mut c_void;
pub type CXTranslationUnit = *mut c_void;
pub type CXDiagnostic = *mut c_void;
pub type CXFile = *mut c_void;
pub type CXClientData = *mut c_void;

/// Native traversal callback shape: (node, parent, client data) to a
/// continuation code.
pub type NativeVisitor = unsafe extern "C" fn(RawCursor, RawCursor, CXClientData) -> c_uint;

macro_rules! required {
    ($lib:expr, $path:expr, $name:literal) => {
        unsafe {
            *$lib
                .get(concat!($name, "\0").as_bytes())
                .map_err(|_| Error::MissingSymbol {
                    name: $name,
                    path: $path.to_path_buf(),
                })?
        }
    };
}

macro_rules! optional {
    ($lib:expr, $name:literal) => {{
        let sym = unsafe { $lib.get(concat!($name, "\0").as_bytes()) };
        if sym.is_err() {
            log::debug!(concat!($name, " not exported; accessor will fall back"));
        }
        sym.ok().map(|s| unsafe { *s })
    }};
}

/// Resolved function pointers for every bound call.
///
/// Plain copies of the addresses; the owning [`libloading::Library`] must
/// outlive the table, which [`Clang`](crate::Clang) guarantees by holding
/// both.
pub struct SymbolTable {
    // Index / translation unit lifecycle.
    pub create_index: unsafe extern "C" fn(c_int, c_int) -> CXIndex,
    pub dispose_index: unsafe extern "C" fn(CXIndex),
    pub parse_translation_unit: unsafe extern "C" fn(
        CXIndex,
        *const c_char,
        *const *const c_char,
        c_int,
        *mut RawUnsavedFile,
        c_uint,
        c_uint,
    ) -> CXTranslationUnit,
    pub reparse_translation_unit:
        unsafe extern "C" fn(CXTranslationUnit, c_uint, *mut RawUnsavedFile, c_uint) -> c_int,
    pub dispose_translation_unit: unsafe extern "C" fn(CXTranslationUnit),
    pub get_translation_unit_cursor: unsafe extern "C" fn(CXTranslationUnit) -> RawCursor,

    // Traversal.
    pub visit_children: unsafe extern "C" fn(RawCursor, NativeVisitor, CXClientData) -> c_uint,

    // Cursor queries.
    pub get_cursor_spelling: unsafe extern "C" fn(RawCursor) -> RawString,
    pub get_cursor_display_name: unsafe extern "C" fn(RawCursor) -> RawString,
    pub get_cursor_usr: unsafe extern "C" fn(RawCursor) -> RawString,
    pub get_cursor_location: unsafe extern "C" fn(RawCursor) -> RawSourceLocation,
    pub get_cursor_extent: unsafe extern "C" fn(RawCursor) -> RawSourceRange,
    pub get_cursor_type: unsafe extern "C" fn(RawCursor) -> RawType,
    pub get_cursor_referenced: unsafe extern "C" fn(RawCursor) -> RawCursor,
    pub get_cursor_definition: unsafe extern "C" fn(RawCursor) -> RawCursor,
    pub get_enum_constant_value: unsafe extern "C" fn(RawCursor) -> c_longlong,
    pub get_enum_constant_unsigned_value: unsafe extern "C" fn(RawCursor) -> c_ulonglong,
    pub get_typedef_underlying_type: unsafe extern "C" fn(RawCursor) -> RawType,

    // Type queries.
    pub get_type_spelling: unsafe extern "C" fn(RawType) -> RawString,
    pub type_get_size_of: unsafe extern "C" fn(RawType) -> c_longlong,
    pub type_get_align_of: unsafe extern "C" fn(RawType) -> c_longlong,
    pub get_num_arg_types: unsafe extern "C" fn(RawType) -> c_int,
    pub get_arg_type: unsafe extern "C" fn(RawType, c_uint) -> RawType,
    pub get_result_type: unsafe extern "C" fn(RawType) -> RawType,
    pub get_pointee_type: unsafe extern "C" fn(RawType) -> RawType,

    // Strings.
    pub get_cstring: unsafe extern "C" fn(RawString) -> *const c_char,
    pub dispose_string: unsafe extern "C" fn(RawString),

    // Diagnostics.
    pub get_num_diagnostics: unsafe extern "C" fn(CXTranslationUnit) -> c_uint,
    pub get_diagnostic: unsafe extern "C" fn(CXTranslationUnit, c_uint) -> CXDiagnostic,
    pub get_diagnostic_severity: unsafe extern "C" fn(CXDiagnostic) -> c_int,
    pub get_diagnostic_spelling: unsafe extern "C" fn(CXDiagnostic) -> RawString,
    pub get_diagnostic_location: unsafe extern "C" fn(CXDiagnostic) -> RawSourceLocation,
    pub dispose_diagnostic: unsafe extern "C" fn(CXDiagnostic),

    // Version-conditional capabilities, each with a documented fallback
    // in the accessor layer.
    pub get_expansion_location: Option<
        unsafe extern "C" fn(RawSourceLocation, *mut CXFile, *mut c_uint, *mut c_uint, *mut c_uint),
    >,
    pub get_type_kind_spelling: Option<unsafe extern "C" fn(c_int) -> RawString>,
    pub get_cursor_availability: Option<unsafe extern "C" fn(RawCursor) -> c_int>,
    pub type_get_value_type: Option<unsafe extern "C" fn(RawType) -> RawType>,
}

impl SymbolTable {
    /// Resolve the full table against `lib`. Fails on the first missing
    /// required symbol; no partially resolved table is ever returned.
    pub fn resolve(lib: &Library, path: &Path) -> Result<SymbolTable> {
        Ok(SymbolTable {
            create_index: required!(lib, path, "clang_createIndex"),
            dispose_index: required!(lib, path, "clang_disposeIndex"),
            parse_translation_unit: required!(lib, path, "clang_parseTranslationUnit"),
            reparse_translation_unit: required!(lib, path, "clang_reparseTranslationUnit"),
            dispose_translation_unit: required!(lib, path, "clang_disposeTranslationUnit"),
            get_translation_unit_cursor: required!(lib, path, "clang_getTranslationUnitCursor"),
            visit_children: required!(lib, path, "clang_visitChildren"),
            get_cursor_spelling: required!(lib, path, "clang_getCursorSpelling"),
            get_cursor_display_name: required!(lib, path, "clang_getCursorDisplayName"),
            get_cursor_usr: required!(lib, path, "clang_getCursorUSR"),
            get_cursor_location: required!(lib, path, "clang_getCursorLocation"),
            get_cursor_extent: required!(lib, path, "clang_getCursorExtent"),
            get_cursor_type: required!(lib, path, "clang_getCursorType"),
            get_cursor_referenced: required!(lib, path, "clang_getCursorReferenced"),
            get_cursor_definition: required!(lib, path, "clang_getCursorDefinition"),
            get_enum_constant_value: required!(lib, path, "clang_getEnumConstantDeclValue"),
            get_enum_constant_unsigned_value: required!(
                lib,
                path,
                "clang_getEnumConstantDeclUnsignedValue"
            ),
            get_typedef_underlying_type: required!(
                lib,
                path,
                "clang_getTypedefDeclUnderlyingType"
            ),
            get_type_spelling: required!(lib, path, "clang_getTypeSpelling"),
            type_get_size_of: required!(lib, path, "clang_Type_getSizeOf"),
            type_get_align_of: required!(lib, path, "clang_Type_getAlignOf"),
            get_num_arg_types: required!(lib, path, "clang_getNumArgTypes"),
            get_arg_type: required!(lib, path, "clang_getArgType"),
            get_result_type: required!(lib, path, "clang_getResultType"),
            get_pointee_type: required!(lib, path, "clang_getPointeeType"),
            get_cstring: required!(lib, path, "clang_getCString"),
            dispose_string: required!(lib, path, "clang_disposeString"),
            get_num_diagnostics: required!(lib, path, "clang_getNumDiagnostics"),
            get_diagnostic: required!(lib, path, "clang_getDiagnostic"),
            get_diagnostic_severity: required!(lib, path, "clang_getDiagnosticSeverity"),
            get_diagnostic_spelling: required!(lib, path, "clang_getDiagnosticSpelling"),
            get_diagnostic_location: required!(lib, path, "clang_getDiagnosticLocation"),
            dispose_diagnostic: required!(lib, path, "clang_disposeDiagnostic"),
            get_expansion_location: optional!(lib, "clang_getExpansionLocation"),
            get_type_kind_spelling: optional!(lib, "clang_getTypeKindSpelling"),
            get_cursor_availability: optional!(lib, "clang_getCursorAvailability"),
            type_get_value_type: optional!(lib, "clang_Type_getValueType"),
        })
    }
}
