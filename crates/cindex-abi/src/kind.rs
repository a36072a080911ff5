//! Pass-through enumerations for cursor kinds, type kinds, diagnostic
//! severities and availability.
//!
//! Kind values are forwarded from libclang without interpretation, so the
//! kind types are open `u32` newtypes with named constants for the values
//! the tests and accessors care about, rather than closed Rust enums that
//! would reject kinds added by newer library versions.

/// The kind of an AST cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CursorKind(pub u32);

impl CursorKind {
    pub const UNEXPOSED_DECL: CursorKind = CursorKind(1);
    pub const STRUCT_DECL: CursorKind = CursorKind(2);
    pub const UNION_DECL: CursorKind = CursorKind(3);
    pub const CLASS_DECL: CursorKind = CursorKind(4);
    pub const ENUM_DECL: CursorKind = CursorKind(5);
    pub const FIELD_DECL: CursorKind = CursorKind(6);
    pub const ENUM_CONSTANT_DECL: CursorKind = CursorKind(7);
    pub const FUNCTION_DECL: CursorKind = CursorKind(8);
    pub const VAR_DECL: CursorKind = CursorKind(9);
    pub const PARM_DECL: CursorKind = CursorKind(10);
    pub const TYPEDEF_DECL: CursorKind = CursorKind(20);
    pub const TYPE_REF: CursorKind = CursorKind(43);
    pub const INVALID_FILE: CursorKind = CursorKind(70);
    pub const NO_DECL_FOUND: CursorKind = CursorKind(71);
    pub const NOT_IMPLEMENTED: CursorKind = CursorKind(72);
    pub const INVALID_CODE: CursorKind = CursorKind(73);
    pub const TRANSLATION_UNIT: CursorKind = CursorKind(300);
    pub const MACRO_DEFINITION: CursorKind = CursorKind(501);
    pub const INCLUSION_DIRECTIVE: CursorKind = CursorKind(503);

    /// Whether this kind lies in the declaration range.
    pub fn is_declaration(self) -> bool {
        (1..=39).contains(&self.0)
    }

    /// Whether this kind lies in the invalid range.
    pub fn is_invalid(self) -> bool {
        (70..=73).contains(&self.0)
    }
}

/// The kind of a type descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeKind(pub u32);

impl TypeKind {
    pub const INVALID: TypeKind = TypeKind(0);
    pub const UNEXPOSED: TypeKind = TypeKind(1);
    pub const VOID: TypeKind = TypeKind(2);
    pub const BOOL: TypeKind = TypeKind(3);
    pub const CHAR_U: TypeKind = TypeKind(4);
    pub const UCHAR: TypeKind = TypeKind(5);
    pub const USHORT: TypeKind = TypeKind(8);
    pub const UINT: TypeKind = TypeKind(9);
    pub const ULONG: TypeKind = TypeKind(10);
    pub const ULONGLONG: TypeKind = TypeKind(11);
    pub const CHAR_S: TypeKind = TypeKind(13);
    pub const SCHAR: TypeKind = TypeKind(14);
    pub const WCHAR: TypeKind = TypeKind(15);
    pub const SHORT: TypeKind = TypeKind(16);
    pub const INT: TypeKind = TypeKind(17);
    pub const LONG: TypeKind = TypeKind(18);
    pub const LONGLONG: TypeKind = TypeKind(19);
    pub const FLOAT: TypeKind = TypeKind(21);
    pub const DOUBLE: TypeKind = TypeKind(22);
    pub const LONG_DOUBLE: TypeKind = TypeKind(23);
    pub const POINTER: TypeKind = TypeKind(101);
    pub const LVALUE_REFERENCE: TypeKind = TypeKind(103);
    pub const RVALUE_REFERENCE: TypeKind = TypeKind(104);
    pub const RECORD: TypeKind = TypeKind(105);
    pub const ENUM: TypeKind = TypeKind(106);
    pub const TYPEDEF: TypeKind = TypeKind(107);
    pub const FUNCTION_NO_PROTO: TypeKind = TypeKind(110);
    pub const FUNCTION_PROTO: TypeKind = TypeKind(111);
    pub const CONSTANT_ARRAY: TypeKind = TypeKind(112);
    pub const VECTOR: TypeKind = TypeKind(113);
    pub const INCOMPLETE_ARRAY: TypeKind = TypeKind(114);
    pub const ELABORATED: TypeKind = TypeKind(119);

    pub fn is_invalid(self) -> bool {
        self == TypeKind::INVALID
    }

    /// Static spelling for the known kinds. Fallback used when the bound
    /// library version no longer exports a kind-spelling call.
    pub fn name(self) -> &'static str {
        match self {
            TypeKind::INVALID => "Invalid",
            TypeKind::UNEXPOSED => "Unexposed",
            TypeKind::VOID => "Void",
            TypeKind::BOOL => "Bool",
            TypeKind::CHAR_U => "Char_U",
            TypeKind::UCHAR => "UChar",
            TypeKind::USHORT => "UShort",
            TypeKind::UINT => "UInt",
            TypeKind::ULONG => "ULong",
            TypeKind::ULONGLONG => "ULongLong",
            TypeKind::CHAR_S => "Char_S",
            TypeKind::SCHAR => "SChar",
            TypeKind::WCHAR => "WChar",
            TypeKind::SHORT => "Short",
            TypeKind::INT => "Int",
            TypeKind::LONG => "Long",
            TypeKind::LONGLONG => "LongLong",
            TypeKind::FLOAT => "Float",
            TypeKind::DOUBLE => "Double",
            TypeKind::LONG_DOUBLE => "LongDouble",
            TypeKind::POINTER => "Pointer",
            TypeKind::LVALUE_REFERENCE => "LValueReference",
            TypeKind::RVALUE_REFERENCE => "RValueReference",
            TypeKind::RECORD => "Record",
            TypeKind::ENUM => "Enum",
            TypeKind::TYPEDEF => "Typedef",
            TypeKind::FUNCTION_NO_PROTO => "FunctionNoProto",
            TypeKind::FUNCTION_PROTO => "FunctionProto",
            TypeKind::CONSTANT_ARRAY => "ConstantArray",
            TypeKind::VECTOR => "Vector",
            TypeKind::INCOMPLETE_ARRAY => "IncompleteArray",
            TypeKind::ELABORATED => "Elaborated",
            _ => "Unknown",
        }
    }
}

/// Diagnostic severity. Ordered: `Severity::Warning <= Severity::Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Ignored = 0,
    Note = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

impl Severity {
    /// Map the native severity value. Values above the known range are
    /// clamped to `Fatal`.
    pub fn from_raw(raw: u32) -> Severity {
        match raw {
            0 => Severity::Ignored,
            1 => Severity::Note,
            2 => Severity::Warning,
            3 => Severity::Error,
            _ => Severity::Fatal,
        }
    }
}

/// Entity availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Deprecated,
    NotAvailable,
    NotAccessible,
}

impl Availability {
    pub fn from_raw(raw: u32) -> Availability {
        match raw {
            1 => Availability::Deprecated,
            2 => Availability::NotAvailable,
            3 => Availability::NotAccessible,
            _ => Availability::Available,
        }
    }
}
