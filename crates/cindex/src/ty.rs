//! Type descriptor accessors.
//!
//! Numeric edge cases pass through libclang's sentinel conventions
//! unchanged: a negative argument count means "not a function type", an
//! out-of-range argument index yields the invalid type kind, and size or
//! alignment queries return negative layout-error codes. None of these
//! raise errors here.

use cindex_abi::kind::TypeKind;
use cindex_abi::value::{AsRawType, Type};

use crate::client::Clang;

impl Clang {
    /// Kind of the type. Direct field read; no native call.
    pub fn type_kind<T: AsRawType>(&self, ty: &T) -> TypeKind {
        TypeKind(ty.as_raw().kind)
    }

    /// Full spelling of the type, e.g. `"int *"`.
    pub fn type_spelling<T: AsRawType>(&self, ty: &T) -> String {
        self.take_string(unsafe { (self.sym.get_type_spelling)(ty.as_raw()) })
    }

    /// Spelling of a type kind, e.g. `"Pointer"`.
    ///
    /// Fallback: without `clang_getTypeKindSpelling` the static name
    /// table on [`TypeKind`] answers; kinds newer than the table spell as
    /// `"Unknown"`.
    pub fn type_kind_spelling(&self, kind: TypeKind) -> String {
        match self.sym.get_type_kind_spelling {
            Some(f) => self.take_string(unsafe { f(kind.0 as i32) }),
            None => kind.name().to_string(),
        }
    }

    /// Size of the type in bytes, or a negative layout-error sentinel
    /// (e.g. for incomplete or dependent types).
    pub fn type_size_of<T: AsRawType>(&self, ty: &T) -> i64 {
        unsafe { (self.sym.type_get_size_of)(ty.as_raw()) }
    }

    /// Alignment of the type in bytes, or a negative sentinel.
    pub fn type_align_of<T: AsRawType>(&self, ty: &T) -> i64 {
        unsafe { (self.sym.type_get_align_of)(ty.as_raw()) }
    }

    /// Argument count of a function type, negative for non-function
    /// types.
    pub fn type_num_args<T: AsRawType>(&self, ty: &T) -> i32 {
        unsafe { (self.sym.get_num_arg_types)(ty.as_raw()) }
    }

    /// Argument type at `index`. Out of range yields the invalid kind,
    /// not an error.
    pub fn type_arg<T: AsRawType>(&self, ty: &T, index: u32) -> Type {
        Type::from_raw(unsafe { (self.sym.get_arg_type)(ty.as_raw(), index) })
    }

    /// Result type of a function type.
    pub fn type_result<T: AsRawType>(&self, ty: &T) -> Type {
        Type::from_raw(unsafe { (self.sym.get_result_type)(ty.as_raw()) })
    }

    /// Pointee of a pointer (or reference) type.
    pub fn type_pointee<T: AsRawType>(&self, ty: &T) -> Type {
        Type::from_raw(unsafe { (self.sym.get_pointee_type)(ty.as_raw()) })
    }

    /// Value type of an atomic type.
    ///
    /// Fallback: `clang_Type_getValueType` arrived in later library
    /// versions; without it the invalid type is returned, matching what
    /// the call itself yields for a non-atomic input.
    pub fn type_value_type<T: AsRawType>(&self, ty: &T) -> Type {
        match self.sym.type_get_value_type {
            Some(f) => Type::from_raw(unsafe { f(ty.as_raw()) }),
            None => Type::invalid(),
        }
    }
}
