//! Index lifecycle: the root native resource translation units hang off.

use std::sync::Arc;

use crate::client::Clang;
use crate::symbols::CXIndex;
use crate::{Error, Result};

/// An index handle. Created by [`Index::new`], disposed exactly once on
/// drop. Not `Send`: libclang handles must stay on one thread.
#[derive(Debug)]
pub struct Index {
    pub(crate) clang: Arc<Clang>,
    pub(crate) handle: CXIndex,
}

impl Index {
    /// Create an index.
    ///
    /// `exclude_declarations_from_pch` and `display_diagnostics` forward
    /// to `clang_createIndex`. A null handle from the native side is a
    /// typed error, so a live `Index` always wraps a non-null handle.
    pub fn new(
        clang: &Arc<Clang>,
        exclude_declarations_from_pch: bool,
        display_diagnostics: bool,
    ) -> Result<Index> {
        let handle = unsafe {
            (clang.sym.create_index)(
                exclude_declarations_from_pch as i32,
                display_diagnostics as i32,
            )
        };
        if handle.is_null() {
            return Err(Error::IndexCreateFailed);
        }
        Ok(Index {
            clang: Arc::clone(clang),
            handle,
        })
    }

    /// The client this index was created from.
    pub fn clang(&self) -> &Arc<Clang> {
        &self.clang
    }
}

impl Drop for Index {
    fn drop(&mut self) {
        unsafe { (self.clang.sym.dispose_index)(self.handle) };
    }
}
