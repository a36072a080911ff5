//! Diagnostic enumeration.
//!
//! Native diagnostic handles are fetched by index, read, and disposed
//! before the next fetch, so at most one handle is ever open. Callers see
//! only the decoded values.

use cindex_abi::kind::Severity;
use cindex_abi::value::SourceLocation;

use crate::tu::TranslationUnit;

/// One decoded diagnostic: the native handle is already disposed by the
/// time this value exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
}

impl TranslationUnit {
    /// Number of diagnostics produced by the last parse or reparse.
    pub fn diagnostic_count(&self) -> u32 {
        unsafe { (self.clang().sym.get_num_diagnostics)(self.handle()) }
    }

    /// Fetch, decode and dispose the diagnostic at `index`. `None` for an
    /// out-of-range index or a null native handle.
    pub fn diagnostic(&self, index: u32) -> Option<Diagnostic> {
        let sym = &self.clang().sym;
        let handle = unsafe { (sym.get_diagnostic)(self.handle(), index) };
        if handle.is_null() {
            return None;
        }
        let severity = Severity::from_raw(unsafe { (sym.get_diagnostic_severity)(handle) } as u32);
        let message = self
            .clang()
            .take_string(unsafe { (sym.get_diagnostic_spelling)(handle) });
        let location = SourceLocation::from_raw(unsafe { (sym.get_diagnostic_location)(handle) });
        unsafe { (sym.dispose_diagnostic)(handle) };
        Some(Diagnostic {
            severity,
            message,
            location,
        })
    }

    /// All diagnostics, in index order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        (0..self.diagnostic_count())
            .filter_map(|i| self.diagnostic(i))
            .collect()
    }
}
