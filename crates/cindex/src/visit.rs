//! Tree traversal bridge.
//!
//! `clang_visitChildren` calls a native callback synchronously and
//! re-entrantly for each child. The bridge registers a trampoline whose
//! client-data pointer reaches a stack-allocated frame holding the
//! visitor and the snapshot log; nesting a traversal inside a visitor
//! just stacks another frame, and finishing the inner call leaves the
//! outer frame untouched.
//!
//! The node buffer the callback receives is only valid during the
//! callback, so every visited node is snapshotted by value before the
//! visitor runs; the returned sequence stays valid after the native call
//! unwinds.

use std::any::Any;
use std::os::raw::c_uint;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use cindex_abi::layout::RawCursor;
use cindex_abi::value::{AsRawCursor, Cursor, NodeSnapshot};

use crate::client::Clang;
use crate::symbols::CXClientData;

/// A visitor's verdict for one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Skip this node's children, continue with the next sibling.
    Continue,
    /// Stop the traversal.
    Break,
    /// Descend into this node's children.
    Recurse,
}

/// Mapping from [`Visit`] verdicts to the native continuation codes.
///
/// The default matches libclang's documented values. The mapping stays
/// configurable because the effective encoding depends on the calling
/// convention in play, and an inverted continue value has been observed
/// through at least one foreign-function layer; verify against the bound
/// library rather than assuming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitEncoding {
    pub break_code: u32,
    pub continue_code: u32,
    pub recurse_code: u32,
}

impl Default for VisitEncoding {
    fn default() -> VisitEncoding {
        VisitEncoding {
            break_code: 0,
            continue_code: 1,
            recurse_code: 2,
        }
    }
}

impl VisitEncoding {
    pub fn encode(&self, visit: Visit) -> u32 {
        match visit {
            Visit::Break => self.break_code,
            Visit::Continue => self.continue_code,
            Visit::Recurse => self.recurse_code,
        }
    }
}

/// One traversal's stack frame, reached from the trampoline through the
/// client-data pointer.
struct VisitFrame<'a> {
    visitor: &'a mut dyn FnMut(&Cursor, &Cursor) -> Visit,
    snapshots: Vec<NodeSnapshot>,
    encoding: VisitEncoding,
    panic: Option<Box<dyn Any + Send>>,
}

/// The native-facing callback. Decodes both buffers, snapshots the node,
/// runs the visitor, and encodes its verdict. A visitor panic is caught
/// here (panics must not cross the FFI boundary), recorded on the frame,
/// and the traversal is told to break.
unsafe extern "C" fn trampoline(
    node: RawCursor,
    parent: RawCursor,
    data: CXClientData,
) -> c_uint {
    let frame = unsafe { &mut *data.cast::<VisitFrame>() };
    if frame.panic.is_some() {
        return frame.encoding.break_code;
    }

    frame.snapshots.push(NodeSnapshot::from_raw(node));
    let cursor = Cursor::from_raw(node);
    let parent = Cursor::from_raw(parent);

    match catch_unwind(AssertUnwindSafe(|| (frame.visitor)(&cursor, &parent))) {
        Ok(visit) => frame.encoding.encode(visit),
        Err(payload) => {
            frame.panic = Some(payload);
            frame.encoding.break_code
        }
    }
}

impl Clang {
    /// Visit the direct children of `cursor`.
    ///
    /// Returns a snapshot of every node the visitor saw, in visitation
    /// order, honoring an early [`Visit::Break`]. The visitor receives
    /// the decoded node and its parent; a parent the native side does not
    /// supply decodes to the null cursor (kind zero, all words zero).
    ///
    /// Visitors may nest: calling `visit_children` from inside a visitor
    /// runs a fully independent inner traversal.
    pub fn visit_children<C, V>(&self, cursor: &C, mut visitor: V) -> Vec<NodeSnapshot>
    where
        C: AsRawCursor,
        V: FnMut(&Cursor, &Cursor) -> Visit,
    {
        let mut frame = VisitFrame {
            visitor: &mut visitor,
            snapshots: Vec::new(),
            encoding: self.visit_encoding(),
            panic: None,
        };
        unsafe {
            (self.sym.visit_children)(
                cursor.as_raw(),
                trampoline,
                (&raw mut frame).cast::<std::ffi::c_void>(),
            );
        }
        if let Some(payload) = frame.panic.take() {
            resume_unwind(payload);
        }
        frame.snapshots
    }
}
