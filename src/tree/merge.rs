//! Two-way tree merge
//!
//! Walks the children of two canonical branches with a pair of cursors, the
//! way the merge step of a mergesort walks two sorted runs. Entries present on
//! both sides are resolved pairwise (directories recursively), entries only in
//! the first tree come out `Deleted`, entries only in the second come out
//! `Added`. Each result branch's own state is the lattice join of its
//! children's states.
//!
//! The recursion over matching directory pairs is driven by an explicit stack
//! of [`Frame`]s, so tree depth never maps onto native stack depth.

use crate::concurrency::CancelFlag;
use crate::error::MergeError;
use crate::tree::node::{Branch, Node};
use crate::tree::order::canonical_cmp;
use crate::tree::state::{mesh_states, ChangeState};
use crate::tree::validate::{validate, DEFAULT_MAX_DEPTH};
use std::cmp::Ordering;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Merge tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Deepest directory nesting accepted in either input
    pub max_depth: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Merge entry point carrying options and an optional cancellation flag
#[derive(Debug, Clone, Default)]
pub struct Merger {
    options: MergeOptions,
    cancel: Option<CancelFlag>,
}

/// Merge two canonical trees with default options.
///
/// Both inputs are validated first; see [`Merger::merge`].
pub fn merge(first: &Branch, second: &Branch) -> Result<Branch, MergeError> {
    Merger::new().merge(first, second)
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: MergeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Poll `flag` between sibling steps; a set flag aborts with
    /// [`MergeError::Cancelled`].
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Produce the annotated comparison of `first` (base) against `second`.
    ///
    /// The result is a freshly allocated tree named after `first`; neither
    /// input is modified or aliased. Fails before doing any merge work if
    /// either input is not canonical, and mid-way only if cancelled.
    #[instrument(skip_all, fields(first = first.name(), second = second.name()))]
    pub fn merge(&self, first: &Branch, second: &Branch) -> Result<Branch, MergeError> {
        let start = Instant::now();

        validate(first, self.options.max_depth)?;
        validate(second, self.options.max_depth)?;

        let cancel = self.cancel.as_ref();
        let (result, steps) =
            merge_validated(first, second, || cancel.is_some_and(CancelFlag::is_cancelled))?;

        info!(
            state = %result.state(),
            steps,
            duration_ms = start.elapsed().as_millis(),
            "Tree merge completed"
        );
        Ok(result)
    }
}

/// One open pair of matching branches
struct Frame<'a> {
    name: &'a str,
    left: &'a [Node],
    right: &'a [Node],
    i: usize,
    j: usize,
    children: Vec<Node>,
    state: ChangeState,
}

impl<'a> Frame<'a> {
    fn new(first: &'a Branch, second: &'a Branch) -> Self {
        Self {
            name: first.name(),
            left: first.children(),
            right: second.children(),
            i: 0,
            j: 0,
            children: Vec::with_capacity(first.len().max(second.len())),
            state: ChangeState::Same,
        }
    }

    fn emit(&mut self, node: Node) {
        self.state = mesh_states(self.state, node.state());
        self.children.push(node);
    }

    fn finish(self) -> Branch {
        Branch::with_state(self.name, self.state, self.children)
    }
}

/// Merge loop over already-validated inputs. `interrupted` is polled before
/// every sibling step. Returns the result and the number of steps taken.
fn merge_validated<F>(
    first: &Branch,
    second: &Branch,
    mut interrupted: F,
) -> Result<(Branch, usize), MergeError>
where
    F: FnMut() -> bool,
{
    let mut parents: Vec<Frame<'_>> = Vec::new();
    let mut current = Frame::new(first, second);
    let mut steps = 0usize;

    loop {
        if interrupted() {
            debug!(steps, depth = parents.len(), "Merge cancelled");
            return Err(MergeError::Cancelled);
        }
        steps += 1;

        let (left, right) = (current.left, current.right);
        match (left.get(current.i), right.get(current.j)) {
            (Some(l), Some(r)) if l.shares_identity(r) => {
                current.i += 1;
                current.j += 1;
                match (l, r) {
                    (Node::Branch(lb), Node::Branch(rb)) => {
                        trace!(name = lb.name(), "Descending into shared directory");
                        let parent = std::mem::replace(&mut current, Frame::new(lb, rb));
                        parents.push(parent);
                    }
                    // Two leaves: contents are not compared
                    _ => current.emit(l.copy_stamped(ChangeState::Same)),
                }
            }
            (Some(l), Some(r)) if canonical_cmp(l, r) == Ordering::Less => {
                current.i += 1;
                current.emit(l.copy_stamped(ChangeState::Deleted));
            }
            (_, Some(r)) => {
                current.j += 1;
                current.emit(r.copy_stamped(ChangeState::Added));
            }
            (Some(l), None) => {
                current.i += 1;
                current.emit(l.copy_stamped(ChangeState::Deleted));
            }
            (None, None) => match parents.pop() {
                Some(parent) => {
                    let done = std::mem::replace(&mut current, parent).finish();
                    current.emit(Node::Branch(done));
                }
                None => return Ok((current.finish(), steps)),
            },
        }
    }
}
