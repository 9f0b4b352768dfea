use std::sync::Arc;

/// Which compiled set a filter's lines are merged into.
///
/// Allowlisting is a property of rule syntax (`@@||host^`), not of the
/// filter it lives in — `kind` only controls bookkeeping at compile time
/// when block and allow filters are compiled together, it never changes
/// match semantics for an individual rule line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Block,
    Allow,
}

/// A named source of rule lines (an adblock-style list or a hosts file).
#[derive(Debug, Clone)]
pub struct Filter {
    pub id: i64,
    pub kind: FilterKind,
    pub lines: Arc<[Arc<str>]>,
}

impl Filter {
    pub fn new(id: i64, kind: FilterKind, lines: Vec<Arc<str>>) -> Self {
        Self {
            id,
            kind,
            lines: lines.into(),
        }
    }
}
