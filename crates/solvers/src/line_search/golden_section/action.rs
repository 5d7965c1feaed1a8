/// Actions an observer can take during a golden section line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the midpoint of the current bracket.
    ///
    /// While the bracket is still being expanded, the current bracket is
    /// `[start, start + t * direction]` for the step `t` just evaluated.
    StopEarly,
}
