//! Offset/limit pagination for list endpoints.

/// An offset/limit window over an ordered result sequence.
///
/// Rows `offset..offset + limit` of the full sequence are selected; a
/// window that starts past the end selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Number of leading rows to skip.
    pub offset: u64,
    /// Maximum number of rows to return.
    pub limit: u64,
}

impl Window {
    /// Create a window, clamping `limit` to `max_limit`.
    pub fn new(offset: u64, limit: u64, max_limit: u64) -> Self {
        Self {
            offset,
            limit: limit.min(max_limit),
        }
    }

    /// The SQL `OFFSET` value.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }

    /// The SQL `LIMIT` value.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// Apply the window to an already-ordered iterator.
    pub fn apply<I: Iterator>(&self, iter: I) -> impl Iterator<Item = I::Item> + use<I> {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);
        iter.skip(skip).take(take)
    }
}
