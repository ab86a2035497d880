//! Forward-only pagination guard for infinite scroll.

/// A monotonic page cursor with a re-entrancy guard.
///
/// `begin` hands out the next page number exactly once per in-flight
/// fetch: a second scroll trigger while a fetch is outstanding gets
/// `None` and must do nothing. The cursor only ever moves forward;
/// `reset` starts a new sequence (e.g. after a search term change).
#[derive(Debug)]
pub struct Pager {
    next_page: u32,
    loading: bool,
    exhausted: bool,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_page: 1,
            loading: false,
            exhausted: false,
        }
    }

    /// Claims the next page to fetch, or `None` if a fetch is already
    /// outstanding or the collection is exhausted.
    pub fn begin(&mut self) -> Option<u32> {
        if self.loading || self.exhausted {
            return None;
        }
        self.loading = true;
        Some(self.next_page)
    }

    /// Marks the in-flight fetch as applied and advances the cursor.
    pub fn complete(&mut self, has_more: bool) {
        self.loading = false;
        self.next_page += 1;
        self.exhausted = !has_more;
    }

    /// Marks the in-flight fetch as failed without advancing; the same
    /// page can be retried manually.
    pub fn fail(&mut self) {
        self.loading = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
