//! Fixed-size pagination over an ordered sequence.
//!
//! The paginator never owns data: [`paginate`] slices whatever ordered
//! sequence the query engine produced, and [`Pager`] tracks the zero-based
//! page cursor between queries.
//!
//! ## Cursor reset
//!
//! The cursor resets to page 0 whenever the *count* of the filtered
//! sequence changes from the previously observed count. This is a coarse
//! signal: two different filtered sets of equal size do not trigger a
//! reset, leaving the cursor where it was. That is the documented behavior
//! — a stronger signal (resetting on any selection change) would change
//! observable paging and must not be introduced silently.

/// Items per page.
pub const PAGE_SIZE: usize = 24;

/// One page of an ordered sequence, plus neighbor availability.
#[derive(Debug, PartialEq, Eq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub has_prev: bool,
    pub has_next: bool,
}

/// Slice page `page` (zero-based, [`PAGE_SIZE`] items) out of `seq`,
/// clamped to the sequence bounds.
pub fn paginate<T>(seq: &[T], page: usize) -> PageView<'_, T> {
    paginate_with(seq, page, PAGE_SIZE)
}

/// [`paginate`] with an explicit page size. `page_size` must be non-zero.
pub fn paginate_with<T>(seq: &[T], page: usize, page_size: usize) -> PageView<'_, T> {
    let start = page.saturating_mul(page_size).min(seq.len());
    let end = start.saturating_add(page_size).min(seq.len());
    PageView {
        items: &seq[start..end],
        has_prev: page > 0,
        has_next: end < seq.len(),
    }
}

/// Number of pages needed for `len` items at [`PAGE_SIZE`].
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Page cursor held by the presentation layer across queries.
#[derive(Debug, Default)]
pub struct Pager {
    cursor: usize,
    last_count: Option<usize>,
}

impl Pager {
    pub fn new() -> Self {
        Pager::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reset the cursor to 0 if the filtered count differs from the last
    /// observed one. Call once per query, before slicing.
    pub fn reset_if_count_changed(&mut self, count: usize) {
        if self.last_count != Some(count) {
            self.cursor = 0;
            self.last_count = Some(count);
        }
    }

    /// Advance to the next page if one exists for `count` items.
    pub fn next(&mut self, count: usize) {
        if (self.cursor + 1) * PAGE_SIZE < count {
            self.cursor += 1;
        }
    }

    /// Step back one page, stopping at the first.
    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}
