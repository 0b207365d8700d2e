//! Carousel paging over a loaded catalog.

/// Items shown per carousel page.
pub const CAROUSEL_PAGE_SIZE: usize = 4;

/// Offset into the catalog, always kept within `[0, max(0, total - page_size)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogWindow {
    offset: usize,
    page_size: usize,
}

impl Default for CatalogWindow {
    fn default() -> Self {
        Self::new(CAROUSEL_PAGE_SIZE)
    }
}

impl CatalogWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(self.page_size)
    }

    pub fn can_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.offset + self.page_size < total
    }

    /// Moves one page forward. No-op once the last page is visible.
    pub fn next(&mut self, total: usize) {
        if !self.can_next(total) {
            return;
        }
        self.offset = (self.offset + self.page_size).min(self.max_offset(total));
    }

    pub fn prev(&mut self) {
        self.offset = self.offset.saturating_sub(self.page_size);
    }

    /// Re-clamps after the catalog changed size.
    pub fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(self.max_offset(total));
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// The contiguous slice currently visible.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        window(items, self.offset, self.page_size)
    }
}

/// Contiguous slice of at most `page_size` items starting at the clamped `offset`.
pub fn window<T>(items: &[T], offset: usize, page_size: usize) -> &[T] {
    let start = offset.min(items.len().saturating_sub(page_size));
    let end = (start + page_size).min(items.len());
    &items[start..end]
}
