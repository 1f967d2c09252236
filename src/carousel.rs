//! Ordered image set with a circular cursor, scoped to one lightbox session.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Wrap `index` into `0..len`. An empty range always yields 0.
#[must_use]
pub fn wrap_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    // rem_euclid is never negative and always below len.
    usize::try_from(index.rem_euclid(len)).unwrap_or(0)
}

/// A non-empty image set plus a cursor that is always a valid index into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselSession {
    images: Vec<String>,
    cursor: usize,
}

impl CarouselSession {
    /// Start a session at `start` (wrapped). `None` for an empty set.
    #[must_use]
    pub fn new(images: Vec<String>, start: usize) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let cursor = start % images.len();
        Some(Self { images, cursor })
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.images[self.cursor]
    }

    /// Move by `delta` with wraparound in both directions.
    pub fn advance(&mut self, delta: i64) -> &str {
        let len = self.images.len();
        // Reduce first so cursor + step stays below 2 * len.
        let step = delta.rem_euclid(i64::try_from(len).unwrap_or(i64::MAX));
        self.cursor = wrap_index(i64::try_from(self.cursor).unwrap_or(0) + step, len);
        self.current()
    }

    /// 1-based "label (n of total)" caption.
    #[must_use]
    pub fn caption(&self, label: &str) -> String {
        format!("{label} ({} of {})", self.cursor + 1, self.images.len())
    }
}
