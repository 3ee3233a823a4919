//! Dirty-flag cache for a deck's aggregate state vector.
//!
//! An empty cell means dirty. Readers fill it on demand through a shared
//! reference; mutators invalidate it through `&mut`. The previous buffer is
//! kept as a spare so recomputation after a mutation does not allocate.

use std::cell::{Cell, OnceCell};
use std::fmt;

/// Cached state vector plus its invalidation state.
#[derive(Default)]
pub struct StateCache {
    current: OnceCell<Box<[u8]>>,
    spare: Cell<Option<Box<[u8]>>>,
}

impl StateCache {
    /// Create a dirty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the next read will recompute.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.current.get().is_none()
    }

    /// Cached vector, or a fresh one of length `len` filled by `fill`.
    ///
    /// `fill` receives a zeroed buffer.
    pub fn get_or_compute(&self, len: usize, fill: impl FnOnce(&mut [u8])) -> &[u8] {
        self.current.get_or_init(|| {
            let mut buf = match self.spare.take() {
                Some(buf) if buf.len() == len => buf,
                _ => vec![0u8; len].into_boxed_slice(),
            };
            buf.fill(0);
            fill(&mut buf);
            buf
        })
    }

    /// Mark the cached vector stale.
    pub fn invalidate(&mut self) {
        if let Some(old) = self.current.take() {
            *self.spare.get_mut() = Some(old);
        }
    }
}

impl fmt::Debug for StateCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCache")
            .field("dirty", &self.is_dirty())
            .finish_non_exhaustive()
    }
}

impl Clone for StateCache {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            spare: Cell::new(None),
        }
    }
}
