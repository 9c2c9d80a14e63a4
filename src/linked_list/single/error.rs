use core::{alloc::Layout, fmt};

use thiserror::Error;

use super::list::SList;

/// The global allocator could not provide memory for a list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to allocate {size} bytes for a list node")]
pub struct AllocError {
    size: usize,
    align: usize,
}

impl AllocError {
    pub(crate) fn new(layout: Layout) -> Self {
        Self {
            size: layout.size(),
            align: layout.align(),
        }
    }

    /// Size in bytes of the allocation that failed.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alignment of the allocation that failed.
    pub fn align(&self) -> usize {
        self.align
    }
}

/// An insertion failed because a node could not be allocated.
///
/// The list is handed back exactly as it was before the failing step,
/// together with the payload that could not be stored, so nothing is lost.
#[derive(Error)]
#[error("could not insert into the list")]
pub struct InsertError<T> {
    list: SList<T>,
    data: T,
    #[source]
    source: AllocError,
}

impl<T> InsertError<T> {
    pub(crate) fn new(list: SList<T>, data: T, source: AllocError) -> Self {
        Self { list, data, source }
    }

    /// The list as it was before the failing step.
    pub fn list(&self) -> &SList<T> {
        &self.list
    }

    /// The payload that could not be stored.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The allocation failure behind this error.
    pub fn alloc_error(&self) -> AllocError {
        self.source
    }

    /// Take back the untouched list and the rejected payload.
    pub fn into_parts(self) -> (SList<T>, T) {
        (self.list, self.data)
    }

    /// Take back the untouched list, dropping the rejected payload.
    pub fn into_list(self) -> SList<T> {
        self.list
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("len", &self.list.len())
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
