use core::{alloc::Layout, ptr::NonNull};

use alloc::alloc::{alloc, dealloc};

use super::{error::AllocError, traits::Link};

/// A node in a singly linked list.
///
/// Nodes are always heap allocated and owned by exactly one [`SList`](super::list::SList).
pub struct Node<T> {
    data: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    const LAYOUT: Layout = Layout::new::<Self>();

    /// Get the data associated with the node
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get a mutable reference to the data associated with the node
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Get the following node, or `None` at the end of the chain
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        // SAFETY: a node's successor is owned by the same list and outlives `&self`
        self.next.map(|next| unsafe { &*next.as_ptr() })
    }

    /// Allocate a node on the heap.
    ///
    /// On failure the payload is handed back alongside the error.
    pub(crate) fn alloc(data: T, next: Option<NonNull<Self>>) -> Result<NonNull<Self>, (T, AllocError)> {
        #[cfg(test)]
        if failpoint::should_fail() {
            return Err((data, AllocError::new(Self::LAYOUT)));
        }

        // SAFETY: a node always holds a pointer, so its layout is never zero-sized
        let ptr = unsafe { alloc(Self::LAYOUT) }.cast::<Self>();
        match NonNull::new(ptr) {
            Some(node) => {
                // SAFETY: freshly allocated with the layout of `Self`
                unsafe { node.as_ptr().write(Node { data, next }) };
                Ok(node)
            }
            None => {
                log::warn!("allocator returned null for a {} byte list node", Self::LAYOUT.size());
                Err((data, AllocError::new(Self::LAYOUT)))
            }
        }
    }

    /// Deallocate a node, returning its payload and its successor.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must not be reachable from any list
    /// anymore, and must not be used after this call.
    pub(crate) unsafe fn release(node: NonNull<Self>) -> (T, Option<NonNull<Self>>) {
        unsafe {
            let Node { data, next } = node.as_ptr().read();
            dealloc(node.as_ptr().cast(), Self::LAYOUT);
            (data, next)
        }
    }

    /// Link this node right after `parent`, taking over the parent's old successor.
    #[inline]
    pub(crate) fn append_to<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        self.next = parent.next_ptr();
        parent.set_next_ptr(Some(NonNull::from(self)));
    }

    /// Unlink this node from the chain.
    ///
    /// # Safety
    ///
    /// `parent` must be the node or list whose next pointer refers to this node.
    #[inline]
    pub(crate) unsafe fn detach<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        debug_assert_eq!(
            parent.next_ptr(),
            Some(NonNull::from(&mut *self)),
            "Parent must be the one that contains this node"
        );
        parent.set_next_ptr(self.next.take());
    }
}

impl<T> Link for Node<T> {
    type Target = Self;

    #[inline]
    fn next_ptr(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next_ptr(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

unsafe impl<T: Send> Send for Node<T> {}
unsafe impl<T: Sync> Sync for Node<T> {}
