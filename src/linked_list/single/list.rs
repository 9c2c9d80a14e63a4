use core::{alloc::Layout, fmt, marker::PhantomData, ptr::NonNull};

use alloc::{alloc::handle_alloc_error, boxed::Box};

use super::{
    error::{AllocError, InsertError},
    iter::{Iter, Nodes},
    node::Node,
    traits::{Identity, Link},
};

/// Where [`SList::insert`] puts a new payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Zero-based index. Indices past the end fall back to appending.
    At(usize),
    /// After the last node.
    End,
}

/// A singly linked list owning its nodes.
///
/// Operations that may change the first node take the list by value and
/// return the resulting list, so a stale head can never be used again.
pub struct SList<T> {
    head: Option<NonNull<Node<T>>>,
    _marker: PhantomData<Box<Node<T>>>,
}

type InsertResult<T> = Result<SList<T>, InsertError<T>>;

impl<T> SList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SList {
            head: None,
            _marker: PhantomData,
        }
    }

    fn from_head(head: Option<NonNull<Node<T>>>) -> Self {
        SList {
            head,
            _marker: PhantomData,
        }
    }

    /// Give up ownership of the chain without freeing it.
    fn into_head(mut self) -> Option<NonNull<Node<T>>> {
        self.head.take()
    }

    pub(crate) fn head_ptr(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    /// Allocates one node holding `data` in front of `next`.
    pub fn cons(data: T, next: SList<T>) -> InsertResult<T> {
        let head = next.into_head();
        match Node::alloc(data, head) {
            Ok(node) => Ok(Self::from_head(Some(node))),
            Err((data, source)) => Err(InsertError::new(Self::from_head(head), data, source)),
        }
    }

    /// Destroys every node, front to back.
    pub fn free(self) {
        drop(self);
    }

    /// Returns true if the list has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first node, or `None` for an empty list
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.nodes().next()
    }

    /// Number of nodes, walking the whole chain.
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// The node at zero-based `index`, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        self.nodes().nth(index)
    }

    /// Mutable access to the node at zero-based `index`, or `None` past the end.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        // SAFETY: the node is owned by `self`, which is borrowed mutably for the result's lifetime
        self.ptr_at(index).map(|node| unsafe { &mut *node.as_ptr() })
    }

    /// The payload of the node at `index`, or `None` past the end
    pub fn data_at(&self, index: usize) -> Option<&T> {
        self.at(index).map(Node::data)
    }

    /// The terminal node, or `None` for an empty list
    pub fn last(&self) -> Option<&Node<T>> {
        self.nodes().last()
    }

    // Raw walks for the mutating paths, so the returned pointers keep write access.
    fn ptr_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        let mut cursor = self.head;
        for _ in 0..index {
            // SAFETY: every node reachable from the head is owned by `self`
            cursor = unsafe { (*cursor?.as_ptr()).next_ptr() };
        }
        cursor
    }

    fn last_ptr(&self) -> Option<NonNull<Node<T>>> {
        let mut last = self.head?;
        // SAFETY: every node reachable from the head is owned by `self`
        while let Some(next) = unsafe { (*last.as_ptr()).next_ptr() } {
            last = next;
        }
        Some(last)
    }

    /// Position of the first payload identical to `data`.
    pub fn index(&self, data: &T) -> Option<usize>
    where
        T: Identity,
    {
        self.iter().position(|candidate| candidate.same(data))
    }

    /// The first node whose payload is identical to `key`.
    pub fn find(&self, key: &T) -> Option<&Node<T>>
    where
        T: Identity,
    {
        self.find_by(key, T::same)
    }

    /// The first node for which `predicate(payload, key)` holds.
    pub fn find_by<K, F>(&self, key: &K, mut predicate: F) -> Option<&Node<T>>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> bool,
    {
        self.nodes().find(|node| predicate(node.data(), key))
    }

    /// Links a new node after the last one.
    pub fn append(self, data: T) -> InsertResult<T> {
        match Node::alloc(data, None) {
            Ok(node) => Ok(self.concat(Self::from_head(Some(node)))),
            Err((data, source)) => Err(InsertError::new(self, data, source)),
        }
    }

    /// Appends every payload in order, stopping at the first allocation failure.
    ///
    /// On failure the error holds the list with the payloads appended so far.
    pub fn append_all<I>(self, items: I) -> InsertResult<T>
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().try_fold(self, Self::append).inspect_err(|e| {
            log::debug!("batch append stopped after reaching {} nodes", e.list().len());
        })
    }

    /// Makes `data` the new head.
    pub fn prepend(self, data: T) -> InsertResult<T> {
        Self::cons(data, self)
    }

    /// Prepends every payload in order, so the last one ends up first.
    pub fn prepend_all<I>(self, items: I) -> InsertResult<T>
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().try_fold(self, Self::prepend).inspect_err(|e| {
            log::debug!("batch prepend stopped after reaching {} nodes", e.list().len());
        })
    }

    /// Inserts `data` at `position`.
    ///
    /// Inserting into an empty list always yields a single node, and an index
    /// past the end appends instead of failing.
    pub fn insert(self, data: T, position: Position) -> InsertResult<T> {
        let index = match position {
            Position::End => return self.append(data),
            Position::At(0) => return self.prepend(data),
            Position::At(index) => index,
        };

        if self.is_empty() {
            return self.prepend(data);
        }

        let Some(prev) = self.ptr_at(index - 1) else {
            return self.append(data);
        };

        match Node::alloc(data, None) {
            Ok(node) => {
                // SAFETY: `prev` and `node` are distinct nodes, `prev` owned by `self`
                // and `node` freshly allocated
                unsafe { (*node.as_ptr()).append_to(&mut *prev.as_ptr()) };
                Ok(self)
            }
            Err((data, source)) => Err(InsertError::new(self, data, source)),
        }
    }

    /// Splices `other` onto the end of this list without copying its nodes.
    pub fn concat(mut self, other: SList<T>) -> Self {
        let other = other.into_head();
        match self.last_ptr() {
            // SAFETY: `last` is owned by `self`, which is held mutably
            Some(last) => unsafe { (*last.as_ptr()).set_next_ptr(other) },
            None => self.set_next_ptr(other),
        }
        self
    }

    /// Concatenates every list in order.
    pub fn concat_all<I>(self, lists: I) -> Self
    where
        I: IntoIterator<Item = SList<T>>,
    {
        lists.into_iter().fold(self, Self::concat)
    }

    /// Unlinks and destroys the first node whose payload is identical to `data`.
    ///
    /// The list comes back unchanged if there is no such node.
    pub fn remove(mut self, data: &T) -> Self
    where
        T: Identity,
    {
        let mut prev: Option<NonNull<Node<T>>> = None;
        let mut cursor = self.head;

        while let Some(current) = cursor {
            // SAFETY: every node reachable from the head is owned by `self`
            let node = unsafe { &mut *current.as_ptr() };
            if node.data().same(data) {
                unsafe {
                    match prev {
                        Some(prev) => node.detach(&mut *prev.as_ptr()),
                        None => node.detach(&mut self),
                    }
                    drop(Node::release(current));
                }
                break;
            }
            prev = Some(current);
            cursor = node.next_ptr();
        }

        self
    }

    /// A new chain holding clones of the payloads in the same order.
    ///
    /// For reference payloads this is a shallow copy. If an allocation fails the
    /// nodes copied so far are freed and the source is left untouched.
    pub fn copy(&self) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut copy = Self::new();
        let mut tail: Option<NonNull<Node<T>>> = None;

        for data in self.iter() {
            let node = Node::alloc(data.clone(), None).map_err(|(_, e)| {
                log::debug!("list copy abandoned: {e}");
                e
            })?;
            match tail {
                // SAFETY: `tail` is the last node of `copy`, which nothing else can see yet
                Some(tail) => unsafe { (*tail.as_ptr()).set_next_ptr(Some(node)) },
                None => copy.set_next_ptr(Some(node)),
            }
            tail = Some(node);
        }

        Ok(copy)
    }

    /// Reverses the list in place by pointing every link at its predecessor.
    pub fn reverse(self) -> Self {
        let mut prev: Option<NonNull<Node<T>>> = None;
        let mut cursor = self.into_head();

        while let Some(current) = cursor {
            // SAFETY: the chain was taken out of the list, so each node is visited exactly once
            let node = unsafe { &mut *current.as_ptr() };
            cursor = node.next_ptr();
            node.set_next_ptr(prev);
            prev = Some(current);
        }

        Self::from_head(prev)
    }

    /// Calls `action` on every payload, front to back.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for data in self.iter() {
            action(data);
        }
    }

    /// Runs `times` full [`for_each`](Self::for_each) passes.
    ///
    /// `times == 0` never returns: `action` has to unwind or end the process.
    pub fn cycle<F>(&self, times: usize, mut action: F)
    where
        F: FnMut(&T),
    {
        if times == 0 {
            log::trace!("cycling a {} node list indefinitely", self.len());
            loop {
                self.for_each(&mut action);
            }
        }

        for _ in 0..times {
            self.for_each(&mut action);
        }
    }

    /// Get an iterator over the payloads, front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Get an iterator over the nodes, front to back
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }
}

impl<T> Link for SList<T> {
    type Target = Node<T>;

    fn next_ptr(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    fn set_next_ptr(&mut self, next: Option<NonNull<Node<T>>>) {
        self.head = next;
    }
}

impl<T> Drop for SList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            // SAFETY: the chain was detached from the list above
            let (_, next) = unsafe { Node::release(node) };
            cursor = next;
        }
    }
}

impl<T> Default for SList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SList<T> {
    fn clone(&self) -> Self {
        match self.copy() {
            Ok(copy) => copy,
            Err(_) => handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl<T: Send> Send for SList<T> {}
unsafe impl<T: Sync> Sync for SList<T> {}
