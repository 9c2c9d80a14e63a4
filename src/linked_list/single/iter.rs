use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::SList, node::Node};

/// An iterator over the nodes of a list, front to back.
pub struct Nodes<'a, T> {
    current: Option<NonNull<Node<T>>>,
    _list: PhantomData<&'a SList<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(list: &'a SList<T>) -> Self {
        Self {
            current: list.head_ptr(),
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // SAFETY: the list is borrowed for 'a, so none of its nodes can be freed or relinked
            let node = unsafe { &*current.as_ptr() };
            self.current = node.next().map(NonNull::from);
            node
        })
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            _list: PhantomData,
        }
    }
}

/// An iterator over the payloads of a list, front to back.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a SList<T>) -> Self {
        Self {
            nodes: Nodes::new(list),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

unsafe impl<T: Sync> Send for Nodes<'_, T> {}
unsafe impl<T: Sync> Sync for Nodes<'_, T> {}
