use core::ptr::{self, NonNull};

use alloc::{boxed::Box, rc::Rc, sync::Arc};

/// A trait for anything that holds a `next` pointer in a singly linked list.
///
/// Both nodes and the list itself implement it, so splicing after "the head"
/// and splicing after a node are the same operation.
pub(crate) trait Link {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next_ptr(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next_ptr(&mut self, next: Option<NonNull<Self::Target>>);
}

/// Equality by address rather than by content.
///
/// Lookups such as [`SList::index`](super::list::SList::index),
/// [`SList::find`](super::list::SList::find) and
/// [`SList::remove`](super::list::SList::remove) compare payloads with this
/// trait, so two references to equal values are still different payloads.
pub trait Identity {
    /// Returns `true` if `self` and `other` refer to the same object.
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for &T {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for &mut T {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(&**self, &**other)
    }
}

impl<T: ?Sized> Identity for *const T {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for *mut T {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for NonNull<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(self.as_ptr(), other.as_ptr())
    }
}

impl<T: ?Sized> Identity for Box<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(&**self, &**other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}
