//! Linked list implementations.
//!
//! # Examples
//!
//! ```
//! use slist::linked_list::{Position, SList};
//!
//! let (a, b, c) = (1, 2, 3);
//!
//! let list = SList::new().append_all([&a, &c]).unwrap();
//! let list = list.insert(&b, Position::At(1)).unwrap();
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.index(&&b), Some(1));
//!
//! let list = list.reverse();
//! let values: Vec<i32> = list.iter().map(|v| **v).collect();
//! assert_eq!(values, vec![3, 2, 1]);
//!
//! let list = list.remove(&&b);
//! assert_eq!(list.len(), 2);
//! assert!(list.find(&&b).is_none());
//! ```
pub mod single;

pub use single::{
    error::{AllocError, InsertError},
    list::{Position, SList},
    node::Node,
    traits::Identity,
};
