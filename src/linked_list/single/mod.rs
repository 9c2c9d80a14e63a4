//! # Singly Linked List
//!
//! An owning, heap-allocated singly linked list over any payload type.
//!
//! ## Core Components
//!
//! - [`list::SList`]: the list handle and every operation on it.
//! - [`node::Node`]: a chain element holding one payload and a link to its successor.
//! - [`traits`]: [`Identity`](traits::Identity) for comparing payloads by address,
//!   and the crate-private next-pointer seam shared by nodes and lists.
//! - [`iter`]: borrowing iterators over payloads and nodes.
//! - [`error`]: allocation failures.
//!
//! ## Ownership
//!
//! Operations that may change the first node consume the list and return the
//! result. Allocating operations return a `Result`; an [`InsertError`](error::InsertError)
//! gives the unchanged list and the rejected payload back.
//!
//! The list drops the payload values it holds. With reference or raw pointer
//! payloads that never touches the referenced data, which stays owned by the caller.

pub mod traits;
pub mod error;
pub mod node;
pub mod list;
pub mod iter;

#[cfg(test)]
mod tests;
