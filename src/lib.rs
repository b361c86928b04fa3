//! A non-self-balancing Binary Search Tree (BST) storing ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! sometimes has child `Node`s. The most important invariants of this
//! crate's trees are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than *or equal to* its own value. Inserting a value
//!    that is already stored keeps both copies rather than overwriting.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`).
//! Because nothing here rebalances, the height is at the mercy of the
//! insertion order: random orders tend toward `O(lg N)` while sorted input
//! degrades the tree into an `O(N)` chain. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree - and reverse-sorted iteration by flipping that
//! order.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod linked;

#[cfg(test)]
mod test;
