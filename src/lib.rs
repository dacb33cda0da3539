//! Ordered sets backed by self-balancing binary search trees.
//!
//! Two interchangeable implementations are provided behind the `OrderedSet` trait:
//!
//! - `avl_tree::AvlSet` keeps the heights of the two subtrees of every node within one of each
//!   other.
//! - `red_black_tree::RedBlackSet` colors nodes red or black and keeps the number of black nodes
//!   on every root-to-leaf path equal.
//!
//! # Examples
//!
//! ```
//! use balanced_collections::avl_tree::AvlSet;
//! use balanced_collections::red_black_tree::RedBlackSet;
//! use balanced_collections::Order;
//!
//! let avl = (1..=7).collect::<AvlSet<u32>>();
//! let red_black = (1..=7).collect::<RedBlackSet<u32>>();
//!
//! assert!(avl.iter().eq(red_black.iter()));
//! assert_eq!(avl.traverse(Order::BreadthFirst).next(), Some(&4));
//! ```

mod arena;
mod error;
mod ordered_set;

pub mod avl_tree;
pub mod red_black_tree;
pub mod traversal;

pub use crate::error::{Error, Result};
pub use crate::ordered_set::OrderedSet;
pub use crate::traversal::Order;
