use crate::error::Result;
use crate::traversal::Order;
use std::fmt;

/// An ordered set of unique keys backed by a self-balancing binary search tree.
///
/// Every mutating operation moves the tree from one balanced shape to another; no intermediate
/// state is observable. Inserting a key that is already present and removing a key that is absent
/// are no-ops reported through the returned `bool`.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::red_black_tree::RedBlackSet;
/// use balanced_collections::{OrderedSet, Order};
///
/// fn fill<S: OrderedSet<u32>>(set: &mut S) -> Vec<u32> {
///     for key in &[5, 1, 3] {
///         set.insert(*key);
///     }
///     set.traverse(Order::InOrder).cloned().collect()
/// }
///
/// assert_eq!(fill(&mut AvlSet::new()), vec![1, 3, 5]);
/// assert_eq!(fill(&mut RedBlackSet::new()), vec![1, 3, 5]);
/// ```
pub trait OrderedSet<T>
where
    T: Ord,
{
    type Traversal<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Checks if a key exists in the set.
    fn contains(&self, key: &T) -> bool;

    /// Inserts a key. Returns `false` and leaves the set untouched if the key is already present.
    fn insert(&mut self, key: T) -> bool;

    /// Removes a key. Returns `false` and leaves the set untouched if the key is absent.
    fn remove(&mut self, key: &T) -> bool;

    /// Returns the minimum key, or `Error::EmptyCollection` if the set is empty.
    fn min(&self) -> Result<&T>;

    /// Returns the maximum key, or `Error::EmptyCollection` if the set is empty.
    fn max(&self) -> Result<&T>;

    /// Returns the number of keys in the set.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a lazy traversal over the keys in the given order.
    fn traverse(&self, order: Order) -> Self::Traversal<'_>;

    /// Returns a sideways text dump of the underlying tree, intended for debugging.
    fn render(&self) -> String
    where
        T: fmt::Display;
}
