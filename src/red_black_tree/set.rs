use crate::error::{Error, Result};
use crate::ordered_set::OrderedSet;
use crate::red_black_tree::node::{Color, NodeRef};
use crate::red_black_tree::tree;
use crate::traversal::{self, Order, Traversal};
use log::debug;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::result;
use std::vec;

const DEFAULT_CHUNK_SIZE: usize = 64;

/// An ordered set implemented using a red black tree.
///
/// A red black tree colors every node red or black so that the root is black, no red node has a
/// red child, and every path from a node to an empty subtree passes the same number of black
/// nodes. Nodes are stored in a chunked arena and keep a handle to their parent, so insertion and
/// removal restore these invariants iteratively while walking back up the tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::red_black_tree::RedBlackSet;
/// use balanced_collections::Error;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Ok(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
///
/// set.clear();
/// assert_eq!(set.max(), Err(Error::EmptyCollection));
/// ```
pub struct RedBlackSet<T> {
    tree: tree::Tree<T>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackSet<T>` whose arena allocates `chunk_size` nodes at a
    /// time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_chunk_size(2);
    /// set.extend(0..10);
    /// assert_eq!(set.len(), 10);
    /// ```
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackSet {
            tree: tree::Tree::new(chunk_size),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values and releasing the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("red black: clearing {} keys", self.len());
        self.tree.clear();
    }

    /// Returns the key stored at the root of the underlying tree, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.extend(vec![1, 2, 3]);
    /// assert_eq!(set.root(), Some(&2));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.tree.root().map(|node| &node.node().key)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetTraversal<T> {
        self.traverse(Order::InOrder)
    }

    /// Returns an iterator that visits the keys of the underlying tree in a particular order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use balanced_collections::Order;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.extend(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(
    ///     set.traverse(Order::BreadthFirst).collect::<Vec<_>>(),
    ///     vec![&2, &1, &3, &4],
    /// );
    /// ```
    pub fn traverse(&self, order: Order) -> RedBlackSetTraversal<T> {
        RedBlackSetTraversal {
            inner: Traversal::new(self.tree.root(), order),
        }
    }

    /// Returns the underlying tree drawn sideways, one key per line, with the right subtree above
    /// its parent. Red keys are prefixed with `R:`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.render(), "<empty>\n");
    ///
    /// set.extend(vec![1, 2, 3]);
    /// assert_eq!(set.render(), "      R:3\n  2\n      R:1\n");
    /// ```
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        traversal::render(self.tree.root(), 2, 4, |node: NodeRef<T>| {
            let node = node.node();
            match node.color {
                Color::Red => format!("R:{}", node.key),
                Color::Black => node.key.to_string(),
            }
        })
    }
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key
    /// already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.tree.insert(key)
    }

    /// Removes a key from the set. Returns `false` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns it. Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, key: &T) -> Option<T> {
        self.tree.remove(key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.tree.get(key).is_some()
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.tree.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.tree.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        self.tree.min().ok_or(Error::EmptyCollection)
    }

    /// Returns the maximum key of the set. Returns `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        self.tree.max().ok_or(Error::EmptyCollection)
    }
}

impl<T> OrderedSet<T> for RedBlackSet<T>
where
    T: Ord,
{
    type Traversal<'a> = RedBlackSetTraversal<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn contains(&self, key: &T) -> bool {
        RedBlackSet::contains(self, key)
    }

    fn insert(&mut self, key: T) -> bool {
        RedBlackSet::insert(self, key)
    }

    fn remove(&mut self, key: &T) -> bool {
        RedBlackSet::remove(self, key)
    }

    fn min(&self) -> Result<&T> {
        RedBlackSet::min(self)
    }

    fn max(&self) -> Result<&T> {
        RedBlackSet::max(self)
    }

    fn len(&self) -> usize {
        RedBlackSet::len(self)
    }

    fn traverse(&self, order: Order) -> Self::Traversal<'_> {
        RedBlackSet::traverse(self, order)
    }

    fn render(&self) -> String
    where
        T: fmt::Display,
    {
        RedBlackSet::render(self)
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type Item = T;
    type IntoIter = RedBlackSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            keys: self.tree.into_keys().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = RedBlackSetTraversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    keys: vec::IntoIter<T>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

/// An iterator for `RedBlackSet<T>` that visits keys in a chosen `Order`.
///
/// This iterator yields immutable references.
pub struct RedBlackSetTraversal<'a, T>
where
    T: 'a,
{
    inner: Traversal<'a, NodeRef<'a, T>>,
}

impl<'a, T> Iterator for RedBlackSetTraversal<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> Clone for RedBlackSetTraversal<'a, T> {
    fn clone(&self) -> Self {
        RedBlackSetTraversal {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RedBlackSet<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        RedBlackSet {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.tree = source.tree.clone();
    }
}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for RedBlackSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &RedBlackSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RedBlackSet<T> where T: Eq {}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> Serialize for RedBlackSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for RedBlackSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RedBlackSetVisitor<T> {
            marker: PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for RedBlackSetVisitor<T>
        where
            T: Deserialize<'de> + Ord,
        {
            type Value = RedBlackSet<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of keys")
            }

            fn visit_seq<A>(self, mut seq: A) -> result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = RedBlackSet::new();
                while let Some(key) = seq.next_element()? {
                    set.insert(key);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(RedBlackSetVisitor {
            marker: PhantomData,
        })
    }
}
