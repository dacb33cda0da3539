use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::error::{Error, Result};
use crate::ordered_set::OrderedSet;
use crate::traversal::{self, Order, Traversal};
use log::debug;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::result;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::Error;
///
/// let mut set = AvlSet::new();
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
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None, len: 0 }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("avl: clearing {} keys", self.len);
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the underlying tree. An empty tree has height `-1` and a tree with a
    /// single key has height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// set.extend(1..=7);
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Returns the key stored at the root of the underlying tree, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.extend(vec![1, 2, 3]);
    /// assert_eq!(set.root(), Some(&2));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetTraversal<T> {
        self.traverse(Order::InOrder)
    }

    /// Returns an iterator that visits the keys of the underlying tree in a particular order.
    /// Calling `traverse` again, or cloning the iterator, restarts or forks the walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::Order;
    ///
    /// let mut set = AvlSet::new();
    /// set.extend(vec![1, 2, 3]);
    ///
    /// assert_eq!(set.traverse(Order::PreOrder).collect::<Vec<_>>(), vec![&2, &1, &3]);
    /// assert_eq!(set.traverse(Order::PostOrder).collect::<Vec<_>>(), vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Order) -> AvlSetTraversal<T> {
        AvlSetTraversal {
            inner: Traversal::new(self.tree.as_deref(), order),
        }
    }

    /// Returns the underlying tree drawn sideways, one key per line, with the right subtree above
    /// its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.render(), "<empty>\n");
    ///
    /// set.extend(vec![1, 2, 3]);
    /// assert_eq!(set.render(), "  3\n2\n  1\n");
    /// ```
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        traversal::render(self.tree.as_deref(), 0, 2, |node: &Node<T>| {
            node.key.to_string()
        })
    }
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key
    /// already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. Returns `false` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, key: &T) -> Option<T> {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::get(&self.tree, key).is_some()
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the set. Returns `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        tree::min(&self.tree).ok_or(Error::EmptyCollection)
    }

    /// Returns the maximum key of the set. Returns `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        tree::max(&self.tree).ok_or(Error::EmptyCollection)
    }
}

impl<T> OrderedSet<T> for AvlSet<T>
where
    T: Ord,
{
    type Traversal<'a> = AvlSetTraversal<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn contains(&self, key: &T) -> bool {
        AvlSet::contains(self, key)
    }

    fn insert(&mut self, key: T) -> bool {
        AvlSet::insert(self, key)
    }

    fn remove(&mut self, key: &T) -> bool {
        AvlSet::remove(self, key)
    }

    fn min(&self) -> Result<&T> {
        AvlSet::min(self)
    }

    fn max(&self) -> Result<&T> {
        AvlSet::max(self)
    }

    fn len(&self) -> usize {
        AvlSet::len(self)
    }

    fn traverse(&self, order: Order) -> Self::Traversal<'_> {
        AvlSet::traverse(self, order)
    }

    fn render(&self) -> String
    where
        T: fmt::Display,
    {
        AvlSet::render(self)
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlSetTraversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlSet<T>` that visits keys in a chosen `Order`.
///
/// This iterator yields immutable references.
pub struct AvlSetTraversal<'a, T>
where
    T: 'a,
{
    inner: Traversal<'a, &'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetTraversal<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> Clone for AvlSetTraversal<'a, T> {
    fn clone(&self) -> Self {
        AvlSetTraversal {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AvlSet<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        AvlSet {
            tree: self.tree.clone(),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.tree = source.tree.clone();
        self.len = source.len;
    }
}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &AvlSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Eq {}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
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

impl<T> Serialize for AvlSet<T>
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

impl<'de, T> Deserialize<'de> for AvlSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AvlSetVisitor<T> {
            marker: PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for AvlSetVisitor<T>
        where
            T: Deserialize<'de> + Ord,
        {
            type Value = AvlSet<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of keys")
            }

            fn visit_seq<A>(self, mut seq: A) -> result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = AvlSet::new();
                while let Some(key) = seq.next_element()? {
                    set.insert(key);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(AvlSetVisitor {
            marker: PhantomData,
        })
    }
}
