use crate::arena::{Handle, TypedArena};
use crate::traversal::Cursor;

pub type Link = Option<Handle>;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// An enum naming one of the two children of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a red black tree.
///
/// `parent` only records where the node hangs; the arena owns every node.
#[derive(Clone)]
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Link) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A read-only position in a red black tree.
pub struct NodeRef<'a, T> {
    pub arena: &'a TypedArena<Node<T>>,
    pub handle: Handle,
}

impl<'a, T> NodeRef<'a, T> {
    pub fn node(self) -> &'a Node<T> {
        &self.arena[self.handle]
    }

    fn at(self, link: Link) -> Option<Self> {
        link.map(|handle| NodeRef {
            arena: self.arena,
            handle,
        })
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> Cursor<'a> for NodeRef<'a, T> {
    type Key = T;

    fn key(self) -> &'a T {
        &self.node().key
    }

    fn left(self) -> Option<Self> {
        self.at(self.node().left)
    }

    fn right(self) -> Option<Self> {
        self.at(self.node().right)
    }
}
