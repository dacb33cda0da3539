use crate::avl_tree::tree;
use crate::traversal::Cursor;
use std::cmp;

/// A struct representing an internal node of an avl tree.
#[derive(Clone)]
pub struct Node<T> {
    pub key: T,
    pub height: i32,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }
}

impl<'a, T> Cursor<'a> for &'a Node<T> {
    type Key = T;

    fn key(self) -> &'a T {
        &self.key
    }

    fn left(self) -> Option<Self> {
        self.left.as_deref()
    }

    fn right(self) -> Option<Self> {
        self.right.as_deref()
    }
}
