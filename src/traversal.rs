//! Tree traversals shared by every set in this crate.

use serde_derive::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::marker::PhantomData;

/// The order in which a traversal visits the keys of a tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in increasing order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Level by level from the root, left to right within a level.
    BreadthFirst,
}

/// A read-only position in a binary tree.
///
/// Each tree representation provides its own cursor so that traversals and rendering can be
/// written once.
pub trait Cursor<'a>: Copy {
    type Key: 'a;

    fn key(self) -> &'a Self::Key;

    fn left(self) -> Option<Self>;

    fn right(self) -> Option<Self>;
}

#[derive(Clone)]
enum Frontier<C> {
    // The flag marks nodes whose children have already been scheduled.
    Depth(Vec<(C, bool)>),
    Breadth(VecDeque<C>),
}

/// A lazy traversal over the keys of a tree.
///
/// Only the frontier of the walk is stored, so a depth-first traversal uses memory proportional
/// to the height of the tree. Cloning a traversal yields an independent iterator that resumes from
/// the same position.
#[derive(Clone)]
pub struct Traversal<'a, C> {
    order: Order,
    frontier: Frontier<C>,
    marker: PhantomData<&'a ()>,
}

impl<'a, C> Traversal<'a, C>
where
    C: Cursor<'a>,
{
    pub fn new(root: Option<C>, order: Order) -> Self {
        let frontier = match order {
            Order::BreadthFirst => Frontier::Breadth(root.into_iter().collect()),
            _ => Frontier::Depth(root.into_iter().map(|node| (node, false)).collect()),
        };
        Traversal {
            order,
            frontier,
            marker: PhantomData,
        }
    }
}

impl<'a, C> Iterator for Traversal<'a, C>
where
    C: Cursor<'a>,
{
    type Item = &'a C::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let order = self.order;
        match self.frontier {
            Frontier::Breadth(ref mut queue) => {
                let node = queue.pop_front()?;
                queue.extend(node.left());
                queue.extend(node.right());
                Some(node.key())
            },
            Frontier::Depth(ref mut stack) => {
                while let Some((node, expanded)) = stack.pop() {
                    if expanded {
                        return Some(node.key());
                    }

                    // pushed in reverse visiting order
                    let left = node.left().map(|child| (child, false));
                    let right = node.right().map(|child| (child, false));
                    match order {
                        Order::PreOrder => {
                            stack.extend(right);
                            stack.extend(left);
                            stack.push((node, true));
                        },
                        Order::InOrder => {
                            stack.extend(right);
                            stack.push((node, true));
                            stack.extend(left);
                        },
                        Order::PostOrder => {
                            stack.push((node, true));
                            stack.extend(right);
                            stack.extend(left);
                        },
                        Order::BreadthFirst => unreachable!(),
                    }
                }
                None
            },
        }
    }
}

/// Renders a tree sideways: the right subtree above its parent, the left subtree below, one node
/// per line. The root is indented by `margin` spaces and every level adds `step` more.
pub fn render<'a, C, F>(root: Option<C>, margin: usize, step: usize, label: F) -> String
where
    C: Cursor<'a>,
    F: Fn(C) -> String,
{
    fn render_subtree<'a, C, F>(
        out: &mut String,
        tree: Option<C>,
        indent: usize,
        step: usize,
        label: &F,
    ) where
        C: Cursor<'a>,
        F: Fn(C) -> String,
    {
        if let Some(node) = tree {
            render_subtree(out, node.right(), indent + step, step, label);
            out.extend((0..indent).map(|_| ' '));
            out.push_str(&label(node));
            out.push('\n');
            render_subtree(out, node.left(), indent + step, step, label);
        }
    }

    match root {
        None => String::from("<empty>\n"),
        Some(_) => {
            let mut out = String::new();
            render_subtree(&mut out, root, margin, step, &label);
            out
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{render, Cursor, Order, Traversal};

    struct Node {
        key: u32,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    }

    impl<'a> Cursor<'a> for &'a Node {
        type Key = u32;

        fn key(self) -> &'a u32 {
            &self.key
        }

        fn left(self) -> Option<Self> {
            self.left.as_deref()
        }

        fn right(self) -> Option<Self> {
            self.right.as_deref()
        }
    }

    fn leaf(key: u32) -> Option<Box<Node>> {
        Some(Box::new(Node {
            key,
            left: None,
            right: None,
        }))
    }

    fn branch(key: u32, left: Option<Box<Node>>, right: Option<Box<Node>>) -> Option<Box<Node>> {
        Some(Box::new(Node { key, left, right }))
    }

    //       4
    //     /   \
    //    2     6
    //   / \   /
    //  1   3 5
    fn sample() -> Option<Box<Node>> {
        branch(
            4,
            branch(2, leaf(1), leaf(3)),
            branch(6, leaf(5), None),
        )
    }

    fn collect(tree: &Option<Box<Node>>, order: Order) -> Vec<u32> {
        Traversal::new(tree.as_deref(), order).cloned().collect()
    }

    #[test]
    fn test_in_order() {
        assert_eq!(collect(&sample(), Order::InOrder), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_pre_order() {
        assert_eq!(collect(&sample(), Order::PreOrder), vec![4, 2, 1, 3, 6, 5]);
    }

    #[test]
    fn test_post_order() {
        assert_eq!(collect(&sample(), Order::PostOrder), vec![1, 3, 2, 5, 6, 4]);
    }

    #[test]
    fn test_breadth_first() {
        assert_eq!(collect(&sample(), Order::BreadthFirst), vec![4, 2, 6, 1, 3, 5]);
    }

    #[test]
    fn test_empty() {
        for &order in &[
            Order::InOrder,
            Order::PreOrder,
            Order::PostOrder,
            Order::BreadthFirst,
        ] {
            assert!(collect(&None, order).is_empty());
        }
    }

    #[test]
    fn test_clone_resumes() {
        let tree = sample();
        let mut traversal = Traversal::new(tree.as_deref(), Order::InOrder);
        assert_eq!(traversal.next(), Some(&1));
        assert_eq!(traversal.next(), Some(&2));

        let resumed = traversal.clone().cloned().collect::<Vec<u32>>();
        assert_eq!(resumed, vec![3, 4, 5, 6]);
        assert_eq!(traversal.next(), Some(&3));
    }

    #[test]
    fn test_render() {
        let tree = sample();
        let rendered = render(tree.as_deref(), 0, 2, |node| node.key.to_string());
        assert_eq!(rendered, "  6\n    5\n4\n    3\n  2\n    1\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render::<&Node, _>(None, 0, 2, |node| node.key.to_string()), "<empty>\n");
    }
}
