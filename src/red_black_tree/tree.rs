use crate::arena::{Handle, TypedArena};
use crate::red_black_tree::node::{Color, Link, Node, NodeRef, Side};
use log::trace;
use std::cmp::Ordering;
use std::mem;

/// A red black tree whose nodes live in an arena and refer to each other by handle.
#[derive(Clone)]
pub struct Tree<T> {
    arena: TypedArena<Node<T>>,
    root: Link,
}

impl<T> Tree<T> {
    pub fn new(chunk_size: usize) -> Self {
        Tree {
            arena: TypedArena::new(chunk_size),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeRef<T>> {
        self.root.map(|handle| NodeRef {
            arena: &self.arena,
            handle,
        })
    }

    fn is_red(&self, link: Link) -> bool {
        match link {
            None => false,
            Some(handle) => self.arena[handle].color == Color::Red,
        }
    }

    fn side_of(&self, parent: Handle, child: Handle) -> Side {
        if self.arena[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    // Points whatever held `old` (its parent's child slot, or the root) at `new`.
    fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.arena[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            },
        }
    }

    // Rotates `node` down toward `direction`, lifting its child on the opposite side into its
    // place. Returns the lifted node.
    fn rotate(&mut self, node: Handle, direction: Side) -> Handle {
        trace!("red black: rotating {:?}", direction);
        let pivot = self.arena[node]
            .child(direction.opposite())
            .expect("Expected a child node to rotate onto.");

        let inner = self.arena[pivot].child(direction);
        *self.arena[node].child_mut(direction.opposite()) = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }

        let parent = self.arena[node].parent;
        self.replace_child(parent, node, Some(pivot));
        self.arena[pivot].parent = parent;

        *self.arena[pivot].child_mut(direction) = Some(node);
        self.arena[node].parent = Some(pivot);
        pivot
    }

    fn fix_insert(&mut self, mut node: Handle) {
        while let Some(parent) = self.arena[node].parent {
            if self.arena[parent].color == Color::Black {
                break;
            }
            let grandparent = match self.arena[parent].parent {
                Some(grandparent) => grandparent,
                None => break,
            };

            let side = self.side_of(grandparent, parent);
            let uncle = self.arena[grandparent].child(side.opposite());
            if self.is_red(uncle) {
                trace!("red black: insert fixup, red uncle");
                self.arena[parent].color = Color::Black;
                if let Some(uncle) = uncle {
                    self.arena[uncle].color = Color::Black;
                }
                self.arena[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            let mut top = parent;
            if self.side_of(parent, node) != side {
                trace!("red black: insert fixup, inner grandchild");
                top = self.rotate(parent, side);
            }
            trace!("red black: insert fixup, outer grandchild");
            self.arena[top].color = Color::Black;
            self.arena[grandparent].color = Color::Red;
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }

    // `node` sits on the `side` of `parent` and its subtree is one black node short. `node` is
    // `None` when a black leaf was just removed from that slot.
    fn fix_remove(&mut self, mut node: Link, mut parent: Link, mut side: Side) {
        while let Some(curr_parent) = parent {
            if self.is_red(node) {
                break;
            }

            let far = side.opposite();
            let mut sibling = self.arena[curr_parent]
                .child(far)
                .expect("Expected a sibling of a double black node.");

            if self.arena[sibling].color == Color::Red {
                trace!("red black: remove fixup, red sibling");
                self.arena[sibling].color = Color::Black;
                self.arena[curr_parent].color = Color::Red;
                self.rotate(curr_parent, side);
                sibling = self.arena[curr_parent]
                    .child(far)
                    .expect("Expected a sibling of a double black node.");
            }

            let near_child = self.arena[sibling].child(side);
            let far_child = self.arena[sibling].child(far);
            if !self.is_red(near_child) && !self.is_red(far_child) {
                trace!("red black: remove fixup, black sibling with black children");
                self.arena[sibling].color = Color::Red;
                node = Some(curr_parent);
                parent = self.arena[curr_parent].parent;
                if let Some(grandparent) = parent {
                    side = self.side_of(grandparent, curr_parent);
                }
                continue;
            }

            if !self.is_red(far_child) {
                trace!("red black: remove fixup, red near nephew");
                if let Some(near_child) = near_child {
                    self.arena[near_child].color = Color::Black;
                }
                self.arena[sibling].color = Color::Red;
                sibling = self.rotate(sibling, far);
            }

            trace!("red black: remove fixup, red far nephew");
            let parent_color = self.arena[curr_parent].color;
            self.arena[sibling].color = parent_color;
            self.arena[curr_parent].color = Color::Black;
            if let Some(far_child) = self.arena[sibling].child(far) {
                self.arena[far_child].color = Color::Black;
            }
            self.rotate(curr_parent, side);
            node = self.root;
            break;
        }

        if let Some(node) = node {
            self.arena[node].color = Color::Black;
        }
    }

    fn min_handle(&self, mut curr: Handle) -> Handle {
        while let Some(left) = self.arena[curr].left {
            curr = left;
        }
        curr
    }

    fn max_handle(&self, mut curr: Handle) -> Handle {
        while let Some(right) = self.arena[curr].right {
            curr = right;
        }
        curr
    }

    pub fn min(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[self.min_handle(root)].key)
    }

    pub fn max(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[self.max_handle(root)].key)
    }

    /// Consumes the tree and returns its keys in increasing order.
    pub fn into_keys(mut self) -> Vec<T> {
        let mut handles = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut curr = self.root;
        loop {
            while let Some(handle) = curr {
                stack.push(handle);
                curr = self.arena[handle].left;
            }
            match stack.pop() {
                Some(handle) => {
                    handles.push(handle);
                    curr = self.arena[handle].right;
                },
                None => break,
            }
        }

        handles
            .into_iter()
            .map(|handle| self.arena.free(handle).key)
            .collect()
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    fn find(&self, key: &T) -> Link {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub fn get(&self, key: &T) -> Option<&T> {
        self.find(key).map(|handle| &self.arena[handle].key)
    }

    pub fn insert(&mut self, key: T) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            parent = curr;
            curr = node.child(side);
        }

        let new_node = self.arena.allocate(Node::new(key, parent));
        match parent {
            None => self.root = Some(new_node),
            Some(parent) => *self.arena[parent].child_mut(side) = Some(new_node),
        }
        self.fix_insert(new_node);
        true
    }

    pub fn remove(&mut self, key: &T) -> Option<T> {
        let target = self.find(key)?;

        // a node with two children trades keys with its in-order successor, which has at most
        // one child and is the node actually unlinked
        let victim = match (self.arena[target].left, self.arena[target].right) {
            (Some(_), Some(right)) => self.min_handle(right),
            _ => target,
        };

        let victim_node = &self.arena[victim];
        let child = victim_node.left.or(victim_node.right);
        let parent = victim_node.parent;
        let side = match parent {
            Some(parent) => self.side_of(parent, victim),
            None => Side::Left,
        };

        self.replace_child(parent, victim, child);
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }

        let Node {
            key: victim_key,
            color,
            ..
        } = self.arena.free(victim);
        let ret = if victim == target {
            victim_key
        } else {
            mem::replace(&mut self.arena[target].key, victim_key)
        };

        // unlinking a red node never changes a black height
        if color == Color::Black {
            self.fix_remove(child, parent, side);
        }
        Some(ret)
    }

    pub fn ceil(&self, key: &T) -> Option<&T> {
        let mut curr = self.root;
        let mut ret = None;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Greater => node.right,
                Ordering::Less => {
                    ret = Some(&node.key);
                    node.left
                },
                Ordering::Equal => return Some(&node.key),
            };
        }
        ret
    }

    pub fn floor(&self, key: &T) -> Option<&T> {
        let mut curr = self.root;
        let mut ret = None;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    ret = Some(&node.key);
                    node.right
                },
                Ordering::Equal => return Some(&node.key),
            };
        }
        ret
    }
}
