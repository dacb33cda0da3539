use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("avl: rotating left at height {}", node.height);
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("avl: rotating right at height {}", node.height);
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `path` is where the inserted key fell relative to the child on the search path. It is `None`
// when the new leaf is itself the child, in which case the node cannot be out of balance.
fn rebalance_inserted<T>(tree: &mut Tree<T>, path: Option<Ordering>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let balance = node.balance();
    node = match path {
        Some(Ordering::Greater) if balance < -1 => rotate_left(node),
        Some(Ordering::Less) if balance < -1 => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        },
        Some(Ordering::Less) if balance > 1 => rotate_right(node),
        Some(Ordering::Greater) if balance > 1 => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        },
        _ => node,
    };

    *tree = Some(node);
}

// After a removal the shape of the taller child decides between a single and a double rotation.
fn rebalance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let balance = node.balance();
    if balance < -1 {
        let right_balance = node.right.as_ref().map_or(0, |child| child.balance());
        if right_balance > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    } else if balance > 1 {
        let left_balance = node.left.as_ref().map_or(0, |child| child.balance());
        if left_balance < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    }

    *tree = Some(node);
}

// precondition: the tree is not empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let key = remove_min(&mut node.left);
            rebalance(tree);
            return key;
        }
    }

    let node = tree.take().expect("Expected a non-empty tree.");
    let Node { key, right, .. } = *node;
    *tree = right;
    key
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let path = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Equal => return false,
            Ordering::Less => {
                let path = node.left.as_ref().map(|child| key.cmp(&child.key));
                if !insert(&mut node.left, key) {
                    return false;
                }
                path
            },
            Ordering::Greater => {
                let path = node.right.as_ref().map(|child| key.cmp(&child.key));
                if !insert(&mut node.right, key) {
                    return false;
                }
                path
            },
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    rebalance_inserted(tree, path);
    true
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let successor = remove_min(&mut node.right);
                    let ret = mem::replace(&mut node.key, successor);
                    *tree = Some(node);
                    Some(ret)
                } else {
                    let Node {
                        key, left, right, ..
                    } = *node;
                    *tree = left.or(right);
                    return Some(key);
                }
            },
        },
        None => return None,
    };

    if ret.is_some() {
        rebalance(tree);
    }
    ret
}

pub fn get<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(&node.key),
        };
    }
    None
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}
