//! Owned binary tree nodes.

use std::collections::VecDeque;

type SubTree<T> = Option<Box<Node<T>>>;

/// A node of a binary tree, exclusively owning its children.
///
/// The value is fixed for the lifetime of the node; to change it, replace the node
/// through its parent's [`Node::set_left`] or [`Node::set_right`].
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack and work on
/// trees of any height. The derived `Debug` output and the text rendering in
/// [`render`](crate::render) recurse once per level.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: SubTree<T>,
    right: SubTree<T>,
}

impl<T> Node<T> {
    /// Creates a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Replaces the left child with a new leaf holding `value`.
    ///
    /// Any previous left subtree is dropped.
    pub fn set_left(&mut self, value: T) {
        self.left = Some(Box::new(Node::new(value)));
    }

    /// Replaces the right child with a new leaf holding `value`.
    ///
    /// Any previous right subtree is dropped.
    pub fn set_right(&mut self, value: T) {
        self.right = Some(Box::new(Node::new(value)));
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Present children, left first.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.left().into_iter().chain(self.right())
    }

    /// Number of levels in the subtree rooted here, computed breadth-first.
    /// Each element in the queue is a pair (node, depth).
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self, 1));

        while let Some((node, depth)) = queue.pop_front() {
            if depth > max_depth {
                max_depth = depth;
            }
            for child in node.children() {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }

    /// Number of nodes in the subtree rooted here.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        // Postorder walk; finished copies wait on `built` until their parent is assembled
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        let mut stack = vec![(self, false)];

        while let Some((node, visited)) = stack.pop() {
            if !visited {
                stack.push((node, true));
                stack.extend(node.right().map(|child| (child, false)));
                stack.extend(node.left().map(|child| (child, false)));
                continue;
            }
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            let copy = Node {
                value: node.value.clone(),
                left,
                right,
            };
            if stack.is_empty() {
                return copy;
            }
            built.push(Box::new(copy));
        }

        unreachable!("the root is assembled last")
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

// Dismantle the subtree with an explicit stack; the default recursive drop
// overflows on deeply skewed trees.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
