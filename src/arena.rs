use std::collections::VecDeque;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::error::{TreeError, TreeResult};
use crate::node::Node;

/// Tree node in the arena-based representation.
#[derive(Debug)]
pub struct ArenaNode<T> {
    /// Fixed for the lifetime of the node
    pub value: T,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    pub left: Option<Index>,
    pub right: Option<Index>,
}

impl<T> ArenaNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Binary tree with index-based child links.
///
/// Uses a generational arena so indices of overwritten subtrees go stale instead of
/// aliasing new nodes. Traversals never recurse, which makes this representation
/// suitable for very tall trees.
#[derive(Debug)]
pub struct ArenaTree<T> {
    arena: Arena<ArenaNode<T>>,
    root: Index,
}

impl<T> ArenaTree<T> {
    pub fn new(root_value: T) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(ArenaNode {
            value: root_value,
            parent: None,
            left: None,
            right: None,
        });
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// The root is never removed, so a tree holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get_node(&self, idx: Index) -> TreeResult<&ArenaNode<T>> {
        self.arena.get(idx).ok_or(TreeError::NodeNotFound(idx))
    }

    pub fn value(&self, idx: Index) -> TreeResult<&T> {
        Ok(&self.get_node(idx)?.value)
    }

    pub fn left(&self, idx: Index) -> TreeResult<Option<Index>> {
        Ok(self.get_node(idx)?.left)
    }

    pub fn right(&self, idx: Index) -> TreeResult<Option<Index>> {
        Ok(self.get_node(idx)?.right)
    }

    pub fn parent(&self, idx: Index) -> TreeResult<Option<Index>> {
        Ok(self.get_node(idx)?.parent)
    }

    pub fn is_leaf(&self, idx: Index) -> TreeResult<bool> {
        Ok(self.get_node(idx)?.is_leaf())
    }

    /// Replaces the left child of `idx` with a new leaf and returns its index.
    ///
    /// The previous left subtree is removed from the arena.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_left(&mut self, idx: Index, value: T) -> TreeResult<Index> {
        self.attach(idx, Side::Left, value)
    }

    /// Replaces the right child of `idx` with a new leaf and returns its index.
    ///
    /// The previous right subtree is removed from the arena.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_right(&mut self, idx: Index, value: T) -> TreeResult<Index> {
        self.attach(idx, Side::Right, value)
    }

    fn attach(&mut self, idx: Index, side: Side, value: T) -> TreeResult<Index> {
        let previous = match side {
            Side::Left => self.left(idx)?,
            Side::Right => self.right(idx)?,
        };
        if let Some(old) = previous {
            let removed = self.remove_subtree(old);
            debug!(?side, removed, "overwrote child subtree");
        }

        let child = self.arena.insert(ArenaNode {
            value,
            parent: Some(idx),
            left: None,
            right: None,
        });
        let node = self
            .arena
            .get_mut(idx)
            .ok_or(TreeError::NodeNotFound(idx))?;
        match side {
            Side::Left => node.left = Some(child),
            Side::Right => node.right = Some(child),
        }
        Ok(child)
    }

    fn remove_subtree(&mut self, idx: Index) -> usize {
        let mut removed = 0;
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                removed += 1;
                stack.extend(node.left);
                stack.extend(node.right);
            }
        }
        removed
    }

    fn start_node(&self, start: Option<Index>) -> TreeResult<Option<&ArenaNode<T>>> {
        start.map(|idx| self.get_node(idx)).transpose()
    }

    /// Present children of a node, left first.
    fn children(&self, node: &ArenaNode<T>) -> TreeResult<Vec<&ArenaNode<T>>> {
        node.left
            .into_iter()
            .chain(node.right)
            .map(|idx| self.get_node(idx))
            .collect()
    }
}

impl<T: Clone> ArenaTree<T> {
    #[instrument(level = "debug", skip(self))]
    pub fn preorder(&self, start: Option<Index>) -> TreeResult<Vec<T>> {
        let mut values = Vec::new();
        let mut stack: Vec<&ArenaNode<T>> = self.start_node(start)?.into_iter().collect();

        while let Some(node) = stack.pop() {
            values.push(node.value.clone());
            // Push children in reverse order for left-to-right traversal
            for child in self.children(node)?.into_iter().rev() {
                stack.push(child);
            }
        }

        Ok(values)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn inorder(&self, start: Option<Index>) -> TreeResult<Vec<T>> {
        let mut values = Vec::new();
        let mut stack: Vec<&ArenaNode<T>> = Vec::new();
        let mut cursor = self.start_node(start)?;

        loop {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.map(|idx| self.get_node(idx)).transpose()?;
            }
            let Some(node) = stack.pop() else {
                break;
            };
            values.push(node.value.clone());
            cursor = node.right.map(|idx| self.get_node(idx)).transpose()?;
        }

        Ok(values)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn postorder(&self, start: Option<Index>) -> TreeResult<Vec<T>> {
        let mut values = Vec::new();
        let mut stack: Vec<(&ArenaNode<T>, bool)> =
            self.start_node(start)?.map(|node| (node, false)).into_iter().collect();

        while let Some((node, visited)) = stack.pop() {
            if visited {
                values.push(node.value.clone());
            } else {
                stack.push((node, true));
                for child in self.children(node)?.into_iter().rev() {
                    stack.push((child, false));
                }
            }
        }

        Ok(values)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn level_order(&self, start: Option<Index>) -> TreeResult<Vec<T>> {
        let mut values = Vec::new();
        let mut queue: VecDeque<&ArenaNode<T>> = self.start_node(start)?.into_iter().collect();

        while let Some(node) = queue.pop_front() {
            values.push(node.value.clone());
            queue.extend(self.children(node)?);
        }

        Ok(values)
    }
}

impl<T: Clone> From<&Node<T>> for ArenaTree<T> {
    /// Copies the shape and values of an owned subtree.
    fn from(root: &Node<T>) -> Self {
        let mut tree = ArenaTree::new(root.value().clone());
        let mut stack = vec![(root, tree.root)];

        while let Some((node, parent)) = stack.pop() {
            for (side, child) in [(Side::Left, node.left()), (Side::Right, node.right())] {
                if let Some(child) = child {
                    let idx = tree.arena.insert(ArenaNode {
                        value: child.value().clone(),
                        parent: Some(parent),
                        left: None,
                        right: None,
                    });
                    if let Some(parent_node) = tree.arena.get_mut(parent) {
                        match side {
                            Side::Left => parent_node.left = Some(idx),
                            Side::Right => parent_node.right = Some(idx),
                        }
                    }
                    stack.push((child, idx));
                }
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_tree_when_created_then_root_is_single_leaf() {
        let tree = ArenaTree::new('r');
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert!(tree.is_leaf(tree.root()).unwrap());
        assert_eq!(tree.parent(tree.root()).unwrap(), None);
    }

    #[test]
    fn given_child_when_attached_then_parent_link_points_back() {
        let mut tree = ArenaTree::new(1);
        let root = tree.root();
        let left = tree.set_left(root, 2).unwrap();
        assert_eq!(tree.parent(left).unwrap(), Some(root));
        assert_eq!(tree.left(root).unwrap(), Some(left));
        assert_eq!(tree.right(root).unwrap(), None);
    }

    #[test]
    fn given_left_subtree_when_overwritten_then_old_indices_go_stale() {
        let mut tree = ArenaTree::new(1);
        let root = tree.root();
        let old = tree.set_left(root, 2).unwrap();
        let grandchild = tree.set_right(old, 3).unwrap();
        assert_eq!(tree.len(), 3);

        tree.set_left(root, 4).unwrap();

        assert_eq!(tree.len(), 2);
        assert!(!tree.is_empty());
        assert!(matches!(tree.value(old), Err(TreeError::NodeNotFound(_))));
        assert!(matches!(
            tree.value(grandchild),
            Err(TreeError::NodeNotFound(_))
        ));
        assert_eq!(tree.preorder(Some(root)).unwrap(), vec![1, 4]);
    }

    #[test]
    fn given_stale_index_when_attaching_then_errors_without_inserting() {
        let mut tree = ArenaTree::new(1);
        let root = tree.root();
        let stale = tree.set_left(root, 2).unwrap();
        tree.set_left(root, 3).unwrap();

        let result = tree.set_right(stale, 9);
        assert!(matches!(result, Err(TreeError::NodeNotFound(idx)) if idx == stale));
        assert_eq!(tree.len(), 2);
    }
}
