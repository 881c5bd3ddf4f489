//! The tree container and its four traversals.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::config::{Settings, Strategy};
use crate::error::{TreeError, TreeResult};
use crate::node::Node;
use crate::traverse::{self, Order, Traversal};

/// A binary tree that always has a root value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Node<T>,
}

impl<T> Tree<T> {
    pub fn new(root_value: T) -> Self {
        Self {
            root: Node::new(root_value),
        }
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node<T> {
        &mut self.root
    }

    /// Lazily walks the whole tree, borrowing values.
    pub fn iter(&self, order: Order) -> Traversal<'_, T> {
        traverse::walk(Some(&self.root), order)
    }
}

/// Traversals are associated functions taking any node, so subtrees can be walked
/// directly. `None` is an empty subtree and yields an empty vector.
///
/// The depth-first orders recurse once per level; for very tall trees use
/// [`Tree::traverse`] with [`Strategy::Iterative`] or the iterators in [`traverse`].
impl<T: Clone> Tree<T> {
    /// Root-first order: self, left, right. Enough to rebuild the exact shape.
    pub fn preorder(node: Option<&Node<T>>) -> Vec<T> {
        let mut values = Vec::new();
        preorder_into(node, &mut values);
        values
    }

    /// Left, self, right. Sorted when the tree holds the search-tree ordering.
    pub fn inorder(node: Option<&Node<T>>) -> Vec<T> {
        let mut values = Vec::new();
        inorder_into(node, &mut values);
        values
    }

    /// Left, right, self. Children always come before their parent.
    pub fn postorder(node: Option<&Node<T>>) -> Vec<T> {
        let mut values = Vec::new();
        postorder_into(node, &mut values);
        values
    }

    /// Breadth-first, left to right within a level.
    pub fn level_order(node: Option<&Node<T>>) -> Vec<T> {
        let mut values = Vec::new();
        let mut queue: VecDeque<&Node<T>> = node.into_iter().collect();

        while let Some(current) = queue.pop_front() {
            values.push(current.value().clone());
            queue.extend(current.children());
        }

        values
    }

    /// Traverses `node` in `order`, refusing trees taller than `settings.max_depth`.
    #[instrument(level = "debug", skip(node, settings), fields(strategy = %settings.strategy))]
    pub fn traverse(node: Option<&Node<T>>, order: Order, settings: &Settings) -> TreeResult<Vec<T>> {
        if let (Some(limit), Some(start)) = (settings.max_depth, node) {
            let depth = start.height();
            if depth > limit {
                debug!(depth, limit, "refusing traversal");
                return Err(TreeError::DepthExceeded { depth, limit });
            }
        }

        let values = match (settings.strategy, order) {
            (_, Order::LevelOrder) => Self::level_order(node),
            (Strategy::Recursive, Order::Preorder) => Self::preorder(node),
            (Strategy::Recursive, Order::Inorder) => Self::inorder(node),
            (Strategy::Recursive, Order::Postorder) => Self::postorder(node),
            (Strategy::Iterative, order) => traverse::walk(node, order).cloned().collect(),
        };
        Ok(values)
    }
}

fn preorder_into<T: Clone>(node: Option<&Node<T>>, values: &mut Vec<T>) {
    if let Some(node) = node {
        values.push(node.value().clone());
        preorder_into(node.left(), values);
        preorder_into(node.right(), values);
    }
}

fn inorder_into<T: Clone>(node: Option<&Node<T>>, values: &mut Vec<T>) {
    if let Some(node) = node {
        inorder_into(node.left(), values);
        values.push(node.value().clone());
        inorder_into(node.right(), values);
    }
}

fn postorder_into<T: Clone>(node: Option<&Node<T>>, values: &mut Vec<T>) {
    if let Some(node) = node {
        postorder_into(node.left(), values);
        postorder_into(node.right(), values);
        values.push(node.value().clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    //        4
    //      /   \
    //     2     6
    //    / \   / \
    //   1   3 5   7
    #[fixture]
    fn balanced() -> Tree<i32> {
        let mut tree = Tree::new(4);
        let root = tree.root_mut();
        root.set_left(2);
        root.set_right(6);
        let two = root.left_mut().unwrap();
        two.set_left(1);
        two.set_right(3);
        let six = root.right_mut().unwrap();
        six.set_left(5);
        six.set_right(7);
        tree
    }

    #[rstest]
    fn given_balanced_tree_when_traversing_then_matches_known_orders(balanced: Tree<i32>) {
        let root = Some(balanced.root());
        assert_eq!(Tree::preorder(root), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(Tree::inorder(root), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(Tree::postorder(root), vec![1, 3, 2, 5, 7, 6, 4]);
        assert_eq!(Tree::level_order(root), vec![4, 2, 6, 1, 3, 5, 7]);
    }

    #[rstest]
    fn given_internal_node_when_traversing_then_walks_only_that_subtree(balanced: Tree<i32>) {
        let six = balanced.root().right();
        assert_eq!(Tree::preorder(six), vec![6, 5, 7]);
        assert_eq!(Tree::level_order(six), vec![6, 5, 7]);
    }

    #[rstest]
    fn given_depth_limit_below_height_when_traversing_then_refuses(balanced: Tree<i32>) {
        let settings = Settings {
            max_depth: Some(2),
            ..Settings::default()
        };
        let result = Tree::traverse(Some(balanced.root()), Order::Inorder, &settings);
        assert!(matches!(
            result,
            Err(TreeError::DepthExceeded { depth: 3, limit: 2 })
        ));
    }

    #[rstest]
    fn given_iterative_strategy_when_traversing_then_matches_recursive(
        balanced: Tree<i32>,
        #[values(Order::Preorder, Order::Inorder, Order::Postorder, Order::LevelOrder)]
        order: Order,
    ) {
        let recursive = Tree::traverse(Some(balanced.root()), order, &Settings::default()).unwrap();
        let iterative = Settings {
            max_depth: Some(3),
            strategy: Strategy::Iterative,
        };
        assert_eq!(
            Tree::traverse(Some(balanced.root()), order, &iterative).unwrap(),
            recursive
        );
    }
}
