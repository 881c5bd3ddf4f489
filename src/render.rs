//! Text rendering of trees via `termtree`.
//!
//! Rendering recurses once per level, so it is meant for trees small enough to read.

use std::fmt;

use generational_arena::Index;
use termtree::Tree as TermTree;

use crate::arena::ArenaTree;
use crate::node::Node;
use crate::tree::Tree;

/// Placeholder for the absent side of a node with exactly one child.
const MISSING: &str = "-";

pub trait ToTermTree {
    fn to_term_tree(&self) -> TermTree<String>;
}

impl<T: fmt::Display> ToTermTree for Node<T> {
    fn to_term_tree(&self) -> TermTree<String> {
        let root = TermTree::new(self.value().to_string());
        if self.is_leaf() {
            return root;
        }

        let leaves: Vec<_> = [self.left(), self.right()]
            .into_iter()
            .map(|child| match child {
                Some(child) => child.to_term_tree(),
                None => TermTree::new(MISSING.to_string()),
            })
            .collect();

        root.with_leaves(leaves)
    }
}

impl<T: fmt::Display> ToTermTree for ArenaTree<T> {
    fn to_term_tree(&self) -> TermTree<String> {
        fn build_tree<U: fmt::Display>(arena: &ArenaTree<U>, node_idx: Index) -> TermTree<String> {
            let Ok(node) = arena.get_node(node_idx) else {
                return TermTree::new(MISSING.to_string());
            };
            let tree = TermTree::new(node.value.to_string());
            if node.is_leaf() {
                return tree;
            }
            let leaves: Vec<_> = [node.left, node.right]
                .into_iter()
                .map(|child| match child {
                    Some(idx) => build_tree(arena, idx),
                    None => TermTree::new(MISSING.to_string()),
                })
                .collect();
            tree.with_leaves(leaves)
        }

        build_tree(self, self.root())
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root().to_term_tree())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_single_child_when_rendering_then_marks_missing_side() {
        let mut tree = Tree::new(1);
        tree.root_mut().set_right(3);
        let rendered = tree.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines, vec!["1", "├── -", "└── 3"]);
    }

    #[test]
    fn given_arena_copy_when_rendering_then_matches_owned_rendering() {
        let mut tree = Tree::new("root");
        let root = tree.root_mut();
        root.set_left("left");
        root.set_right("right");
        root.left_mut().unwrap().set_left("deep");

        let arena = ArenaTree::from(tree.root());
        assert_eq!(
            arena.to_term_tree().to_string(),
            tree.root().to_term_tree().to_string()
        );
    }
}
