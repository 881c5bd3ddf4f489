//! A generic binary tree with the four canonical traversals.
//!
//! [`Node`] owns its children exclusively; [`Tree`] owns the root and exposes
//! preorder, inorder, postorder and level-order traversals as associated functions
//! that accept any node as the starting point:
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new(2);
//! tree.root_mut().set_left(1);
//! tree.root_mut().set_right(3);
//!
//! assert_eq!(Tree::inorder(Some(tree.root())), vec![1, 2, 3]);
//! assert_eq!(Tree::level_order(tree.root().left()), vec![1]);
//! assert!(Tree::<i32>::postorder(None).is_empty());
//! ```
//!
//! The depth-first functions recurse once per level. Callers holding very tall trees
//! should use the iterators in [`traverse`], [`Tree::traverse`] with
//! [`Strategy::Iterative`], or the index-linked [`ArenaTree`]. Cloning, comparing and
//! dropping never recurse; `Debug` and the [`render`] output do.

pub mod arena;
pub mod config;
pub mod error;
pub mod node;
pub mod render;
pub mod traverse;
pub mod tree;
pub mod util;

pub use arena::ArenaTree;
pub use config::{Settings, Strategy};
pub use error::{TreeError, TreeResult};
pub use node::Node;
pub use render::ToTermTree;
pub use traverse::Order;
pub use tree::Tree;
