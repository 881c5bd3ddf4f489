//! Lazy traversal iterators.
//!
//! Every iterator here keeps its own explicit stack (or queue) and never recurses,
//! so they are safe on trees of any height. They yield borrowed values in the same
//! order as the recursive functions on [`Tree`](crate::tree::Tree).

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;
use crate::node::Node;

/// The four traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// self, left, right
    Preorder,
    /// left, self, right
    Inorder,
    /// left, right, self
    Postorder,
    /// breadth-first, left to right within a level
    LevelOrder,
}

impl Order {
    pub const ALL: [Order; 4] = [
        Order::Preorder,
        Order::Inorder,
        Order::Postorder,
        Order::LevelOrder,
    ];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Preorder => "preorder",
            Order::Inorder => "inorder",
            Order::Postorder => "postorder",
            Order::LevelOrder => "level-order",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Order {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preorder" => Ok(Order::Preorder),
            "inorder" => Ok(Order::Inorder),
            "postorder" => Ok(Order::Postorder),
            "level-order" | "levelorder" => Ok(Order::LevelOrder),
            other => Err(TreeError::Config {
                message: format!("unknown traversal order: {}", other),
            }),
        }
    }
}

/// Walks the subtree at `start` in the given order.
pub fn walk<T>(start: Option<&Node<T>>, order: Order) -> Traversal<'_, T> {
    match order {
        Order::Preorder => Traversal::Preorder(Preorder::new(start)),
        Order::Inorder => Traversal::Inorder(Inorder::new(start)),
        Order::Postorder => Traversal::Postorder(Postorder::new(start)),
        Order::LevelOrder => Traversal::LevelOrder(LevelOrder::new(start)),
    }
}

pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push right first so the left subtree is visited first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            cursor: start,
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.left();
        }
        let node = self.stack.pop()?;
        self.cursor = node.right();
        Some(node.value())
    }
}

pub struct Postorder<'a, T> {
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: start.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node.value());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|child| (child, false)));
            self.stack.extend(node.left().map(|child| (child, false)));
        }
        None
    }
}

pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            queue: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node.value())
    }
}

/// Iterator over any of the four orders, see [`walk`].
pub enum Traversal<'a, T> {
    Preorder(Preorder<'a, T>),
    Inorder(Inorder<'a, T>),
    Postorder(Postorder<'a, T>),
    LevelOrder(LevelOrder<'a, T>),
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::Preorder(it) => it.next(),
            Traversal::Inorder(it) => it.next(),
            Traversal::Postorder(it) => it.next(),
            Traversal::LevelOrder(it) => it.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("preorder", Order::Preorder)]
    #[case("inorder", Order::Inorder)]
    #[case("postorder", Order::Postorder)]
    #[case("level-order", Order::LevelOrder)]
    #[case(" LevelOrder ", Order::LevelOrder)]
    fn given_order_name_when_parsing_then_returns_order(#[case] name: &str, #[case] expected: Order) {
        assert_eq!(name.parse::<Order>().unwrap(), expected);
    }

    #[test]
    fn given_unknown_order_name_when_parsing_then_config_error() {
        let err = "zigzag".parse::<Order>().unwrap_err();
        assert!(matches!(err, TreeError::Config { .. }));
        assert!(err.to_string().contains("zigzag"));
    }

    #[test]
    fn given_order_when_displayed_then_round_trips_through_from_str() {
        for order in Order::ALL {
            assert_eq!(order.to_string().parse::<Order>().unwrap(), order);
        }
    }

    #[rstest]
    fn given_absent_start_when_walking_then_yields_nothing(
        #[values(Order::Preorder, Order::Inorder, Order::Postorder, Order::LevelOrder)]
        order: Order,
    ) {
        assert_eq!(walk::<u8>(None, order).count(), 0);
    }

    #[test]
    fn given_right_skewed_chain_when_walking_inorder_then_yields_top_down() {
        let mut root = Node::new(1);
        root.set_right(2);
        root.right_mut().unwrap().set_right(3);
        let values: Vec<_> = Inorder::new(Some(&root)).copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
