//! # Singly Linked List
//!
//! A classic singly linked list: every node owns a value and a link to the
//! next node, and the list itself only knows the head.
//!
//! ## Overview
//!
//! Links are `Option<Rc<RefCell<Node<T>>>>` so that a tail can be pointed back
//! at the head with [`SinglyLinkedList::create_cycle`], which is what
//! [`SinglyLinkedList::has_cycle`] is tested against. Cycle detection compares
//! node identity (the `Rc` allocation), never stored values, so a list full of
//! equal values is not mistaken for a cyclic one.
//!
//! Nodes never leave the list. Queries hand back clones of the stored values,
//! lengths, indices and booleans only.
//!
//! Every traversal follows `next` links until it runs out of nodes. On a list
//! that has been made cyclic, only `get_first`, `has_cycle`, `is_empty`, `Debug`
//! and dropping the list are guaranteed to terminate.
//!
//! ## Example Usage
//!
//! ```rust
//! use algos_list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.add_last(1);
//! list.add_last(2);
//! list.add_last(3);
//!
//! assert_eq!(list.length(), 3);
//! assert_eq!(list.find_middle_value(), Some(2));
//! assert_eq!(list.find_nth_from_end(0), Some(3));
//!
//! list.reverse();
//! assert_eq!(list.to_string(), "3, 2, 1");
//!
//! assert!(!list.has_cycle());
//! list.create_cycle();
//! assert!(list.has_cycle());
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};

use crate::error::{ListError, Result};

type Link<T> = Option<Rc<RefCell<Node<T>>>>;

/// A single storage cell: one value and the link to its successor.
struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { value, next: None }
    }
}

fn value_of<T: Clone>(node: &Rc<RefCell<Node<T>>>) -> T {
    node.borrow().value.clone()
}

/// Walks the chain from a starting link, yielding shared handles to each node.
struct Nodes<T> {
    next: Link<T>,
}

impl<T> Iterator for Nodes<T> {
    type Item = Rc<RefCell<Node<T>>>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.borrow().next.clone();
        Some(node)
    }
}

/// A singly linked list that owns its nodes through a private head link.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        SinglyLinkedList { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn nodes(&self) -> Nodes<T> {
        Nodes {
            next: self.head.clone(),
        }
    }

    fn tail(&self) -> Link<T> {
        self.nodes().last()
    }

    /// Inserts `value` as the new head of the list.
    ///
    /// # Complexity
    /// * Time: O(1)
    /// * Space: O(1)
    pub fn add_first(&mut self, value: T) {
        let node = Node {
            value,
            next: self.head.take(),
        };
        self.head = Some(Rc::new(RefCell::new(node)));
        trace!("add_first: linked new head node");
    }

    /// Appends `value` after the current last node. On an empty list the new
    /// node becomes the head.
    ///
    /// # Complexity
    /// * Time: O(n), the tail has to be found first
    /// * Space: O(1)
    pub fn add_last(&mut self, value: T) {
        let node = Rc::new(RefCell::new(Node::new(value)));
        match self.tail() {
            Some(tail) => tail.borrow_mut().next = Some(node),
            None => self.head = Some(node),
        }
        trace!("add_last: linked new tail node");
    }

    /// Counts the nodes reachable from the head.
    ///
    /// # Complexity
    /// * Time: O(n)
    /// * Space: O(1)
    pub fn length(&self) -> usize {
        self.nodes().count()
    }

    /// Inverts every link in place so the former tail becomes the head.
    ///
    /// Nodes are relinked one at a time rather than having their values
    /// swapped, so every node keeps its identity.
    ///
    /// # Complexity
    /// * Time: O(n)
    /// * Space: O(1)
    pub fn reverse(&mut self) {
        let mut previous: Link<T> = None;
        let mut current = self.head.take();
        let mut relinked = 0usize;

        while let Some(node) = current {
            current = std::mem::replace(&mut node.borrow_mut().next, previous);
            previous = Some(node);
            relinked += 1;
        }

        self.head = previous;
        trace!("reverse: relinked {} nodes", relinked);
    }

    /// Reports whether following `next` links from the head ever revisits a
    /// node.
    ///
    /// Visited nodes are tracked by address, so two distinct nodes holding
    /// equal values are never conflated.
    ///
    /// # Complexity
    /// * Time: O(n)
    /// * Space: O(n)
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<*const RefCell<Node<T>>> = HashSet::new();
        for node in self.nodes() {
            if !visited.insert(Rc::as_ptr(&node)) {
                debug!("has_cycle: node revisited after {} steps", visited.len());
                return true;
            }
        }
        false
    }

    /// Links the current tail back to the head, manufacturing a cycle.
    ///
    /// Intended for exercising [`has_cycle`](Self::has_cycle). Does nothing on
    /// an empty list. Must only be called on an acyclic list, since finding the
    /// tail of a cyclic one never finishes.
    pub fn create_cycle(&mut self) {
        let Some(head) = self.head.clone() else {
            return;
        };
        if let Some(tail) = self.tail() {
            tail.borrow_mut().next = Some(head);
            debug!("create_cycle: tail now links back to head");
        }
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Returns the value held by the head node.
    pub fn get_first(&self) -> Option<T> {
        self.head.as_ref().map(value_of)
    }

    /// Returns the value held by the last node.
    pub fn get_last(&self) -> Option<T> {
        self.tail().as_ref().map(value_of)
    }

    /// Returns the value at the zero-based `index`.
    ///
    /// # Arguments
    /// * `index` - Position counted from the head
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The value stored at `index`
    /// * `Ok(None)` - The list holds `index` nodes or fewer
    /// * `Err(ListError::InvalidArgument)` - If `index` is negative
    ///
    /// # Complexity
    /// * Time: O(n)
    /// * Space: O(1)
    pub fn get_at_index(&self, index: isize) -> Result<Option<T>> {
        let index = usize::try_from(index).map_err(|_| {
            warn!("get_at_index: rejected negative index {}", index);
            ListError::invalid_argument(format!(
                "index must be non-negative for a singly linked list, got {index}"
            ))
        })?;
        Ok(self.nodes().nth(index).as_ref().map(value_of))
    }

    /// Returns the value at position `floor(length / 2)`.
    ///
    /// For an even length this is the second of the two middle values.
    /// An empty list has no middle and yields `None`.
    pub fn find_middle_value(&self) -> Option<T> {
        let middle = self.length() / 2;
        self.nodes().nth(middle).as_ref().map(value_of)
    }

    /// Returns the value `n` places before the tail, so `n == 0` is the last
    /// value. Yields `None` when `n` reaches past the head.
    pub fn find_nth_from_end(&self, n: usize) -> Option<T> {
        let length = self.length();
        if n >= length {
            return None;
        }
        self.nodes().nth(length - 1 - n).as_ref().map(value_of)
    }

    /// Collects the values from head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.nodes().map(|node| value_of(&node)).collect()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Reports whether any node holds a value equal to `value`.
    pub fn search(&self, value: &T) -> bool {
        self.nodes().any(|node| node.borrow().value == *value)
    }

    /// Removes the first node, in head-to-tail order, whose value equals
    /// `value`. Later duplicates stay in place. The removed node's own link is
    /// cleared before it is released.
    ///
    /// # Complexity
    /// * Time: O(n)
    /// * Space: O(1)
    pub fn delete(&mut self, value: &T) {
        let Some(head) = self.head.clone() else {
            return;
        };

        if head.borrow().value == *value {
            self.head = head.borrow_mut().next.take();
            trace!("delete: removed head node");
            return;
        }

        let mut previous = head;
        loop {
            let next = previous.borrow().next.clone();
            let Some(current) = next else {
                trace!("delete: no matching node");
                return;
            };
            if current.borrow().value == *value {
                let successor = current.borrow_mut().next.take();
                previous.borrow_mut().next = successor;
                trace!("delete: unlinked matching node");
                return;
            }
            previous = current;
        }
    }
}

impl<T: PartialOrd + Clone> SinglyLinkedList<T> {
    /// Returns the largest value by `T`'s ordering. When several values tie,
    /// the one closest to the head wins.
    pub fn find_max(&self) -> Option<T> {
        let mut max: Option<T> = None;
        for node in self.nodes() {
            let node = node.borrow();
            let is_larger = match &max {
                None => true,
                Some(current) => node.value > *current,
            };
            if is_larger {
                max = Some(node.value.clone());
            }
        }
        max
    }
}

impl<T: fmt::Display> SinglyLinkedList<T> {
    /// Prints every value from head to tail on one line, separated by `", "`.
    pub fn visit(&self) {
        println!("{self}");
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively: recursive Rc drops can overflow the stack on long
        // lists, and taking every link also releases a manufactured cycle.
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.borrow_mut().next.take();
        }
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, node) in self.nodes().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node.borrow().value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut visited = HashSet::new();
        let mut entries = f.debug_list();
        for node in self.nodes() {
            if !visited.insert(Rc::as_ptr(&node)) {
                break;
            }
            entries.entry(&node.borrow().value);
        }
        entries.finish()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for value in iter {
            let node = Rc::new(RefCell::new(Node::new(value)));
            match &tail {
                Some(last) => last.borrow_mut().next = Some(Rc::clone(&node)),
                None => self.head = Some(Rc::clone(&node)),
            };
            tail = Some(node);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}
