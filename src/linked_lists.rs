use alloc::boxed::Box;
use core::fmt;

use log::{debug, trace, warn};

use crate::{errors::ListError, predicates};

pub mod iter;

use iter::{Iter, IterMut, Nodes};

/// A singly linked list that owns its nodes through a chain of `next` slots.
///
/// Lookup, insertion and removal are driven by predicates over
/// `(node, index)`, evaluated from the head. No length is cached.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Counts the nodes reachable from the head. Walks the whole chain.
    pub fn length(&self) -> usize {
        self.nodes().count()
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self.head.as_deref())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.nodes())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut())
    }

    /// Returns the first node where `is_match(node, index)` is true.
    pub fn find<F>(&self, mut is_match: F) -> Option<&Node<T>>
    where
        F: FnMut(&Node<T>, usize) -> bool,
    {
        self.nodes()
            .enumerate()
            .find_map(|(index, node)| is_match(node, index).then_some(node))
    }

    /// Like [`find`](Self::find), but hands out the node mutably.
    pub fn find_mut<F>(&mut self, mut is_match: F) -> Option<&mut Node<T>>
    where
        F: FnMut(&Node<T>, usize) -> bool,
    {
        let mut index = 0;
        let mut node = self.head.as_deref_mut();

        while let Some(current) = node {
            if is_match(current, index) {
                return Some(current);
            }
            index += 1;
            node = current.next.as_deref_mut();
        }

        None
    }

    /// Returns the first matching node together with the node before it.
    ///
    /// The previous node is `None` when the match is the head. Both are
    /// `None` when nothing matches.
    pub fn find_with_previous<F>(
        &self,
        mut is_match: F,
    ) -> (Option<&Node<T>>, Option<&Node<T>>)
    where
        F: FnMut(&Node<T>, usize) -> bool,
    {
        let mut previous = None;

        for (index, node) in self.nodes().enumerate() {
            if is_match(node, index) {
                return (Some(node), previous);
            }
            previous = Some(node);
        }

        (None, None)
    }

    /// Appends `value` after the current last node.
    ///
    /// The length is read once, before anything is linked, and the anchor is
    /// the node at `length - 1`. An empty list takes the value as its head.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NoMatch`] if no anchor is found, which cannot
    /// happen for a non-empty list.
    pub fn insert(&mut self, value: T) -> Result<&mut Self, ListError> {
        let is_last = predicates::at_last_index::<T>(self.length());

        self.insert_after(value, is_last)
    }

    /// Inserts `value` immediately after the first node matching `is_match`.
    ///
    /// On an empty list the predicate is never called and `value` becomes
    /// the head.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NoMatch`] if the list is not empty and no node
    /// matches. The list is left untouched.
    pub fn insert_after<F>(&mut self, value: T, is_match: F) -> Result<&mut Self, ListError>
    where
        F: FnMut(&Node<T>, usize) -> bool,
    {
        if self.is_empty() {
            return Ok(self.insert_at_head(value));
        }

        let Some(anchor) = self.find_mut(is_match) else {
            warn!("insert: no node matched the anchor predicate");
            return Err(ListError::NoMatch);
        };

        let next = anchor.next.take();
        anchor.next = Some(Box::new(Node::new(value, next)));
        trace!("insert: linked a node after the anchor");

        Ok(self)
    }

    pub fn insert_at_head(&mut self, value: T) -> &mut Self {
        let node = Node::new(value, self.head.take());

        self.head = Some(Box::new(node));
        trace!("insert: new head");

        self
    }

    /// Infallible tail append.
    pub fn append(&mut self, value: T) -> &mut Self {
        *self.tail_slot() = Some(Box::new(Node::new(value, None)));

        self
    }

    /// Unlinks the first node matching `is_match` and returns its value.
    ///
    /// Returns `None` and leaves the list as it was when nothing matches.
    pub fn remove<F>(&mut self, mut is_match: F) -> Option<T>
    where
        F: FnMut(&Node<T>, usize) -> bool,
    {
        let mut index = 0;
        let mut slot = &mut self.head;

        loop {
            match slot.as_deref() {
                Some(node) if is_match(node, index) => break,
                Some(_) => {}
                None => {
                    debug!("remove: no node matched after {index} nodes");
                    return None;
                }
            }
            slot = &mut slot.as_mut()?.next;
            index += 1;
        }

        // `slot` is the head or the previous node's `next`
        let removed = slot.take()?;
        let Node { value, next } = *removed;
        *slot = next;
        trace!("remove: unlinked node at index {index}");

        Some(value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let old_head = self.head.take()?;
        let Node { value, next } = *old_head;

        self.head = next;

        Some(value)
    }

    pub fn get_head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn get_head_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.find(predicates::at_index::<T>(index)).map(Node::value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.find_mut(predicates::at_index::<T>(index)).map(Node::value_mut)
    }

    /// Releases every node, front to back.
    pub fn clear(&mut self) {
        let mut node = self.head.take();

        while let Some(mut current) = node {
            node = current.next.take();
        }
    }

    /// The empty slot after the last node, or the head slot of an empty list.
    fn tail_slot(&mut self) -> &mut Option<Box<Node<T>>> {
        let mut slot = &mut self.head;

        while let Some(node) = slot {
            slot = &mut node.next;
        }

        slot
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.find(predicates::value_eq(value)).is_some()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlinks iteratively; dropping the head box would recurse once per node.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// One element of a [`LinkedList`]: a value and the slot owning the rest of
/// the chain.
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    const fn new(value: T, next: Option<Box<Self>>) -> Self {
        Self { value, next }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
