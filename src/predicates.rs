//! Ready-made `(node, index)` predicates for [`LinkedList`](crate::LinkedList)
//! lookups.

use crate::linked_lists::Node;

pub fn at_index<T>(index: usize) -> impl Fn(&Node<T>, usize) -> bool {
    move |_: &Node<T>, current: usize| current == index
}

/// The default insertion anchor: the node at `length - 1`.
///
/// `length` is captured when the predicate is built. A length of zero
/// matches nothing.
pub fn at_last_index<T>(length: usize) -> impl Fn(&Node<T>, usize) -> bool {
    let last = length.checked_sub(1);

    move |_: &Node<T>, current: usize| Some(current) == last
}

pub fn value_eq<T: PartialEq>(value: &T) -> impl Fn(&Node<T>, usize) -> bool + '_ {
    move |node: &Node<T>, _: usize| node.value() == value
}
