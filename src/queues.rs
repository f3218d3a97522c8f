use crate::linked_lists::LinkedList;

pub trait Queue<T> {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
}

/// FIFO queue: pushes go to the tail, pops come off the head.
pub struct LinkedQueue<T> {
    internal: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub const fn new() -> Self {
        Self {
            internal: LinkedList::new(),
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.internal.get_head()
    }

    pub const fn is_empty(&self) -> bool {
        self.internal.is_empty()
    }

    pub fn len(&self) -> usize {
        self.internal.length()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn push(&mut self, value: T) {
        self.internal.append(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.internal.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkedQueue, Queue};

    #[test]
    fn first_in_first_out() {
        let mut queue = LinkedQueue::new();
        queue.push('a');
        queue.push('b');
        queue.push('c');

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&'a'));
        assert_eq!(queue.pop(), Some('a'));
        assert_eq!(queue.pop(), Some('b'));
        assert_eq!(queue.pop(), Some('c'));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn interleaved_push_pop() {
        let mut queue = LinkedQueue::default();
        queue.push(1);
        assert_eq!(queue.pop(), Some(1));

        queue.push(2);
        queue.push(3);
        assert_eq!(queue.pop(), Some(2));
        queue.push(4);

        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(4));
    }
}
