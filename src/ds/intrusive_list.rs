//! Arena-backed doubly linked list.
//!
//! FIFO and LRU keep their key order here. Each policy stores the [`SlotId`]
//! returned by [`IntrusiveList::push_back`] next to its value, which makes
//! "move this key to the newest end" and "drop this key" O(1) without
//! searching the list.
//!
//! ```text
//!   front (eviction candidate)                         back (newest)
//!     │                                                    │
//!     ▼                                                    ▼
//!   [k2] ◄──────► [k3] ◄──────► [k1]
//!   prev: None                   next: None
//! ```
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Links {
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    links: Links,
}

/// Ordered sequence with stable per-element handles.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    nodes: SlotArena<Node<T>>,
    ends: Links,
}

impl<T> IntrusiveList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotArena::with_capacity(capacity),
            ends: Links::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.nodes.contains(id)
    }

    /// Oldest element.
    pub fn front(&self) -> Option<&T> {
        self.get(self.ends.next?)
    }

    /// Newest element.
    pub fn back(&self) -> Option<&T> {
        self.get(self.ends.prev?)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Iterates from front (oldest) to back (newest).
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            cursor: self.ends.next,
            remaining: self.len(),
        }
    }

    /// Appends `value` as the newest element.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.nodes.insert(Node {
            value,
            links: Links::default(),
        });
        self.link_back(id);
        id
    }

    /// Removes the oldest element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(self.ends.next?)
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.unlink(id)?;
        self.nodes.remove(id).map(|node| node.value)
    }

    /// Makes `id` the newest element. Returns `false` for an unknown id.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if self.ends.prev == Some(id) {
            return true;
        }
        if self.unlink(id).is_none() {
            return false;
        }
        self.link_back(id);
        true
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.ends = Links::default();
    }

    fn links_mut(&mut self, id: SlotId) -> Option<&mut Links> {
        self.nodes.get_mut(id).map(|node| &mut node.links)
    }

    /// Detaches `id` from its neighbours, leaving the node in the arena.
    fn unlink(&mut self, id: SlotId) -> Option<()> {
        let Links { prev, next } = std::mem::take(self.links_mut(id)?);

        match prev.and_then(|p| self.links_mut(p)) {
            Some(links) => links.next = next,
            None => self.ends.next = next,
        }
        match next.and_then(|n| self.links_mut(n)) {
            Some(links) => links.prev = prev,
            None => self.ends.prev = prev,
        }
        Some(())
    }

    /// Attaches a detached node after the current back.
    fn link_back(&mut self, id: SlotId) {
        let old_back = self.ends.prev;
        if let Some(links) = self.links_mut(id) {
            *links = Links {
                prev: old_back,
                next: None,
            };
        }
        match old_back.and_then(|b| self.links_mut(b)) {
            Some(links) => links.next = Some(id),
            None => self.ends.next = Some(id),
        }
        self.ends.prev = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut expected_prev = None;
        let mut cursor = self.ends.next;
        let mut walked = 0usize;

        while let Some(id) = cursor {
            let node = self.nodes.get(id).expect("linked node missing from arena");
            assert_eq!(node.links.prev, expected_prev, "broken back-link");
            walked += 1;
            assert!(walked <= self.len(), "cycle in list");
            expected_prev = Some(id);
            cursor = node.links.next;
        }

        assert_eq!(walked, self.len());
        assert_eq!(self.ends.prev, expected_prev, "back does not end the chain");
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over an [`IntrusiveList`].
pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor?)?;
        self.cursor = node.links.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntrusiveListIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn order<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_and_pop_preserve_insertion_order() {
        let mut list = IntrusiveList::new();
        for key in ["k1", "k2", "k3"] {
            list.push_back(key);
        }
        assert_eq!(list.front(), Some(&"k1"));
        assert_eq!(list.back(), Some(&"k3"));
        assert_eq!(list.iter().len(), 3);

        assert_eq!(list.pop_front(), Some("k1"));
        assert_eq!(list.pop_front(), Some("k2"));
        assert_eq!(list.pop_front(), Some("k3"));
        assert_eq!(list.pop_front(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_back_refreshes_recency() {
        let mut list = IntrusiveList::with_capacity(3);
        let k1 = list.push_back(1);
        let k2 = list.push_back(2);
        let k3 = list.push_back(3);

        assert!(list.move_to_back(k3));
        assert_eq!(order(&list), vec![1, 2, 3]);

        assert!(list.move_to_back(k1));
        assert_eq!(order(&list), vec![2, 3, 1]);

        assert!(list.move_to_back(k3));
        assert_eq!(order(&list), vec![2, 1, 3]);
        assert_eq!(list.get(k2), Some(&2));
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_from_any_position() {
        let mut list = IntrusiveList::new();
        let a = list.push_back('a');
        let b = list.push_back('b');
        let c = list.push_back('c');

        assert_eq!(list.remove(b), Some('b'));
        assert_eq!(order(&list), vec!['a', 'c']);
        list.debug_validate_invariants();

        assert_eq!(list.remove(c), Some('c'));
        assert_eq!(list.back(), Some(&'a'));
        assert_eq!(list.remove(a), Some('a'));
        assert!(list.is_empty());

        assert_eq!(list.remove(a), None);
        assert!(!list.move_to_back(a));
        assert!(!list.contains(a));
        list.debug_validate_invariants();
    }

    #[test]
    fn clear_then_reuse() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        list.push_back(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);

        list.push_back(3);
        assert_eq!(order(&list), vec![3]);
        list.debug_validate_invariants();
    }
}
