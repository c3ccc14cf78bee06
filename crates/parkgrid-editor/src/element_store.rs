//! Insertion-ordered element storage with monotonic id generation.
//!
//! Insertion order doubles as draw order: the last inserted element is
//! visually on top and wins hit-test ties.

use crate::element::LayoutElement;

/// Ordered storage for the elements of one editing session.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<LayoutElement>,
    next_id: u64,
}

impl ElementStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Sets the next id to be generated. Used when re-hydrating a
    /// persisted document so fresh ids never collide with loaded ones.
    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = id;
    }

    /// Appends an element at the top of the draw order.
    pub fn insert(&mut self, element: LayoutElement) {
        self.elements.push(element);
    }

    /// Gets a reference to an element by id.
    pub fn get(&self, id: u64) -> Option<&LayoutElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Gets a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut LayoutElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Removes an element by id, returning it.
    pub fn remove(&mut self, id: u64) -> Option<LayoutElement> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Iterates elements in insertion (draw) order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LayoutElement> {
        self.elements.iter()
    }

    /// Iterates elements mutably in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LayoutElement> {
        self.elements.iter_mut()
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes all elements. The id counter keeps running so ids are never
    /// reused within a session.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
