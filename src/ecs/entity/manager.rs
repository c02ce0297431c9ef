use std::collections::BTreeSet;

use super::id::ObjectId;
use crate::components::Object;

struct Slot {
    generation: u32,
    object: Option<Object>,
}

/// Arena of scene objects with a free list.
///
/// Freed slots are reused lowest index first before the arena grows.
pub struct ObjectStore {
    slots: Vec<Slot>,
    free_indices: BTreeSet<u32>,
    len: usize,
}

impl Default for ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_indices: BTreeSet::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, object: Object) -> ObjectId {
        self.len += 1;
        if let Some(index) = self.free_indices.pop_first() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.object.is_none());
            slot.object = Some(object);
            ObjectId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                object: Some(object),
            });
            ObjectId::new(index, 0)
        }
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<Object> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        let object = slot.object.take()?;

        slot.generation = slot.generation.wrapping_add(1);
        self.free_indices.insert(id.index);
        self.len -= 1;
        Some(object)
    }

    #[inline]
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.object.as_ref())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.object.as_mut())
    }

    /// Borrow two distinct live objects at once, in argument order
    pub fn get_pair_mut(&mut self, a: ObjectId, b: ObjectId) -> Option<(&mut Object, &mut Object)> {
        if a.index == b.index || !self.is_alive(a) || !self.is_alive(b) {
            return None;
        }

        let (low, high) = (a.index().min(b.index()), a.index().max(b.index()));
        let (head, tail) = self.slots.split_at_mut(high);
        let low_object = head[low].object.as_mut()?;
        let high_object = tail[0].object.as_mut()?;

        if a.index() < b.index() {
            Some((low_object, high_object))
        } else {
            Some((high_object, low_object))
        }
    }

    /// Handle of the live object occupying slot `index`, if any
    pub fn id_at(&self, index: usize) -> Option<ObjectId> {
        let slot = self.slots.get(index)?;
        slot.object
            .as_ref()
            .map(|_| ObjectId::new(index as u32, slot.generation))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Number of slots, live or free
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Snapshot of live handles, for loops that delete or spawn objects
    pub fn ids(&self) -> Vec<ObjectId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.object
                .as_ref()
                .map(|object| (ObjectId::new(index as u32, slot.generation), object))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectId, &mut Object)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.object
                .as_mut()
                .map(|object| (ObjectId::new(index as u32, generation), object))
        })
    }
}
