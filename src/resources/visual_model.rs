use bevy::log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

/// A renderable model that several objects or parts may share.
///
/// The renderer owns the GPU side; this record only tracks identity, load state
/// and how many holders are left.
#[derive(Debug, Clone, Default)]
pub struct VisualModel {
    pub load_state: LoadState,
    pub filename: Option<String>,
    pub name: Option<String>,
    /// Memory size [bytes]
    pub mem_size: u64,
    pub statements: u32,
    pub primitives: u32,
    ref_count: usize,
}

impl VisualModel {
    #[inline]
    pub fn ref_count(&self) -> usize {
        self.ref_count
    }

    fn matches(&self, filename: &str, name: &str) -> bool {
        self.filename.as_deref() == Some(filename) && self.name.as_deref() == Some(name)
    }
}

/// Copyable key of a registry slot, used to inspect a model without holding a
/// counted reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualModelId {
    index: u32,
    generation: u32,
}

impl VisualModelId {
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }
}

/// One counted reference to a registry model.
///
/// Not `Clone`: obtain another reference with [`VisualModelRegistry::share`] and
/// give each back with [`VisualModelRegistry::release`].
#[must_use = "dropping a handle leaks its reference count"]
#[derive(Debug, PartialEq, Eq)]
pub struct VisualModelHandle {
    id: VisualModelId,
}

impl VisualModelHandle {
    #[inline]
    pub fn id(&self) -> VisualModelId {
        self.id
    }
}

#[derive(Debug, Default)]
pub struct VisualModelRegistry {
    slots: Vec<Option<VisualModel>>,
    generations: Vec<u32>,
}

impl VisualModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a counted reference to the model identified by `filename` and `name`.
    ///
    /// Only a complete pair is matched against existing models, otherwise a
    /// fresh model is always created.
    pub fn acquire(&mut self, filename: Option<&str>, name: Option<&str>) -> VisualModelHandle {
        if let (Some(filename), Some(name)) = (filename, name) {
            let existing = self
                .slots
                .iter()
                .position(|slot| slot.as_ref().is_some_and(|m| m.matches(filename, name)));

            if let Some(index) = existing {
                if let Some(model) = self.slots[index].as_mut() {
                    model.ref_count += 1;
                }
                return VisualModelHandle {
                    id: self.id_for(index),
                };
            }
        }

        let model = VisualModel {
            filename: filename.map(str::to_owned),
            name: name.map(str::to_owned),
            ref_count: 1,
            ..Default::default()
        };

        let index = match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(model);
                index
            }
            None => {
                self.slots.push(Some(model));
                self.generations.push(0);
                self.slots.len() - 1
            }
        };

        debug!("Created visual model {:?} ({:?})", name, filename);
        VisualModelHandle {
            id: self.id_for(index),
        }
    }

    /// Add a reference to an already held model
    pub fn share(&mut self, handle: &VisualModelHandle) -> VisualModelHandle {
        match self.get_mut(handle.id) {
            Some(model) => model.ref_count += 1,
            None => warn!("Sharing stale visual model handle {:?}", handle.id),
        }
        VisualModelHandle { id: handle.id }
    }

    /// Give back one reference, destroying the model when none are left
    pub fn release(&mut self, handle: VisualModelHandle) {
        let id = handle.id;
        let Some(model) = self.get_mut(id) else {
            warn!("Releasing stale visual model handle {:?}", id);
            return;
        };

        if model.ref_count < 1 {
            warn!(
                "Visual model {:?} released with reference count {}",
                model.name, model.ref_count
            );
        }
        model.ref_count = model.ref_count.saturating_sub(1);

        if model.ref_count == 0 {
            debug!("Destroying visual model {:?}", model.name);
            self.slots[id.index()] = None;
            self.generations[id.index()] = self.generations[id.index()].wrapping_add(1);
        }
    }

    /// Release an optional handle slot, leaving it empty
    pub fn release_slot(&mut self, slot: &mut Option<VisualModelHandle>) {
        if let Some(handle) = slot.take() {
            self.release(handle);
        }
    }

    /// Reference count of a live model, `None` once it has been destroyed
    pub fn ref_count(&self, id: VisualModelId) -> Option<usize> {
        self.get(id).map(VisualModel::ref_count)
    }

    #[inline]
    pub fn contains(&self, id: VisualModelId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: VisualModelId) -> Option<&VisualModel> {
        if self.generations.get(id.index()) != Some(&id.generation) {
            return None;
        }
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: VisualModelId) -> Option<&mut VisualModel> {
        if self.generations.get(id.index()) != Some(&id.generation) {
            return None;
        }
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Number of live models
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (VisualModelId, &VisualModel)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref().map(|model| (self.id_for(index), model))
        })
    }

    /// Destroy every model regardless of outstanding references
    pub fn clear(&mut self) {
        for (slot, generation) in self.slots.iter_mut().zip(self.generations.iter_mut()) {
            if slot.take().is_some() {
                *generation = generation.wrapping_add(1);
            }
        }
    }

    fn id_for(&self, index: usize) -> VisualModelId {
        VisualModelId {
            index: index as u32,
            generation: self.generations[index],
        }
    }
}

/// Holders of visual model handles give them all back on teardown
pub trait VisualModelOwner {
    fn release_visual_models(&mut self, registry: &mut VisualModelRegistry);
}
