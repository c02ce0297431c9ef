use nalgebra::Vector3;

use crate::components::Direction;

/// Generation checked key of a flight dynamics model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FdmId {
    index: u32,
    generation: u32,
}

impl FdmId {
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

/// State the flight dynamics library keeps per model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FdmModel {
    /// World position [m]
    pub position: Vector3<f64>,
    pub direction: Direction,
    /// World velocity [m/s]
    pub velocity: Vector3<f64>,
    pub landed_state: bool,
    pub stopped: bool,
}

/// Store of flight dynamics models
#[derive(Debug, Default)]
pub struct FdmRealm {
    slots: Vec<Option<FdmModel>>,
    generations: Vec<u32>,
}

impl FdmRealm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, model: FdmModel) -> FdmId {
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
        FdmId {
            index: index as u32,
            generation: self.generations[index],
        }
    }

    pub fn remove(&mut self, id: FdmId) -> Option<FdmModel> {
        if self.generations.get(id.index()) != Some(&id.generation) {
            return None;
        }
        let model = self.slots.get_mut(id.index())?.take()?;
        self.generations[id.index()] = id.generation.wrapping_add(1);
        Some(model)
    }

    pub fn contains(&self, id: FdmId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: FdmId) -> Option<&FdmModel> {
        if self.generations.get(id.index()) != Some(&id.generation) {
            return None;
        }
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: FdmId) -> Option<&mut FdmModel> {
        if self.generations.get(id.index()) != Some(&id.generation) {
            return None;
        }
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
