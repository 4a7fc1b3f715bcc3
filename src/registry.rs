//! The owned plant collection and the operations the shell and CLI drive.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{filter_due, Plant};
use crate::store::{PlantStore, StoreError};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("No plant number {number} (collection has {count})")]
    NoSuchPlant { number: usize, count: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// An ordered plant collection paired with the file it persists to.
///
/// Insertion order is display order and file order. Every mutation is
/// written back immediately.
#[derive(Debug)]
pub struct PlantRegistry {
    store: PlantStore,
    plants: Vec<Plant>,
    load_warning: Option<StoreError>,
}

impl PlantRegistry {
    pub fn new(store: PlantStore, plants: Vec<Plant>) -> Self {
        Self {
            store,
            plants,
            load_warning: None,
        }
    }

    /// Load the collection, starting empty if the file can't be read.
    pub fn open(store: PlantStore, today: NaiveDate) -> Self {
        let (plants, load_warning) = store.load_or_empty(today);
        Self {
            store,
            plants,
            load_warning,
        }
    }

    /// Why the collection started empty, if loading failed.
    pub fn load_warning(&self) -> Option<&StoreError> {
        self.load_warning.as_ref()
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Append `plant` and save. On a failed save the collection is unchanged.
    pub fn add(&mut self, plant: Plant) -> Result<(), RegistryError> {
        tracing::info!("Adding {} '{}'", plant.category, plant.name);
        self.plants.push(plant);
        if let Err(e) = self.save() {
            self.plants.pop();
            return Err(e);
        }
        Ok(())
    }

    pub fn due(&self, today: NaiveDate) -> Vec<&Plant> {
        filter_due(&self.plants, today)
    }

    /// Mark the plant at 1-based position `number` as watered and save.
    ///
    /// On a failed save the plant keeps its previous date.
    pub fn mark_watered(
        &mut self,
        number: usize,
        today: NaiveDate,
    ) -> Result<&Plant, RegistryError> {
        let count = self.plants.len();
        let index = number
            .checked_sub(1)
            .filter(|&i| i < count)
            .ok_or(RegistryError::NoSuchPlant { number, count })?;

        let previous = self.plants[index].last_watered;
        self.plants[index].mark_watered(today);
        if let Err(e) = self.save() {
            self.plants[index].last_watered = previous;
            return Err(e);
        }

        tracing::info!("Marked '{}' watered on {}", self.plants[index].name, today);
        Ok(&self.plants[index])
    }

    pub fn save(&self) -> Result<(), RegistryError> {
        self.store.save(&self.plants)?;
        Ok(())
    }
}
