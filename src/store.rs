use std::collections::HashSet;

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use crate::types::workout::Workout;

pub const WORKOUTS_KEY: &str = "workouts";

/// Ordered workouts. Insertion order is display order and marker order.
#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Leaves the stored slot untouched when any workout holds NaN or an
    /// infinity, since JSON would write those as `null`.
    pub fn save_to(&self, storage: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        if let Some(bad) = self.workouts.iter().find(|workout| !workout.is_finite()) {
            return Err(StorageError::NonFinite(bad.id().to_string()));
        }
        let encoded = serde_json::to_string(&self.workouts)?;
        storage.set(WORKOUTS_KEY, &encoded)?;
        tracing::debug!("Saved {} workouts", self.workouts.len());
        Ok(())
    }

    /// Restores the persisted list. Missing or unreadable state yields an
    /// empty store; persisted derived fields are taken as-is.
    pub fn load_from(storage: &dyn KeyValueStore) -> Self {
        let raw = match storage.get(WORKOUTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(err) => {
                tracing::warn!("Could not read stored workouts: {}", err);
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<Workout>>(&raw) {
            Ok(workouts) if has_duplicate_ids(&workouts) => {
                tracing::warn!("Discarding workout history with duplicate ids");
                Self::new()
            }
            Ok(workouts) => {
                tracing::info!("Restored {} workouts", workouts.len());
                Self { workouts }
            }
            Err(err) => {
                tracing::warn!("Discarding unreadable workout history: {}", err);
                Self::new()
            }
        }
    }

    pub fn reset(&mut self, storage: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        self.workouts.clear();
        storage.remove(WORKOUTS_KEY)
    }
}

fn has_duplicate_ids(workouts: &[Workout]) -> bool {
    let mut seen = HashSet::with_capacity(workouts.len());
    !workouts.iter().all(|workout| seen.insert(workout.id()))
}
