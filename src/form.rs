use crate::error::ValidationError;
use crate::types::workout::{Coordinates, Workout, WorkoutKind};

/// Raw form values as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

/// Validated values ready to become a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDraft {
    Running {
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    },
    Cycling {
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

impl WorkoutDraft {
    pub fn into_workout(self, coords: Coordinates) -> Workout {
        match self {
            WorkoutDraft::Running {
                distance_km,
                duration_min,
                cadence_spm,
            } => Workout::running(coords, distance_km, duration_min, cadence_spm),
            WorkoutDraft::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => Workout::cycling(coords, distance_km, duration_min, elevation_gain_m),
        }
    }
}

impl FormInput {
    pub fn validate(&self) -> Result<WorkoutDraft, ValidationError> {
        let distance_km = positive(&self.distance).ok_or_else(|| {
            ValidationError::InvalidDistance(self.distance.clone())
        })?;
        let duration_min = positive(&self.duration).ok_or_else(|| {
            ValidationError::InvalidDuration(self.duration.clone())
        })?;

        match self.kind {
            WorkoutKind::Running => {
                let cadence_spm = positive(&self.cadence).ok_or_else(|| {
                    ValidationError::InvalidCadence(self.cadence.clone())
                })?;
                Ok(WorkoutDraft::Running {
                    distance_km,
                    duration_min,
                    cadence_spm,
                })
            }
            WorkoutKind::Cycling => {
                // Descents and flat rides are valid, so only finiteness matters.
                let elevation_gain_m = Some(parse_number(&self.elevation))
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ValidationError::InvalidElevation(self.elevation.clone()))?;
                Ok(WorkoutDraft::Cycling {
                    distance_km,
                    duration_min,
                    elevation_gain_m,
                })
            }
        }
    }
}

/// Numeric coercion of a text field: blank is 0, anything unparsable is NaN.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn positive(raw: &str) -> Option<f64> {
    let value = parse_number(raw);
    (value.is_finite() && value > 0.0).then_some(value)
}
