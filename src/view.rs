use crate::error::Warning;
use crate::form::FormInput;
use crate::types::workout::{Workout, WorkoutKind, WorkoutMetrics};

/// Input form collaborator. The controller reads it at submit time.
pub trait FormSurface {
    fn read(&self) -> FormInput;
    /// Reveals the form and focuses the distance field.
    fn show(&mut self);
    fn clear_and_hide(&mut self);
    /// Shows the cadence row for runs or the elevation row for rides.
    fn show_metric_field(&mut self, kind: WorkoutKind);
}

pub trait WorkoutList {
    fn render_entry(&mut self, entry: &ListEntry);
    fn clear(&mut self);
}

pub trait Notifier {
    fn warn(&mut self, warning: &Warning);
}

/// Everything the controller needs from the page besides the map.
pub trait View: FormSurface + WorkoutList + Notifier {}

impl<T: FormSurface + WorkoutList + Notifier> View for T {}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: String,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<Detail>,
}

impl ListEntry {
    /// Built from stored fields only, so restored workouts render the same
    /// values they were saved with.
    pub fn from_workout(workout: &Workout) -> Self {
        let kind = workout.kind();
        let mut details = vec![
            detail(kind.icon(), workout.distance_km().to_string(), "km"),
            detail("⏱", workout.duration_min().to_string(), "min"),
        ];

        match *workout.metrics() {
            WorkoutMetrics::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                details.push(detail("⚡️", format!("{:.1}", pace_min_per_km), "min/km"));
                details.push(detail("🦶🏻", cadence_spm.to_string(), "spm"));
            }
            WorkoutMetrics::Cycling {
                elevation_gain_m,
                speed_kmh,
            } => {
                details.push(detail("⚡️", format!("{:.1}", speed_kmh), "km/h"));
                details.push(detail("🗻", elevation_gain_m.to_string(), "m"));
            }
        }

        Self {
            id: workout.id().to_string(),
            kind,
            title: workout.label().to_string(),
            details,
        }
    }
}

fn detail(icon: &'static str, value: String, unit: &'static str) -> Detail {
    Detail { icon, value, unit }
}

pub fn popup_content(workout: &Workout) -> String {
    format!("{} {}", workout.kind().icon(), workout.label())
}
