use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite latitude within ±90 and longitude within ±180.
    pub fn checked(lat: f64, lng: f64) -> Option<Self> {
        let coords = Self { lat, lng };
        coords.is_valid().then_some(coords)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coords: Coordinates) -> Self {
        [coords.lat, coords.lng]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "running" | "run" => Some(WorkoutKind::Running),
            "cycling" | "ride" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

/// Variant payload. Derived values are stored next to the metric they were
/// computed from and are never recomputed after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutMetrics {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_kmh: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    label: String,
    #[serde(flatten)]
    metrics: WorkoutMetrics,
}

impl Workout {
    pub fn running(coords: Coordinates, distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self::running_at(Utc::now(), coords, distance_km, duration_min, cadence_spm)
    }

    pub fn running_at(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        let metrics = WorkoutMetrics::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Self::build(created_at, coords, distance_km, duration_min, metrics)
    }

    pub fn cycling(coords: Coordinates, distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        Self::cycling_at(Utc::now(), coords, distance_km, duration_min, elevation_gain_m)
    }

    pub fn cycling_at(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let metrics = WorkoutMetrics::Cycling {
            elevation_gain_m,
            speed_kmh: distance_km / (duration_min / 60.0),
        };
        Self::build(created_at, coords, distance_km, duration_min, metrics)
    }

    fn build(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        metrics: WorkoutMetrics,
    ) -> Self {
        let kind = match metrics {
            WorkoutMetrics::Running { .. } => WorkoutKind::Running,
            WorkoutMetrics::Cycling { .. } => WorkoutKind::Cycling,
        };

        Self {
            id: Uuid::new_v4().to_string(),
            created_at,
            coords,
            distance_km,
            duration_min,
            label: describe(kind, created_at),
            metrics,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn metrics(&self) -> &WorkoutMetrics {
        &self.metrics
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.metrics {
            WorkoutMetrics::Running { .. } => WorkoutKind::Running,
            WorkoutMetrics::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.metrics {
            WorkoutMetrics::Running { pace_min_per_km, .. } => Some(pace_min_per_km),
            WorkoutMetrics::Cycling { .. } => None,
        }
    }

    /// JSON has no encoding for NaN or infinities, so only finite workouts
    /// can be persisted.
    pub fn is_finite(&self) -> bool {
        let metrics = match self.metrics {
            WorkoutMetrics::Running {
                cadence_spm,
                pace_min_per_km,
            } => [cadence_spm, pace_min_per_km],
            WorkoutMetrics::Cycling {
                elevation_gain_m,
                speed_kmh,
            } => [elevation_gain_m, speed_kmh],
        };
        self.coords.lat.is_finite()
            && self.coords.lng.is_finite()
            && self.distance_km.is_finite()
            && self.duration_min.is_finite()
            && metrics.iter().all(|v| v.is_finite())
    }

    pub fn speed_kmh(&self) -> Option<f64> {
        match self.metrics {
            WorkoutMetrics::Cycling { speed_kmh, .. } => Some(speed_kmh),
            WorkoutMetrics::Running { .. } => None,
        }
    }
}

// "Running April 3"
fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} {}", kind.display_name(), created_at.format("%B %-d"))
}
