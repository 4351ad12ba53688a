#![allow(dead_code)]

use mapty_rs::error::{StorageError, Warning};
use mapty_rs::form::FormInput;
use mapty_rs::map::{ClickHandler, MapWidget, PanOptions, Popup};
use mapty_rs::storage::KeyValueStore;
use mapty_rs::types::workout::{Coordinates, WorkoutKind};
use mapty_rs::view::{FormSurface, ListEntry, Notifier, WorkoutList};

#[derive(Default)]
pub struct RecordingMap {
    pub views: Vec<(Coordinates, f64)>,
    pub pans: Vec<(Coordinates, f64, PanOptions)>,
    pub markers: Vec<(Coordinates, Popup)>,
    pub removed: usize,
    on_click: Option<ClickHandler>,
}

impl RecordingMap {
    pub fn click(&mut self, at: Coordinates) {
        let handler = self.on_click.as_mut().expect("click handler registered");
        handler(at);
    }

    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }
}

impl MapWidget for RecordingMap {
    fn create_view(&mut self, center: Coordinates, zoom: f64) {
        self.views.push((center, zoom));
    }

    fn set_view(&mut self, center: Coordinates, zoom: f64, pan: PanOptions) {
        self.pans.push((center, zoom, pan));
    }

    fn add_marker(&mut self, at: Coordinates, popup: Popup) {
        self.markers.push((at, popup));
    }

    fn on_click(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    fn remove(&mut self) {
        self.removed += 1;
        self.on_click = None;
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub form: FormInput,
    pub form_visible: bool,
    pub metric_field: Option<WorkoutKind>,
    pub entries: Vec<ListEntry>,
    pub warnings: Vec<String>,
}

impl RecordingView {
    pub fn fill(&mut self, kind: WorkoutKind, distance: &str, duration: &str, metric: &str) {
        self.form = FormInput {
            kind,
            distance: distance.to_string(),
            duration: duration.to_string(),
            ..FormInput::default()
        };
        match kind {
            WorkoutKind::Running => self.form.cadence = metric.to_string(),
            WorkoutKind::Cycling => self.form.elevation = metric.to_string(),
        }
    }
}

impl FormSurface for RecordingView {
    fn read(&self) -> FormInput {
        self.form.clone()
    }

    fn show(&mut self) {
        self.form_visible = true;
    }

    fn clear_and_hide(&mut self) {
        self.form = FormInput::default();
        self.form_visible = false;
    }

    fn show_metric_field(&mut self, kind: WorkoutKind) {
        self.metric_field = Some(kind);
    }
}

impl WorkoutList for RecordingView {
    fn render_entry(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Notifier for RecordingView {
    fn warn(&mut self, warning: &Warning) {
        self.warnings.push(warning.to_string());
    }
}

/// Reads as empty; every write or delete fails like a full or read-only disk.
#[derive(Default)]
pub struct FailingStorage;

fn disk_full() -> StorageError {
    StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
}

impl KeyValueStore for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(disk_full())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(disk_full())
    }
}
