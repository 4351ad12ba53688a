use crate::types::workout::{Coordinates, Workout};
use crate::view::popup_content;

pub type ClickHandler = Box<dyn FnMut(Coordinates)>;

#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: &'static str,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: "mark-popup",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub options: PopupOptions,
    pub content: String,
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration_secs: f64,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            animate: true,
            duration_secs: 1.0,
        }
    }
}

/// Map widget collaborator (tiles, animation and attribution live behind it).
pub trait MapWidget {
    fn create_view(&mut self, center: Coordinates, zoom: f64);
    fn set_view(&mut self, center: Coordinates, zoom: f64, pan: PanOptions);
    fn add_marker(&mut self, at: Coordinates, popup: Popup);
    fn on_click(&mut self, handler: ClickHandler);
    fn remove(&mut self);
}

pub struct MapController<M> {
    widget: M,
    ready: bool,
}

impl<M: MapWidget> MapController<M> {
    pub fn new(widget: M) -> Self {
        Self {
            widget,
            ready: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn initialize(&mut self, center: Coordinates, zoom: f64) {
        self.widget.create_view(center, zoom);
        self.ready = true;
        tracing::info!("Map centered on {:.4}, {:.4} at zoom {}", center.lat, center.lng, zoom);
    }

    pub fn on_user_click(&mut self, handler: impl FnMut(Coordinates) + 'static) {
        self.widget.on_click(Box::new(handler));
    }

    pub fn place_marker(&mut self, workout: &Workout) {
        let popup = Popup {
            options: PopupOptions::default(),
            content: popup_content(workout),
            open: true,
        };
        self.widget.add_marker(workout.coords(), popup);
    }

    pub fn center_on(&mut self, center: Coordinates, zoom: f64) {
        self.widget.set_view(center, zoom, PanOptions::default());
    }

    pub fn teardown(&mut self) {
        if self.ready {
            self.widget.remove();
            self.ready = false;
        }
    }

    pub fn widget(&self) -> &M {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut M {
        &mut self.widget
    }
}
