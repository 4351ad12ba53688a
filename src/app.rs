use std::future::Future;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::error::{GeolocationError, Warning};
use crate::map::{MapController, MapWidget};
use crate::storage::KeyValueStore;
use crate::store::WorkoutStore;
use crate::types::workout::{Coordinates, WorkoutKind};
use crate::view::{ListEntry, View};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    MapClicked(Coordinates),
    KindChanged(WorkoutKind),
    FormSubmitted,
    EntrySelected(String),
    Reset,
}

/// `Idle` and `FormOpen` are only reachable once the map is ready.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    AwaitingGeolocation,
    Idle,
    FormOpen { pending: Coordinates },
}

pub struct AppController<M, K, V> {
    map: MapController<M>,
    store: WorkoutStore,
    storage: K,
    view: V,
    zoom: f64,
    state: SessionState,
    events: UnboundedSender<AppEvent>,
}

impl<M, K, V> AppController<M, K, V>
where
    M: MapWidget,
    K: KeyValueStore,
    V: View,
{
    /// Restores persisted workouts and renders them into the list. The map
    /// stays uninitialized until [`AppController::start`] resolves.
    pub fn new(widget: M, storage: K, view: V, zoom: f64, events: UnboundedSender<AppEvent>) -> Self {
        let mut app = Self {
            map: MapController::new(widget),
            store: WorkoutStore::new(),
            storage,
            view,
            zoom,
            state: SessionState::AwaitingGeolocation,
            events,
        };
        app.load();
        app
    }

    fn load(&mut self) {
        self.store = WorkoutStore::load_from(&self.storage);
        for workout in self.store.all() {
            self.view.render_entry(&ListEntry::from_workout(workout));
        }
    }

    pub async fn start<F>(&mut self, geolocation: F)
    where
        F: Future<Output = Result<Coordinates, GeolocationError>>,
    {
        if self.state != SessionState::AwaitingGeolocation {
            tracing::debug!("Session already started, ignoring geolocation");
            return;
        }

        match geolocation.await {
            Ok(center) => self.load_map(center),
            Err(err) => {
                tracing::warn!("Geolocation failed: {}", err);
                self.view.warn(&Warning::GeolocationUnavailable(err));
            }
        }
    }

    fn load_map(&mut self, center: Coordinates) {
        self.map.initialize(center, self.zoom);

        let events = self.events.clone();
        self.map.on_user_click(move |coords| {
            if events.send(AppEvent::MapClicked(coords)).is_err() {
                tracing::debug!("Map click dropped, event loop closed");
            }
        });

        for workout in self.store.all() {
            self.map.place_marker(workout);
        }

        self.state = SessionState::Idle;
        tracing::info!("Map ready with {} workouts", self.store.len());
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::MapClicked(coords) => self.show_form(coords),
            AppEvent::KindChanged(kind) => self.view.show_metric_field(kind),
            AppEvent::FormSubmitted => self.submit(),
            AppEvent::EntrySelected(id) => self.select(&id),
            AppEvent::Reset => self.reset(),
        }
    }

    /// Dispatches every queued event, each one to completion.
    pub fn drain(&mut self, events: &mut UnboundedReceiver<AppEvent>) -> usize {
        let mut handled = 0;
        while let Ok(event) = events.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    pub fn show_form(&mut self, coords: Coordinates) {
        if self.state == SessionState::AwaitingGeolocation {
            tracing::debug!("Map click before the map was ready");
            return;
        }
        if !coords.is_valid() {
            tracing::debug!("Ignoring map click outside valid coordinates");
            return;
        }
        self.state = SessionState::FormOpen { pending: coords };
        self.view.show();
    }

    pub fn submit(&mut self) {
        let SessionState::FormOpen { pending } = self.state else {
            tracing::debug!("Form submitted without a selected location");
            return;
        };

        let draft = match self.view.read().validate() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::info!("Rejected workout input: {}", err);
                self.view.warn(&Warning::InvalidInput(err));
                return;
            }
        };

        let workout = draft.into_workout(pending);
        let entry = ListEntry::from_workout(&workout);
        tracing::info!("Added {} ({})", workout.label(), workout.id());

        self.map.place_marker(&workout);
        self.store.append(workout);
        self.view.render_entry(&entry);
        self.persist();

        self.view.clear_and_hide();
        self.state = SessionState::Idle;
    }

    pub fn select(&mut self, id: &str) {
        let Some(workout) = self.store.find_by_id(id) else {
            tracing::debug!("No workout with id {}", id);
            return;
        };
        if !self.map.is_ready() {
            tracing::debug!("Map not ready, cannot move to {}", id);
            return;
        }
        let coords = workout.coords();
        self.map.center_on(coords, self.zoom);
    }

    /// Erases history and restarts the session. The host runs
    /// [`AppController::start`] again afterwards.
    pub fn reset(&mut self) {
        if let Err(err) = self.store.reset(&mut self.storage) {
            tracing::error!("Failed to erase stored workouts: {}", err);
            self.view.warn(&Warning::PersistFailed(err));
        }

        self.view.clear();
        self.view.clear_and_hide();
        self.map.teardown();
        self.state = SessionState::AwaitingGeolocation;
        self.load();
        tracing::info!("Session reset");
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save_to(&mut self.storage) {
            tracing::error!("Failed to save workouts: {}", err);
            self.view.warn(&Warning::PersistFailed(err));
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn map(&self) -> &MapController<M> {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapController<M> {
        &mut self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
