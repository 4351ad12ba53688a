use tokio::sync::mpsc::UnboundedSender;

use crate::app::{AppController, AppEvent};
use crate::error::{GeolocationError, Warning};
use crate::form::FormInput;
use crate::map::{ClickHandler, MapWidget, PanOptions, Popup};
use crate::storage::KeyValueStore;
use crate::types::workout::{Coordinates, WorkoutKind};
use crate::view::{FormSurface, ListEntry, Notifier, WorkoutList};

pub const HELP: &str = "\
commands:
  click <lat> <lng>                               pick a workout location
  type running|cycling                            switch the form's workout type
  submit running <distance> <duration> <cadence>  log a run at the picked location
  submit cycling <distance> <duration> <elevation>
  select <id>                                     move the map to a workout
  list                                            show stored workouts
  reset                                           erase history and restart
  help | quit";

/// Resolves once with the configured position.
pub async fn locate(position: Option<Coordinates>) -> Result<Coordinates, GeolocationError> {
    position.ok_or(GeolocationError::Unavailable)
}

/// Text stand-in for the map widget.
#[derive(Default)]
pub struct ConsoleMap {
    on_click: Option<ClickHandler>,
    markers: usize,
}

impl ConsoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards a click to the subscribed handler. Returns false when no
    /// view has subscribed yet.
    pub fn click(&mut self, at: Coordinates) -> bool {
        match self.on_click.as_mut() {
            Some(handler) => {
                handler(at);
                true
            }
            None => false,
        }
    }
}

impl MapWidget for ConsoleMap {
    fn create_view(&mut self, center: Coordinates, zoom: f64) {
        println!("map: view at [{}, {}] zoom {}", center.lat, center.lng, zoom);
    }

    fn set_view(&mut self, center: Coordinates, zoom: f64, pan: PanOptions) {
        println!(
            "map: panning to [{}, {}] zoom {} over {}s",
            center.lat, center.lng, zoom, pan.duration_secs
        );
    }

    fn add_marker(&mut self, at: Coordinates, popup: Popup) {
        self.markers += 1;
        println!("map: marker #{} at [{}, {}]: {}", self.markers, at.lat, at.lng, popup.content);
    }

    fn on_click(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    fn remove(&mut self) {
        self.on_click = None;
        self.markers = 0;
        println!("map: removed");
    }
}

#[derive(Default)]
pub struct ConsoleView {
    form: FormInput,
    form_visible: bool,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_kind(&mut self, kind: WorkoutKind) {
        self.form.kind = kind;
    }

    pub fn fill(&mut self, kind: WorkoutKind, distance: &str, duration: &str, metric: &str) {
        self.form.kind = kind;
        self.form.distance = distance.to_string();
        self.form.duration = duration.to_string();
        match kind {
            WorkoutKind::Running => self.form.cadence = metric.to_string(),
            WorkoutKind::Cycling => self.form.elevation = metric.to_string(),
        }
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }
}

impl FormSurface for ConsoleView {
    fn read(&self) -> FormInput {
        self.form.clone()
    }

    fn show(&mut self) {
        self.form_visible = true;
        println!("form: enter distance for the picked location");
    }

    fn clear_and_hide(&mut self) {
        self.form = FormInput {
            kind: self.form.kind,
            ..FormInput::default()
        };
        self.form_visible = false;
    }

    fn show_metric_field(&mut self, kind: WorkoutKind) {
        let field = match kind {
            WorkoutKind::Running => "cadence",
            WorkoutKind::Cycling => "elevation",
        };
        println!("form: showing {field}");
    }
}

impl WorkoutList for ConsoleView {
    fn render_entry(&mut self, entry: &ListEntry) {
        let details: Vec<String> = entry
            .details
            .iter()
            .map(|d| format!("{} {} {}", d.icon, d.value, d.unit))
            .collect();
        println!("{}  [{}]  {}", entry.title, entry.id, details.join("  "));
    }

    fn clear(&mut self) {
        println!("list: cleared");
    }
}

impl Notifier for ConsoleView {
    fn warn(&mut self, warning: &Warning) {
        println!("warning: {warning}");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Click(Coordinates),
    Type(WorkoutKind),
    Submit {
        kind: WorkoutKind,
        distance: String,
        duration: String,
        metric: String,
    },
    Select(String),
    List,
    Reset,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["click", lat, lng] => {
            let lat = lat.parse().map_err(|_| format!("invalid latitude: {lat}"))?;
            let lng = lng.parse().map_err(|_| format!("invalid longitude: {lng}"))?;
            Coordinates::checked(lat, lng)
                .map(Command::Click)
                .ok_or_else(|| format!("coordinates out of range: {lat} {lng}"))
        }
        ["type", kind] => parse_kind(kind).map(Command::Type),
        ["submit", kind, distance, duration, metric] => Ok(Command::Submit {
            kind: parse_kind(kind)?,
            distance: distance.to_string(),
            duration: duration.to_string(),
            metric: metric.to_string(),
        }),
        ["select", id] => Ok(Command::Select(id.to_string())),
        ["list"] => Ok(Command::List),
        ["reset"] => Ok(Command::Reset),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        [] => Err("empty command".to_string()),
        _ => Err(format!("unknown command: {line}")),
    }
}

fn parse_kind(raw: &str) -> Result<WorkoutKind, String> {
    WorkoutKind::from_str(raw).ok_or_else(|| format!("unknown workout type: {raw}"))
}

/// Turns a command into page interactions. Events are queued and handled
/// by the caller's event loop.
pub fn execute<K: KeyValueStore>(
    app: &mut AppController<ConsoleMap, K, ConsoleView>,
    events: &UnboundedSender<AppEvent>,
    command: Command,
) {
    let queued = match command {
        Command::Click(at) => {
            if !app.map_mut().widget_mut().click(at) {
                println!("map is not available");
            }
            Ok(())
        }
        Command::Type(kind) => {
            app.view_mut().set_kind(kind);
            events.send(AppEvent::KindChanged(kind))
        }
        Command::Submit {
            kind,
            distance,
            duration,
            metric,
        } => {
            app.view_mut().fill(kind, &distance, &duration, &metric);
            events.send(AppEvent::FormSubmitted)
        }
        Command::Select(id) => events.send(AppEvent::EntrySelected(id)),
        Command::Reset => events.send(AppEvent::Reset),
        Command::List => {
            for workout in app.store().all() {
                println!("{}  {}  {}", workout.id(), workout.kind().as_str(), workout.label());
            }
            Ok(())
        }
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Quit => Ok(()),
    };

    if queued.is_err() {
        tracing::debug!("Event loop closed, command dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("click -4 -35"),
            Ok(Command::Click(Coordinates::new(-4.0, -35.0)))
        );
        assert_eq!(
            parse_command("submit cycling 26 90 -5"),
            Ok(Command::Submit {
                kind: WorkoutKind::Cycling,
                distance: "26".to_string(),
                duration: "90".to_string(),
                metric: "-5".to_string(),
            })
        );
        assert_eq!(parse_command("  reset "), Ok(Command::Reset));
        assert!(parse_command("submit swimming 1 2 3").is_err());
        assert!(parse_command("click north south").is_err());
        assert!(parse_command("click nan 5").is_err());
        assert!(parse_command("click inf 0").is_err());
        assert!(parse_command("click 0 181").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn click_without_subscriber_is_ignored() {
        let mut map = ConsoleMap::new();
        assert!(!map.click(Coordinates::new(0.0, 0.0)));
    }

    #[tokio::test]
    async fn locate_without_position_is_unavailable() {
        assert_eq!(locate(None).await, Err(GeolocationError::Unavailable));
        let here = Coordinates::new(1.0, 2.0);
        assert_eq!(locate(Some(here)).await, Ok(here));
    }
}
