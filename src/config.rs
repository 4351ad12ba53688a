use std::path::PathBuf;

use crate::types::workout::Coordinates;

pub const DEFAULT_ZOOM: f64 = 13.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub zoom: f64,
    /// Position reported by the console host's geolocation. `None` means
    /// the position is unavailable.
    pub position: Option<Coordinates>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            zoom: DEFAULT_ZOOM,
            position: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_dir = std::env::var("MAPTY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let zoom = std::env::var("MAPTY_ZOOM")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|z| z.is_finite() && *z >= 0.0)
            .unwrap_or(defaults.zoom);

        let position = std::env::var("MAPTY_POSITION")
            .ok()
            .and_then(|s| parse_position(&s))
            .or(defaults.position);

        Self {
            data_dir,
            zoom,
            position,
        }
    }
}

/// Parses `"lat,lng"`.
pub fn parse_position(raw: &str) -> Option<Coordinates> {
    let (lat, lng) = raw.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    Coordinates::checked(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_position_pairs() {
        assert_eq!(parse_position("-4, -35"), Some(Coordinates::new(-4.0, -35.0)));
        assert_eq!(parse_position("52.52,13.405"), Some(Coordinates::new(52.52, 13.405)));
        assert_eq!(parse_position("91,0"), None);
        assert_eq!(parse_position("north"), None);
        assert_eq!(parse_position("nan,5"), None);
    }
}
