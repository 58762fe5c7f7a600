use serde::{Deserialize, Serialize};

// --- Coordinates ---

/// Plain WGS84 pair. Stored as delivered by the service or the device
/// sensor; presentation code tolerates out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// --- Entities ---
//
// Records owned by the backend. Every non-identifying field is defaulted so
// the core keeps storing and forwarding whatever shape the service returns.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Monastery {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Annotated by the nearby-search endpoint; absent elsewhere.
    #[serde(default)]
    pub distance_meters: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CulturalEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

// --- Loading flags ---

/// One flag per tracked request key. A flag is true exactly while that
/// request is in flight; overlapping calls on the same key share the flag
/// and the last completion wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loading {
    pub monasteries: bool,
    pub events: bool,
    pub monastery_detail: bool,
    pub event_detail: bool,
}

impl Loading {
    #[must_use]
    pub const fn any(self) -> bool {
        self.monasteries || self.events || self.monastery_detail || self.event_detail
    }
}

// --- Model ---

/// The app snapshot. Created empty, mutated only inside `App::update`,
/// discarded with the core. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub monasteries: Vec<Monastery>,
    pub cultural_events: Vec<CulturalEvent>,

    pub selected_monastery: Option<Monastery>,
    pub selected_event: Option<CulturalEvent>,

    pub loading: Loading,

    /// Most recent failure, if any. One channel for every error class.
    pub error: Option<String>,

    /// Last known device position. Stays `None` until location resolution
    /// has run at least once; a failed resolution falls back to Gangtok.
    pub user_location: Option<LatLng>,
}
