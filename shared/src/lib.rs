#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod capabilities;
pub mod event;
pub mod fixtures;
pub mod geo;
pub mod model;

pub use app::{App, MonasteryView, ViewModel};
pub use capabilities::{Capabilities, Effect};
pub use event::{ApiEnvelope, Event, EventFilter, MonasteryFilter};
pub use model::{CulturalEvent, LatLng, Loading, Model, Monastery};

pub const API_BASE: &str = "https://api.sikkimtrails.app/api/v1";

pub const DEFAULT_NEARBY_RADIUS_M: u32 = 5_000;
pub const LOCATION_TIMEOUT_MS: u64 = 10_000;
pub const LOCATION_MAX_AGE_MS: u64 = 300_000;
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Reference point for the service region (Gangtok). Used when the device
/// sensor cannot produce a fix, so location-dependent features keep working.
pub const GANGTOK_FALLBACK: LatLng = LatLng::new(27.3314, 88.6138);

// Fixed fallback messages for failures the service did not describe.
pub const MSG_MONASTERIES_FAILED: &str = "Failed to load monasteries";
pub const MSG_EVENTS_FAILED: &str = "Failed to load cultural events";
pub const MSG_MONASTERY_DETAIL_FAILED: &str = "Failed to load monastery details";
pub const MSG_EVENT_DETAIL_FAILED: &str = "Failed to load event details";
pub const MSG_MONASTERY_NOT_FOUND: &str = "Monastery not found";
pub const MSG_EVENT_NOT_FOUND: &str = "Event not found";
pub const MSG_LOCATION_REQUIRED: &str = "Current location is not available yet";
pub const MSG_LOCATION_FAILED: &str = "Unable to determine your location; showing Gangtok";
