use serde::{Deserialize, Serialize};

use crate::capabilities::GeolocationResult;
use crate::model::{CulturalEvent, LatLng, Monastery};

// --- List filters ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonasteryFilter {
    pub district: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

// --- Service envelope ---

/// Response shape shared by every backend endpoint. An application-level
/// refusal arrives as `success: false` with a message; a by-id lookup that
/// found nothing arrives as `success: true` with `data: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

pub type ListResponse<T> = crux_http::Result<crux_http::Response<ApiEnvelope<Vec<T>>>>;
pub type DetailResponse<T> = crux_http::Result<crux_http::Response<ApiEnvelope<T>>>;

// --- Events ---
//
// Shell-initiated actions first, capability completions after. Completion
// variants are skipped for serde: they only ever originate inside the core.

#[derive(Serialize, Deserialize)]
pub enum Event {
    /// Bootstrap: fires the two list loads and location resolution
    /// concurrently. Sent by the shell exactly once, right after start-up.
    Start,

    LoadMonasteries {
        filter: Option<MonasteryFilter>,
    },
    LoadCulturalEvents {
        filter: Option<EventFilter>,
    },
    LoadMonasteryDetail {
        id: String,
    },
    LoadCulturalEventDetail {
        id: String,
    },
    /// Nearby search around the resolved device position. Refused with an
    /// error when the position has not been resolved yet.
    LoadNearbyMonasteries {
        radius_m: Option<u32>,
    },

    SelectMonastery(Option<Box<Monastery>>),
    SelectCulturalEvent(Option<Box<CulturalEvent>>),

    ResolveLocation,
    OpenDirections {
        destination: LatLng,
    },
    ClearError,

    /// Seed both entity lists from the bundled fixtures. Explicit shell
    /// action for offline use; never triggered by a failed fetch.
    UseFallbackData,

    // -- capability completions --
    #[serde(skip)]
    MonasteriesFetched(ListResponse<Monastery>),
    #[serde(skip)]
    CulturalEventsFetched(ListResponse<CulturalEvent>),
    #[serde(skip)]
    MonasteryDetailFetched(DetailResponse<Monastery>),
    #[serde(skip)]
    CulturalEventDetailFetched(DetailResponse<CulturalEvent>),
    #[serde(skip)]
    LocationResolved(GeolocationResult),
}

impl std::fmt::Debug for Event {
    // Hand-written so completion variants don't drag response bodies into
    // log lines.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("Start"),
            Self::LoadMonasteries { filter } => {
                f.debug_struct("LoadMonasteries").field("filter", filter).finish()
            }
            Self::LoadCulturalEvents { filter } => {
                f.debug_struct("LoadCulturalEvents").field("filter", filter).finish()
            }
            Self::LoadMonasteryDetail { id } => {
                f.debug_struct("LoadMonasteryDetail").field("id", id).finish()
            }
            Self::LoadCulturalEventDetail { id } => {
                f.debug_struct("LoadCulturalEventDetail").field("id", id).finish()
            }
            Self::LoadNearbyMonasteries { radius_m } => f
                .debug_struct("LoadNearbyMonasteries")
                .field("radius_m", radius_m)
                .finish(),
            Self::SelectMonastery(m) => f
                .debug_tuple("SelectMonastery")
                .field(&m.as_ref().map(|m| m.id.as_str()))
                .finish(),
            Self::SelectCulturalEvent(e) => f
                .debug_tuple("SelectCulturalEvent")
                .field(&e.as_ref().map(|e| e.id.as_str()))
                .finish(),
            Self::ResolveLocation => f.write_str("ResolveLocation"),
            Self::OpenDirections { destination } => f
                .debug_struct("OpenDirections")
                .field("destination", destination)
                .finish(),
            Self::ClearError => f.write_str("ClearError"),
            Self::UseFallbackData => f.write_str("UseFallbackData"),
            Self::MonasteriesFetched(r) => f
                .debug_tuple("MonasteriesFetched")
                .field(&r.is_ok())
                .finish(),
            Self::CulturalEventsFetched(r) => f
                .debug_tuple("CulturalEventsFetched")
                .field(&r.is_ok())
                .finish(),
            Self::MonasteryDetailFetched(r) => f
                .debug_tuple("MonasteryDetailFetched")
                .field(&r.is_ok())
                .finish(),
            Self::CulturalEventDetailFetched(r) => f
                .debug_tuple("CulturalEventDetailFetched")
                .field(&r.is_ok())
                .finish(),
            Self::LocationResolved(r) => {
                f.debug_tuple("LocationResolved").field(&r.is_ok()).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_success_with_data() {
        let env: ApiEnvelope<Vec<Monastery>> = serde_json::from_str(
            r#"{"success":true,"data":[{"id":"m1","name":"Enchey Monastery"}]}"#,
        )
        .unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap().len(), 1);
        assert!(env.message.is_none());
    }

    #[test]
    fn envelope_decodes_failure_with_message() {
        let env: ApiEnvelope<Vec<Monastery>> =
            serde_json::from_str(r#"{"success":false,"message":"rate limited"}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("rate limited"));
    }

    #[test]
    fn envelope_decodes_null_data_on_detail() {
        let env: ApiEnvelope<CulturalEvent> =
            serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert!(env.success);
        assert!(env.data.is_none());
    }

    #[test]
    fn action_events_round_trip_through_serde() {
        // Shell-facing variants must stay serializable for the FFI boundary.
        let json = serde_json::to_string(&Event::LoadNearbyMonasteries { radius_m: Some(2000) })
            .unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        match back {
            Event::LoadNearbyMonasteries { radius_m } => assert_eq!(radius_m, Some(2000)),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
