use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::capabilities::{Capabilities, GeolocationOptions};
use crate::event::{DetailResponse, Event, EventFilter, ListResponse, MonasteryFilter};
use crate::geo;
use crate::model::{CulturalEvent, LatLng, Loading, Model, Monastery};
use crate::{
    API_BASE, DEFAULT_NEARBY_RADIUS_M, GANGTOK_FALLBACK, MSG_EVENTS_FAILED,
    MSG_EVENT_DETAIL_FAILED, MSG_EVENT_NOT_FOUND, MSG_LOCATION_FAILED, MSG_LOCATION_REQUIRED,
    MSG_MONASTERIES_FAILED, MSG_MONASTERY_DETAIL_FAILED, MSG_MONASTERY_NOT_FOUND,
};

#[derive(Default)]
pub struct App;

// --- View model ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonasteryView {
    pub monastery: Monastery,
    /// Human-readable distance from the resolved device position, when both
    /// ends have coordinates.
    pub distance_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub monasteries: Vec<MonasteryView>,
    pub cultural_events: Vec<CulturalEvent>,
    pub selected_monastery: Option<Monastery>,
    pub selected_event: Option<CulturalEvent>,
    pub loading: Loading,
    pub error: Option<String>,
    pub user_location: Option<LatLng>,
}

// --- Request URLs ---

fn monasteries_url(filter: Option<&MonasteryFilter>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(filter) = filter {
        if let Some(district) = &filter.district {
            query.append_pair("district", district);
        }
        if let Some(search) = &filter.search {
            query.append_pair("q", search);
        }
    }
    with_query(format!("{API_BASE}/monasteries"), query.finish())
}

fn cultural_events_url(filter: Option<&EventFilter>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(filter) = filter {
        if let Some(category) = &filter.category {
            query.append_pair("category", category);
        }
        if let Some(search) = &filter.search {
            query.append_pair("q", search);
        }
    }
    with_query(format!("{API_BASE}/cultural-events"), query.finish())
}

fn nearby_url(origin: LatLng, radius_m: u32) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("lat", &origin.lat.to_string());
    query.append_pair("lng", &origin.lng.to_string());
    query.append_pair("radius", &radius_m.to_string());
    with_query(format!("{API_BASE}/monasteries/nearby"), query.finish())
}

fn with_query(base: String, query: String) -> String {
    if query.is_empty() {
        base
    } else {
        format!("{base}?{query}")
    }
}

// --- Response reconciliation ---
//
// A transport failure, an undecodable body, a non-success status and an
// application-level refusal all collapse into one error string; the caller
// decides which data field a success feeds.

fn take_list<T>(result: ListResponse<T>, fallback: &str) -> Result<Vec<T>, String> {
    let mut response = result.map_err(|_| fallback.to_string())?;
    if !response.status().is_success() {
        return Err(fallback.to_string());
    }
    match response.take_body() {
        Some(envelope) if envelope.success => Ok(envelope.data.unwrap_or_default()),
        Some(envelope) => Err(envelope.message.unwrap_or_else(|| fallback.to_string())),
        None => Err(fallback.to_string()),
    }
}

fn take_detail<T>(result: DetailResponse<T>, not_found: &str, fallback: &str) -> Result<T, String> {
    let mut response = result.map_err(|_| fallback.to_string())?;
    if !response.status().is_success() {
        return Err(fallback.to_string());
    }
    match response.take_body() {
        // A successful lookup with an empty payload is a miss, not a result.
        Some(envelope) if envelope.success => envelope.data.ok_or_else(|| not_found.to_string()),
        Some(envelope) => Err(envelope.message.unwrap_or_else(|| fallback.to_string())),
        None => Err(fallback.to_string()),
    }
}

fn distance_text(user_location: Option<LatLng>, monastery: &Monastery) -> Option<String> {
    if let Some(meters) = monastery.distance_meters {
        return Some(geo::format_distance(meters));
    }
    let origin = user_location?;
    let target = monastery.location?;
    Some(geo::format_distance(geo::haversine_distance(origin, target)))
}

// --- Update loop ---

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        match event {
            Event::Start => {
                // Three independent requests; completions arrive in any
                // order and none blocks another.
                self.update(Event::LoadMonasteries { filter: None }, model, caps);
                self.update(Event::LoadCulturalEvents { filter: None }, model, caps);
                self.update(Event::ResolveLocation, model, caps);
            }

            Event::LoadMonasteries { filter } => {
                model.loading.monasteries = true;
                model.error = None;
                let url = monasteries_url(filter.as_ref());
                debug!(%url, "loading monasteries");
                caps.http.get(url).expect_json().send(Event::MonasteriesFetched);
                caps.render.render();
            }

            Event::LoadCulturalEvents { filter } => {
                model.loading.events = true;
                model.error = None;
                let url = cultural_events_url(filter.as_ref());
                debug!(%url, "loading cultural events");
                caps.http.get(url).expect_json().send(Event::CulturalEventsFetched);
                caps.render.render();
            }

            Event::LoadMonasteryDetail { id } => {
                model.loading.monastery_detail = true;
                model.error = None;
                caps.http
                    .get(format!("{API_BASE}/monasteries/{id}"))
                    .expect_json()
                    .send(Event::MonasteryDetailFetched);
                caps.render.render();
            }

            Event::LoadCulturalEventDetail { id } => {
                model.loading.event_detail = true;
                model.error = None;
                caps.http
                    .get(format!("{API_BASE}/cultural-events/{id}"))
                    .expect_json()
                    .send(Event::CulturalEventDetailFetched);
                caps.render.render();
            }

            Event::LoadNearbyMonasteries { radius_m } => match model.user_location {
                // Precondition failure: no request, no loading toggle.
                None => {
                    model.error = Some(MSG_LOCATION_REQUIRED.to_string());
                    caps.render.render();
                }
                Some(origin) => {
                    model.loading.monasteries = true;
                    model.error = None;
                    let url = nearby_url(origin, radius_m.unwrap_or(DEFAULT_NEARBY_RADIUS_M));
                    debug!(%url, "loading nearby monasteries");
                    caps.http.get(url).expect_json().send(Event::MonasteriesFetched);
                    caps.render.render();
                }
            },

            Event::SelectMonastery(monastery) => {
                model.selected_monastery = monastery.map(|m| *m);
                caps.render.render();
            }

            Event::SelectCulturalEvent(event) => {
                model.selected_event = event.map(|e| *e);
                caps.render.render();
            }

            Event::ResolveLocation => {
                caps.location
                    .get_current_position(GeolocationOptions::default(), Event::LocationResolved);
            }

            Event::OpenDirections { destination } => {
                let url = geo::directions_url(destination, model.user_location);
                caps.navigate.open_external(url);
            }

            Event::ClearError => {
                model.error = None;
                caps.render.render();
            }

            Event::UseFallbackData => {
                model.monasteries = crate::fixtures::fallback_monasteries();
                model.cultural_events = crate::fixtures::fallback_events();
                caps.render.render();
            }

            // -- completions --
            Event::MonasteriesFetched(result) => {
                model.loading.monasteries = false;
                match take_list(result, MSG_MONASTERIES_FAILED) {
                    Ok(items) => {
                        model.monasteries = items;
                        model.error = None;
                    }
                    Err(message) => {
                        warn!(%message, "monastery list failed");
                        model.error = Some(message);
                    }
                }
                caps.render.render();
            }

            Event::CulturalEventsFetched(result) => {
                model.loading.events = false;
                match take_list(result, MSG_EVENTS_FAILED) {
                    Ok(items) => {
                        model.cultural_events = items;
                        model.error = None;
                    }
                    Err(message) => {
                        warn!(%message, "cultural event list failed");
                        model.error = Some(message);
                    }
                }
                caps.render.render();
            }

            Event::MonasteryDetailFetched(result) => {
                model.loading.monastery_detail = false;
                match take_detail(result, MSG_MONASTERY_NOT_FOUND, MSG_MONASTERY_DETAIL_FAILED) {
                    Ok(monastery) => {
                        model.selected_monastery = Some(monastery);
                        model.error = None;
                    }
                    Err(message) => {
                        warn!(%message, "monastery detail failed");
                        model.error = Some(message);
                    }
                }
                caps.render.render();
            }

            Event::CulturalEventDetailFetched(result) => {
                model.loading.event_detail = false;
                match take_detail(result, MSG_EVENT_NOT_FOUND, MSG_EVENT_DETAIL_FAILED) {
                    Ok(event) => {
                        model.selected_event = Some(event);
                        model.error = None;
                    }
                    Err(message) => {
                        warn!(%message, "cultural event detail failed");
                        model.error = Some(message);
                    }
                }
                caps.render.render();
            }

            Event::LocationResolved(Ok(position)) => {
                model.user_location = Some(position);
                model.error = None;
                caps.render.render();
            }

            Event::LocationResolved(Err(error)) => {
                // Downstream nearby search must never stay blocked on a
                // dead sensor, so park the map on Gangtok.
                warn!(%error, "location resolution failed, using fallback");
                model.user_location = Some(GANGTOK_FALLBACK);
                model.error = Some(format!("{MSG_LOCATION_FAILED} ({error})"));
                caps.render.render();
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let monasteries = model
            .monasteries
            .iter()
            .map(|m| MonasteryView {
                distance_text: distance_text(model.user_location, m),
                monastery: m.clone(),
            })
            .collect();

        ViewModel {
            monasteries,
            cultural_events: model.cultural_events.clone(),
            selected_monastery: model.selected_monastery.clone(),
            selected_event: model.selected_event.clone(),
            loading: model.loading,
            error: model.error.clone(),
            user_location: model.user_location,
        }
    }
}
