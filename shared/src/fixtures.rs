//! Bundled fallback data, shown when the backend is unreachable. Kept small
//! and factual; the live service is the source of truth.

use crate::model::{CulturalEvent, LatLng, Monastery};

#[must_use]
pub fn fallback_monasteries() -> Vec<Monastery> {
    vec![
        Monastery {
            id: "rumtek".into(),
            name: "Rumtek Monastery".into(),
            district: Some("East Sikkim".into()),
            description: Some(
                "Seat of the Karmapa and the largest monastery in Sikkim.".into(),
            ),
            location: Some(LatLng::new(27.2886, 88.5615)),
            founded_year: Some(1966),
            image_url: None,
            distance_meters: None,
        },
        Monastery {
            id: "pemayangtse".into(),
            name: "Pemayangtse Monastery".into(),
            district: Some("West Sikkim".into()),
            description: Some(
                "One of the oldest monasteries of the Nyingma order, near Pelling.".into(),
            ),
            location: Some(LatLng::new(27.3050, 88.2516)),
            founded_year: Some(1705),
            image_url: None,
            distance_meters: None,
        },
        Monastery {
            id: "enchey".into(),
            name: "Enchey Monastery".into(),
            district: Some("East Sikkim".into()),
            description: Some("Two-hundred-year-old monastery above Gangtok.".into()),
            location: Some(LatLng::new(27.3358, 88.6190)),
            founded_year: Some(1909),
            image_url: None,
            distance_meters: None,
        },
        Monastery {
            id: "tashiding".into(),
            name: "Tashiding Monastery".into(),
            district: Some("West Sikkim".into()),
            description: Some(
                "Hilltop monastery between the Rathong and Rangeet rivers.".into(),
            ),
            location: Some(LatLng::new(27.3083, 88.2980)),
            founded_year: Some(1717),
            image_url: None,
            distance_meters: None,
        },
        Monastery {
            id: "phodong".into(),
            name: "Phodong Monastery".into(),
            district: Some("North Sikkim".into()),
            description: Some("Kagyu monastery known for its annual cham dances.".into()),
            location: Some(LatLng::new(27.4134, 88.5850)),
            founded_year: Some(1740),
            image_url: None,
            distance_meters: None,
        },
    ]
}

#[must_use]
pub fn fallback_events() -> Vec<CulturalEvent> {
    vec![
        CulturalEvent {
            id: "losar".into(),
            title: "Losar".into(),
            description: Some("Tibetan new year celebrations across the monasteries.".into()),
            category: Some("festival".into()),
            venue: Some("Statewide".into()),
            location: None,
            start_date: Some("2026-02-18".into()),
            end_date: Some("2026-02-20".into()),
            image_url: None,
        },
        CulturalEvent {
            id: "saga-dawa".into(),
            title: "Saga Dawa".into(),
            description: Some(
                "Triple-blessed festival marking the Buddha's birth, enlightenment and parinirvana.".into(),
            ),
            category: Some("festival".into()),
            venue: Some("Gangtok".into()),
            location: Some(LatLng::new(27.3314, 88.6138)),
            start_date: Some("2026-05-31".into()),
            end_date: None,
            image_url: None,
        },
        CulturalEvent {
            id: "pang-lhabsol".into(),
            title: "Pang Lhabsol".into(),
            description: Some(
                "Worship of Mount Khangchendzonga as the guardian deity of Sikkim.".into(),
            ),
            category: Some("festival".into()),
            venue: Some("Tsuklakhang, Gangtok".into()),
            location: Some(LatLng::new(27.3255, 88.6122)),
            start_date: Some("2026-08-27".into()),
            end_date: None,
            image_url: None,
        },
        CulturalEvent {
            id: "bumchu".into(),
            title: "Bumchu".into(),
            description: Some(
                "Sacred water vase ceremony at Tashiding, foretelling the year ahead.".into(),
            ),
            category: Some("ritual".into()),
            venue: Some("Tashiding Monastery".into()),
            location: Some(LatLng::new(27.3083, 88.2980)),
            start_date: Some("2026-03-03".into()),
            end_date: None,
            image_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_unique() {
        let monasteries = fallback_monasteries();
        let mut ids: Vec<_> = monasteries.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), monasteries.len());

        let events = fallback_events();
        let mut ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn fixture_monasteries_all_have_coordinates() {
        for m in fallback_monasteries() {
            assert!(m.location.is_some(), "{} lacks coordinates", m.id);
        }
    }
}
