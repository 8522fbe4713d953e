use std::collections::HashMap;

use serde::Serialize;

use crate::model::DayRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LocationKind {
    Start,
    End,
    Destination,
}

/// A deduplicated geographic point aggregating every day that shares its
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub kind: LocationKind,
    pub days: Vec<u32>,
}

/// Everything the map widget needs: one marker per location and the
/// coordinate list for the dashed route polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapView {
    pub locations: Vec<Location>,
    pub route: Vec<[f64; 2]>,
}

/// Derive the map presentation from a canonical day sequence.
///
/// Locations are keyed by exact coordinate pair and classified by position
/// in the sequence: the location holding the first day is the start, the
/// one holding the last day the end (unless it is also the start), all
/// others are destinations. The route connects non-day-trip locations in
/// first-visit order; an out-and-back single-day stop stays off the
/// polyline but keeps its marker.
pub fn derive_map(records: &[DayRecord]) -> MapView {
    let mut ordered = records.to_vec();
    ordered.sort_by_key(|record| record.day);

    let first_day = ordered.first().map(|record| record.day);
    let last_day = ordered.last().map(|record| record.day);

    // Group days by coordinate pair, preserving first-visit order.
    let mut index_by_coords: HashMap<(u64, u64), usize> = HashMap::new();
    let mut grouped: Vec<(f64, f64, String, Vec<u32>)> = Vec::new();
    for record in &ordered {
        let (Some(lat), Some(lng)) = (record.lat, record.lng) else {
            continue;
        };

        match index_by_coords.entry((lat.to_bits(), lng.to_bits())) {
            std::collections::hash_map::Entry::Occupied(entry) => {
                grouped[*entry.get()].3.push(record.day);
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(grouped.len());
                grouped.push((lat, lng, record.title.clone(), vec![record.day]));
            }
        }
    }

    let locations: Vec<Location> = grouped
        .into_iter()
        .map(|(lat, lng, title, days)| {
            let kind = if first_day.is_some_and(|day| days.contains(&day)) {
                LocationKind::Start
            } else if last_day.is_some_and(|day| days.contains(&day)) {
                LocationKind::End
            } else {
                LocationKind::Destination
            };

            Location {
                name: display_name(&title),
                title,
                lat,
                lng,
                kind,
                days,
            }
        })
        .collect();

    let route = locations
        .iter()
        .filter(|location| !is_day_trip(location, &locations))
        .map(|location| [location.lat, location.lng])
        .collect();

    MapView { locations, route }
}

/// An out-and-back stop: visited on a single day, with the days directly
/// before and after spent at one same other location.
fn is_day_trip(location: &Location, all: &[Location]) -> bool {
    let [day] = location.days[..] else {
        return false;
    };

    all.iter().any(|other| {
        !std::ptr::eq(other, location)
            && other.days.contains(&day.wrapping_sub(1))
            && other.days.contains(&(day + 1))
    })
}

/// Marker captions use the last dash segment of the title, so
/// "Tokyo – Hakone" labels the Hakone marker.
fn display_name(title: &str) -> String {
    title
        .rsplit(['\u{2013}', '\u{2014}'])
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .unwrap_or(title.trim())
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, title: &str, coords: Option<(f64, f64)>) -> DayRecord {
        DayRecord {
            day,
            date: None,
            title: title.to_owned(),
            notes: None,
            helpful_info: None,
            hotel: None,
            highlights: Vec::new(),
            helpful_links: Vec::new(),
            lat: coords.map(|(lat, _)| lat),
            lng: coords.map(|(_, lng)| lng),
            km: None,
            time: None,
        }
    }

    #[test]
    fn shared_first_and_last_coordinates_merge_into_one_start() {
        let tokyo = (35.6762, 139.6503);
        let mut records: Vec<DayRecord> = (2..18)
            .map(|day| record(day, "Somewhere", Some((34.0 + day as f64, 135.0))))
            .collect();
        records.insert(0, record(1, "Tokyo", Some(tokyo)));
        records.push(record(18, "Tokyo", Some(tokyo)));

        let view = derive_map(&records);
        let starts: Vec<&Location> = view
            .locations
            .iter()
            .filter(|location| location.kind == LocationKind::Start)
            .collect();

        assert_eq!(starts.len(), 1);
        assert!(starts[0].days.contains(&1));
        assert!(starts[0].days.contains(&18));
        // Not a second marker under the end classification.
        assert!(
            view.locations
                .iter()
                .all(|location| location.kind != LocationKind::End)
        );
    }

    #[test]
    fn classifies_start_end_and_destination() {
        let records = vec![
            record(1, "Tokyo", Some((35.6, 139.6))),
            record(2, "Kyoto", Some((35.0, 135.7))),
            record(3, "Osaka", Some((34.6, 135.5))),
        ];

        let view = derive_map(&records);
        let kinds: Vec<LocationKind> = view.locations.iter().map(|l| l.kind).collect();

        assert_eq!(
            kinds,
            vec![
                LocationKind::Start,
                LocationKind::Destination,
                LocationKind::End,
            ],
        );
    }

    #[test]
    fn days_without_coordinates_contribute_no_marker() {
        let records = vec![
            record(1, "Tokyo", Some((35.6, 139.6))),
            record(2, "At sea", None),
        ];

        let view = derive_map(&records);

        assert_eq!(view.locations.len(), 1);
    }

    #[test]
    fn out_and_back_stop_is_off_the_route_but_keeps_its_marker() {
        let kyoto = (35.0, 135.7);
        let records = vec![
            record(1, "Kyoto", Some(kyoto)),
            record(2, "Kyoto – Nara", Some((34.68, 135.83))),
            record(3, "Kyoto", Some(kyoto)),
            record(4, "Osaka", Some((34.6, 135.5))),
        ];

        let view = derive_map(&records);

        assert_eq!(view.locations.len(), 3);
        assert_eq!(view.route.len(), 2);
        assert_eq!(view.route[0], [35.0, 135.7]);
        assert_eq!(view.route[1], [34.6, 135.5]);
    }

    #[test]
    fn marker_name_is_the_last_title_segment() {
        let records = vec![record(1, "Tokyo – Hakone", Some((35.2, 139.1)))];

        let view = derive_map(&records);

        assert_eq!(view.locations[0].name, "Hakone");
        assert_eq!(view.locations[0].title, "Tokyo – Hakone");
    }

    #[test]
    fn empty_dataset_yields_an_empty_view() {
        assert_eq!(derive_map(&[]), MapView::default());
    }
}
