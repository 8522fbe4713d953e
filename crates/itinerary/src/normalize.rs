use serde_json::Value;

use crate::model::{DayRecord, RawDay, RawHighlights};

/// Reconcile a raw itinerary array into canonical [`DayRecord`]s.
///
/// Two historical file schemas exist: legacy records carry `highlights` as
/// one semicolon-delimited string and no `helpfulLinks`; current records
/// carry both as structured lists. A record whose `highlights` is already a
/// list is taken as canonical and passed through untouched, which makes the
/// whole pass idempotent.
///
/// A non-array input yields an empty sequence, never an error. Individual
/// records that cannot be read, or that lack a `day` number, are skipped
/// with a warning.
pub fn normalize_days(raw: &Value) -> Vec<DayRecord> {
    let Some(entries) = raw.as_array() else {
        tracing::warn!("itinerary data is not an array, treating as empty");
        return Vec::new();
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.is_null() {
            continue;
        }

        let raw_day: RawDay = match serde_json::from_value(entry.clone()) {
            Ok(raw_day) => raw_day,
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping unreadable day record");
                continue;
            }
        };

        let Some(day) = raw_day.day else {
            tracing::warn!(index, "skipping day record without a day number");
            continue;
        };

        records.push(normalize_day(day, raw_day));
    }

    records
}

fn normalize_day(day: u32, raw: RawDay) -> DayRecord {
    let (highlights, helpful_links) = match raw.highlights {
        // Already canonical, pass through unchanged.
        Some(RawHighlights::List(list)) => (list, raw.helpful_links.unwrap_or_default()),
        legacy => {
            let highlights = match legacy {
                Some(RawHighlights::Legacy(text)) => split_highlights(&text),
                _ => Vec::new(),
            };
            (highlights, legacy_links(&raw.notes, &raw.hotel))
        }
    };

    DayRecord {
        day,
        date: raw.date,
        title: raw.title.unwrap_or_default(),
        notes: raw.notes,
        helpful_info: raw.helpful_info,
        hotel: raw.hotel,
        highlights,
        helpful_links,
        lat: raw.lat,
        lng: raw.lng,
        km: raw.km,
        time: raw.time,
    }
}

/// Split a legacy semicolon-delimited highlights string. Empty segments are
/// dropped, so an empty input yields zero highlights rather than one empty
/// entry.
fn split_highlights(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Legacy files have no `helpfulLinks`; any field value mentioning a URL is
/// carried over wholesale as one link entry.
fn legacy_links(notes: &Option<String>, hotel: &Option<String>) -> Vec<String> {
    [notes, hotel]
        .into_iter()
        .flatten()
        .filter(|field| field.contains("http"))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_highlights_split_and_trimmed() {
        let raw = json!([{ "day": 1, "title": "Tokyo", "highlights": "A; B ; C" }]);
        let records = normalize_days(&raw);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].highlights, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_legacy_highlights_yield_no_entries() {
        let raw = json!([{ "day": 1, "title": "Tokyo", "highlights": "" }]);
        let records = normalize_days(&raw);

        assert!(records[0].highlights.is_empty());
    }

    #[test]
    fn structured_records_pass_through() {
        let raw = json!([{
            "day": 2,
            "title": "Kyoto",
            "highlights": ["Fushimi Inari", "Gion"],
            "helpfulLinks": ["JR Pass – https://example.com/jr"],
        }]);
        let records = normalize_days(&raw);

        assert_eq!(records[0].highlights, vec!["Fushimi Inari", "Gion"]);
        assert_eq!(records[0].helpful_links, vec!["JR Pass – https://example.com/jr"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = json!([{
            "day": 1,
            "title": "Tokyo",
            "highlights": "Shibuya; Meiji Shrine",
            "notes": "Tickets – https://example.com/tickets",
        }]);
        let once = normalize_days(&raw);
        let twice = normalize_days(&serde_json::to_value(&once).unwrap());

        assert_eq!(once, twice);
    }

    #[test]
    fn legacy_links_collected_from_notes_and_hotel() {
        let raw = json!([{
            "day": 3,
            "title": "Osaka",
            "highlights": "Castle",
            "notes": "Book ahead – https://example.com/castle",
            "hotel": "Hotel Mondo – https://example.com/mondo",
        }]);
        let records = normalize_days(&raw);

        assert_eq!(
            records[0].helpful_links,
            vec![
                "Book ahead – https://example.com/castle",
                "Hotel Mondo – https://example.com/mondo",
            ],
        );
    }

    #[test]
    fn non_array_input_yields_empty_sequence() {
        assert!(normalize_days(&json!({"day": 1})).is_empty());
        assert!(normalize_days(&json!("nope")).is_empty());
    }

    #[test]
    fn null_and_malformed_entries_are_skipped() {
        let raw = json!([
            null,
            { "title": "no day number" },
            { "day": 4, "title": "Nara" },
        ]);
        let records = normalize_days(&raw);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day, 4);
    }

    #[test]
    fn missing_title_renders_as_empty_not_error() {
        let raw = json!([{ "day": 7 }]);
        let records = normalize_days(&raw);

        assert_eq!(records[0].title, "");
        assert!(records[0].lat.is_none());
    }
}
