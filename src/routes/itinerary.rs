use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use tripdeck_itinerary::{DayRecord, DaySelection, ItineraryStore, Span, ViewState, linkify};

use crate::error::AppError;
use crate::routes::AppState;
use crate::template::{Template, filters};

/// Option, language and day selection as they arrive on the query string.
/// Unknown values fall back to the defaults instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    option: Option<String>,
    lang: Option<String>,
    day: Option<String>,
}

impl ViewQuery {
    pub fn view_state(&self) -> ViewState {
        let mut view = ViewState::default();

        if let Some(option) = self.option.as_deref().and_then(|value| value.parse().ok()) {
            view.switch_option(option);
        }
        if let Some(language) = self.lang.as_deref().and_then(|value| value.parse().ok()) {
            view.switch_language(language);
        }

        view
    }

    pub fn day(&self) -> Option<u32> {
        self.day.as_deref().and_then(|value| value.parse().ok())
    }
}

/// One day-record prepared for rendering: linkified text fields plus the
/// active flag, keyed by `day` into both its selector button and its card.
pub struct DayCard {
    pub day: u32,
    pub date: Option<String>,
    pub title: String,
    pub km: Option<String>,
    pub time: Option<String>,
    pub notes: Vec<Span>,
    pub helpful_info: Vec<Span>,
    pub hotel: Vec<Span>,
    pub highlights: Vec<String>,
    pub helpful_links: Vec<Vec<Span>>,
    pub active: bool,
}

impl DayCard {
    fn from_record(record: &DayRecord, active: bool) -> Self {
        let linkify_opt = |field: &Option<String>| {
            field.as_deref().map(linkify).unwrap_or_default()
        };

        Self {
            day: record.day,
            date: record.date.clone(),
            title: record.title.clone(),
            km: record.km.clone(),
            time: record.time.clone(),
            notes: linkify_opt(&record.notes),
            helpful_info: linkify_opt(&record.helpful_info),
            hotel: linkify_opt(&record.hotel),
            highlights: record.highlights.clone(),
            helpful_links: record.helpful_links.iter().map(|entry| linkify(entry)).collect(),
            active,
        }
    }
}

/// Cards plus the neighbour days the mobile strip steps through.
pub struct CardsView {
    pub cards: Vec<DayCard>,
    pub prev_day: Option<u32>,
    pub next_day: Option<u32>,
}

pub fn build_cards(store: &ItineraryStore, view: &ViewState, requested_day: Option<u32>) -> CardsView {
    let records = store.current_days(view.active_option(), view.active_language());

    let Some(mut selection) = DaySelection::new(records) else {
        tracing::warn!(
            option = %view.active_option(),
            language = %view.active_language(),
            "no records to render for the active dataset",
        );
        return CardsView {
            cards: Vec::new(),
            prev_day: None,
            next_day: None,
        };
    };

    if let Some(day) = requested_day {
        selection.select(day);
    }

    let active = selection.active();
    let cards = records
        .iter()
        .map(|record| DayCard::from_record(record, record.day == active))
        .collect();

    CardsView {
        cards,
        prev_day: selection.clone().prev(),
        next_day: selection.clone().next(),
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cards: Vec<DayCard>,
    pub prev_day: Option<u32>,
    pub next_day: Option<u32>,
    pub active_option: String,
    pub active_language: String,
}

#[derive(askama::Template)]
#[template(path = "partials/day_cards.html")]
pub struct CardsTemplate {
    pub cards: Vec<DayCard>,
    pub prev_day: Option<u32>,
    pub next_day: Option<u32>,
}

/// GET / - the itinerary page
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let view = query.view_state();
    let CardsView {
        cards,
        prev_day,
        next_day,
    } = build_cards(&app.store, &view, query.day());

    Ok(template.to_html(IndexTemplate {
        cards,
        prev_day,
        next_day,
        active_option: view.active_option().to_string(),
        active_language: view.active_language().to_string(),
    })?)
}

/// GET /itinerary/cards - the day-selector and day-cards partial, fetched
/// by the client on option and language switches. A full replacement of
/// the previous markup, so no listeners leak across re-renders.
pub async fn cards(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let view = query.view_state();
    let CardsView {
        cards,
        prev_day,
        next_day,
    } = build_cards(&app.store, &view, query.day());

    Ok(template.to_html(CardsTemplate {
        cards,
        prev_day,
        next_day,
    })?)
}
