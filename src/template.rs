use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tripdeck_itinerary::Language;

pub(crate) mod filters {
    /// Translate a UI label against the active itinerary language.
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let active_language = askama::get_value::<String>(values, "active_language")
            .expect("Unable to get active_language from askama::get_value");

        Ok(rust_i18n::t!(value, locale = active_language).to_string())
    }
}

/// Renders askama templates with the active language injected, so the `t`
/// filter and the `<html lang>` attribute follow the itinerary language
/// rather than a fixed locale.
pub struct Template {
    active_language: Language,
}

impl Template {
    pub fn new(active_language: Language) -> Self {
        Self { active_language }
    }

    pub fn language(&self) -> Language {
        self.active_language
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "active_language",
            Box::new(self.active_language.to_string()),
        );

        template.render_with_values(&values)
    }

    pub fn to_html<T: askama::Template>(&self, template: T) -> Result<Html<String>, askama::Error> {
        self.render_with_values(template).map(Html)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("failed to render template: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Unknown or absent language values fall back to English rather
        // than rejecting the request.
        let active_language = parts
            .extract::<Query<LangQuery>>()
            .await
            .ok()
            .and_then(|query| query.0.lang)
            .and_then(|lang| Language::from_str(&lang).ok())
            .unwrap_or_default();

        Ok(Template::new(active_language))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerErrorTemplate;
