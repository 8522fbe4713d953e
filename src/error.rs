use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tripdeck_itinerary::Language;

use crate::template::{NotFoundTemplate, ServerErrorTemplate, Template};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("template error: {0}")]
    Render(#[from] askama::Error),

    #[error("not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Error pages are diagnostic only and render in the default
        // language; no failure detail reaches the user as UI text.
        let template = Template::new(Language::En);

        match self {
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, template.render(NotFoundTemplate)).into_response()
            }
            AppError::Render(err) => {
                tracing::error!("template rendering failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    template.render(ServerErrorTemplate),
                )
                    .into_response()
            }
        }
    }
}
