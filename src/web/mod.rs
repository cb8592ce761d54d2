mod page;

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Form, Router};
use serde::Deserialize;

use crate::analyzer::SiteAnalyzer;

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    pub url: String,
}

/// `GET /` shows the form, `POST /` analyzes the submitted URL.
pub fn router(analyzer: Arc<SiteAnalyzer>) -> Router {
    Router::new()
        .route("/", get(show_form).post(analyze_site))
        .with_state(analyzer)
}

async fn show_form() -> Html<String> {
    Html(page::render(None, None))
}

async fn analyze_site(
    State(analyzer): State<Arc<SiteAnalyzer>>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    tracing::info!(target: "web", url = %form.url, "analysis requested");
    let verdict = analyzer.analyze(&form.url).await;
    Html(page::render(Some(&form.url), Some(verdict.label())))
}
