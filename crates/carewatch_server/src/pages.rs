//! Static views.

use axum::response::Html;

const HOME_VIEW: &str = include_str!("../views/home.html");
const PREDICT_VIEW: &str = include_str!("../views/predict.html");

/// Home page.
pub(crate) async fn home() -> Html<&'static str> {
    Html(HOME_VIEW)
}

/// Upload and prediction page.
pub(crate) async fn prediction() -> Html<&'static str> {
    Html(PREDICT_VIEW)
}
