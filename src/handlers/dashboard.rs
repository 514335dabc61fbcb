use axum::http::header;
use axum::response::{Html, IntoResponse};

// Assets are embedded at compile time; the binary ships self-contained.

/// GET / - The dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// GET /static/css/style.css
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../static/css/style.css"),
    )
}

/// GET /static/js/script.js
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../static/js/script.js"),
    )
}
