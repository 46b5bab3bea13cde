//! Dashboard Page Route
//!
//! Serves the single dashboard page the whole UI lives in.
//!
//! - GET / - The embedded dashboard page
//!
//! The page is compiled into the binary; widget rendering and chart drawing
//! happen browser-side, fed by the JSON endpoints.

use axum::response::Html;

/// The dashboard page, embedded at compile time
const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
///
/// Serve the dashboard page.
pub async fn dashboard() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_carries_selectors_and_chart() {
        let Html(page) = dashboard().await;
        assert!(page.contains("state-option"));
        assert!(page.contains("county-option"));
        assert!(page.contains("date-option"));
        assert!(page.contains("bar-chart"));
    }
}
