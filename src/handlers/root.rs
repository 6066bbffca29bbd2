use super::page::{escape_html, layout};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Html};
use std::fmt::Write;

/// Index page: the whole catalogue as an HTML list.
///
/// Runs one catalogue query, so with page stats enabled the footer shows
/// `Number of Queries: 1`.
#[tracing::instrument(skip(state))]
pub async fn root_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    // ---
    let movies = state.movies().list_movies().await.map_err(|err| {
        tracing::error!("Failed to list movies: {:?}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let mut list = String::from("<ul>\n");
    for movie in &movies {
        let _ = writeln!(
            list,
            r#"<li><a href="/movies/{id}">{title}</a> ({year})</li>"#,
            id = escape_html(&movie.id),
            title = escape_html(&movie.title),
            year = movie.year,
        );
    }
    list.push_str("</ul>");

    let version = env!("CARGO_PKG_VERSION");
    let content = format!(
        "<p>Page stats demo v{version}. Pages below are timed and annotated when \
         <code>PAGE_STATS_DEBUG</code> is enabled.</p>\n{list}"
    );

    Ok(Html(layout("Movies", &content)))
}
