use super::page::{escape_html, layout};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Handler for a single movie page (GET /movies/{id}).
///
/// - If the movie exists, responds with `200 OK` and an HTML detail page.
/// - If it does not, responds with `404 Not Found` and an HTML error page,
///   which still gets the stats footer.
#[tracing::instrument(skip(state))]
pub async fn movie_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, StatusCode> {
    // ---
    let movie = state.movies().get_movie(&id).await.map_err(|err| {
        tracing::error!("Failed to load movie {}: {:?}", id, err);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let Some(movie) = movie else {
        let content = format!("<p>No movie with id {}.</p>", escape_html(&id));
        return Ok((StatusCode::NOT_FOUND, Html(layout("Not Found", &content))).into_response());
    };

    let content = format!(
        "<dl>\n<dt>Year</dt><dd>{}</dd>\n<dt>Stars</dt><dd>{:.1}</dd>\n</dl>\n\
         <p><a href=\"/\">Back to the list</a></p>",
        movie.year, movie.stars
    );

    Ok(Html(layout(&movie.title, &content)).into_response())
}
