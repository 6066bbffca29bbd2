use anyhow::{ensure, Result};
use axum_page_stats::{create_router_from, domain::QueryLog};

mod common;

use common::{body_text, demo_router, stat_value, test_config, TestServer};

#[tokio::test]
async fn basic_integration_test() {
    // ---
    // Test that the router can be created successfully
    let _router = demo_router(&test_config(true));
}

#[tokio::test]
async fn health_endpoint_works() -> Result<()> {
    // ---
    let (app, _) = demo_router(&test_config(true));
    let server = TestServer::new(app).await;

    let response = server.client.get(server.url("/health")).send().await?;

    assert!(response.status().is_success());

    // JSON has no closing body tag, so it is served untouched.
    let body = response.text().await?;
    let json: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(json["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_page_carries_stats_footer() -> Result<()> {
    // ---
    let (app, query_log) = demo_router(&test_config(true));
    let server = TestServer::new(app).await;

    let response = server.client.get(server.url("/")).send().await?;
    assert_eq!(response.status(), 200);

    let declared = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    let body = response.text().await?;

    assert_eq!(declared, Some(body.len()));
    ensure!(body.contains("The Matrix"), "catalogue missing from page");
    ensure!(body.contains(r#"<div id="page_stats""#), "stats missing: {body}");
    assert_eq!(stat_value(&body, "Number of Queries:"), Some("1"));
    assert_eq!(query_log.query_count(), 1);

    // The fragment sits right before the closing tag.
    let fragment_end = body.find("</table></div>").unwrap();
    let close = body.find("</body>").unwrap();
    assert_eq!(fragment_end + "</table></div>".len(), close);
    Ok(())
}

#[tokio::test]
async fn root_page_without_debug_is_plain() -> Result<()> {
    // ---
    let (app, query_log) = demo_router(&test_config(false));
    let server = TestServer::new(app).await;

    let body = server.client.get(server.url("/")).send().await?.text().await?;

    ensure!(body.contains("The Matrix"));
    ensure!(!body.contains("page_stats_value"), "unexpected stats: {body}");
    // The handler still queries; only the reporting is disabled.
    assert_eq!(query_log.query_count(), 1);
    Ok(())
}

#[tokio::test]
async fn missing_movie_page_is_404_with_stats() -> Result<()> {
    // ---
    let (app, _) = demo_router(&test_config(true));

    let response = common::get(app, "/movies/nope").await;
    assert_eq!(response.status(), 404);

    let body = body_text(response).await;
    ensure!(body.contains("No movie with id nope."));
    assert_eq!(stat_value(&body, "Number of Queries:"), Some("1"));
    Ok(())
}

#[tokio::test]
async fn movie_page_works() -> Result<()> {
    // ---
    let (app, _) = demo_router(&test_config(true));

    let response = common::get(app, "/movies/2").await;
    assert_eq!(response.status(), 200);

    let body = body_text(response).await;
    ensure!(body.contains("<title>Spirited Away</title>"));
    ensure!(body.contains("<dd>2001</dd>"));
    Ok(())
}

#[tokio::test]
async fn stylesheet_is_served() -> Result<()> {
    // ---
    let (app, _) = demo_router(&test_config(true));

    let response = common::get(app, "/page-stats/default.css").await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "text/css; charset=utf-8"
    );

    let body = body_text(response).await;
    ensure!(body.contains("td.page_stats_value"));
    Ok(())
}

#[tokio::test]
async fn router_follows_the_config_it_is_given() -> Result<()> {
    // ---
    // Nothing here sets PAGE_STATS_DEBUG; the switch comes from the config.
    let annotated = create_router_from(&test_config(true))?;
    let body = body_text(common::get(annotated, "/").await).await;
    ensure!(body.contains("page_stats_value"), "stats missing: {body}");

    let plain = create_router_from(&test_config(false))?;
    let body = body_text(common::get(plain, "/").await).await;
    ensure!(!body.contains("page_stats_value"), "unexpected stats: {body}");
    Ok(())
}

#[tokio::test]
async fn invalid_routes_return_404() {
    // ---
    let (app, _) = demo_router(&test_config(true));

    let response = common::get(app, "/nonexistent").await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn server_handles_concurrent_requests() {
    // ---
    let (app, query_log) = demo_router(&test_config(true));
    let server = TestServer::new(app).await;

    // Make multiple concurrent requests
    let futures = (0..10).map(|_| server.client.get(server.url("/")).send());

    let responses = futures::future::join_all(futures).await;

    // All requests should succeed
    for response in responses {
        let response = response.expect("Request should succeed");
        assert_eq!(response.status(), 200);
    }
    assert_eq!(query_log.query_count(), 10);
}
