use std::time::Duration;

use quakewatch::feed::{FeedError, FeedSource, GeoNetFeed, MmiFilter};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn feature(public_id: &str, locality: &str, mmi: &str) -> String {
    format!(
        r#"{{
            "type": "Feature",
            "geometry": {{"type": "Point", "coordinates": [172.5, -41.8]}},
            "properties": {{
                "publicID": "{public_id}",
                "time": "2021-03-04T10:15:30.000Z",
                "depth": 12.3,
                "magnitude": 3.4,
                "mmi": {mmi},
                "locality": "{locality}",
                "quality": "best"
            }}
        }}"#
    )
}

fn collection(features: &[String]) -> String {
    format!(
        r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
        features.join(",")
    )
}

async fn mount_body(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/quake"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

// ============================================================================
// Success Paths
// ============================================================================

#[tokio::test]
async fn test_geonet_fetch_indexes_features_in_order() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        collection(&[
            feature("2021p000003", "Seddon", "3"),
            feature("2021p000001", "Taupo", "null"),
            feature("2021p000002", "Kaikoura", "5"),
        ]),
    )
    .await;

    let feed = GeoNetFeed::new(server.uri(), None).unwrap();
    let quakes = feed.fetch(MmiFilter::default()).await.unwrap();

    let ids: Vec<&str> = quakes.iter().map(|q| q.public_id.as_str()).collect();
    assert_eq!(ids, vec!["2021p000003", "2021p000001", "2021p000002"]);
    assert_eq!(quakes.get("2021p000001").unwrap().mmi, None);
    assert_eq!(quakes.get("2021p000002").unwrap().mmi, Some(5.0));
}

#[tokio::test]
async fn test_geonet_empty_feature_list() {
    let server = MockServer::start().await;
    mount_body(&server, collection(&[])).await;

    let feed = GeoNetFeed::new(server.uri(), None).unwrap();
    let quakes = feed.fetch(MmiFilter::default()).await.unwrap();
    assert!(quakes.is_empty());
}

#[tokio::test]
async fn test_geonet_duplicate_ids_last_write_wins() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        collection(&[
            feature("2021p000001", "First", "3"),
            feature("2021p000002", "Other", "3"),
            feature("2021p000001", "Revised", "4"),
        ]),
    )
    .await;

    let feed = GeoNetFeed::new(server.uri(), None).unwrap();
    let quakes = feed.fetch(MmiFilter::default()).await.unwrap();
    assert_eq!(quakes.len(), 2);
    assert_eq!(quakes.get("2021p000001").unwrap().locality, "Revised");
}

#[tokio::test]
async fn test_geonet_sends_sentinel_without_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quake"))
        .and(query_param("MMI", "-1"))
        .and(header("accept", "application/vnd.geo+json;version=2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(collection(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let feed = GeoNetFeed::new(server.uri(), None).unwrap();
    feed.fetch(MmiFilter(None)).await.unwrap();
}

#[tokio::test]
async fn test_geonet_sends_filter_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quake"))
        .and(query_param("MMI", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(collection(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let feed = GeoNetFeed::new(format!("{}/", server.uri()), None).unwrap();
    feed.fetch(MmiFilter(Some(4))).await.unwrap();
}

// ============================================================================
// Failure Paths
// ============================================================================

#[tokio::test]
async fn test_geonet_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quake"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let feed = GeoNetFeed::new(server.uri(), None).unwrap();
    let err = feed.fetch(MmiFilter::default()).await.unwrap_err();
    assert_eq!(
        err,
        FeedError::Http {
            status: 503,
            reason: "Service Unavailable".to_string()
        }
    );
    assert_eq!(err.to_string(), "HTTP Error: 503 Service Unavailable");
}

#[tokio::test]
async fn test_geonet_malformed_json() {
    let server = MockServer::start().await;
    mount_body(&server, "<html>not json</html>".to_string()).await;

    let feed = GeoNetFeed::new(server.uri(), None).unwrap();
    let err = feed.fetch(MmiFilter::default()).await.unwrap_err();
    assert!(matches!(err, FeedError::Decode(_)));
}

#[tokio::test]
async fn test_geonet_missing_features() {
    let server = MockServer::start().await;
    mount_body(&server, r#"{"type": "FeatureCollection"}"#.to_string()).await;

    let feed = GeoNetFeed::new(server.uri(), None).unwrap();
    let err = feed.fetch(MmiFilter::default()).await.unwrap_err();
    assert!(matches!(err, FeedError::Decode(_)));
}

#[tokio::test]
async fn test_geonet_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quake"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(collection(&[]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let feed = GeoNetFeed::new(server.uri(), Some(Duration::from_millis(200))).unwrap();
    let err = feed.fetch(MmiFilter::default()).await.unwrap_err();
    assert!(matches!(err, FeedError::Timeout(_)), "got {err:?}");
    assert!(err.to_string().starts_with("Timeout: "));
}

#[tokio::test]
async fn test_geonet_connection_refused() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let feed = GeoNetFeed::new(format!("http://{addr}"), None).unwrap();
    let err = feed.fetch(MmiFilter::default()).await.unwrap_err();
    assert!(matches!(err, FeedError::Connection(_)), "got {err:?}");
    assert!(err.to_string().starts_with("Connection Error: "));
}
