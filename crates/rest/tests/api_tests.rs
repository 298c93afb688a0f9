//! HTTP tests for the catalog API over an in-memory SQLite catalog.

#![cfg(feature = "sqlite")]

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{RestTestHarness, song_ids};
use smdb_rest::ServerConfig;

// ============================================================================
// Song search
// ============================================================================

#[tokio::test]
async fn test_search_without_filters_returns_all_songs_by_title() {
    let harness = RestTestHarness::new();

    let response = harness.get("/songs").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["pageNum"], 1);
    assert_eq!(body["pageSize"], 20);
    assert_eq!(body["pageCount"], 1);
    assert_eq!(body["totalSongsCount"], 4);
    assert_eq!(song_ids(&body), vec!["s1", "s2", "s3", "s4"]);
}

#[tokio::test]
async fn test_search_meter_range() {
    let harness = RestTestHarness::new();

    let body: Value = harness.get("/songs?meterMin=10&meterMax=15").await.json();
    assert_eq!(body["totalSongsCount"], 3);
    assert_eq!(song_ids(&body), vec!["s2", "s3", "s4"]);

    let body: Value = harness.get("/songs?meterMin=10&meterMax=11").await.json();
    assert_eq!(song_ids(&body), vec!["s3"]);
}

#[tokio::test]
async fn test_search_keeps_every_chart_of_a_matching_song() {
    let harness = RestTestHarness::new();

    let body: Value = harness.get("/songs?stepstype=dance-double").await.json();
    assert_eq!(song_ids(&body), vec!["s2"]);

    let mut chart_ids: Vec<&str> = body["songs"][0]["charts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["chartId"].as_str().unwrap())
        .collect();
    chart_ids.sort();
    assert_eq!(chart_ids, vec!["c3", "c4"]);
}

#[tokio::test]
async fn test_search_substring_filters_ignore_case() {
    let harness = RestTestHarness::new();

    let body: Value = harness.get("/songs?title=BUTTER").await.json();
    assert_eq!(song_ids(&body), vec!["s1"]);

    let body: Value = harness.get("/songs?pack=konami%20orig").await.json();
    assert_eq!(song_ids(&body), vec!["s3", "s4"]);

    let body: Value = harness.get("/songs?chartCredit=naoki").await.json();
    assert_eq!(song_ids(&body), vec!["s3"]);
}

#[tokio::test]
async fn test_search_ignores_case_of_non_ascii_text() {
    let harness = RestTestHarness::with_extra_rows(
        "
        INSERT INTO song (songid, title, artist, banner_path, music_path, song_dir_path, file_extension) VALUES
            ('s5', 'ÉTOILE', 'Éric', NULL, 'songs/s5/music.ogg', 'songs/s5', 'sm');
        INSERT INTO pack_song_map (packid, songid) VALUES ('p2', 's5');
        INSERT INTO chart (chartid, songid, chartname, stepstype, description, chartstyle, difficulty,
                           meter, credit, stops_count, delays_count, warps_count, scrolls_count,
                           fakes_count, speeds_count, stream, voltage, air, freeze, chaos) VALUES
            ('c7', 's5', '', 'dance-single', NULL, '', 'Hard', 8, 'Éric', 0, 0, 0, 0, 0, 0, 0.5, 0.5, 0.2, 0.0, 0.2);
        INSERT INTO song_bpm (songid, song_bpm) VALUES ('s5', 140.0);
        INSERT INTO song_time_signature (songid, time_signature_numerator, time_signature_denominator) VALUES
            ('s5', 4, 4);
        ",
    );

    let body: Value = harness.get("/songs?title=%C3%89TOILE").await.json();
    assert_eq!(song_ids(&body), vec!["s5"]);

    let body: Value = harness.get("/songs?title=%C3%A9toile").await.json();
    assert_eq!(song_ids(&body), vec!["s5"]);

    let body: Value = harness.get("/songs?artist=%C3%A9ric").await.json();
    assert_eq!(song_ids(&body), vec!["s5"]);
}

#[tokio::test]
async fn test_search_time_signature_and_bpm() {
    let harness = RestTestHarness::new();

    let body: Value = harness
        .get("/songs?timeSignatureNumerator=7&timeSignatureDenominator=8")
        .await
        .json();
    assert_eq!(song_ids(&body), vec!["s3"]);

    let body: Value = harness.get("/songs?bpmMin=250").await.json();
    assert_eq!(song_ids(&body), vec!["s2"]);
}

#[tokio::test]
async fn test_search_chart_difficulty_range() {
    let harness = RestTestHarness::new();

    let body: Value = harness
        .get("/songs?chartDifficultyMeterMin=13&chartDifficultyMeterMax=14")
        .await
        .json();
    assert_eq!(song_ids(&body), vec!["s2", "s4"]);

    // A lone bound does not filter
    let body: Value = harness.get("/songs?chartDifficultyMeterMin=13").await.json();
    assert_eq!(body["totalSongsCount"], 4);
}

#[tokio::test]
async fn test_search_no_match_is_empty_page() {
    let harness = RestTestHarness::new();

    let response = harness.get("/songs?artist=nobody").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["totalSongsCount"], 0);
    assert_eq!(body["pageCount"], 0);
    assert_eq!(body["songs"], json!([]));
}

#[tokio::test]
async fn test_search_pagination() {
    let harness = RestTestHarness::new();

    let body: Value = harness.get("/songs?pageSize=3&page=1").await.json();
    assert_eq!(body["pageCount"], 2);
    assert_eq!(song_ids(&body), vec!["s1", "s2", "s3"]);

    let body: Value = harness.get("/songs?pageSize=3&page=2").await.json();
    assert_eq!(body["pageNum"], 2);
    assert_eq!(song_ids(&body), vec!["s4"]);

    let body: Value = harness.get("/songs?pageSize=3&page=3").await.json();
    assert_eq!(body["totalSongsCount"], 4);
    assert_eq!(body["songs"], json!([]));
}

#[tokio::test]
async fn test_search_page_size_is_clamped() {
    let config = ServerConfig {
        default_page_size: 2,
        max_page_size: 3,
        ..ServerConfig::for_testing()
    };
    let harness = RestTestHarness::with_config(config);

    let body: Value = harness.get("/songs").await.json();
    assert_eq!(body["pageSize"], 2);
    assert_eq!(body["pageCount"], 2);

    let body: Value = harness.get("/songs?pageSize=1000").await.json();
    assert_eq!(body["pageSize"], 3);

    let body: Value = harness.get("/songs?pageSize=0&page=-2").await.json();
    assert_eq!(body["pageSize"], 1);
    assert_eq!(body["pageNum"], 1);
}

#[tokio::test]
async fn test_search_page_size_never_exceeds_hard_cap() {
    let config = ServerConfig {
        max_page_size: 500,
        ..ServerConfig::for_testing()
    };
    let harness = RestTestHarness::with_config(config);

    let body: Value = harness.get("/songs?pageSize=500").await.json();
    assert_eq!(body["pageSize"], 100);
}

#[tokio::test]
async fn test_search_invalid_parameter_is_bad_request() {
    let harness = RestTestHarness::new();

    let response = harness.get("/songs?meterMin=ten").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid");
    assert!(body["error"]["message"].as_str().unwrap().contains("meterMin"));
}

#[tokio::test]
async fn test_search_injection_attempt_is_plain_text() {
    let harness = RestTestHarness::new();

    let response = harness
        .get("/songs?title=%27%20OR%201%3D1%20--")
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["totalSongsCount"], 0);
}

#[tokio::test]
async fn test_search_query_failure_is_internal_error() {
    let harness = RestTestHarness::without_schema();

    let response = harness.get("/songs").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "exception");
    assert!(!body["error"]["message"].as_str().unwrap().contains("no such table"));
}

// ============================================================================
// Song lookup
// ============================================================================

#[tokio::test]
async fn test_get_song() {
    let harness = RestTestHarness::new();

    let response = harness.get("/songs/s3").await;
    response.assert_status(StatusCode::OK);

    let song: Value = response.json();
    assert_eq!(song["songId"], "s3");
    assert_eq!(song["title"], "Paranoia");
    assert_eq!(song["bannerPath"], "");
    assert_eq!(song["packId"], "p2");
    assert_eq!(song["packName"], "Konami Originals");
    assert_eq!(song["bpms"], json!([{"value": 180.0}]));
    assert_eq!(song["charts"].as_array().unwrap().len(), 1);
    assert_eq!(song["charts"][0]["description"], "");

    let mut signatures: Vec<(i64, i64)> = song["timeSignatures"]
        .as_array()
        .unwrap()
        .iter()
        .map(|ts| {
            (
                ts["numerator"].as_i64().unwrap(),
                ts["denominator"].as_i64().unwrap(),
            )
        })
        .collect();
    signatures.sort();
    assert_eq!(signatures, vec![(4, 4), (7, 8)]);
}

#[tokio::test]
async fn test_get_song_collapses_cross_product() {
    let harness = RestTestHarness::new();

    // 2 charts x 2 tempo values
    let song: Value = harness.get("/songs/s2").await.json();
    assert_eq!(song["charts"].as_array().unwrap().len(), 2);
    assert_eq!(song["bpms"].as_array().unwrap().len(), 2);
    assert_eq!(song["timeSignatures"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_missing_song_is_not_found() {
    let harness = RestTestHarness::new();

    let response = harness.get("/songs/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not-found");
}

// ============================================================================
// Packs
// ============================================================================

#[tokio::test]
async fn test_get_pack() {
    let harness = RestTestHarness::new();

    let response = harness.get("/packs/p1").await;
    response.assert_status(StatusCode::OK);

    let pack: Value = response.json();
    assert_eq!(pack["packId"], "p1");
    assert_eq!(pack["packName"], "DDR Classics");
    assert_eq!(pack["downloadLink"], "https://example.com/p1.zip");
    assert_eq!(pack["bannerPath"], "packs/p1/banner.png");
    assert_eq!(song_ids(&pack), vec!["s1", "s2"]);
}

#[tokio::test]
async fn test_get_pack_null_banner_is_empty() {
    let harness = RestTestHarness::new();

    let pack: Value = harness.get("/packs/p2").await.json();
    assert_eq!(pack["bannerPath"], "");
    assert_eq!(song_ids(&pack), vec!["s3", "s4"]);
}

#[tokio::test]
async fn test_get_missing_pack_is_not_found() {
    let harness = RestTestHarness::new();

    harness
        .get("/packs/missing")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_pack_is_accepted() {
    let harness = RestTestHarness::new();

    let response = harness
        .post(
            "/packs",
            json!({"downloadLink": "https://example.com/new-pack.zip"}),
        )
        .await;
    response.assert_status(StatusCode::ACCEPTED);

    let body: Value = response.json();
    assert_eq!(body["status"], "pending-review");
    assert_eq!(body["downloadLink"], "https://example.com/new-pack.zip");
}

#[tokio::test]
async fn test_submit_pack_rejects_bad_links() {
    let harness = RestTestHarness::new();

    for body in [
        json!({}),
        json!({"downloadLink": ""}),
        json!({"downloadLink": "not a url"}),
        json!({"downloadLink": "ftp://example.com/pack.zip"}),
    ] {
        let response = harness.post("/packs", body.clone()).await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "body {} was not rejected",
            body
        );
    }
}

#[tokio::test]
async fn test_submit_pack_does_not_persist() {
    let harness = RestTestHarness::new();

    harness
        .post("/packs", json!({"downloadLink": "https://example.com/p3.zip"}))
        .await
        .assert_status(StatusCode::ACCEPTED);

    let body: Value = harness.get("/songs").await.json();
    assert_eq!(body["totalSongsCount"], 4);
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let harness = RestTestHarness::new();

    let response = harness.get("/health").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "sqlite");
}

#[tokio::test]
async fn test_liveness() {
    let harness = RestTestHarness::new();
    harness.get("/_liveness").await.assert_status(StatusCode::OK);
}
