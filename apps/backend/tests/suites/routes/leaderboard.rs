use std::sync::Arc;

use actix_web::test;
use serde_json::Value;
use shapeshift_backend::build_state;
use shapeshift_backend::leaderboard::{Leaderboard, ScoreStore};

use crate::support::create_test_app;

#[actix_web::test]
async fn leaderboard_is_top_ten_highest_first() {
    let store = Arc::new(Leaderboard::in_memory());
    for (i, score) in [5u32, 80, 12, 44, 3, 61, 27, 99, 18, 7, 50, 2].into_iter().enumerate() {
        store.record_score(&format!("player{i}"), score).unwrap();
    }
    let app = create_test_app(build_state().with_seed(2).with_leaderboard(store).build()).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/leaderboard").to_request(),
    )
    .await;

    let scores: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["score"].as_u64().unwrap())
        .collect();
    assert_eq!(scores, vec![99, 80, 61, 50, 44, 27, 18, 12, 7, 5]);

    let date = body[0]["date"].as_str().unwrap();
    assert!(
        time::OffsetDateTime::parse(date, &time::format_description::well_known::Rfc3339).is_ok(),
        "date should be RFC 3339, got {date}"
    );
}

#[actix_web::test]
async fn score_tied_with_last_place_does_not_enter_full_board() {
    let store = Arc::new(Leaderboard::in_memory());
    for i in 0..10u32 {
        store.record_score(&format!("p{i}"), 42 + i).unwrap();
    }
    let before = store.top_scores();
    let app = create_test_app(
        build_state()
            .with_seed(2)
            .with_leaderboard(store.clone())
            .build(),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/game/scores")
        .set_json(serde_json::json!({"name": "late", "score": 42}))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    assert_eq!(store.top_scores(), before);
}
