use actix_web::test;
use serde_json::{json, Value};
use shapeshift_backend::build_state;

use crate::support::create_test_app;
use crate::support::fixtures::{dead_end_state, single_exit_state, TARGET};

fn click(row: i64, col: i64) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/game/clicks")
        .set_json(json!({"row": row, "col": col}))
        .to_request()
}

#[actix_web::test]
async fn click_with_single_legal_replacement_is_applied() {
    let app = create_test_app(
        build_state()
            .with_seed(5)
            .with_initial_state(single_exit_state())
            .build(),
    )
    .await;

    let body: Value = test::call_and_read_body_json(&app, click(TARGET.0, TARGET.1)).await;

    assert_eq!(body["result"], "applied");
    assert_eq!(body["state"]["score"], 1);
    let cell = &body["state"]["grid"][1][2];
    assert_eq!(cell["shape"], "Circle");
    assert_eq!(cell["color"], "Yellow");
    assert_eq!(cell["cooldown"], 3);
}

#[actix_web::test]
async fn second_click_on_cooling_cell_is_ignored() {
    let app = create_test_app(
        build_state()
            .with_seed(5)
            .with_initial_state(single_exit_state())
            .build(),
    )
    .await;

    let first: Value = test::call_and_read_body_json(&app, click(TARGET.0, TARGET.1)).await;
    let second: Value = test::call_and_read_body_json(&app, click(TARGET.0, TARGET.1)).await;

    assert_eq!(second["result"], "ignored");
    assert_eq!(second["state"], first["state"]);
}

#[actix_web::test]
async fn out_of_bounds_click_is_ignored() {
    let app = create_test_app(
        build_state()
            .with_seed(5)
            .with_initial_state(single_exit_state())
            .build(),
    )
    .await;

    for (row, col) in [(-1, 0), (3, 0), (0, 6), (0, -1)] {
        let body: Value = test::call_and_read_body_json(&app, click(row, col)).await;
        assert_eq!(body["result"], "ignored");
        assert_eq!(body["state"]["score"], 0);
    }
}

#[actix_web::test]
async fn click_without_legal_replacement_ends_game() {
    let app = create_test_app(
        build_state()
            .with_seed(5)
            .with_initial_state(dead_end_state(21))
            .build(),
    )
    .await;

    let body: Value = test::call_and_read_body_json(&app, click(TARGET.0, TARGET.1)).await;
    assert_eq!(body, json!({"result": "game_over", "final_score": 21}));

    let state: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/game").to_request(),
    )
    .await;
    assert_eq!(state["isActive"], false);
    assert_eq!(state["score"], 21);

    // Inactive games ignore further clicks.
    let after: Value = test::call_and_read_body_json(&app, click(0, 0)).await;
    assert_eq!(after["result"], "ignored");
}
