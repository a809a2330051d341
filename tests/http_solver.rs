//! HTTP solver adapter against a local wiremock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pairwise_engine::adapters::{HttpSolverConfig, HttpWeightSolver};
use pairwise_engine::domain::comparison::JudgmentValue;
use pairwise_engine::domain::session::{DecisionContext, EvaluationMode};
use pairwise_engine::ports::{
    SolverError, SolverRequest, SolverResponse, WeightSolver, WireComparison,
};

fn request() -> SolverRequest {
    SolverRequest {
        decision_context: DecisionContext::new().with("usage", "gaming"),
        evaluation_mode: EvaluationMode::Manual,
        comparisons: vec![
            WireComparison {
                item_a: "Performance".to_string(),
                item_b: "Graphics".to_string(),
                value: JudgmentValue::integer(3),
                favored: "Graphics".to_string(),
                dimension: None,
            },
            WireComparison {
                item_a: "Performance".to_string(),
                item_b: "Price".to_string(),
                value: JudgmentValue::Fraction {
                    numerator: 5,
                    denominator: 2,
                },
                favored: "Performance".to_string(),
                dimension: None,
            },
            WireComparison {
                item_a: "Graphics".to_string(),
                item_b: "Price".to_string(),
                value: JudgmentValue::integer(5),
                favored: "Graphics".to_string(),
                dimension: None,
            },
        ],
    }
}

fn solver(server: &MockServer) -> HttpWeightSolver {
    HttpWeightSolver::new(
        HttpSolverConfig::new(server.uri()).with_timeout(Duration::from_secs(2)),
    )
    .unwrap()
}

#[tokio::test]
async fn posts_payload_and_parses_weights() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process-comparisons"))
        .and(body_partial_json(json!({
            "decisionContext": { "usage": "gaming" },
            "evaluationMode": "manual",
            "comparisons": [
                { "itemA": "Performance", "itemB": "Graphics", "value": 3, "favored": "Graphics" },
                { "itemA": "Performance", "itemB": "Price", "value": "5/2", "favored": "Performance" },
                { "itemA": "Graphics", "itemB": "Price", "value": 5, "favored": "Graphics" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "weights": [
                { "item": "Graphics", "weight": 0.63 },
                { "item": "Performance", "weight": 0.26 },
                { "item": "Price", "weight": 0.11 }
            ],
            "consistency": { "isConsistent": true, "ratio": 0.03 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = solver(&server).solve(request()).await.unwrap();

    match response {
        SolverResponse::Success {
            weights,
            consistency,
        } => {
            assert_eq!(weights.len(), 3);
            assert_eq!(weights[0].item, "Graphics");
            assert!(consistency.is_consistent);
            assert_eq!(consistency.ratio, 0.03);
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer sk-solver"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "weights": [],
            "consistency": { "isConsistent": true, "ratio": 0.0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let solver = HttpWeightSolver::new(
        HttpSolverConfig::new(server.uri()).with_api_key("sk-solver"),
    )
    .unwrap();

    assert!(solver.solve(request()).await.is_ok());
}

#[tokio::test]
async fn inconsistent_verdict_keeps_failed_dimension() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "consistency": {
                "isConsistent": false,
                "ratio": 0.46,
                "message": "Judgments on Display are contradictory",
                "failedDimension": "Display"
            }
        })))
        .mount(&server)
        .await;

    let response = solver(&server).solve(request()).await.unwrap();

    assert_eq!(
        response,
        SolverResponse::inconsistent(0.46, "Judgments on Display are contradictory")
            .in_dimension("Display")
    );
}

#[tokio::test]
async fn error_body_on_bad_status_is_a_verdict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "message": "Matrix must contain at least 3 criteria"
        })))
        .mount(&server)
        .await;

    let response = solver(&server).solve(request()).await.unwrap();

    assert_eq!(
        response,
        SolverResponse::error("Matrix must contain at least 3 criteria")
    );
}

#[tokio::test]
async fn client_error_without_verdict_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string("unprocessable"))
        .mount(&server)
        .await;

    let err = solver(&server).solve(request()).await.unwrap_err();

    assert_eq!(err, SolverError::rejected(422, "unprocessable"));
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = solver(&server).solve(request()).await.unwrap_err();

    assert!(matches!(err, SolverError::Unavailable(_)));
}

#[tokio::test]
async fn malformed_success_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = solver(&server).solve(request()).await.unwrap_err();

    assert!(matches!(err, SolverError::Parse(_)));
}

#[tokio::test]
async fn slow_solver_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "error", "message": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let solver = HttpWeightSolver::new(
        HttpSolverConfig::new(server.uri()).with_timeout(Duration::from_secs(1)),
    )
    .unwrap();

    let err = solver.solve(request()).await.unwrap_err();

    assert_eq!(err, SolverError::timeout(1));
}

#[tokio::test]
async fn unreachable_solver_is_network_error() {
    let solver = HttpWeightSolver::new(
        HttpSolverConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    let err = solver.solve(request()).await.unwrap_err();

    assert!(matches!(err, SolverError::Network(_)));
}
