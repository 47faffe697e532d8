use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use lingolift_client::{BackendClient, ClientConfig, ClientError};
use lingolift_protocol::{FeatureSet, PartOfSpeech, TokenId};
use serde_json::{json, Value};

/// Serves `app` on an ephemeral port and returns its base URL.
async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test backend");
    });
    format!("http://{addr}")
}

async fn analysis(Json(request): Json<Value>) -> (StatusCode, Json<Value>) {
    if request["sentence"] != "Der Tisch" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error_message": "Sentence could not be analyzed"})),
        );
    }
    let tokens = json!([
        {"text": "Der", "lemma": "der", "upos": "DET", "ancestor": 1,
         "feature_set": {"kind": "noun", "case": "Nom", "number": "Sing", "gender": "Masc"}},
        {"text": "Tisch", "lemma": "Tisch", "upos": "NOUN",
         "feature_set": {"kind": "noun", "case": "Nom", "number": "Sing", "gender": "Masc"}},
    ]);
    (StatusCode::OK, Json(tokens))
}

async fn inflection(Json(request): Json<Value>) -> (StatusCode, Json<Value>) {
    let word = request["word"].as_str().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "pos": {"value": "VERB", "explanation": "verb"},
            "inflections": [
                {"word": "gehe", "morphology": {"Person": "1", "Number": "Sing", "Tense": "Pres"}},
                {"word": format!("{word}st"), "morphology": {"Person": "2", "Number": "Sing", "Tense": "Pres"}},
            ],
        })),
    )
}

fn backend() -> Router {
    Router::new()
        .route("/syntactical-analysis", post(analysis))
        .route("/inflection", post(inflection))
}

#[tokio::test]
async fn test_fetch_syntactical_analysis() {
    let host = spawn_backend(backend()).await;
    let client = BackendClient::new(ClientConfig::new(host)).unwrap();

    let sentence = client
        .fetch_syntactical_analysis("Der Tisch", Some("de"))
        .await
        .expect("analysis succeeds");

    assert_eq!(sentence.len(), 2);
    assert_eq!(sentence.tokens()[0].pos, PartOfSpeech::Det);
    assert!(matches!(sentence.tokens()[1].feature_set, Some(FeatureSet::Noun(_))));
    assert_eq!(sentence.ancestor(TokenId(0)).unwrap().text, "Tisch");
    assert_eq!(
        sentence.display(TokenId(0)).unwrap().to_string(),
        "(from: der);  refers to: Tisch; Determiner; Nominative Singular Masculine"
    );
}

#[tokio::test]
async fn test_bad_request_surfaces_error_message() {
    let host = spawn_backend(backend()).await;
    let client = BackendClient::new(ClientConfig::new(host)).unwrap();

    let err = client
        .fetch_syntactical_analysis("???", None)
        .await
        .unwrap_err();
    match err {
        ClientError::Application { endpoint, message } => {
            assert_eq!(endpoint, "syntactical-analysis");
            assert_eq!(message, "Sentence could not be analyzed");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_inflections() {
    let host = spawn_backend(backend()).await;
    let client = BackendClient::new(ClientConfig::new(format!("{host}/"))).unwrap();

    let inflections = client.fetch_inflections("geh").await.unwrap();
    assert_eq!(inflections.pos.value, "VERB");
    assert_eq!(inflections.gender, None);
    assert_eq!(inflections.inflections.len(), 2);
    assert_eq!(inflections.inflections[1].word, "gehst");
    assert_eq!(inflections.inflections[1].morphology["Person"], "2");
}

#[tokio::test]
async fn test_unknown_endpoint_is_unexpected() {
    let host = spawn_backend(Router::new()).await;
    let client = BackendClient::new(ClientConfig::new(host)).unwrap();

    let err = client.fetch_inflections("geh").await.unwrap_err();
    assert!(matches!(err, ClientError::Unexpected { status: 404, .. }));
}

#[tokio::test]
async fn test_invalid_sentence_is_rejected() {
    let app = Router::new().route(
        "/syntactical-analysis",
        post(|| async { Json(json!([{"text": "ja", "lemma": "ja", "upos": "INTJ", "ancestor": 4}])) }),
    );
    let host = spawn_backend(app).await;
    let client = BackendClient::new(ClientConfig::new(host)).unwrap();

    let err = client.fetch_syntactical_analysis("ja", None).await.unwrap_err();
    assert!(matches!(err, ClientError::Sentence(_)));
}
