//! Integration tests for `SpeechClient` using wiremock HTTP mocks.

use scamwatch_transcriber::{SpeechClient, TranscribeError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_temp_wav(bytes: &[u8]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("scamwatch-test-{}.wav", uuid::Uuid::new_v4()));
    std::fs::write(&path, bytes).expect("write wav fixture");
    path
}

#[tokio::test]
async fn transcribe_wav_posts_bytes_and_returns_transcript() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recognize"))
        .and(header("content-type", "audio/wav"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "transcript": "act now and double your coins"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let wav = write_temp_wav(b"RIFF....WAVEfmt ");
    let client = SpeechClient::new(&server.uri(), 30).expect("client");
    let transcript = client.transcribe_wav(&wav).await.expect("transcript");
    std::fs::remove_file(&wav).ok();

    assert_eq!(transcript, "act now and double your coins");

    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests[0].body, b"RIFF....WAVEfmt ");
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recognize"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let wav = write_temp_wav(b"RIFF");
    let client = SpeechClient::new(&server.uri(), 30).expect("client");
    let err = client.transcribe_wav(&wav).await.expect_err("should fail");
    std::fs::remove_file(&wav).ok();

    match err {
        TranscribeError::Api { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn missing_wav_file_is_an_io_error() {
    let server = MockServer::start().await;
    let client = SpeechClient::new(&server.uri(), 30).expect("client");

    let missing = std::env::temp_dir().join("scamwatch-does-not-exist.wav");
    let err = client
        .transcribe_wav(&missing)
        .await
        .expect_err("should fail");
    assert!(matches!(err, TranscribeError::Io(_)));
}
