use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use condense_core::NO_SUMMARY_PLACEHOLDER;
use condense_core::models::generation::GenerationParams;
use condense_model::Summarizer;
use condense_model::error::SummarizeError;
use condense_model::huggingface::{
    HuggingFaceSettings, HuggingFaceSummarizer, endpoint_url, error_detail, parse_response,
    request_body,
};
use serde_json::json;

/// Reads one request: headers plus a sized or chunked body.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        let chunked = head.to_lowercase().contains("transfer-encoding: chunked");
        if (chunked && buf.ends_with(b"0\r\n\r\n"))
            || (!chunked && buf.len() >= end + 4 + content_length)
        {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serves one canned answer on a local port. The handle yields the raw
/// request that was received.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });

    (format!("http://{addr}/models"), handle)
}

#[test]
fn request_body_carries_generation_params() {
    let body = request_body("Some long text.", &GenerationParams::SUMMARY);
    assert_eq!(
        body,
        json!({
            "inputs": "Some long text.",
            "parameters": {"max_length": 150, "min_length": 30, "do_sample": false},
        })
    );
}

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(
        endpoint_url("https://host/models/", "facebook/bart-large-cnn"),
        "https://host/models/facebook/bart-large-cnn"
    );
    assert_eq!(endpoint_url("http://localhost:9000", "/m"), "http://localhost:9000/m");
}

#[test]
fn summarizer_uses_configured_base_url() {
    let settings = HuggingFaceSettings {
        base_url: "http://127.0.0.1:9000/models".to_string(),
        api_token: None,
    };
    let summarizer = HuggingFaceSummarizer::new("facebook/bart-large-cnn", &settings);
    assert_eq!(summarizer.endpoint(), "http://127.0.0.1:9000/models/facebook/bart-large-cnn");
    assert_eq!(summarizer.model_id(), "facebook/bart-large-cnn");
}

#[test]
fn array_response_becomes_records() {
    let records = parse_response(json!([{"summary_text": "X"}])).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].summary(), "X");
}

#[test]
fn record_without_summary_field() {
    let records = parse_response(json!([{}])).unwrap();
    assert_eq!(records[0].summary(), NO_SUMMARY_PLACEHOLDER);
}

#[test]
fn non_array_response_is_empty() {
    assert!(parse_response(json!([])).unwrap().is_empty());
    assert!(parse_response(json!({"summary_text": "X"})).unwrap().is_empty());
    assert!(parse_response(json!(null)).unwrap().is_empty());
}

#[test]
fn non_record_elements_are_skipped() {
    let records = parse_response(json!([{"summary_text": "X"}, "stray", 7])).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].summary(), "X");

    assert!(parse_response(json!(["just a string"])).unwrap().is_empty());
}

#[test]
fn error_detail_prefers_error_field() {
    assert_eq!(
        error_detail(503, r#"{"error":"Model is currently loading","estimated_time":20.0}"#),
        "Model is currently loading"
    );
    assert_eq!(error_detail(502, "Bad Gateway\n"), "Bad Gateway");
    assert_eq!(error_detail(500, ""), "http status: 500");
}

#[tokio::test]
async fn summarize_sends_token_and_decodes_records() {
    let (base_url, server) = serve_once("200 OK", r#"[{"summary_text":"Budget approved."}]"#);
    let settings = HuggingFaceSettings {
        base_url,
        api_token: Some("tok".to_string()),
    };
    let summarizer = HuggingFaceSummarizer::new("facebook/bart-large-cnn", &settings);

    let records = summarizer
        .summarize("Minutes of the planning meeting.", &GenerationParams::SUMMARY)
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].summary(), "Budget approved.");

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /models/facebook/bart-large-cnn "));
    assert!(request.contains("Bearer tok"));
    assert!(request.contains(r#""max_length":150"#));
}

#[tokio::test]
async fn error_status_carries_endpoint_message() {
    let (base_url, server) =
        serve_once("503 Service Unavailable", r#"{"error":"Model is currently loading"}"#);
    let settings = HuggingFaceSettings {
        base_url,
        api_token: None,
    };
    let summarizer = HuggingFaceSummarizer::new("facebook/bart-large-cnn", &settings);

    let err = summarizer
        .summarize("Some text.", &GenerationParams::SUMMARY)
        .await
        .unwrap_err();

    match err {
        SummarizeError::Invocation(msg) => assert_eq!(msg, "Model is currently loading"),
        other => panic!("expected invocation error, got {other:?}"),
    }

    let request = server.join().unwrap();
    assert!(!request.to_lowercase().contains("authorization"));
}
