// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

//! Integration tests for the OpenAI client and the remote-then-heuristic pipeline.
//!
//! Uses `wiremock` to mock the chat completions endpoint so no real API is needed.

#![cfg(feature = "openai")]

mod helpers;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use git_autocommit::config::Config;
use git_autocommit::domain::{ChangeStatus, MessageSource};
use git_autocommit::error::Error;
use git_autocommit::services::llm::openai::OpenAiClient;
use git_autocommit::services::llm::{ChatClient, RemoteCapability, resolve_capability};
use git_autocommit::services::policy::MessagePolicy;
use git_autocommit::services::remote::RemoteSynthesizer;
use helpers::make_change_set;

// ─── Test helpers ────────────────────────────────────────────────────────────

fn openai_config(server_url: &str) -> Config {
    Config {
        openai_base_url: Some(server_url.to_string()),
        openai_api_key: Some("test-key".into()),
        openai_model: "gpt-4o-mini".into(),
        timeout_secs: 5,
        ..Config::default()
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

// ─── OpenAI client ───────────────────────────────────────────────────────────

#[tokio::test]
async fn openai_completion_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 100,
            "messages": [
                { "role": "system", "content": "system" },
                { "role": "user", "content": "user" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            "  Add retry to the fetch loop\n",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&openai_config(&server.uri())).unwrap();
    let reply = client.complete("system", "user").await.unwrap();

    assert_eq!(reply, "Add retry to the fetch loop");
}

#[tokio::test]
async fn openai_trailing_slash_in_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&openai_config(&format!("{}/", server.uri()))).unwrap();
    assert_eq!(client.complete("s", "u").await.unwrap(), "ok");
}

#[tokio::test]
async fn openai_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&openai_config(&server.uri())).unwrap();
    match client.complete("s", "u").await {
        Err(Error::Provider { provider, message }) => {
            assert_eq!(provider, "openai");
            assert!(message.contains("500"), "got: {message}");
            assert!(message.contains("upstream exploded"), "got: {message}");
        }
        other => panic!("expected Provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn openai_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&openai_config(&server.uri())).unwrap();
    let err = client.complete("s", "u").await.unwrap_err();
    assert!(err.to_string().contains("401"), "got: {err}");
}

#[tokio::test]
async fn openai_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&openai_config(&server.uri())).unwrap();
    match client.complete("s", "u").await {
        Err(Error::Provider { message, .. }) => {
            assert!(message.starts_with("malformed response"), "got: {message}");
        }
        other => panic!("expected Provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn openai_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&openai_config(&server.uri())).unwrap();
    let err = client.complete("s", "u").await.unwrap_err();
    assert!(err.to_string().contains("no message"), "got: {err}");
}

#[tokio::test]
async fn openai_connection_refused() {
    // Nothing listens on the discard port
    let client = OpenAiClient::new(&openai_config("http://127.0.0.1:9")).unwrap();
    assert!(matches!(
        client.complete("s", "u").await,
        Err(Error::Provider { .. })
    ));
}

#[tokio::test]
async fn openai_request_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Config {
        timeout_secs: 1,
        ..openai_config(&server.uri())
    };
    let client = OpenAiClient::new(&config).unwrap();

    match client.complete("s", "u").await {
        Err(Error::Provider { provider, message }) => {
            assert_eq!(provider, "openai");
            assert_eq!(message, "request timed out");
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}

// ─── Capability resolution ───────────────────────────────────────────────────

#[test]
fn missing_key_is_unavailable() {
    let config = Config::default();
    match resolve_capability(&config) {
        RemoteCapability::Unavailable(reason) => assert!(reason.contains("API key")),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn configured_key_is_ready() {
    let config = openai_config("http://localhost:1234");
    let capability = resolve_capability(&config);
    assert!(capability.is_ready());
    assert_eq!(format!("{capability:?}"), "Ready(openai/gpt-4o-mini)");
}

// ─── Full pipeline ───────────────────────────────────────────────────────────

#[tokio::test]
async fn conventional_reply_flows_through_policy() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            "```\nfeat(http): add retry with backoff\n```",
        )))
        .mount(&server)
        .await;

    let config = Config {
        conventional_commits: true,
        prefix: "feat:".into(),
        ..openai_config(&server.uri())
    };
    let remote = RemoteSynthesizer::new(resolve_capability(&config));
    let style = config.style_policy();
    let changes = make_change_set(&[(ChangeStatus::Modified, "src/http.rs")]);

    let message = MessagePolicy::new(&style, Some(&remote))
        .generate(&changes, "+retry()", true)
        .await;

    assert_eq!(message.text, "feat(http): add retry with backoff");
    assert_eq!(message.source, MessageSource::Remote);
}

#[tokio::test]
async fn slow_server_falls_back_to_heuristic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("feat: too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        timeout_secs: 1,
        prefix: "feat:".into(),
        ..openai_config(&server.uri())
    };
    let remote = RemoteSynthesizer::new(resolve_capability(&config));
    let style = config.style_policy();
    let changes = make_change_set(&[(ChangeStatus::Added, "src/retry.py")]);

    let message = MessagePolicy::new(&style, Some(&remote))
        .generate(&changes, "+retry()", true)
        .await;

    assert_eq!(message.text, "feat: Add retry.py");
    assert_eq!(message.source, MessageSource::Heuristic);
}

#[tokio::test]
async fn server_error_falls_back_to_heuristic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = openai_config(&server.uri());
    let remote = RemoteSynthesizer::new(resolve_capability(&config));
    let style = config.style_policy();
    let changes = make_change_set(&[
        (ChangeStatus::Added, "docs/intro.md"),
        (ChangeStatus::Added, "docs/setup.md"),
    ]);

    let message = MessagePolicy::new(&style, Some(&remote))
        .generate(&changes, "+# Intro", true)
        .await;

    assert_eq!(message.text, "Add documentation files");
    assert_eq!(message.source, MessageSource::Heuristic);
}
