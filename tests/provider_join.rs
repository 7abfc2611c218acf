//! Integration tests for the all-or-nothing provider join
//!
//! Runs the combined fetcher against loopback HTTP listeners serving canned
//! responses, verifying that a bundle is produced only when both provider
//! calls succeed.

use std::net::SocketAddr;

use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use dailyword::content::{ContentFetcher, ContentSource, TextClient, WordClient};

const WORD_BODY: &str = r#"{"word":"ephemeral","definitions":[{"text":"Lasting a very short time.","partOfSpeech":"adjective"}],"note":"From Greek ephemeros."}"#;

const TEXTS_BODY: &str = r#"["Bacon ipsum dolor amet.","Short ribs brisket pork belly."]"#;

/// Builds a canned HTTP/1.1 response with the right content length
fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

/// Serves one connection with the given response, then stops
async fn serve_once(response: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind loopback listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 2048];
            let _ = stream.read(&mut request).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    addr
}

fn fetcher_against(word_addr: SocketAddr, text_addr: SocketAddr) -> ContentFetcher {
    let client = Client::new();
    ContentFetcher::with_clients(
        WordClient::with_base_url(client.clone(), format!("http://{}", word_addr)),
        TextClient::with_base_url(client, format!("http://{}", text_addr)),
    )
}

#[tokio::test]
async fn test_both_providers_ok_produces_full_bundle() {
    let word_addr = serve_once(http_response("200 OK", WORD_BODY)).await;
    let text_addr = serve_once(http_response("200 OK", TEXTS_BODY)).await;

    let fetcher = fetcher_against(word_addr, text_addr);
    let bundle = fetcher.fetch().await.expect("fetch should succeed");

    assert_eq!(bundle.words.len(), 1);
    assert_eq!(bundle.words[0].word, "ephemeral");
    assert_eq!(
        bundle.words[0].definitions[0].part_of_speech.as_deref(),
        Some("adjective")
    );
    assert_eq!(bundle.texts.len(), 2);
}

#[tokio::test]
async fn test_word_provider_failure_fails_the_whole_fetch() {
    let word_addr = serve_once(http_response("500 Internal Server Error", "")).await;
    let text_addr = serve_once(http_response("200 OK", TEXTS_BODY)).await;

    let fetcher = fetcher_against(word_addr, text_addr);

    assert!(
        fetcher.fetch().await.is_err(),
        "A failing word provider must fail the fetch even when texts succeed"
    );
}

#[tokio::test]
async fn test_text_provider_failure_fails_the_whole_fetch() {
    let word_addr = serve_once(http_response("200 OK", WORD_BODY)).await;
    let text_addr = serve_once(http_response("500 Internal Server Error", "")).await;

    let fetcher = fetcher_against(word_addr, text_addr);

    assert!(
        fetcher.fetch().await.is_err(),
        "A failing text provider must fail the fetch even when the word succeeds"
    );
}

#[tokio::test]
async fn test_unparsable_provider_body_fails_the_fetch() {
    let word_addr = serve_once(http_response("200 OK", "<html>not json</html>")).await;
    let text_addr = serve_once(http_response("200 OK", TEXTS_BODY)).await;

    let fetcher = fetcher_against(word_addr, text_addr);

    assert!(fetcher.fetch().await.is_err());
}
