use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{create_test_config, start_test_server};

const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>rust at DuckDuckGo</title></head>
<body>
  <div id="links" class="results">
    <div class="result results_links result--ad">
      <h2 class="result__title">
        <a class="result__a" href="https://duckduckgo.com/y.js?ad_domain=shop.example&amp;u3=abc">Sponsored Rust Course</a>
      </h2>
      <a class="result__snippet" href="https://duckduckgo.com/y.js?ad_domain=shop.example">Learn fast.</a>
    </div>
    <div class="result results_links results_links_deep web-result">
      <h2 class="result__title">
        <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rust%2Dlang.org%2F&amp;rut=1a2b3c">
          Rust Programming Language
        </a>
      </h2>
      <a class="result__snippet" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rust%2Dlang.org%2F">
        A language empowering everyone to build <b>reliable</b> and efficient software.
      </a>
    </div>
    <div class="result results_links web-result">
      <h2 class="result__title">
        <a rel="nofollow" class="result__a" href="https://doc.rust-lang.org/book/">The Rust Book</a>
      </h2>
      <a class="result__snippet">An introductory book about Rust.</a>
    </div>
    <div class="result results_links web-result">
      <h2 class="result__title">
        <a rel="nofollow" class="result__a" href="https://crates.io/">crates.io</a>
      </h2>
    </div>
  </div>
</body>
</html>"#;

async fn mount_results(mock_server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_search_returns_formatted_results() {
    let mock_server = MockServer::start().await;
    mount_results(&mock_server, RESULTS_PAGE).await;
    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let response = reqwest::get(format!("{}/search?q=rust", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/plain"), "got {}", content_type);

    let expected = concat!(
        "Found 3 search results:\n",
        "\n",
        "1. Rust Programming Language\n",
        "   URL: https://www.rust-lang.org/\n",
        "   Summary: A language empowering everyone to build reliable and efficient software.\n",
        "\n",
        "2. The Rust Book\n",
        "   URL: https://doc.rust-lang.org/book/\n",
        "   Summary: An introductory book about Rust.\n",
        "\n",
        "3. crates.io\n",
        "   URL: https://crates.io/\n",
        "   Summary: \n",
    );
    assert_eq!(response.text().await.unwrap(), expected);
}

#[tokio::test]
async fn test_search_posts_query_as_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("user-agent", "TestBrowser/1.0"))
        .and(body_string("q=rust+web+frameworks"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let response = reqwest::get(format!("{}/search?q=rust%20web%20frameworks", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_search_repeated_query_uses_first_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html"))
        .and(body_string("q=rust"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let response = reqwest::get(format!("{}/search?q=rust&q=go", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(response
        .text()
        .await
        .unwrap()
        .starts_with("Found 3 search results:"));
}

#[tokio::test]
async fn test_search_repeated_max_results_uses_first_value() {
    let mock_server = MockServer::start().await;
    mount_results(&mock_server, RESULTS_PAGE).await;
    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let response = reqwest::get(format!("{}/search?q=rust&max_results=2&max_results=3", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.starts_with("Found 2 search results:"));
    assert!(!body.contains("3. crates.io"));
}

#[tokio::test]
async fn test_search_max_results_with_trailing_garbage() {
    let mock_server = MockServer::start().await;
    mount_results(&mock_server, RESULTS_PAGE).await;
    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let body = reqwest::get(format!("{}/search?q=rust&max_results=1abc", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.starts_with("Found 1 search results:"));
}

#[tokio::test]
async fn test_search_respects_max_results() {
    let mock_server = MockServer::start().await;
    mount_results(&mock_server, RESULTS_PAGE).await;
    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let body = reqwest::get(format!("{}/search?q=rust&max_results=1", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.starts_with("Found 1 search results:\n\n1. Rust Programming Language\n"));
    assert!(!body.contains("2. "));
    assert!(!body.contains("y.js"));
}

#[tokio::test]
async fn test_search_with_zero_max_results() {
    let mock_server = MockServer::start().await;
    mount_results(&mock_server, RESULTS_PAGE).await;
    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let body = reqwest::get(format!("{}/search?q=rust&max_results=0", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "No results were found.");
}

#[tokio::test]
async fn test_search_without_results() {
    let mock_server = MockServer::start().await;
    mount_results(
        &mock_server,
        r#"<html><body><div class="no-results">No results.</div></body></html>"#,
    )
    .await;
    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let response = reqwest::get(format!("{}/search?q=zzzzzz", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "No results were found.");
}

#[tokio::test]
async fn test_search_missing_query() {
    let base = start_test_server(create_test_config("http://127.0.0.1:1/html")).await;

    for url in [format!("{}/search", base), format!("{}/search?q=", base)] {
        let response = reqwest::get(url).await.unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.text().await.unwrap(),
            "Missing \"q\" search parameter"
        );
    }
}

#[tokio::test]
async fn test_search_upstream_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let base = start_test_server(create_test_config(&format!("{}/html", mock_server.uri()))).await;

    let response = reqwest::get(format!("{}/search?q=rust", base)).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(
        response.text().await.unwrap(),
        "Error: HTTP error! status: 503"
    );
}

#[tokio::test]
async fn test_search_upstream_unreachable() {
    let base = start_test_server(create_test_config("http://127.0.0.1:1/html")).await;

    let response = reqwest::get(format!("{}/search?q=rust", base)).await.unwrap();

    assert_eq!(response.status(), 500);
    assert!(response.text().await.unwrap().starts_with("Error: "));
}
