//! Integration tests for the best-sellers fetch path, against a mock
//! HTTP server. The server is shared across tests, so every mock
//! matches on a per-test API key to stay disjoint under parallel
//! execution.

use amazon_bestsellers::{render, BestSellersClient, Category, Credential, Url};
use mockito::{mock, Matcher};

fn test_client(key: &str) -> BestSellersClient {
    let endpoint = Url::parse(&format!("{}/best-sellers", mockito::server_url())).unwrap();
    BestSellersClient::with_endpoint(endpoint, Credential::from(key))
}

fn listing_mock(category: &str, key: &str) -> mockito::Mock {
    mock("GET", "/best-sellers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("category".into(), category.into()),
            Matcher::UrlEncoded("type".into(), "BEST_SELLERS".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("country".into(), "US".into()),
        ]))
        .match_header("x-rapidapi-key", key)
}

#[tokio::test]
async fn electronics_request_renders_the_expected_card() {
    let m = listing_mock("electronics", "card-key")
        .match_header("x-rapidapi-host", "127.0.0.1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":{"best_sellers":[{"rank":1,"product_title":"Widget",
                "product_price":"$9.99","product_star_rating":"4.5",
                "product_num_ratings":2500,"product_photo":"http://x/img.png",
                "product_url":"http://x/p"}]}}"#,
        )
        .create();

    let products = test_client("card-key")
        .fetch(Category::Electronics)
        .await
        .unwrap();
    m.assert();

    let mut out = Vec::new();
    render::render_results(&mut out, Category::Electronics.label(), &products).unwrap();
    let page = String::from_utf8(out).unwrap();

    assert!(page.contains("#1 Widget"));
    assert!(page.contains("Price: $9.99"));
    assert!(page.contains("⭐ Rating: 4.5 (2,500 reviews)"));
    assert!(page.contains("🔗 View on Amazon: http://x/p"));
}

#[tokio::test]
async fn listing_order_is_preserved_as_returned() {
    let _m = listing_mock("home", "order-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":{"best_sellers":[
                {"rank":3,"product_title":"Third","product_price":"$3",
                 "product_star_rating":4.0,"product_num_ratings":3,
                 "product_photo":"http://x/3.png","product_url":"http://x/3"},
                {"rank":1,"product_title":"First","product_price":"$1",
                 "product_star_rating":4.1,"product_num_ratings":1,
                 "product_photo":"http://x/1.png","product_url":"http://x/1"},
                {"rank":2,"product_title":"Second","product_price":"$2",
                 "product_star_rating":"4.2","product_num_ratings":2,
                 "product_photo":"http://x/2.png","product_url":"http://x/2"}
            ]}}"#,
        )
        .create();

    let products = test_client("order-key").fetch(Category::Home).await.unwrap();

    let titles: Vec<&str> = products
        .iter()
        .map(|product| product.product_title.as_str())
        .collect();
    assert_eq!(titles, ["Third", "First", "Second"]);
}

#[tokio::test]
async fn missing_data_path_is_an_empty_listing() {
    let _m = listing_mock("software", "no-data-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    let products = test_client("no-data-key")
        .fetch(Category::Software)
        .await
        .unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn missing_best_sellers_path_is_an_empty_listing() {
    let _m = listing_mock("beauty", "no-listing-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{}}"#)
        .create();

    let products = test_client("no-listing-key")
        .fetch(Category::Beauty)
        .await
        .unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn upstream_error_status_carries_the_detail() {
    let _m = listing_mock("automotive", "failing-key")
        .with_status(500)
        .create();

    let error = test_client("failing-key")
        .fetch(Category::Automotive)
        .await
        .unwrap_err();
    assert!(error.to_string().contains("500"), "{error}");
}

#[tokio::test]
async fn refused_connection_is_an_error_not_a_panic() {
    let endpoint = Url::parse("http://127.0.0.1:9/best-sellers").unwrap();
    let client = BestSellersClient::with_endpoint(endpoint, Credential::from("test-key"));

    let error = client.fetch(Category::Electronics).await.unwrap_err();
    assert!(!error.to_string().is_empty());
}

#[tokio::test]
async fn repeated_fetches_render_identically() {
    let m = listing_mock("automotive", "repeat-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":{"best_sellers":[{"rank":1,"product_title":"Wax",
                "product_price":"$12.00","product_star_rating":"4.8",
                "product_num_ratings":12345,"product_photo":"http://x/wax.png",
                "product_url":"http://x/wax"}]}}"#,
        )
        .expect(2)
        .create();

    let client = test_client("repeat-key");
    let mut pages = Vec::new();
    for _ in 0..2 {
        let products = client.fetch(Category::Automotive).await.unwrap();
        let mut out = Vec::new();
        render::render_results(&mut out, Category::Automotive.label(), &products).unwrap();
        pages.push(String::from_utf8(out).unwrap());
    }
    m.assert();

    assert_eq!(pages[0], pages[1]);
    assert!(pages[0].contains("(12,345 reviews)"));
}
