use pretty_assertions::assert_eq;
use pulse_web::animation::{fetch_animation, Animations};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn animation_payload_is_fetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loading.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"v": "5.7", "fr": 30})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let animation = fetch_animation(&client, &format!("{}/loading.json", server.uri()))
        .await
        .expect("animation");
    let parsed: serde_json::Value = serde_json::from_str(animation.script_json()).unwrap();
    assert_eq!(parsed, serde_json::json!({"v": "5.7", "fr": 30}));
}

#[tokio::test]
async fn non_ok_status_disables_animation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loading.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"v": "5.7"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/success.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let animations = Animations::load(
        &client,
        &format!("{}/loading.json", server.uri()),
        &format!("{}/success.json", server.uri()),
    )
    .await;

    assert!(animations.loading.is_some());
    assert!(animations.success.is_none());
}

#[tokio::test]
async fn invalid_json_disables_animation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    assert!(fetch_animation(&client, &server.uri()).await.is_none());
}

#[tokio::test]
async fn unreachable_host_disables_animation() {
    let client = reqwest::Client::new();
    assert!(fetch_animation(&client, "http://127.0.0.1:1/missing.json")
        .await
        .is_none());
}
