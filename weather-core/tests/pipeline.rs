//! End-to-end pipeline tests against a wiremock HTTP server.

use weather_core::{
    ApiWeatherRepository, Endpoint, FetchOutcome, FetchWeather, FetchWeatherUseCase,
    OpenMeteoClient, ReqwestTransport, WeatherApi, WeatherError, WeatherViewModel,
    doubles::{AnalyticsTrackerSpy, LogSinkSpy},
    mapper::{map_to_domain, map_to_view_data},
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoint(server: &MockServer) -> Endpoint {
    Endpoint {
        base_url: format!("{}/v1/forecast", server.uri()),
        ..Endpoint::default()
    }
}

fn client(server: &MockServer) -> OpenMeteoClient<ReqwestTransport> {
    let transport = ReqwestTransport::new(None).expect("client construction should not fail");
    OpenMeteoClient::new(transport, &endpoint(server)).expect("valid endpoint")
}

async fn mount_current_weather(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "43.7"))
        .and(query_param("longitude", "-79.42"))
        .and(query_param("current_weather", "true"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn successful_fetch_flows_through_every_layer() {
    let server = MockServer::start().await;
    mount_current_weather(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": { "temperature": 18.5, "weathercode": 1 }
        })),
    )
    .await;

    let record = client(&server).fetch_weather("Toronto").await.expect("should parse");
    assert_eq!(record.temperature, 18.5);
    assert_eq!(record.condition, "Clear");

    let weather = map_to_domain(&record);
    assert_eq!(weather.temperature_celsius, 18.5);
    assert_eq!(weather.description, "Clear");

    let view = map_to_view_data(&weather);
    assert_eq!(view.display_temp, "18°C");
    assert_eq!(view.display_condition, "Clear");
}

#[tokio::test]
async fn any_city_hits_the_fixed_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "43.7"))
        .and(query_param("longitude", "-79.42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": { "temperature": 2.0, "weathercode": 61 }
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = client(&server);
    for city in ["Chicago", "Miami", "Vancouver"] {
        let record = client.fetch_weather(city).await.expect("should parse");
        assert_eq!(record.condition, "Cloudy");
    }

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.iter().all(|r| r.url.query_pairs().all(|(k, _)| k != "city" && k != "q")));
}

#[tokio::test]
async fn not_found_is_a_bad_status_even_with_valid_body() {
    let server = MockServer::start().await;
    mount_current_weather(
        &server,
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "current_weather": { "temperature": 18.5, "weathercode": 1 }
        })),
    )
    .await;

    let err = client(&server).fetch_weather("Toronto").await.unwrap_err();
    assert!(matches!(err, WeatherError::BadStatus { status: 404 }), "{err:?}");
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    mount_current_weather(&server, ResponseTemplate::new(200).set_body_string("Not valid JSON"))
        .await;

    let err = client(&server).fetch_weather("Toronto").await.unwrap_err();
    assert!(err.is_parse(), "{err:?}");
}

#[tokio::test]
async fn incomplete_json_is_a_parse_error() {
    let server = MockServer::start().await;
    mount_current_weather(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({ "current_weather": { "temperature": 18.5 } })),
    )
    .await;

    let err = client(&server).fetch_weather("Toronto").await.unwrap_err();
    assert!(err.is_parse(), "{err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on port 1, so the connection is refused.
    let endpoint = Endpoint {
        base_url: "http://127.0.0.1:1/v1/forecast".to_string(),
        ..Endpoint::default()
    };
    let transport = ReqwestTransport::new(None).expect("client construction should not fail");
    let client = OpenMeteoClient::new(transport, &endpoint).expect("valid endpoint");

    let err = client.fetch_weather("Toronto").await.unwrap_err();
    assert!(err.is_network(), "{err:?}");
}

#[tokio::test]
async fn use_case_propagates_status_errors_to_the_view_model() {
    let server = MockServer::start().await;
    mount_current_weather(&server, ResponseTemplate::new(404)).await;

    let use_case = FetchWeatherUseCase::new(ApiWeatherRepository::new(client(&server)));
    let err = use_case.execute("Toronto").await.unwrap_err();
    assert!(err.is_bad_status());

    let analytics = AnalyticsTrackerSpy::default();
    let logger = LogSinkSpy::default();
    let view_model = WeatherViewModel::new(use_case, analytics.clone(), logger.clone());

    assert_eq!(view_model.fetch_weather().await, FetchOutcome::Failed);

    let state = view_model.state();
    assert_eq!(state.error_message.as_deref(), Some("Failed to fetch weather."));
    assert_eq!(state.weather_view_data, None);
    assert!(!state.is_loading);
    assert_eq!(analytics.track_calls_count(), 0);

    let messages = logger.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Error: bad server response"));
    assert!(messages[0].contains("404"));
}

#[tokio::test]
async fn view_model_renders_provider_weather() {
    let server = MockServer::start().await;
    mount_current_weather(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": { "temperature": -1.5, "weathercode": 3 }
        })),
    )
    .await;

    let use_case = FetchWeatherUseCase::new(ApiWeatherRepository::new(client(&server)));
    let analytics = AnalyticsTrackerSpy::default();
    let view_model = WeatherViewModel::new(use_case, analytics.clone(), LogSinkSpy::default());

    assert_eq!(view_model.fetch_weather().await, FetchOutcome::Loaded);

    let data = view_model.state().weather_view_data.expect("view data");
    assert_eq!(data.display_temp, "-1°C");
    assert_eq!(data.display_condition, "Cloudy");
    assert_eq!(analytics.events(), vec!["WeatherFetched"]);
}
