use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use crate::features::sign_up::{RegistrationRequest, RestaurantRegistrar};
use crate::services::config::ApiConfig;

const RESTAURANTS_PATH: &str = "restaurants";

/// HTTP client for the restaurant registration endpoint
#[derive(Clone, Debug)]
pub struct RegistrationClient {
    http_client: Client,
    endpoint: Url,
}

impl RegistrationClient {
    /// Create a client posting to `{base_url}/restaurants`
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let endpoint = restaurants_endpoint(&config.base_url)?;

        let http_client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::InvalidConfiguration {
                field: "api.user_agent".to_string(),
                value: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the registration as JSON; any 2xx status counts as success
    #[instrument(skip(self, request), err)]
    pub async fn register(&self, request: &RegistrationRequest) -> ClientResult<()> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Registration accepted with status {}", status);
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        error!("Registration rejected with status {}: {}", status, message);
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait(?Send)]
impl RestaurantRegistrar for RegistrationClient {
    async fn register_restaurant(&self, request: &RegistrationRequest) -> Result<(), ClientError> {
        self.register(request).await
    }
}

fn restaurants_endpoint(base_url: &str) -> ClientResult<Url> {
    let invalid = |reason: String| ClientError::InvalidConfiguration {
        field: "api.base_url".to_string(),
        value: format!("{} ({})", base_url, reason),
    };

    // Trailing slash so `join` appends instead of replacing the last segment
    let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
        .map_err(|e| invalid(e.to_string()))?;

    if base.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }

    base.join(RESTAURANTS_PATH).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_endpoint_appends_restaurants_path() {
        let client = RegistrationClient::new(&config("http://localhost:3333")).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:3333/restaurants");
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = RegistrationClient::new(&config("https://api.pizza.shop/v1/")).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://api.pizza.shop/v1/restaurants");
    }

    #[test]
    fn test_invalid_base_url_is_a_configuration_error() {
        let err = RegistrationClient::new(&config("not a url")).unwrap_err();
        match err {
            ClientError::InvalidConfiguration { field, .. } => assert_eq!(field, "api.base_url"),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    fn pizza_place() -> RegistrationRequest {
        RegistrationRequest {
            restaurant_name: "Pizza Place".to_string(),
            manager_name: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            phone: "11999999999".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_response_registers_with_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/restaurants"))
            .and(body_json(serde_json::json!({
                "restaurantName": "Pizza Place",
                "managerName": "Ana",
                "email": "ana@test.com",
                "phone": "11999999999",
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = RegistrationClient::new(&config(&server.uri())).unwrap();
        let result = client.register(&pizza_place()).await;

        assert!(result.is_ok(), "expected success, got {:?}", result);
    }

    #[tokio::test]
    async fn test_unprocessable_response_is_rejected_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/restaurants"))
            .respond_with(ResponseTemplate::new(422).set_body_string("email already registered"))
            .mount(&server)
            .await;

        let client = RegistrationClient::new(&config(&server.uri())).unwrap();
        match client.register(&pizza_place()).await {
            Err(ClientError::Rejected { status, message }) => {
                assert_eq!(status, 422);
                assert_eq!(message, "email already registered");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_network_error() {
        // Bind then drop to get a local port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let client = RegistrationClient::new(&config(&format!("http://127.0.0.1:{}", port))).unwrap();
        match client.register_restaurant(&pizza_place()).await {
            Err(ClientError::Network { .. }) => {}
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
