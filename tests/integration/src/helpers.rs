//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDateTime;
use fausse_api::{create_app, create_app_state, serve, AppState};
use fausse_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, LogFormat,
    RateLimitConfig, ReservationConfig, ServerConfig,
};
use fausse_service::dto::CreateEmployeeRequest;
use fausse_service::EmployeeService;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_suffix, TEST_PASSWORD};

/// "Now" for every test server: 2025-04-05 12:00
pub fn fixed_now() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2025, 4, 5)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid fixed clock")
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    state: AppState,
    _handle: JoinHandle<()>,
}

/// Credentials of an employee created for a test
#[derive(Debug, Clone)]
pub struct StaffAccount {
    pub id: i64,
    pub username: String,
    pub token: String,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Create an employee with `role` straight through the service layer and
    /// log them in over HTTP
    pub async fn staff(&self, role: &str) -> Result<StaffAccount> {
        let username = format!("{role}{}", unique_suffix());

        let employee = EmployeeService::new(self.state.service_context())
            .create(CreateEmployeeRequest {
                username: Some(username.clone()),
                email: Some(format!("{username}@cafefausse.test")),
                password: Some(TEST_PASSWORD.to_string()),
                first_name: Some("Test".to_string()),
                last_name: Some(role.to_string()),
                role: Some(role.to_string()),
            })
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create employee: {e}"))?;

        let response = self
            .post(
                "/api/auth/login",
                &json!({"username": username, "password": TEST_PASSWORD}),
            )
            .await?;
        let body: Value = assert_json(response, StatusCode::OK).await?;
        let token = body["token"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("login response has no token"))?
            .to_string();

        Ok(StaffAccount {
            id: employee.id,
            username,
            token,
        })
    }
}

/// Create a test configuration
///
/// Migrations run, the clock is fixed and rate limiting is off.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL not set"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "cafe-fausse-test".to_string(),
            env: Environment::Development,
            log_format: LogFormat::Pretty,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
            run_migrations: true,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-that-is-long-enough".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 604_800,
        },
        rate_limit: RateLimitConfig {
            enabled: false,
            requests_per_second: 10,
            burst: 50,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        reservations: ReservationConfig {
            fixed_now: Some(fixed_now()),
            ..ReservationConfig::default()
        },
        bootstrap_admin: None,
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error envelope with the given status and message
pub async fn assert_error(
    response: Response,
    expected_status: StatusCode,
    expected_message: &str,
) -> Result<Value> {
    let body: Value = assert_json(response, expected_status).await?;
    anyhow::ensure!(body["success"] == false, "expected success=false: {body}");
    anyhow::ensure!(
        body["message"] == expected_message,
        "expected message {expected_message:?}, got {}",
        body["message"]
    );
    Ok(body)
}
