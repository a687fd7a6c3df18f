//! reqwest-backed API client.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use todo_types::{ApiResponse, CreateTodolistData, LoginData, LoginParams, MeData, Todolist};
use url::Url;

use super::{AuthApi, TodolistsApi};
use crate::config::Config;

/// Standard User-Agent header for todos API requests.
const USER_AGENT: &str = concat!("todos/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

/// HTTP client for the todo-list REST API.
///
/// Keeps a cookie store so the session cookie issued by `auth/login` is sent
/// on every later request made through the same client.
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .default_headers(build_headers(api_key)?);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// Builds a client from resolved configuration (base URL, API key, timeout).
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.effective_base_url()?;
        let api_key = config.effective_api_key();
        Self::new(&base_url, api_key.as_deref(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("build URL for {path}"))?;
        Ok(self.http.request(method, url))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T> {
        tracing::debug!(request = what, "sending");
        let response = request
            .send()
            .await
            .with_context(|| format!("{what} failed"))?
            .error_for_status()
            .with_context(|| format!("{what} failed"))?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("{what}: invalid response body"))
    }
}

impl AuthApi for HttpApi {
    async fn me(&self) -> Result<ApiResponse<MeData>> {
        let request = self.request(Method::GET, "auth/me")?;
        self.send_json(request, "GET auth/me").await
    }

    async fn login(&self, params: &LoginParams) -> Result<ApiResponse<LoginData>> {
        let request = self.request(Method::POST, "auth/login")?.json(params);
        self.send_json(request, "POST auth/login").await
    }

    async fn logout(&self) -> Result<ApiResponse> {
        let request = self.request(Method::DELETE, "auth/login")?;
        self.send_json(request, "DELETE auth/login").await
    }
}

impl TodolistsApi for HttpApi {
    async fn get_todolists(&self) -> Result<Vec<Todolist>> {
        let request = self.request(Method::GET, "todo-lists")?;
        self.send_json(request, "GET todo-lists").await
    }

    async fn create_todolist(&self, title: &str) -> Result<ApiResponse<CreateTodolistData>> {
        let request = self
            .request(Method::POST, "todo-lists")?
            .json(&TitleBody { title });
        self.send_json(request, "POST todo-lists").await
    }

    async fn delete_todolist(&self, id: &str) -> Result<ApiResponse> {
        let request = self.request(Method::DELETE, &format!("todo-lists/{id}"))?;
        self.send_json(request, "DELETE todo-lists").await
    }

    async fn update_todolist(&self, id: &str, title: &str) -> Result<ApiResponse> {
        let request = self
            .request(Method::PUT, &format!("todo-lists/{id}"))?
            .json(&TitleBody { title });
        self.send_json(request, "PUT todo-lists").await
    }
}

/// Parses the base URL, making sure it ends with `/` so relative joins keep
/// the full path prefix (`.../api/1.1/` + `todo-lists`).
fn parse_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&normalized).with_context(|| format!("Invalid API base URL: {base_url}"))
}

fn build_headers(api_key: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("accept", HeaderValue::from_static("application/json"));
    if let Some(key) = api_key {
        let value = HeaderValue::from_str(key).context("API key is not a valid header value")?;
        headers.insert("API-KEY", value);
    }
    Ok(headers)
}
