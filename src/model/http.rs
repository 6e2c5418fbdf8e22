/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::responses::ApiResponse;
use reqwest::header::ACCEPT;
use reqwest::{Client, Request, Response, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Thin HTTP layer that turns an [`Endpoint`] into a request against the
/// configured base URL
///
/// Non-2xx statuses are not errors here: every response the service sends
/// back is returned as an [`ApiResponse`]. Only transport failures surface as
/// [`AppError::Network`].
pub struct HttpClient {
    http_client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Creates a new client for the base URL and timeout in `config`
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.rest_api.base_url).map_err(|e| {
            AppError::InvalidInput(format!(
                "base url {}: {e}",
                config.rest_api.base_url
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::InvalidInput(format!(
                "base url {} cannot carry a path",
                config.rest_api.base_url
            )));
        }

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Absolute URL of `endpoint`, each path parameter percent-encoded as one segment
    ///
    /// Parameters equal to `.` or `..` are rejected: URL normalisation drops or
    /// folds them (encoded or not), which would send the request to another route.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, AppError> {
        let segments = endpoint.segments();
        if let Some(segment) = segments.iter().find(|s| *s == "." || *s == "..") {
            return Err(AppError::InvalidInput(format!(
                "path parameter {segment:?} would change the route of {endpoint}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::InvalidInput(format!("base url {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Makes a request without a body
    pub async fn send(&self, endpoint: &Endpoint) -> Result<ApiResponse, AppError> {
        self.request(endpoint, None::<&()>, None::<&()>).await
    }

    /// Makes a request carrying a JSON body
    pub async fn send_json<B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        self.request(endpoint, None::<&()>, Some(body)).await
    }

    /// Makes a request with query parameters
    pub async fn send_query<Q: Serialize>(
        &self,
        endpoint: &Endpoint,
        query: &Q,
    ) -> Result<ApiResponse, AppError> {
        self.request(endpoint, Some(query), None::<&()>).await
    }

    /// Builds the request for `endpoint` without sending it
    pub fn build_request<Q: Serialize, B: Serialize>(
        &self,
        endpoint: &Endpoint,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Request, AppError> {
        let url = self.url_for(endpoint)?;
        let mut request = self
            .http_client
            .request(endpoint.method(), url)
            .header(ACCEPT, "application/json");

        if let Some(q) = query {
            request = request.query(q);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        request
            .build()
            .map_err(|e| AppError::InvalidInput(format!("{endpoint}: {e}")))
    }

    /// Makes a request and drains the response
    pub async fn request<Q: Serialize, B: Serialize>(
        &self,
        endpoint: &Endpoint,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ApiResponse, AppError> {
        let request = self.build_request(endpoint, query, body)?;
        info!("{}", endpoint);
        let response = make_http_request(&self.http_client, request).await?;
        ApiResponse::from_response(response).await
    }
}

/// Sends one HTTP request and returns the response whatever its status
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `request` - Fully built request, see [`HttpClient::build_request`]
///
/// # Returns
///
/// * `Ok(Response)` - The HTTP response, including 4xx and 5xx ones
/// * `Err(AppError)` - Transport failure (connection refused, timeout, DNS)
pub async fn make_http_request(client: &Client, request: Request) -> Result<Response, AppError> {
    debug!("{} {}", request.method(), request.url());
    let response = client.execute(request).await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}
