//! Internal HTTP client that authenticates requests and runs the request/response pipeline.

use crate::core::{
    domain::{
        error::{LeasewebError, LeasewebResult, ValidationError},
        value_object::{LeasewebApiToken, LeasewebApiUrl},
    },
    infrastructure::error_decoder::{decode_error, log_api_error},
};
use reqwest::{
    Client, Method, Response, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::trace;
use url::Url;

/// Header carrying the API token on every request.
pub(crate) const AUTH_HEADER: &str = "X-Lsw-Auth";

/// Path prefix of every bare metal endpoint.
const API_PREFIX: [&str; 2] = ["bareMetals", "v2"];

/// Internal HTTP client bound to one base URL and one API token.
///
/// Holds no mutable state: cloning it is cheap and every call is independent.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: LeasewebApiUrl,
    auth_header: HeaderValue,
}

impl ApiClient {
    /// Creates a new `ApiClient` on top of an existing HTTP client.
    ///
    /// # Errors
    /// Returns `LeasewebError::Validation` if the token cannot be used as a header value.
    pub fn new(
        http_client: Client,
        base_url: LeasewebApiUrl,
        token: &LeasewebApiToken,
    ) -> LeasewebResult<Self> {
        let mut auth_header =
            HeaderValue::from_str(token.as_str()).map_err(|e| ValidationError::Field {
                field: "token".to_string(),
                message: e.to_string(),
            })?;
        auth_header.set_sensitive(true);

        Ok(Self {
            http_client,
            base_url,
            auth_header,
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &LeasewebApiUrl {
        &self.base_url
    }

    /// Builds `{base}/bareMetals/v2/{segments...}`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> LeasewebResult<Url> {
        let mut url = self.base_url.as_url().clone();
        url.path_segments_mut()
            .map_err(|_| {
                ValidationError::ConstraintViolation(format!(
                    "{} cannot be used as a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Sends a single request and returns the response unread.
    ///
    /// The token header is always set; `Content-Type: application/json` is
    /// set for every POST and PUT, with or without a body.
    pub async fn execute(
        &self,
        method: Method,
        url: &Url,
        body: Option<Vec<u8>>,
    ) -> Result<Response, reqwest::Error> {
        let mut req_builder = self
            .http_client
            .request(method.clone(), url.clone())
            .header(AUTH_HEADER, self.auth_header.clone());

        if method == Method::POST || method == Method::PUT {
            req_builder = req_builder.header(CONTENT_TYPE, "application/json");
        }

        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        trace!(url = %url, method = %method, "executing API request");

        req_builder.send().await
    }

    /// Runs a request and decodes the success body into `T`.
    pub(crate) async fn fetch<T>(&self, request: ApiRequest) -> LeasewebResult<T>
    where
        T: DeserializeOwned,
    {
        let (context, body) = self.round_trip(request).await?;
        serde_json::from_slice(&body).map_err(|e| LeasewebError::decoding(context, &e))
    }

    /// Runs a request whose success response carries nothing of interest.
    pub(crate) async fn dispatch(&self, request: ApiRequest) -> LeasewebResult<()> {
        self.round_trip(request).await.map(|_| ())
    }

    async fn round_trip(&self, request: ApiRequest) -> LeasewebResult<(String, Vec<u8>)> {
        let ApiRequest {
            context,
            method,
            url,
            body,
            expected,
        } = request;

        let response = self.execute(method.clone(), &url, body).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != expected {
            let err = decode_error(&body, &context);
            log_api_error(&method, &url, status, &err);
            return Err(err);
        }

        Ok((context, body.to_vec()))
    }
}

/// One call to an endpoint: what is being done, where, and which status means success.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    context: String,
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
    expected: StatusCode,
}

impl ApiRequest {
    pub(crate) fn new(
        context: impl Into<String>,
        method: Method,
        url: Url,
        expected: StatusCode,
    ) -> Self {
        Self {
            context: context.into(),
            method,
            url,
            body: None,
            expected,
        }
    }

    /// Appends query parameters; `None` values are left out.
    pub(crate) fn query<'a, I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<String>)>,
    {
        let mut present = params
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .peekable();

        if present.peek().is_some() {
            self.url.query_pairs_mut().extend_pairs(present);
        }
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    /// Returns `LeasewebError::Encoding` if serialization fails. Nothing is sent in that case.
    pub(crate) fn json<B>(mut self, body: &B) -> LeasewebResult<Self>
    where
        B: Serialize + ?Sized,
    {
        let encoded =
            serde_json::to_vec(body).map_err(|e| LeasewebError::encoding(&self.context, &e))?;
        self.body = Some(encoded);
        Ok(self)
    }
}
