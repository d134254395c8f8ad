use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Response};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::credential::Credential;
use crate::error::{EhopError, Result};

/// `verify_tls` is off by default; appliances ship self-signed certificates.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub verify_tls: bool,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ApplianceClient {
    client: Client,
}

impl ApplianceClient {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        if !options.verify_tls {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Builds the request without sending it.
    pub fn build_request(
        &self,
        method: &str,
        call_path: &str,
        payload: impl Into<Vec<u8>>,
        credential: &Credential,
    ) -> Result<Request> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| EhopError::InvalidMethod(method.to_string()))?;

        let url_str = credential.url_for(call_path);
        let url = Url::parse(&url_str).map_err(|source| EhopError::InvalidUrl {
            url: url_str.clone(),
            source,
        })?;

        let mut authorization = HeaderValue::from_str(&credential.authorization())
            .map_err(|_| EhopError::InvalidHeader("Authorization"))?;
        authorization.set_sensitive(true);

        let body: Vec<u8> = payload.into();

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(body.into());

        debug!(
            method = %request.method(),
            url = %request.url(),
            "built appliance request"
        );

        Ok(request)
    }

    pub async fn send(
        &self,
        method: &str,
        call_path: &str,
        payload: impl Into<Vec<u8>>,
        credential: &Credential,
    ) -> Result<Response> {
        let request = self.build_request(method, call_path, payload, credential)?;
        let response = self.client.execute(request).await?;

        info!(
            host = credential.hostname(),
            call = call_path,
            status = response.status().as_u16(),
            "appliance responded"
        );

        Ok(response)
    }
}
