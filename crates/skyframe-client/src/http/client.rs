//! HTTP client for the conversion service.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument, trace};

use skyframe_core::error::{AuthError, ProtocolError, TransportError};
use skyframe_core::{AccessToken, Credentials, Error, Result, ServiceUrl};

use super::endpoints::{TOKEN, TokenRequest};
use super::envelope::ResponseEnvelope;

/// Thin wrapper over `reqwest` bound to one service URL.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    service: ServiceUrl,
}

impl HttpClient {
    /// Create a client for `service` whose requests time out after `timeout`.
    pub fn new(service: ServiceUrl, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("skyframe/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, service })
    }

    /// Returns the service URL this client is configured for.
    pub fn service(&self) -> &ServiceUrl {
        &self.service
    }

    /// Unauthenticated GET that only cares whether the service answered 2xx.
    #[instrument(skip(self), fields(service = %self.service))]
    pub async fn probe(&self, path: &str) -> Result<()> {
        let url = self.service.endpoint(path);
        debug!(%url, "probing service");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();
        trace!(status = %status, "probe response");

        if status.is_success() {
            Ok(())
        } else {
            Err(ProtocolError::new(status.as_u16(), None).into())
        }
    }

    /// Exchange a username and password for a bearer token.
    #[instrument(skip(self, credentials), fields(service = %self.service, username = %credentials.username()))]
    pub async fn request_token(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AccessToken, AuthError> {
        let url = self.service.endpoint(TOKEN);
        let form = TokenRequest {
            username: credentials.username(),
            password: credentials.password(),
            grant_type: "password",
        };

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::LoginFailed {
                message: transport_error(e).to_string(),
            })?;

        let status = response.status();
        trace!(status = %status, "token response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::LoginFailed {
                message: format!("token endpoint returned HTTP {}", status.as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| AuthError::LoginFailed {
            message: transport_error(e).to_string(),
        })?;

        AccessToken::from_response_body(&body)
    }

    /// Authenticated JSON POST returning the undecided response envelope.
    #[instrument(skip(self, body, token), fields(service = %self.service))]
    pub async fn post_authed<B>(
        &self,
        path: &str,
        body: &B,
        token: &AccessToken,
    ) -> Result<ResponseEnvelope>
    where
        B: Serialize + std::fmt::Debug,
    {
        let url = self.service.endpoint(path);
        debug!(%url, "authenticated call");
        trace!(?body, "request body");

        let request = authorize(self.client.post(&url), token)?;
        let response = request.json(body).send().await.map_err(transport_error)?;

        decode_envelope(response).await
    }
}

/// Attach the bearer credential to one outbound request.
///
/// Applied per call from the current token; nothing is registered on the
/// client, so a refreshed token simply replaces the old one next time.
fn authorize(request: RequestBuilder, token: &AccessToken) -> Result<RequestBuilder> {
    let mut value = HeaderValue::from_str(&token.bearer()).map_err(|_| AuthError::LoginFailed {
        message: "token cannot be sent as a header value".to_string(),
    })?;
    value.set_sensitive(true);
    Ok(request.header(AUTHORIZATION, value))
}

/// Decode a response into an envelope for validation, or fail on status.
///
/// Bodies carrying field-level validation errors are passed through whatever
/// their status, so the validator can report every message.
async fn decode_envelope(response: reqwest::Response) -> Result<ResponseEnvelope> {
    let status = response.status();
    trace!(status = %status, "service response");

    let body = response.bytes().await.map_err(transport_error)?;

    match serde_json::from_slice::<ResponseEnvelope>(&body) {
        Ok(envelope) if status.is_success() || envelope.has_field_errors() => Ok(envelope),
        Ok(envelope) => Err(status_error(status, envelope.detail_message())),
        Err(e) if status.is_success() => Err(Error::MalformedResponse {
            message: e.to_string(),
        }),
        Err(_) => Err(status_error(status, None)),
    }
}

fn status_error(status: StatusCode, message: Option<String>) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AuthError::SessionRejected {
            status: status.as_u16(),
        }
        .into(),
        _ => ProtocolError::new(status.as_u16(), message).into(),
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let service = ServiceUrl::new("https://spice.example.org").unwrap();
        let client = HttpClient::new(service.clone(), Duration::from_secs(5)).unwrap();
        assert_eq!(client.service().as_str(), service.as_str());
    }

    #[test]
    fn authorize_sets_bearer_header() {
        let token =
            AccessToken::from_response_body(r#"{"access_token":"tok","token_type":"bearer"}"#)
                .unwrap();
        let client = reqwest::Client::new();
        let request = authorize(client.get("https://spice.example.org/check"), &token)
            .unwrap()
            .build()
            .unwrap();

        let header = request.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(
            header.to_str().unwrap(),
            r#"Bearer {"access_token":"tok","token_type":"bearer"}"#
        );
    }

    #[test]
    fn forbidden_maps_to_session_rejected() {
        let err = status_error(StatusCode::FORBIDDEN, Some("Invalid credentials".to_string()));
        assert!(matches!(
            err,
            Error::Auth(AuthError::SessionRejected { status: 403 })
        ));
        let err = status_error(StatusCode::BAD_GATEWAY, None);
        assert!(matches!(err, Error::Protocol(ProtocolError { status: 502, .. })));
    }
}
