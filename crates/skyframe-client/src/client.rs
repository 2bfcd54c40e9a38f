//! Conversion operations.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use skyframe_core::error::AuthError;
use skyframe_core::{
    AccessToken, Availability, CartesianCoords, CoordinateService, Coordinates, Credentials,
    Error, Frame, Ident, Result, ServiceUrl, SphericalCoords, Timestamp,
};

use crate::correlate::new_ident;
use crate::http::{
    CELESTIAL_TO_TERRESTRIAL, CHECK, CONVERT, ConversionPayload, ConversionRequest, CoordsRef,
    FixedConversionRequest, HttpClient, POSITION, PositionPayload, PositionRequest,
    TERRESTRIAL_TO_CELESTIAL,
};
use crate::session::Session;
use crate::validate::validate;

/// Client for the conversion service.
///
/// Each operation ensures the session holds a usable token, tags the request
/// with a fresh [`Ident`], sends it, and validates the response against that
/// ident before returning the typed result.
#[derive(Debug, Clone)]
pub struct SkyframeClient {
    session: Session,
}

impl SkyframeClient {
    /// Create a client on top of an existing session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Create a client and its session with default options.
    pub fn connect(service: ServiceUrl, credentials: Credentials) -> Result<Self> {
        Ok(Self::new(Session::new(service, credentials)?))
    }

    /// Returns the underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Probe the service's liveness endpoint. Never fails.
    #[instrument(skip(self), fields(service = %self.session.service()))]
    pub async fn check(&self) -> Availability {
        availability(self.session.http()).await
    }

    /// Convert `coords` between two reference frames at `at`.
    #[instrument(skip(self, coords))]
    pub async fn convert(
        &self,
        coords: &Coordinates,
        from: Frame,
        to: Frame,
        at: &Timestamp,
    ) -> Result<Coordinates> {
        let token = self.session.ensure().await?;
        let ident = new_ident();
        let request = ConversionRequest {
            ident: &ident,
            coords,
            original: from,
            new: to,
            dt: at,
        };

        let payload: ConversionPayload = self.exchange(&token, CONVERT, &ident, &request).await?;
        Ok(payload.coordinates)
    }

    /// Earth-fixed latitude/longitude/altitude to inertial cartesian.
    #[instrument(skip(self))]
    pub async fn terrestrial_to_celestial(
        &self,
        position: &SphericalCoords,
        at: &Timestamp,
    ) -> Result<Coordinates> {
        let token = self.session.ensure().await?;
        let ident = new_ident();
        let request = FixedConversionRequest {
            ident: &ident,
            coords: CoordsRef::Spherical(position),
            dt: at,
        };

        let payload: ConversionPayload = self
            .exchange(&token, TERRESTRIAL_TO_CELESTIAL, &ident, &request)
            .await?;
        Ok(payload.coordinates)
    }

    /// Inertial cartesian to Earth-fixed latitude/longitude/altitude.
    #[instrument(skip(self))]
    pub async fn celestial_to_terrestrial(
        &self,
        position: &CartesianCoords,
        at: &Timestamp,
    ) -> Result<Coordinates> {
        let token = self.session.ensure().await?;
        let ident = new_ident();
        let request = FixedConversionRequest {
            ident: &ident,
            coords: CoordsRef::Cartesian(position),
            dt: at,
        };

        let payload: ConversionPayload = self
            .exchange(&token, CELESTIAL_TO_TERRESTRIAL, &ident, &request)
            .await?;
        Ok(payload.coordinates)
    }

    /// Position of `body` (e.g. `"MOON"`, `"MARS"`) relative to Earth at `at`.
    #[instrument(skip(self))]
    pub async fn current_position(&self, body: &str, at: &Timestamp) -> Result<CartesianCoords> {
        let token = self.session.ensure().await?;
        let ident = new_ident();
        let request = PositionRequest {
            ident: &ident,
            body,
            dt: at,
        };

        let payload: PositionPayload = self.exchange(&token, POSITION, &ident, &request).await?;
        Ok(payload.position.into())
    }

    /// Send one authenticated request and validate its response.
    async fn exchange<B, T>(
        &self,
        token: &AccessToken,
        path: &str,
        ident: &Ident,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + std::fmt::Debug,
        T: DeserializeOwned,
    {
        debug!(%ident, path, "Sending request");

        let envelope = match self.session.http().post_authed(path, body, token).await {
            Err(err @ Error::Auth(AuthError::SessionRejected { .. })) => {
                // The next call logs in again; this one still fails.
                self.session.invalidate(token);
                return Err(err);
            }
            other => other?,
        };

        validate(envelope, Some(ident))
    }
}

/// Probe a service without a session.
///
/// Any failure, including an unusable URL or client configuration, reads as
/// [`Availability::Unavailable`].
pub async fn check(service: ServiceUrl, timeout: Duration) -> Availability {
    match HttpClient::new(service, timeout) {
        Ok(client) => availability(&client).await,
        Err(e) => {
            debug!(error = %e, "Could not build HTTP client");
            Availability::Unavailable
        }
    }
}

async fn availability(client: &HttpClient) -> Availability {
    match client.probe(CHECK).await {
        Ok(()) => Availability::Available,
        Err(e) => {
            debug!(error = %e, "Service unavailable");
            Availability::Unavailable
        }
    }
}

#[async_trait]
impl CoordinateService for SkyframeClient {
    async fn check(&self) -> Availability {
        SkyframeClient::check(self).await
    }

    async fn convert(
        &self,
        coords: &Coordinates,
        from: Frame,
        to: Frame,
        at: &Timestamp,
    ) -> Result<Coordinates> {
        SkyframeClient::convert(self, coords, from, to, at).await
    }

    async fn terrestrial_to_celestial(
        &self,
        position: &SphericalCoords,
        at: &Timestamp,
    ) -> Result<Coordinates> {
        SkyframeClient::terrestrial_to_celestial(self, position, at).await
    }

    async fn celestial_to_terrestrial(
        &self,
        position: &CartesianCoords,
        at: &Timestamp,
    ) -> Result<Coordinates> {
        SkyframeClient::celestial_to_terrestrial(self, position, at).await
    }

    async fn current_position(&self, body: &str, at: &Timestamp) -> Result<CartesianCoords> {
        SkyframeClient::current_position(self, body, at).await
    }
}
