//! Sub-applications the gateway mounts under fixed path prefixes.
//!
//! Every sub-application, whether served in-process or forwarded to an
//! external server, sits behind the [`Mount`] trait. The gateway only ever
//! asks a mount for its prefix, its public paths and a [`Router`]; it never
//! reaches into a mount's internals.
//!
//! # Available Mounts
//!
//! - [`ClimsoftMount`] - Climsoft API served natively over the Climsoft database
//! - [`UpstreamMount`] - Reverse proxy to an external application (Surface, MCH)

pub mod climsoft;
pub mod upstream;

use std::time::Duration;

use axum::Router;

use crate::api::middleware::rate_limit::RateLimit;
use crate::infrastructure::upstream::UpstreamError;
use crate::state::AppState;

pub use climsoft::ClimsoftMount;
pub use upstream::UpstreamMount;

/// A sub-application attached to the gateway at a fixed prefix.
pub trait Mount: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Human-readable title shown on the landing page.
    fn title(&self) -> &'static str;

    /// Path prefix, e.g. `/climsoft`. Stripped before [`Self::router`] sees
    /// the request.
    fn prefix(&self) -> &'static str;

    /// Absolute path the landing page links to.
    fn landing_path(&self) -> &'static str;

    /// Prefix-stripped paths reachable without a bearer token.
    fn public_paths(&self) -> &'static [&'static str] {
        &[]
    }

    fn router(&self) -> Router;
}

/// Which mounts to build and how.
#[derive(Debug, Clone)]
pub struct MountSettings {
    pub climsoft_enabled: bool,
    /// Surface base URL; `None` leaves `/surface` unmounted.
    pub surface_url: Option<String>,
    /// MCH base URL; `None` leaves `/mch` unmounted.
    pub mch_url: Option<String>,
    pub upstream_timeout: Duration,
    pub sign_in_rate_limit: RateLimit,
}

/// Builds the enabled mounts in landing-page order: Surface, Climsoft, MCH.
///
/// # Errors
///
/// Returns [`UpstreamError::InvalidUrl`] if an enabled upstream has an
/// unusable base URL.
pub fn build_mounts(
    settings: &MountSettings,
    state: &AppState,
) -> Result<Vec<Box<dyn Mount>>, UpstreamError> {
    let mut mounts: Vec<Box<dyn Mount>> = Vec::new();

    if let Some(url) = &settings.surface_url {
        mounts.push(Box::new(UpstreamMount::surface(
            url,
            settings.upstream_timeout,
        )?));
    }

    if settings.climsoft_enabled {
        mounts.push(Box::new(ClimsoftMount::new(
            state.clone(),
            settings.sign_in_rate_limit,
        )));
    }

    if let Some(url) = &settings.mch_url {
        mounts.push(Box::new(UpstreamMount::mch(url, settings.upstream_timeout)?));
    }

    Ok(mounts)
}
