use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::LatLng;

// --- Operation ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u64,
    pub max_age_ms: u64,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: crate::LOCATION_TIMEOUT_MS,
            max_age_ms: crate::LOCATION_MAX_AGE_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeolocationOperation {
    GetCurrentPosition { options: GeolocationOptions },
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("location services unavailable")]
    Unavailable,
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position acquisition timed out")]
    Timeout,
    #[error("position unavailable: {reason}")]
    PositionUnavailable { reason: String },
}

pub type GeolocationResult = Result<LatLng, GeolocationError>;

impl Operation for GeolocationOperation {
    type Output = GeolocationResult;
}

// --- Capability ---

/// Device location sensor. One-shot reads only; watch/subscription is a
/// shell concern.
#[derive(Clone)]
pub struct Geolocation<Ev> {
    context: CapabilityContext<GeolocationOperation, Ev>,
}

impl<Ev> Capability<Ev> for Geolocation<Ev> {
    type Operation = GeolocationOperation;
    type MappedSelf<MappedEv> = Geolocation<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static,
    {
        Geolocation::new(self.context.map_event(f))
    }
}

impl<Ev> Geolocation<Ev> {
    pub fn new(context: CapabilityContext<GeolocationOperation, Ev>) -> Self {
        Self { context }
    }
}

impl<Ev> Geolocation<Ev>
where
    Ev: Send + 'static,
{
    pub fn get_current_position<F>(&self, options: GeolocationOptions, make_event: F)
    where
        F: FnOnce(GeolocationResult) -> Ev + Send + Sync + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let result = ctx
                .request_from_shell(GeolocationOperation::GetCurrentPosition { options })
                .await;
            ctx.update_app(make_event(result));
        });
    }
}
