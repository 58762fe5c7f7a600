mod geolocation;
mod navigate;

pub use self::geolocation::{
    Geolocation, GeolocationError, GeolocationOperation, GeolocationOptions, GeolocationResult,
};
pub use self::navigate::{Navigate, NavigateOperation};

// Crux built-ins used directly: Http carries the data-service requests,
// Render tells the shell to re-read the view model.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
    pub location: Geolocation<Event>,
    pub navigate: Navigate<Event>,
}
