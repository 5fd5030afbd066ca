// One module per resource, one file per endpoint.
pub mod applications;
pub mod auth;
pub mod schemes;
