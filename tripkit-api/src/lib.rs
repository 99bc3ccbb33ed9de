//! REST collaborators for the tripkit booking engine
//!
//! Every endpoint speaks the same `{status, data|message}` envelope. The
//! clients here classify failures into [`ApiError`] before anything
//! reaches a store - the stores only ever see the final display string
//! (see [`ApiError::user_message`]).

pub mod auth;
pub mod envelope;
pub mod error;
pub mod flights;

pub use auth::{AuthClient, AuthSession, Credentials};
pub use envelope::Envelope;
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use flights::FlightsClient;
