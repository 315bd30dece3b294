//! Core request handling: validation, resolution and response formatting

pub mod messages;
pub mod request;
pub mod resolver;
pub mod response;

pub use messages::*;
pub use request::*;
pub use resolver::*;
pub use response::*;
