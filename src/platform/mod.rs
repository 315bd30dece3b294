//! Third-party extraction providers and the HTTP plumbing they share

pub mod client;
pub mod provider;
pub mod scrape;
pub mod snaptik;
pub mod tikwm;
pub mod ttdownloader;

pub use client::*;
pub use provider::*;
pub use scrape::*;
pub use snaptik::*;
pub use tikwm::*;
pub use ttdownloader::*;
