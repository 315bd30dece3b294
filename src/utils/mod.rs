//! Utility functions for ttget

pub mod html;
pub mod mime;
pub mod url;

pub use self::html::*;
pub use self::mime::*;
pub use self::url::*;
