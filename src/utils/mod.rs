pub mod error;
pub mod logger;
pub mod ratio;
pub mod validation;
