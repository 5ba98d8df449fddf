pub(crate) mod agent;
pub(crate) mod docs;
pub mod health_checks;

pub use health_checks::*;
