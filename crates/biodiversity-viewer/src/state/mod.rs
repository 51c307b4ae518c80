//! State management for the biodiversity viewer.

pub mod app_state;
pub mod notifications;
pub mod route;

pub use app_state::*;
pub use notifications::*;
pub use route::*;
