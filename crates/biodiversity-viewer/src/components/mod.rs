//! UI components for the biodiversity viewer.

mod app;
mod filter_bar;
mod home;
mod map_page;
mod map_view;
mod modal;
mod search;
mod species_details;
mod toast;

pub use app::*;
pub use filter_bar::*;
pub use home::*;
pub use map_page::*;
pub use map_view::*;
pub use modal::*;
pub use search::*;
pub use species_details::*;
pub use toast::*;
