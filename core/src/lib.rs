pub mod action;
pub mod state;

pub use action::NavAction;
pub use state::{GallerySnapshot, GalleryState};
