mod dom;
mod gallery_runtime;
mod gallery_view;

pub use gallery_runtime::{is_mounted, run, shutdown};
