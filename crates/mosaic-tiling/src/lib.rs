pub mod layout;
pub mod manager;
pub mod pane;

pub use layout::LayoutEngine;
pub use manager::TilingManager;
pub use pane::Pane;
