pub mod errors;
pub mod types;

pub use errors::{ConfigError, MosaicError};
pub use types::{Color, PaneId, Point, Rect};

pub type Result<T> = std::result::Result<T, MosaicError>;
