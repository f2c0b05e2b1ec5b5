pub mod area;
pub mod error;
pub mod position;
pub mod result;
pub mod shared;

pub use area::{LandingArea, MAX_PLATFORM_SIZE, MIN_PLATFORM_SIZE, PlatformSize, STARTING_POINT};
pub use error::{LandingError, Result};
pub use position::Position;
pub use result::LandingResult;
pub use shared::SharedLandingArea;
