//! landing-area - Validate rocket landings on a bounded square platform

pub mod config;
pub mod landing;
pub mod logging;

pub use landing::{
    LandingArea, LandingError, LandingResult, PlatformSize, Position, SharedLandingArea,
};
