use thiserror::Error;

/// Result type alias using LandingError
pub type Result<T> = std::result::Result<T, LandingError>;

/// Errors raised while setting up a landing area or parsing its inputs.
///
/// Rejected landings are not errors; they come back as
/// [`LandingResult`](super::LandingResult) values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandingError {
    /// A numeric argument fell outside its accepted range
    #[error("Specified argument was out of the range of valid values. (Parameter '{parameter}')")]
    OutOfRange { parameter: &'static str, value: u8 },

    /// Coordinate text that is not of the form `X,Y`
    #[error("Invalid position '{input}': {reason}")]
    InvalidPosition { input: String, reason: String },
}
