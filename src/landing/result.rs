use serde::Serialize;
use std::fmt;

/// Outcome of a landing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingResult {
    /// At least one coordinate lies outside the platform square
    OutOfPlatform,
    /// Too close to the previous rocket
    Clash,
    /// Accepted; the rocket is now the previous rocket
    OkForLanding,
}

impl LandingResult {
    pub fn is_ok(self) -> bool {
        self == LandingResult::OkForLanding
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LandingResult::OutOfPlatform => "out of platform",
            LandingResult::Clash => "clash",
            LandingResult::OkForLanding => "ok for landing",
        }
    }
}

impl fmt::Display for LandingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
