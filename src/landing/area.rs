use std::ops::RangeInclusive;

use super::error::{LandingError, Result};
use super::position::Position;
use super::result::LandingResult;

/// Coordinate where the platform square begins on both axes
pub const STARTING_POINT: u8 = 5;
pub const MIN_PLATFORM_SIZE: u8 = 1;
pub const MAX_PLATFORM_SIZE: u8 = 95;

const PLATFORM_SIZE_PARAM: &str = "landingPlatformSize";

/// Side length of a landing platform, guaranteed to be within
/// `MIN_PLATFORM_SIZE..=MAX_PLATFORM_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformSize(u8);

impl PlatformSize {
    pub fn new(size: u8) -> Result<Self> {
        if !(MIN_PLATFORM_SIZE..=MAX_PLATFORM_SIZE).contains(&size) {
            return Err(LandingError::OutOfRange {
                parameter: PLATFORM_SIZE_PARAM,
                value: size,
            });
        }
        Ok(Self(size))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PlatformSize {
    type Error = LandingError;

    fn try_from(size: u8) -> Result<Self> {
        Self::new(size)
    }
}

/// A square landing platform that remembers the last rocket it accepted.
///
/// Usable squares run from `STARTING_POINT` (inclusive) to
/// `STARTING_POINT + size` (exclusive) on both axes. A request is checked
/// against the bounds first, then against the previous accepted landing;
/// only accepted landings change state.
#[derive(Debug, Clone)]
pub struct LandingArea {
    size: PlatformSize,
    last_landing: Option<Position>,
}

impl LandingArea {
    /// Create a landing area, rejecting sizes outside `1..=95`
    pub fn new(platform_size: u8) -> Result<Self> {
        let size = PlatformSize::new(platform_size)?;
        tracing::info!(platform_size, "Landing area ready");
        Ok(Self::with_size(size))
    }

    pub fn with_size(size: PlatformSize) -> Self {
        Self {
            size,
            last_landing: None,
        }
    }

    pub fn platform_size(&self) -> u8 {
        self.size.get()
    }

    /// Position of the most recent accepted rocket, if any
    pub fn last_landing(&self) -> Option<Position> {
        self.last_landing
    }

    /// Inclusive coordinate range of the platform, shared by both axes
    pub fn bounds(&self) -> RangeInclusive<u8> {
        // STARTING_POINT + MAX_PLATFORM_SIZE stays well under u8::MAX
        STARTING_POINT..=STARTING_POINT + self.size.get() - 1
    }

    /// Whether a position lies on the platform, ignoring other rockets
    pub fn contains(&self, position: Position) -> bool {
        let bounds = self.bounds();
        bounds.contains(&position.x) && bounds.contains(&position.y)
    }

    /// Decide whether a rocket may land at `(rocket_x, rocket_y)`.
    ///
    /// Returns `OutOfPlatform` for squares off the platform, `Clash` when the
    /// square is the previous rocket's or one of its eight neighbours, and
    /// `OkForLanding` otherwise. Only `OkForLanding` updates the remembered
    /// position.
    pub fn is_landing_possible(&mut self, rocket_x: u8, rocket_y: u8) -> LandingResult {
        self.check(Position::new(rocket_x, rocket_y))
    }

    pub fn check(&mut self, position: Position) -> LandingResult {
        if !self.contains(position) {
            tracing::debug!(%position, "Rejected: out of platform");
            return LandingResult::OutOfPlatform;
        }

        if let Some(last) = self.last_landing
            && last.is_adjacent_to(&position)
        {
            tracing::debug!(%position, %last, "Rejected: clash with previous rocket");
            return LandingResult::Clash;
        }

        self.last_landing = Some(position);
        tracing::debug!(%position, "Accepted");
        LandingResult::OkForLanding
    }

    /// Forget the previous rocket
    pub fn reset(&mut self) {
        self.last_landing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_valid_size() {
        for size in MIN_PLATFORM_SIZE..=MAX_PLATFORM_SIZE {
            let area = LandingArea::new(size).unwrap();
            assert_eq!(area.platform_size(), size);
            assert_eq!(area.last_landing(), None);
        }
    }

    #[test]
    fn test_rejects_too_small_size() {
        let err = LandingArea::new(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Specified argument was out of the range of valid values. (Parameter 'landingPlatformSize')"
        );
    }

    #[test]
    fn test_rejects_too_big_size() {
        for size in [96, 123, u8::MAX] {
            let err = LandingArea::new(size).unwrap_err();
            assert_eq!(
                err,
                LandingError::OutOfRange {
                    parameter: "landingPlatformSize",
                    value: size
                }
            );
        }
    }

    #[test]
    fn test_platform_size_try_from() {
        assert_eq!(PlatformSize::try_from(42).unwrap().get(), 42);
        assert!(PlatformSize::try_from(0).is_err());
        assert!(PlatformSize::try_from(96).is_err());
    }

    #[test]
    fn test_bounds() {
        let area = LandingArea::new(10).unwrap();
        assert_eq!(area.bounds(), 5..=14);

        let area = LandingArea::new(MAX_PLATFORM_SIZE).unwrap();
        assert_eq!(area.bounds(), 5..=99);

        let area = LandingArea::new(1).unwrap();
        assert!(area.contains(Position::new(5, 5)));
        assert!(!area.contains(Position::new(6, 5)));
    }

    #[test]
    fn test_out_of_platform() {
        for (size, x, y) in [(10, 4, 4), (15, 4, 5), (25, 5, 4), (20, 30, 30)] {
            let mut area = LandingArea::new(size).unwrap();
            assert_eq!(
                area.is_landing_possible(x, y),
                LandingResult::OutOfPlatform,
                "size {} at ({}, {})",
                size,
                x,
                y
            );
        }
    }

    #[test]
    fn test_upper_edge_is_exclusive() {
        let mut area = LandingArea::new(10).unwrap();
        assert_eq!(area.is_landing_possible(15, 10), LandingResult::OutOfPlatform);
        assert_eq!(area.is_landing_possible(10, 15), LandingResult::OutOfPlatform);
        assert_eq!(area.is_landing_possible(14, 14), LandingResult::OkForLanding);
    }

    #[test]
    fn test_ok_inside_platform() {
        for (size, x, y) in [(10, 10, 10), (15, 19, 19), (20, 5, 24), (25, 29, 5)] {
            let mut area = LandingArea::new(size).unwrap();
            assert_eq!(
                area.is_landing_possible(x, y),
                LandingResult::OkForLanding,
                "size {} at ({}, {})",
                size,
                x,
                y
            );
        }
    }

    #[test]
    fn test_clash_same_square() {
        let mut area = LandingArea::new(10).unwrap();
        assert_eq!(area.is_landing_possible(10, 10), LandingResult::OkForLanding);
        assert_eq!(area.is_landing_possible(10, 10), LandingResult::Clash);

        for (x, y) in [(10, 10), (15, 15)] {
            let mut area = LandingArea::new(50).unwrap();
            area.is_landing_possible(x, y);
            assert_eq!(area.is_landing_possible(x, y), LandingResult::Clash);
        }
    }

    #[test]
    fn test_clash_one_square_away() {
        let cases = [
            ((10, 10), (11, 11)),
            ((15, 15), (14, 14)),
            ((20, 20), (19, 21)),
            ((25, 25), (26, 24)),
        ];
        for (first, second) in cases {
            let mut area = LandingArea::new(50).unwrap();
            assert_eq!(area.check(first.into()), LandingResult::OkForLanding);
            assert_eq!(
                area.check(second.into()),
                LandingResult::Clash,
                "{:?} then {:?}",
                first,
                second
            );
        }
    }

    #[test]
    fn test_ok_two_squares_away() {
        let cases = [
            ((10, 10), (12, 12)),
            ((15, 15), (13, 13)),
            ((20, 20), (18, 21)),
            ((25, 25), (26, 23)),
        ];
        for (first, second) in cases {
            let mut area = LandingArea::new(50).unwrap();
            assert_eq!(area.check(first.into()), LandingResult::OkForLanding);
            assert_eq!(
                area.check(second.into()),
                LandingResult::OkForLanding,
                "{:?} then {:?}",
                first,
                second
            );
        }
    }

    #[test]
    fn test_only_previous_rocket_counts() {
        let mut area = LandingArea::new(50).unwrap();
        assert_eq!(area.is_landing_possible(10, 10), LandingResult::OkForLanding);
        assert_eq!(area.is_landing_possible(15, 15), LandingResult::OkForLanding);
        assert_eq!(area.is_landing_possible(10, 10), LandingResult::OkForLanding);
        assert_eq!(area.last_landing(), Some(Position::new(10, 10)));
    }

    #[test]
    fn test_rejections_do_not_move_last_landing() {
        let mut area = LandingArea::new(20).unwrap();
        area.is_landing_possible(10, 10);

        assert_eq!(area.is_landing_possible(2, 2), LandingResult::OutOfPlatform);
        assert_eq!(area.is_landing_possible(11, 10), LandingResult::Clash);
        assert_eq!(area.last_landing(), Some(Position::new(10, 10)));

        // (12, 11) would clash with (11, 10), but that attempt was refused
        assert_eq!(area.is_landing_possible(12, 11), LandingResult::OkForLanding);
    }

    #[test]
    fn test_first_landing_near_origin_is_not_a_clash() {
        let mut area = LandingArea::new(1).unwrap();
        assert_eq!(area.is_landing_possible(5, 5), LandingResult::OkForLanding);
    }

    #[test]
    fn test_reset() {
        let mut area = LandingArea::new(10).unwrap();
        area.is_landing_possible(10, 10);
        area.reset();

        assert_eq!(area.last_landing(), None);
        assert_eq!(area.is_landing_possible(10, 10), LandingResult::OkForLanding);
    }
}
