use std::sync::{Arc, Mutex, MutexGuard};

use super::area::LandingArea;
use super::position::Position;
use super::result::LandingResult;

/// A landing area that can be handed to several threads.
///
/// The lock is held across the clash check and the position update, so two
/// rockets can never both be accepted onto neighbouring squares.
#[derive(Debug, Clone)]
pub struct SharedLandingArea {
    inner: Arc<Mutex<LandingArea>>,
}

impl SharedLandingArea {
    pub fn new(area: LandingArea) -> Self {
        Self {
            inner: Arc::new(Mutex::new(area)),
        }
    }

    pub fn is_landing_possible(&self, rocket_x: u8, rocket_y: u8) -> LandingResult {
        self.lock().is_landing_possible(rocket_x, rocket_y)
    }

    pub fn check(&self, position: Position) -> LandingResult {
        self.lock().check(position)
    }

    pub fn last_landing(&self) -> Option<Position> {
        self.lock().last_landing()
    }

    pub fn platform_size(&self) -> u8 {
        self.lock().platform_size()
    }

    // A panic while holding the lock cannot leave the area half-updated:
    // the only write is a single Option assignment.
    fn lock(&self) -> MutexGuard<'_, LandingArea> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<LandingArea> for SharedLandingArea {
    fn from(area: LandingArea) -> Self {
        Self::new(area)
    }
}
