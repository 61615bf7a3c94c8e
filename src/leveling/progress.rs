//! Progress of a subject (member or server) along the level curve.

use super::{resolve, threshold, LevelingError};

/// Current level and the experience accumulated towards the next one.
///
/// A valid progress always holds less experience than the next level costs,
/// see [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub level: i32,
    pub experience: i64,
}

impl Progress {
    pub fn new(level: i32, experience: i64) -> Self {
        Self { level, experience }
    }

    /// Experience needed to complete the current level.
    pub fn next_threshold(&self) -> Result<i64, LevelingError> {
        let next = self.level.checked_add(1).ok_or(LevelingError::Overflow)?;
        threshold(next)
    }

    /// Grants experience and resolves any resulting level-ups.
    ///
    /// Experience beyond what the level cap can hold is dropped, see [`resolve`].
    ///
    /// # Arguments
    /// - `amount` - Experience to add, must not be negative
    ///
    /// # Returns
    /// - `Ok(ExperienceGain)` - Progress before and after the grant
    /// - `Err(LevelingError::InvalidExperience)` - `amount` is negative
    /// - `Err(LevelingError::InvalidLevel)` - Stored level is outside the level range
    pub fn gain(self, amount: i64) -> Result<ExperienceGain, LevelingError> {
        if amount < 0 {
            return Err(LevelingError::InvalidExperience(amount));
        }

        let total = self.experience.saturating_add(amount);
        let current = resolve(self.level, total)?;

        Ok(ExperienceGain {
            previous: self,
            current,
            amount,
        })
    }
}

/// Result of granting experience to a [`Progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceGain {
    pub previous: Progress,
    pub current: Progress,
    pub amount: i64,
}

impl ExperienceGain {
    pub fn leveled_up(&self) -> bool {
        self.current.level > self.previous.level
    }

    pub fn levels_gained(&self) -> i32 {
        self.current.level - self.previous.level
    }
}
