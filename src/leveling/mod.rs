//! Experience and level progression engine.
//!
//! Levels are reached by spending experience: reaching level `n` from level `n - 1`
//! costs `threshold(n)` experience, and whatever is left over carries into the next
//! level. Everything in this module is pure and synchronous, so it can be called from
//! any handler or scheduled job without coordination.
//!
//! The cost curve grows quadratically up to level 90 and switches to a square-root
//! curve from level 91 on. Stored member progress is relative to this curve, so the
//! formula must not change.

pub mod progress;

pub use progress::{ExperienceGain, Progress};

use thiserror::Error;

/// Experience required to reach level 1.
const BASE_EXPERIENCE: f64 = 1000.0;

/// Highest level using the quadratic cost curve.
const QUADRATIC_LEVEL_CAP: i32 = 90;

const QUADRATIC_FACTOR: f64 = 1.2;

const SQRT_FACTOR: f64 = 1024.0;

/// Highest level a subject can reach.
///
/// Up to and including `MAX_LEVEL + 1` every level costs strictly more than the one
/// before it; past that point the square-root curve grows by less than one
/// experience per level.
pub const MAX_LEVEL: i32 = 262_144;

/// Errors raised by the leveling engine for out-of-range input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelingError {
    /// A level below the valid range was supplied.
    ///
    /// Thresholds exist for levels `>= 1`; a current level may be `0`.
    #[error("Invalid level {0}")]
    InvalidLevel(i64),

    /// A negative experience amount was supplied.
    ///
    /// Experience can only ever be granted, never removed.
    #[error("Invalid experience amount {0}")]
    InvalidExperience(i64),

    /// A level computation would exceed the representable range.
    #[error("Experience or level overflow")]
    Overflow,
}

/// Experience needed to advance from level `level - 1` to `level`.
///
/// # Arguments
/// - `level` - Target level, must be at least 1
///
/// # Returns
/// - `Ok(i64)` - Experience cost of the level
/// - `Err(LevelingError::InvalidLevel)` - `level` is 0 or negative
pub fn threshold(level: i32) -> Result<i64, LevelingError> {
    if level < 1 {
        return Err(LevelingError::InvalidLevel(level as i64));
    }

    if level == 1 {
        return Ok(BASE_EXPERIENCE as i64);
    }

    let steps = (level - 1) as i64;
    let cost = if level <= QUADRATIC_LEVEL_CAP {
        BASE_EXPERIENCE + QUADRATIC_FACTOR * (steps * steps) as f64
    } else {
        BASE_EXPERIENCE + SQRT_FACTOR * (steps as f64).sqrt()
    };

    Ok(cost.ceil() as i64)
}

/// Resolves accumulated experience into levels.
///
/// Spends `experience` on consecutive levels starting at `level + 1` for as long as
/// it covers the next threshold. The returned progress always satisfies
/// `experience < threshold(level + 1)`.
///
/// Progress saturates at [`MAX_LEVEL`]: experience that would carry a subject past
/// it is dropped, leaving `threshold(MAX_LEVEL + 1) - 1` experience at the cap.
///
/// # Arguments
/// - `level` - Current level, 0 for a subject that has never leveled up
/// - `experience` - Experience held at that level, including any newly granted amount
///
/// # Returns
/// - `Ok(Progress)` - Resulting level and leftover experience
/// - `Err(LevelingError::InvalidLevel)` - `level` is negative or above `MAX_LEVEL`
/// - `Err(LevelingError::InvalidExperience)` - `experience` is negative
pub fn resolve(level: i32, experience: i64) -> Result<Progress, LevelingError> {
    if !(0..=MAX_LEVEL).contains(&level) {
        return Err(LevelingError::InvalidLevel(level as i64));
    }
    if experience < 0 {
        return Err(LevelingError::InvalidExperience(experience));
    }

    let capped = Progress {
        level: MAX_LEVEL,
        experience: threshold(MAX_LEVEL + 1)? - 1,
    };

    // Upper bound of everything that can still be spent from `level`
    let remaining_levels = (MAX_LEVEL - level) as i64;
    let saturation = remaining_levels
        .saturating_mul(threshold(MAX_LEVEL)?)
        .saturating_add(threshold(MAX_LEVEL + 1)?);
    if experience >= saturation {
        return Ok(capped);
    }

    let mut level = level;
    let mut experience = experience;

    while level < MAX_LEVEL {
        let cost = threshold(level + 1)?;

        if experience < cost {
            return Ok(Progress { level, experience });
        }

        experience -= cost;
        level += 1;
    }

    Ok(Progress {
        level,
        experience: experience.min(capped.experience),
    })
}

/// Experience granted to each member of a voice channel per minute.
///
/// Scales with the channel size: a quarter of the members times `base`, rounded up.
///
/// # Arguments
/// - `channel_members` - Number of members currently in the voice channel
/// - `base` - Base experience per tick
pub fn voice_tick_experience(channel_members: usize, base: i64) -> i64 {
    (channel_members as f64 / 4.0 * base as f64).ceil() as i64
}
