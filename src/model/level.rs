//! Level domain model.

/// A level with its memoized experience cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Level number, starting at 1.
    pub value: i32,
    /// Optional display title, unique across levels.
    pub title: Option<String>,
    /// Experience needed to reach this level from the previous one.
    pub exp: i64,
}

impl Level {
    pub fn from_entity(entity: entity::level::Model) -> Self {
        Self {
            value: entity.value,
            title: entity.title,
            exp: entity.exp,
        }
    }
}
