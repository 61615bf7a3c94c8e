/// Renders a text progress bar such as `[=====...............]`.
///
/// The bar is `multiplier / divider` characters wide at full length; filled and empty
/// segments are each rounded down, so a bar may be one character short.
///
/// # Arguments
/// - `current` - Progress made so far
/// - `goal` - Value at which the bar is full, must be positive
/// - `multiplier` - Scale applied to the filled fraction
/// - `divider` - Characters per `divider` units of scaled progress
pub fn progress_bar(current: i64, goal: i64, multiplier: i64, divider: i64) -> String {
    if goal <= 0 || divider <= 0 {
        return "[]".to_string();
    }

    let current = current.clamp(0, goal);
    let progress = (current as f64 / goal as f64 * multiplier as f64) as i64 / divider;
    let empty = ((goal - current) as f64 / goal as f64 * multiplier as f64) as i64 / divider;

    format!(
        "[{}{}]",
        "=".repeat(progress as usize),
        ".".repeat(empty as usize)
    )
}

/// Progress bar with the default width of 25 characters.
pub fn default_progress_bar(current: i64, goal: i64) -> String {
    progress_bar(current, goal, 100, 4)
}
