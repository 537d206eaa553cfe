//! Conversion of delays into the argument format understood by `tc`.

use std::time::Duration;

/// Unit suffix appended to every delay argument.
pub const UNIT: &str = "ms";

/// Returns the number of whole milliseconds in `delay`. Any sub-millisecond remainder is
/// truncated.
#[inline]
pub fn to_millis(delay: Duration) -> u128 {
    delay.as_millis()
}

/// Formats `delay` as a `tc` time argument, e.g. `100ms`.
///
/// The value is always expressed in milliseconds. `tc` may print it back in a different unit
/// (`2000ms` is shown as `2.0s`).
pub fn format(delay: Duration) -> String {
    format!("{}{UNIT}", to_millis(delay))
}
