//! Number formatting for report output.

/// Values closer than this to an integer are printed as integers.
pub const INTEGER_EPSILON: f64 = 1e-9;

/// Formats a value for display.
///
/// Integer-valued numbers get exactly one decimal digit (`3` -> `"3.0"`);
/// everything else uses the shortest representation that parses back to
/// the same `f64`. Only the string is normalized, never the value.
pub fn format_number(value: f64) -> String {
    if (value - value.round()).abs() < INTEGER_EPSILON {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
