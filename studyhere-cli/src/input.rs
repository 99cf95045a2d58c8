//! Normalization of raw user input into core values

/// Turn raw capacity text into a minimum capacity
///
/// Empty, non-numeric, NaN and negative input all become 0. Positive
/// infinity and anything too large saturate to `u32::MAX`. Fractions round
/// up, since a space of capacity 12 cannot seat 12.5.
pub fn coerce_capacity(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        // Float to int casts saturate, infinity included
        Ok(value) if value > 0.0 => value.ceil() as u32,
        _ => 0,
    }
}

/// Parse an on/off style flag
pub fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
