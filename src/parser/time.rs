//! Race time conversion
//!
//! Result sheets print times either as plain seconds (`31.45`) or with a
//! minute part (`1:05.32`). Both convert to elapsed seconds here.

/// Convert a time token into elapsed seconds.
///
/// Returns `None` for anything that does not read as a positive, finite
/// duration: empty or non-numeric input, more than one minute separator,
/// zero and negative values.
pub fn parse_time(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }

    let seconds = match normalized.split_once(':') {
        Some((minutes, seconds)) => {
            if seconds.contains(':') {
                return None;
            }
            let minutes = minutes.trim();
            if minutes.is_empty() || !minutes.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let minutes = minutes.parse::<u32>().ok()?;
            let seconds = parse_decimal(seconds)?;
            f64::from(minutes) * 60.0 + seconds
        }
        None => parse_decimal(&normalized)?,
    };

    (seconds.is_finite() && seconds > 0.0).then_some(seconds)
}

/// Parse an unsigned decimal. Signs and the textual forms `f64::from_str`
/// accepts ("inf", "NaN") are rejected.
fn parse_decimal(value: &str) -> Option<f64> {
    let value = value.trim();
    if !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    value.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_textual_floats() {
        assert_eq!(parse_time("inf"), None);
        assert_eq!(parse_time("NaN"), None);
        assert_eq!(parse_time("1:inf"), None);
    }

    #[test]
    fn test_rejects_signed_components() {
        assert_eq!(parse_time("-5.00"), None);
        assert_eq!(parse_time("1:-5.00"), None);
        assert_eq!(parse_time("+5.00"), None);
        assert_eq!(parse_time("+1:05.32"), None);
        assert_eq!(parse_time("-1:05.32"), None);
    }
}
