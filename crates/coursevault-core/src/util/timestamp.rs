//! Transcript timestamp parsing.
//!
//! Accepted forms are `M:SS`, `MM:SS`, `H:MM:SS`, and any of those with a
//! fractional-seconds suffix (`M:SS.ms`).

use std::sync::LazyLock;

use regex::Regex;

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+):)?(\d{1,2}):(\d{2})(\.\d+)?$").expect("Invalid timestamp regex")
});

/// Parses a timestamp into seconds.
///
/// Returns `None` for anything that is not a well-formed timestamp,
/// including out-of-range minute or second fields.
///
/// ```
/// use coursevault_core::util::timestamp::parse_timestamp;
///
/// assert_eq!(parse_timestamp("1:30"), Some(90.0));
/// assert_eq!(parse_timestamp("1:30:00"), Some(5400.0));
/// assert_eq!(parse_timestamp("0:00.40"), Some(0.4));
/// assert_eq!(parse_timestamp("not a time"), None);
/// ```
pub fn parse_timestamp(text: &str) -> Option<f64> {
    let caps = TIMESTAMP_RE.captures(text.trim())?;

    let hours: u64 = match caps.get(1) {
        Some(h) => h.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u64 = caps.get(2)?.as_str().parse().ok()?;
    let seconds: u64 = caps.get(3)?.as_str().parse().ok()?;

    if seconds >= 60 || (caps.get(1).is_some() && minutes >= 60) {
        return None;
    }

    let fraction: f64 = match caps.get(4) {
        Some(f) => format!("0{}", f.as_str()).parse().ok()?,
        None => 0.0,
    };

    let whole = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)?;
    Some(whole as f64 + fraction)
}

/// Formats seconds as `M:SS` or `H:MM:SS`, keeping any fractional part.
///
/// ```
/// use coursevault_core::util::timestamp::format_timestamp;
///
/// assert_eq!(format_timestamp(90.0), "1:30");
/// assert_eq!(format_timestamp(3725.0), "1:02:05");
/// assert_eq!(format_timestamp(5.5), "0:05.5");
/// ```
pub fn format_timestamp(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let (whole, fraction) = (millis / 1000, millis % 1000);
    let (h, m, s) = (whole / 3600, (whole % 3600) / 60, whole % 60);

    let mut out = if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    };
    if fraction > 0 {
        let frac = format!(".{fraction:03}");
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}
