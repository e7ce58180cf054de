//! Duration parsing and formatting helpers.

/// Parse a duration string like "25", "25m", or "1h30m" into whole minutes.
///
/// A bare number is taken as minutes. Returns `None` for anything that
/// doesn't parse or that comes out as zero minutes.
#[must_use]
pub fn parse_minutes(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<u32>() {
        return (minutes > 0).then_some(minutes);
    }

    let mut total: u32 = 0;
    let mut current = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else {
            if current.is_empty() {
                return None;
            }
            let num: u32 = current.parse().ok()?;
            current.clear();

            match c {
                'h' => total = total.checked_add(num.checked_mul(60)?)?,
                'm' => total = total.checked_add(num)?,
                _ => return None,
            }
        }
    }

    // Trailing number without a unit counts as minutes.
    if !current.is_empty() {
        total = total.checked_add(current.parse().ok()?)?;
    }

    (total > 0).then_some(total)
}

/// Format whole minutes as a human-readable string ("25 minutes", "1 hour, 30 minutes").
#[must_use]
pub fn format_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let plural = |n: u32, unit: &str| format!("{n} {unit}{}", if n == 1 { "" } else { "s" });

    if hours > 0 && minutes > 0 {
        format!("{}, {}", plural(hours, "hour"), plural(minutes, "minute"))
    } else if hours > 0 {
        plural(hours, "hour")
    } else {
        plural(minutes, "minute")
    }
}
