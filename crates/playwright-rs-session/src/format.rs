// Human-readable durations for session diagnostics

/// Formats a signed number of seconds as `"Xd Yh Zm Ws"`.
///
/// Days appear only when non-zero, hours when non-zero or when days are shown;
/// minutes and seconds are always present. Negative inputs keep a leading `-`.
///
/// ```ignore
/// assert_eq!(format_time(-65.0), "-1m 5s");
/// assert_eq!(format_time(90000.0), "1d 1h 0m 0s");
/// ```
pub fn format_time(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let total = seconds.abs().round() as u64;

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    let mut out = String::from(sign);
    if days > 0 {
        out.push_str(&format!("{days}d "));
    }
    if hours > 0 || days > 0 {
        out.push_str(&format!("{hours}h "));
    }
    out.push_str(&format!("{minutes}m {secs}s"));
    out
}
