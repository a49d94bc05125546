// Display helpers shared by the components.

/// `0x1234...abcd` form of an address. Short inputs are returned unchanged.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Completion in percent, capped at 100.
pub fn progress_percent(clicks: u32, total: u32) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (clicks as f64 / total as f64 * 100.0).min(100.0)
}

pub fn clicks_to_go_label(remaining: u32) -> String {
    let plural = if remaining == 1 { "" } else { "s" };
    format!("{} more click{} to go! 🚀", remaining, plural)
}
