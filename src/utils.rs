use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates to a maximum display width, appending "..." when cut. Width
/// aware: the Vietnamese explanation text mixes narrow and combining
/// characters, so byte or char counts would misalign the review columns.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    format!("{}...", out)
}

/// Formats the countdown as minutes:seconds, minutes unpadded ("120:00",
/// "9:05").
pub fn format_clock(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}", minutes, seconds)
}
