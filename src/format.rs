use crate::types::parse_day;

const PREVIEW_LINES: usize = 2;
const PREVIEW_CHARS: usize = 80;

/// Date shown next to a note in the list. Uses the same UTC `YYYY-MM-DD`
/// day the chart buckets by, so a note and its bar always agree.
pub fn display_date(created_at: &str) -> String {
    parse_day(created_at)
        .map(|day| day.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| created_at.to_string())
}

/// First lines of a note body, cut with an ellipsis when there is more.
pub fn preview(content: &str) -> String {
    let lines: Vec<&str> = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(PREVIEW_LINES + 1)
        .collect();
    let mut text = lines
        .iter()
        .take(PREVIEW_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let mut truncated = lines.len() > PREVIEW_LINES;
    if text.chars().count() > PREVIEW_CHARS {
        text = text.chars().take(PREVIEW_CHARS).collect();
        truncated = true;
    }
    if truncated {
        format!("{}...", text.trim_end())
    } else {
        text
    }
}

pub fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count != 1 { "s" } else { "" })
}
