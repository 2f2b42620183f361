use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub type NoteId = i64;

pub const DEFAULT_TITLE: &str = "New Note";
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Colors offered by the detail pane. The first entry is the default.
pub const NOTE_PALETTE: [&str; 8] = [
    DEFAULT_COLOR,
    "#fff475",
    "#fbbc04",
    "#f28b82",
    "#ccff90",
    "#a7ffeb",
    "#aecbfa",
    "#d7aefb",
];

/// A single user-authored note, stored as one element of the persisted JSON array.
///
/// `created_at` keeps the exact string that was written so a load/save cycle
/// never rewrites timestamps produced elsewhere. Only `id` and `createdAt`
/// are required; older or hand-edited records missing the rest still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<String>,
    pub created_at: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Note {
    pub fn new(id: NoteId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: default_title(),
            content: String::new(),
            color: default_color(),
            tags: Vec::new(),
            comments: Vec::new(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Appends a trimmed tag. Blank input and tags already present are ignored.
    pub fn with_tag(mut self, tag: &str) -> Self {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
        self
    }

    pub fn without_tag(mut self, tag: &str) -> Self {
        self.tags.retain(|t| t != tag);
        self
    }

    /// Appends a trimmed comment. Blank input is ignored.
    pub fn with_comment(mut self, comment: &str) -> Self {
        let comment = comment.trim();
        if !comment.is_empty() {
            self.comments.push(comment.to_string());
        }
        self
    }

    pub fn created_day(&self) -> Option<NaiveDate> {
        parse_day(&self.created_at)
    }
}

/// Resolves the UTC calendar day of a `createdAt` value.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` read as UTC, or a
/// bare `YYYY-MM-DD`.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// One bar of the notes-per-day chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCount {
    pub date: String,
    pub count: usize,
}
