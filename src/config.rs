use std::str::FromStr;

use log::LevelFilter;

/// Order of the bars in the notes-per-day chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartOrder {
    /// Days appear in the order their first note appears in the collection.
    #[default]
    FirstSeen,
    Chronological,
}

impl FromStr for ChartOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first_seen" | "first-seen" => Ok(ChartOrder::FirstSeen),
            "chronological" => Ok(ChartOrder::Chronological),
            other => Err(format!("unknown chart order '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Local storage key holding the notes array.
    pub storage_key: String,
    pub username: String,
    pub password: String,
    pub log_level: String,
    pub chart_order: ChartOrder,
    pub chart_color: String,
    /// Chart height in pixels.
    pub chart_height: u32,
    /// When false, deleting a note only clears the selection if that note was selected.
    pub clear_selection_on_any_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "notes".to_string(),
            username: "user".to_string(),
            password: "pass".to_string(),
            log_level: "info".to_string(),
            chart_order: ChartOrder::FirstSeen,
            chart_color: "#8884d8".to_string(),
            chart_height: 300,
            clear_selection_on_any_delete: true,
        }
    }
}

impl Config {
    /// Applies overrides baked in at build time (`NOTES_*` variables).
    pub fn from_env() -> Self {
        Self::from_overrides(|name| match name {
            "NOTES_STORAGE_KEY" => option_env!("NOTES_STORAGE_KEY"),
            "NOTES_USERNAME" => option_env!("NOTES_USERNAME"),
            "NOTES_PASSWORD" => option_env!("NOTES_PASSWORD"),
            "NOTES_LOG_LEVEL" => option_env!("NOTES_LOG_LEVEL"),
            "NOTES_CHART_ORDER" => option_env!("NOTES_CHART_ORDER"),
            _ => None,
        })
    }

    fn from_overrides<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut config = Self::default();
        if let Some(key) = lookup("NOTES_STORAGE_KEY").filter(|v| !v.is_empty()) {
            config.storage_key = key.to_string();
        }
        if let Some(username) = lookup("NOTES_USERNAME") {
            config.username = username.to_string();
        }
        if let Some(password) = lookup("NOTES_PASSWORD") {
            config.password = password.to_string();
        }
        if let Some(level) = lookup("NOTES_LOG_LEVEL") {
            config.log_level = level.to_string();
        }
        if let Some(order) = lookup("NOTES_CHART_ORDER").and_then(|v| v.parse().ok()) {
            config.chart_order = order;
        }
        config
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_behavior() {
        let config = Config::default();
        assert_eq!(config.storage_key, "notes");
        assert_eq!((config.username.as_str(), config.password.as_str()), ("user", "pass"));
        assert_eq!(config.chart_order, ChartOrder::FirstSeen);
        assert!(config.clear_selection_on_any_delete);
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = Config::from_overrides(|name| match name {
            "NOTES_STORAGE_KEY" => Some("scratch"),
            "NOTES_LOG_LEVEL" => Some("debug"),
            "NOTES_CHART_ORDER" => Some("chronological"),
            _ => None,
        });
        assert_eq!(config.storage_key, "scratch");
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
        assert_eq!(config.chart_order, ChartOrder::Chronological);
        assert_eq!(config.username, "user");
    }

    #[test]
    fn bad_overrides_are_ignored() {
        let config = Config::from_overrides(|name| match name {
            "NOTES_STORAGE_KEY" => Some(""),
            "NOTES_LOG_LEVEL" => Some("loud"),
            "NOTES_CHART_ORDER" => Some("random"),
            _ => None,
        });
        assert_eq!(config.storage_key, "notes");
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
        assert_eq!(config.chart_order, ChartOrder::FirstSeen);
    }
}
