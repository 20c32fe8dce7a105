// ABOUTME: Configuration module for the lesson-deck application
// ABOUTME: Provides layout defaults and environment variable handling

use crate::paginate::{Layout, DEFAULT_PALETTE, DEFAULT_TITLE_COLOR};
use log::warn;
use std::env;
use std::str::FromStr;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub layout: Layout,
    pub strip_emphasis: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            strip_emphasis: true,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Layout::default();

        let layout = Layout {
            max_content_height: env_or("DECK_MAX_CONTENT_HEIGHT", defaults.max_content_height),
            title_reserved_height: env_or(
                "DECK_TITLE_RESERVED_HEIGHT",
                defaults.title_reserved_height,
            ),
            line_height: env_or("DECK_LINE_HEIGHT", defaults.line_height),
            start_y: env_opt("DECK_START_Y"),
            color_palette: env::var("DECK_PALETTE")
                .ok()
                .map(|s| parse_palette(&s))
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()),
            title_color: env::var("DECK_TITLE_COLOR")
                .ok()
                .map(|s| normalize_color(&s))
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE_COLOR.to_string()),
            content_font_size: env_or("DECK_CONTENT_FONT_SIZE", defaults.content_font_size),
            title_font_size: env_or("DECK_TITLE_FONT_SIZE", defaults.title_font_size),
        };

        let strip_emphasis = env::var("DECK_STRIP_EMPHASIS")
            .ok()
            .and_then(|raw| parse_flag("DECK_STRIP_EMPHASIS", &raw))
            .unwrap_or(true);

        Self {
            layout,
            strip_emphasis,
        }
    }

    /// Get a layout with defaults from this config
    pub fn get_layout(
        &self,
        max_content_height: Option<f64>,
        line_height: Option<f64>,
        title_reserved_height: Option<f64>,
        start_y: Option<f64>,
        palette: Option<Vec<String>>,
    ) -> Layout {
        let base = &self.layout;
        Layout {
            max_content_height: max_content_height.unwrap_or(base.max_content_height),
            title_reserved_height: title_reserved_height.unwrap_or(base.title_reserved_height),
            line_height: line_height.unwrap_or(base.line_height),
            start_y: start_y.or(base.start_y),
            color_palette: palette
                .map(|p| p.iter().map(|c| normalize_color(c)).collect())
                .unwrap_or_else(|| base.color_palette.clone()),
            ..base.clone()
        }
    }
}

/// Split a comma separated color list, dropping empty entries
pub fn parse_palette(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(normalize_color)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Colors are stored as bare uppercase hex, so "#ff00aa" becomes "FF00AA"
fn normalize_color(value: &str) -> String {
    value.trim().trim_start_matches('#').to_uppercase()
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env_opt(key).unwrap_or(default)
}

fn env_opt<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| parse_value(key, &raw))
}

/// Parse a variable's value, logging and discarding anything unparseable
fn parse_value<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette() {
        assert_eq!(
            parse_palette("#ff0000, 00ff00,,0000Ff "),
            vec!["FF0000", "00FF00", "0000FF"]
        );
        assert!(parse_palette(" , ").is_empty());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<f64>("DECK_START_Y", " 3.25 "), Some(3.25));
        assert_eq!(parse_value::<f64>("DECK_START_Y", "abc"), None);
        assert_eq!(parse_value::<u32>("DECK_TITLE_FONT_SIZE", "-4"), None);
    }

    #[test]
    fn test_parse_flag() {
        for raw in ["true", "1", "YES", " on "] {
            assert_eq!(parse_flag("DECK_STRIP_EMPHASIS", raw), Some(true), "{}", raw);
        }
        for raw in ["false", "0", "No", "off"] {
            assert_eq!(parse_flag("DECK_STRIP_EMPHASIS", raw), Some(false), "{}", raw);
        }
        assert_eq!(parse_flag("DECK_STRIP_EMPHASIS", "maybe"), None);
    }

    #[test]
    fn test_get_layout_overrides() {
        let config = Config::new();
        let layout = config.get_layout(
            Some(8.0),
            None,
            None,
            Some(2.0),
            Some(vec!["#abcdef".to_string()]),
        );
        assert_eq!(layout.max_content_height, 8.0);
        assert_eq!(layout.line_height, 0.7);
        assert_eq!(layout.start_y(), 2.0);
        assert_eq!(layout.color_palette, vec!["ABCDEF"]);
        assert_eq!(layout.title_color, "002060");
    }

    #[test]
    fn test_get_layout_without_overrides_matches_config() {
        let config = Config::new();
        assert_eq!(config.get_layout(None, None, None, None, None), config.layout);
    }
}
