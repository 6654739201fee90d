//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the settings table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub const SELECT_SETTING: &str = "SELECT value FROM settings WHERE key = ?1";

pub const UPSERT_SETTING: &str = r#"
INSERT INTO settings (key, value) VALUES (?1, ?2)
ON CONFLICT(key) DO UPDATE SET value = excluded.value
"#;

pub const FLAG_TRUE: &str = "true";
pub const FLAG_FALSE: &str = "false";

/// Encode a flag as stored in the `value` column.
pub fn format_flag(value: bool) -> &'static str {
    if value {
        FLAG_TRUE
    } else {
        FLAG_FALSE
    }
}

/// Decode a flag from the `value` column.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value {
        FLAG_TRUE => Some(true),
        FLAG_FALSE => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_encoding() {
        assert_eq!(format_flag(true), "true");
        assert_eq!(format_flag(false), "false");
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("yes"), None);
    }
}
