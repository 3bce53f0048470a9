use chrono::{DateTime, NaiveDateTime, Utc};

use crate::constants::{DISPLAY_TIME_FORMAT, KEY_MASK_THRESHOLD};

/// Masks a key name for table display: `sk-proxy-abcdef-Oktg` becomes
/// `sk-...Oktg`. Names at or under the threshold pass through unmasked.
/// Key names come off the wire, so slicing stays on char boundaries.
pub fn mask_key(name: &str) -> String {
    let len = name.chars().count();
    if len <= KEY_MASK_THRESHOLD {
        return name.to_string();
    }
    let prefix: String = name.chars().take(2).collect();
    let suffix: String = name.chars().skip(len - 4).collect();
    format!("{}-...{}", prefix, suffix)
}

/// `-` placeholder for empty optional fields.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// Reformats a wire timestamp for display; unparseable values are shown
/// verbatim.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_TIME_FORMAT).to_string();
    }
    // Some endpoints omit the offset.
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY_TIME_FORMAT).to_string();
    }
    raw.to_string()
}

/// Epoch seconds (the `/models` listing) to the display format.
pub fn format_epoch(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(t) => t.format(DISPLAY_TIME_FORMAT).to_string(),
        None => secs.to_string(),
    }
}

pub fn format_spend(spend: f64) -> String {
    format!("${:.2}", spend)
}

/// First model of a key, for narrow listings.
pub fn first_model(models: &[String]) -> &str {
    models.first().map(String::as_str).unwrap_or("-")
}

/// `all-team-models` stays symbolic; concrete lists collapse to a count.
pub fn summarize_models(models: &[String]) -> String {
    if models.is_empty() || models[0] == "all-team-models" {
        "all-team-models".to_string()
    } else {
        format!("{} models", models.len())
    }
}

/// Like `summarize_models`, but spells the list out.
pub fn join_models(models: &[String]) -> String {
    if models.is_empty() || models[0] == "all-team-models" {
        "all-team-models".to_string()
    } else {
        models.join(", ")
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 1).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_key_over_threshold() {
        assert_eq!(mask_key("sk-proxy-abcdef-Oktg"), "sk-...Oktg");
        assert_eq!(mask_key("123456789"), "12-...6789");
    }

    #[test]
    fn mask_key_handles_multibyte_names() {
        // Server-supplied names are arbitrary UTF-8; masking must not panic
        // mid-character.
        assert_eq!(mask_key("€€€€€€€€€€"), "€€-...€€€€");
        assert_eq!(mask_key("sk-日本語のキー名です"), "sk-...ー名です");
        // 8 chars but more than 8 bytes still passes through unmasked.
        assert_eq!(mask_key("€€€€€€€€"), "€€€€€€€€");
    }

    #[test]
    fn mask_key_short_names_pass_through() {
        assert_eq!(mask_key("12345678"), "12345678");
        assert_eq!(mask_key("sk-1"), "sk-1");
        assert_eq!(mask_key(""), "");
    }

    #[test]
    fn or_dash_handles_empty_and_missing() {
        assert_eq!(or_dash(Some("x")), "x");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn timestamps_reformat_when_parseable() {
        assert_eq!(
            format_timestamp("2024-03-01T12:30:45Z"),
            "2024-03-01 12:30:45"
        );
        assert_eq!(
            format_timestamp("2024-03-01T12:30:45.123456"),
            "2024-03-01 12:30:45"
        );
        // Unparseable stays verbatim.
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn epoch_seconds_reformat() {
        assert_eq!(format_epoch(0), "1970-01-01 00:00:00");
    }

    #[test]
    fn model_summaries() {
        let all = vec!["all-team-models".to_string()];
        let two = vec!["gpt-4o".to_string(), "claude-3".to_string()];

        assert_eq!(summarize_models(&[]), "all-team-models");
        assert_eq!(summarize_models(&all), "all-team-models");
        assert_eq!(summarize_models(&two), "2 models");

        assert_eq!(join_models(&all), "all-team-models");
        assert_eq!(join_models(&two), "gpt-4o, claude-3");

        assert_eq!(first_model(&two), "gpt-4o");
        assert_eq!(first_model(&[]), "-");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-rather-long-name", 8), "a-rathe…");
    }
}
