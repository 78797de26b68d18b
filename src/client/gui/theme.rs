use iced::Color;

// Shared light palette for the analyzer page (blue/indigo accents)
pub const BG_MAIN: Color = Color::from_rgb(0.91, 0.94, 0.99);
pub const CARD_BG: Color = Color::WHITE;
pub const INPUT_BG: Color = Color::from_rgb(0.97, 0.98, 0.99);
pub const INPUT_BORDER: Color = Color::from_rgb(0.82, 0.84, 0.86);
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.12, 0.16, 0.22);
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.42, 0.45, 0.50);
pub const ACCENT_COLOR: Color = Color::from_rgb(0.31, 0.27, 0.90);
pub const ERROR_TEXT: Color = Color::from_rgb(0.73, 0.11, 0.11);
pub const ERROR_BG: Color = Color::from_rgb(1.0, 0.95, 0.95);
pub const ERROR_BORDER: Color = Color::from_rgb(0.99, 0.79, 0.79);

/// Display attributes for one sentiment label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentStyle {
    pub text: Color,
    pub background: Color,
    pub border: Color,
    pub emoji: &'static str,
}

/// Map a service label to its display colors and glyph. Case-insensitive and
/// total: anything unrecognized gets the default blue/thinking-face arm.
pub fn sentiment_style(label: &str) -> SentimentStyle {
    match label.to_lowercase().as_str() {
        "positive" => SentimentStyle {
            text: Color::from_rgb(0.09, 0.64, 0.29),
            background: Color::from_rgb(0.94, 0.99, 0.96),
            border: Color::from_rgb(0.73, 0.97, 0.82),
            emoji: "😊",
        },
        "negative" => SentimentStyle {
            text: Color::from_rgb(0.86, 0.15, 0.15),
            background: Color::from_rgb(1.0, 0.95, 0.95),
            border: Color::from_rgb(0.99, 0.79, 0.79),
            emoji: "😞",
        },
        "neutral" => SentimentStyle {
            text: Color::from_rgb(0.29, 0.33, 0.39),
            background: Color::from_rgb(0.98, 0.98, 0.98),
            border: Color::from_rgb(0.90, 0.91, 0.92),
            emoji: "😐",
        },
        _ => SentimentStyle {
            text: Color::from_rgb(0.15, 0.39, 0.92),
            background: Color::from_rgb(0.94, 0.96, 1.0),
            border: Color::from_rgb(0.75, 0.86, 1.0),
            emoji: "🤔",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::sentiment_style;

    #[test]
    fn test_known_labels_are_distinct() {
        let positive = sentiment_style("positive");
        let negative = sentiment_style("negative");
        let neutral = sentiment_style("neutral");
        assert_ne!(positive, negative);
        assert_ne!(positive, neutral);
        assert_ne!(negative, neutral);
        assert_eq!(positive.emoji, "😊");
        assert_eq!(negative.emoji, "😞");
        assert_eq!(neutral.emoji, "😐");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(sentiment_style("Positive"), sentiment_style("positive"));
        assert_eq!(sentiment_style("NEGATIVE"), sentiment_style("negative"));
        assert_eq!(sentiment_style("NeUtRaL"), sentiment_style("neutral"));
    }

    #[test]
    fn test_unknown_label_falls_back_to_default() {
        let fallback = sentiment_style("unknown-token");
        assert_eq!(fallback, sentiment_style(""));
        assert_eq!(fallback.emoji, "🤔");
        assert_ne!(fallback, sentiment_style("positive"));
    }

    #[test]
    fn test_mapping_is_idempotent() {
        for label in ["positive", "negative", "neutral", "whatever"] {
            assert_eq!(sentiment_style(label), sentiment_style(label));
        }
    }
}
