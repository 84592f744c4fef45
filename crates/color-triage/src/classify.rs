//! The classifier itself: parse, fall back, bucket.

use std::sync::OnceLock;

use regex::Regex;

use crate::hsv::Hsv;

/// The bucket a color value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Parses to numeric RGB with a distinguishable hue
    TrueColor,
    /// Parses to numeric RGB and is achromatic, or close enough to read as gray
    Grayscale,
    /// Shaped like `rgb(...)`/`rgba(...)`/`hsl(...)`/`hsla(...)` but rejected
    /// by the baseline parser
    AmbiguousFormat,
    /// Neither parses nor resembles a functional color notation
    NonColor,
}

/// Functional color notation: a known function name wrapping any argument
/// text, matched case-insensitively.
fn functional_notation() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^(?:rgb|hsl)a?\(.+\)$").expect("valid regex literal"))
}

/// Classify a raw color value.
///
/// Total over all inputs: anything the baseline parser rejects that does not
/// look like a functional notation is [`Classification::NonColor`], never an
/// error. Alpha is ignored.
pub fn classify(value: &str) -> Classification {
    let value = value.trim();

    let Ok(color) = csscolorparser::parse(value) else {
        // Rejected color expressions are still colors someone typed; they
        // must survive into the output rather than be silently dropped.
        if functional_notation().is_match(value) {
            return Classification::AmbiguousFormat;
        }
        return Classification::NonColor;
    };

    let [r, g, b, _] = color.to_rgba8();
    if r == g && g == b {
        return Classification::Grayscale;
    }

    if Hsv::from_rgb8(r, g, b).reads_as_gray() {
        Classification::Grayscale
    } else {
        Classification::TrueColor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_channels_are_grayscale() {
        for value in ["#000000", "#111111", "#808080", "#fefefe", "#ffffff"] {
            assert_eq!(classify(value), Classification::Grayscale, "{value}");
        }
    }

    #[test]
    fn test_saturated_colors_are_true_colors() {
        for value in ["#ff0000", "#00ff00", "#0000ff", "#ffa500", "rebeccapurple"] {
            assert_eq!(classify(value), Classification::TrueColor, "{value}");
        }
    }

    #[test]
    fn test_named_keywords_parse() {
        assert_eq!(classify("red"), Classification::TrueColor);
        assert_eq!(classify("white"), Classification::Grayscale);
        assert_eq!(classify("black"), Classification::Grayscale);
    }

    #[test]
    fn test_functional_notation_with_valid_arguments() {
        assert_eq!(classify("rgb(255, 0, 0)"), Classification::TrueColor);
        assert_eq!(classify("rgba(0, 0, 0, 0.5)"), Classification::Grayscale);
        assert_eq!(classify("hsl(0, 100%, 50%)"), Classification::TrueColor);
    }

    #[test]
    fn test_rejected_functional_notation_is_ambiguous() {
        // Shapes the baseline parser cannot digest but which were clearly
        // typed as colors
        for value in [
            "rgb(var(--brand), 0, 0)",
            "rgba(oops)",
            "hsl(120, nope, 30%)",
            "RGBA(var(--overlay))",
        ] {
            assert_eq!(classify(value), Classification::AmbiguousFormat, "{value}");
        }
    }

    #[test]
    fn test_non_colors() {
        for value in ["banana", "inherit", "url(#gradient)", "", "currentStep"] {
            assert_eq!(classify(value), Classification::NonColor, "{value}");
        }
    }

    #[test]
    fn test_unclosed_function_is_not_ambiguous() {
        // The pattern requires a closing paren
        assert_eq!(classify("rgb(255, 0, 0"), Classification::NonColor);
    }

    #[test]
    fn test_alpha_is_ignored() {
        // transparent parses as rgba(0, 0, 0, 0); the channels decide
        assert_eq!(classify("transparent"), Classification::Grayscale);
        assert_eq!(classify("rgba(255, 0, 0, 0.1)"), Classification::TrueColor);
    }

    #[test]
    fn test_near_achromatic_heuristic() {
        // Slightly unequal channels still read as gray
        assert_eq!(classify("#0a0b0c"), Classification::Grayscale);
        assert_eq!(classify("#6f7071"), Classification::Grayscale);
        // Very dark but fully saturated also reads as gray
        assert_eq!(classify("#200000"), Classification::Grayscale);
        // Brighter saturated colors do not
        assert_eq!(classify("#400000"), Classification::TrueColor);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(classify("  #808080  "), Classification::Grayscale);
        assert_eq!(classify("\tred\n"), Classification::TrueColor);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for value in ["#ff0000", "#808080", "rgb(var(--x))", "banana"] {
            assert_eq!(classify(value), classify(value), "{value}");
        }
    }
}
