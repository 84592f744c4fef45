use serde::{Deserialize, Serialize};

/// A named palette entry in the WordPress `editor-color-palette` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Display title shown in the color picker
    pub name: String,
    /// Stable identifier, used for deduplication
    pub slug: String,
    /// Raw color value as written in the source
    pub color: String,
}

impl ColorRecord {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            color: color.into(),
        }
    }

    /// Build a record from a Sass map entry, deriving the display title from
    /// the key. The slug is kept exactly as given.
    pub fn from_sass(slug: &str, value: &str) -> Self {
        Self {
            name: title_case(slug),
            slug: slug.to_string(),
            color: value.to_string(),
        }
    }
}

/// Render a variable key as a space-separated title.
///
/// Tokens split on non-alphanumeric characters, lower-to-upper case
/// transitions, letter/digit boundaries, and the last capital of an
/// acronym run; each token is capitalized.
///
/// `"brand-primary"` -> `"Brand Primary"`, `"brandPrimary2"` ->
/// `"Brand Primary 2"`, `"XMLHttpRequest"` -> `"Xml Http Request"`.
pub fn title_case(slug: &str) -> String {
    let chars: Vec<char> = slug.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // current being non-empty guarantees chars[i - 1] is the previous
        // alphanumeric: a separator would have flushed it
        if !current.is_empty() {
            let prev = chars[i - 1];
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_ascii_digit() != c.is_ascii_digit())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && chars.get(i + 1).is_some_and(|n| n.is_lowercase()));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
