use once_cell::sync::Lazy;
use regex::Regex;
// An extension trait to provide the `graphemes` method on `String` and `&str`
use unicode_segmentation::UnicodeSegmentation;

/// Width of the short text columns on `customers` and `products`.
pub const SHORT_FIELD_MAX: usize = 50;
pub const ADDRESS_MAX: usize = 500;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

#[derive(Debug)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn parse(s: String) -> std::result::Result<CustomerName, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > SHORT_FIELD_MAX;
        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|c| forbidden_characters.contains(&c));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid customer name.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    pub fn parse(s: String) -> std::result::Result<CustomerEmail, String> {
        if s.len() <= SHORT_FIELD_MAX && EMAIL_REGEX.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }
}

impl AsRef<str> for CustomerEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Non-blank free text (address, city, postcode) bounded to `max` graphemes.
#[derive(Debug)]
pub struct BoundedText(String);

impl BoundedText {
    pub fn parse(field: &str, s: String, max: usize) -> std::result::Result<BoundedText, String> {
        if s.trim().is_empty() || s.graphemes(true).count() > max {
            Err(format!("{} is not a valid {}.", s, field))
        } else {
            Ok(Self(s))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for BoundedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
