//! Deterministic query-string construction
//!
//! Every facade builds its query string through [`Query`] so that two rules
//! hold everywhere: pairs appear in exactly the order they were appended
//! (each facade's declared filter order), and only values the caller
//! actually supplied are appended at all. Absent filters are dropped by the
//! facade before calling in here; `false` and `0` are values like any other.
//!
//! Two encoding styles are in use on this backend and both are preserved:
//! component style (`append`), which percent-encodes spaces as `%20`, and
//! form style (`append_form`), which encodes spaces as `+`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt::Display;

/// Characters left verbatim by component-style encoding: ASCII alphanumerics
/// plus `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Ordered query-string builder
///
/// Keys are trusted literals (the facades' declared filter names) and are
/// not encoded; values are encoded per the append method used.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<String>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a component-encoded pair (spaces become `%20`)
    pub(crate) fn append(&mut self, key: &str, value: &str) {
        let encoded = utf8_percent_encode(value, COMPONENT).to_string();
        self.pairs.push(format!("{key}={encoded}"));
    }

    /// Append a form-encoded pair (spaces become `+`)
    pub(crate) fn append_form(&mut self, key: &str, value: &str) {
        let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
        self.pairs.push(format!("{key}={encoded}"));
    }

    /// Append a pair whose value needs no encoding (numbers, booleans)
    pub(crate) fn append_display(&mut self, key: &str, value: impl Display) {
        self.pairs.push(format!("{key}={value}"));
    }

    /// Render `base` or `base?k=v&...`, with no trailing `?` when empty
    pub(crate) fn into_path(self, base: &str) -> String {
        if self.pairs.is_empty() {
            base.to_string()
        } else {
            format!("{base}?{}", self.pairs.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_leaves_base_untouched() {
        let q = Query::new();
        assert_eq!(q.into_path("practice_challenges/templates"), "practice_challenges/templates");
    }

    #[test]
    fn pairs_keep_append_order() {
        let mut q = Query::new();
        q.append_display("b", 2);
        q.append_display("a", 1);
        assert_eq!(q.into_path("things"), "things?b=2&a=1");
    }

    #[test]
    fn component_style_encodes_spaces_as_percent20() {
        let mut q = Query::new();
        q.append("search_text", "  ");
        assert_eq!(q.into_path("exchange_offers"), "exchange_offers?search_text=%20%20");
    }

    #[test]
    fn component_style_keeps_unreserved_marks() {
        let mut q = Query::new();
        q.append("search_text", "C++ (advanced)!");
        assert_eq!(
            q.into_path("exchange_offers"),
            "exchange_offers?search_text=C%2B%2B%20(advanced)!"
        );
    }

    #[test]
    fn form_style_encodes_spaces_as_plus() {
        let mut q = Query::new();
        q.append_form("search", "spaced out search");
        assert_eq!(q.into_path("mind_content"), "mind_content?search=spaced+out+search");
    }

    #[test]
    fn form_style_percent_encodes_literal_plus() {
        let mut q = Query::new();
        q.append_form("search", "a+b c");
        assert_eq!(q.into_path("mind_content"), "mind_content?search=a%2Bb+c");
    }

    #[test]
    fn display_style_serializes_false() {
        let mut q = Query::new();
        q.append_display("is_active", false);
        assert_eq!(q.into_path("exchange_offers"), "exchange_offers?is_active=false");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        let mut q = Query::new();
        q.append("search_text", "café");
        assert_eq!(q.into_path("exchange_offers"), "exchange_offers?search_text=caf%C3%A9");
    }
}
