//! URI component percent-encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::{ModifierError, display_string};
use crate::types::ValueRef;

/// Everything except the URI component unreserved marks is encoded.
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

/// Percent-encode `text` as a URI component. Spaces become `%20`.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Modifier: percent-encode the value's display string.
pub fn uri_modifier(_key: &str, value: Option<ValueRef<'_>>) -> Result<String, ModifierError> {
    Ok(encode_component(&display_string(value)?))
}

#[cfg(test)]
mod tests {
    use super::encode_component;

    #[test]
    fn encodes_reserved_and_non_ascii() {
        assert_eq!(encode_component("hello world"), "hello%20world");
        assert_eq!(encode_component("a+b&c=d/e"), "a%2Bb%26c%3Dd%2Fe");
        assert_eq!(encode_component("é"), "%C3%A9");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
    }
}
