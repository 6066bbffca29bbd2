//! Splicing the stats fragment into a response body.

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use thiserror::Error;

/// Closing body tag, any letter case.
static BODY_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</body>").expect("closing body tag pattern is valid"));

/// Labels (and WHATWG aliases) that all mean UTF-8.
const UTF8_LABELS: &[&str] = &[
    "utf-8",
    "utf8",
    "unicode-1-1-utf-8",
    "unicode11utf8",
    "unicode20utf8",
    "x-unicode20utf8",
];

/// Labels (and WHATWG aliases) of encodings whose code units are wider than a byte.
const WIDE_LABELS: &[&str] = &[
    "utf-16",
    "utf-16le",
    "utf-16be",
    "utf-32",
    "utf-32le",
    "utf-32be",
    "ucs-2",
    "ucs-4",
    "csunicode",
    "iso-10646-ucs-2",
    "unicode",
    "unicodefeff",
    "unicodefffe",
];

/// Errors raised while splicing the fragment into a body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InjectError {
    /// The fragment cannot be written in the body's declared encoding.
    #[error("stats fragment cannot be encoded as {charset}")]
    IncompatibleCharset { charset: String },
}

/// Extracts the `charset` parameter from a `Content-Type` value.
///
/// Returns the lower-cased label with any surrounding quotes removed.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    // ---
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }

        let value = value.trim().trim_matches('"').trim();
        (!value.is_empty()).then(|| value.to_ascii_lowercase())
    })
}

fn is_utf8(charset: &str) -> bool {
    UTF8_LABELS.contains(&charset)
}

fn is_wide(charset: &str) -> bool {
    WIDE_LABELS.contains(&charset)
}

/// Encodes `fragment` for a body declared as `charset` (UTF-8 when `None`).
fn encode_fragment(fragment: &str, charset: Option<&str>) -> Result<Vec<u8>, InjectError> {
    // ---
    let Some(charset) = charset.map(str::to_ascii_lowercase) else {
        return Ok(fragment.as_bytes().to_vec());
    };

    if is_wide(&charset) {
        return Err(InjectError::IncompatibleCharset { charset });
    }

    // ASCII-compatible single/multi-byte encodings share the ASCII range with
    // UTF-8, so an ASCII fragment is already correctly encoded for them.
    if is_utf8(&charset) || fragment.is_ascii() {
        Ok(fragment.as_bytes().to_vec())
    } else {
        Err(InjectError::IncompatibleCharset { charset })
    }
}

/// Inserts `fragment` immediately before the first closing body tag.
///
/// Only the first `</body>` is touched; malformed pages with several closing
/// tags get exactly one summary. Returns `Ok(None)` when the body has no
/// closing tag, in which case the caller should leave the body alone.
///
/// The tag is searched for as single-byte text. A body really encoded as
/// UTF-16 or UTF-32 never matches and so is always returned unchanged.
///
/// # Errors
/// [`InjectError::IncompatibleCharset`] when a closing tag was found but the
/// body's declared encoding cannot hold the fragment, e.g. a single-byte
/// page mislabelled as UTF-16.
pub fn inject_fragment(
    body: &[u8],
    fragment: &str,
    charset: Option<&str>,
) -> Result<Option<Vec<u8>>, InjectError> {
    // ---
    let Some(tag) = BODY_CLOSE.find(body) else {
        return Ok(None);
    };

    let encoded = encode_fragment(fragment, charset)?;

    let mut out = Vec::with_capacity(body.len() + encoded.len());
    out.extend_from_slice(&body[..tag.start()]);
    out.extend_from_slice(&encoded);
    out.extend_from_slice(&body[tag.start()..]);

    Ok(Some(out))
}
