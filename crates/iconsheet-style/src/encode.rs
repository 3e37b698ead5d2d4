//! SVG to data-URL encoding.
//!
//! Stylesheets embed icons as `url("data:image/svg+xml;charset=UTF-8,...")`.
//! Rather than base64, the markup is kept readable: double quotes become
//! single quotes, insignificant whitespace is squeezed out and only the
//! characters that break a quoted CSS url or a URL are percent-encoded.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;

/// Namespace every standalone SVG document must declare.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Prefix of every encoded icon URL.
pub const DATA_URL_PREFIX: &str = "data:image/svg+xml;charset=UTF-8,";

/// Characters escaped inside the data URL, on top of control characters
/// (which covers `\r` and `\n`). Non-ASCII is always escaped as UTF-8.
const SVG_URL_ESCAPES: &AsciiSet = &CONTROLS
    .add(b'%')
    .add(b'#')
    .add(b'(')
    .add(b')')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));
static SVG_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b").expect("svg tag pattern is valid"));
static WHITESPACE_BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("tag gap pattern is valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Remove every `<!-- ... -->` comment, including multi-line ones.
pub fn strip_comments(svg: &str) -> String {
    COMMENT.replace_all(svg, "").into_owned()
}

/// Add `xmlns` to the first `<svg` tag unless the namespace already appears
/// somewhere in the document.
pub fn ensure_namespace(svg: &str) -> String {
    if svg.contains(SVG_NAMESPACE) {
        return svg.to_string();
    }
    SVG_OPEN_TAG
        .replace(svg, format!("<svg xmlns='{SVG_NAMESPACE}'").as_str())
        .into_owned()
}

/// Namespace, quote and whitespace normalization applied before escaping.
///
/// The result is exactly what percent-decoding an encoded icon yields.
pub fn normalize_svg(svg: &str) -> String {
    let svg = ensure_namespace(svg).replace('"', "'");
    let svg = WHITESPACE_BETWEEN_TAGS.replace_all(&svg, "><");
    WHITESPACE_RUN.replace_all(&svg, " ").into_owned()
}

/// Encode SVG markup for use after [`DATA_URL_PREFIX`].
pub fn encode_svg(svg: &str) -> String {
    utf8_percent_encode(&normalize_svg(svg), SVG_URL_ESCAPES).to_string()
}

/// Full `data:` URL for a raw SVG document, comments included.
pub fn svg_data_url(svg: &str) -> String {
    format!("{DATA_URL_PREFIX}{}", encode_svg(&strip_comments(svg)))
}
