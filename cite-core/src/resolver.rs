//! Output resolution
//!
//! Decides which file extension formatted output receives and whether it is
//! wrapped in a minimal HTML document. Both decisions are pure functions of a
//! [`FormatRequest`].

use crate::error::{CoreError, Result};
use crate::request::{FormatRequest, SourceType};
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const HTML_PREFIX: &str = "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"></head><body>";
const HTML_SUFFIX: &str = "</body></html>";

/// Pick the file extension for a request.
///
/// The rules form a priority chain where the first match wins:
///
/// 1. `bibtex` style with `string` type gives `bib`, even for plain-text output
/// 2. plain-text output gives `txt`
/// 3. otherwise the type decides: `string` is `txt`, `html` is `html`,
///    `json` is `json`
///
/// Types outside those three have no extension and yield
/// [`CoreError::UnmappedExtension`].
pub fn resolve_extension(request: &FormatRequest) -> Result<&'static str> {
    if request.style.is_bibtex() && request.source_type == SourceType::String {
        return Ok("bib");
    }

    if request.wrap_as_plain_text {
        return Ok("txt");
    }

    match &request.source_type {
        SourceType::String => Ok("txt"),
        SourceType::Html => Ok("html"),
        SourceType::Json => Ok("json"),
        SourceType::Other(value) => Err(CoreError::UnmappedExtension(value.clone())),
    }
}

/// Whether formatted output gets the HTML document shell
pub fn wraps_html(request: &FormatRequest) -> bool {
    !request.wrap_as_plain_text && request.source_type == SourceType::Html
}

/// Wrap `raw` in a minimal HTML document when the request asks for real HTML.
///
/// The body content is `raw` verbatim; nothing is escaped.
pub fn maybe_wrap_html<'a>(raw: &'a str, request: &FormatRequest) -> Cow<'a, str> {
    if !wraps_html(request) {
        return Cow::Borrowed(raw);
    }

    let mut document = String::with_capacity(HTML_PREFIX.len() + raw.len() + HTML_SUFFIX.len());
    document.push_str(HTML_PREFIX);
    document.push_str(raw);
    document.push_str(HTML_SUFFIX);
    Cow::Owned(document)
}

/// How the extension is joined to the output path prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionSeparator {
    /// Append the extension directly: `out` + `json` is `outjson`
    #[default]
    None,
    /// Insert a dot: `out` + `json` is `out.json`
    Dot,
}

/// Build the final output path from the user's prefix and the extension
pub fn output_path(prefix: &Path, extension: &str, separator: ExtensionSeparator) -> PathBuf {
    let mut target = OsString::from(prefix.as_os_str());
    if separator == ExtensionSeparator::Dot {
        target.push(".");
    }
    target.push(extension);
    PathBuf::from(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(source_type: &str, style: &str, plain_text: bool) -> FormatRequest {
        FormatRequest::new()
            .source_type(source_type)
            .style(style)
            .plain_text(plain_text)
    }

    #[test]
    fn test_bibtex_string_is_bib() {
        assert_eq!(
            resolve_extension(&request("string", "bibtex", false)),
            Ok("bib")
        );
    }

    #[test]
    fn test_bibtex_string_beats_plain_text() {
        assert_eq!(
            resolve_extension(&request("string", "bibtex", true)),
            Ok("bib")
        );
    }

    #[test]
    fn test_bibtex_with_other_types_falls_through() {
        assert_eq!(
            resolve_extension(&request("json", "bibtex", false)),
            Ok("json")
        );
        assert_eq!(
            resolve_extension(&request("html", "bibtex", false)),
            Ok("html")
        );
        assert_eq!(
            resolve_extension(&request("html", "bibtex", true)),
            Ok("txt")
        );
    }

    #[test]
    fn test_type_mapping() {
        assert_eq!(resolve_extension(&request("string", "csl", false)), Ok("txt"));
        assert_eq!(resolve_extension(&request("html", "csl", false)), Ok("html"));
        assert_eq!(resolve_extension(&request("json", "csl", false)), Ok("json"));
    }

    #[test]
    fn test_default_request_is_json() {
        assert_eq!(resolve_extension(&FormatRequest::default()), Ok("json"));
    }

    #[test]
    fn test_unmapped_type_is_an_error() {
        assert_eq!(
            resolve_extension(&request("xml", "csl", false)),
            Err(CoreError::UnmappedExtension("xml".to_string()))
        );
    }

    #[test]
    fn test_unmapped_type_with_plain_text_is_txt() {
        assert_eq!(resolve_extension(&request("xml", "csl", true)), Ok("txt"));
    }

    #[test]
    fn test_wrap_html_document() {
        let req = request("html", "citation-apa", false);
        let wrapped = maybe_wrap_html("<div class=\"csl-bib-body\"></div>", &req);

        assert_eq!(
            wrapped,
            "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"></head>\
             <body><div class=\"csl-bib-body\"></div></body></html>"
        );
    }

    #[test]
    fn test_wrap_html_does_not_escape() {
        let req = request("html", "csl", false);
        let wrapped = maybe_wrap_html("<script>&amp;</script>", &req);
        assert!(wrapped.contains("<body><script>&amp;</script></body>"));
    }

    #[test]
    fn test_plain_text_html_is_not_wrapped() {
        let req = request("html", "csl", true);
        assert!(matches!(maybe_wrap_html("<p>x</p>", &req), Cow::Borrowed("<p>x</p>")));
    }

    #[test]
    fn test_non_html_is_not_wrapped() {
        for source_type in ["string", "json", "xml"] {
            let req = request(source_type, "csl", false);
            assert_eq!(maybe_wrap_html("[]", &req), "[]");
        }
    }

    #[test]
    fn test_output_path_without_separator() {
        let path = output_path(Path::new("out"), "json", ExtensionSeparator::None);
        assert_eq!(path, PathBuf::from("outjson"));
    }

    #[test]
    fn test_output_path_with_trailing_dot_in_prefix() {
        let path = output_path(Path::new("refs."), "bib", ExtensionSeparator::None);
        assert_eq!(path, PathBuf::from("refs.bib"));
    }

    #[test]
    fn test_output_path_with_dot_separator() {
        let path = output_path(Path::new("dir/out"), "html", ExtensionSeparator::Dot);
        assert_eq!(path, PathBuf::from("dir/out.html"));
    }

    fn any_style() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("csl".to_string()),
            Just("bibtex".to_string()),
            "[a-z0-9]{1,12}".prop_map(|s| format!("citation-{s}")),
            "[a-z]{1,8}",
        ]
    }

    fn any_type() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("string".to_string()),
            Just("html".to_string()),
            Just("json".to_string()),
            "[a-z]{1,8}",
        ]
    }

    proptest! {
        #[test]
        fn prop_plain_text_is_txt_unless_bibtex_string(
            source_type in any_type(),
            style in any_style(),
        ) {
            let req = request(&source_type, &style, true);
            prop_assume!(!(style == "bibtex" && source_type == "string"));
            prop_assert_eq!(resolve_extension(&req), Ok("txt"));
        }

        #[test]
        fn prop_bibtex_string_is_always_bib(plain_text in any::<bool>()) {
            let req = request("string", "bibtex", plain_text);
            prop_assert_eq!(resolve_extension(&req), Ok("bib"));
        }

        #[test]
        fn prop_real_html_is_wrapped_verbatim(style in any_style(), raw in ".*") {
            let req = request("html", &style, false);
            prop_assert_eq!(resolve_extension(&req), Ok("html"));

            let wrapped = maybe_wrap_html(&raw, &req);
            prop_assert!(wrapped.starts_with(HTML_PREFIX));
            prop_assert!(wrapped.ends_with(HTML_SUFFIX));
            let body = &wrapped[HTML_PREFIX.len()..wrapped.len() - HTML_SUFFIX.len()];
            prop_assert_eq!(body, raw.as_str());
        }

        #[test]
        fn prop_real_json_is_untouched(style in any_style(), raw in ".*") {
            let req = request("json", &style, false);
            prop_assert_eq!(resolve_extension(&req), Ok("json"));
            prop_assert_eq!(maybe_wrap_html(&raw, &req), raw.as_str());
        }
    }
}
