//! Fixed tag registry.

/// Standard HTML5 tags, sorted for binary search.
const STANDARD_TAGS: &[&str] = &[
    "a",
    "abbr",
    "address",
    "area",
    "article",
    "aside",
    "audio",
    "b",
    "base",
    "bdi",
    "bdo",
    "blockquote",
    "body",
    "br",
    "button",
    "canvas",
    "caption",
    "cite",
    "code",
    "col",
    "colgroup",
    "data",
    "datalist",
    "dd",
    "del",
    "details",
    "dfn",
    "dialog",
    "div",
    "dl",
    "dt",
    "em",
    "embed",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hgroup",
    "hr",
    "html",
    "i",
    "iframe",
    "img",
    "input",
    "ins",
    "kbd",
    "label",
    "legend",
    "li",
    "link",
    "main",
    "map",
    "mark",
    "menu",
    "meta",
    "meter",
    "nav",
    "noscript",
    "object",
    "ol",
    "optgroup",
    "option",
    "output",
    "p",
    "param",
    "picture",
    "pre",
    "progress",
    "q",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "script",
    "search",
    "section",
    "select",
    "slot",
    "small",
    "source",
    "span",
    "strong",
    "style",
    "sub",
    "summary",
    "sup",
    "table",
    "tbody",
    "td",
    "template",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "time",
    "title",
    "tr",
    "track",
    "u",
    "ul",
    "var",
    "video",
    "wbr",
];

/// Tags that can never have children and always render self-closing.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `tag` is a standard HTML5 tag.
#[must_use]
pub fn is_standard_tag(tag: &str) -> bool {
    STANDARD_TAGS.binary_search(&tag).is_ok()
}

/// Whether `tag` is an empty element (self-closing, no children).
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.binary_search(&tag).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(STANDARD_TAGS.windows(2).all(|w| w[0] < w[1]));
        assert!(VOID_TAGS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_standard_membership() {
        assert!(is_standard_tag("div"));
        assert!(is_standard_tag("html"));
        assert!(is_standard_tag("wbr"));
        assert!(!is_standard_tag("blink"));
        assert!(!is_standard_tag(""));
    }

    #[test]
    fn test_void_membership() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("img"));
        assert!(!is_void_tag("div"));
    }

    #[test]
    fn test_void_tags_are_standard() {
        assert!(VOID_TAGS.iter().all(|tag| is_standard_tag(tag)));
    }
}
