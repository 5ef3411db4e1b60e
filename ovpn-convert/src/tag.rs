//! `<name>` / `</name>` markup detection on a single line.

/// Result of scanning a line for inline tag markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagScan<'a> {
    /// A complete tag was found.
    Found { name: &'a str, closing: bool },
    /// The line does not carry tag markup; it falls through to other
    /// handling (this is a resilient non-match, not an error).
    NotFound,
    /// `<>` or `</>`: brackets with a zero-length name, kept distinct
    /// from [`TagScan::NotFound`] so callers can decide to warn.
    EmptyTag,
}

/// Scan a line for an opening or closing inline tag.
///
/// Leading whitespace is skipped. Anything without a leading `<`, or
/// without a `>` before end of line, is [`TagScan::NotFound`].
pub fn scan_tag(line: &str) -> TagScan<'_> {
    let s = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let Some(rest) = s.strip_prefix('<') else {
        return TagScan::NotFound;
    };

    let (rest, closing) = match rest.strip_prefix('/') {
        Some(after) => (after, true),
        None => (rest, false),
    };

    let Some(end) = rest.find('>') else {
        return TagScan::NotFound;
    };
    if end == 0 {
        return TagScan::EmptyTag;
    }

    TagScan::Found {
        name: &rest[..end],
        closing,
    }
}

#[cfg(test)]
mod tests {
    use super::{scan_tag, TagScan};

    #[test]
    fn finds_opening_tag_with_leading_whitespace() {
        assert_eq!(
            scan_tag("  \t<ca>"),
            TagScan::Found {
                name: "ca",
                closing: false
            }
        );
    }

    #[test]
    fn finds_closing_tag() {
        assert_eq!(
            scan_tag("</connection>"),
            TagScan::Found {
                name: "connection",
                closing: true
            }
        );
    }

    #[test]
    fn plain_option_line_is_not_a_tag() {
        assert_eq!(scan_tag("remote host 1194"), TagScan::NotFound);
        assert_eq!(scan_tag(""), TagScan::NotFound);
    }

    #[test]
    fn unclosed_bracket_is_not_a_tag() {
        assert_eq!(scan_tag("<ca"), TagScan::NotFound);
        assert_eq!(scan_tag("</"), TagScan::NotFound);
    }

    #[test]
    fn empty_name_is_distinguished() {
        assert_eq!(scan_tag("<>"), TagScan::EmptyTag);
        assert_eq!(scan_tag("</>"), TagScan::EmptyTag);
    }

    #[test]
    fn name_runs_to_first_closing_bracket() {
        assert_eq!(
            scan_tag("<tls-auth> trailing junk"),
            TagScan::Found {
                name: "tls-auth",
                closing: false
            }
        );
    }
}
