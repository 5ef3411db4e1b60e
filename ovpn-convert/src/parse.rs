//! Line-oriented parser: inline block state machine, line dispatch,
//! and the read loop.

use std::io::BufRead;

use thiserror::Error;

use ovpn_schema::{find, InlineKind, OptFlags, OptionSpec};

use crate::document::{ConfigDocument, InlineData, Occurrence, OptionsMap};
use crate::status::StatusReport;
use crate::tag::{scan_tag, TagScan};
use crate::tokenize::Tokens;
use crate::validate::validate_option;

/// Hard cap on the length of one input line, in bytes.
pub const MAX_LINE_SIZE: usize = 1024;

/// Initial capacity of the line buffer; growth happens in the same
/// increments.
const LINE_BUFFER_SIZE: usize = 256;

/// Open inline tag names are truncated to this many bytes.
const INLINE_TAG_SIZE: usize = 31;

/// Fatal parse failure.
///
/// Diagnostics that merely describe bad option data are recorded in
/// the status report instead; only structural tag mismatches and
/// resource limits abort a run.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An opening tag appeared while a block was already open.
    #[error("line {line}: unexpected start of inline option")]
    UnexpectedOpen { line: u32 },

    /// A closing tag appeared outside of any open block.
    #[error("line {line}: unexpected end of inline option '{tag}'")]
    UnexpectedClose { line: u32, tag: String },

    /// A closing tag did not match the open block's tag.
    #[error("line {line}: ending inline option '{closed}' does not match starting inline option '{opened}'")]
    TagMismatch {
        line: u32,
        opened: String,
        closed: String,
    },

    /// Input line exceeded [`MAX_LINE_SIZE`].
    #[error("line {line}: line buffer size limit ({limit}) reached")]
    LineTooLong { line: u32, limit: usize },

    /// Reading from the input stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// True for malformed-input failures, false for resource/IO
    /// failures; callers use this to pick a retry policy.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedOpen { .. }
                | ParseError::UnexpectedClose { .. }
                | ParseError::TagMismatch { .. }
        )
    }
}

/// Verdict of one line handler.
enum Verdict {
    /// Line consumed; stop dispatching.
    Parsed,
    /// Not this handler's line; try the next one.
    Next,
}

enum TagEvent {
    None,
    Opened,
    Closed,
}

/// Mutable state of one parse run. Created fresh per invocation and
/// dropped at the end, success or failure.
struct ParseState<'a> {
    config: &'a mut ConfigDocument,
    status: &'a mut StatusReport,
    /// Current 1-based line number.
    line_n: u32,
    /// Whether a `<tag>` block is currently open.
    in_block: bool,
    /// Name of the open tag (truncated to [`INLINE_TAG_SIZE`] bytes).
    tag: String,
    /// Registry entry for the open tag; `None` when the tag was
    /// unknown or not inline-capable (its content is then swallowed).
    block_opt: Option<&'static OptionSpec>,
    /// Accumulated lines of an open plain block.
    plain: Vec<String>,
}

impl<'a> ParseState<'a> {
    fn new(config: &'a mut ConfigDocument, status: &'a mut StatusReport) -> Self {
        Self {
            config,
            status,
            line_n: 0,
            in_block: false,
            tag: String::new(),
            block_opt: None,
            plain: Vec::new(),
        }
    }

    /// The options map new occurrences go into: the open nested
    /// block's map while inside a `<connection>`-style block, the
    /// top-level map otherwise.
    fn options_sink(&mut self) -> &mut OptionsMap {
        if self.in_block {
            if let Some(opt) = self.block_opt {
                if opt.inline == Some(InlineKind::Options) {
                    if let Some(entry) = self.config.inlines.get_mut(&self.tag) {
                        if let InlineData::Options(blocks) = &mut entry.data {
                            if let Some(current) = blocks.last_mut() {
                                return current;
                            }
                        }
                    }
                }
            }
        }
        &mut self.config.options
    }

    /// Drive the block state machine with whatever tag markup the
    /// line carries.
    fn parse_tag(&mut self, line: &str) -> Result<TagEvent, ParseError> {
        let TagScan::Found { name, closing } = scan_tag(line) else {
            // An empty `<>` tag falls through to option handling just
            // like a tag-free line.
            return Ok(TagEvent::None);
        };

        if self.in_block {
            if !closing {
                self.status
                    .error(self.line_n, "Unexpected start of inline option");
                return Err(ParseError::UnexpectedOpen { line: self.line_n });
            }

            // The stored tag was truncated to INLINE_TAG_SIZE bytes,
            // so an overlong tag can never match its own full-length
            // closing tag and the block stays fatally open.
            if name != self.tag {
                self.status.error(
                    self.line_n,
                    "Ending inline option does not match starting inline option",
                );
                return Err(ParseError::TagMismatch {
                    line: self.line_n,
                    opened: self.tag.clone(),
                    closed: name.to_string(),
                });
            }

            self.in_block = false;
            return Ok(TagEvent::Closed);
        }

        self.in_block = true;
        self.tag = truncate_tag(name);
        self.block_opt = None;

        if closing {
            self.status.error(
                self.line_n,
                format!("Unexpected end of inline option '{}'", self.tag),
            );
            return Err(ParseError::UnexpectedClose {
                line: self.line_n,
                tag: self.tag.clone(),
            });
        }

        // Tag lookup carries no flag filter; any table entry with a
        // matching name prefix qualifies.
        match find(name, OptFlags::empty(), Some(name.len())) {
            Some(opt) if opt.flags.contains(OptFlags::INLINE) => {
                self.block_opt = Some(opt);
            }
            Some(_) => {
                self.status.warning(
                    self.line_n,
                    format!("Option '{}' can not be used in inline form", self.tag),
                );
            }
            None => {
                self.status
                    .warning(self.line_n, format!("Unknown inline option '{}'", self.tag));
            }
        }

        Ok(TagEvent::Opened)
    }

    /// First handler: inline tag markup and inline block content.
    fn handle_inline(&mut self, line: &str) -> Result<Verdict, ParseError> {
        match self.parse_tag(line)? {
            TagEvent::Opened => {
                let Some(opt) = self.block_opt else {
                    // Unknown or non-inline tag: content is swallowed
                    // until the matching close.
                    return Ok(Verdict::Parsed);
                };

                let kind = opt.inline.unwrap_or(InlineKind::Plain);
                let entry = self.config.inlines.entry_or_insert(&self.tag, kind);
                if let InlineData::Options(blocks) = &mut entry.data {
                    // Nested option lines collect into a fresh map
                    // appended to this tag's data array.
                    blocks.push(OptionsMap::new());
                }
                self.plain.clear();
                Ok(Verdict::Parsed)
            }

            TagEvent::Closed => {
                if let Some(opt) = self.block_opt.take() {
                    if opt.inline == Some(InlineKind::Plain) {
                        let body = self.plain.join("\n");
                        self.plain.clear();
                        if let Some(entry) = self.config.inlines.get_mut(&self.tag) {
                            if let InlineData::Plain(bodies) = &mut entry.data {
                                bodies.push(body);
                            }
                        }
                    }
                    // For nested-options blocks closing the tag is
                    // enough; the sink reverts to the top level.
                }
                Ok(Verdict::Parsed)
            }

            TagEvent::None => {
                if !self.in_block {
                    return Ok(Verdict::Next);
                }
                let Some(opt) = self.block_opt else {
                    // Inside an unrecognized block: discard content.
                    return Ok(Verdict::Parsed);
                };
                if opt.inline == Some(InlineKind::Options) {
                    // Nested option lines parse like top-level ones.
                    return Ok(Verdict::Next);
                }
                self.plain.push(line.to_string());
                Ok(Verdict::Parsed)
            }
        }
    }

    /// Second handler: a plain option line.
    fn handle_option(&mut self, line: &str) -> Verdict {
        let mut tokens = Tokens::new(line);
        let Some(name) = tokens.next() else {
            return Verdict::Next;
        };

        let Some(opt) = find(name, OptFlags::NORMAL, None) else {
            self.status
                .warning(self.line_n, format!("Unknown option '{name}'"));
            return Verdict::Parsed;
        };

        let args: Vec<String> = tokens.map(str::to_string).collect();
        validate_option(self.status, self.line_n, opt, &args);
        self.options_sink()
            .push_occurrence(opt.name, Occurrence { args });
        Verdict::Parsed
    }

    /// Try handlers in priority order; unclaimed lines are dropped.
    fn dispatch(&mut self, line: &str) -> Result<(), ParseError> {
        if let Verdict::Parsed = self.handle_inline(line)? {
            return Ok(());
        }
        self.handle_option(line);
        Ok(())
    }
}

/// Read `input` line by line and populate the documents.
pub fn run<R: BufRead>(
    mut input: R,
    config: &mut ConfigDocument,
    status: &mut StatusReport,
) -> Result<(), ParseError> {
    let mut state = ParseState::new(config, status);
    let mut buffer = String::with_capacity(LINE_BUFFER_SIZE);

    loop {
        buffer.clear();
        state.line_n += 1;

        if input.read_line(&mut buffer)? == 0 {
            return Ok(());
        }
        if buffer.len() > MAX_LINE_SIZE {
            return Err(ParseError::LineTooLong {
                line: state.line_n,
                limit: MAX_LINE_SIZE,
            });
        }

        // Strip one trailing CR/LF pair.
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        // Plain inline bodies are passed through verbatim, except
        // inside the literal `connection` tag which always gets
        // normalized like top-level lines.
        let line = if !state.in_block || state.tag == "connection" {
            strip_comment_and_whitespace(&buffer)
        } else {
            buffer.as_str()
        };

        state.dispatch(line)?;
    }
}

/// Trim surrounding whitespace and blank out trailing comments. A
/// comment starts at a `#` or `;` sitting at the start of the line or
/// right after whitespace; markers embedded in a token or inside a
/// double-quoted argument are kept.
fn strip_comment_and_whitespace(line: &str) -> &str {
    let line = line.trim_matches(|c: char| c.is_ascii_whitespace());
    let bytes = line.as_bytes();
    let mut in_quote = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'"' => in_quote = !in_quote,
            b'#' | b';'
                if !in_quote
                    && (i == 0 || bytes[i - 1] == b' ' || bytes[i - 1] == b'\t') =>
            {
                return line[..i].trim_end_matches(|c: char| c.is_ascii_whitespace());
            }
            _ => {}
        }
    }
    line
}

fn truncate_tag(name: &str) -> String {
    let mut end = name.len().min(INLINE_TAG_SIZE);
    // The cap may land inside a multi-byte character; back up to the
    // previous boundary.
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{run, strip_comment_and_whitespace, ParseError, MAX_LINE_SIZE};
    use crate::document::{ConfigDocument, InlineData};
    use crate::status::StatusReport;

    fn parse(input: &str) -> (ConfigDocument, StatusReport) {
        let mut config = ConfigDocument::default();
        let mut status = StatusReport::new();
        run(input.as_bytes(), &mut config, &mut status).expect("parse should succeed");
        (config, status)
    }

    fn parse_err(input: &str) -> (ParseError, StatusReport) {
        let mut config = ConfigDocument::default();
        let mut status = StatusReport::new();
        let err = run(input.as_bytes(), &mut config, &mut status).expect_err("parse should fail");
        (err, status)
    }

    #[test]
    fn comment_and_whitespace_stripping_is_idempotent() {
        assert_eq!(strip_comment_and_whitespace("  auth sha256  # comment"), "auth sha256");
        assert_eq!(strip_comment_and_whitespace("auth sha256"), "auth sha256");
        assert_eq!(strip_comment_and_whitespace("; full line comment"), "");
        assert_eq!(strip_comment_and_whitespace("# full line comment"), "");
        // Markers embedded in a token are not comments.
        assert_eq!(strip_comment_and_whitespace("setenv p ab;cd"), "setenv p ab;cd");
    }

    #[test]
    fn comment_markers_inside_quotes_are_not_comments() {
        assert_eq!(
            strip_comment_and_whitespace("push \"route 10.0.0.0 # x\""),
            "push \"route 10.0.0.0 # x\""
        );
        // After the closing quote a marker strips as usual.
        assert_eq!(strip_comment_and_whitespace("push \"a\" # b"), "push \"a\"");
    }

    #[test]
    fn simple_options_collect_in_encounter_order() {
        let (config, status) = parse("client\nremote vpn.example.com 1194 udp\nnobind\n");
        assert_eq!(status.errors, 0);
        assert_eq!(status.warnings, 0);
        assert_eq!(
            serde_json::to_value(&config.options).expect("serialize"),
            json!({
                "client": [ { "args": [] } ],
                "remote": [ { "args": ["vpn.example.com", "1194", "udp"] } ],
                "nobind": [ { "args": [] } ],
            })
        );
    }

    #[test]
    fn unknown_option_warns_once_and_adds_no_entry() {
        let (config, status) = parse("not-an-option 1 2 3\n");
        assert!(config.options.is_empty());
        assert_eq!(status.warnings, 1);
        assert_eq!(status.errors, 0);
        assert_eq!(status.messages[0].message, "Unknown option 'not-an-option'");
    }

    #[test]
    fn blank_and_comment_lines_are_dropped_silently() {
        let (config, status) = parse("\n\n# comment\n   \n; comment\n");
        assert!(config.options.is_empty());
        assert!(config.inlines.is_empty());
        assert_eq!(status.messages.len(), 0);
    }

    #[test]
    fn plain_inline_block_round_trips() {
        let (config, status) = parse("<ca>\nFAKECERTDATA\n</ca>\n");
        assert_eq!(status.errors, 0);
        assert_eq!(status.warnings, 0);
        assert_eq!(
            serde_json::to_value(&config.inlines).expect("serialize"),
            json!({ "ca": { "type": "plain", "data": ["FAKECERTDATA"] } })
        );
    }

    #[test]
    fn plain_inline_block_keeps_interior_lines_and_spacing() {
        let (config, _) = parse("<cert>\nline one\n  indented # not a comment\n</cert>\n");
        let entry = config.inlines.get("cert").expect("cert entry");
        assert_eq!(
            entry.data,
            InlineData::Plain(vec!["line one\n  indented # not a comment".to_string()])
        );
    }

    #[test]
    fn reopened_plain_tag_appends_to_the_same_data_array() {
        let (config, _) = parse("<ca>\nONE\n</ca>\n<ca>\nTWO\n</ca>\n");
        let entry = config.inlines.get("ca").expect("ca entry");
        assert_eq!(
            entry.data,
            InlineData::Plain(vec!["ONE".to_string(), "TWO".to_string()])
        );
    }

    #[test]
    fn nested_options_block_collects_into_its_own_map() {
        let (config, status) = parse("<connection>\nremote 1.2.3.4 1194 udp\n</connection>\n");
        assert_eq!(status.errors, 0);
        assert_eq!(status.warnings, 0);
        assert!(config.options.get("remote").is_none());
        assert_eq!(
            serde_json::to_value(&config.inlines).expect("serialize"),
            json!({
                "connection": {
                    "type": "options",
                    "data": [ { "remote": [ { "args": ["1.2.3.4", "1194", "udp"] } ] } ],
                }
            })
        );
    }

    #[test]
    fn connection_blocks_are_comment_stripped_unlike_other_inlines() {
        let (config, status) =
            parse("<connection>\n# comment inside\nremote a 1194  ; trailing\n</connection>\n");
        assert_eq!(status.messages.len(), 0);
        let entry = config.inlines.get("connection").expect("connection");
        let InlineData::Options(blocks) = &entry.data else {
            panic!("expected options data");
        };
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].get("remote").map(<[_]>::len), Some(1));
    }

    #[test]
    fn two_connection_blocks_produce_two_maps() {
        let (config, _) = parse(
            "<connection>\nremote a 1194\n</connection>\n<connection>\nremote b 443\n</connection>\n",
        );
        let entry = config.inlines.get("connection").expect("connection");
        let InlineData::Options(blocks) = &entry.data else {
            panic!("expected options data");
        };
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].get("remote").is_some());
        assert!(blocks[1].get("remote").is_some());
    }

    #[test]
    fn unknown_inline_tag_warns_and_swallows_content() {
        let (config, status) = parse("<nosuchtag>\ndata line\n</nosuchtag>\n");
        assert!(config.inlines.is_empty());
        assert!(config.options.is_empty());
        assert_eq!(status.warnings, 1);
        assert_eq!(status.messages[0].message, "Unknown inline option 'nosuchtag'");
    }

    #[test]
    fn non_inline_option_tag_warns_and_swallows_content() {
        let (config, status) = parse("<port>\n1194\n</port>\n");
        assert!(config.inlines.is_empty());
        assert_eq!(status.warnings, 1);
        assert_eq!(
            status.messages[0].message,
            "Option 'port' can not be used in inline form"
        );
    }

    #[test]
    fn mismatched_closing_tag_is_fatal() {
        let (err, status) = parse_err("<ca>\nX\n</cert>\n");
        assert!(err.is_structural());
        assert!(matches!(err, ParseError::TagMismatch { line: 3, .. }));
        assert_eq!(status.errors, 1);
    }

    #[test]
    fn nested_open_tag_is_fatal() {
        let (err, _) = parse_err("<ca>\n<cert>\n");
        assert!(matches!(err, ParseError::UnexpectedOpen { line: 2 }));
    }

    #[test]
    fn closing_tag_outside_block_is_fatal() {
        let (err, status) = parse_err("</ca>\n");
        assert!(matches!(err, ParseError::UnexpectedClose { line: 1, .. }));
        assert_eq!(status.errors, 1);
    }

    #[test]
    fn overlong_line_is_a_resource_error() {
        let long = "x".repeat(MAX_LINE_SIZE + 10);
        let (err, _) = parse_err(&long);
        assert!(!err.is_structural());
        assert!(matches!(err, ParseError::LineTooLong { line: 1, .. }));
    }

    #[test]
    fn push_arguments_keep_quoted_spacing() {
        let (config, status) = parse(
            "push \"route 10.0.0.0 255.255.255.0\"\npush \"route 10.1.0.0 255.255.255.0\"\n",
        );
        assert_eq!(status.messages.len(), 0);
        let occurrences = config.options.get("push").expect("push entries");
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0].args, ["route 10.0.0.0 255.255.255.0"]);
        assert_eq!(occurrences[1].args, ["route 10.1.0.0 255.255.255.0"]);
    }

    #[test]
    fn quoted_arguments_keep_comment_markers() {
        let (config, status) = parse("push \"route 10.0.0.0 # not a comment\"\n");
        assert_eq!(status.messages.len(), 0);
        let occurrences = config.options.get("push").expect("push entries");
        assert_eq!(occurrences[0].args, ["route 10.0.0.0 # not a comment"]);
    }

    #[test]
    fn oversized_multibyte_tag_truncates_on_a_char_boundary() {
        // 16 two-byte characters put the 31-byte cap mid-character;
        // the truncation must back up instead of panicking.
        let tag = "é".repeat(16);
        let (config, status) = parse(&format!("<{tag}>\ndata\n"));
        assert!(config.inlines.is_empty());
        assert_eq!(status.warnings, 1);
        assert_eq!(
            status.messages[0].message,
            format!("Unknown inline option '{}'", "é".repeat(15))
        );
    }

    #[test]
    fn overlong_tag_is_stored_truncated_and_never_matches_its_close() {
        let name = "a".repeat(40);
        let (err, status) = parse_err(&format!("<{name}>\nX\n</{name}>\n"));
        assert!(matches!(err, ParseError::TagMismatch { line: 3, .. }));
        // The open tag resolved to nothing, so the only earlier
        // diagnostic names the 31-byte stored form.
        assert_eq!(
            status.messages[0].message,
            format!("Unknown inline option '{}'", "a".repeat(31))
        );
    }

    #[test]
    fn diagnostics_count_across_a_whole_file() {
        // Two warnings (unknown option, deprecated) and one error
        // (port out of range), in encounter order.
        let (_, status) = parse("bogus-option\nkey-method 2\nport 99999\n");
        assert_eq!(status.warnings, 2);
        assert_eq!(status.errors, 1);
        assert_eq!(status.messages.len(), 3);
        assert_eq!(status.messages[0].line, Some(1));
        assert_eq!(status.messages[1].line, Some(2));
        assert_eq!(status.messages[2].line, Some(3));
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let (config, status) = parse("port 1194\r\nnobind\r\n");
        assert_eq!(status.messages.len(), 0);
        assert!(config.options.get("port").is_some());
        assert!(config.options.get("nobind").is_some());
    }

    #[test]
    fn final_line_without_newline_is_parsed() {
        let (config, _) = parse("port 1194");
        assert!(config.options.get("port").is_some());
    }

    #[test]
    fn unterminated_block_at_eof_keeps_collected_content() {
        // The original tolerates EOF inside an open block: the run
        // succeeds and whatever was collected stays in the document.
        let (config, status) = parse("<connection>\nremote a 1194\n");
        assert_eq!(status.errors, 0);
        let entry = config.inlines.get("connection").expect("connection");
        let InlineData::Options(blocks) = &entry.data else {
            panic!("expected options data");
        };
        assert!(blocks[0].get("remote").is_some());
    }

    #[test]
    fn empty_tag_falls_through_to_option_handling() {
        let (_, status) = parse("<>\n");
        assert_eq!(status.warnings, 1);
        assert_eq!(status.messages[0].message, "Unknown option '<>'");
    }

    #[test]
    fn short_tag_resolves_by_prefix_in_table_order() {
        // A one-byte tag matches the first table entry it prefixes;
        // "c" resolves to "ca", an inline-capable option.
        let (config, status) = parse("<c>\nDATA\n</c>\n");
        assert_eq!(status.warnings, 0);
        let entry = config.inlines.get("c").expect("tag entry keyed by raw name");
        assert_eq!(entry.data, InlineData::Plain(vec!["DATA".to_string()]));
    }
}
