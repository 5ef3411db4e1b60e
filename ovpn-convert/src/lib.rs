//! OpenVPN configuration file to JSON conversion.
//!
//! This library parses OpenVPN client/server configuration files into
//! two JSON documents: the configuration document (recognized options
//! and `<tag>...</tag>` inline blocks) and a status document carrying
//! the diagnostics collected along the way. Recognized options are
//! validated against the schema registry in [`ovpn_schema`]; bad
//! values and suspicious usage become diagnostics rather than
//! failures, so one run reports everything it can.
//!
//! # Architecture
//!
//! - [`tokenize`] — whitespace tokenizer with double-quote grouping
//! - [`tag`] — `<name>` / `</name>` markup detection
//! - [`parse`] — inline block state machine, line dispatch, read loop
//! - [`validate`] — arity and argument-value checks per occurrence
//! - [`document`] — insertion-ordered options/inlines output trees
//! - [`status`] — error/warning counters and message accumulation
//!
//! # Example
//!
//! ```
//! use ovpn_convert::{Ovpn, OvpnFlags};
//!
//! let mut ovpn = Ovpn::new(OvpnFlags::empty());
//! ovpn.parse("remote vpn.example.com 1194\n".as_bytes())?;
//! let json = ovpn.to_json(false)?;
//! assert!(json.contains("\"remote\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::BufRead;

use bitflags::bitflags;

pub mod document;
pub mod parse;
pub mod status;
pub mod tag;
pub mod tokenize;
pub mod validate;

pub use document::{ConfigDocument, InlineData, InlineEntry, Occurrence, OptionsMap};
pub use parse::{ParseError, MAX_LINE_SIZE};
pub use status::{Severity, StatusMessage, StatusReport};

bitflags! {
    /// Behavior flags for an [`Ovpn`] instance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OvpnFlags: u32 {
        /// Embed the status document in the main JSON document under
        /// a `"status"` key instead of keeping it separate.
        const INCLUDE_STATUS = 0x01;
    }
}

/// One conversion instance: documents, diagnostics, and behavior
/// flags.
#[derive(Debug)]
pub struct Ovpn {
    flags: OvpnFlags,
    config: ConfigDocument,
    status: StatusReport,
}

#[derive(serde::Serialize)]
struct ConfigDump<'a> {
    inlines: &'a document::InlinesMap,
    options: &'a OptionsMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a StatusReport>,
}

impl Ovpn {
    pub fn new(flags: OvpnFlags) -> Self {
        Self {
            flags,
            config: ConfigDocument::default(),
            status: StatusReport::new(),
        }
    }

    /// Parse one configuration stream into this instance.
    ///
    /// Diagnostics accumulate in the status report and never abort
    /// the run; only structural tag errors and resource limits do.
    /// On failure the partial documents remain available for
    /// inspection but are normally discarded by the caller.
    pub fn parse<R: BufRead>(&mut self, input: R) -> Result<(), ParseError> {
        parse::run(input, &mut self.config, &mut self.status)
    }

    /// Serialize the configuration document. The status document is
    /// embedded when [`OvpnFlags::INCLUDE_STATUS`] is set.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        let dump = ConfigDump {
            inlines: &self.config.inlines,
            options: &self.config.options,
            status: self
                .flags
                .contains(OvpnFlags::INCLUDE_STATUS)
                .then_some(&self.status),
        };
        if pretty {
            serde_json::to_string_pretty(&dump)
        } else {
            serde_json::to_string(&dump)
        }
    }

    /// Serialize the status document on its own. Callers running with
    /// [`OvpnFlags::INCLUDE_STATUS`] should skip this; the status is
    /// already part of [`Ovpn::to_json`] output.
    pub fn status_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(&self.status)
        } else {
            serde_json::to_string(&self.status)
        }
    }

    pub fn flags(&self) -> OvpnFlags {
        self.flags
    }

    pub fn config(&self) -> &ConfigDocument {
        &self.config
    }

    pub fn status(&self) -> &StatusReport {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::{Ovpn, OvpnFlags};

    const SAMPLE: &str = "client\nbogus-thing\nport 1194\n";

    #[test]
    fn status_is_separate_by_default() {
        let mut ovpn = Ovpn::new(OvpnFlags::empty());
        ovpn.parse(SAMPLE.as_bytes()).expect("parse");

        let config: Value =
            serde_json::from_str(&ovpn.to_json(false).expect("json")).expect("valid json");
        assert!(config.get("status").is_none());

        let status: Value =
            serde_json::from_str(&ovpn.status_json(false).expect("json")).expect("valid json");
        assert_eq!(status["warnings"], 1);
    }

    #[test]
    fn include_status_folds_the_status_document_in() {
        let mut ovpn = Ovpn::new(OvpnFlags::INCLUDE_STATUS);
        ovpn.parse(SAMPLE.as_bytes()).expect("parse");

        let config: Value =
            serde_json::from_str(&ovpn.to_json(false).expect("json")).expect("valid json");
        assert_eq!(config["status"]["warnings"], 1);
        assert_eq!(config["status"]["errors"], 0);
    }

    #[test]
    fn pretty_and_compact_dumps_are_structurally_identical() {
        let mut ovpn = Ovpn::new(OvpnFlags::INCLUDE_STATUS);
        ovpn.parse("<ca>\nDATA\n</ca>\nport 99999\n".as_bytes())
            .expect("parse");

        let compact: Value =
            serde_json::from_str(&ovpn.to_json(false).expect("json")).expect("valid json");
        let pretty: Value =
            serde_json::from_str(&ovpn.to_json(true).expect("json")).expect("valid json");
        assert_eq!(compact, pretty);

        let compact_status: Value =
            serde_json::from_str(&ovpn.status_json(false).expect("json")).expect("valid json");
        let pretty_status: Value =
            serde_json::from_str(&ovpn.status_json(true).expect("json")).expect("valid json");
        assert_eq!(compact_status, pretty_status);
    }

    #[test]
    fn top_level_keys_are_inlines_then_options() {
        let mut ovpn = Ovpn::new(OvpnFlags::empty());
        ovpn.parse("port 1194\n".as_bytes()).expect("parse");
        let json = ovpn.to_json(false).expect("json");
        assert!(json.starts_with("{\"inlines\""));
    }
}
