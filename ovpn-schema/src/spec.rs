//! Option descriptions and registry lookup.

use crate::arg::ArgSpec;
use crate::flags::OptFlags;
use crate::table::OPTIONS;

/// Shape of the content carried by an option's inline form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    /// Free-form text (certificates, keys).
    Plain,
    /// Nested option lines parsed like a top-level configuration.
    Options,
}

impl InlineKind {
    /// Name used in the JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            InlineKind::Plain => "plain",
            InlineKind::Options => "options",
        }
    }
}

/// One recognized configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Canonical option name (lowercase, hyphenated).
    pub name: &'static str,
    /// Behavioral flags.
    pub flags: OptFlags,
    /// Inline content shape; only meaningful with [`OptFlags::INLINE`].
    pub inline: Option<InlineKind>,
    /// Minimum number of arguments.
    pub min_args: usize,
    /// Maximum number of arguments; `None` means unbounded.
    pub max_args: Option<usize>,
    /// Declared argument slots.
    pub args: &'static [ArgSpec],
}

impl OptionSpec {
    /// Argument slot governing the 0-based argument `index`.
    ///
    /// When `max_args` is unbounded, the last declared slot applies to
    /// every position at or beyond it. Positions past the declared
    /// slots of a bounded option have no governing slot and are not
    /// validated (arity checks already cover them).
    pub fn arg_spec_for(&self, index: usize) -> Option<&'static ArgSpec> {
        if let Some(spec) = self.args.get(index) {
            return Some(spec);
        }
        if self.max_args.is_none() {
            return self.args.last();
        }
        None
    }
}

/// Find an option by name in the registry.
///
/// The table is scanned in declaration order and the first entry whose
/// name matches and whose flags contain `flags` wins; callers must not
/// assume a best match is returned. With `limit = None` the full names
/// must be equal. With `limit = Some(n)` at most `n` bytes are
/// compared, so a short inline tag resolves to the first entry it is a
/// prefix of.
pub fn find(name: &str, flags: OptFlags, limit: Option<usize>) -> Option<&'static OptionSpec> {
    OPTIONS
        .iter()
        .find(|opt| name_matches(opt.name, name, limit) && opt.flags.contains(flags))
}

/// Bounded name comparison with `strncmp` semantics: equal when the
/// first `limit` bytes agree, or when both strings end (equal) before
/// `limit` bytes.
fn name_matches(entry: &str, name: &str, limit: Option<usize>) -> bool {
    let Some(limit) = limit else {
        return entry == name;
    };
    if limit <= entry.len() && limit <= name.len() {
        entry.as_bytes()[..limit] == name.as_bytes()[..limit]
    } else {
        entry == name
    }
}

#[cfg(test)]
mod tests {
    use super::{find, name_matches, InlineKind, OptFlags};
    use crate::table::OPTIONS;

    #[test]
    fn every_normal_option_finds_itself_by_exact_name() {
        for opt in OPTIONS {
            if opt.flags.contains(OptFlags::NORMAL) {
                let found = find(opt.name, OptFlags::NORMAL, None)
                    .unwrap_or_else(|| panic!("option '{}' not found", opt.name));
                assert_eq!(found.name, opt.name);
            }
        }
    }

    #[test]
    fn exact_lookup_does_not_match_prefixes() {
        assert!(find("remot", OptFlags::NORMAL, None).is_none());
        assert!(find("remote-", OptFlags::NORMAL, None).is_none());
        assert_eq!(
            find("remote", OptFlags::NORMAL, None).map(|o| o.name),
            Some("remote")
        );
    }

    #[test]
    fn flag_filter_excludes_non_qualifying_entries() {
        // `connection` carries only the INLINE flag, so it is invisible
        // to the NORMAL-filtered option handler lookup.
        assert!(find("connection", OptFlags::NORMAL, None).is_none());
        let opt = find("connection", OptFlags::empty(), Some("connection".len()))
            .expect("connection tag");
        assert_eq!(opt.inline, Some(InlineKind::Options));
    }

    #[test]
    fn bounded_lookup_uses_prefix_semantics() {
        // A one-byte tag "c" resolves to the first table entry starting
        // with 'c'; table order decides, exactly like strncmp in the
        // linear scan.
        let opt = find("c", OptFlags::empty(), Some(1)).expect("prefix match");
        assert_eq!(opt.name, "ca");
    }

    #[test]
    fn strncmp_semantics() {
        assert!(name_matches("ca", "c", Some(1)));
        assert!(!name_matches("c", "ca", Some(2)));
        assert!(name_matches("ca", "ca", Some(10)));
        assert!(!name_matches("ca", "cb", Some(2)));
        assert!(name_matches("cert", "cert", None));
        assert!(!name_matches("cert", "certX", None));
    }

    #[test]
    fn unbounded_options_reuse_last_slot() {
        let opt = find("remote-cert-ku", OptFlags::NORMAL, None).expect("remote-cert-ku");
        assert!(opt.max_args.is_none());
        let last = opt.args.last().expect("declared slot");
        assert_eq!(opt.arg_spec_for(17).map(|s| s.name), Some(last.name));
    }

    #[test]
    fn bounded_options_stop_validating_past_declared_slots() {
        let opt = find("remote", OptFlags::NORMAL, None).expect("remote");
        assert_eq!(opt.max_args, Some(3));
        assert!(opt.arg_spec_for(2).is_some());
        assert!(opt.arg_spec_for(3).is_none());
    }
}
