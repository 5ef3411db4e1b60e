//! Option occurrence validation against the schema registry.
//!
//! Validation never aborts a parse; every finding is recorded in the
//! status report and the occurrence stays in the document.

use ovpn_schema::{OptFlags, OptionSpec};

use crate::status::StatusReport;

/// Validate one occurrence of `opt` with the supplied raw arguments.
pub fn validate_option(status: &mut StatusReport, line: u32, opt: &OptionSpec, args: &[String]) {
    flag_advisories(status, line, opt);
    arity_check(status, line, opt, args.len());

    for (index, raw) in args.iter().enumerate() {
        let Some(slot) = opt.arg_spec_for(index) else {
            // Surplus arguments of a bounded option are already
            // covered by the arity warning.
            continue;
        };
        if !slot.accepts(raw) {
            status.error(
                line,
                format!(
                    "Option '{}' has invalid argument #{} ({}) value '{}'",
                    opt.name,
                    index + 1,
                    slot.name,
                    raw
                ),
            );
        }
    }
}

/// Usage warnings derived from the option's flags alone.
fn flag_advisories(status: &mut StatusReport, line: u32, opt: &OptionSpec) {
    if opt.flags.contains(OptFlags::DEPRECATED) {
        status.warning(
            line,
            format!(
                "Option '{}' is deprecated and can be removed in future OpenVPN versions",
                opt.name
            ),
        );
    }

    if opt.flags.contains(OptFlags::STANDALONE) {
        status.warning(
            line,
            format!("Option '{}' can be used only in standalone mode", opt.name),
        );
    }

    if opt.flags.contains(OptFlags::WINDOWS) {
        status.warning(
            line,
            format!("The '{}' option is specific for Windows", opt.name),
        );
    }
}

fn arity_check(status: &mut StatusReport, line: u32, opt: &OptionSpec, count: usize) {
    if count < opt.min_args {
        status.warning(
            line,
            format!(
                "Too few arguments ({count}). The minimum number of arguments for the '{}' option is {}",
                opt.name, opt.min_args
            ),
        );
    } else if let Some(max) = opt.max_args {
        if count > max {
            status.warning(
                line,
                format!(
                    "Too many arguments ({count}). The maximum number of arguments for the '{}' option is {max}",
                    opt.name
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use ovpn_schema::{find, OptFlags};

    use super::validate_option;
    use crate::status::{Severity, StatusReport};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn valid_port_produces_no_diagnostics() {
        let opt = find("port", OptFlags::NORMAL, None).expect("port");
        let mut status = StatusReport::new();
        validate_option(&mut status, 1, opt, &args(&["1194"]));
        assert_eq!(status.errors, 0);
        assert_eq!(status.warnings, 0);
    }

    #[test]
    fn out_of_range_port_is_an_error_naming_the_argument() {
        let opt = find("port", OptFlags::NORMAL, None).expect("port");
        let mut status = StatusReport::new();
        validate_option(&mut status, 3, opt, &args(&["99999"]));

        assert_eq!(status.errors, 1);
        let message = &status.messages[0];
        assert_eq!(message.severity, Severity::Error);
        assert_eq!(message.line, Some(3));
        assert_eq!(
            message.message,
            "Option 'port' has invalid argument #1 (port) value '99999'"
        );
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        let opt = find("port", OptFlags::NORMAL, None).expect("port");
        let mut status = StatusReport::new();
        validate_option(&mut status, 1, opt, &args(&["abc"]));
        assert_eq!(status.errors, 1);
    }

    #[test]
    fn too_few_arguments_warns_without_dropping() {
        let opt = find("remote", OptFlags::NORMAL, None).expect("remote");
        let mut status = StatusReport::new();
        validate_option(&mut status, 2, opt, &args(&[]));
        assert_eq!(status.warnings, 1);
        assert!(status.messages[0].message.starts_with("Too few arguments (0)."));
    }

    #[test]
    fn too_many_arguments_warns_once() {
        let opt = find("port", OptFlags::NORMAL, None).expect("port");
        let mut status = StatusReport::new();
        validate_option(&mut status, 2, opt, &args(&["1194", "extra"]));
        assert_eq!(status.warnings, 1);
        assert!(status.messages[0].message.starts_with("Too many arguments (2)."));
    }

    #[test]
    fn deprecated_option_warns() {
        // key-method is flagged deprecated in the registry.
        let opt = find("key-method", OptFlags::NORMAL, None).expect("key-method");
        let mut status = StatusReport::new();
        validate_option(&mut status, 5, opt, &args(&["2"]));
        assert!(status
            .messages
            .iter()
            .any(|m| m.message.contains("deprecated")));
    }

    #[test]
    fn windows_only_option_warns() {
        let opt = find("block-outside-dns", OptFlags::NORMAL, None).expect("block-outside-dns");
        let mut status = StatusReport::new();
        validate_option(&mut status, 4, opt, &args(&[]));
        assert!(status
            .messages
            .iter()
            .any(|m| m.message.contains("specific for Windows")));
    }

    #[test]
    fn unbounded_option_validates_every_argument_with_last_slot() {
        // remote-cert-ku: unbounded list of hex key-usage values, all
        // validated against the single declared String slot.
        let opt = find("remote-cert-ku", OptFlags::NORMAL, None).expect("remote-cert-ku");
        let mut status = StatusReport::new();
        validate_option(&mut status, 1, opt, &args(&["a0", "88", "08"]));
        assert_eq!(status.errors, 0);
    }

    #[test]
    fn list_value_mismatch_reports_the_offending_value() {
        let opt = find("auth-retry", OptFlags::NORMAL, None).expect("auth-retry");
        let mut status = StatusReport::new();
        validate_option(&mut status, 9, opt, &args(&["sometimes"]));
        assert_eq!(status.errors, 1);
        assert_eq!(
            status.messages[0].message,
            "Option 'auth-retry' has invalid argument #1 (type) value 'sometimes'"
        );
    }
}
