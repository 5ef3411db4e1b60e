//! Argument slot descriptions and per-kind value checks.

/// Semantic kind accepted by one argument position.
///
/// Only [`ArgType::Port`], [`ArgType::Number`], [`ArgType::Unumber`]
/// and [`ArgType::ListValue`] constrain the value structurally. The
/// remaining kinds label the argument for diagnostics and accept any
/// string; validating that a path exists or an address is well formed
/// is out of scope for the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// One of a fixed set of literal values.
    ListValue,
    /// Host address (name or IP).
    Address,
    /// TCP/UDP port, 1..=65536.
    Port,
    /// Signed decimal integer.
    Number,
    /// Unsigned decimal integer.
    Unumber,
    /// Network interface name.
    Interface,
    /// Path to a file.
    FilePath,
    /// Free-form string.
    String,
    /// Shell command line.
    Command,
    /// Path to a directory.
    Dir,
    /// Network specification.
    Network,
    /// Network mask.
    Netmask,
    /// TUN/TAP device name.
    TunTapDevice,
    /// Opaque list value.
    List,
    /// IPv6 address.
    Ipv6Addr,
    /// IPv4 address.
    IpAddr,
    /// MAC address.
    MacAddress,
}

/// Description of one positional argument of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    /// Label used in diagnostics (for example `"port"` or `"cmd"`).
    pub name: &'static str,
    /// Whether the argument may be omitted.
    pub optional: bool,
    /// Accepted kinds, tried in declared order.
    pub types: &'static [ArgType],
    /// Inclusive numeric lower bound. `range_min == range_max` means
    /// no declared range.
    pub range_min: i64,
    /// Inclusive numeric upper bound.
    pub range_max: i64,
    /// Accepted literals for [`ArgType::ListValue`] positions.
    pub values: &'static [&'static str],
}

impl ArgSpec {
    /// Check a raw value against the slot's accepted kinds in
    /// declared order, succeeding on the first match.
    pub fn accepts(&self, raw: &str) -> bool {
        self.types.iter().any(|ty| ty.accepts(raw, self))
    }
}

impl ArgType {
    /// Check whether `raw` is a valid value of this kind under the
    /// constraints declared by `spec`.
    pub fn accepts(self, raw: &str, spec: &ArgSpec) -> bool {
        match self {
            ArgType::Port => matches!(raw.parse::<i64>(), Ok(v) if (1..=65536).contains(&v)),
            ArgType::Number | ArgType::Unumber => {
                let Ok(value) = raw.parse::<i64>() else {
                    return false;
                };
                if spec.range_min != spec.range_max {
                    value >= spec.range_min && value <= spec.range_max
                } else if self == ArgType::Unumber {
                    value >= 0
                } else {
                    true
                }
            }
            ArgType::ListValue => spec.values.iter().any(|v| *v == raw),
            // Structural validation for paths, addresses, interfaces
            // and the like is not performed.
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ArgSpec, ArgType};

    const fn slot(types: &'static [ArgType]) -> ArgSpec {
        ArgSpec {
            name: "t",
            optional: false,
            types,
            range_min: 0,
            range_max: 0,
            values: &[],
        }
    }

    #[test]
    fn port_bounds() {
        let spec = slot(&[ArgType::Port]);
        assert!(spec.accepts("1"));
        assert!(spec.accepts("1194"));
        assert!(spec.accepts("65536"));
        assert!(!spec.accepts("0"));
        assert!(!spec.accepts("65537"));
        assert!(!spec.accepts("abc"));
        assert!(!spec.accepts("1194x"));
    }

    #[test]
    fn unumber_without_range_rejects_negatives() {
        let spec = slot(&[ArgType::Unumber]);
        assert!(spec.accepts("0"));
        assert!(spec.accepts("3600"));
        assert!(!spec.accepts("-1"));
    }

    #[test]
    fn number_without_range_accepts_any_integer() {
        let spec = slot(&[ArgType::Number]);
        assert!(spec.accepts("-20"));
        assert!(spec.accepts("20"));
        assert!(!spec.accepts("twenty"));
    }

    #[test]
    fn declared_range_is_inclusive() {
        let spec = ArgSpec {
            range_min: 0,
            range_max: 3,
            ..slot(&[ArgType::Unumber])
        };
        assert!(spec.accepts("0"));
        assert!(spec.accepts("3"));
        assert!(!spec.accepts("4"));
    }

    #[test]
    fn list_value_is_exact_match() {
        let spec = ArgSpec {
            values: &["udp", "tcp"],
            ..slot(&[ArgType::ListValue])
        };
        assert!(spec.accepts("udp"));
        assert!(!spec.accepts("UDP"));
        assert!(!spec.accepts("udp4"));
    }

    #[test]
    fn type_set_is_tried_in_declared_order() {
        // resolv-retry style slot: a count or the literal "infinite".
        let spec = ArgSpec {
            values: &["infinite"],
            ..slot(&[ArgType::Unumber, ArgType::ListValue])
        };
        assert!(spec.accepts("30"));
        assert!(spec.accepts("infinite"));
        assert!(!spec.accepts("forever"));
    }

    #[test]
    fn unconstrained_kinds_accept_anything() {
        let spec = slot(&[ArgType::FilePath]);
        assert!(spec.accepts("/etc/openvpn/ca.crt"));
        assert!(spec.accepts(""));
    }
}
