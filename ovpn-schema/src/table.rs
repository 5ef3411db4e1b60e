//! The compiled-in option table.
//!
//! Entry data follows the OpenVPN 2.4 manual page
//! (<https://community.openvpn.net/openvpn/wiki/Openvpn24ManPage>).
//! Declaration order is alphabetical by option name and is
//! significant: [`crate::find`] scans linearly and returns the first
//! flag-qualifying entry, so bounded (prefix) lookups resolve to the
//! earliest candidate in this table.

use crate::arg::{ArgSpec, ArgType};
use crate::flags::OptFlags;
use crate::spec::{InlineKind, OptionSpec};

const fn arg(name: &'static str, optional: bool, types: &'static [ArgType]) -> ArgSpec {
    ArgSpec {
        name,
        optional,
        types,
        range_min: 0,
        range_max: 0,
        values: &[],
    }
}

const fn arg_range(
    name: &'static str,
    optional: bool,
    types: &'static [ArgType],
    range_min: i64,
    range_max: i64,
) -> ArgSpec {
    ArgSpec {
        name,
        optional,
        types,
        range_min,
        range_max,
        values: &[],
    }
}

const fn arg_values(
    name: &'static str,
    optional: bool,
    types: &'static [ArgType],
    values: &'static [&'static str],
) -> ArgSpec {
    ArgSpec {
        name,
        optional,
        types,
        range_min: 0,
        range_max: 0,
        values,
    }
}

/// Every recognized option, in lookup order.
pub const OPTIONS: &[OptionSpec] = &[
    // A
    OptionSpec {
        name: "allow-nonadmin",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS).union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("TAP-Adapter", true, &[ArgType::Interface]),
        ],
    },
    OptionSpec {
        name: "allow-pull-fqdn",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "allow-recursive-routing",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "askpass",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("file", true, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "auth",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("alg", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "auth-gen-token",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("lifetime", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "auth-nocache",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "auth-retry",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("type", false, &[ArgType::ListValue], &["none", "nointeract", "interact"]),
        ],
    },
    OptionSpec {
        name: "auth-token",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("token", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "auth-user-pass",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("up", true, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "auth-user-pass-optional",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "auth-user-pass-verify",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
            arg_values("method", false, &[ArgType::ListValue], &["via-env", "via-file"]),
        ],
    },
    // B
    OptionSpec {
        name: "bcast-buffers",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "bind",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg_values("ipv6only", true, &[ArgType::ListValue], &["ipv6only"]),
        ],
    },
    OptionSpec {
        name: "block-outside-dns",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    // C
    OptionSpec {
        name: "ca",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "capath",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("dir", false, &[ArgType::Dir]),
        ],
    },
    OptionSpec {
        name: "ccd-exclusive",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "cd",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("dir", false, &[ArgType::Dir]),
        ],
    },
    OptionSpec {
        name: "cert",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "chroot",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("dir", false, &[ArgType::Dir]),
        ],
    },
    OptionSpec {
        name: "cipher",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("alg", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "client",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "client-cert-not-required",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "client-config-dir",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("dir", false, &[ArgType::Dir]),
        ],
    },
    OptionSpec {
        name: "client-connect",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "client-disconnect",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "client-nat",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 4,
        max_args: Some(4),
        args: &[
            arg_values("nat", false, &[ArgType::ListValue], &["snat", "dnat"]),
            arg("network", false, &[ArgType::Network]),
            arg("netmask", false, &[ArgType::Netmask]),
            arg("alias", false, &[ArgType::Network]),
        ],
    },
    OptionSpec {
        name: "client-to-client",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "compat-names",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 1,
        max_args: None,
        args: &[
            arg("names", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "comp-lzo",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED).union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg_values("mode", true, &[ArgType::ListValue], &["yes", "no", "adaptive"]),
        ],
    },
    OptionSpec {
        name: "comp-noadapt",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "compress",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg_values("algorithm", true, &[ArgType::ListValue], &["lzo", "lz4"]),
        ],
    },
    OptionSpec {
        name: "connect-freq",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
            arg("sec", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "connect-retry",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
            arg("max", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "connect-retry-max",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "connect-timeout",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "connection",
        flags: OptFlags::INLINE,
        inline: Some(InlineKind::Options),
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "crl-verify",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("crl", false, &[ArgType::FilePath, ArgType::Dir]),
            arg_values("dir", true, &[ArgType::ListValue], &["dir"]),
        ],
    },
    OptionSpec {
        name: "cryptoapicert",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("select-string", false, &[ArgType::String]),
        ],
    },
    // D
    OptionSpec {
        name: "daemon",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("progname", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "dev",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("device", false, &[ArgType::TunTapDevice]),
        ],
    },
    OptionSpec {
        name: "dev-node",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("node", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "dev-type",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("device-type", false, &[ArgType::ListValue], &["tun", "tap"]),
        ],
    },
    OptionSpec {
        name: "dh",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "dhcp-option",
        flags: OptFlags::NORMAL.union(OptFlags::MULTIPLE).union(OptFlags::WINDOWS).union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg_values("type", false, &[ArgType::ListValue], &["DOMAIN", "DNS", "WINS", "NBDD", "NTP", "NBT", "NBS", "DISABLE-NTB"]),
            arg("parm", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "dhcp-release",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "dhcp-renew",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "disable",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "disable-occ",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "down",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("type", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "down-pre",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "duplicate-cn",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    // E
    OptionSpec {
        name: "ecdh-curve",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("name", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "echo",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 0,
        max_args: None,
        args: &[
            arg("parms", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "engine",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("engine-name", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "errors-to-stderr",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "explicit-exit-notify",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("n", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "extra-certs",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    // F
    OptionSpec {
        name: "fast-io",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "float",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "fragment",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("max", false, &[ArgType::Unumber]),
        ],
    },
    // G
    OptionSpec {
        name: "genkey",
        flags: OptFlags::NORMAL.union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "group",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("group", false, &[ArgType::String]),
        ],
    },
    // H
    OptionSpec {
        name: "hand-window",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "hash-size",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("r", false, &[ArgType::Unumber]),
            arg("v", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "http-proxy",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 2,
        max_args: Some(4),
        args: &[
            arg("server", false, &[ArgType::Address]),
            arg("port", false, &[ArgType::Port]),
            arg_values("authfile", true, &[ArgType::FilePath, ArgType::ListValue], &["auto", "auto-nct"]),
            arg_values("auth-method", true, &[ArgType::ListValue], &["none", "basic", "ntlm"]),
        ],
    },
    OptionSpec {
        name: "http-proxy-option",
        flags: OptFlags::NORMAL.union(OptFlags::MULTIPLE).union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg_values("type", false, &[ArgType::ListValue], &["VERSION", "AGENT", "CUSTOM-HEADER"]),
            arg("parm", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "http-proxy-user-pass",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    // I
    OptionSpec {
        name: "ifconfig",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("l", false, &[ArgType::IpAddr]),
            arg("rn", false, &[ArgType::Netmask]),
        ],
    },
    OptionSpec {
        name: "ifconfig-ipv6",
        flags: OptFlags::NORMAL.union(OptFlags::IPV6),
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("ipv6addr/bits", false, &[ArgType::Ipv6Addr]),
            arg("ipv6remote", false, &[ArgType::Ipv6Addr]),
        ],
    },
    OptionSpec {
        name: "ifconfig-ipv6-pool",
        flags: OptFlags::NORMAL.union(OptFlags::IPV6),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("ipv6addr/bits", false, &[ArgType::Ipv6Addr]),
        ],
    },
    OptionSpec {
        name: "ifconfig-ipv6-push",
        flags: OptFlags::NORMAL.union(OptFlags::IPV6),
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("ipv6addr/bits", false, &[ArgType::Ipv6Addr]),
            arg("ipv6remote", false, &[ArgType::Ipv6Addr]),
        ],
    },
    OptionSpec {
        name: "ifconfig-noexec",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "ifconfig-nowarn",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "ifconfig-pool",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(3),
        args: &[
            arg("start-IP", false, &[ArgType::IpAddr]),
            arg("end-IP", false, &[ArgType::IpAddr]),
            arg("netmask", true, &[ArgType::Netmask]),
        ],
    },
    OptionSpec {
        name: "ifconfig-pool-linear",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "ifconfig-pool-persist",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
            arg("seconds", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "ifconfig-push",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(3),
        args: &[
            arg("local", false, &[ArgType::IpAddr]),
            arg("remote-netmask", false, &[ArgType::Netmask]),
            arg("alias", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "ignore-unknown-option",
        flags: OptFlags::NORMAL.union(OptFlags::MULTIPLE),
        inline: None,
        min_args: 1,
        max_args: None,
        args: &[
            arg("opt", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "inactive",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
            arg("bytes", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "ip-win32",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS).union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(3),
        args: &[
            arg_values("method", false, &[ArgType::ListValue], &["manual", "dynamic", "netsh", "ipapi", "adaptive"]),
            arg("offset", true, &[ArgType::Unumber]),
            arg("lease-time", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "ipchange",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "inetd",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(2),
        args: &[
            arg_values("wait/nowait", true, &[ArgType::ListValue], &["wait", "nowait"]),
            arg("progname", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "iproute",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "iroute",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("network", false, &[ArgType::Network]),
            arg("netmask", true, &[ArgType::Netmask]),
        ],
    },
    OptionSpec {
        name: "iroute-ipv6",
        flags: OptFlags::NORMAL.union(OptFlags::IPV6),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("ipv6addr/bits", false, &[ArgType::Ipv6Addr]),
        ],
    },
    // K
    OptionSpec {
        name: "keepalive",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("interval", false, &[ArgType::Unumber]),
            arg("timeout", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "key",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "key-direction",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("direction", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "key-method",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("m", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "keying-material-exporter",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("label", false, &[ArgType::String]),
            arg_range("len", false, &[ArgType::Unumber], 16, 4095),
        ],
    },
    OptionSpec {
        name: "keysize",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    // L
    OptionSpec {
        name: "learn-address",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "link-mtu",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "lladdr",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("address", false, &[ArgType::MacAddress]),
        ],
    },
    OptionSpec {
        name: "local",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("host", false, &[ArgType::Address]),
        ],
    },
    OptionSpec {
        name: "log",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "log-append",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "lport",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("port", false, &[ArgType::Port]),
        ],
    },
    // M
    OptionSpec {
        name: "machine-readable-output-client",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(3),
        args: &[
            arg("IP/socket-name", false, &[ArgType::String, ArgType::IpAddr]),
            arg_values("port/unix", false, &[ArgType::Port, ArgType::ListValue], &["unix"]),
            arg_values("pw-file", true, &[ArgType::FilePath, ArgType::ListValue], &["stdin"]),
        ],
    },
    OptionSpec {
        name: "management-client",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-client-auth",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-client-group",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("g", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "management-client-pf",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-client-user",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("u", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "management-external-cert",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("certificate-hint", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "management-external-key",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-forget-disconnect",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-hold",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-log-cache",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "management-query-passwords",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-query-proxy",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-query-remote",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-signal",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "management-up-down",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "mark",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("value", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "max-clients",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "max-routes-per-client",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "mktun",
        flags: OptFlags::STANDALONE,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "mlock",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "mode",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("m", false, &[ArgType::ListValue], &["p2p", "server"]),
        ],
    },
    OptionSpec {
        name: "mssfix",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("max", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "mtu-disc",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("type", false, &[ArgType::ListValue], &["no", "maybe", "yes"]),
        ],
    },
    OptionSpec {
        name: "mtu-test",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "multihome",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "mute",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "mute-replay-warnings",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    // N
    OptionSpec {
        name: "ncp-ciphers",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cipher_list", false, &[ArgType::List]),
        ],
    },
    OptionSpec {
        name: "ncp-disable",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "nice",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Number]),
        ],
    },
    OptionSpec {
        name: "no-iv",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "no-replay",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "no-name-remapping",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "nobind",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "ns-cert-type",
        flags: OptFlags::NORMAL.union(OptFlags::DEPRECATED),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("type", false, &[ArgType::ListValue], &["client", "server"]),
        ],
    },
    // O
    OptionSpec {
        name: "opt-verify",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    // P
    OptionSpec {
        name: "passtos",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "pause-exit",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "persist-key",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "persist-local-ip",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "persist-remote-ip",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "persist-tun",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "ping",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "ping-exit",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "ping-restart",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "ping-timer-rem",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "pkcs11-cert-private",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: None,
        args: &[
            arg_range("0/1", false, &[ArgType::Unumber], 0, 1),
        ],
    },
    OptionSpec {
        name: "pkcs11-id",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("name", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "pkcs11-id-management",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "pkcs11-pin-cache",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("seconds", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "pkcs11-protected-authentification",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg_range("0/1", false, &[ArgType::Unumber], 0, 1),
        ],
    },
    OptionSpec {
        name: "pkcs11-providers",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: None,
        args: &[
            arg("provider", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "pkcs11-private-mode",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: None,
        args: &[
            arg_range("provider", false, &[ArgType::Unumber], 0, 15),
        ],
    },
    OptionSpec {
        name: "pkcs12",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "plugin",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("module-pathname", false, &[ArgType::FilePath]),
            arg("init-string", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "port",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("port", false, &[ArgType::Port]),
        ],
    },
    OptionSpec {
        name: "port-share",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(3),
        args: &[
            arg("host", false, &[ArgType::Address]),
            arg("port", false, &[ArgType::Port]),
            arg("dir", true, &[ArgType::Dir]),
        ],
    },
    OptionSpec {
        name: "prng",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("alg", false, &[ArgType::String]),
            arg_range("nsl", true, &[ArgType::Unumber], 16, 64),
        ],
    },
    OptionSpec {
        name: "proto",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("p", false, &[ArgType::ListValue], &["udp", "tcp", "tcp-client", "tcp-server"]),
        ],
    },
    OptionSpec {
        name: "proto-force",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("p", false, &[ArgType::ListValue], &["tcp", "udp"]),
        ],
    },
    OptionSpec {
        name: "pull",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "pull-filter",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg_values("action", false, &[ArgType::ListValue], &["accept", "ignore", "reject"]),
            arg("text", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "push",
        flags: OptFlags::NORMAL.union(OptFlags::MULTIPLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("option", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "push-peer-info",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "push-remove",
        flags: OptFlags::NORMAL.union(OptFlags::MULTIPLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("option", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "push-reset",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    // R
    OptionSpec {
        name: "rcvbuf",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("size", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "redirect-gateway",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 0,
        max_args: None,
        args: &[
            arg_values("flags", false, &[ArgType::ListValue], &["local", "autolocal", "def1", "bypass-dhcp", "bypass-dns", "block-local", "ipv6", "!ipv4"]),
        ],
    },
    OptionSpec {
        name: "redirect-private",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: None,
        args: &[
            arg_values("flags", false, &[ArgType::ListValue], &["local", "autolocal", "def1", "bypass-dhcp", "bypass-dns", "block-local", "ipv6", "!ipv4"]),
        ],
    },
    OptionSpec {
        name: "register-dns",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "remap-usr1",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("signal", false, &[ArgType::ListValue], &["SIGHUP", "SIGTERM"]),
        ],
    },
    OptionSpec {
        name: "remote",
        flags: OptFlags::NORMAL.union(OptFlags::MULTIPLE).union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(3),
        args: &[
            arg("host", false, &[ArgType::Address]),
            arg("port", true, &[ArgType::Port]),
            arg_values("proto", true, &[ArgType::ListValue], &["udp", "tcp", "udp4", "tcp4", "udp6", "tcp6", "tcp-client", "udp-client"]),
        ],
    },
    OptionSpec {
        name: "remote-cert-eku",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("oid", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "remote-cert-ku",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: None,
        args: &[
            arg("v", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "remote-cert-tls",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("mode", false, &[ArgType::ListValue], &["client", "server"]),
        ],
    },
    OptionSpec {
        name: "remote-random",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "remote-random-hostname",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "reneg-bytes",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "reneg-pkts",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "reneg-sec",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "replay-persist",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "replay-window",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
            arg("t", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "resolv-retry",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("n", false, &[ArgType::Unumber, ArgType::ListValue], &["infinite"]),
        ],
    },
    OptionSpec {
        name: "rmtun",
        flags: OptFlags::NORMAL.union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "route",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(4),
        args: &[
            arg_values("network/IP", false, &[ArgType::Network, ArgType::Address, ArgType::ListValue], &["vpn_gateway", "net_gateway", "remote_host"]),
            arg("netmask", true, &[ArgType::Netmask]),
            arg_values("gateway", true, &[ArgType::IpAddr, ArgType::ListValue], &["vpn_gateway", "net_gateway", "remote_host"]),
            arg("metric", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "route-delay",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 0,
        max_args: Some(2),
        args: &[
            arg("n", true, &[ArgType::Unumber]),
            arg("w", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "route-gateway",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("gw", false, &[ArgType::IpAddr, ArgType::ListValue], &["dhcp"]),
        ],
    },
    OptionSpec {
        name: "route-ipv6",
        flags: OptFlags::NORMAL.union(OptFlags::IPV6).union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(3),
        args: &[
            arg("ipv6addr/bits", false, &[ArgType::Ipv6Addr]),
            arg("gateway", true, &[ArgType::IpAddr]),
            arg("metric", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "route-method",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("m", false, &[ArgType::ListValue], &["adaptive", "ipapi", "exe"]),
        ],
    },
    OptionSpec {
        name: "route-metric",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("m", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "route-noexec",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "route-nopull",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "route-pre-down",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "route-up",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "rport",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("port", false, &[ArgType::Port]),
        ],
    },
    // S
    OptionSpec {
        name: "script-security",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_range("level", false, &[ArgType::Unumber], 0, 3),
        ],
    },
    OptionSpec {
        name: "secret",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
            arg("direction", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "server",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(3),
        args: &[
            arg("network", false, &[ArgType::Network]),
            arg("netmask", false, &[ArgType::Netmask]),
            arg_values("metric", true, &[ArgType::ListValue], &["nopool"]),
        ],
    },
    OptionSpec {
        name: "server-bridge",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(4),
        args: &[
            arg_values("gateway", true, &[ArgType::IpAddr, ArgType::ListValue], &["nogw"]),
            arg("netmask", false, &[ArgType::Netmask]),
            arg("pool-start-IP", true, &[ArgType::IpAddr]),
            arg("pool-end-IP", true, &[ArgType::IpAddr]),
        ],
    },
    OptionSpec {
        name: "server-ipv6",
        flags: OptFlags::NORMAL.union(OptFlags::IPV6),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("ipv6addr/bits", false, &[ArgType::Ipv6Addr]),
        ],
    },
    OptionSpec {
        name: "server-poll-timeout",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "service",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("exit-event", false, &[ArgType::String]),
            arg_range("0/1", true, &[ArgType::Unumber], 0, 1),
        ],
    },
    OptionSpec {
        name: "setcon",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("context", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "setenv",
        flags: OptFlags::NORMAL.union(OptFlags::MULTIPLE).union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("name", false, &[ArgType::String]),
            arg("value", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "setenv-safe",
        flags: OptFlags::NORMAL.union(OptFlags::MULTIPLE),
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("name", false, &[ArgType::String]),
            arg("value", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "shaper",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "show-adapters",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS).union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-ciphers",
        flags: OptFlags::NORMAL.union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-curves",
        flags: OptFlags::NORMAL.union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-digests",
        flags: OptFlags::NORMAL.union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-engines",
        flags: OptFlags::NORMAL.union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-gateway",
        flags: OptFlags::NORMAL.union(OptFlags::DEBUG).union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("v6target", true, &[ArgType::Ipv6Addr]),
        ],
    },
    OptionSpec {
        name: "show-net",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS).union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-net-up",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-pkcs11-ids",
        flags: OptFlags::NORMAL.union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(2),
        args: &[
            arg("provider", true, &[ArgType::String]),
            arg("cert_private", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "show-proxy-settings",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-tls",
        flags: OptFlags::NORMAL.union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "show-valid-subnets",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS).union(OptFlags::STANDALONE),
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "single-session",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "sndbuf",
        flags: OptFlags::NORMAL.union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("size", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "socket-flags",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION).union(OptFlags::PUSHABLE),
        inline: None,
        min_args: 1,
        max_args: None,
        args: &[
            arg("flags", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "socks-proxy",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(3),
        args: &[
            arg("server", false, &[ArgType::Address]),
            arg("port", true, &[ArgType::Port]),
            arg("authfile", true, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "stale-routes-check",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
            arg("t", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "static-challenge",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("t", false, &[ArgType::String]),
            arg_range("e", false, &[ArgType::Unumber], 0, 1),
        ],
    },
    OptionSpec {
        name: "status",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
            arg("n", true, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "status-version",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg_range("n", false, &[ArgType::Unumber], 1, 3),
        ],
    },
    OptionSpec {
        name: "suppress-timestamps",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "syslog",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(1),
        args: &[
            arg("progname", true, &[ArgType::String]),
        ],
    },
    // T
    OptionSpec {
        name: "tap-sleep",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "tcp-nodelay",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "tcp-queue-limit",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "test-crypto",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "tls-auth",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
            arg("direction", true, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "tls-cert-profile",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("file", false, &[ArgType::ListValue], &["legacy", "preferred", "suiteb"]),
        ],
    },
    OptionSpec {
        name: "tls-cipher",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("l", false, &[ArgType::List]),
        ],
    },
    OptionSpec {
        name: "tls-ciphersuites",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("l", false, &[ArgType::List]),
        ],
    },
    OptionSpec {
        name: "tls-client",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "tls-crypt",
        flags: OptFlags::NORMAL.union(OptFlags::INLINE),
        inline: Some(InlineKind::Plain),
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("keyfile", false, &[ArgType::FilePath]),
        ],
    },
    OptionSpec {
        name: "tls-exit",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "tls-export-cert",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("directory", false, &[ArgType::Dir]),
        ],
    },
    OptionSpec {
        name: "tls-server",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "tls-timeout",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "tls-verify",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "tls-version-min",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("version", false, &[ArgType::String]),
            arg_values("or-highest", true, &[ArgType::ListValue], &["or-highest"]),
        ],
    },
    OptionSpec {
        name: "tls-version-max",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("version", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "tmp-dir",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("dir", false, &[ArgType::Dir]),
        ],
    },
    OptionSpec {
        name: "topology",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("mode", false, &[ArgType::ListValue], &["net30", "p2p", "subnet"]),
        ],
    },
    OptionSpec {
        name: "tran-window",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "tun-mtu",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "tun-mtu-extra",
        flags: OptFlags::NORMAL.union(OptFlags::CONNECTION),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    OptionSpec {
        name: "txqueuelen",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("n", false, &[ArgType::Unumber]),
        ],
    },
    // U
    OptionSpec {
        name: "up",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("cmd", false, &[ArgType::Command]),
        ],
    },
    OptionSpec {
        name: "up-delay",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "up-restart",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "use-prediction-resistance",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    OptionSpec {
        name: "user",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("user", false, &[ArgType::String]),
        ],
    },
    OptionSpec {
        name: "username-as-common-name",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 0,
        max_args: Some(0),
        args: &[],
    },
    // V
    OptionSpec {
        name: "verb",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_range("n", false, &[ArgType::Unumber], 0, 11),
        ],
    },
    OptionSpec {
        name: "verify-client-cert",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg_values("mode", false, &[ArgType::ListValue], &["none", "optional", "require"]),
        ],
    },
    OptionSpec {
        name: "verify-hash",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(2),
        args: &[
            arg("hash", false, &[ArgType::String]),
            arg_values("algo", true, &[ArgType::ListValue], &["SHA1", "SHA256"]),
        ],
    },
    OptionSpec {
        name: "verify-x509-name",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 2,
        max_args: Some(2),
        args: &[
            arg("name", false, &[ArgType::String]),
            arg("type", false, &[ArgType::String]),
        ],
    },
    // W
    OptionSpec {
        name: "win-sys",
        flags: OptFlags::NORMAL.union(OptFlags::WINDOWS),
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("path", false, &[ArgType::Dir]),
        ],
    },
    OptionSpec {
        name: "writepid",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("file", false, &[ArgType::FilePath]),
        ],
    },
    // X
    OptionSpec {
        name: "x509-username-field",
        flags: OptFlags::NORMAL,
        inline: None,
        min_args: 1,
        max_args: Some(1),
        args: &[
            arg("fieldname", false, &[ArgType::String]),
        ],
    },
];
