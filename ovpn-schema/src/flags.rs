use bitflags::bitflags;

bitflags! {
    /// Behavioral flags attached to a configuration option.
    ///
    /// Flags are additive; most options carry [`OptFlags::NORMAL`]
    /// plus zero or more qualifiers. Lookup filters on a required
    /// subset, so an entry matches when its flags form a superset of
    /// the requested ones.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OptFlags: u16 {
        /// Option may be specified multiple times.
        const MULTIPLE = 0x001;

        /// Option is valid inside a connection profile.
        const CONNECTION = 0x002;

        /// Option is deprecated and may be removed in OpenVPN 2.5+.
        const DEPRECATED = 0x004;

        /// Windows-specific option.
        const WINDOWS = 0x008;

        /// IPv6 related option.
        const IPV6 = 0x010;

        /// Option accepts the `<tag>...</tag>` inline form.
        const INLINE = 0x020;

        /// Debug related option.
        const DEBUG = 0x040;

        /// Option is only usable in standalone mode.
        const STANDALONE = 0x080;

        /// Option may appear inside a server `push` directive.
        const PUSHABLE = 0x100;

        /// Option is valid in a normal configuration context.
        const NORMAL = 0x200;
    }
}

#[cfg(test)]
mod tests {
    use super::OptFlags;

    #[test]
    fn superset_check_matches_lookup_filter_semantics() {
        let entry = OptFlags::NORMAL | OptFlags::WINDOWS | OptFlags::STANDALONE;
        assert!(entry.contains(OptFlags::NORMAL));
        assert!(entry.contains(OptFlags::NORMAL | OptFlags::WINDOWS));
        assert!(!entry.contains(OptFlags::INLINE));
        // Empty filter matches any entry.
        assert!(entry.contains(OptFlags::empty()));
    }
}
