//! Immutable schema registry for OpenVPN configuration options.
//!
//! The registry is a compiled-in table describing every recognized
//! OpenVPN 2.4 configuration directive: its behavioral flags, whether
//! it may appear in `<tag>...</tag>` inline form, how many arguments
//! it takes, and what values each argument position accepts. Parsers
//! resolve option names and inline tags against the table with
//! [`find`] and check argument values with [`ArgType::accepts`].
//!
//! The table is read-only for the life of the process and may be
//! shared freely across threads; lookup never allocates.

pub mod arg;
pub mod flags;
pub mod spec;
pub mod table;

pub use arg::{ArgSpec, ArgType};
pub use flags::OptFlags;
pub use spec::{find, InlineKind, OptionSpec};
pub use table::OPTIONS;
