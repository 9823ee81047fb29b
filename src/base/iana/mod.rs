//! IANA Definitions for DNS.
//!
//! This module contains types for the parameters defined in IANA registries
//! that appear in the fixed parts of a DNS message: record types, classes,
//! opcodes, and response codes.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer with associated constants for all the
//! well-defined values. Since a message may contain any value, there is no
//! way to restrict a value to the well-defined set and we don’t try.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` are implemented to convert from
//! the string codes to the values and back. All types implement
//! [`Compose`][crate::base::wire::Compose] for writing their wire format.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;
