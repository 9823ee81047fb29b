//! Basics.
//!
//! This module provides the types for DNS data that can be converted into
//! wire format and the machinery to do so.
//!
//!
//! ## Composing
//!
//! We use the term *composing* for producing the wire format of a value.
//! All composing happens into a type implementing the [`Composer`] trait
//! defined in the [wire] module. The crate provides one such type,
//! [`Buffer`], a bounded octets buffer.
//!
//! Composers have a *latched* status. The first failure, typically running
//! out of space, is remembered and turns all later writes into no-ops.
//! Encoders therefore keep going after a failed step and simply return the
//! composer’s status at the end. Whoever owns the composer has to check
//! that status before using any of its content.
//!
//! Names are never compressed. Each name is composed in full wherever it
//! appears.
//!
//!
//! # Types for DNS Data
//!
//! The types are arranged in submodules:
//!
//! * [header] for the header section of DNS messages,
//! * [iana] for the various IANA-assigned numbers such as record types,
//! * [message] for complete DNS messages,
//! * [name] for uncompressed domain names,
//! * [rdata] for the individual fields of record data, and
//! * [record] for resource records and message sections.
//!
//! The most important types are re-exported here.

//--- Re-exports

pub use self::buffer::Buffer;
pub use self::header::{Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::Message;
pub use self::name::Dname;
pub use self::rdata::{Rdf, RdfType};
pub use self::record::{Record, Section};
pub use self::wire::{Compose, ComposeError, Composer};

//--- Modules

pub mod buffer;
pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod rdata;
pub mod record;
pub mod wire;
