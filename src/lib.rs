//! Converting DNS data into wire format.
//!
//! This crate takes DNS data held in memory, such as domain names, record
//! data fields, resource records, and complete messages, and produces
//! their wire format as described in [RFC 1035]. Domain names are never
//! compressed.
//!
//! # Modules
//!
//! * [base] contains the types for DNS data together with the traits and
//!   the buffer used for composing their wire format,
//! * [export] contains functions that turn a single value into a vec of
//!   its wire format, limited in size by a [`Config`][export::Config], and
//! * [utils] contains helpers such as a Base 16 decoder.
//!
//! # Reference of Feature Flags
//!
//! * `bytes`: Enables freezing a [`Buffer`][base::Buffer] into a `Bytes`
//!   value from the [bytes](https://github.com/tokio-rs/bytes) crate.
//! * `serde`: Enables serializing and deserializing the export
//!   configuration via [serde](https://serde.rs/).
//!
//! # Logging
//!
//! The crate logs via [tracing](https://docs.rs/tracing). Successful
//! exports are logged at trace level, failures at debug level.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod export;
pub mod utils;
