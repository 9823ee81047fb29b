//! Converting DNS data into wire format octets.
//!
//! The functions in this module compose a single value into a freshly
//! allocated scratch [`Buffer`] and return its content. The size of the
//! scratch buffer, and thus the maximum size of the result, is determined
//! by a [`Config`]. If the value doesn’t fit or anything else goes wrong,
//! an error is returned and whatever was written so far is dropped.
//!
//! ```
//! use domain_wire::base::{Class, Dname, Message, Rtype};
//! use domain_wire::export::{message_to_wire, Config};
//!
//! let qname: Dname = "example.com".parse().unwrap();
//! let query = Message::query(0x1234, qname, Rtype::A, Class::IN);
//! let wire = message_to_wire(&query, &Config::udp()).unwrap();
//! assert_eq!(wire.len(), 12 + 13 + 4);
//! assert_eq!(&wire[..4], b"\x12\x34\x01\x00");
//! ```

use crate::base::buffer::{AllocError, Buffer};
use crate::base::message::Message;
use crate::base::name::Dname;
use crate::base::rdata::Rdf;
use crate::base::record::{Record, Section};
use crate::base::wire::{ComposeError, Composer};
use core::fmt;
use octseq::builder::FreezeBuilder;
use std::vec::Vec;
use tracing::{debug, trace};

//------------ Configuration -------------------------------------------------

/// The largest possible DNS message.
pub const MAX_PACKET_LEN: usize = 65535;

/// The largest DNS message for plain UDP without EDNS.
pub const UDP_PACKET_LEN: usize = 512;

/// Configuration for exporting wire format data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The size of the scratch buffer and thus the maximum result size.
    max_len: usize,
}

impl Config {
    /// Creates a default configuration.
    ///
    /// The maximum length is [`MAX_PACKET_LEN`].
    pub fn new() -> Self {
        Config {
            max_len: MAX_PACKET_LEN,
        }
    }

    /// Creates a configuration limited to classic UDP messages.
    pub fn udp() -> Self {
        Self::new().with_max_len(UDP_PACKET_LEN)
    }

    /// Returns the maximum length of exported data.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Sets the maximum length of exported data.
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len
    }

    /// Returns the configuration with the given maximum length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.set_max_len(max_len);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

//------------ Export Functions ----------------------------------------------

/// Returns the wire format of a domain name.
pub fn dname_to_wire(
    name: &Dname,
    config: &Config,
) -> Result<Vec<u8>, ExportError> {
    export("name", config, |buf| name.compose(buf)).map(FreezeBuilder::freeze)
}

/// Returns the wire format of a single record data field.
pub fn rdf_to_wire(rdf: &Rdf, config: &Config) -> Result<Vec<u8>, ExportError> {
    export("field", config, |buf| rdf.compose(buf)).map(FreezeBuilder::freeze)
}

/// Returns the wire format of a record as it appears in `section`.
///
/// In the question section, the result contains neither TTL nor record
/// data.
pub fn record_to_wire(
    record: &Record,
    section: Section,
    config: &Config,
) -> Result<Vec<u8>, ExportError> {
    export("record", config, |buf| record.compose(buf, section))
        .map(FreezeBuilder::freeze)
}

/// Returns the wire format of a complete message.
///
/// The header is composed with the section counts as stored in the
/// message, regardless of the number of records actually present.
///
/// Unlike the other functions, the result is a copy of the scratch
/// buffer’s content sized to exactly the message.
pub fn message_to_wire(
    msg: &Message,
    config: &Config,
) -> Result<Vec<u8>, ExportError> {
    let buf = export("message", config, |buf| msg.compose(buf))?;
    Ok(buf.as_slice().to_vec())
}

/// Composes something into a new scratch buffer.
///
/// Returns the buffer only if both `op` and the buffer’s final status
/// report success.
fn export<F>(what: &str, config: &Config, op: F) -> Result<Buffer, ExportError>
where
    F: FnOnce(&mut Buffer) -> Result<(), ComposeError>,
{
    let mut buf = Buffer::new(config.max_len()).map_err(|err| {
        debug!(what, max_len = config.max_len(), "{}", err);
        ExportError::from(err)
    })?;
    if let Err(err) = op(&mut buf).and_then(|_| buf.status()) {
        debug!(what, written = buf.position(), "export failed: {}", err);
        return Err(err.into());
    }
    trace!(what, len = buf.position(), "exported");
    Ok(buf)
}

//------------ ExportError ---------------------------------------------------

/// Exporting data into wire format failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportError {
    /// The scratch buffer could not be allocated.
    Alloc,

    /// Composing failed.
    Compose(ComposeError),
}

//--- From

impl From<AllocError> for ExportError {
    fn from(_: AllocError) -> Self {
        ExportError::Alloc
    }
}

impl From<ComposeError> for ExportError {
    fn from(err: ComposeError) -> Self {
        ExportError::Compose(err)
    }
}

//--- Display and Error

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExportError::Alloc => f.write_str("failed to allocate buffer"),
            ExportError::Compose(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            ExportError::Alloc => None,
            ExportError::Compose(ref err) => Some(err),
        }
    }
}

//============ Testing =======================================================
