//! Record data fields.
//!
//! The record data of a resource record is a sequence of fields such as
//! addresses, integers, domain names, or character strings. An [`Rdf`]
//! holds one such field already converted into its wire format, tagged
//! with the kind of field it is. Composing record data only ever copies
//! these octets, so the tag is purely informational when composing.

use super::name::Dname;
use super::wire::{ComposeError, Composer};
use crate::utils::base16;
use core::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::vec::Vec;

//------------ RdfType -------------------------------------------------------

/// The kind of a record data field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RdfType {
    /// Anything not covered by the other variants.
    None,

    /// An uncompressed domain name.
    Dname,

    /// An 8 bit integer.
    Int8,

    /// A 16 bit integer in network byte order.
    Int16,

    /// A 32 bit integer in network byte order.
    Int32,

    /// An IPv4 address.
    A,

    /// An IPv6 address.
    Aaaa,

    /// A character string: a length octet followed by that many octets.
    Str,

    /// Arbitrary binary data.
    Hex,
}

impl RdfType {
    /// Returns the length of the wire format if it is fixed for the type.
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            RdfType::Int8 => Some(1),
            RdfType::Int16 => Some(2),
            RdfType::Int32 | RdfType::A => Some(4),
            RdfType::Aaaa => Some(16),
            _ => None,
        }
    }
}

//------------ Rdf -----------------------------------------------------------

/// A single record data field in wire format.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Rdf {
    rdf_type: RdfType,
    data: Vec<u8>,
}

/// # Creating Values
///
impl Rdf {
    /// Creates a field from its type and wire format.
    ///
    /// For types with a fixed length, the length of `data` must match.
    pub fn new(rdf_type: RdfType, data: Vec<u8>) -> Result<Self, RdfError> {
        if let Some(len) = rdf_type.fixed_len() {
            if data.len() != len {
                return Err(RdfError::BadLength);
            }
        }
        if data.len() > usize::from(u16::MAX) {
            return Err(RdfError::LongData);
        }
        Ok(Rdf { rdf_type, data })
    }

    pub fn from_u8(value: u8) -> Self {
        Rdf {
            rdf_type: RdfType::Int8,
            data: vec![value],
        }
    }

    pub fn from_u16(value: u16) -> Self {
        Rdf {
            rdf_type: RdfType::Int16,
            data: value.to_be_bytes().into(),
        }
    }

    pub fn from_u32(value: u32) -> Self {
        Rdf {
            rdf_type: RdfType::Int32,
            data: value.to_be_bytes().into(),
        }
    }

    pub fn from_ipv4(addr: Ipv4Addr) -> Self {
        Rdf {
            rdf_type: RdfType::A,
            data: addr.octets().into(),
        }
    }

    pub fn from_ipv6(addr: Ipv6Addr) -> Self {
        Rdf {
            rdf_type: RdfType::Aaaa,
            data: addr.octets().into(),
        }
    }

    pub fn from_dname(name: Dname) -> Self {
        Rdf {
            rdf_type: RdfType::Dname,
            data: name.into_octets(),
        }
    }

    /// Creates a character string field from its content.
    ///
    /// The content can be at most 255 octets long.
    pub fn from_charstr(content: &[u8]) -> Result<Self, RdfError> {
        let len = u8::try_from(content.len())
            .map_err(|_| RdfError::LongCharStr)?;
        let mut data = Vec::with_capacity(content.len() + 1);
        data.push(len);
        data.extend_from_slice(content);
        Ok(Rdf {
            rdf_type: RdfType::Str,
            data,
        })
    }

    /// Creates a field of the given type from its presentation format.
    ///
    /// Integers are given in decimal, addresses in their usual notation,
    /// domain names as described for [`Dname`]’s `FromStr` impl. The
    /// content of character strings is taken verbatim, `Hex` expects pairs
    /// of hex digits. Type `None` can’t be created from a string.
    pub fn from_presentation(
        rdf_type: RdfType,
        s: &str,
    ) -> Result<Self, RdfError> {
        match rdf_type {
            RdfType::Int8 => s
                .parse()
                .map(Self::from_u8)
                .map_err(|_| RdfError::Syntax),
            RdfType::Int16 => s
                .parse()
                .map(Self::from_u16)
                .map_err(|_| RdfError::Syntax),
            RdfType::Int32 => s
                .parse()
                .map(Self::from_u32)
                .map_err(|_| RdfError::Syntax),
            RdfType::A => s
                .parse()
                .map(Self::from_ipv4)
                .map_err(|_| RdfError::Syntax),
            RdfType::Aaaa => s
                .parse()
                .map(Self::from_ipv6)
                .map_err(|_| RdfError::Syntax),
            RdfType::Dname => s
                .parse()
                .map(Self::from_dname)
                .map_err(|_| RdfError::Syntax),
            RdfType::Str => Self::from_charstr(s.as_bytes()),
            RdfType::Hex => base16::decode_vec(s)
                .map_err(|_| RdfError::Syntax)
                .and_then(|data| Self::new(RdfType::Hex, data)),
            RdfType::None => Err(RdfError::Syntax),
        }
    }
}

/// # Access and Composing
///
impl Rdf {
    pub fn rdf_type(&self) -> RdfType {
        self.rdf_type
    }

    /// Returns the wire format of the field.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the length of the wire format of the field.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Appends the field in wire format to `target`.
    ///
    /// Space for the whole field is reserved first. If that fails, nothing
    /// is written. The returned value is the status of `target` afterwards.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        if target.reserve(self.data.len()) {
            target.write_slice(&self.data)
        }
        target.status()
    }
}

//--- From

impl From<Ipv4Addr> for Rdf {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from_ipv4(addr)
    }
}

impl From<Ipv6Addr> for Rdf {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_ipv6(addr)
    }
}

impl From<Dname> for Rdf {
    fn from(name: Dname) -> Self {
        Self::from_dname(name)
    }
}

//--- AsRef

impl AsRef<[u8]> for Rdf {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- Debug

impl fmt::Debug for Rdf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rdf")
            .field("rdf_type", &self.rdf_type)
            .field("data", &format_args!("{:02x?}", self.data))
            .finish()
    }
}

//============ Error Types ===================================================

//------------ RdfError ------------------------------------------------------

/// A record data field could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RdfError {
    /// The data length doesn’t match the fixed length of the field type.
    BadLength,

    /// The data is longer than any record data can be.
    LongData,

    /// A character string was longer than 255 octets.
    LongCharStr,

    /// The presentation format was invalid.
    Syntax,
}

//--- Display and Error

impl fmt::Display for RdfError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            RdfError::BadLength => "invalid length for field type",
            RdfError::LongData => "long record data",
            RdfError::LongCharStr => "long character string",
            RdfError::Syntax => "invalid field syntax",
        })
    }
}

impl std::error::Error for RdfError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::buffer::Buffer;
    use rstest::rstest;

    #[rstest]
    #[case(RdfType::Int8, "200", &b"\xc8"[..])]
    #[case(RdfType::Int16, "4660", &b"\x12\x34"[..])]
    #[case(RdfType::Int32, "16909060", &b"\x01\x02\x03\x04"[..])]
    #[case(RdfType::A, "192.0.2.1", &b"\xc0\x00\x02\x01"[..])]
    #[case(RdfType::Dname, "nl", &b"\x02nl\x00"[..])]
    #[case(RdfType::Str, "hi", &b"\x02hi"[..])]
    #[case(RdfType::Hex, "dEaD", &b"\xde\xad"[..])]
    fn from_presentation(
        #[case] rdf_type: RdfType,
        #[case] s: &str,
        #[case] wire: &[u8],
    ) {
        let rdf = Rdf::from_presentation(rdf_type, s).unwrap();
        assert_eq!(rdf.rdf_type(), rdf_type);
        assert_eq!(rdf.as_slice(), wire);
    }

    #[test]
    fn from_presentation_aaaa() {
        let rdf = Rdf::from_presentation(RdfType::Aaaa, "2001:db8::1").unwrap();
        assert_eq!(rdf.len(), 16);
        assert_eq!(&rdf.as_slice()[..4], b"\x20\x01\x0d\xb8");
        assert_eq!(rdf.as_slice()[15], 1);
    }

    #[rstest]
    #[case(RdfType::Int8, "256")]
    #[case(RdfType::A, "192.0.2")]
    #[case(RdfType::Dname, "a..b")]
    #[case(RdfType::Hex, "abc")]
    #[case(RdfType::Hex, "zz")]
    #[case(RdfType::Hex, "+a+b")]
    #[case(RdfType::Hex, "-1")]
    #[case(RdfType::Hex, "0x12")]
    #[case(RdfType::None, "")]
    fn from_presentation_errors(#[case] rdf_type: RdfType, #[case] s: &str) {
        assert_eq!(
            Rdf::from_presentation(rdf_type, s),
            Err(RdfError::Syntax)
        );
    }

    #[test]
    fn new_checks_length() {
        assert_eq!(
            Rdf::new(RdfType::A, vec![1, 2, 3]),
            Err(RdfError::BadLength)
        );
        assert!(Rdf::new(RdfType::None, vec![]).is_ok());
        assert_eq!(
            Rdf::new(RdfType::Hex, vec![0; 0x10000]),
            Err(RdfError::LongData)
        );
    }

    #[test]
    fn charstr() {
        assert_eq!(Rdf::from_charstr(&[b'x'; 255]).unwrap().len(), 256);
        assert_eq!(
            Rdf::from_charstr(&[b'x'; 256]),
            Err(RdfError::LongCharStr)
        );
    }

    #[test]
    fn compose() {
        let mut buf = Buffer::new(8).unwrap();
        assert_eq!(Rdf::from_u16(0xbeef).compose(&mut buf), Ok(()));
        assert_eq!(
            Rdf::from_ipv4(Ipv4Addr::new(10, 0, 0, 1)).compose(&mut buf),
            Ok(())
        );
        assert_eq!(buf.as_slice(), b"\xbe\xef\x0a\x00\x00\x01");

        // Doesn’t fit: nothing is written, the failure sticks.
        assert_eq!(
            Rdf::from_u32(7).compose(&mut buf),
            Err(ComposeError::ShortBuf)
        );
        assert_eq!(buf.as_slice().len(), 6);
        assert_eq!(
            Rdf::from_u8(7).compose(&mut buf),
            Err(ComposeError::ShortBuf)
        );
        assert_eq!(buf.as_slice().len(), 6);
    }
}
