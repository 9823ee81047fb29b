//! Domain names.
//!
//! A [`Dname`] holds an absolute domain name already in its uncompressed
//! wire format: a sequence of labels, each preceded by its length, that
//! ends in the empty root label. The type checks this encoding once upon
//! creation and afterwards only ever copies the octets around. Composing a
//! name never compresses it.

use super::wire::{ComposeError, Composer};
use core::{fmt, str};
use std::vec::Vec;

//------------ Dname ---------------------------------------------------------

/// An uncompressed, absolute domain name in wire format.
///
/// You can construct a domain name from its wire format via
/// [`from_octets`][Self::from_octets] or from its presentation format via
/// the `FromStr` trait.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Dname {
    octets: Vec<u8>,
}

/// # Creating Values
///
impl Dname {
    /// The maximum length of a domain name in wire format.
    pub const MAX_LEN: usize = 255;

    /// The maximum length of a single label.
    pub const MAX_LABEL_LEN: usize = 63;

    /// Creates a domain name from an octet sequence.
    ///
    /// This will only succeed if `octets` contains a properly encoded
    /// absolute domain name.
    pub fn from_octets(octets: Vec<u8>) -> Result<Self, DnameError> {
        Self::check_slice(&octets)?;
        Ok(Dname { octets })
    }

    /// Creates a domain name from a copy of an octets slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self, DnameError> {
        Self::check_slice(slice)?;
        Ok(Dname {
            octets: slice.into(),
        })
    }

    /// Creates a domain name for the root label only.
    pub fn root() -> Self {
        Dname { octets: vec![0] }
    }

    /// Checks whether an octet slice contains a correctly encoded name.
    fn check_slice(mut slice: &[u8]) -> Result<(), DnameError> {
        if slice.len() > Self::MAX_LEN {
            return Err(DnameError::LongName);
        }
        loop {
            let (&head, tail) =
                slice.split_first().ok_or(DnameError::RelativeName)?;
            match head {
                0 => {
                    if tail.is_empty() {
                        return Ok(());
                    }
                    return Err(DnameError::TrailingData);
                }
                1..=0x3F => {}
                0xC0..=0xFF => return Err(DnameError::CompressedName),
                _ => return Err(DnameError::BadLabel),
            }
            slice = tail
                .get(usize::from(head)..)
                .ok_or(DnameError::ShortInput)?;
        }
    }
}

/// # Properties
///
impl Dname {
    /// Returns a reference to the wire format of the name.
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

    /// Converts the name into its wire format octets.
    pub fn into_octets(self) -> Vec<u8> {
        self.octets
    }

    /// Returns the length of the wire format of the name.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the name is the root name.
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns an iterator over the labels of the name, excluding the root.
    pub fn iter_labels(&self) -> LabelIter {
        LabelIter {
            slice: &self.octets,
        }
    }

    /// Returns the number of labels, including the root label.
    pub fn label_count(&self) -> usize {
        self.iter_labels().count() + 1
    }
}

/// # Composing
///
impl Dname {
    /// Appends the name in wire format to `target`.
    ///
    /// Space for the whole name is reserved first. If that fails, nothing
    /// is written. The returned value is the status of `target` afterwards.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        if target.reserve(self.octets.len()) {
            target.write_slice(&self.octets)
        }
        target.status()
    }
}

//--- FromStr

impl str::FromStr for Dname {
    type Err = FromStrError;

    /// Parses a domain name from its presentation format.
    ///
    /// Labels are separated by dots and the final dot is optional: the name
    /// is always taken to be absolute. Dots and backslashes inside a label
    /// are escaped by a backslash, arbitrary octets by a backslash followed
    /// by three decimal digits. A single dot is the root name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Self::root());
        }
        let mut builder = Builder::default();
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '.' => builder.end_label()?,
                '\\' => builder.push(parse_escape(&mut chars)?)?,
                ' '..='-' | '/'..='[' | ']'..='~' => builder.push(ch as u8)?,
                _ => return Err(FromStrError::IllegalCharacter(ch)),
            }
        }
        builder.into_dname()
    }
}

//--- AsRef

impl AsRef<[u8]> for Dname {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- Display and Debug

impl fmt::Display for Dname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.iter_labels() {
            for &ch in label {
                if ch == b'.' || ch == b'\\' {
                    write!(f, "\\{}", ch as char)?;
                } else if ch.is_ascii_graphic() {
                    write!(f, "{}", ch as char)?;
                } else {
                    write!(f, "\\{:03}", ch)?;
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Dname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Dname({})", self)
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the content of the non-root labels of a name.
#[derive(Clone, Debug)]
pub struct LabelIter<'a> {
    slice: &'a [u8],
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.slice.split_first()?;
        if len == 0 {
            return None;
        }
        let (label, tail) = tail.split_at(usize::from(len));
        self.slice = tail;
        Some(label)
    }
}

//------------ Builder -------------------------------------------------------

/// Assembles the wire format of a name label by label.
#[derive(Default)]
struct Builder {
    octets: Vec<u8>,

    /// The position of the length octet of the current label, if any.
    head: Option<usize>,
}

impl Builder {
    fn push(&mut self, ch: u8) -> Result<(), FromStrError> {
        let head = match self.head {
            Some(head) => head,
            None => {
                self.octets.push(0);
                let head = self.octets.len() - 1;
                self.head = Some(head);
                head
            }
        };
        if self.octets.len() - head > Dname::MAX_LABEL_LEN {
            return Err(FromStrError::LongLabel);
        }
        // Leave room for the root label.
        if self.octets.len() + 1 >= Dname::MAX_LEN {
            return Err(FromStrError::LongName);
        }
        self.octets.push(ch);
        Ok(())
    }

    fn end_label(&mut self) -> Result<(), FromStrError> {
        let head = self.head.take().ok_or(FromStrError::EmptyLabel)?;
        self.octets[head] = (self.octets.len() - head - 1) as u8;
        Ok(())
    }

    fn into_dname(mut self) -> Result<Dname, FromStrError> {
        if self.head.is_some() {
            self.end_label()?;
        } else if self.octets.is_empty() {
            return Err(FromStrError::EmptyLabel);
        }
        self.octets.push(0);
        Ok(Dname {
            octets: self.octets,
        })
    }
}

/// Parses the contents of an escape sequence from `chars`.
///
/// The backslash should already have been taken out of `chars`.
fn parse_escape<C>(chars: &mut C) -> Result<u8, FromStrError>
where
    C: Iterator<Item = char>,
{
    let ch = chars.next().ok_or(FromStrError::UnexpectedEnd)?;
    match ch.to_digit(10) {
        Some(first) => {
            let mut value = first;
            for _ in 0..2 {
                let digit = chars
                    .next()
                    .ok_or(FromStrError::UnexpectedEnd)?
                    .to_digit(10)
                    .ok_or(FromStrError::IllegalEscape)?;
                value = value * 10 + digit;
            }
            u8::try_from(value).map_err(|_| FromStrError::IllegalEscape)
        }
        None if ch.is_ascii() => Ok(ch as u8),
        None => Err(FromStrError::IllegalCharacter(ch)),
    }
}

//============ Error Types ===================================================

//------------ DnameError ----------------------------------------------------

/// A domain name wasn’t encoded correctly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DnameError {
    /// The encoding contained an unknown or disallowed label type.
    BadLabel,

    /// The encoding contained a compression pointer.
    CompressedName,

    /// The name was longer than 255 octets.
    LongName,

    /// The name did not end with the root label.
    RelativeName,

    /// There was more data after the root label was encountered.
    TrailingData,

    /// The input ended in the middle of a label.
    ShortInput,
}

//--- Display and Error

impl fmt::Display for DnameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            DnameError::BadLabel => "invalid label type",
            DnameError::CompressedName => "compressed domain name",
            DnameError::LongName => "long domain name",
            DnameError::RelativeName => "relative name",
            DnameError::TrailingData => "trailing data",
            DnameError::ShortInput => "unexpected end of input",
        })
    }
}

impl std::error::Error for DnameError {}

//------------ FromStrError --------------------------------------------------

/// A domain name could not be created from a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The string ended when there should have been more characters.
    ///
    /// This most likely happens inside escape sequences.
    UnexpectedEnd,

    /// An empty label was encountered.
    EmptyLabel,

    /// A domain name label has more than 63 octets.
    LongLabel,

    /// An illegal escape sequence was encountered.
    ///
    /// Escape sequences are a backslash character followed by either a
    /// three decimal digit sequence encoding a byte value or a single
    /// other printable ASCII character.
    IllegalEscape,

    /// An illegal character was encountered.
    ///
    /// Only printable ASCII characters are allowed.
    IllegalCharacter(char),

    /// The name has more than 255 octets.
    LongName,
}

//--- Display and Error

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FromStrError::UnexpectedEnd => {
                f.write_str("unexpected end of input")
            }
            FromStrError::EmptyLabel => {
                f.write_str("an empty label was encountered")
            }
            FromStrError::LongLabel => {
                f.write_str("label length limit exceeded")
            }
            FromStrError::IllegalEscape => {
                f.write_str("illegal escape sequence")
            }
            FromStrError::IllegalCharacter(ch) => {
                write!(f, "illegal character '{}'", ch)
            }
            FromStrError::LongName => f.write_str("long domain name"),
        }
    }
}

impl std::error::Error for FromStrError {}

//============ Testing =======================================================
