//! Creating data in wire format.
//!
//! Composing happens into a *target*, a type implementing the [`Composer`]
//! trait. A composer is an octets builder with a bounded capacity and a
//! latched status: once an append failed, the composer remembers the
//! failure and all further appends become no-ops. Encoders thus do not have
//! to check the outcome of every single write. Instead, whoever owns the
//! target looks at [`Composer::status`] once composing is done and throws
//! away the content if it isn’t clean.

use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf, Truncate};
use tracing::debug;

//------------ Composer ------------------------------------------------------

/// A target for composing wire format data.
///
/// This is the octets sink all encoders in this crate write into. On top
/// of appending via [`OctetsBuilder`] it allows reserving space up front,
/// overwriting already written octets, and keeps a status that, once it
/// turned into an error, stays that way.
///
/// Encoders never roll back what they wrote. Owners of a composer can use
/// [`Truncate`] to drop content before reusing it.
pub trait Composer:
    OctetsBuilder + AsRef<[u8]> + AsMut<[u8]> + Truncate
{
    /// Ensures that at least `len` more octets can be appended.
    ///
    /// Returns `false` and latches an error status if that isn’t possible.
    /// Nothing is written either way.
    fn reserve(&mut self, len: usize) -> bool;

    /// Returns the current status of the composer.
    fn status(&self) -> Result<(), ComposeError>;

    /// Latches an error status.
    ///
    /// If the composer is already in an error state, the first error is
    /// kept.
    fn latch(&mut self, err: ComposeError);

    /// Returns the current write position.
    fn position(&self) -> usize {
        self.as_ref().len()
    }

    /// Appends an octets slice.
    fn write_slice(&mut self, slice: &[u8]) {
        self.write(slice)
    }

    /// Appends the wire format of `value`.
    fn write<T: Compose + ?Sized>(&mut self, value: &T) {
        if self.status().is_err() {
            return
        }
        if value.compose(self).is_err() {
            self.latch(ComposeError::ShortBuf)
        }
    }

    /// Overwrites the two octets at `pos` with `value` in network order.
    ///
    /// The write position is not changed. The two octets must have been
    /// written before, otherwise an error is latched.
    fn write_u16_at(&mut self, pos: usize, value: u16) {
        let slot = pos
            .checked_add(2)
            .and_then(|end| self.as_mut().get_mut(pos..end));
        match slot {
            Some(slot) => slot.copy_from_slice(&value.to_be_bytes()),
            None => self.latch(ComposeError::ShortBuf),
        }
    }
}

//------------ Compose -------------------------------------------------------

/// A type that can write its wire format into an octets builder.
pub trait Compose {
    /// The length of the wire format, if it is fixed.
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

impl Compose for [u8] {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self)
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

//------------ RdlenSlot -----------------------------------------------------

/// A reserved slot for the RDLENGTH field of a resource record.
///
/// The length of the record data is only known after it has been written,
/// so a placeholder is written first and overwritten later. Creating a
/// slot via [`push`][Self::push] writes the placeholder and remembers its
/// position. [`finish`][Self::finish] consumes the slot and writes the
/// number of octets appended since, so each slot is finalized at most once.
#[derive(Debug)]
#[must_use = "an RDLENGTH slot must be finished"]
pub struct RdlenSlot {
    /// The position of the placeholder in the target.
    pos: usize,
}

impl RdlenSlot {
    /// Writes a zero placeholder at the current position of `target`.
    pub fn push<Target: Composer + ?Sized>(target: &mut Target) -> Self {
        let pos = target.position();
        target.write(&0u16);
        RdlenSlot { pos }
    }

    /// Returns the position of the placeholder.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Overwrites the placeholder with the length of the data after it.
    ///
    /// If the data is longer than 65,535 octets, [`ComposeError::LongData`]
    /// is latched instead.
    pub fn finish<Target: Composer + ?Sized>(self, target: &mut Target) {
        let start = match self.pos.checked_add(2) {
            Some(start) => start,
            None => return,
        };
        // The placeholder itself never made it in.
        let len = match target.position().checked_sub(start) {
            Some(len) => len,
            None => return,
        };
        match u16::try_from(len) {
            Ok(len) => target.write_u16_at(self.pos, len),
            Err(_) => {
                debug!(len, pos = self.pos, "record data exceeds RDLENGTH");
                target.latch(ComposeError::LongData)
            }
        }
    }
}

//============ Error Types ===================================================

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// The data exceeds the maximum length of its length field.
    LongData,

    /// The target ran out of space.
    ShortBuf,
}

impl From<ShortBuf> for ComposeError {
    fn from(_: ShortBuf) -> Self {
        ComposeError::ShortBuf
    }
}

//--- Display and Error

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::LongData => f.write_str("long data"),
            ComposeError::ShortBuf => f.write_str("buffer size exceeded"),
        }
    }
}

impl std::error::Error for ComposeError {}

//============ Testing =======================================================
