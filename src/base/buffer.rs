//! A bounded octets buffer for composing messages.
//!
//! [`Buffer`] is the composer used by the export functions: a vec with a
//! fixed maximum size that latches the first failure. It is created fresh
//! for every message, written to once, and then either frozen into its
//! content or dropped.

use super::wire::{ComposeError, Composer};
use core::fmt;
use octseq::builder::{FreezeBuilder, OctetsBuilder, ShortBuf, Truncate};
use std::vec::Vec;

//------------ Buffer --------------------------------------------------------

/// An append-only octets buffer with a maximum capacity.
///
/// The buffer never grows beyond the capacity given upon creation. Any
/// attempt to reserve or append beyond it fails and turns the buffer’s
/// status into an error. From then on, all appends are ignored until the
/// buffer is dropped.
#[derive(Clone, Debug)]
pub struct Buffer {
    /// The octets written so far.
    data: Vec<u8>,

    /// The maximum number of octets the buffer will ever hold.
    capacity: usize,

    /// The first error that happened, if any.
    status: Option<ComposeError>,
}

impl Buffer {
    /// Creates a new, empty buffer holding at most `capacity` octets.
    ///
    /// The full capacity is allocated right away. If that fails, an error
    /// is returned rather than a buffer that can’t be written to.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity).map_err(|_| AllocError(()))?;
        Ok(Buffer {
            data,
            capacity,
            status: None,
        })
    }

    /// Returns the maximum number of octets the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of octets that can still be appended.
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Returns whether the buffer’s status is still clean.
    pub fn is_ok(&self) -> bool {
        self.status.is_none()
    }

    /// Returns a slice of the octets written so far.
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Converts the buffer into its content.
    ///
    /// The status is not checked. Content of a buffer whose status is not
    /// clean must not be used.
    pub fn export(self) -> Vec<u8> {
        self.data
    }

    /// Converts the buffer into its content as a `Bytes` value.
    #[cfg(feature = "bytes")]
    pub fn freeze_bytes(self) -> bytes::Bytes {
        self.data.into()
    }

    fn fits(&self, len: usize) -> bool {
        match self.data.len().checked_add(len) {
            Some(end) => end <= self.capacity,
            None => false,
        }
    }
}

//--- OctetsBuilder, Truncate, and FreezeBuilder

impl OctetsBuilder for Buffer {
    type AppendError = ShortBuf;

    fn append_slice(&mut self, slice: &[u8]) -> Result<(), Self::AppendError> {
        if self.status.is_some() {
            return Err(ShortBuf);
        }
        if !self.fits(slice.len()) {
            self.latch(ComposeError::ShortBuf);
            return Err(ShortBuf);
        }
        self.data.extend_from_slice(slice);
        Ok(())
    }
}

impl Truncate for Buffer {
    fn truncate(&mut self, len: usize) {
        self.data.truncate(len)
    }
}

impl FreezeBuilder for Buffer {
    type Octets = Vec<u8>;

    fn freeze(self) -> Self::Octets {
        self.export()
    }
}

//--- Composer

impl Composer for Buffer {
    fn reserve(&mut self, len: usize) -> bool {
        if self.status.is_some() {
            return false;
        }
        if !self.fits(len) || self.data.try_reserve(len).is_err() {
            self.latch(ComposeError::ShortBuf);
            return false;
        }
        true
    }

    fn status(&self) -> Result<(), ComposeError> {
        match self.status {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn latch(&mut self, err: ComposeError) {
        if self.status.is_none() {
            self.status = Some(err)
        }
    }
}

//--- AsRef and AsMut

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsMut<[u8]> for Buffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }
}

//------------ AllocError ----------------------------------------------------

/// Allocating the memory for a buffer failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AllocError(());

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("failed to allocate buffer")
    }
}

impl std::error::Error for AllocError {}

//============ Testing =======================================================
