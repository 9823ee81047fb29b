//! Resource records.
//!
//! This module defines [`Record`], a resource record whose record data is
//! kept as a sequence of fields in wire format, and [`Section`], the part
//! of a message a record is composed for. How a record is composed depends
//! on its section: records in the question section only carry owner, type,
//! and class, all others add TTL and the length-prefixed record data.

use super::iana::{Class, Rtype};
use super::name::Dname;
use super::rdata::Rdf;
use super::wire::{Compose, ComposeError, Composer, RdlenSlot};
use core::fmt;
use std::vec::Vec;

//------------ Section -------------------------------------------------------

/// The sections of a DNS message.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Section {
    Question,
    Answer,
    Authority,
    Additional,
}

impl Section {
    /// All sections in the order they appear in a message.
    pub const ALL: [Section; 4] = [
        Section::Question,
        Section::Answer,
        Section::Authority,
        Section::Additional,
    ];

    /// Returns whether records in this section carry TTL and record data.
    pub fn has_rdata(self) -> bool {
        !matches!(self, Section::Question)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        })
    }
}

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// The owner is optional: a record without one is composed starting with
/// its type. The record data is an ordered sequence of [`Rdf`] fields
/// which are composed back to back in this order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    owner: Option<Dname>,
    rtype: Rtype,
    class: Class,
    ttl: u32,
    rdata: Vec<Rdf>,
}

/// # Creation and Element Access
///
impl Record {
    /// Creates a new record without record data.
    pub fn new(owner: Dname, rtype: Rtype, class: Class, ttl: u32) -> Self {
        Record {
            owner: Some(owner),
            rtype,
            class,
            ttl,
            rdata: Vec::new(),
        }
    }

    /// Creates a record suitable for the question section.
    ///
    /// The TTL is zero and there is no record data.
    pub fn question(qname: Dname, qtype: Rtype, qclass: Class) -> Self {
        Self::new(qname, qtype, qclass, 0)
    }

    /// Adds a field to the end of the record data.
    pub fn push_rdf(&mut self, rdf: impl Into<Rdf>) {
        self.rdata.push(rdf.into())
    }

    /// Returns the record with a field added to the end of its data.
    pub fn with_rdf(mut self, rdf: impl Into<Rdf>) -> Self {
        self.push_rdf(rdf);
        self
    }

    pub fn owner(&self) -> Option<&Dname> {
        self.owner.as_ref()
    }

    pub fn set_owner(&mut self, owner: Option<Dname>) {
        self.owner = owner
    }

    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl
    }

    pub fn rdata(&self) -> &[Rdf] {
        &self.rdata
    }

    /// Returns the length of the record data in wire format.
    pub fn rdlen(&self) -> usize {
        self.rdata.iter().map(Rdf::len).sum()
    }
}

/// # Composing
///
impl Record {
    /// The length of the type and class fields.
    const TYPE_CLASS_LEN: usize =
        (Rtype::COMPOSE_LEN + Class::COMPOSE_LEN) as usize;

    /// The length of the TTL and RDLENGTH fields.
    const TTL_RDLEN_LEN: usize =
        (u32::COMPOSE_LEN + u16::COMPOSE_LEN) as usize;

    /// Appends the record in wire format as it appears in `section`.
    ///
    /// The owner, if present, is followed by type and class. Outside the
    /// question section, TTL, RDLENGTH, and the record data follow. The
    /// RDLENGTH is written as a placeholder first and updated once the
    /// data is in.
    ///
    /// Each step reserves its space first and is skipped if that fails.
    /// Failures are latched by `target`, so later steps become no-ops.
    /// Nothing already written is removed. The returned value is the
    /// status of `target` after all steps.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        section: Section,
    ) -> Result<(), ComposeError> {
        // The outcome of the individual steps is in the target’s status.
        if let Some(owner) = self.owner.as_ref() {
            let _ = owner.compose(target);
        }

        if target.reserve(Self::TYPE_CLASS_LEN) {
            target.write(&self.rtype);
            target.write(&self.class);
        }

        if section.has_rdata() {
            let slot = if target.reserve(Self::TTL_RDLEN_LEN) {
                target.write(&self.ttl);
                Some(RdlenSlot::push(target))
            } else {
                None
            };

            for rdf in &self.rdata {
                let _ = rdf.compose(target);
            }

            if let Some(slot) = slot {
                slot.finish(target)
            }
        }
        target.status()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::buffer::Buffer;
    use rstest::rstest;
    use std::net::Ipv4Addr;

    fn name(s: &str) -> Dname {
        s.parse().unwrap()
    }

    fn compose(record: &Record, section: Section) -> Vec<u8> {
        let mut buf = Buffer::new(512).unwrap();
        record.compose(&mut buf, section).unwrap();
        buf.export()
    }

    #[test]
    fn question() {
        let record = Record::question(name("nl"), Rtype::A, Class::IN);
        let wire = compose(&record, Section::Question);
        assert_eq!(wire, b"\x02nl\x00\x00\x01\x00\x01");
        assert_eq!(wire.len(), record.owner().unwrap().len() + 4);
    }

    #[test]
    fn question_ignores_ttl_and_rdata() {
        let record = Record::new(name("nl"), Rtype::A, Class::IN, 3600)
            .with_rdf(Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(
            compose(&record, Section::Question),
            b"\x02nl\x00\x00\x01\x00\x01"
        );
    }

    #[rstest]
    #[case(Section::Answer)]
    #[case(Section::Authority)]
    #[case(Section::Additional)]
    fn answer(#[case] section: Section) {
        let record = Record::new(name("nl"), Rtype::A, Class::IN, 3600)
            .with_rdf(Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(
            compose(&record, section),
            b"\x02nl\x00\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\
              \xc0\x00\x02\x01"
        );
    }

    #[test]
    fn rdlength_is_sum_of_fields() {
        let record = Record::new(name("example.com"), Rtype::MX, Class::IN, 60)
            .with_rdf(Rdf::from_u16(10))
            .with_rdf(name("mail.example.com"))
            .with_rdf(Rdf::from_charstr(b"").unwrap());
        let wire = compose(&record, Section::Answer);
        let owner_len = record.owner().unwrap().len();
        let rdlen_pos = owner_len + 8;
        let rdlen = u16::from_be_bytes([wire[rdlen_pos], wire[rdlen_pos + 1]]);
        assert_eq!(usize::from(rdlen), 2 + 18 + 1);
        assert_eq!(usize::from(rdlen), record.rdlen());
        assert_eq!(wire.len(), rdlen_pos + 2 + record.rdlen());
        assert_eq!(
            &wire[rdlen_pos + 2..],
            b"\x00\x0a\x04mail\x07example\x03com\x00\x00"
        );
    }

    #[test]
    fn fixed_field_lengths() {
        assert_eq!(Record::TYPE_CLASS_LEN, 4);
        assert_eq!(Record::TTL_RDLEN_LEN, 6);
    }

    #[test]
    fn empty_rdata() {
        let record = Record::new(name("nl"), Rtype::NULL, Class::IN, 1);
        let wire = compose(&record, Section::Additional);
        assert_eq!(wire.len(), 4 + 4 + 4 + 2);
        assert_eq!(&wire[wire.len() - 2..], b"\x00\x00");
    }

    #[test]
    fn without_owner() {
        let mut record = Record::new(name("nl"), Rtype::A, Class::IN, 0);
        record.set_owner(None);
        assert_eq!(
            compose(&record, Section::Question),
            b"\x00\x01\x00\x01"
        );
        // RDLENGTH lands at offset 8 and is still filled in.
        let record = record.with_rdf(Rdf::from_u8(1));
        assert_eq!(
            compose(&record, Section::Answer),
            b"\x00\x01\x00\x01\x00\x00\x00\x00\x00\x01\x01"
        );
    }

    #[test]
    fn short_buf() {
        let record = Record::new(name("nl"), Rtype::A, Class::IN, 3600)
            .with_rdf(Ipv4Addr::new(192, 0, 2, 1));
        for len in 0..18 {
            let mut buf = Buffer::new(len).unwrap();
            assert_eq!(
                record.compose(&mut buf, Section::Answer),
                Err(ComposeError::ShortBuf),
                "capacity {}",
                len
            );
            assert!(buf.as_slice().len() <= len);
        }
        let mut buf = Buffer::new(18).unwrap();
        assert_eq!(record.compose(&mut buf, Section::Answer), Ok(()));
    }

    #[test]
    fn short_buf_skips_later_fields() {
        let record = Record::new(name("nl"), Rtype::TXT, Class::IN, 0)
            .with_rdf(Rdf::from_charstr(b"abcdef").unwrap())
            .with_rdf(Rdf::from_u8(1));
        // Room for everything but the first field.
        let mut buf = Buffer::new(18).unwrap();
        assert_eq!(
            record.compose(&mut buf, Section::Answer),
            Err(ComposeError::ShortBuf)
        );
        // The second field would fit, but the failure is latched.
        assert_eq!(buf.as_slice().len(), 14);
    }
}
