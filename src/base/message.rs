//! DNS messages.
//!
//! A [`Message`] consists of the header section and four optional lists
//! of records, one per section. The section counts in the header are kept
//! separately from these lists and are composed as they are, even if they
//! disagree with the number of records present. Use
//! [`Message::update_counts`] to bring them in line.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::{Class, Rtype};
use super::name::Dname;
use super::record::{Record, Section};
use super::wire::{ComposeError, Composer};
use std::vec::Vec;

//------------ Message -------------------------------------------------------

/// A DNS message.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    header: HeaderSection,
    question: Option<Vec<Record>>,
    answer: Option<Vec<Record>>,
    authority: Option<Vec<Record>>,
    additional: Option<Vec<Record>>,
}

/// # Creation
///
impl Message {
    /// Creates an empty message.
    ///
    /// All header fields are zero and no section has a record list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a standard query for the given question.
    ///
    /// The query has the RD bit set and a question count of one.
    pub fn query(id: u16, qname: Dname, qtype: Rtype, qclass: Class) -> Self {
        let mut res = Self::new();
        res.header_mut().set_id(id);
        res.header_mut().set_rd(true);
        res.push(Section::Question, Record::question(qname, qtype, qclass));
        res.counts_mut().set_qdcount(1);
        res
    }
}

/// # Header Access
///
impl Message {
    pub fn header_section(&self) -> &HeaderSection {
        &self.header
    }

    pub fn header(&self) -> &Header {
        self.header.header()
    }

    pub fn header_mut(&mut self) -> &mut Header {
        self.header.header_mut()
    }

    pub fn counts(&self) -> &HeaderCounts {
        self.header.counts()
    }

    pub fn counts_mut(&mut self) -> &mut HeaderCounts {
        self.header.counts_mut()
    }

    /// Sets the section counts to the number of records in each section.
    ///
    /// Sections without a record list get a count of zero. Counts of
    /// sections with more than 65,535 records are capped at that value.
    pub fn update_counts(&mut self) {
        for section in Section::ALL {
            let len = self.section(section).map_or(0, <[Record]>::len);
            let count = u16::try_from(len).unwrap_or(u16::MAX);
            self.header.counts_mut().set_count(section, count);
        }
    }
}

/// # Record Access
///
impl Message {
    /// Returns the records of a section if it has a record list.
    pub fn section(&self, section: Section) -> Option<&[Record]> {
        self.list(section).as_deref()
    }

    /// Replaces the record list of a section.
    ///
    /// The section count is left untouched.
    pub fn set_section(&mut self, section: Section, list: Option<Vec<Record>>) {
        *self.list_mut(section) = list
    }

    /// Appends a record to a section, creating its list if necessary.
    ///
    /// The section count is left untouched.
    pub fn push(&mut self, section: Section, record: Record) {
        self.list_mut(section)
            .get_or_insert_with(Vec::new)
            .push(record)
    }

    fn list(&self, section: Section) -> &Option<Vec<Record>> {
        match section {
            Section::Question => &self.question,
            Section::Answer => &self.answer,
            Section::Authority => &self.authority,
            Section::Additional => &self.additional,
        }
    }

    fn list_mut(&mut self, section: Section) -> &mut Option<Vec<Record>> {
        match section {
            Section::Question => &mut self.question,
            Section::Answer => &mut self.answer,
            Section::Authority => &mut self.authority,
            Section::Additional => &mut self.additional,
        }
    }
}

/// # Composing
///
impl Message {
    /// Appends the message in wire format to `target`.
    ///
    /// The header section is followed by the records of the question,
    /// answer, authority, and additional sections in this order. Sections
    /// without a record list are skipped.
    ///
    /// This always walks the whole message and always returns `Ok(())`.
    /// Failures are latched by `target` and must be checked through its
    /// status once this returns.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        let _ = self.header.compose(target);
        for section in Section::ALL {
            for record in self.section(section).into_iter().flatten() {
                let _ = record.compose(target, section);
            }
        }
        Ok(())
    }
}

//============ Testing =======================================================
