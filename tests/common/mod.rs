//! Helpers shared by the integration tests.

use domain_wire::base::Section;
use octseq::parse::{Parser, ShortInput};
use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the crate and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see every export:
///   RUST_LOG=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}

//------------ Decoded -------------------------------------------------------

/// A message decoded from wire format.
///
/// This is a minimal decoder that knows just enough to check what the
/// crate produces. It doesn’t support compressed names.
#[derive(Debug, Default)]
pub struct Decoded {
    pub id: u16,
    pub flags: [u8; 2],
    pub counts: [u16; 4],
    pub records: Vec<(Section, DecodedRecord)>,
}

#[derive(Debug, Eq, PartialEq)]
pub struct DecodedRecord {
    pub owner: Vec<u8>,
    pub rtype: u16,
    pub class: u16,
    pub ttl: Option<u32>,
    pub rdata: Option<Vec<u8>>,
}

impl Decoded {
    /// Decodes a message.
    ///
    /// The number of records per section is taken from the header counts.
    /// The whole input has to be consumed.
    pub fn from_wire(wire: &[u8]) -> Result<Self, ShortInput> {
        let mut parser = Parser::from_ref(wire);
        let mut res = Decoded {
            id: parser.parse_u16_be()?,
            ..Default::default()
        };
        parser.parse_buf(&mut res.flags)?;
        for count in &mut res.counts {
            *count = parser.parse_u16_be()?;
        }
        for (section, count) in Section::ALL.into_iter().zip(res.counts) {
            for _ in 0..count {
                let record = DecodedRecord::parse(&mut parser, section)?;
                res.records.push((section, record));
            }
        }
        assert_eq!(parser.remaining(), 0, "trailing data");
        Ok(res)
    }

    pub fn section(
        &self,
        section: Section,
    ) -> impl Iterator<Item = &DecodedRecord> {
        self.records
            .iter()
            .filter(move |item| item.0 == section)
            .map(|item| &item.1)
    }
}

impl DecodedRecord {
    fn parse(
        parser: &mut Parser<[u8]>,
        section: Section,
    ) -> Result<Self, ShortInput> {
        let owner = parse_name(parser)?;
        let rtype = parser.parse_u16_be()?;
        let class = parser.parse_u16_be()?;
        if !section.has_rdata() {
            return Ok(DecodedRecord {
                owner,
                rtype,
                class,
                ttl: None,
                rdata: None,
            });
        }
        let ttl = parser.parse_u32_be()?;
        let mut rdata = vec![0; usize::from(parser.parse_u16_be()?)];
        parser.parse_buf(&mut rdata)?;
        Ok(DecodedRecord {
            owner,
            rtype,
            class,
            ttl: Some(ttl),
            rdata: Some(rdata),
        })
    }
}

/// Parses an uncompressed name and returns its wire format.
fn parse_name(parser: &mut Parser<[u8]>) -> Result<Vec<u8>, ShortInput> {
    let mut res = Vec::new();
    loop {
        let len = parser.parse_u8()?;
        assert!(len < 0xC0, "compressed name");
        res.push(len);
        if len == 0 {
            return Ok(res);
        }
        let start = res.len();
        res.resize(start + usize::from(len), 0);
        parser.parse_buf(&mut res[start..])?;
    }
}
