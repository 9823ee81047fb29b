//! Exporting complete messages and checking them with a separate decoder.

mod common;

use common::{init_logging, Decoded, DecodedRecord};
use domain_wire::base::iana::{Class, Opcode, Rcode, Rtype};
use domain_wire::base::{ComposeError, Dname, Message, Rdf, Record, Section};
use domain_wire::export::{
    dname_to_wire, message_to_wire, rdf_to_wire, record_to_wire, Config,
    ExportError,
};
use rstest::rstest;
use std::net::{Ipv4Addr, Ipv6Addr};

fn name(s: &str) -> Dname {
    s.parse().unwrap()
}

fn response() -> Message {
    let mut msg =
        Message::query(0x1234, name("example.com"), Rtype::MX, Class::IN);
    msg.header_mut().set_qr(true);
    msg.header_mut().set_ra(true);
    msg.header_mut().set_aa(true);
    msg.push(
        Section::Answer,
        Record::new(name("example.com"), Rtype::MX, Class::IN, 3600)
            .with_rdf(Rdf::from_u16(10))
            .with_rdf(name("mail.example.com")),
    );
    msg.push(
        Section::Authority,
        Record::new(name("example.com"), Rtype::NS, Class::IN, 86400)
            .with_rdf(name("ns.example.com")),
    );
    msg.push(
        Section::Additional,
        Record::new(name("mail.example.com"), Rtype::A, Class::IN, 60)
            .with_rdf(Ipv4Addr::new(192, 0, 2, 25)),
    );
    msg.push(
        Section::Additional,
        Record::new(name("mail.example.com"), Rtype::AAAA, Class::IN, 60)
            .with_rdf("2001:db8::25".parse::<Ipv6Addr>().unwrap()),
    );
    msg.update_counts();
    msg
}

/// Returns what decoding `record` as part of `section` should produce.
fn decoded(record: &Record, section: Section) -> DecodedRecord {
    DecodedRecord {
        owner: record.owner().unwrap().as_slice().to_vec(),
        rtype: record.rtype().to_int(),
        class: record.class().to_int(),
        ttl: section.has_rdata().then(|| record.ttl()),
        rdata: section.has_rdata().then(|| {
            record.rdata().iter().flat_map(Rdf::as_slice).copied().collect()
        }),
    }
}

#[test]
fn response_round_trip() {
    init_logging();
    let msg = response();
    let wire = message_to_wire(&msg, &Config::default()).unwrap();
    let decoded_msg = Decoded::from_wire(&wire).unwrap();

    assert_eq!(decoded_msg.id, msg.header().id());
    assert_eq!(&decoded_msg.flags, &msg.header().as_slice()[2..]);
    assert_eq!(decoded_msg.flags, [0x85, 0x80]);
    assert_eq!(
        decoded_msg.counts,
        [
            msg.counts().qdcount(),
            msg.counts().ancount(),
            msg.counts().nscount(),
            msg.counts().arcount(),
        ]
    );
    assert_eq!(decoded_msg.counts, [1, 1, 1, 2]);

    let expected: Vec<_> = Section::ALL
        .into_iter()
        .flat_map(|section| {
            msg.section(section)
                .unwrap_or_default()
                .iter()
                .map(move |record| (section, decoded(record, section)))
        })
        .collect();
    assert_eq!(decoded_msg.records, expected);

    // Independent of the helper above.
    let answer: Vec<_> = decoded_msg.section(Section::Answer).collect();
    assert_eq!(answer[0].owner, b"\x07example\x03com\x00");
    assert_eq!(answer[0].class, 1);
    assert_eq!(
        answer[0].rdata.as_deref(),
        Some(&b"\x00\x0a\x04mail\x07example\x03com\x00"[..])
    );
    let authority: Vec<_> = decoded_msg.section(Section::Authority).collect();
    assert_eq!(authority[0].ttl, Some(86400));
    assert_eq!(
        authority[0].rdata.as_deref(),
        Some(&b"\x02ns\x07example\x03com\x00"[..])
    );
}

#[test]
fn every_record_matches_its_own_export() {
    init_logging();
    let msg = response();
    let config = Config::default();
    let wire = message_to_wire(&msg, &config).unwrap();
    let mut expected = wire[..12].to_vec();
    for section in Section::ALL {
        for record in msg.section(section).unwrap_or_default() {
            expected.extend(record_to_wire(record, section, &config).unwrap());
        }
    }
    assert_eq!(wire, expected);
}

#[test]
fn header_flags() {
    let mut msg = Message::new();
    msg.header_mut().set_id(0xffff);
    msg.header_mut().set_opcode(Opcode::UPDATE);
    msg.header_mut().set_tc(true);
    msg.header_mut().set_rcode(Rcode::REFUSED);
    let wire = message_to_wire(&msg, &Config::default()).unwrap();
    assert_eq!(wire, b"\xff\xff\x2a\x05\0\0\0\0\0\0\0\0");
}

#[test]
fn count_mismatch_is_exported_as_is() {
    let mut msg = response();
    msg.counts_mut().set_arcount(1);
    let wire = message_to_wire(&msg, &Config::default()).unwrap();
    assert_eq!(&wire[10..12], b"\x00\x01");
    // All four records are still there.
    assert_eq!(
        wire.len(),
        message_to_wire(&response(), &Config::default())
            .unwrap()
            .len()
    );
}

#[rstest]
#[case(0)]
#[case(11)]
#[case(12)]
#[case(40)]
#[case(100)]
fn exhaustion_fails_cleanly(#[case] max_len: usize) {
    init_logging();
    let msg = response();
    assert_eq!(
        message_to_wire(&msg, &Config::new().with_max_len(max_len)),
        Err(ExportError::Compose(ComposeError::ShortBuf))
    );
}

#[test]
fn exact_fit() {
    let msg = response();
    let len = message_to_wire(&msg, &Config::default()).unwrap().len();
    assert!(message_to_wire(&msg, &Config::new().with_max_len(len)).is_ok());
    assert!(
        message_to_wire(&msg, &Config::new().with_max_len(len - 1)).is_err()
    );
}

#[test]
fn standalone_exports() {
    let config = Config::udp();
    assert_eq!(dname_to_wire(&Dname::root(), &config).unwrap(), b"\0");
    assert_eq!(
        rdf_to_wire(&Rdf::from_u32(0xdead_beef), &config).unwrap(),
        b"\xde\xad\xbe\xef"
    );
}

#[test]
fn oversized_record_data() {
    init_logging();
    let mut record = Record::new(name("nl"), Rtype::NULL, Class::IN, 0);
    for _ in 0..300 {
        record.push_rdf(Rdf::from_charstr(&[0; 255]).unwrap());
    }
    let config = Config::new().with_max_len(0x20000);
    assert_eq!(
        record_to_wire(&record, Section::Answer, &config),
        Err(ExportError::Compose(ComposeError::LongData))
    );
}
