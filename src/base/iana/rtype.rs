//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. Normal query includes the
    /// type of record information is requested for. A few aditional types,
    /// called query types, are defined as well and can only be used in
    /// questions.
    ///
    /// See [RFC 1035] for the original definition and the
    /// [IANA registry] for all assigned values. Values not listed here are
    /// still perfectly valid; the record data is opaque to this crate.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A null resource record.
    (NULL => 10, "NULL")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// See [RFC 3596].
    ///
    /// [RFC 3596]: https://tools.ietf.org/html/rfc3596
    (AAAA => 28, "AAAA")

    /// Server selection.
    ///
    /// See [RFC 2782].
    ///
    /// [RFC 2782]: https://tools.ietf.org/html/rfc2782
    (SRV => 33, "SRV")

    /// OPT pseudo-record.
    (OPT => 41, "OPT")

    /// Delegation signer.
    (DS => 43, "DS")

    /// RRSIG.
    (RRSIG => 46, "RRSIG")

    /// NSEC.
    (NSEC => 47, "NSEC")

    /// DNSKEY.
    (DNSKEY => 48, "DNSKEY")

    /// A request for a transfer of an entire zone.
    (AXFR => 252, "AXFR")

    /// A request for all records the server/cache has available.
    (ANY => 255, "ANY")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16, "unknown record type");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::wire::Compose;

    #[test]
    fn from_str() {
        assert_eq!("aaaa".parse::<Rtype>().unwrap(), Rtype::AAAA);
        assert_eq!("TYPE65".parse::<Rtype>().unwrap(), Rtype::from_int(65));
        assert_eq!("99".parse::<Rtype>().unwrap(), Rtype::from_int(99));
        assert!("BOGUS".parse::<Rtype>().is_err());
    }

    #[test]
    fn compose() {
        let mut vec = Vec::new();
        Rtype::AAAA.compose(&mut vec).unwrap();
        assert_eq!(vec, b"\x00\x1c");
    }
}
