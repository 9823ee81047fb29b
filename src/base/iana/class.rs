//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. That is, each class has its own separate
    /// record tree starting at the root. However, in practice, only the IN
    /// class is really relevant.
    ///
    /// In addition, there are query classes or QCLASSes that are used in
    /// questions or UPDATE queries, namely NONE and ANY (or *).
    ///
    /// Classes are represented by a 16 bit value. See [RFC 1034] for the
    /// introduction of classes and the [DNS CLASSes IANA registry] for an
    /// overview of assigned values.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16;

    /// Internet (IN).
    (IN => 1, "IN")

    /// Chaosnet (CH).
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class None.
    ///
    /// Defined in [RFC 2136], this class is used in UPDATE queries to
    /// require that an RRset does not exist prior to the update.
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (NONE => 0xFE, "NONE")

    /// Query class * (ANY).
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 0xFF, "ANY")
}

int_enum_str_with_prefix!(Class, "CLASS", u16, "unknown class");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!("IN".parse::<Class>().unwrap(), Class::IN);
        assert_eq!("in".parse::<Class>().unwrap(), Class::IN);
        assert_eq!("CLASS1".parse::<Class>().unwrap(), Class::IN);
        assert_eq!("CLASS42".parse::<Class>().unwrap(), Class::from_int(42));
        assert!("FOO".parse::<Class>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Class::CH), "CH");
        assert_eq!(format!("{}", Class::from_int(42)), "CLASS42");
    }
}
