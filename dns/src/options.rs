// https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.2
pub const QTYPE_A: u16 = 1;
// https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.4
pub const QCLASS_IN: u16 = 1;

// opcode = 0 (standard query), rd = 1
pub const FLAGS_RECURSION_DESIRED: u16 = 0x0100;

pub const DEFAULT_TRANSACTION_ID: u16 = 0x0A0B;

/// The fixed values written into every query.
///
/// The transaction id is a constant rather than a counter, so encoding the
/// same domain twice yields the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub id: u16,
    pub flags: u16,
    pub qtype: u16,
    pub qclass: u16,
}

impl QueryOptions {
    pub const STANDARD: QueryOptions = QueryOptions {
        id: DEFAULT_TRANSACTION_ID,
        flags: FLAGS_RECURSION_DESIRED,
        qtype: QTYPE_A,
        qclass: QCLASS_IN,
    };
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::STANDARD
    }
}
