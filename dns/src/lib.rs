// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1

mod header;
mod options;
mod query_message;
mod question;
mod utils;

pub use header::HEADER_LEN;
pub use options::{QueryOptions, DEFAULT_TRANSACTION_ID, FLAGS_RECURSION_DESIRED, QCLASS_IN, QTYPE_A};
pub use query_message::QueryMessage;

/// Encodes a standard A/IN query for `domain`.
///
/// Never fails: the domain is split on `.` and written byte for byte, with
/// no validation of label lengths or characters.
pub fn encode_query(domain: &str) -> Vec<u8> {
    encode_query_with(domain, &QueryOptions::STANDARD)
}

pub fn encode_query_with(domain: &str, options: &QueryOptions) -> Vec<u8> {
    let query_msg = QueryMessage::new(domain, options);
    let mut query_bytes: Vec<u8> = Vec::with_capacity(HEADER_LEN + domain.len() + 6);
    query_msg.to_bytes(&mut query_bytes);

    query_bytes
}

pub fn decode_query(query_bytes: &[u8]) -> std::io::Result<QueryMessage> {
    QueryMessage::parse_query(query_bytes)
}
