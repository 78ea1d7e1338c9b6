use std::borrow::Cow;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use bytes::BufMut;
use dns::{QueryMessage, HEADER_LEN, QCLASS_IN, QTYPE_A};

const FLAG_QR: u16 = 0x8000;
const FLAG_RD: u16 = 0x0100;
const FLAG_RA: u16 = 0x0080;

pub const RCODE_NO_ERROR: u16 = 0;
pub const RCODE_NX_DOMAIN: u16 = 3;

// pointer to the question name, which always starts right after the header
const NAME_POINTER: u16 = 0xC000 | HEADER_LEN as u16;

pub fn record_type_name(qtype: u16) -> Cow<'static, str> {
    let name = match qtype {
        1 => "A",
        2 => "NS",
        5 => "CNAME",
        15 => "MX",
        16 => "TXT",
        28 => "AAAA",
        33 => "SRV",
        _ => return Cow::Owned(format!("TYPE{}", qtype)),
    };
    Cow::Borrowed(name)
}

/// Addresses the stub answers A queries with, keyed by lowercase domain.
pub struct RecordTable {
    records: HashMap<String, Ipv4Addr>,
    ttl: u32,
}

impl RecordTable {
    pub fn new(records: HashMap<String, Ipv4Addr>, ttl: u32) -> Self {
        let records = records
            .into_iter()
            .map(|(domain, addr)| (domain.to_ascii_lowercase(), addr))
            .collect();

        Self { records, ttl }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn lookup(&self, domain: &str) -> Option<Ipv4Addr> {
        self.records.get(&domain.to_ascii_lowercase()).copied()
    }

    // request 必须是 query 解析前的原始字节，question 按原样复制
    pub fn build_response(&self, request: &[u8], query: &QueryMessage) -> Vec<u8> {
        let found = self.lookup(query.domain());
        let rcode = if found.is_some() {
            RCODE_NO_ERROR
        } else {
            RCODE_NX_DOMAIN
        };
        // known name, other type: NOERROR without answers
        let answer = found.filter(|_| query.qtype() == QTYPE_A && query.qclass() == QCLASS_IN);

        let flags = FLAG_QR | (query.flags() & FLAG_RD) | FLAG_RA | rcode;

        let mut resp: Vec<u8> = Vec::with_capacity(request.len() + 16);
        resp.put_u16(query.id());
        resp.put_u16(flags);
        resp.put_u16(1); // qdcount
        resp.put_u16(answer.map_or(0, |_| 1)); // ancount
        resp.put_u16(0);
        resp.put_u16(0);

        resp.put_slice(&request[HEADER_LEN..HEADER_LEN + query.question_len()]);

        if let Some(addr) = answer {
            resp.put_u16(NAME_POINTER);
            resp.put_u16(QTYPE_A);
            resp.put_u16(QCLASS_IN);
            resp.put_u32(self.ttl);
            resp.put_u16(4);
            resp.put_slice(&addr.octets());
        }

        resp
    }
}
