use crate::options::QueryOptions;
use crate::utils::{domain_to_qname, read_qname};
use byteorder::{ReadBytesExt, BE};
use bytes::BufMut;
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    domain: String,
    qtype: u16,
    qclass: u16,
}

impl Question {
    pub fn new(domain: &str, options: &QueryOptions) -> Self {
        Self {
            domain: domain.to_string(),
            qtype: options.qtype,
            qclass: options.qclass,
        }
    }

    pub fn to_bytes<B: BufMut>(&self, bytes: &mut B) {
        let qname = domain_to_qname(&self.domain);
        bytes.put_slice(&qname);

        bytes.put_u16(self.qtype);
        bytes.put_u16(self.qclass);
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> std::io::Result<Self> {
        let domain = read_qname(rdr)?;

        let qtype = rdr.read_u16::<BE>()?;
        let qclass = rdr.read_u16::<BE>()?;

        let q = Self {
            domain,
            qtype,
            qclass,
        };

        Ok(q)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn qtype(&self) -> u16 {
        self.qtype
    }

    pub fn qclass(&self) -> u16 {
        self.qclass
    }
}
