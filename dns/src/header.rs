use crate::options::QueryOptions;
use byteorder::{ReadBytesExt, BE};
use bytes::BufMut;
use std::io::Cursor;

pub const HEADER_LEN: usize = 12;

// 12 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    id: u16,
    flags: u16,
    qdcount: u16, // always 1 for queries we send
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl Header {
    pub fn query(options: &QueryOptions) -> Self {
        Self {
            id: options.id,
            flags: options.flags,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn to_bytes<B: BufMut>(&self, bytes: &mut B) {
        bytes.put_u16(self.id);
        bytes.put_u16(self.flags);
        bytes.put_u16(self.qdcount);
        bytes.put_u16(self.ancount);
        bytes.put_u16(self.nscount);
        bytes.put_u16(self.arcount);
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> std::io::Result<Self> {
        let id = rdr.read_u16::<BE>()?;
        let flags = rdr.read_u16::<BE>()?;
        let qdcount = rdr.read_u16::<BE>()?;
        let ancount = rdr.read_u16::<BE>()?;
        let nscount = rdr.read_u16::<BE>()?;
        let arcount = rdr.read_u16::<BE>()?;

        let h = Self {
            id,
            flags,
            qdcount,
            ancount,
            nscount,
            arcount,
        };

        Ok(h)
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn qd_count(&self) -> u16 {
        self.qdcount
    }
}
