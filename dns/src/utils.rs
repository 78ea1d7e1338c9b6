use byteorder::ReadBytesExt;
use std::io::{Cursor, Read};

// https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
const MAX_LABEL_LEN: usize = 63;

// 把域名转换为 qname: 每个 label 前加一个长度字节，最后以 0 结尾
//
// Label lengths are not checked; an empty label writes a 0 length byte.
pub fn domain_to_qname(domain: &str) -> Vec<u8> {
    let mut qname: Vec<u8> = Vec::with_capacity(domain.len() + 2);

    if !domain.is_empty() {
        for label in domain.split('.') {
            qname.push(label.len() as u8);
            qname.extend_from_slice(label.as_bytes());
        }
    }

    qname.push(0);

    tracing::debug!("encoded qname: {:?}", qname);

    qname
}

// 读取 qname 并转换为可读的字符串
pub fn read_qname(rdr: &mut Cursor<&[u8]>) -> std::io::Result<String> {
    let mut labels = Vec::new();

    loop {
        let label_len = rdr.read_u8()? as usize;
        if label_len == 0 {
            break;
        }

        if label_len > MAX_LABEL_LEN {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("label length {} exceeds {}", label_len, MAX_LABEL_LEN),
            ));
        }

        let mut label_bytes = vec![0; label_len];
        rdr.read_exact(&mut label_bytes)?;

        labels.push(String::from_utf8_lossy(&label_bytes).to_string());
    }

    Ok(labels.join("."))
}
