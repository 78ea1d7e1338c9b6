use crate::header::{Header, HEADER_LEN};
use crate::options::QueryOptions;
use crate::question::Question;
use bytes::BufMut;
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMessage {
    header: Header,
    question: Question,
    // bytes taken by the question section on the wire
    question_len: usize,
}

impl QueryMessage {
    pub fn new(domain: &str, options: &QueryOptions) -> Self {
        let header = Header::query(options);
        let question = Question::new(domain, options);

        let mut question_bytes: Vec<u8> = vec![];
        question.to_bytes(&mut question_bytes);

        Self {
            header,
            question,
            question_len: question_bytes.len(),
        }
    }

    pub fn to_bytes<B: BufMut>(&self, bytes: &mut B) {
        self.header.to_bytes(bytes);
        self.question.to_bytes(bytes);
    }

    // 解析 DNS 的查询，只读取第一个 question
    pub fn parse_query(request: &[u8]) -> std::io::Result<Self> {
        let mut reader = Cursor::new(request);

        let header = Header::parse_from_reader(&mut reader)?;
        if header.qd_count() == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "query carries no question",
            ));
        }

        let question = Question::parse_from_reader(&mut reader)?;
        let question_len = reader.position() as usize - HEADER_LEN;

        let msg = Self {
            header,
            question,
            question_len,
        };

        Ok(msg)
    }

    pub fn id(&self) -> u16 {
        self.header.id()
    }

    pub fn flags(&self) -> u16 {
        self.header.flags()
    }

    pub fn domain(&self) -> &str {
        self.question.domain()
    }

    pub fn qtype(&self) -> u16 {
        self.question.qtype()
    }

    pub fn qclass(&self) -> u16 {
        self.question.qclass()
    }

    pub fn question_len(&self) -> usize {
        self.question_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_test() {
        let mut bytes: Vec<u8> = vec![];

        let msg = QueryMessage::new("baidu.com", &QueryOptions::STANDARD);
        msg.to_bytes(&mut bytes);

        let expected = [
            10, 11, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, // header
            5, 98, 97, 105, 100, 117, 3, 99, 111, 109, 0, 0, 1, 0, 1, // question
        ];

        assert_eq!(bytes, expected);
        assert_eq!(msg.question_len(), 15);
    }

    #[test]
    fn parse_query_test() {
        let mut bytes: Vec<u8> = vec![];
        QueryMessage::new("google.com", &QueryOptions::STANDARD).to_bytes(&mut bytes);

        let msg = QueryMessage::parse_query(&bytes).unwrap();
        assert_eq!(msg.id(), 0x0A0B);
        assert_eq!(msg.flags(), 0x0100);
        assert_eq!(msg.domain(), "google.com");
        assert_eq!(msg.qtype(), 1);
        assert_eq!(msg.qclass(), 1);
        assert_eq!(msg.question_len(), bytes.len() - HEADER_LEN);
    }

    #[test]
    fn parse_query_without_question() {
        let raw: &[u8] = &[0x0A, 0x0B, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let err = QueryMessage::parse_query(raw).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn parse_query_truncated_question() {
        let raw: &[u8] = &[0x0A, 0x0B, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, b'a', 0, 0];
        let err = QueryMessage::parse_query(raw).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
