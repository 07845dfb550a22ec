use crate::error::CodecError;
use crate::header::{Header, HEADER_LEN};
use crate::message::Message;
use crate::name::{DomainName, MAX_LABEL_LEN};
use crate::query_class::QueryClass;
use crate::query_type::QueryType;
use crate::question::Question;

pub struct PacketParser<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> PacketParser<'a> {
    pub fn new(data: &'a [u8]) -> PacketParser<'a> {
        PacketParser {
            buf: data,
            offset: 0,
        }
    }

    fn next(&mut self) -> Option<u8> {
        let res = *self.buf.get(self.offset)?;
        self.offset += 1;

        Some(res)
    }

    fn next_u16(&mut self) -> Option<u16> {
        let bytes = self.range(2)?;

        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn range(&mut self, len: usize) -> Option<&'a [u8]> {
        let buf = self.buf;
        let res = buf.get(self.offset..self.offset + len)?;
        self.offset += len;

        Some(res)
    }

    fn truncated_question(&self) -> CodecError {
        CodecError::TruncatedQuestion {
            offset: self.offset,
        }
    }

    pub fn parse(&mut self) -> Result<Message, CodecError> {
        let header = self.parse_header()?;

        // a header-only reply, e.g. REFUSED or FORMERR without the echo
        if header.question_count == 0 && self.offset == self.buf.len() {
            return Ok(Message::from_parts(header, Question::empty()));
        }

        // any bytes after the header are read as the question, whatever qdcount says
        let question = self.parse_question()?;

        Ok(Message::from_parts(header, question))
    }

    pub fn parse_header(&mut self) -> Result<Header, CodecError> {
        if self.buf.len() < HEADER_LEN {
            return Err(CodecError::TruncatedHeader {
                len: self.buf.len(),
            });
        }

        self.offset = 0;

        let mut fields = [0u16; 6];
        for field in fields.iter_mut() {
            *field = self.next_u16().ok_or(CodecError::TruncatedHeader {
                len: self.buf.len(),
            })?;
        }

        Ok(Header::from_fields(fields))
    }

    pub fn parse_question(&mut self) -> Result<Question, CodecError> {
        let name = self.parse_domain_name()?;
        let qtype = self.next_u16().ok_or_else(|| self.truncated_question())?;
        let qclass = self.next_u16().ok_or_else(|| self.truncated_question())?;

        Ok(Question::new_with_class(
            name,
            QueryType::from(qtype),
            QueryClass::from(qclass),
        ))
    }

    /// Reads length-prefixed labels up to the zero terminator, consuming
    /// exactly `len` body bytes per label.
    pub fn parse_domain_name(&mut self) -> Result<DomainName, CodecError> {
        let mut labels: Vec<&'a [u8]> = Vec::new();

        loop {
            let start = self.offset;
            let len = self.next().ok_or_else(|| self.truncated_question())?;

            if len == 0 {
                break;
            }

            // compression pointers (0xC0) and the reserved 0x40/0x80 types
            if len as usize > MAX_LABEL_LEN {
                return Err(CodecError::UnsupportedLabel { offset: start, len });
            }

            let label = self
                .range(len as usize)
                .ok_or_else(|| self.truncated_question())?;
            labels.push(label);
        }

        Ok(DomainName::from_wire(labels))
    }
}

/// Decodes the header and the first question of a DNS message. Trailing
/// bytes, including zero padding from an oversized read buffer, are ignored.
pub fn decode(buf: &[u8]) -> Result<Message, CodecError> {
    PacketParser::new(buf).parse()
}
