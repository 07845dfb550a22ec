use std::fmt::{Display, Formatter};
use rand::random;
use crate::error::CodecError;
use crate::header::{Header, DEFAULT_QUERY_FLAGS, DEFAULT_QUERY_ID, HEADER_LEN};
use crate::name::DomainName;
use crate::query_class::QueryClass;
use crate::query_type::QueryType;
use crate::question::Question;

/// A DNS message with exactly one question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    header: Header,
    question: Question,
}

impl Message {
    /// Standard A/IN query with the default id and flags.
    pub fn new_query(domain: &str) -> Result<Message, CodecError> {
        QueryBuilder::new().build(domain)
    }

    pub(crate) fn from_parts(header: Header, question: Question) -> Message {
        Message { header, question }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn id(&self) -> u16 {
        self.header.id
    }

    /// Whether `self` carries the same correlation id as `query`.
    pub fn is_response_to(&self, query: &Message) -> bool {
        self.header.id == query.header.id
    }

    pub fn wire_len(&self) -> usize {
        HEADER_LEN + self.question.wire_len()
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let header = &self.header;

        let mut flags = Vec::new();
        for (set, name) in [
            (header.is_response(), "qr"),
            (header.is_authoritative(), "aa"),
            (header.is_truncated(), "tc"),
            (header.recursion_desired(), "rd"),
            (header.recursion_available(), "ra"),
        ] {
            if set {
                flags.push(name);
            }
        }

        writeln!(
            f,
            ";; opcode: {}, status: {:?}, id: {}",
            header.opcode(),
            header.code(),
            header.id
        )?;
        writeln!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            flags.join(" "),
            header.question_count,
            header.answer_count,
            header.authority_count,
            header.additional_count
        )?;
        let question = &self.question;
        if question.name.is_root() {
            write!(f, ";.\t{}\t{}", question.qclass, question.qtype)
        } else {
            write!(f, ";{}.\t{}\t{}", question.name, question.qclass, question.qtype)
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    qtype: QueryType,
    qclass: QueryClass,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_QUERY_ID,
            flags: DEFAULT_QUERY_FLAGS,
            qtype: QueryType::A,
            qclass: QueryClass::IN,
        }
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;

        self
    }

    pub fn with_random_id(self) -> Self {
        self.with_id(random())
    }

    pub fn with_recursion_desired(mut self, desired: bool) -> Self {
        self.flags = Header::new()
            .with_flags(self.flags)
            .with_recursion_desired(desired)
            .flags;

        self
    }

    pub fn with_type(mut self, qtype: QueryType) -> Self {
        self.qtype = qtype;

        self
    }

    pub fn with_class(mut self, qclass: QueryClass) -> Self {
        self.qclass = qclass;

        self
    }

    pub fn build(self, domain: &str) -> Result<Message, CodecError> {
        let name = DomainName::parse(domain)?;

        let header = Header::new_with_id(self.id)
            .with_flags(self.flags)
            .with_question_count(1);

        Ok(Message {
            header,
            question: Question::new_with_class(name, self.qtype, self.qclass),
        })
    }
}
