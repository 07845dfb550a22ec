use crate::message::Message;
use crate::name::DomainName;

/// A single value written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    U8(u8),
    U16(u16),
    Bytes(&'a [u8]),
}

impl Field<'_> {
    pub fn len(&self) -> usize {
        match self {
            Field::U8(_) => 1,
            Field::U16(_) => 2,
            Field::Bytes(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct PacketWriter {
    buf: Vec<u8>,
}

impl PacketWriter {
    pub fn with_capacity(capacity: usize) -> PacketWriter {
        PacketWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn put(&mut self, field: Field<'_>) -> &mut Self {
        match field {
            Field::U8(value) => self.buf.push(value),
            Field::U16(value) => self.buf.extend_from_slice(&value.to_be_bytes()),
            Field::Bytes(bytes) => self.buf.extend_from_slice(bytes),
        }

        self
    }

    pub fn put_all<'a, I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = Field<'a>>,
    {
        for field in fields {
            self.put(field);
        }

        self
    }

    pub fn put_domain(&mut self, name: &DomainName) -> &mut Self {
        for label in name.labels() {
            self.put(Field::U8(label.len() as u8))
                .put(Field::Bytes(label));
        }

        self.put(Field::U8(0x00))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> Box<[u8]> {
        self.buf.into_boxed_slice()
    }
}

/// Serializes `message` to wire format.
pub fn encode(message: &Message) -> Box<[u8]> {
    let mut writer = PacketWriter::with_capacity(message.wire_len());

    let header = message.header();
    writer.put_all(header.fields().map(Field::U16));

    let question = message.question();
    writer
        .put_domain(&question.name)
        .put(Field::U16(question.qtype.to_num()))
        .put(Field::U16(question.qclass.to_num()));

    writer.finish()
}
