pub const HEADER_LEN: usize = 12;

pub const FLAG_RESPONSE: u16 = 1 << 15;
pub const FLAG_AUTHORITATIVE: u16 = 1 << 10;
pub const FLAG_TRUNCATION: u16 = 1 << 9;
pub const FLAG_RECURSION_DESIRED: u16 = 1 << 8;
pub const FLAG_RECURSION_AVAILABLE: u16 = 1 << 7;

// Historical query layout: only bit 7 of the low byte is set, giving 00 80 on the wire.
pub const DEFAULT_QUERY_FLAGS: u16 = FLAG_RECURSION_AVAILABLE;
pub const DEFAULT_QUERY_ID: u16 = 22;

/// The fixed 12-byte DNS header. Flags are kept as the raw bitfield and
/// exposed through read-only accessors.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn new() -> Header {
        Header::default()
    }

    pub fn new_with_id(id: u16) -> Header {
        Header {
            id,
            ..Default::default()
        }
    }

    pub fn with_flags(mut self, flags: u16) -> Self {
        self.flags = flags;

        self
    }

    pub fn with_recursion_desired(mut self, desired: bool) -> Self {
        if desired {
            self.flags |= FLAG_RECURSION_DESIRED;
        } else {
            self.flags &= !FLAG_RECURSION_DESIRED;
        }

        self
    }

    pub fn with_question_count(mut self, n: u16) -> Self {
        self.question_count = n;

        self
    }

    /// Field values in wire order.
    pub fn fields(&self) -> [u16; 6] {
        [
            self.id,
            self.flags,
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count,
        ]
    }

    pub fn from_fields(fields: [u16; 6]) -> Header {
        let [id, flags, question_count, answer_count, authority_count, additional_count] = fields;

        Header {
            id,
            flags,
            question_count,
            answer_count,
            authority_count,
            additional_count,
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_RESPONSE != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags >> 11) & 0x0F) as u8
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & FLAG_AUTHORITATIVE != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TRUNCATION != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RECURSION_DESIRED != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RECURSION_AVAILABLE != 0
    }

    pub fn reserved(&self) -> u8 {
        ((self.flags >> 4) & 0x07) as u8
    }

    pub fn code(&self) -> ResultCode {
        ResultCode::from((self.flags & 0x0F) as u8)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResultCode {
    NOERROR,
    FORMERR,
    SERVFAIL,
    NXDOMAIN,
    NOTIMP,
    REFUSED,
    UNKNOWN(u8),
}

impl ResultCode {
    pub fn from(value: u8) -> ResultCode {
        match value {
            0 => ResultCode::NOERROR,
            1 => ResultCode::FORMERR,
            2 => ResultCode::SERVFAIL,
            3 => ResultCode::NXDOMAIN,
            4 => ResultCode::NOTIMP,
            5 => ResultCode::REFUSED,
            n => ResultCode::UNKNOWN(n),
        }
    }
}
