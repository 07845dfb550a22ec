use crate::name::DomainName;
use crate::query_class::QueryClass;
use crate::query_type::QueryType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub qtype: QueryType,
    pub qclass: QueryClass,
}

impl Question {
    /// Stands in for the question of a header-only reply (qdcount 0).
    pub fn empty() -> Question {
        Question {
            name: DomainName::root(),
            qtype: QueryType::UNKNOWN(0),
            qclass: QueryClass::UNKNOWN(0),
        }
    }

    pub fn new_with_class(name: DomainName, qtype: QueryType, qclass: QueryClass) -> Question {
        Question {
            name,
            qtype,
            qclass,
        }
    }

    /// Length of the question on the wire.
    pub fn wire_len(&self) -> usize {
        self.name.wire_len() + 4
    }
}
