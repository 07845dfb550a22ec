//! Builds single-question DNS queries, sends them over UDP and decodes the
//! header and question echoed back by the server.

pub mod args;
pub mod config;
pub mod context;
pub mod duration;
pub mod error;
pub mod fs;
pub mod header;
pub mod message;
pub mod name;
pub mod parser;
pub mod query_class;
pub mod query_type;
pub mod question;
pub mod resolver;
pub mod transport;
pub mod util;
pub mod writer;

pub use error::CodecError;
pub use message::{Message, QueryBuilder};
pub use parser::decode;
pub use writer::encode;
