use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use anyhow::{bail, Result};
use thiserror::Error;
use tracing::{debug, info, warn};
use crate::message::Message;
use crate::parser::decode;
use crate::transport::{is_timeout, Transport, UdpTransport, MAX_PACKET_SIZE};
use crate::util::to_hex;
use crate::writer::encode;

/// The response decoded fine but answers a different query.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("response id {received} does not match query id {sent}")]
pub struct IdMismatch {
    pub sent: u16,
    pub received: u16,
}

/// One request/response round trip over `transport`.
pub fn exchange<T: Transport>(transport: &T, query: &Message) -> Result<Message> {
    let req = encode(query);
    debug!(bytes = req.len(), "query {}", to_hex(&req));

    transport.send(&req)?;
    let buf = transport.receive(MAX_PACKET_SIZE)?;
    debug!(bytes = buf.len(), "received response");

    let res = decode(&buf)?;
    if !res.is_response_to(query) {
        return Err(IdMismatch {
            sent: query.id(),
            received: res.id(),
        }
        .into());
    }

    Ok(res)
}

pub struct StubResolver {
    servers: Vec<SocketAddr>,
    timeout: Duration,
}

impl StubResolver {
    pub fn new(servers: Vec<SocketAddr>, timeout: Duration) -> StubResolver {
        Self { servers, timeout }
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    /// Sends `query` to each server in turn until one answers. Only timeouts
    /// move on to the next server; any other failure is returned as is.
    pub fn resolve(&self, query: &Message) -> Result<Message> {
        if self.servers.is_empty() {
            bail!("no servers to query");
        }

        for server in &self.servers {
            info!("querying {} for {}", server, query.question().name);

            let transport = UdpTransport::connect(*server, self.timeout)?;
            match exchange(&transport, query) {
                Ok(res) => return Ok(res),
                Err(e) if timed_out(&e) => {
                    warn!("{} not responding, moving to the next server", server);
                }
                Err(e) => return Err(e),
            }
        }

        bail!("all of the given addresses failed to serve the request")
    }
}

fn timed_out(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>().is_some_and(is_timeout)
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::net::UdpSocket;
    use std::thread;
    use super::*;
    use crate::error::CodecError;
    use crate::message::QueryBuilder;

    struct MockTransport {
        sent: RefCell<Vec<u8>>,
        reply: io::Result<Vec<u8>>,
    }

    impl MockTransport {
        fn replying(reply: Vec<u8>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                reply: Ok(reply),
            }
        }
    }

    impl Transport for MockTransport {
        fn send(&self, buf: &[u8]) -> io::Result<()> {
            self.sent.borrow_mut().extend_from_slice(buf);

            Ok(())
        }

        fn receive(&self, _max_bytes: usize) -> io::Result<Vec<u8>> {
            match &self.reply {
                Ok(buf) => Ok(buf.clone()),
                Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    fn as_response(query: &[u8]) -> Vec<u8> {
        let mut res = query.to_vec();
        res[2] |= 0x80;
        res.resize(MAX_PACKET_SIZE, 0);

        res
    }

    fn echo_server() -> SocketAddr {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = socket.local_addr().unwrap();

        thread::spawn(move || {
            let mut buf = [0u8; MAX_PACKET_SIZE];
            let (n, peer) = socket.recv_from(&mut buf).unwrap();
            socket.send_to(&as_response(&buf[..n]), peer).unwrap();
        });

        addr
    }

    #[test]
    fn exchange_sends_encoded_query() {
        let query = Message::new_query("dns.google.com").unwrap();
        let transport = MockTransport::replying(as_response(&encode(&query)));

        let res = exchange(&transport, &query).unwrap();

        assert_eq!(&transport.sent.borrow()[..], &encode(&query)[..]);
        assert!(res.header().is_response());
        assert_eq!(res.question(), query.question());
    }

    #[test]
    fn exchange_reports_id_mismatch() {
        let query = QueryBuilder::new().with_id(1).build("example.com").unwrap();
        let other = QueryBuilder::new().with_id(2).build("example.com").unwrap();
        let transport = MockTransport::replying(as_response(&encode(&other)));

        let err = exchange(&transport, &query).unwrap_err();

        assert_eq!(
            err.downcast_ref::<IdMismatch>(),
            Some(&IdMismatch { sent: 1, received: 2 })
        );
    }

    #[test]
    fn exchange_reports_decode_errors() {
        let query = Message::new_query("example.com").unwrap();
        let transport = MockTransport::replying(vec![0x00, 0x16, 0x81]);

        let err = exchange(&transport, &query).unwrap_err();

        assert_eq!(
            err.downcast_ref::<CodecError>(),
            Some(&CodecError::TruncatedHeader { len: 3 })
        );
    }

    #[test]
    fn exchange_passes_io_errors_through() {
        let query = Message::new_query("example.com").unwrap();
        let transport = MockTransport {
            sent: RefCell::new(Vec::new()),
            reply: Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused")),
        };

        let err = exchange(&transport, &query).unwrap_err();

        assert_eq!(
            err.downcast_ref::<io::Error>().map(|e| e.kind()),
            Some(io::ErrorKind::ConnectionRefused)
        );
    }

    #[test]
    fn resolve_over_loopback() {
        let resolver = StubResolver::new(vec![echo_server()], Duration::from_secs(2));
        let query = QueryBuilder::new().with_random_id().build("dns.google.com").unwrap();

        let res = resolver.resolve(&query).unwrap();

        assert!(res.is_response_to(&query));
        assert_eq!(res.question().name.to_string(), "dns.google.com");
    }

    #[test]
    fn resolve_skips_silent_servers() {
        let silent = UdpSocket::bind("127.0.0.1:0").unwrap();
        let resolver = StubResolver::new(
            vec![silent.local_addr().unwrap(), echo_server()],
            Duration::from_millis(200),
        );
        let query = Message::new_query("example.com").unwrap();

        assert!(resolver.resolve(&query).is_ok());
    }

    #[test]
    fn resolve_fails_when_every_server_times_out() {
        let silent = UdpSocket::bind("127.0.0.1:0").unwrap();
        let resolver =
            StubResolver::new(vec![silent.local_addr().unwrap()], Duration::from_millis(50));
        let query = Message::new_query("example.com").unwrap();

        assert!(resolver.resolve(&query).is_err());
        assert!(StubResolver::new(Vec::new(), Duration::from_secs(1))
            .resolve(&query)
            .is_err());
    }
}
