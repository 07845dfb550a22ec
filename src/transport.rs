use std::io::{Error, ErrorKind, Result};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;

pub const MAX_PACKET_SIZE: usize = 512;

/// Moves raw datagrams between the codec and a DNS server. Errors are plain
/// I/O errors and are not interpreted here.
pub trait Transport {
    fn send(&self, buf: &[u8]) -> Result<()>;
    fn receive(&self, max_bytes: usize) -> Result<Vec<u8>>;
}

pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    pub fn connect(server: SocketAddr, timeout: Duration) -> Result<Self> {
        let local = match server {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        };

        let socket = UdpSocket::bind(local)?;
        // a zero duration is rejected by the socket options
        let timeout = (!timeout.is_zero()).then_some(timeout);
        socket.set_read_timeout(timeout)?;
        socket.set_write_timeout(timeout)?;
        socket.connect(server)?;

        Ok(Self { socket })
    }
}

impl Transport for UdpTransport {
    fn send(&self, buf: &[u8]) -> Result<()> {
        let n = self.socket.send(buf)?;
        if n < buf.len() {
            return Err(Error::new(
                ErrorKind::WriteZero,
                format!("sent {} of {} bytes", n, buf.len()),
            ));
        }

        Ok(())
    }

    fn receive(&self, max_bytes: usize) -> Result<Vec<u8>> {
        let mut res = vec![0u8; max_bytes];

        let n = self.socket.recv(&mut res)?;
        res.truncate(n);

        Ok(res)
    }
}

pub fn is_timeout(err: &Error) -> bool {
    err.kind() == ErrorKind::WouldBlock || err.kind() == ErrorKind::TimedOut
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn loopback_exchange() {
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let transport =
            UdpTransport::connect(server.local_addr().unwrap(), Duration::from_secs(2)).unwrap();

        transport.send(&[1, 2, 3]).unwrap();

        let mut buf = [0u8; 16];
        let (n, peer) = server.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], &[1, 2, 3]);

        server.send_to(&[4, 5], peer).unwrap();
        assert_eq!(transport.receive(MAX_PACKET_SIZE).unwrap(), vec![4, 5]);
    }

    #[test]
    fn receive_times_out() {
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let transport =
            UdpTransport::connect(server.local_addr().unwrap(), Duration::from_millis(50)).unwrap();

        let err = transport.receive(MAX_PACKET_SIZE).unwrap_err();
        assert!(is_timeout(&err));
    }
}
