use std::{
    borrow::Cow,
    error::Error,
    fmt::{Display, Formatter},
    net::{IpAddr, Ipv4Addr, SocketAddr}
};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_MESSAGE: &str = "Hello, server!";

// Largest UDP payload over IPv4 (65535 minus IP and UDP headers).
pub const MAX_DATAGRAM_SIZE: usize = 65507;

#[derive(Debug)]
pub enum NetError {
    Bind(SocketAddr, std::io::Error),
    Send(SocketAddr, std::io::Error),
    Recv(std::io::Error)
}

impl Error for NetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bind(_, err) | Self::Send(_, err) | Self::Recv(err) => Some(err)
        }
    }
}

impl Display for NetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bind(addr, err) => write!(f, "cannot bind {}: {}", addr, err),
            Self::Send(addr, err) => write!(f, "cannot send to {}: {}", addr, err),
            Self::Recv(err) => write!(f, "cannot receive: {}", err)
        }
    }
}

/// One received datagram: the raw payload plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub payload: Vec<u8>,
    pub peer: SocketAddr
}

impl Datagram {
    pub fn family(&self) -> &'static str {
        if self.peer.is_ipv4() { "IPv4" } else { "IPv6" }
    }

    /// Payload as text. Non-UTF-8 bytes are replaced, never a panic.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}
