//! UDP listener that prints every datagram it receives.
//!
//! Any UDP-capable tool works as a peer, e.g. `nc -u 127.0.0.1 5555`.

use std::net::{IpAddr, SocketAddr};
use tokio::{
    net::UdpSocket,
    sync::oneshot
};
use common::{Datagram, NetError, DEFAULT_HOST, DEFAULT_PORT, MAX_DATAGRAM_SIZE};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Binds the listening socket. A port already in use or an unusable
/// address is fatal for a single-purpose listener, so the caller should
/// treat any error here as a reason to exit.
pub async fn bind(config: &ServerConfig) -> Result<UdpSocket, NetError> {
    let addr = config.listen_addr();
    UdpSocket::bind(addr)
        .await
        .map_err(|err| NetError::Bind(addr, err))
}

/// Waits for the next datagram on the socket.
pub async fn next_datagram(socket: &UdpSocket, buf: &mut [u8]) -> Result<Datagram, NetError> {
    let (len, peer) = socket.recv_from(buf).await.map_err(NetError::Recv)?;
    Ok(Datagram { payload: buf[..len].to_vec(), peer })
}

pub fn render(datagram: &Datagram) -> String {
    format!(
        "received datagram: message: {}, address: {}, family: {}, port: {}",
        datagram.text(),
        datagram.peer.ip(),
        datagram.family(),
        datagram.peer.port()
    )
}

/// Dispatches one received datagram per iteration until `shutdown` fires
/// (or its sender drops). Receive errors are logged and the loop keeps
/// going; only the shutdown signal ends it.
pub async fn serve(socket: UdpSocket, mut shutdown: oneshot::Receiver<()>) {
    let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
    loop {
        tokio::select! {
            _ = &mut shutdown => return,
            received = next_datagram(&socket, &mut buf) => match received {
                Ok(datagram) => println!("{}", render(&datagram)),
                Err(err) => eprintln!("err: {}", err)
            }
        }
    }
}
