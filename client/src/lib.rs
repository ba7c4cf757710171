use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use common::{NetError, DEFAULT_HOST, DEFAULT_MESSAGE, DEFAULT_PORT};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: IpAddr,
    pub port: u16,
    pub message: String
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            message: DEFAULT_MESSAGE.to_string()
        }
    }
}

impl ClientConfig {
    pub fn target(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Sends the configured message as a single datagram and returns the number
/// of bytes handed to the OS. The socket lives on an ephemeral local port
/// and closes on drop; UDP gives no delivery guarantee, so an `Ok` here
/// only means the send itself went through.
pub async fn send(config: &ClientConfig) -> Result<usize, NetError> {
    let local = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0);
    let socket = UdpSocket::bind(local)
        .await
        .map_err(|err| NetError::Bind(local, err))?;

    let target = config.target();
    socket
        .send_to(config.message.as_bytes(), target)
        .await
        .map_err(|err| NetError::Send(target, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn send_reaches_a_listener() {
        let listener = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let config = ClientConfig {
            port: addr.port(),
            ..ClientConfig::default()
        };
        let sent = send(&config).await.unwrap();
        assert_eq!(sent, config.message.len());

        let mut buf = [0u8; 128];
        let (len, _) = timeout(Duration::from_secs(5), listener.recv_from(&mut buf))
            .await
            .expect("datagram never arrived")
            .unwrap();
        assert_eq!(&buf[..len], config.message.as_bytes());
    }

    #[tokio::test]
    async fn send_without_listener_does_not_hang() {
        // Grab a free port, then release it so nothing listens there.
        let probe = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let config = ClientConfig { port, ..ClientConfig::default() };
        let result = timeout(Duration::from_secs(5), send(&config)).await;
        let outcome = result.expect("send blocked indefinitely");

        // Connectionless send: either it completes or it reports a local error.
        if let Ok(sent) = outcome {
            assert_eq!(sent, config.message.len());
        }
    }
}
