use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1
//
// Messages carried by UDP are restricted to 512 bytes (not counting the IP
// or UDP headers).
pub const MAX_RESPONSE_SIZE: usize = 512;

/// Sends `message` as one datagram and returns the first datagram received.
///
/// Blocks until a reply arrives. The socket is dropped before returning,
/// on success and on error.
pub async fn send_and_receive(server_ip: IpAddr, server_port: u16, message: &[u8]) -> std::io::Result<Vec<u8>> {
    send_and_receive_with_timeout(server_ip, server_port, message, None).await
}

/// Same as [`send_and_receive`], but gives up with `ErrorKind::TimedOut`
/// when no reply arrives within `timeout`.
pub async fn send_and_receive_with_timeout(
    server_ip: IpAddr,
    server_port: u16,
    message: &[u8],
    timeout: Option<Duration>,
) -> std::io::Result<Vec<u8>> {
    let server_addr = SocketAddr::new(server_ip, server_port);

    let sock = UdpSocket::bind(local_addr_for(&server_addr)).await?;

    let send_size = sock.send_to(message, server_addr).await?;
    tracing::debug!("sent udp query to {}, length: {}", server_addr, send_size);

    let mut resp_buf = [0u8; MAX_RESPONSE_SIZE];
    let (response_size, peer) = match timeout {
        None => sock.recv_from(&mut resp_buf).await?,
        Some(d) => tokio::time::timeout(d, sock.recv_from(&mut resp_buf))
            .await
            .map_err(|_| {
                std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    format!("no response from {} within {:?}", server_addr, d),
                )
            })??,
    };

    let response_bytes = &resp_buf[0..response_size];
    tracing::debug!("received udp response from {}, length: {}, {:?}", peer, response_size, response_bytes);

    Ok(response_bytes.to_vec())
}

fn local_addr_for(server_addr: &SocketAddr) -> SocketAddr {
    match server_addr {
        SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    }
}
