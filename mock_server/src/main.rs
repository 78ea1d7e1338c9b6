use std::error::Error;
use std::path::PathBuf;
use argh::FromArgs;
use log::{info, warn};
use tokio::net::UdpSocket;

use crate::answer::{record_type_name, RecordTable};

mod answer;

const BUFFER_SIZE: usize = 512;

fn default_config_path() -> PathBuf {
    PathBuf::from("./mock_server_config.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "local DNS stub answering A queries from a static table")]
struct CliArgs {
    #[argh(
        option,
        description = "config file path, default: './mock_server_config.toml'",
        default = "default_config_path()"
    )]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::try_init();

    let args: CliArgs = argh::from_env();
    let c = configuration::get_stub_server_config(args.config)?;
    let table = RecordTable::new(c.records, c.ttl);

    let bind_address = c.server.bind_address();
    let sock = UdpSocket::bind(bind_address).await?;
    println!("Listening on: {}, pid: {}, records: {}", bind_address, std::process::id(), table.len());

    let mut buf = [0u8; BUFFER_SIZE];
    loop {
        let (n, peer) = match sock.recv_from(&mut buf).await {
            Ok(r) => r,
            Err(e) => {
                warn!("udp recv err: {}", e);
                continue;
            }
        };
        let request = &buf[0..n];

        let query = match dns::decode_query(request) {
            Ok(q) => q,
            Err(e) => {
                warn!("dropping malformed query from {}, length: {}, err: {}", peer, n, e);
                continue;
            }
        };
        info!(
            "query from {}, id: {:#06x}, domain: '{}', type: {}",
            peer,
            query.id(),
            query.domain(),
            record_type_name(query.qtype())
        );

        let resp = table.build_response(request, &query);
        if let Err(e) = sock.send_to(&resp, peer).await {
            warn!("udp send to {} err: {}", peer, e);
        }
    }
}
