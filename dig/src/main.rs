use std::error::Error;
use tracing_subscriber::EnvFilter;

use crate::cli_args::CliArgs;

mod cli_args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // stdout carries the response only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: CliArgs = argh::from_env();
    tracing::debug!("args: {:?}", args);

    let mut c = configuration::get_client_config(args.config.clone())?;
    args.apply(&mut c);

    let server_address = c.resolver.server_address();
    tracing::info!("querying {} for '{}'", server_address, c.query.domain);

    let query = dns::encode_query(&c.query.domain);

    let response = udp_transport::send_and_receive_with_timeout(
        server_address.ip(),
        server_address.port(),
        &query,
        c.resolver.timeout(),
    )
    .await?;

    println!("res: b'{}'", response.escape_ascii());

    Ok(())
}
