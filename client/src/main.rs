use std::net::IpAddr;
use anyhow::Context;
use clap::Parser;
use client::{send, ClientConfig};
use common::{DEFAULT_HOST, DEFAULT_MESSAGE, DEFAULT_PORT};

#[derive(Debug, Parser)]
#[clap(about = "send one UDP datagram and exit")]
struct Args {
    #[clap(long, value_name("destination address"), default_value_t = DEFAULT_HOST)]
    host: IpAddr,

    #[clap(short, long, value_name("destination port"), default_value_t = DEFAULT_PORT)]
    port: u16,

    #[clap(short, long, value_name("payload text"), default_value = DEFAULT_MESSAGE)]
    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ClientConfig {
        host: args.host,
        port: args.port,
        message: args.message
    };

    let sent = send(&config).await.context("send failed")?;
    println!("sent {} bytes to {}", sent, config.target());
    Ok(())
}
