use std::net::IpAddr;
use anyhow::Context;
use clap::Parser;
use tokio::sync::oneshot;
use common::{DEFAULT_HOST, DEFAULT_PORT};
use server::{bind, serve, ServerConfig};

#[derive(Debug, Parser)]
#[clap(about = "print every UDP datagram received on the bound port")]
struct Args {
    #[clap(long, value_name("bind address"), default_value_t = DEFAULT_HOST)]
    host: IpAddr,

    #[clap(short, long, value_name("listen port"), default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ServerConfig { host: args.host, port: args.port };

    let socket = bind(&config).await.context("cannot start server")?;
    println!("listening on {}", config.listen_addr());

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(());
        }
    });

    serve(socket, shutdown_rx).await;
    Ok(())
}
