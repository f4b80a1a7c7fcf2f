mod cli;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde::Serialize;
use serde_json::Value;

use monerod_rpc::rpc::types::{GetPublicNodesRequest, GetTransactionsRequest};
use monerod_rpc::{
    BlockId, ClientError, DaemonClient, DaemonConfig, ReqwestTransport, TransportError,
};

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let mut http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(args.connect_timeout_secs))
        .tcp_nodelay(true);
    if let Some(secs) = args.timeout_secs {
        http = http.timeout(Duration::from_secs(secs));
    }
    let transport = ReqwestTransport::from_client(http.build().context("build HTTP client")?);

    let config = args
        .all_headers()
        .fold(DaemonConfig::new(&args.daemon_url), |config, (name, value)| {
            config.with_header(name, value)
        })
        .with_transport(Arc::new(transport));
    let client = DaemonClient::new(config).context("configure daemon client")?;
    tracing::debug!(daemon = %client.address(), "client ready");

    let output = run(&client, args.command).await.map_err(|err| {
        match err.downcast_ref::<ClientError>() {
            Some(ClientError::Transport(transport)) => {
                let message = describe_transport_error(&args.daemon_url, transport);
                eyre!(message).wrap_err("while talking to the Monero daemon")
            }
            _ => err,
        }
    })?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render response")?
    );
    Ok(())
}

async fn run(client: &DaemonClient, command: Command) -> eyre::Result<Value> {
    match command {
        Command::Info => render(client.get_info().await?),
        Command::Height => render(client.get_height().await?),
        Command::BlockCount => render(client.get_block_count().await?),
        Command::BlockHash { height } => render(client.on_get_block_hash(height).await?),
        Command::Block { id, fill_pow_hash } => {
            let id: BlockId = id.parse()?;
            render(client.get_block(id, fill_pow_hash).await?)
        }
        Command::LastBlockHeader => render(client.get_last_block_header().await?),
        Command::BlockHeader { id, fill_pow_hash } => match id.parse::<BlockId>()? {
            BlockId::Hash(hash) => {
                render(client.get_block_header_by_hash(&hash, fill_pow_hash).await?)
            }
            BlockId::Height(height) => {
                render(client.get_block_header_by_height(height, fill_pow_hash).await?)
            }
        },
        Command::Version => render(client.get_version().await?),
        Command::FeeEstimate { grace_blocks } => {
            render(client.get_fee_estimate(grace_blocks).await?)
        }
        Command::SyncInfo => render(client.sync_info().await?),
        Command::Connections => render(client.get_connections().await?),
        Command::Bans => render(client.get_bans().await?),
        Command::AltChains => render(client.get_alternate_chains().await?),
        Command::MinerData => render(client.get_miner_data().await?),
        Command::Transactions {
            hashes,
            decode_as_json,
            prune,
        } => {
            let request = GetTransactionsRequest {
                txs_hashes: hashes,
                decode_as_json,
                prune,
                ..Default::default()
            };
            render(client.get_transactions(&request).await?)
        }
        Command::KeyImages { key_images } => {
            render(client.is_key_image_spent(&key_images).await?)
        }
        Command::TxpoolHashes => render(client.get_transaction_pool_hashes().await?),
        Command::TxpoolStats => render(client.get_transaction_pool_stats().await?),
        Command::TxpoolBacklog => render(client.get_txpool_backlog().await?),
        Command::Peers => render(client.get_peer_list().await?),
        Command::PublicNodes {
            gray,
            white,
            include_blocked,
        } => {
            let request = GetPublicNodesRequest {
                gray,
                white,
                include_blocked,
            };
            render(client.get_public_nodes(&request).await?)
        }
        Command::NetStats => render(client.get_net_stats().await?),
        Command::Limit => render(client.get_limit().await?),
        Command::MiningStatus => render(client.mining_status().await?),
        Command::HardForkInfo => render(client.hard_fork_info().await?),
    }
}

fn render<T: Serialize>(response: T) -> eyre::Result<Value> {
    serde_json::to_value(response).context("serialize response")
}

fn describe_transport_error(daemon_url: &str, err: &TransportError) -> String {
    match err {
        TransportError::Send(_) => format_connect_error(daemon_url, &err.to_string()),
        TransportError::Status { status, body } => format_status_error(daemon_url, *status, body),
    }
}

fn format_status_error(daemon_url: &str, status: reqwest::StatusCode, body: &str) -> String {
    let mut lines = vec![format!("daemon at `{daemon_url}` answered with HTTP status {status}")];
    if !body.trim().is_empty() {
        lines.push(format!("response body: {}", body.trim()));
    }

    match status.as_u16() {
        401 | 403 => lines.push(
            "hint: access denied; a restricted or proxied node may need --header credentials"
                .into(),
        ),
        404 => lines.push("hint: endpoint not found; the URL must point at the daemon root".into()),
        code if code >= 500 => lines.push(
            "hint: the daemon failed while handling the call; check its log for details".into(),
        ),
        _ => {}
    }

    lines.join("\n")
}

fn format_connect_error(daemon_url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("could not reach daemon at `{daemon_url}`"),
        format!("RPC error: {source_error}"),
    ];

    if source_error.contains("dns error") || source_error.contains("failed to lookup address") {
        lines.push(
            "hint: hostname resolution failed; verify the daemon hostname and your DNS/network"
                .into(),
        );
    } else if source_error.contains("Connection refused") || source_error.contains("tcp connect")
    {
        lines.push(
            "hint: nothing accepted the connection; check that monerod is running with \
             --rpc-bind-port matching the URL"
                .into(),
        );
    } else if source_error.contains("certificate") || source_error.contains("tls") {
        lines.push(
            "hint: TLS handshake failed; verify certificate trust and that the daemon serves HTTPS"
                .into(),
        );
    } else if source_error.contains("timed out") {
        lines.push(
            "hint: the daemon did not answer in time; raise --timeout-secs or check node load"
                .into(),
        );
    }

    lines.join("\n")
}
