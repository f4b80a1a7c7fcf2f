use clap::{Parser, Subcommand};

/// monerod-cli: query a Monero daemon over its RPC interface.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Daemon RPC base URL.
    #[arg(long, default_value = "http://127.0.0.1:18081", env = "MONEROD_URL")]
    pub daemon_url: String,

    /// Extra header sent with every request, as `NAME:VALUE` (repeatable).
    /// The value is taken verbatim, commas included.
    #[arg(long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Comma-separated `NAME:VALUE` list, usually supplied through the
    /// environment. Entries given with `--header` win on a name clash.
    #[arg(
        long = "header-list",
        env = "MONEROD_HEADERS",
        hide = true,
        value_delimiter = ',',
        value_parser = parse_header
    )]
    pub header_list: Vec<(String, String)>,

    /// TCP connect timeout in seconds.
    #[arg(long, default_value = "10")]
    pub connect_timeout_secs: u64,

    /// Overall per-request timeout in seconds. Unbounded when omitted.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// General node information (`get_info`).
    Info,
    /// Current chain height and top block hash.
    Height,
    /// Number of blocks in the longest chain.
    BlockCount,
    /// Hash of the block at a height.
    BlockHash { height: u64 },
    /// Full block by hash or height.
    Block {
        /// 64-character block hash or decimal height.
        id: String,
        #[arg(long)]
        fill_pow_hash: bool,
    },
    LastBlockHeader,
    /// Block header by hash or height.
    BlockHeader {
        /// 64-character block hash or decimal height.
        id: String,
        #[arg(long)]
        fill_pow_hash: bool,
    },
    Version,
    /// Fee per byte estimate.
    FeeEstimate {
        #[arg(long)]
        grace_blocks: Option<u64>,
    },
    SyncInfo,
    Connections,
    Bans,
    AltChains,
    MinerData,
    /// Look up transactions by hash.
    Transactions {
        #[arg(required = true)]
        hashes: Vec<String>,
        #[arg(long)]
        decode_as_json: bool,
        #[arg(long)]
        prune: bool,
    },
    /// Spent status of key images.
    KeyImages {
        #[arg(required = true)]
        key_images: Vec<String>,
    },
    TxpoolHashes,
    TxpoolStats,
    TxpoolBacklog,
    /// Known white and gray peers.
    Peers,
    PublicNodes {
        #[arg(long)]
        gray: bool,
        #[arg(long)]
        white: bool,
        #[arg(long)]
        include_blocked: bool,
    },
    NetStats,
    /// Current bandwidth limits.
    Limit,
    MiningStatus,
    HardForkInfo,
}

impl Cli {
    /// Headers in the order they should be applied: the list first, then
    /// each `--header`, so a later entry replaces an earlier one.
    pub fn all_headers(&self) -> impl Iterator<Item = &(String, String)> {
        self.header_list.iter().chain(self.headers.iter())
    }
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("header `{raw}` must be formatted as NAME:VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header `{raw}` has an empty name"));
    }
    Ok((name.to_owned(), value.trim().to_owned()))
}
