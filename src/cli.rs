use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Play audio in realtime
    #[arg(long, default_value_t = true, num_args = 0..=1, default_missing_value = "true")]
    pub play: bool,

    /// Write audio to wav file
    #[arg(long)]
    pub wav: Option<String>,

    /// Path to config TOML
    #[arg(long, default_value = "genesis.toml")]
    pub config: String,

    /// Run without GUI (headless offline render)
    #[arg(long, default_value_t = false)]
    pub nogui: bool,

    /// Layout seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}
