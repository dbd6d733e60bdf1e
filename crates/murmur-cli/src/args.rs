use clap::Parser;

#[derive(Parser)]
#[command(name = "murmur")]
#[command(about = "Compose and browse short, anonymous, ephemeral thoughts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the XDG config directory)
    #[arg(long)]
    pub config: Option<String>,

    /// Override the simulated post latency, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Start with an empty feed instead of the sample thoughts
    #[arg(long)]
    pub fresh: bool,
}
