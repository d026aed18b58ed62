use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "hrdesk", version)]
#[clap(about = "Terminal client for the HR administration API", long_about = None)]
pub struct Cli {
    /// Override api.base_url for this invocation
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Disable coloured output
    #[clap(long, global = true)]
    pub no_color: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
