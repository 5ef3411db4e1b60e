use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ovpn-convert")]
#[command(about = "Convert OpenVPN configuration files to structured JSON")]
pub struct Cli {
    /// Input configuration file.
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    pub input: Option<PathBuf>,
    /// Read data from stdin instead of a file.
    #[arg(short, long)]
    pub stdin: bool,
    /// Output formatted JSON.
    #[arg(short, long)]
    pub pretty: bool,
    /// Include parse status information in the main JSON document.
    /// By default status is dumped separately to stderr.
    #[arg(short, long)]
    pub include_status: bool,
}
