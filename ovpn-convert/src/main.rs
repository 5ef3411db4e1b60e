use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use ovpn_convert::{Ovpn, OvpnFlags};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let flags = if cli.include_status {
        OvpnFlags::INCLUDE_STATUS
    } else {
        OvpnFlags::empty()
    };
    let mut ovpn = Ovpn::new(flags);

    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open file '{}'", path.display()))?;
            ovpn.parse(BufReader::new(file))
                .with_context(|| format!("failed to parse '{}'", path.display()))?;
        }
        None => {
            ovpn.parse(io::stdin().lock())
                .context("failed to parse stdin")?;
        }
    }

    println!("{}", ovpn.to_json(cli.pretty)?);
    if !cli.include_status {
        eprintln!("{}", ovpn.status_json(cli.pretty)?);
    }

    Ok(())
}
