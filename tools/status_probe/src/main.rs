#![doc = include_str!("../README.md")]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls,
    rustdoc::invalid_html_tags
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces,
    clippy::dbg_macro
)]

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use lantern_status::{decode, encode, StatusResponse, StatusResponsePacket};
use tracing::{debug, info, warn, Level};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File containing the status response. Reads stdin if absent or `-`.
    input: Option<PathBuf>,
    /// The input is a raw status response packet body rather than JSON text.
    #[arg(long)]
    packet: bool,
    /// Print a blank status instead of failing when the response is invalid.
    #[arg(long)]
    fail_open: bool,
    /// Print the decoded status as JSON instead of a summary.
    #[arg(long)]
    json: bool,
    #[arg(short, long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let input = read_input(cli.input.as_deref())?;
    debug!(bytes = input.len(), "read input");

    let response = resolve(&input, cli.packet, cli.fail_open)?;

    let mut out = io::stdout().lock();

    if cli.json {
        writeln!(out, "{}", encode(&response))?;
    } else {
        print_summary(&mut out, &response)?;
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    let mut buf = vec![];

    match path {
        Some(path) if path != Path::new("-") => {
            buf = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
        }
    }

    Ok(buf)
}

/// Decodes the input, falling back to a blank status on error if `fail_open`
/// is set.
fn resolve(input: &[u8], packet: bool, fail_open: bool) -> anyhow::Result<StatusResponse> {
    match decode_input(input, packet) {
        Ok(response) => Ok(response),
        Err(e) if fail_open => {
            warn!("{e:#}, showing a blank status");
            Ok(StatusResponse::default())
        }
        Err(e) => Err(e),
    }
}

fn decode_input(input: &[u8], packet: bool) -> anyhow::Result<StatusResponse> {
    let response = if packet {
        let mut r = input;
        let response = StatusResponsePacket::decode_body(&mut r)
            .context("failed to decode status response packet")?;

        if !r.is_empty() {
            warn!("{} trailing bytes after the status response", r.len());
        }

        response
    } else {
        let Ok(raw) = std::str::from_utf8(input) else {
            bail!("status response is not valid UTF-8");
        };

        decode(raw).context("failed to decode status response")?
    };

    info!(
        protocol = response.status.version.protocol,
        modded = response.mod_list.is_some(),
        "decoded status response"
    );

    Ok(response)
}

fn print_summary<W: Write>(mut w: W, response: &StatusResponse) -> io::Result<()> {
    let status = &response.status;

    writeln!(
        w,
        "version: {} (protocol {})",
        status.version.name, status.version.protocol
    )?;
    writeln!(w, "players: {}/{}", status.players.online, status.players.max)?;

    for player in &status.players.sample {
        writeln!(w, "  {} ({})", player.name, player.id)?;
    }

    writeln!(w, "description: {}", status.description.to_legacy_lossy())?;

    match &status.favicon {
        Some(favicon) => {
            let (width, height) = favicon.image().dimensions();
            writeln!(w, "favicon: {width}x{height} PNG, {} bytes", favicon.png().len())?;
        }
        None => writeln!(w, "favicon: none")?,
    }

    if let Some(mod_list) = &response.mod_list {
        writeln!(w, "mods ({}, {}):", mod_list.kind, mod_list.mods.len())?;

        for entry in &mod_list.mods {
            writeln!(w, "  {} {}", entry.mod_id, entry.version)?;
        }
    }

    Ok(())
}
