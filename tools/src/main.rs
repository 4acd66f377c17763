use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use codec::{ProtocolVersion, RlsCodec};
use rls_tools::{
    codec_from_overrides, decode_datagram, encode_json, format_decode_pretty, format_inspect,
    inspect_datagram, list_datagrams,
};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "rls-tools",
    version,
    about = "RLS datagram inspection, decoding and encoding tools"
)]
struct Cli {
    #[command(flatten)]
    codec: CodecArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct CodecArgs {
    /// Protocol version to expect and stamp (MAJOR.MINOR.PATCH).
    #[arg(long, global = true)]
    protocol_version: Option<ProtocolVersion>,
    /// Reject datagrams larger than this many bytes.
    #[arg(long, global = true)]
    max_packet_bytes: Option<usize>,
    /// Reject blobs and texts declaring more than this many bytes.
    #[arg(long, global = true)]
    max_blob_len: Option<usize>,
    /// Reject acknowledgements listing more than this many ids.
    #[arg(long, global = true)]
    max_pdu_ids: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect datagram headers and sizes.
    Inspect {
        /// Path to a datagram file or a directory of them.
        datagram_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected datagrams.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected datagrams (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Decode a datagram into structured output.
    Decode {
        /// Path to the datagram bytes.
        datagram_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
    /// Encode a JSON message description into a datagram.
    Encode {
        /// JSON file holding one message.
        json_file: PathBuf,
        /// Where to write the datagram bytes.
        out_file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let codec = codec_from_overrides(
        cli.codec.protocol_version,
        cli.codec.max_packet_bytes,
        cli.codec.max_blob_len,
        cli.codec.max_pdu_ids,
    );
    debug!(version = %codec.version(), limits = ?codec.limits(), "codec configured");

    match cli.command {
        Command::Inspect {
            datagram_path,
            glob,
            sort,
            limit,
        } => {
            if datagram_path.is_dir() {
                let largest_first = matches!(sort, Some(InspectSort::Size));
                let files = list_datagrams(&datagram_path, glob.as_deref(), largest_first)?;
                let shown = limit.unwrap_or(if largest_first { 10 } else { usize::MAX });
                for file in files.iter().take(shown) {
                    println!("== {} ({} bytes) ==", file.path.display(), file.size);
                    inspect_file(&file.path, &codec)?;
                }
            } else {
                inspect_file(&datagram_path, &codec)?;
            }
        }
        Command::Decode {
            datagram_file,
            format,
        } => {
            let bytes = fs::read(&datagram_file)
                .with_context(|| format!("read datagram {}", datagram_file.display()))?;
            let output = decode_datagram(&bytes, &codec)?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    println!("{}", format_decode_pretty(&output));
                }
            }
        }
        Command::Encode {
            json_file,
            out_file,
        } => {
            let json = fs::read_to_string(&json_file)
                .with_context(|| format!("read message {}", json_file.display()))?;
            let bytes = encode_json(&json, &codec)?;
            fs::write(&out_file, &bytes)
                .with_context(|| format!("write datagram {}", out_file.display()))?;
            println!("wrote {} bytes to {}", bytes.len(), out_file.display());
        }
    }
    Ok(())
}

fn inspect_file(path: &Path, codec: &RlsCodec) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("read datagram {}", path.display()))?;
    match inspect_datagram(&bytes, codec) {
        Ok(report) => println!("{}", format_inspect(&report)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "header rejected");
            println!("header error: {err}");
        }
    }
    Ok(())
}
