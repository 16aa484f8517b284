//! Put command implementation.

use crate::error::{CliError, CliResult};
use bindiff_codec::{decode_envelope, encode_binary};
use bindiff_storage::PayloadStore;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Where the payload of a `put` comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum PayloadSource {
    /// Literal text.
    Data(String),
    /// JSON chunk list.
    Envelope(String),
    /// Binary file, stored base64-encoded.
    File(PathBuf),
}

impl PayloadSource {
    /// Picks the single source given on the command line.
    pub fn from_args(
        data: Option<String>,
        envelope: Option<String>,
        file: Option<PathBuf>,
    ) -> CliResult<Self> {
        match (data, envelope, file) {
            (Some(d), None, None) => Ok(Self::Data(d)),
            (None, Some(e), None) => Ok(Self::Envelope(e)),
            (None, None, Some(f)) => Ok(Self::File(f)),
            (None, None, None) => Err(CliError::usage(
                "one of --data, --envelope or --file is required",
            )),
            _ => Err(CliError::usage(
                "--data, --envelope and --file are mutually exclusive",
            )),
        }
    }

    /// Produces the payload string to store.
    pub fn resolve(self) -> CliResult<String> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Envelope(json) => Ok(decode_envelope(&json)?),
            Self::File(path) => {
                let bytes =
                    fs::read(&path).map_err(|source| CliError::ReadInput { path, source })?;
                Ok(encode_binary(&bytes))
            }
        }
    }
}

/// Runs the put command.
pub fn run(
    store: &dyn PayloadStore,
    id: &str,
    slot: &str,
    source: PayloadSource,
    out: &mut dyn Write,
) -> CliResult<()> {
    let payload = source.resolve()?;
    store.put_named(id, slot, &payload)?;
    info!(id, slot, len = payload.len(), "stored payload");
    writeln!(out, "stored {} bytes in {id}/{}", payload.len(), slot.to_ascii_lowercase())?;
    Ok(())
}
