//! Validates the invocation and produces the requested run of filler bytes.
//! All validation happens before the first byte is written, so a failed
//! invocation never leaves partial output behind.

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use std::io::Write;

/// Every generated byte is this one. Callers care about the output's length,
/// not its content, but the content must be stable from run to run.
const FILL_BYTE: u8 = b'a';

/// How many bytes we hand to the writer at a time. Keeps large requests from
/// needing a request-sized buffer.
const CHUNK_SIZE: usize = 8192;

/// Returns the single positional argument, or an error stating how many
/// arguments were actually supplied.
pub(crate) fn expect_single_arg(args: &[String]) -> Result<&str> {
    match args {
        [single] => Ok(single),
        _ => bail!("only 1 argument expected ({} given)", args.len()),
    }
}

/// Parses the requested output length. Negative and non-numeric text is
/// rejected here.
pub(crate) fn parse_length(raw: &str) -> Result<u64> {
    raw.parse()
        .with_context(|| format!("invalid length `{raw}`: expected a non-negative integer"))
}

/// Writes exactly `length` filler bytes to `writer`, then flushes it.
pub(crate) fn write_filler(writer: &mut impl Write, length: u64) -> Result<()> {
    let chunk = [FILL_BYTE; CHUNK_SIZE];
    let mut remaining = length;
    while remaining > 0 {
        let step = remaining.min(CHUNK_SIZE as u64) as usize;
        writer
            .write_all(&chunk[..step])
            .context("Failed to write output")?;
        remaining -= step as u64;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(())
}
