//! Writing of command results.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;

/// Writes `value` as pretty printed JSON to `output`, or to stdout if no output is given.
///
/// An existing file at `output` is only replaced once the whole value has been written.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = AtomicWriteFile::open(path)
                .with_context(|| format!("opening output {path:?}"))?;
            write_json_to(&mut file, value).with_context(|| format!("writing output {path:?}"))?;
            file.commit()
                .with_context(|| format!("committing output {path:?}"))?;
            log::info!("wrote {path:?}");
        }
        None => {
            write_json_to(std::io::stdout().lock(), value).with_context(|| "writing to stdout")?;
        }
    }
    Ok(())
}

fn write_json_to<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
