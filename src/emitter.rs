use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::reader;

/// What happened to one input file. Computed once per path and consumed
/// immediately; nothing is retained across invocations.
#[derive(Debug)]
pub enum FileOutcome {
    #[allow(dead_code)]
    Emitted(u64),
    Unreadable,
}

#[derive(Debug, Default)]
pub struct EmitSummary {
    pub emitted: usize,
    pub unreadable: usize,
}

impl EmitSummary {
    pub fn all_emitted(&self) -> bool {
        self.unreadable == 0
    }
}

/// Emits up to `limit` lines from each file to `out`, in the given order.
///
/// With more than one file, each emitted file gets a `==> path <==` header
/// and consecutive emitted blocks are separated by one blank line. A file
/// that cannot be read is reported on `err` and skipped; it produces no
/// header and no separator, and the remaining files are still processed.
pub fn emit<W: Write, E: Write>(
    files: &[PathBuf],
    limit: u64,
    out: &mut W,
    err: &mut E,
) -> Result<EmitSummary> {
    let with_headers = files.len() > 1;
    let mut summary = EmitSummary::default();
    let mut first_block = true;

    for path in files {
        let outcome = match reader::open_readable(path) {
            Err(e) => {
                writeln!(err, "rhead: {}", e)?;
                FileOutcome::Unreadable
            }
            Ok(mut file) => {
                if with_headers {
                    if !first_block {
                        writeln!(out)?;
                    }
                    writeln!(out, "==> {} <==", path.display())?;
                }
                first_block = false;

                match reader::copy_lines(&mut file, limit, out) {
                    Ok(n) => FileOutcome::Emitted(n),
                    Err(e) => {
                        writeln!(err, "rhead: error reading \"{}\": {}", path.display(), e)?;
                        FileOutcome::Unreadable
                    }
                }
            }
        };

        match outcome {
            FileOutcome::Emitted(_) => summary.emitted += 1,
            FileOutcome::Unreadable => summary.unreadable += 1,
        }
    }

    Ok(summary)
}
