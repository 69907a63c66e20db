use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{HeadError, Result};

/// Opens a path for buffered reading, verifying it is a regular file.
///
/// The returned handle is meant to live only for the single file's
/// processing step; callers drop it as soon as that file is done.
pub fn open_readable(path: &Path) -> Result<BufReader<File>> {
    let not_readable = || HeadError::NotReadable {
        path: path.display().to_string(),
    };

    let meta = fs::metadata(path).map_err(|_| not_readable())?;
    if !meta.is_file() {
        return Err(not_readable());
    }

    let file = File::open(path).map_err(|_| not_readable())?;
    Ok(BufReader::new(file))
}

/// Copies up to `limit` lines from `reader` to `out` and returns how many
/// were written. Stops without reading the rest of the input once the
/// limit is reached.
pub fn copy_lines<R: BufRead, W: Write>(
    reader: &mut R,
    limit: u64,
    out: &mut W,
) -> io::Result<u64> {
    let mut line = Vec::new();
    let mut written = 0;

    while written < limit {
        line.clear();
        // read_until keeps each line's own terminator, so CRLF and a
        // missing final newline pass through verbatim
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        out.write_all(&line)?;
        written += 1;
    }

    Ok(written)
}
