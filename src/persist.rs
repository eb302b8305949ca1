//! Flat-file persistence for [`MsgRing`].
//!
//! Format: plain text, one record per line, oldest to newest; each line is
//! the payload's decimal value and nothing else. No header, no count, no
//! checksum. Timestamps do not round-trip — [`load`] stamps every record
//! with the instant it was read back.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu, ensure};
use time::OffsetDateTime;
use tracing::debug;

use crate::message::{Message, ParseLineError};
use crate::ring::MsgRing;

/// A save or load operation that could not complete.
///
/// All variants are recoverable: the ring is untouched on any load failure
/// and fully intact on any save failure.
#[derive(Debug, Snafu)]
pub enum PersistError {
    /// The file could not be created for writing.
    #[snafu(display("could not open {} for writing: {source}", path.display()))]
    Create {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The file could not be opened for reading.
    #[snafu(display("could not open {} for reading: {source}", path.display()))]
    Open {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A record could not be written out.
    #[snafu(display("could not write record to {}: {source}", path.display()))]
    WriteRecord {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A line could not be read back.
    #[snafu(display("could not read from {}: {source}", path.display()))]
    ReadRecord {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A line did not parse as a payload byte.
    #[snafu(display("malformed record at {}:{line_no}: {source}", path.display()))]
    Malformed {
        /// Target path.
        path: PathBuf,
        /// 1-based line number of the offending record.
        line_no: usize,
        /// The parse failure.
        source: ParseLineError,
    },

    /// The file holds more records than the ring can hold.
    #[snafu(display("file holds {records} records but ring capacity is {capacity}"))]
    CapacityExceeded {
        /// Records found in the file.
        records: usize,
        /// Ring capacity.
        capacity: usize,
    },
}

/// Write every occupied message to `path`, oldest to newest, truncating any
/// existing content. Returns the number of records written.
pub fn save<const N: usize>(ring: &MsgRing<N>, path: &Path) -> Result<usize, PersistError> {
    let file = File::create(path).context(CreateSnafu { path })?;
    let mut out = BufWriter::new(file);

    let mut written = 0;
    for (_, msg) in ring.iter() {
        writeln!(out, "{}", msg.to_line()).context(WriteRecordSnafu { path })?;
        written += 1;
    }
    out.flush().context(WriteRecordSnafu { path })?;

    debug!(records = written, path = %path.display(), "saved ring to disk");
    Ok(written)
}

/// Read `path` back into a fresh ring, stamping every record with `now`.
///
/// Records fill the ring from slot 0 in file order, so the ring's tail is 0
/// and its length is the exact record count. Blank lines are skipped; a
/// malformed line fails the whole load, and a file with more records than
/// `N` is rejected rather than silently truncated.
pub fn load<const N: usize>(path: &Path, now: OffsetDateTime) -> Result<MsgRing<N>, PersistError> {
    let file = File::open(path).context(OpenSnafu { path })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context(ReadRecordSnafu { path })?;
        if line.trim().is_empty() {
            continue;
        }
        let msg = Message::from_line(&line, now).context(MalformedSnafu {
            path,
            line_no: idx + 1,
        })?;
        records.push(msg);
    }

    ensure!(
        records.len() <= N,
        CapacityExceededSnafu {
            records: records.len(),
            capacity: N,
        }
    );

    let mut ring = MsgRing::<N>::new();
    for msg in &records {
        ring.produce(msg.payload(), msg.created_at());
    }

    debug!(records = ring.len(), path = %path.display(), "loaded ring from disk");
    Ok(ring)
}
