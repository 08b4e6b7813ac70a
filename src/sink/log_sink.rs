//! Streaming document writer: frames records as a JSON array or CSV table so that the
//! bytes written so far are always a valid prefix of a well-formed document.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::OutputFormat;
use crate::error::{ScanError, ScanResult};
use crate::record::{CSV_HEADER, FileRecord};
use crate::utils::config::Framing;

/// Byte destination of a [`LogSink`]. `finish` releases whatever container and handle
/// sit behind the stream; it runs after the text stream has been flushed.
pub trait SinkTarget: Write {
    fn finish(&mut self) -> io::Result<()>;
}

impl SinkTarget for Vec<u8> {
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Serializing log sink. Dropping an unclosed sink finalizes it as not completed.
pub struct LogSink<W: SinkTarget> {
    stream: Option<BufWriter<W>>,
    format: OutputFormat,
    appended: u64,
    location: PathBuf,
}

impl<W: SinkTarget> LogSink<W> {
    /// Wrap `target` in a text stream and write the format prologue.
    pub fn new(target: W, format: OutputFormat, location: &Path) -> ScanResult<Self> {
        let mut stream = BufWriter::new(target);
        match format {
            OutputFormat::Json => writeln!(stream, "{}", Framing::JSON_PROLOGUE)?,
            OutputFormat::Csv => writeln!(stream, "{}", CSV_HEADER)?,
        }
        Ok(LogSink {
            stream: Some(stream),
            format,
            appended: 0,
            location: location.to_path_buf(),
        })
    }

    /// Number of records written so far.
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Write one record. JSON records after the first are preceded by a separator.
    pub fn append(&mut self, record: &FileRecord) -> ScanResult<()> {
        let first = self.appended == 0;
        let format = self.format;
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| io::Error::other("log sink already closed"))?;
        match format {
            OutputFormat::Json => {
                if !first {
                    stream.write_all(b",")?;
                }
                serde_json::to_writer(&mut *stream, record).map_err(io::Error::from)?;
                stream.write_all(b"\n")?;
            }
            OutputFormat::Csv => writeln!(stream, "{}", record.to_csv_row())?,
        }
        self.appended += 1;
        Ok(())
    }

    /// Write the epilogue and release stream, container and file in that order.
    /// `completed` adds the CSV trailer; JSON framing is closed either way.
    pub fn close(mut self, completed: bool) -> ScanResult<W> {
        self.finalize(completed)
    }

    fn finalize(&mut self, completed: bool) -> ScanResult<W> {
        let Some(mut stream) = self.stream.take() else {
            return Err(self.finalization_error(io::Error::other("log sink already closed")));
        };
        let epilogue = match self.format {
            OutputFormat::Json => writeln!(stream, "{}", Framing::JSON_EPILOGUE),
            OutputFormat::Csv if completed => writeln!(stream, "{}", Framing::CSV_TRAILER),
            OutputFormat::Csv => Ok(()),
        };
        epilogue.map_err(|e| self.finalization_error(e))?;
        let mut target = stream
            .into_inner()
            .map_err(|e| self.finalization_error(e.into_error()))?;
        target.finish().map_err(|e| self.finalization_error(e))?;
        Ok(target)
    }

    fn finalization_error(&self, source: io::Error) -> ScanError {
        ScanError::SinkFinalization {
            path: self.location.clone(),
            source,
        }
    }
}

impl<W: SinkTarget> Drop for LogSink<W> {
    fn drop(&mut self) {
        if self.stream.is_some()
            && let Err(e) = self.finalize(false)
        {
            warn!("{}", e);
        }
    }
}
