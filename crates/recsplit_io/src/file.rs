//! File-based input source and piece sinks.

use crate::error::{IoError, IoResult};
use crate::sink::{PieceFactory, PieceSink};
use crate::source::InputSource;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// A file-based input source.
///
/// Opens the input read-only and captures its length once at open time.
/// The engine's byte accounting assumes the file does not change size
/// while the run is in progress.
///
/// # Example
///
/// ```no_run
/// use recsplit_io::{FileSource, InputSource};
/// use std::path::Path;
///
/// let mut source = FileSource::open(Path::new("input.fa")).unwrap();
/// println!("{} bytes to split", source.total_len());
/// ```
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    file: File,
    len: u64,
}

impl FileSource {
    /// Opens a file as an input source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its metadata
    /// cannot be read.
    pub fn open(path: &Path) -> IoResult<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        Ok(Self {
            path: path.to_path_buf(),
            file,
            len,
        })
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for FileSource {
    fn total_len(&self) -> u64 {
        self.len
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        // A single read may legally return short; keep going until the
        // buffer is full or the file ends.
        let mut filled = 0;
        while filled < buf.len() {
            let got = self.file.read(&mut buf[filled..])?;
            if got == 0 {
                break;
            }
            filled += got;
        }
        Ok(filled)
    }
}

/// Creates piece files named `<base>.<index>` inside an output directory.
///
/// The index is zero-padded to the decimal width of the highest piece
/// number, so a 10-piece run produces `input.fa.0` through `input.fa.9`
/// and an 11-piece run produces `input.fa.00` through `input.fa.10`.
#[derive(Debug)]
pub struct FilePieceFactory {
    dir: PathBuf,
    base: String,
    width: usize,
}

impl FilePieceFactory {
    /// Creates a factory writing into `dir` with file name base `base`.
    ///
    /// `num_pieces` determines the zero-padding width of piece indices.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, base: impl Into<String>, num_pieces: u64) -> Self {
        Self {
            dir: dir.into(),
            base: base.into(),
            width: index_width(num_pieces),
        }
    }

    /// Returns the output path for piece `index`.
    #[must_use]
    pub fn piece_path(&self, index: u64) -> PathBuf {
        self.dir
            .join(format!("{}.{:0width$}", self.base, index, width = self.width))
    }
}

impl PieceFactory for FilePieceFactory {
    type Sink = FilePieceSink;

    fn create_piece(&mut self, index: u64) -> IoResult<Self::Sink> {
        let path = self.piece_path(index);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|err| {
                if err.kind() == io::ErrorKind::AlreadyExists {
                    IoError::AlreadyExists { path: path.clone() }
                } else {
                    IoError::Io(err)
                }
            })?;

        Ok(FilePieceSink {
            path,
            file,
            written: 0,
        })
    }
}

/// An open piece file being written.
#[derive(Debug)]
pub struct FilePieceSink {
    path: PathBuf,
    file: File,
    written: u64,
}

impl FilePieceSink {
    /// Returns the path of the piece being written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PieceSink for FilePieceSink {
    fn write_chunk(&mut self, data: &[u8]) -> IoResult<usize> {
        self.file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(data.len())
    }

    fn finalize(mut self) -> IoResult<u64> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(self.written)
    }
}

/// Decimal digits needed to write down `num_pieces - 1`.
fn index_width(num_pieces: u64) -> usize {
    let mut highest = num_pieces.saturating_sub(1);
    if highest == 0 {
        return 1;
    }

    let mut digits = 0;
    while highest > 0 {
        digits += 1;
        highest /= 10;
    }

    digits
}
