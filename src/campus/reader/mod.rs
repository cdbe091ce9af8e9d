// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use super::{Campus, CampusBuilder, LoadError};
use model::Record;

mod model;
mod xml;

/// Format of the input campus dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// Unknown format - guess the compression based on the leading bytes
    #[default]
    Unknown,

    /// Force uncompressed XML
    Xml,

    /// Force XML with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    XmlGz,

    /// Force XML with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    XmlBz2,
}

impl FileFormat {
    /// Number of leading bytes inspected by [FileFormat::detect].
    pub const MAGIC_LEN: usize = 3;

    /// Guesses the format from the first bytes of a dataset.
    /// Anything which is neither gzip nor bzip2 is assumed to be plain XML.
    pub fn detect(magic: &[u8]) -> Self {
        if magic.starts_with(&[0x1F, 0x8B]) {
            Self::XmlGz
        } else if magic.starts_with(b"BZh") {
            Self::XmlBz2
        } else {
            Self::Xml
        }
    }
}

/// Additional controls for interpreting a dataset as a [Campus].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Format of the input data.
    pub file_format: FileFormat,

    /// Treat paths with `oneway="yes"` as traversable only from `from` to `to`.
    /// When false, every path is undirected.
    pub respect_oneway: bool,
}

fn load_records<I>(options: &Options, records: I) -> Result<Campus, LoadError>
where
    I: Iterator<Item = Result<Record, LoadError>>,
{
    let mut builder = CampusBuilder::default();
    builder.respect_oneway(options.respect_oneway);

    for record in records {
        match record? {
            Record::Building(location) => builder.add_location(location),
            Record::Path(edge) => builder.add_edge(edge),
        }
    }

    Ok(builder.build()?)
}

/// Parse a [Campus] from a reader as per the provided [Options].
///
/// The provided stream will be automatically wrapped in a buffered reader when needed.
pub fn load_from_io<R: io::Read>(options: &Options, mut reader: R) -> Result<Campus, LoadError> {
    match options.file_format {
        FileFormat::Unknown => {
            // Readers may return fewer bytes than asked for,
            // so keep reading until the magic is complete or the stream ends.
            let mut magic = Vec::with_capacity(FileFormat::MAGIC_LEN);
            reader
                .by_ref()
                .take(FileFormat::MAGIC_LEN as u64)
                .read_to_end(&mut magic)?;

            let file_format = FileFormat::detect(&magic);
            load_with_format(options, file_format, io::Cursor::new(magic).chain(reader))
        }

        other => load_with_format(options, other, reader),
    }
}

fn load_with_format<R: io::Read>(
    options: &Options,
    file_format: FileFormat,
    reader: R,
) -> Result<Campus, LoadError> {
    debug!("reading campus dataset as {:?}", file_format);
    let b = io::BufReader::new(reader);

    match file_format {
        FileFormat::Unknown | FileFormat::Xml => load_records(options, xml::Reader::from_io(b)),

        FileFormat::XmlGz => {
            let d = flate2::read::MultiGzDecoder::new(b);
            load_records(options, xml::Reader::from_io(io::BufReader::new(d)))
        }

        FileFormat::XmlBz2 => {
            let d = bzip2::read::MultiBzDecoder::new(b);
            load_records(options, xml::Reader::from_io(io::BufReader::new(d)))
        }
    }
}

/// Parse a [Campus] from a file at the provided path as per the provided [Options].
pub fn load_from_file<P: AsRef<Path>>(options: &Options, path: P) -> Result<Campus, LoadError> {
    let f = File::open(path)?;
    load_from_io(options, f)
}

/// Parse a [Campus] from an in-memory buffer as per the provided [Options].
pub fn load_from_buffer(options: &Options, data: &[u8]) -> Result<Campus, LoadError> {
    let file_format = match options.file_format {
        FileFormat::Unknown => FileFormat::detect(data),
        other => other,
    };

    if file_format == FileFormat::Xml {
        // Fast path is available for in-memory XML data
        load_records(options, xml::Reader::from_buffer(data))
    } else {
        // Wrap the buffer in a cursor and use the IO path
        load_from_io(options, io::Cursor::new(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_compression() {
        assert_eq!(FileFormat::detect(&[0x1F, 0x8B, 0x08]), FileFormat::XmlGz);
        assert_eq!(FileFormat::detect(b"BZh91AY"), FileFormat::XmlBz2);
        assert_eq!(FileFormat::detect(b"<?xml"), FileFormat::Xml);
        assert_eq!(FileFormat::detect(b""), FileFormat::Xml);
    }
}
