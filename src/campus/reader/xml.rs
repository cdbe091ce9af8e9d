// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};

use super::model::Record;
use crate::campus::LoadError;
use crate::{Edge, Location};

/// Parser is a trait for objects which can parse XML.
///
/// This trait only exists to fix the mismatch of
/// [quick_xml::Reader::read_event] when working on buffered data
/// and [quick_xml::Reader::read_event_into] when working on IO.
pub(super) trait Parser {
    fn read_event<'a>(&'a mut self) -> quick_xml::Result<Event<'a>>;
}

/// IoParser implements [Parser] over an [std::io::BufRead].
pub(super) struct IoParser<R: io::BufRead>(quick_xml::Reader<R>, Vec<u8>);

impl<R: io::BufRead> IoParser<R> {
    #[inline]
    fn new(reader: R) -> Self {
        Self(quick_xml::Reader::from_reader(reader), Vec::default())
    }
}

impl<R: io::BufRead> Parser for IoParser<R> {
    #[inline]
    fn read_event<'a>(&'a mut self) -> quick_xml::Result<Event<'a>> {
        self.1.clear();
        self.0.read_event_into(&mut self.1)
    }
}

/// BufParser implements [Parser] over a slice of bytes (`&[u8]`).
pub(super) struct BufParser<'a>(quick_xml::Reader<&'a [u8]>);

impl<'a> BufParser<'a> {
    #[inline]
    fn new(data: &'a [u8]) -> Self {
        Self(quick_xml::Reader::from_reader(data))
    }
}

impl<'a> Parser for BufParser<'a> {
    #[inline]
    fn read_event<'b>(&'b mut self) -> quick_xml::Result<Event<'b>> {
        self.0.read_event()
    }
}

/// Reader reads campus [Records](Record) from an XML document.
///
/// `building` and `path` elements are recognized wherever they appear;
/// all other elements and unknown attributes are skipped. The first
/// error ends the stream.
pub(super) struct Reader<P: Parser> {
    parser: P,
    eof: bool,
}

impl<P: Parser> Reader<P> {
    #[inline]
    fn new(parser: P) -> Self {
        Self { parser, eof: false }
    }
}

impl<'a> Reader<BufParser<'a>> {
    #[inline]
    pub(super) fn from_buffer(data: &'a [u8]) -> Self {
        Self::new(BufParser::new(data))
    }
}

impl<R: io::BufRead> Reader<IoParser<R>> {
    #[inline]
    pub(super) fn from_io(reader: R) -> Self {
        Self::new(IoParser::new(reader))
    }
}

impl<P: Parser> Iterator for Reader<P> {
    type Item = Result<Record, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.eof {
            let event = match self.parser.read_event() {
                Ok(e) => e,
                Err(e) => {
                    self.eof = true;
                    return Some(Err(e.into()));
                }
            };

            let record = match event {
                Event::Start(start) | Event::Empty(start) => match start.local_name().as_ref() {
                    b"building" => Some(parse_building(&start).map(Record::Building)),
                    b"path" => Some(parse_path(&start).map(Record::Path)),
                    _ => None,
                },

                Event::Eof => {
                    self.eof = true;
                    None
                }

                _ => None,
            };

            if let Some(record) = record {
                if record.is_err() {
                    self.eof = true;
                }
                return Some(record);
            }
        }

        None
    }
}

fn parse_building(start: &BytesStart<'_>) -> Result<Location, LoadError> {
    const ELEMENT: &str = "building";

    let mut id: Option<i64> = None;
    let mut name: Option<String> = None;
    let mut x: Option<f64> = None;
    let mut y: Option<f64> = None;
    let mut qr_id: Option<String> = None;

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"id" => id = Some(parse_attribute(ELEMENT, "id", &value)?),
            b"name" => name = Some(value.into_owned()),
            b"x" => x = Some(parse_attribute(ELEMENT, "x", &value)?),
            b"y" => y = Some(parse_attribute(ELEMENT, "y", &value)?),
            b"qr" => qr_id = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(Location {
        id: required(ELEMENT, "id", id)?,
        name: required(ELEMENT, "name", name)?,
        x_coordinate: required(ELEMENT, "x", x)?,
        y_coordinate: required(ELEMENT, "y", y)?,
        qr_id,
    })
}

fn parse_path(start: &BytesStart<'_>) -> Result<Edge, LoadError> {
    const ELEMENT: &str = "path";

    let mut from: Option<i64> = None;
    let mut to: Option<i64> = None;
    let mut distance: Option<f64> = None;
    let mut oneway = false;

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"from" => from = Some(parse_attribute(ELEMENT, "from", &value)?),
            b"to" => to = Some(parse_attribute(ELEMENT, "to", &value)?),
            b"distance" => distance = Some(parse_attribute(ELEMENT, "distance", &value)?),
            b"oneway" => oneway = parse_flag(ELEMENT, "oneway", &value)?,
            _ => {}
        }
    }

    Ok(Edge {
        from_id: required(ELEMENT, "from", from)?,
        to_id: required(ELEMENT, "to", to)?,
        distance: required(ELEMENT, "distance", distance)?,
        oneway,
    })
}

fn parse_attribute<T: FromStr>(
    element: &'static str,
    attribute: &str,
    value: &str,
) -> Result<T, LoadError> {
    value
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidRecord {
            element,
            reason: format!("invalid {} value '{}'", attribute, value),
        })
}

fn parse_flag(element: &'static str, attribute: &str, value: &str) -> Result<bool, LoadError> {
    match value.trim() {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" | "" => Ok(false),
        _ => Err(LoadError::InvalidRecord {
            element,
            reason: format!("invalid {} value '{}'", attribute, value),
        }),
    }
}

fn required<T>(element: &'static str, attribute: &str, value: Option<T>) -> Result<T, LoadError> {
    value.ok_or_else(|| LoadError::InvalidRecord {
        element,
        reason: format!("missing '{}' attribute", attribute),
    })
}
