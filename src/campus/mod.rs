// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Loading and validation of campus data.

mod builder;
mod demo;
mod error;
mod reader;

pub use builder::CampusBuilder;
pub use demo::{demo, demo_qr_id};
pub use error::{LoadError, ValidationError};
pub use reader::{load_from_buffer, load_from_file, load_from_io, FileFormat, Options};

use crate::{BuildingRegistry, PathGraph, QrResolver, RoutingEngine};

/// A fully validated campus: all known buildings and the walkways between them.
///
/// A Campus can only be obtained from a [CampusBuilder] (directly, or through
/// one of the `load_from_*` functions), and is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Campus {
    registry: BuildingRegistry,
    graph: PathGraph,
}

impl Campus {
    pub fn builder() -> CampusBuilder {
        CampusBuilder::default()
    }

    pub fn registry(&self) -> &BuildingRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &PathGraph {
        &self.graph
    }

    pub fn router(&self) -> RoutingEngine<'_> {
        RoutingEngine::new(self)
    }

    pub fn qr_resolver(&self) -> QrResolver<'_> {
        QrResolver::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteError;

    macro_rules! assert_route {
        ($campus:expr, $from:literal, $to:literal, $distance:expr, [$($name:literal),+]) => {{
            let router = $campus.router();
            let route = router.route($from, $to).unwrap();
            let locations = router.locations(&route);
            let names: Vec<&str> = locations
                .iter()
                .map(|l| l.name.as_str())
                .collect();
            assert_eq!(names, vec![$($name),+]);
            assert_almost_eq!(route.total_distance, $distance);
        }};
    }

    const CAMPUS_XML: &[u8] = include_bytes!("reader/test_fixtures/campus.xml");
    const CAMPUS_XML_GZ: &[u8] = include_bytes!("reader/test_fixtures/campus.xml.gz");
    const CAMPUS_XML_BZ2: &[u8] = include_bytes!("reader/test_fixtures/campus.xml.bz2");

    fn check_fixture_campus(campus: &Campus) {
        assert_eq!(campus.registry().len(), 9);
        assert_eq!(campus.graph().len(), 9);
        assert_eq!(campus.graph().arc_count(), 22);

        assert_route!(
            campus,
            "Library",
            "Hostel",
            33.0,
            ["Library", "Block A", "Lab 1", "Lab 2", "Hostel"]
        );

        assert_eq!(
            campus.router().route("Library", "Observatory"),
            Err(RouteError::NoRouteFound {
                start: "Library".to_string(),
                end: "Observatory".to_string(),
            }),
        );

        assert_eq!(
            campus.qr_resolver().resolve("QR-LAB-2").unwrap().id,
            7,
        );
    }

    #[test]
    fn load_xml() {
        let options = Options {
            file_format: FileFormat::Xml,
            respect_oneway: false,
        };
        check_fixture_campus(&load_from_buffer(&options, CAMPUS_XML).unwrap());
    }

    #[test]
    fn load_xml_gz() {
        let options = Options {
            file_format: FileFormat::XmlGz,
            respect_oneway: false,
        };
        check_fixture_campus(&load_from_buffer(&options, CAMPUS_XML_GZ).unwrap());
    }

    #[test]
    fn load_xml_bz2_from_io() {
        let options = Options {
            file_format: FileFormat::XmlBz2,
            respect_oneway: false,
        };
        let campus = load_from_io(&options, std::io::Cursor::new(CAMPUS_XML_BZ2)).unwrap();
        check_fixture_campus(&campus);
    }

    #[test]
    fn load_detects_format() {
        let options = Options::default();
        for data in [CAMPUS_XML, CAMPUS_XML_GZ, CAMPUS_XML_BZ2] {
            check_fixture_campus(&load_from_buffer(&options, data).unwrap());
            check_fixture_campus(&load_from_io(&options, std::io::Cursor::new(data)).unwrap());
        }
    }

    /// Hands out at most one byte per read call.
    struct OneByte<R>(R);

    impl<R: std::io::Read> std::io::Read for OneByte<R> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = buf.len().min(1);
            self.0.read(&mut buf[..n])
        }
    }

    #[test]
    fn load_detects_format_from_short_reads() {
        let options = Options::default();
        for data in [CAMPUS_XML, CAMPUS_XML_GZ, CAMPUS_XML_BZ2] {
            let campus = load_from_io(&options, OneByte(std::io::Cursor::new(data))).unwrap();
            check_fixture_campus(&campus);
        }
    }

    #[test]
    fn load_respecting_oneway() {
        let options = Options {
            file_format: FileFormat::Unknown,
            respect_oneway: true,
        };
        let campus = load_from_buffer(&options, CAMPUS_XML).unwrap();
        assert_eq!(campus.graph().arc_count(), 21);

        assert_route!(
            campus,
            "Library",
            "Hostel",
            37.0,
            ["Library", "Admin Office", "Canteen", "Hostel"]
        );
        assert_route!(
            campus,
            "Hostel",
            "Library",
            33.0,
            ["Hostel", "Lab 2", "Lab 1", "Block A", "Library"]
        );
    }

    #[test]
    fn load_rejects_dangling_paths() {
        const DATA: &[u8] = br#"<campus>
            <building id="1" name="A" x="0" y="0"/>
            <building id="2" name="B" x="1" y="0"/>
            <path from="1" to="2" distance="5"/>
            <path from="2" to="3" distance="3"/>
        </campus>"#;

        let err = load_from_buffer(&Options::default(), DATA).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Validation(ValidationError::DanglingReference { missing: 3, .. })
        ));
    }

    #[test]
    fn load_rejects_duplicate_names() {
        const DATA: &[u8] = br#"<campus>
            <building id="1" name="Library" x="0" y="0"/>
            <building id="2" name="library" x="1" y="0"/>
        </campus>"#;

        let err = load_from_buffer(&Options::default(), DATA).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Validation(ValidationError::DuplicateName(_))
        ));
    }

    #[test]
    fn load_rejects_zero_id() {
        const DATA: &[u8] = br#"<campus><building id="0" name="A" x="0" y="0"/></campus>"#;

        let err = load_from_buffer(&Options::default(), DATA).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Validation(ValidationError::InvalidId(0))
        ));
    }

    #[test]
    fn load_missing_file() {
        let err = load_from_file(&Options::default(), "does/not/exist.xml").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
