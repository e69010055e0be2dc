//! Round-trip tests: decode(encode(r)) == r for every record type, and
//! encode(decode(encode(r))) == encode(r) byte-wise.

mod common;

use common::*;
use dxfrec::entities::*;
use dxfrec::types::Vector3;
use dxfrec::{Color, DxfVersion, Handle};
use proptest::prelude::*;

#[test]
fn point_roundtrip() {
    let mut point = Point::at(Vector3::new(1.5, -2.25, 3.0));
    point.common.handle = Handle::new(0x10);
    point.common.set_thickness(1.0).unwrap();
    assert_roundtrip(&point, DxfVersion::AC1032);
}

#[test]
fn line_roundtrip() {
    let mut line = Line::from_coords(0.0, 0.0, 0.0, 12.5, 7.25, -3.0);
    line.common.handle = Handle::new(0x11);
    line.common.color = Color::GREEN;
    assert_roundtrip(&line, DxfVersion::AC1032);
}

#[test]
fn circle_roundtrip() {
    let mut circle = Circle::from_center_radius(Vector3::new(4.0, 4.0, 0.0), 2.5);
    circle.common.handle = Handle::new(0x12);
    assert_roundtrip(&circle, DxfVersion::AC1032);
}

#[test]
fn arc_roundtrip() {
    let mut arc =
        Arc::from_center_radius_angles(Vector3::new(1.0, 1.0, 0.0), 5.0, 30.0, 120.0);
    arc.common.handle = Handle::new(0x13);
    assert_roundtrip(&arc, DxfVersion::AC1032);
}

#[test]
fn solid_roundtrip_with_full_common_data() {
    assert_roundtrip(&sample_solid(), DxfVersion::AC1032);
}

#[test]
fn trace_roundtrip() {
    let mut trace = Trace::from_corners(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(4.0, 1.0, 0.0),
    );
    trace.common.handle = Handle::new(0x15);
    assert_roundtrip(&trace, DxfVersion::AC1032);
}

#[test]
fn ellipse_roundtrip() {
    let mut ellipse = Ellipse::from_center_axes(
        Vector3::new(2.0, 3.0, 0.0),
        Vector3::new(8.0, 0.0, 0.0),
        0.5,
    );
    ellipse.common.handle = Handle::new(0x16);
    ellipse.start_parameter = 0.5;
    ellipse.end_parameter = 4.0;
    assert_roundtrip(&ellipse, DxfVersion::AC1032);
}

#[test]
fn spline_roundtrip_preserves_sequences() {
    let spline = sample_spline();
    let mut copy = spline.clone();
    let text = encode(&mut copy, DxfVersion::AC1032);
    let decoded: Spline = decode(&text, DxfVersion::AC1032);

    // File order of the repeating groups survives the trip.
    assert_eq!(decoded.knots, spline.knots);
    assert_eq!(decoded.weights, spline.weights);
    assert_eq!(decoded.control_points, spline.control_points);
    assert_eq!(decoded.fit_points, spline.fit_points);
    assert_roundtrip(&spline, DxfVersion::AC1032);
}

#[test]
fn solid3d_roundtrip_preserves_data_lines() {
    let solid = sample_solid3d();
    let mut copy = solid.clone();
    let text = encode(&mut copy, DxfVersion::AC1032);
    let decoded: Solid3D = decode(&text, DxfVersion::AC1032);

    assert_eq!(decoded.proprietary_data, solid.proprietary_data);
    assert!(decoded.proprietary_data[2].continuation);
    assert_roundtrip(&solid, DxfVersion::AC1032);
}

#[test]
fn region_and_body_roundtrip() {
    let mut region = Region::new();
    region.common.handle = Handle::new(0x17);
    region
        .proprietary_data
        .push(AcisDataLine::new("400 26 1 0"));
    assert_roundtrip(&region, DxfVersion::AC1032);

    let mut body = Body::new();
    body.common.handle = Handle::new(0x18);
    body.proprietary_data.push(AcisDataLine::new("400 26 1 0"));
    assert_roundtrip(&body, DxfVersion::AC1032);
}

#[test]
fn attdef_roundtrip() {
    assert_roundtrip(&sample_attdef(), DxfVersion::AC1032);
}

#[test]
fn leader_roundtrip_preserves_vertex_order() {
    let leader = sample_leader();
    let mut copy = leader.clone();
    let text = encode(&mut copy, DxfVersion::AC1032);
    let decoded: Leader = decode(&text, DxfVersion::AC1032);

    assert_eq!(decoded.vertices, leader.vertices);
    assert_roundtrip(&leader, DxfVersion::AC1032);
}

#[test]
fn marker_records_roundtrip() {
    let mut seqend = SeqEnd::new();
    seqend.common.handle = Handle::new(0x19);
    assert_roundtrip(&seqend, DxfVersion::AC1032);

    let mut endblk = BlockEnd::new();
    endblk.common.handle = Handle::new(0x1A);
    endblk.common.layer = "BLOCKS".to_string();
    assert_roundtrip(&endblk, DxfVersion::AC1032);
}

#[test]
fn roundtrip_across_versions() {
    // The same record must survive the trip at every revision; what changes
    // per version is which groups appear, not the decoded result.
    for version in [
        DxfVersion::AC1009,
        DxfVersion::AC1014,
        DxfVersion::AC1015,
        DxfVersion::AC1021,
        DxfVersion::AC1032,
    ] {
        let mut solid = sample_solid();
        // Owner back-references only exist on the wire from AC1014.
        if version < DxfVersion::AC1014 {
            solid.common.owner_soft.clear();
            solid.common.owner_hard.clear();
        }
        assert_roundtrip(&solid, version);
    }
}

proptest! {
    #[test]
    fn solid_roundtrip_any_coords(
        coords in proptest::collection::vec(-1e6f64..1e6f64, 12),
        thickness in 0.0f64..100.0f64,
        handle in 1u64..u64::MAX,
    ) {
        let mut solid = Solid::from_corners(
            Vector3::new(coords[0], coords[1], coords[2]),
            Vector3::new(coords[3], coords[4], coords[5]),
            Vector3::new(coords[6], coords[7], coords[8]),
            Vector3::new(coords[9], coords[10], coords[11]),
        );
        solid.common.handle = Handle::new(handle);
        solid.common.set_thickness(thickness).unwrap();

        let text = encode(&mut solid.clone(), DxfVersion::AC1032);
        let decoded: Solid = decode(&text, DxfVersion::AC1032);

        prop_assert_eq!(decoded.common.handle, solid.common.handle);
        for (got, want) in decoded.corners().iter().zip(solid.corners().iter()) {
            prop_assert!((got.x - want.x).abs() < 1e-9);
            prop_assert!((got.y - want.y).abs() < 1e-9);
            prop_assert!((got.z - want.z).abs() < 1e-9);
        }
    }

    #[test]
    fn spline_roundtrip_any_knots(
        knots in proptest::collection::vec(-1e3f64..1e3f64, 0..16),
    ) {
        let mut spline = Spline::new();
        spline.knots = knots.clone();

        let text = encode(&mut spline.clone(), DxfVersion::AC1032);
        let decoded: Spline = decode(&text, DxfVersion::AC1032);

        prop_assert_eq!(decoded.knots.len(), knots.len());
        for (got, want) in decoded.knots.iter().zip(knots.iter()) {
            prop_assert!((got - want).abs() < 1e-9);
        }
    }
}
