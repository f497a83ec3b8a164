//! API Regression Tests for the sphere-to-cube toolkit
//!
//! These tests pin the public API and the end-to-end behaviour of the
//! workspace. They are organized in 4 tiers of increasing scope:
//!
//! - Tier 1: Foundation (mesh-types)
//! - Tier 2: OBJ I/O (mesh-io)
//! - Tier 3: Remapping core (mesh-cubify)
//! - Tier 4: End-to-end file scenarios
//!
//! If any of these tests fail after API changes, it indicates a breaking change
//! that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

use mesh::{cubify, io, prelude::*, types};

/// The 8 cube corners on the unit sphere, 12 triangles, as OBJ text.
fn corner_sphere_obj() -> String {
    let c = 1.0 / 3.0_f64.sqrt();
    let mut text = String::from("# corner sphere\ns 1\n");
    for (x, y, z) in [
        (-c, -c, -c),
        (c, -c, -c),
        (c, c, -c),
        (-c, c, -c),
        (-c, -c, c),
        (c, -c, c),
        (c, c, c),
        (-c, c, c),
    ] {
        text.push_str(&format!("v {} {} {}\n", x, y, z));
    }
    for face in [
        "1 3 2", "1 4 3", "5 6 7", "5 7 8", "1 2 6", "1 6 5", "3 4 8", "3 8 7", "1 5 8", "1 8 4",
        "2 3 7", "2 7 6",
    ] {
        text.push_str(&format!("f {}\n", face));
    }
    text
}

// =============================================================================
// TIER 1: Foundation - Basic Types
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn vertex_creation_and_access() {
        let v = types::Vertex::from_coords(1.0, 2.0, 3.0);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);

        let point = types::Point3::new(4.0, 5.0, 6.0);
        let v2 = types::Vertex::new(point);
        assert!((v2.position.x - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn indexed_mesh_keeps_one_based_faces() {
        let vertices = vec![
            types::Vertex::from_coords(0.0, 0.0, 0.0),
            types::Vertex::from_coords(1.0, 0.0, 0.0),
            types::Vertex::from_coords(0.0, 1.0, 0.0),
        ];
        let mesh = types::IndexedMesh::from_parts(vertices, vec![[1, 2, 3]]);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.dangling_faces().count(), 0);

        let positions = mesh.face_positions(0).unwrap();
        assert_eq!(positions[1], types::Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn smoothing_group_defaults_off() {
        let mesh = types::IndexedMesh::new();
        assert_eq!(mesh.smoothing.to_string(), "s 0");

        let mesh = mesh.with_smoothing(SmoothingGroup::new("2"));
        assert_eq!(mesh.smoothing.value(), "2");
    }

    #[test]
    fn sphere_bounds() {
        let sphere = types::octahedron_sphere(2.0, 2);
        let bounds = cubify::compute_bounds(&sphere.vertices).unwrap();
        assert!((bounds.min.x + 2.0).abs() < 1e-12);
        assert!((bounds.max.z - 2.0).abs() < 1e-12);
        assert_eq!(bounds.min_on(Axis::Y), bounds.min.y);
    }
}

// =============================================================================
// TIER 2: OBJ I/O
// =============================================================================

mod tier2_io {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_write_layout() {
        let mesh = io::read_obj(corner_sphere_obj().as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        assert_eq!(mesh.smoothing.value(), "1");

        let mut out = Vec::new();
        io::write_obj(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("s 1\nv "));
        assert!(text.ends_with("f 2 7 6\n"));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sphere.obj");
        let sphere = types::octahedron_sphere(1.0, 3);

        save_obj(&sphere, &path).unwrap();
        let loaded = load_obj(&path).unwrap();
        assert_eq!(loaded, sphere);
    }

    #[test]
    fn missing_input_and_write_failure_are_distinct() {
        let dir = tempdir().unwrap();
        let missing = load_obj(dir.path().join("Test.obj")).unwrap_err();
        assert!(missing.is_not_found());

        let write = save_obj(
            &types::IndexedMesh::new(),
            dir.path().join("missing").join("output.obj"),
        )
        .unwrap_err();
        assert!(write.is_write_failure());
        assert!(!matches!(write, IoError::FileNotFound { .. }));
    }
}

// =============================================================================
// TIER 3: Remapping Core
// =============================================================================

mod tier3_cubify {
    use super::*;

    #[test]
    fn params_presets_and_builders() {
        let params = CubifyParams::default();
        assert_eq!(params.mode, CubifyMode::MinimumTravel);
        assert_eq!(params.frame, SolveFrame::Normalized);
        assert_eq!(params.on_domain_error, RadicandPolicy::Abort);

        let params = CubifyParams::literal()
            .with_policy(RadicandPolicy::Skip)
            .with_parallel(false);
        assert_eq!(params.frame, SolveFrame::Raw);
        assert!(!params.parallel);

        assert_eq!(CubifyParams::corner().mode, CubifyMode::Corner);
    }

    #[test]
    fn classification_and_snap() {
        let p = types::Point3::new(0.3, -0.3, 0.1);
        assert_eq!(cubify::classify(&p), Some(Axis::X));
        assert!(cubify::approx_eq(-0.3, 0.3));
        assert_eq!(cubify::snap_to_nearer(0.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn face_solve_zero_short_circuit() {
        let solved = cubify::solve_face(0.0, -0.4, false).unwrap();
        assert_eq!(solved.a, 0.0);
        assert!(solved.b < 0.0);
        assert!(!solved.clamped);
    }

    #[test]
    fn bounds_scenario() {
        let bounds = Aabb::new(
            types::Point3::new(-2.0, -1.0, -1.0),
            types::Point3::new(3.0, 1.0, 1.0),
        );
        let p = types::Point3::new(2.9, 0.1, -0.05);
        let mapped = cubify::map_vertex(&p, &bounds, &CubifyParams::default()).unwrap();
        assert_eq!(mapped.face, Some(Axis::X));
        assert_eq!(mapped.position.x, 3.0);
    }

    #[test]
    fn empty_mesh_is_invalid_input() {
        let mut mesh = types::IndexedMesh::new();
        let err = cubify_mesh(&mut mesh, &CubifyParams::default()).unwrap_err();
        assert!(matches!(err, CubifyError::EmptyMesh));
    }

    #[test]
    fn report_summary() {
        let mut sphere = types::octahedron_sphere(1.0, 2);
        let report = cubify_mesh(&mut sphere, &CubifyParams::default()).unwrap();
        let summary = report.summary();
        assert!(summary.contains("66 vertices"));
        assert_eq!(
            report.face_counts.iter().sum::<usize>() + report.corner_fallbacks,
            report.vertex_count
        );
    }
}

// =============================================================================
// TIER 4: End-to-End Scenarios
// =============================================================================

mod tier4_end_to_end {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn corner_sphere_is_unchanged() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Test.obj");
        let output = dir.path().join("output.obj");
        std::fs::write(&input, corner_sphere_obj()).unwrap();

        let original = load_obj(&input).unwrap();
        let mut mesh = original.clone();
        cubify_mesh(&mut mesh, &CubifyParams::default()).unwrap();
        save_obj(&mesh, &output).unwrap();

        let written = load_obj(&output).unwrap();
        assert_eq!(written.faces, original.faces);
        assert_eq!(written.smoothing, original.smoothing);
        for (before, after) in original.vertices.iter().zip(&written.vertices) {
            assert_relative_eq!(after.position, before.position, epsilon = 1e-9);
        }

        let text = std::fs::read_to_string(&output).unwrap();
        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces.len(), 12);
        assert_eq!(faces[0], "f 1 3 2");
    }

    #[test]
    fn sphere_lands_on_its_cube() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sphere.obj");
        save_obj(&types::octahedron_sphere(5.0, 3), &path).unwrap();

        let mut mesh = load_obj(&path).unwrap();
        let report = cubify_mesh(&mut mesh, &CubifyParams::default()).unwrap();
        let bounds = report.bounds;

        for v in &mesh.vertices {
            let on_face = Axis::ALL.into_iter().any(|axis| {
                let c = v.position[axis.index()];
                (c - bounds.min_on(axis)).abs() <= 1e-9 || (c - bounds.max_on(axis)).abs() <= 1e-9
            });
            assert!(on_face, "vertex off cube: {:?}", v.position);
            assert!(v.position.x.abs() <= 5.0 + 1e-9);
        }
    }

    #[test]
    fn aborted_run_writes_nothing_new() {
        let mut mesh = types::octahedron_sphere(10.0, 2);
        let before = mesh.clone();
        let err = cubify_mesh(&mut mesh, &CubifyParams::literal()).unwrap_err();
        assert!(matches!(err, CubifyError::NumericDomain { .. }));
        assert_eq!(mesh, before);
    }
}
