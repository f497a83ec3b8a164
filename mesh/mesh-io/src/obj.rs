//! Wavefront OBJ support (triangle subset).
//!
//! Only the three record types a sphere-to-cube run needs are recognized:
//!
//! ```text
//! s 0             smoothing group, last occurrence wins (default "s 0")
//! v x y z         vertex, in declaration order
//! f a b c         triangle, 1-based vertex indices
//! ```
//!
//! Every other line (comments, normals, texture coordinates, groups,
//! materials) is ignored. Output is always the smoothing line, then all
//! vertices, then all faces.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, SmoothingGroup, Vertex};
use tracing::{debug, warn};

use crate::error::{IoError, IoResult};

/// Load a mesh from an OBJ file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`IoError::FileNotFound`])
/// - The file cannot be read
/// - A `v` or `f` record has an unparseable number
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_obj;
///
/// let mesh = load_obj("Test.obj").unwrap();
/// println!("Loaded {} vertices, {} faces", mesh.vertices.len(), mesh.faces.len());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    read_obj(BufReader::new(file))
}

/// Parse OBJ records from any buffered reader.
///
/// `v` records use their first three numbers; `f` records use their first
/// three indices, so a polygon is cut down to its first triangle (logged as
/// a warning). Records with too few fields are skipped.
///
/// # Errors
///
/// Returns an error if:
/// - a coordinate does not parse, or a face index is not a positive
///   integer ([`IoError::InvalidContent`])
/// - the reader fails or yields invalid UTF-8 ([`IoError::Io`])
///
/// # Example
///
/// ```
/// use mesh_io::read_obj;
///
/// let text = "s 1\nv 1 0 0\nv 0 1 0\nv 0 0 1\nf 1 2 3\n";
/// let mesh = read_obj(text.as_bytes()).unwrap();
/// assert_eq!(mesh.vertices.len(), 3);
/// assert_eq!(mesh.faces, vec![[1, 2, 3]]);
/// assert_eq!(mesh.smoothing.to_string(), "s 1");
/// ```
pub fn read_obj<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();
    let mut polygons = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();

        match fields.as_slice() {
            ["s", value, ..] => mesh.smoothing = SmoothingGroup::new(*value),
            ["v", x, y, z, ..] => {
                let vertex = Vertex::from_coords(
                    parse_coord(x, line_no)?,
                    parse_coord(y, line_no)?,
                    parse_coord(z, line_no)?,
                );
                mesh.vertices.push(vertex);
            }
            ["f", a, b, c, rest @ ..] => {
                if !rest.is_empty() {
                    polygons += 1;
                }
                mesh.faces.push([
                    parse_index(a, line_no)?,
                    parse_index(b, line_no)?,
                    parse_index(c, line_no)?,
                ]);
            }
            _ => {}
        }
    }

    if polygons > 0 {
        warn!(
            polygons,
            "Non-triangular faces truncated to their first three vertices"
        );
    }
    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        smoothing = %mesh.smoothing,
        "Parsed OBJ"
    );

    Ok(mesh)
}

fn parse_coord(token: &str, line: usize) -> IoResult<f64> {
    token
        .parse::<f64>()
        .map_err(|e| IoError::invalid_content(line, format!("bad coordinate '{token}': {e}")))
}

fn parse_index(token: &str, line: usize) -> IoResult<u32> {
    match token.parse::<u32>() {
        Ok(0) => Err(IoError::invalid_content(
            line,
            "face index 0 is invalid, indices are 1-based",
        )),
        Ok(index) => Ok(index),
        Err(e) => Err(IoError::invalid_content(
            line,
            format!("bad face index '{token}': {e}"),
        )),
    }
}

/// Save a mesh to an OBJ file.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{load_obj, save_obj};
///
/// let mesh = load_obj("Test.obj").unwrap();
/// save_obj(&mesh, "output.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let write_error = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_records(mesh, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    debug!(path = %path.display(), "Wrote OBJ");
    Ok(())
}

/// Write a mesh as OBJ text to any writer.
///
/// Coordinates use Rust's shortest round-trip `f64` formatting, so parsing
/// the output yields bit-identical values.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the writer fails.
///
/// # Example
///
/// ```
/// use mesh_io::write_obj;
/// use mesh_types::{IndexedMesh, Vertex};
///
/// let mesh = IndexedMesh::from_parts(
///     vec![Vertex::from_coords(0.5, -1.0, 0.25)],
///     vec![[1, 1, 1]],
/// );
/// let mut out = Vec::new();
/// write_obj(&mesh, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "s 0\nv 0.5 -1 0.25\nf 1 1 1\n");
/// ```
pub fn write_obj<W: Write>(mesh: &IndexedMesh, writer: W) -> IoResult<()> {
    write_records(mesh, writer)?;
    Ok(())
}

fn write_records<W: Write>(mesh: &IndexedMesh, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{}", mesh.smoothing)?;
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.position.x, v.position.y, v.position.z)?;
    }
    for [a, b, c] in &mesh.faces {
        writeln!(writer, "f {a} {b} {c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> IndexedMesh {
        match read_obj(text.as_bytes()) {
            Ok(mesh) => mesh,
            Err(e) => panic!("parse failed: {e}"),
        }
    }

    #[test]
    fn reads_vertices_and_faces_in_order() {
        let mesh = parse("v 1 2 3\nv -4.5 0 1e-3\nv 0 0 0\nf 3 1 2\nf 1 2 3\n");
        assert_eq!(mesh.vertices.len(), 3);
        assert!((mesh.vertices[1].position.x + 4.5).abs() < f64::EPSILON);
        assert!((mesh.vertices[1].position.z - 0.001).abs() < f64::EPSILON);
        assert_eq!(mesh.faces, vec![[3, 1, 2], [1, 2, 3]]);
    }

    #[test]
    fn smoothing_defaults_to_off() {
        let mesh = parse("v 0 0 0\n");
        assert_eq!(mesh.smoothing.to_string(), "s 0");
    }

    #[test]
    fn last_smoothing_line_wins() {
        let mesh = parse("s 1\nv 0 0 0\ns off\ns 3\n");
        assert_eq!(mesh.smoothing.to_string(), "s 3");
    }

    #[test]
    fn ignores_unrecognized_and_short_lines() {
        let text = "# comment\n\no sphere\nvn 0 0 1\nvt 0 1\nv 1 2\nf 1 2\ns\nusemtl a\nv 1 1 1\n";
        let mesh = parse(text);
        assert_eq!(mesh.vertices.len(), 1);
        assert!(mesh.faces.is_empty());
        assert!(mesh.smoothing.is_off());
    }

    #[test]
    fn extra_fields_use_first_three() {
        let mesh = parse("v 1 2 3 1.0\nv 0 0 0\nv 1 1 1\nv 2 2 2\nf 1 2 3 4\n");
        assert!((mesh.vertices[0].position.z - 3.0).abs() < f64::EPSILON);
        assert_eq!(mesh.faces, vec![[1, 2, 3]]);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let mesh = parse("   v\t1   2  3  \n\tf 1 1 1\r\n");
        assert_eq!(mesh.vertices.len(), 1);
        assert_eq!(mesh.faces, vec![[1, 1, 1]]);
    }

    #[test]
    fn bad_coordinate_reports_line() {
        let err = read_obj("v 0 0 0\nv 1 x 3\n".as_bytes());
        assert!(matches!(err, Err(IoError::InvalidContent { line: 2, .. })));
    }

    #[test]
    fn zero_and_negative_face_indices_rejected() {
        assert!(matches!(
            read_obj("f 0 1 2\n".as_bytes()),
            Err(IoError::InvalidContent { line: 1, .. })
        ));
        assert!(matches!(
            read_obj("v 0 0 0\nf -1 1 1\n".as_bytes()),
            Err(IoError::InvalidContent { line: 2, .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"v 0 0 0\nv \xff\xfe 1 1\n";
        assert!(matches!(read_obj(bytes), Err(IoError::Io(_))));
    }

    #[test]
    fn slash_face_tokens_rejected() {
        assert!(read_obj("f 1/1 2/2 3/3\n".as_bytes()).is_err());
    }

    #[test]
    fn write_layout() {
        let mesh = parse("f 2 3 1\nv 1.5 0 -2\ns 4\nv 0.1 0.2 0.3\nv 0 0 1\n");
        let mut out = Vec::new();
        assert!(write_obj(&mesh, &mut out).is_ok());
        let text = String::from_utf8(out).unwrap_or_default();
        assert_eq!(
            text,
            "s 4\nv 1.5 0 -2\nv 0.1 0.2 0.3\nv 0 0 1\nf 2 3 1\n"
        );
    }

    #[test]
    fn written_coordinates_parse_back_exactly() {
        let coords = [
            std::f64::consts::FRAC_1_SQRT_2,
            -1.0 / 3.0,
            1.234_567_890_123_456_7e-9,
        ];
        let mesh = IndexedMesh::from_parts(
            vec![Vertex::from_coords(coords[0], coords[1], coords[2])],
            Vec::new(),
        );
        let mut out = Vec::new();
        assert!(write_obj(&mesh, &mut out).is_ok());
        let back = parse(&String::from_utf8(out).unwrap_or_default());
        let p = back.vertices[0].position;
        assert_eq!(p.x.to_bits(), coords[0].to_bits());
        assert_eq!(p.y.to_bits(), coords[1].to_bits());
        assert_eq!(p.z.to_bits(), coords[2].to_bits());
    }
}
