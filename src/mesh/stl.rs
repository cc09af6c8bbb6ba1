//! STL import through `stl_io`, which reads both binary and ASCII files and
//! merges identical triangle corners into shared vertices.

use std::io::{Read, Seek};

use stl_io::IndexedMesh;
use tracing::debug;

use crate::error::{Result, StlError};
use crate::math::Point3;

use super::CavityMesh;

/// Reads an STL stream of either encoding.
pub(super) fn read<R: Read + Seek>(reader: &mut R) -> Result<CavityMesh> {
    let indexed = stl_io::read_stl(reader).map_err(StlError::Parse)?;
    from_indexed(&indexed)
}

/// Converts an indexed STL mesh into a cavity mesh.
fn from_indexed(indexed: &IndexedMesh) -> Result<CavityMesh> {
    if indexed.faces.is_empty() {
        return Err(StlError::NoFacets.into());
    }

    let vertices = indexed
        .vertices
        .iter()
        .enumerate()
        .map(|(index, v)| {
            let point = Point3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2]));
            if point.coords.iter().all(|c| c.is_finite()) {
                Ok(point)
            } else {
                Err(StlError::NonFiniteVertex { index })
            }
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let to_index = |i: usize| {
        u32::try_from(i).map_err(|_| StlError::TooManyVertices(indexed.vertices.len()))
    };
    let faces = indexed
        .faces
        .iter()
        .map(|face| {
            let [a, b, c] = face.vertices;
            Ok([to_index(a)?, to_index(b)?, to_index(c)?])
        })
        .collect::<std::result::Result<Vec<_>, StlError>>()?;

    debug!(
        triangles = faces.len(),
        vertices = vertices.len(),
        "loaded STL mesh"
    );
    CavityMesh::new(vertices, faces)
}
