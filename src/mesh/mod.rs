//! Triangulated cavity surfaces.

mod stl;

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use crate::error::{DomainError, Result};
use crate::math::Point3;

/// A triangle mesh describing a cavity.
///
/// The mesh belongs to the caller. Animation code only reads it and derives
/// new vertex arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CavityMesh {
    vertices: Vec<Point3>,
    faces: Vec<[u32; 3]>,
}

/// Vertical extent of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZRange {
    /// Lowest vertex height.
    pub min: f64,
    /// Highest vertex height.
    pub max: f64,
}

impl ZRange {
    /// Returns `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl CavityMesh {
    /// Creates a mesh from vertex positions and triangle indices.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::FaceIndexOutOfRange`] if a face references a
    /// vertex that does not exist.
    pub fn new(vertices: Vec<Point3>, faces: Vec<[u32; 3]>) -> Result<Self> {
        for (face, tri) in faces.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertices.len()) {
                return Err(DomainError::FaceIndexOutOfRange {
                    face,
                    index,
                    vertex_count: vertices.len(),
                }
                .into());
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Parses binary or ASCII STL data. Identical corners become shared
    /// vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be parsed, has no facets or holds
    /// non-finite coordinates.
    pub fn from_stl_bytes(bytes: &[u8]) -> Result<Self> {
        stl::read(&mut Cursor::new(bytes))
    }

    /// Reads an STL file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read_stl(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path).map_err(crate::error::StlError::from)?;
        stl::read(&mut BufReader::new(file))
    }

    /// Returns the vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the triangle indices.
    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the lowest and highest vertex heights.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyMesh`] if the mesh has no vertices.
    pub fn z_range(&self) -> Result<ZRange> {
        let mut zs = self.vertices.iter().map(|p| p.z);
        let first = zs.next().ok_or(DomainError::EmptyMesh {
            vertices: 0,
            faces: self.faces.len(),
        })?;
        let (min, max) = zs.fold((first, first), |(lo, hi), z| (lo.min(z), hi.max(z)));
        Ok(ZRange { min, max })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FoamError;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn rejects_out_of_range_faces() {
        let err = CavityMesh::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], vec![[0, 1, 2]])
            .unwrap_err();
        assert!(matches!(
            err,
            FoamError::Domain(DomainError::FaceIndexOutOfRange {
                face: 0,
                index: 2,
                vertex_count: 2
            })
        ));
    }

    #[test]
    fn z_range_spans_all_vertices() {
        let mesh = CavityMesh::new(
            vec![p(0.0, 0.0, 2.0), p(1.0, 0.0, -3.5), p(0.0, 1.0, 7.0)],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let range = mesh.z_range().unwrap();
        assert_eq!(range.min, -3.5);
        assert_eq!(range.max, 7.0);
        assert_eq!(range.span(), 10.5);
    }

    #[test]
    fn z_range_of_empty_mesh_fails() {
        let mesh = CavityMesh::default();
        assert!(matches!(
            mesh.z_range(),
            Err(FoamError::Domain(DomainError::EmptyMesh { .. }))
        ));
    }
}
