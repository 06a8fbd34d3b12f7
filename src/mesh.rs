use std::collections::BTreeMap;

use nalgebra::Vector3;

use crate::error::{RefKind, Result, RigError};

/// Sparse per-group skinning weights: ordered `(vertex index, weight)` pairs.
///
/// Weights are in `[0, 1]` and are not normalized across a vertex's group
/// memberships; the consuming host normalizes at apply time.
pub type VertexWeights = Vec<(usize, f64)>;

/// Host-independent view of the fixed-topology humanoid mesh.
///
/// `marker_groups` are the named helper-vertex clusters (typically the 8
/// corners of a joint bounding cube) that anchor symbolic joint definitions.
/// `weights` is the raw per-bone weight table shipped with the mesh.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vector3<f64>>,
    pub marker_groups: BTreeMap<String, Vec<usize>>,
    pub weights: BTreeMap<String, VertexWeights>,
}

impl Mesh {
    /// Raw vertex position, with the referrer named on failure so a topology
    /// mismatch points at the table entry that tripped over it.
    pub fn vertex(&self, referrer: &str, index: usize) -> Result<Vector3<f64>> {
        self.vertices
            .get(index)
            .copied()
            .ok_or_else(|| RigError::missing(referrer, RefKind::Vertex, &index.to_string()))
    }

    /// Average position of a named marker group.
    pub fn marker_centroid(&self, referrer: &str, name: &str) -> Result<Vector3<f64>> {
        let group = self
            .marker_groups
            .get(name)
            .filter(|indices| !indices.is_empty())
            .ok_or_else(|| RigError::missing(referrer, RefKind::Marker, name))?;

        let mut sum = Vector3::zeros();
        for &index in group {
            sum += self.vertex(referrer, index)?;
        }
        Ok(sum / group.len() as f64)
    }
}
