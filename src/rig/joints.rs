use std::collections::HashMap;

use log::warn;
use nalgebra::Vector3;

use crate::error::{RefKind, Result, RigError};
use crate::geometry::{self, Vec3};
use crate::mesh::Mesh;

/// Second operand of a relative offset: either another joint's position or a
/// scale-multiplied literal vector.
#[derive(Debug, Clone, Copy)]
pub enum OffsetOperand {
    Joint(&'static str),
    Vector([f64; 3]),
}

/// Symbolic joint definition. One variant per operator the declarative joint
/// tables use; the set is closed, so a malformed opcode cannot reach the
/// solver (table-level misconfiguration surfaces as `ConfigurationError`
/// where data still drives behavior).
#[derive(Debug, Clone, Copy)]
pub enum JointSpec {
    /// Average of the marker vertices forming the joint's bounding cube.
    MarkerCentroid(&'static str),
    /// A single raw vertex coordinate.
    RawVertex(usize),
    /// Explicit point, authored Y-up (converted via the engine permutation).
    Literal([f64; 3]),
    /// Vertex coordinate plus a scale-multiplied offset.
    VertexOffset(usize, [f64; 3]),
    /// `w1·loc(a) + w2·loc(b)`; weights need not sum to 1.
    WeightedPair((f64, &'static str), (f64, &'static str)),
    /// Projection of `raw` onto the line `head → tail`, plus a scaled offset.
    Projection {
        raw: &'static str,
        head: &'static str,
        tail: &'static str,
        offset: [f64; 3],
    },
    /// Same position under a second name.
    Alias(&'static str),
    /// X from `x`, Y from `y`, Z from `z`.
    AxisPick {
        x: &'static str,
        y: &'static str,
        z: &'static str,
    },
    /// X,Y from the named joint, Z from the given vertex.
    ZClamp(usize, &'static str),
    /// Cross product of the joint's position with a fixed direction vector,
    /// used to construct perpendicular axes.
    CrossOffset(&'static str, [f64; 3]),
    /// Weighted-pair variant used when compositing plane offsets.
    PlaneOffset((f64, &'static str), (f64, &'static str)),
    /// Joint position plus another joint's position or a scaled vector.
    RelativeOffset(&'static str, OffsetOperand),
}

/// One entry of a joint table. Entries are hand-ordered so that every operand
/// references an earlier entry; the solver must never re-sort them.
#[derive(Debug, Clone, Copy)]
pub struct JointDef {
    pub name: &'static str,
    pub spec: JointSpec,
}

/// Resolved `name → position` table. Immutable once a solve pass completes.
#[derive(Debug, Clone, Default)]
pub struct JointTable {
    positions: HashMap<String, Vec3>,
}

impl JointTable {
    pub fn get(&self, name: &str) -> Option<Vec3> {
        self.positions.get(name).copied()
    }

    pub fn require(&self, referrer: &str, name: &str) -> Result<Vec3> {
        self.get(name)
            .ok_or_else(|| RigError::missing(referrer, RefKind::Joint, name))
    }

    pub fn insert(&mut self, name: impl Into<String>, position: Vec3) {
        self.positions.insert(name.into(), position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Evaluate joint definitions in table-concatenation order against the mesh.
///
/// Vertices and literal points are brought into build space with the uniform
/// `scale` and `offset`; offset vectors in the tables scale but do not
/// translate. Forward references fail with `MissingReference` by
/// construction, since operands are looked up in the in-progress table.
pub fn solve_joints(
    defs: &[JointDef],
    mesh: &Mesh,
    scale: f64,
    offset: Vec3,
) -> Result<JointTable> {
    let mut table = JointTable::default();

    let place = |p: Vec3| p * scale + offset;

    for def in defs {
        let name = def.name;
        let position = match def.spec {
            JointSpec::MarkerCentroid(group) => place(mesh.marker_centroid(name, group)?),
            JointSpec::RawVertex(index) => place(mesh.vertex(name, index)?),
            JointSpec::Literal(point) => place(geometry::from_engine(point)),
            JointSpec::VertexOffset(index, delta) => {
                place(mesh.vertex(name, index)?) + Vector3::from(delta) * scale
            }
            JointSpec::WeightedPair((w1, a), (w2, b))
            | JointSpec::PlaneOffset((w1, a), (w2, b)) => {
                table.require(name, a)? * w1 + table.require(name, b)? * w2
            }
            JointSpec::Projection {
                raw,
                head,
                tail,
                offset: delta,
            } => {
                let p = table.require(name, raw)?;
                let h = table.require(name, head)?;
                let t = table.require(name, tail)?;
                let base = match geometry::axis_fraction(&p, &h, &t) {
                    Some(fraction) => geometry::lerp(&h, &t, fraction),
                    None => {
                        warn!("joint `{name}`: projection line `{head}`→`{tail}` is degenerate");
                        h
                    }
                };
                base + Vector3::from(delta) * scale
            }
            JointSpec::Alias(source) => table.require(name, source)?,
            JointSpec::AxisPick { x, y, z } => Vector3::new(
                table.require(name, x)?.x,
                table.require(name, y)?.y,
                table.require(name, z)?.z,
            ),
            JointSpec::ZClamp(index, joint) => {
                let base = table.require(name, joint)?;
                let v = place(mesh.vertex(name, index)?);
                Vector3::new(base.x, base.y, v.z)
            }
            JointSpec::CrossOffset(joint, vector) => {
                table.require(name, joint)?.cross(&Vector3::from(vector))
            }
            JointSpec::RelativeOffset(joint, operand) => {
                let base = table.require(name, joint)?;
                match operand {
                    OffsetOperand::Joint(other) => base + table.require(name, other)?,
                    OffsetOperand::Vector(delta) => base + Vector3::from(delta) * scale,
                }
            }
        };
        table.insert(name, position);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_mesh() -> Mesh {
        let mut mesh = Mesh::default();
        mesh.vertices = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(1.0, 1.0, 1.0),
        ];
        mesh.marker_groups
            .insert("pair".to_string(), vec![0, 1]);
        mesh
    }

    #[test]
    fn given_weighted_pair_when_solving_then_midpoint_is_returned() {
        let defs = [
            JointDef { name: "A", spec: JointSpec::Literal([0.0, 0.0, 0.0]) },
            JointDef { name: "B", spec: JointSpec::Literal([2.0, 0.0, 0.0]) },
            JointDef { name: "M", spec: JointSpec::WeightedPair((0.5, "A"), (0.5, "B")) },
        ];
        let table = solve_joints(&defs, &flat_mesh(), 1.0, Vector3::zeros()).unwrap();
        assert_eq!(table.get("M").unwrap(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn given_same_inputs_when_solving_twice_then_results_are_bit_identical() {
        let defs = [
            JointDef { name: "base", spec: JointSpec::MarkerCentroid("pair") },
            JointDef { name: "high", spec: JointSpec::RawVertex(2) },
            JointDef { name: "mid", spec: JointSpec::WeightedPair((0.25, "base"), (0.75, "high")) },
            JointDef { name: "proj", spec: JointSpec::Projection { raw: "mid", head: "base", tail: "high", offset: [0.1, 0.0, 0.0] } },
        ];
        let mesh = flat_mesh();
        let first = solve_joints(&defs, &mesh, 0.1, Vector3::new(0.0, 0.0, 1.0)).unwrap();
        let second = solve_joints(&defs, &mesh, 0.1, Vector3::new(0.0, 0.0, 1.0)).unwrap();
        for name in ["base", "high", "mid", "proj"] {
            assert_eq!(first.get(name).unwrap(), second.get(name).unwrap());
        }
    }

    #[test]
    fn given_forward_reference_when_solving_then_missing_reference_names_it() {
        let defs = [
            JointDef { name: "early", spec: JointSpec::Alias("later") },
            JointDef { name: "later", spec: JointSpec::Literal([0.0, 0.0, 0.0]) },
        ];
        let err = solve_joints(&defs, &flat_mesh(), 1.0, Vector3::zeros()).unwrap_err();
        match err {
            RigError::MissingReference { referrer, name, .. } => {
                assert_eq!(referrer, "early");
                assert_eq!(name, "later");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn given_projection_when_solving_then_point_lands_on_line() {
        let defs = [
            JointDef { name: "h", spec: JointSpec::Literal([0.0, 0.0, 0.0]) },
            // Literal is Y-up; [10,0,0] stays on the X axis after permutation.
            JointDef { name: "t", spec: JointSpec::Literal([10.0, 0.0, 0.0]) },
            JointDef { name: "p", spec: JointSpec::RawVertex(3) },
            JointDef { name: "on_line", spec: JointSpec::Projection { raw: "p", head: "h", tail: "t", offset: [0.0, 0.0, 0.0] } },
        ];
        let table = solve_joints(&defs, &flat_mesh(), 1.0, Vector3::zeros()).unwrap();
        let p = table.get("on_line").unwrap();
        assert!((p - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn given_axis_pick_and_z_clamp_when_solving_then_components_mix() {
        let defs = [
            JointDef { name: "a", spec: JointSpec::Literal([1.0, 0.0, 0.0]) },
            JointDef { name: "b", spec: JointSpec::Literal([0.0, 2.0, 0.0]) },
            JointDef { name: "c", spec: JointSpec::Literal([0.0, 0.0, 3.0]) },
            JointDef { name: "pick", spec: JointSpec::AxisPick { x: "a", y: "c", z: "b" } },
            JointDef { name: "clamp", spec: JointSpec::ZClamp(2, "pick") },
        ];
        let table = solve_joints(&defs, &flat_mesh(), 1.0, Vector3::zeros()).unwrap();
        // Y-up literals land as a=(1,0,0), b=(0,0,2), c=(0,-3,0).
        assert_eq!(table.get("pick").unwrap(), Vector3::new(1.0, -3.0, 2.0));
        // Vertex 2 contributes only its Z.
        assert_eq!(table.get("clamp").unwrap(), Vector3::new(1.0, -3.0, 5.0));
    }

    #[test]
    fn given_scale_and_offset_when_solving_then_vertices_are_placed() {
        let defs = [JointDef { name: "v", spec: JointSpec::RawVertex(1) }];
        let table = solve_joints(&defs, &flat_mesh(), 0.5, Vector3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(table.get("v").unwrap(), Vector3::new(1.0, 0.0, 1.0));
    }
}
