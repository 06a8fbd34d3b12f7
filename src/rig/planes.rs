use std::collections::HashMap;

use log::warn;
use nalgebra::Unit;

use crate::error::{RefKind, Result, RigError};
use crate::geometry::{self, Vec3};
use crate::rig::joints::JointTable;

/// Named reference plane spanned by three joints, in `(a, b, c)` order.
#[derive(Debug, Clone, Copy)]
pub struct PlaneDef {
    pub name: &'static str,
    pub joints: [&'static str; 3],
}

/// Resolved plane normals. A plane owns its normal; `None` records a
/// degenerate triangle ("no roll reference available").
#[derive(Debug, Clone, Default)]
pub struct PlaneTable {
    normals: HashMap<String, Option<Unit<Vec3>>>,
}

impl PlaneTable {
    /// `None` = unknown plane; `Some(None)` = known but degenerate.
    pub fn normal(&self, name: &str) -> Option<Option<Unit<Vec3>>> {
        self.normals.get(name).copied()
    }

    pub fn require(&self, referrer: &str, name: &str) -> Result<Option<Unit<Vec3>>> {
        self.normal(name)
            .ok_or_else(|| RigError::missing(referrer, RefKind::Plane, name))
    }

    pub fn insert(&mut self, name: impl Into<String>, normal: Option<Unit<Vec3>>) {
        self.normals.insert(name.into(), normal);
    }

    pub fn len(&self) -> usize {
        self.normals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }
}

/// Compute the unit normal of every named plane from the solved joint table.
///
/// A joint missing from the table is a hard `MissingReference`; a degenerate
/// triangle only logs and stores the absent sentinel, leaving the decision to
/// each consumer (roll falls back to zero, dependent joints fail).
pub fn resolve_planes(defs: &[PlaneDef], joints: &JointTable) -> Result<PlaneTable> {
    let mut table = PlaneTable::default();

    for def in defs {
        let [a, b, c] = def.joints;
        let pa = joints.require(def.name, a)?;
        let pb = joints.require(def.name, b)?;
        let pc = joints.require(def.name, c)?;

        let normal = geometry::unit_normal(&pa, &pb, &pc);
        if normal.is_none() {
            warn!("plane `{}` is degenerate; no roll reference available", def.name);
        }
        table.insert(def.name, normal);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn joints_with(points: &[(&str, Vec3)]) -> JointTable {
        let mut table = JointTable::default();
        for (name, p) in points {
            table.insert(*name, *p);
        }
        table
    }

    #[test]
    fn given_valid_plane_when_resolving_then_normal_is_unit_length() {
        let joints = joints_with(&[
            ("a", Vector3::new(0.0, 0.0, 0.0)),
            ("b", Vector3::new(1.0, 0.0, 0.0)),
            ("c", Vector3::new(1.0, 2.0, 0.0)),
        ]);
        let defs = [PlaneDef { name: "PlaneTest", joints: ["a", "b", "c"] }];
        let table = resolve_planes(&defs, &joints).unwrap();
        let normal = table.normal("PlaneTest").unwrap().expect("non-degenerate");
        assert!((normal.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn given_collinear_plane_when_resolving_then_sentinel_is_stored() {
        let joints = joints_with(&[
            ("a", Vector3::new(0.0, 0.0, 0.0)),
            ("b", Vector3::new(1.0, 0.0, 0.0)),
            ("c", Vector3::new(2.0, 0.0, 0.0)),
        ]);
        let defs = [PlaneDef { name: "PlaneFlat", joints: ["a", "b", "c"] }];
        let table = resolve_planes(&defs, &joints).unwrap();
        assert!(table.normal("PlaneFlat").unwrap().is_none());
    }

    #[test]
    fn given_missing_joint_when_resolving_then_error_names_plane_and_joint() {
        let joints = joints_with(&[("a", Vector3::zeros()), ("b", Vector3::x())]);
        let defs = [PlaneDef { name: "PlaneArm.L", joints: ["a", "b", "gone"] }];
        let err = resolve_planes(&defs, &joints).unwrap_err();
        match err {
            RigError::MissingReference { referrer, kind, name } => {
                assert_eq!(referrer, "PlaneArm.L");
                assert_eq!(kind, RefKind::Joint);
                assert_eq!(name, "gone");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
