//! Rig construction pipeline: solve joints, resolve planes, build the bone
//! hierarchy, expand FK/IK chains, split and merge bones, then apply the
//! deform naming convention and freeze the result.

pub mod bones;
pub mod config;
pub mod constraints;
pub mod ik;
pub mod joints;
pub mod merge;
pub mod planes;
pub mod side;
pub mod split;

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use crate::error::Result;
use crate::geometry::Vec3;
use crate::mesh::{Mesh, VertexWeights};
use crate::tables;

use bones::{BoneOptions, build_hierarchy};
use config::RigConfiguration;
use constraints::Constraint;
use ik::expand_ik_chains;
use joints::solve_joints;
use merge::{merge_bones, rename_deform_bones};
use planes::resolve_planes;
use split::split_bones;

/// A finished bone, frozen for serialization. Parents are by name; arena
/// indices never leave the build.
#[derive(Debug, Serialize)]
pub struct RigBone {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub head: [f64; 3],
    pub tail: [f64; 3],
    pub roll: f64,
    pub deform: bool,
    pub connected: bool,
    pub layers: u32,
    pub lock_location: [bool; 3],
    pub lock_rotation: [bool; 3],
    pub lock_scale: [bool; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_shape: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

/// Per-stage counts, reported by the CLI after a successful build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub joints: usize,
    pub planes: usize,
    pub bones: usize,
    pub deform_bones: usize,
    pub constraints: usize,
    pub vertex_groups: usize,
}

#[derive(Debug)]
pub struct RigOutput {
    pub bones: Vec<RigBone>,
    pub weights: BTreeMap<String, VertexWeights>,
    /// FK/IK switch properties exposed to the host (0.0 = FK, 1.0 = IK).
    pub properties: BTreeMap<String, f64>,
    pub report: BuildReport,
}

/// Run the full pipeline against a loaded mesh.
pub fn build_rig(mesh: &Mesh, config: &RigConfiguration) -> Result<RigOutput> {
    let tables = tables::active_tables(config);

    let joints = solve_joints(&tables.joints, mesh, config.scale, config.offset)?;
    debug!("solved {} joints", joints.len());

    let planes = resolve_planes(&tables.planes, &joints)?;

    let mut arena = build_hierarchy(
        &tables.armature,
        &tables.head_tails,
        &joints,
        &planes,
        config.scale,
        config.strictness,
    )?;
    debug!("built {} bones", arena.live_count());

    let mut groups = mesh.weights.clone();
    let mut custom_shapes = tables.custom_shapes;
    let mut rotation_limits = tables.rotation_limits;

    let mut properties = BTreeMap::new();
    for chains in [tables.arm_chains, tables.leg_chains] {
        let expansion = expand_ik_chains(
            &mut arena,
            chains,
            &mut custom_shapes,
            &mut rotation_limits,
            config.strictness,
        )?;
        properties.extend(expansion.switch_properties);
    }

    // Rotation limits attach to whichever bone holds the entry after chain
    // expansion moved it (the FK duplicate when the chain exists).
    for (bone_name, limit) in &rotation_limits {
        match arena.lookup(bone_name) {
            Some(index) => {
                if let Some(bone) = arena.get_mut(index) {
                    bone.constraints.push(limit.to_constraint());
                }
            }
            None => warn!("rotation limit for `{bone_name}` has no bone, skipping"),
        }
    }

    let positions: Vec<Vec3> = mesh
        .vertices
        .iter()
        .map(|v| v * config.scale + config.offset)
        .collect();
    split_bones(
        &mut arena,
        &mut groups,
        &positions,
        tables.splits,
        &config.deform_prefix,
        config.strictness,
    )?;

    merge_bones(&mut arena, &mut groups, tables.merges, config.strictness)?;

    rename_deform_bones(&mut arena, &mut groups, &config.deform_prefix)?;

    // Shape entries keyed by a pre-rename name follow the bone.
    let renamed_shapes: Vec<(String, &'static str)> = custom_shapes
        .iter()
        .filter(|(bone, _)| !arena.contains(bone))
        .filter_map(|(bone, shape)| {
            let prefixed = format!("{}{bone}", config.deform_prefix);
            arena.contains(&prefixed).then_some((prefixed, *shape))
        })
        .collect();
    custom_shapes.retain(|bone, _| arena.contains(bone));
    custom_shapes.extend(renamed_shapes);

    arena.validate()?;

    // Vertex groups must land on a live bone; anything else is stale data
    // from the interchange document.
    groups.retain(|name, _| {
        let live = arena.contains(name);
        if !live {
            warn!("vertex group `{name}` matches no bone, dropping");
        }
        live
    });

    let mut report = BuildReport {
        joints: joints.len(),
        planes: planes.len(),
        bones: arena.live_count(),
        vertex_groups: groups.len(),
        ..BuildReport::default()
    };

    let bones: Vec<RigBone> = arena
        .iter()
        .map(|(_, bone)| {
            report.constraints += bone.constraints.len();
            if bone.deform() {
                report.deform_bones += 1;
            }
            RigBone {
                name: bone.name.clone(),
                parent: bone
                    .parent
                    .and_then(|parent| arena.name_of(parent))
                    .map(ToOwned::to_owned),
                head: bone.head.into(),
                tail: bone.tail.into(),
                roll: bone.roll,
                deform: bone.deform(),
                connected: bone.options.contains(BoneOptions::CONNECTED),
                layers: bone.layers.bits(),
                lock_location: bone.lock_location,
                lock_rotation: bone.lock_rotation,
                lock_scale: bone.lock_scale,
                rotation_mode: bone.rotation_mode.map(|mode| mode.as_str()),
                custom_shape: custom_shapes.get(&bone.name).map(|shape| shape.to_string()),
                constraints: bone.constraints.clone(),
            }
        })
        .collect();

    Ok(RigOutput {
        bones,
        weights: groups,
        properties,
        report,
    })
}
