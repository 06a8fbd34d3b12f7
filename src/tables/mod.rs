//! Declarative rig tables and the per-configuration selection of them.

use std::collections::HashMap;

use crate::rig::bones::{ArmatureEntry, HeadTailEntry};
use crate::rig::config::RigConfiguration;
use crate::rig::constraints::RotationLimit;
use crate::rig::ik::ChainEntry;
use crate::rig::joints::JointDef;
use crate::rig::merge::MergeEntry;
use crate::rig::planes::PlaneDef;
use crate::rig::split::SplitEntry;

mod bones;
mod chains;
mod joints;
mod planes;

/// Tables selected for one build: the base skeleton plus the optional groups
/// the configuration enables, concatenated in dependency order.
#[derive(Debug)]
pub struct TableSet {
    pub joints: Vec<JointDef>,
    pub planes: Vec<PlaneDef>,
    pub armature: Vec<ArmatureEntry>,
    pub head_tails: Vec<HeadTailEntry>,
    pub arm_chains: &'static [ChainEntry],
    pub leg_chains: &'static [ChainEntry],
    pub splits: &'static [SplitEntry],
    pub merges: &'static [MergeEntry],
    pub custom_shapes: HashMap<String, &'static str>,
    pub rotation_limits: HashMap<String, RotationLimit>,
}

pub fn active_tables(config: &RigConfiguration) -> TableSet {
    let mut joint_defs = joints::BASE_JOINTS.to_vec();
    let mut plane_defs = planes::BASE_PLANES.to_vec();
    let mut armature = bones::BASE_ARMATURE.to_vec();
    let mut head_tails = bones::BASE_HEAD_TAILS.to_vec();

    if config.muscle_layer {
        joint_defs.extend_from_slice(joints::MUSCLE_JOINTS);
        plane_defs.extend_from_slice(planes::MUSCLE_PLANES);
        armature.extend_from_slice(bones::MUSCLE_ARMATURE);
        head_tails.extend_from_slice(bones::MUSCLE_HEAD_TAILS);
    }
    if config.finger_rig {
        joint_defs.extend_from_slice(joints::FINGER_JOINTS);
        armature.extend_from_slice(bones::FINGER_ARMATURE);
        head_tails.extend_from_slice(bones::FINGER_HEAD_TAILS);
    }
    if config.face_panel {
        joint_defs.extend_from_slice(joints::FACE_JOINTS);
        joint_defs.extend_from_slice(joints::PANEL_JOINTS);
        armature.extend_from_slice(bones::FACE_ARMATURE);
        armature.extend_from_slice(bones::PANEL_ARMATURE);
        head_tails.extend_from_slice(bones::FACE_HEAD_TAILS);
        head_tails.extend_from_slice(bones::PANEL_HEAD_TAILS);
    }

    TableSet {
        joints: joint_defs,
        planes: plane_defs,
        armature,
        head_tails,
        arm_chains: if config.ik_arms { chains::ARM_CHAINS } else { &[] },
        leg_chains: if config.ik_legs { chains::LEG_CHAINS } else { &[] },
        splits: if config.split_bones { chains::SPLITS } else { &[] },
        merges: if config.merge_spine { chains::SPINE_MERGE } else { &[] },
        custom_shapes: bones::CUSTOM_SHAPES
            .iter()
            .map(|(bone, shape)| (bone.to_string(), *shape))
            .collect(),
        rotation_limits: bones::ROTATION_LIMITS
            .iter()
            .map(|(bone, limit)| (bone.to_string(), *limit))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::bones::RollSpec;
    use crate::rig::config::RigVariant;
    use crate::rig::joints::{JointSpec, OffsetOperand};
    use std::collections::HashSet;

    fn full_tables() -> TableSet {
        active_tables(&RigConfiguration::for_variant(RigVariant::Full))
    }

    fn joint_operands(spec: &JointSpec) -> Vec<&'static str> {
        match *spec {
            JointSpec::MarkerCentroid(_)
            | JointSpec::RawVertex(_)
            | JointSpec::Literal(_)
            | JointSpec::VertexOffset(..) => Vec::new(),
            JointSpec::WeightedPair((_, a), (_, b)) | JointSpec::PlaneOffset((_, a), (_, b)) => {
                vec![a, b]
            }
            JointSpec::Projection { raw, head, tail, .. } => vec![raw, head, tail],
            JointSpec::Alias(a) | JointSpec::ZClamp(_, a) | JointSpec::CrossOffset(a, _) => vec![a],
            JointSpec::AxisPick { x, y, z } => vec![x, y, z],
            JointSpec::RelativeOffset(a, operand) => match operand {
                OffsetOperand::Joint(b) => vec![a, b],
                OffsetOperand::Vector(_) => vec![a],
            },
        }
    }

    #[test]
    fn given_joint_tables_when_linting_then_operands_reference_earlier_entries() {
        let tables = full_tables();
        let mut seen = HashSet::new();
        for def in &tables.joints {
            for operand in joint_operands(&def.spec) {
                assert!(seen.contains(operand), "joint `{}` uses `{operand}` before its definition", def.name);
            }
            assert!(seen.insert(def.name), "duplicate joint `{}`", def.name);
        }
    }

    #[test]
    fn given_plane_tables_when_linting_then_all_joints_are_defined() {
        let tables = full_tables();
        let joints: HashSet<_> = tables.joints.iter().map(|def| def.name).collect();
        for plane in &tables.planes {
            for joint in plane.joints {
                assert!(joints.contains(joint), "plane `{}` uses unknown joint `{joint}`", plane.name);
            }
        }
    }

    #[test]
    fn given_armature_tables_when_linting_then_parents_precede_children() {
        let tables = full_tables();
        let mut seen = HashSet::new();
        for entry in &tables.armature {
            if let Some(parent) = entry.parent {
                assert!(seen.contains(parent), "bone `{}` parented to later bone `{parent}`", entry.name);
            }
            assert!(seen.insert(entry.name), "duplicate bone `{}`", entry.name);
        }
    }

    #[test]
    fn given_armature_tables_when_linting_then_roll_sources_precede_dependents() {
        let tables = full_tables();
        let mut seen = HashSet::new();
        for entry in &tables.armature {
            match entry.roll {
                RollSpec::FromBone(source) | RollSpec::FromBoneOffset(source, _) => {
                    assert!(
                        seen.contains(source),
                        "bone `{}` copies roll from later bone `{source}`",
                        entry.name
                    );
                }
                RollSpec::Explicit(_) | RollSpec::FromPlane(_) => {}
            }
            seen.insert(entry.name);
        }
    }

    #[test]
    fn given_armature_tables_when_linting_then_every_bone_has_geometry() {
        let tables = full_tables();
        let with_geometry: HashSet<_> = tables.head_tails.iter().map(|entry| entry.bone).collect();
        for entry in &tables.armature {
            assert!(with_geometry.contains(entry.name), "bone `{}` has no head/tail row", entry.name);
        }
    }

    #[test]
    fn given_game_variant_when_selecting_then_chains_and_splits_are_off() {
        let tables = active_tables(&RigConfiguration::for_variant(RigVariant::Game));
        assert!(tables.arm_chains.is_empty());
        assert!(tables.leg_chains.is_empty());
        assert!(tables.splits.is_empty());
        assert!(!tables.merges.is_empty());
    }

    #[test]
    fn given_default_variant_when_selecting_then_optional_layers_stay_out() {
        let tables = active_tables(&RigConfiguration::default());
        assert!(!tables.armature.iter().any(|entry| entry.name == "thumb.01.L"));
        assert!(!tables.armature.iter().any(|entry| entry.name == "p_face"));
        assert!(!tables.joints.iter().any(|def| def.name == "deltoid.L"));
        assert!(tables.merges.is_empty());
    }
}
