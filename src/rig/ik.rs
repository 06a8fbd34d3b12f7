use std::collections::{BTreeMap, HashMap};

use log::warn;

use crate::error::{RefKind, Result, RigError};
use crate::rig::bones::{Bone, BoneArena, BoneOptions, LayerSet};
use crate::rig::config::Strictness;
use crate::rig::constraints::{Constraint, PoleTarget, RotationLimit};
use crate::rig::side::{Side, sibling_of, with_infix};

/// Where a chain entry sits in its FK/IK chain.
#[derive(Debug, Clone, Copy)]
pub enum ChainTopology {
    /// Downstream of the switch point: FK duplicate only, re-chained onto the
    /// FK sibling of the original's parent.
    DownStream,
    /// Chain root: FK and IK duplicates share the original's parent.
    Upstream,
    /// Terminal chain bone: the IK duplicate carries the actual IK solver.
    Leaf {
        /// Side-agnostic IK target bone name.
        target: &'static str,
        /// Chain length in bone count.
        chain_len: usize,
        /// Pole target bone and angle (radians); the angle mirrors per side.
        pole: Option<(&'static str, f64)>,
        /// Extra rotation lock applied to the IK duplicate.
        ik_lock_rotation: Option<[bool; 3]>,
    },
}

/// One row of the IK-chain table.
#[derive(Debug, Clone, Copy)]
pub struct ChainEntry {
    pub base: &'static str,
    pub topology: ChainTopology,
    pub fk_layer: LayerSet,
    pub ik_layer: LayerSet,
    /// Rig property name exposing the FK/IK blend switch for this chain.
    pub switch: &'static str,
}

/// Artifacts of the expansion besides the mutated bone set: the FK/IK blend
/// switch properties the host animates (0.0 = FK drives, 1.0 = IK drives).
#[derive(Debug, Default)]
pub struct IkExpansion {
    pub switch_properties: BTreeMap<String, f64>,
}

/// Duplicate the listed chains into parallel FK and IK bones, hide the
/// originals on the mechanism layer and wire the copy-transform blend.
///
/// Per-side custom-shape and rotation-limit entries move from the original to
/// the FK duplicate; they are never duplicated into both.
pub fn expand_ik_chains(
    arena: &mut BoneArena,
    entries: &[ChainEntry],
    custom_shapes: &mut HashMap<String, &'static str>,
    rotation_limits: &mut HashMap<String, RotationLimit>,
    strictness: Strictness,
) -> Result<IkExpansion> {
    let mut expansion = IkExpansion::default();

    for entry in entries {
        if let ChainTopology::Leaf { chain_len, .. } = entry.topology {
            if chain_len == 0 {
                return Err(RigError::config(
                    "ik_chains",
                    format!("leaf chain `{}` has zero chain length", entry.base),
                ));
            }
        }

        for side in Side::BOTH {
            expand_one(arena, entry, side, custom_shapes, rotation_limits, strictness, &mut expansion)?;
        }
    }

    Ok(expansion)
}

fn expand_one(
    arena: &mut BoneArena,
    entry: &ChainEntry,
    side: Side,
    custom_shapes: &mut HashMap<String, &'static str>,
    rotation_limits: &mut HashMap<String, RotationLimit>,
    strictness: Strictness,
    expansion: &mut IkExpansion,
) -> Result<()> {
    let original_name = side.apply(entry.base);
    let Some(original_index) = arena.lookup(&original_name) else {
        match strictness {
            Strictness::Lenient => {
                warn!("ik chain `{}`: bone `{original_name}` not in rig, skipping", entry.base);
                return Ok(());
            }
            Strictness::Strict => {
                return Err(RigError::missing("ik_chains", RefKind::Bone, &original_name));
            }
        }
    };
    let Some(original) = arena.get(original_index).cloned() else {
        return Ok(());
    };

    let parent_name = original
        .parent
        .and_then(|parent| arena.name_of(parent))
        .map(ToOwned::to_owned);

    // FK duplicate. Downstream/leaf bones re-chain onto the FK sibling of the
    // original's parent; upstream chain roots keep the original parent.
    let fk_name = with_infix(entry.base, ".fk", side);
    let fk_parent = match entry.topology {
        ChainTopology::Upstream => original.parent,
        ChainTopology::DownStream | ChainTopology::Leaf { .. } => parent_name
            .as_deref()
            .and_then(|name| sibling_of(name, ".fk"))
            .and_then(|sibling| arena.lookup(&sibling))
            .or(original.parent),
    };
    arena.insert(duplicate(&original, &fk_name, fk_parent, entry.fk_layer))?;

    // Table entries for the control follow the FK duplicate, and only it.
    if let Some(shape) = custom_shapes.remove(&original_name) {
        custom_shapes.insert(fk_name.clone(), shape);
    }
    if let Some(limit) = rotation_limits.remove(&original_name) {
        rotation_limits.insert(fk_name.clone(), limit);
    }

    // IK duplicate for topologies that have one.
    let ik_name = match entry.topology {
        ChainTopology::DownStream => None,
        ChainTopology::Upstream | ChainTopology::Leaf { .. } => {
            let ik_name = with_infix(entry.base, ".ik", side);
            let ik_parent = match entry.topology {
                ChainTopology::Upstream => original.parent,
                _ => parent_name
                    .as_deref()
                    .and_then(|name| sibling_of(name, ".ik"))
                    .and_then(|sibling| arena.lookup(&sibling))
                    .or(original.parent),
            };
            let mut ik_bone = duplicate(&original, &ik_name, ik_parent, entry.ik_layer);

            if let ChainTopology::Leaf {
                target,
                chain_len,
                pole,
                ik_lock_rotation,
            } = entry.topology
            {
                ik_bone.constraints.push(Constraint::Ik {
                    target: side.apply(target),
                    chain_len,
                    pole: pole.map(|(bone, angle)| PoleTarget {
                        bone: side.apply(bone),
                        angle: angle * side.pole_sign(),
                    }),
                });
                if let Some(lock) = ik_lock_rotation {
                    ik_bone.lock_rotation = lock;
                }
            }

            arena.insert(ik_bone)?;
            Some(ik_name)
        }
    };

    // The original becomes hidden mechanism, driven by the duplicates. The IK
    // copy starts at zero influence; the exposed switch blends it in.
    if let Some(original) = arena.get_mut(original_index) {
        original.layers = LayerSet::MECHANISM;
        original.options |= BoneOptions::RESTRICT_SELECT;
        if let Some(ik_name) = &ik_name {
            original.constraints.push(Constraint::CopyTransform {
                target: ik_name.clone(),
                influence: 0.0,
            });
        }
        original.constraints.push(Constraint::CopyTransform {
            target: fk_name.clone(),
            influence: 1.0,
        });
    }

    if ik_name.is_some() {
        expansion
            .switch_properties
            .insert(side.apply(entry.switch), 0.0);
    }

    Ok(())
}

fn duplicate(original: &Bone, name: &str, parent: Option<usize>, layers: LayerSet) -> Bone {
    let mut bone = Bone::new(name);
    bone.parent = parent;
    bone.head = original.head;
    bone.tail = original.tail;
    bone.roll = original.roll;
    bone.options = original.options - BoneOptions::DEFORM;
    bone.layers = layers;
    bone.lock_location = original.lock_location;
    bone.lock_rotation = original.lock_rotation;
    bone.lock_scale = original.lock_scale;
    bone.rotation_mode = original.rotation_mode;
    bone
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn leg_arena() -> BoneArena {
        let mut arena = BoneArena::new();
        for (name, parent, head, tail) in [
            ("hips", None, [0.0, 0.0, 1.0], [0.0, 0.0, 1.2]),
            ("thigh.L", Some("hips"), [0.1, 0.0, 1.0], [0.1, 0.0, 0.5]),
            ("shin.L", Some("thigh.L"), [0.1, 0.0, 0.5], [0.1, 0.0, 0.1]),
            ("foot.L", Some("shin.L"), [0.1, 0.0, 0.1], [0.1, -0.2, 0.0]),
            ("thigh.R", Some("hips"), [-0.1, 0.0, 1.0], [-0.1, 0.0, 0.5]),
            ("shin.R", Some("thigh.R"), [-0.1, 0.0, 0.5], [-0.1, 0.0, 0.1]),
            ("foot.R", Some("shin.R"), [-0.1, 0.0, 0.1], [-0.1, -0.2, 0.0]),
            ("kneePT.L", Some("hips"), [0.1, -0.7, 0.5], [0.1, -0.7, 0.6]),
            ("kneePT.R", Some("hips"), [-0.1, -0.7, 0.5], [-0.1, -0.7, 0.6]),
        ] {
            let parent_index = parent.map(|p: &str| arena.lookup(p).unwrap());
            let mut bone = Bone::new(name);
            bone.parent = parent_index;
            bone.head = Vector3::from(head);
            bone.tail = Vector3::from(tail);
            bone.options = BoneOptions::DEFORM;
            arena.insert(bone).unwrap();
        }
        arena
    }

    fn leaf_shin_entry() -> ChainEntry {
        ChainEntry {
            base: "shin",
            topology: ChainTopology::Leaf {
                target: "foot",
                chain_len: 1,
                pole: Some(("kneePT", std::f64::consts::FRAC_PI_2)),
                ik_lock_rotation: None,
            },
            fk_layer: LayerSet::LEG_FK,
            ik_layer: LayerSet::LEG_IK,
            switch: "LegIk",
        }
    }

    #[test]
    fn given_leaf_chain_when_expanding_then_fk_and_ik_duplicates_appear() {
        let mut arena = leg_arena();
        let mut shapes = HashMap::new();
        let mut limits = HashMap::new();
        expand_ik_chains(
            &mut arena,
            &[leaf_shin_entry()],
            &mut shapes,
            &mut limits,
            Strictness::Lenient,
        )
        .unwrap();

        let fk = arena.get(arena.lookup("shin.fk.L").unwrap()).unwrap();
        let ik = arena.get(arena.lookup("shin.ik.L").unwrap()).unwrap();
        assert!(!fk.deform());

        let original = arena.get(arena.lookup("shin.L").unwrap()).unwrap();
        assert_eq!(original.layers, LayerSet::MECHANISM);

        match ik.constraints.first() {
            Some(Constraint::Ik { target, chain_len, pole }) => {
                assert_eq!(target, "foot.L");
                assert_eq!(*chain_len, 1);
                assert!(pole.is_some());
            }
            other => panic!("expected IK constraint, got {other:?}"),
        }
    }

    #[test]
    fn given_leaf_chain_when_expanding_then_original_gets_blend_constraints() {
        let mut arena = leg_arena();
        expand_ik_chains(
            &mut arena,
            &[leaf_shin_entry()],
            &mut HashMap::new(),
            &mut HashMap::new(),
            Strictness::Lenient,
        )
        .unwrap();

        let original = arena.get(arena.lookup("shin.L").unwrap()).unwrap();
        match &original.constraints[..] {
            [
                Constraint::CopyTransform { target: ik, influence: ik_inf },
                Constraint::CopyTransform { target: fk, influence: fk_inf },
            ] => {
                assert_eq!(ik, "shin.ik.L");
                assert_eq!(*ik_inf, 0.0);
                assert_eq!(fk, "shin.fk.L");
                assert_eq!(*fk_inf, 1.0);
            }
            other => panic!("unexpected constraint stack: {other:?}"),
        }
    }

    #[test]
    fn given_both_sides_when_expanding_then_pole_angles_mirror() {
        let mut arena = leg_arena();
        expand_ik_chains(
            &mut arena,
            &[leaf_shin_entry()],
            &mut HashMap::new(),
            &mut HashMap::new(),
            Strictness::Lenient,
        )
        .unwrap();

        let angle_of = |name: &str| {
            let bone = arena.get(arena.lookup(name).unwrap()).unwrap();
            match bone.constraints.first() {
                Some(Constraint::Ik { pole: Some(pole), .. }) => pole.angle,
                other => panic!("expected IK with pole, got {other:?}"),
            }
        };
        assert_eq!(angle_of("shin.ik.L"), -angle_of("shin.ik.R"));
    }

    #[test]
    fn given_custom_shape_when_expanding_then_entry_moves_to_fk_duplicate() {
        let mut arena = leg_arena();
        let mut shapes = HashMap::from([("shin.L".to_string(), "GZM_Circle")]);
        expand_ik_chains(
            &mut arena,
            &[leaf_shin_entry()],
            &mut shapes,
            &mut HashMap::new(),
            Strictness::Lenient,
        )
        .unwrap();
        assert!(!shapes.contains_key("shin.L"));
        assert_eq!(shapes.get("shin.fk.L").copied(), Some("GZM_Circle"));
        // The right side had no entry; nothing leaks across sides.
        assert!(!shapes.contains_key("shin.fk.R"));
    }

    #[test]
    fn given_downstream_chain_when_expanding_then_only_fk_duplicate_is_created() {
        let mut arena = leg_arena();
        // Expand the upstream chain first so foot.fk can re-chain onto shin.fk.
        let entries = [
            leaf_shin_entry(),
            ChainEntry {
                base: "foot",
                topology: ChainTopology::DownStream,
                fk_layer: LayerSet::LEG_FK,
                ik_layer: LayerSet::LEG_IK,
                switch: "LegIk",
            },
        ];
        expand_ik_chains(
            &mut arena,
            &entries,
            &mut HashMap::new(),
            &mut HashMap::new(),
            Strictness::Lenient,
        )
        .unwrap();

        assert!(arena.contains("foot.fk.L"));
        assert!(!arena.contains("foot.ik.L"));
        let fk = arena.get(arena.lookup("foot.fk.L").unwrap()).unwrap();
        assert_eq!(fk.parent, arena.lookup("shin.fk.L"));
    }

    #[test]
    fn given_missing_chain_bone_when_strict_then_expansion_fails() {
        let mut arena = leg_arena();
        let entry = ChainEntry {
            base: "tail",
            topology: ChainTopology::DownStream,
            fk_layer: LayerSet::MAIN,
            ik_layer: LayerSet::MAIN,
            switch: "TailIk",
        };
        let result = expand_ik_chains(
            &mut arena,
            &[entry],
            &mut HashMap::new(),
            &mut HashMap::new(),
            Strictness::Strict,
        );
        assert!(matches!(result, Err(RigError::MissingReference { .. })));
    }
}
