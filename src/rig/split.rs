use std::collections::BTreeMap;

use log::warn;

use crate::error::{RefKind, Result, RigError};
use crate::geometry::{self, Vec3};
use crate::mesh::VertexWeights;
use crate::rig::bones::{Bone, BoneArena, BoneOptions, LayerSet};
use crate::rig::config::Strictness;
use crate::rig::constraints::Constraint;
use crate::rig::side::{NumberStyle, Side, piece_name};

/// One row of the split-bone table: which long bone becomes how many
/// deformation pieces, tracking which downstream bone.
#[derive(Debug, Clone, Copy)]
pub struct SplitEntry {
    pub base: &'static str,
    /// 2 or 3.
    pub pieces: usize,
    /// Side-agnostic name of the next bone in the chain (hand, foot) the
    /// pieces track. Both the piece-1 IK and the later pieces' partial
    /// copy-rotation aim here rather than at the immediate parent, so the
    /// twist distributes toward the end of the limb in either influence mode.
    pub target: &'static str,
    pub numbering: NumberStyle,
    /// Ramp rotation influence across pieces toward the tracked target
    /// instead of the fixed half share.
    pub follow_next: bool,
}

/// Subdivide the listed bones into 2-3 deformation pieces per side, with
/// linearly blended vertex-group weights.
///
/// Piece 1 inherits the original's parent and an IK constraint (chain length
/// 1) onto the tracked target so it follows the overall bend; later pieces
/// chain onto their predecessor with a partial copy-rotation. Children of the
/// removed original reparent to piece 1, which occupies the original's head.
pub fn split_bones(
    arena: &mut BoneArena,
    groups: &mut BTreeMap<String, VertexWeights>,
    vertex_positions: &[Vec3],
    entries: &[SplitEntry],
    prefix: &str,
    strictness: Strictness,
) -> Result<()> {
    for entry in entries {
        if !(2..=3).contains(&entry.pieces) {
            return Err(RigError::config(
                "split_bones",
                format!("`{}` requests {} pieces, expected 2 or 3", entry.base, entry.pieces),
            ));
        }
        for side in Side::BOTH {
            split_one(arena, groups, vertex_positions, entry, side, prefix, strictness)?;
        }
    }
    Ok(())
}

fn split_one(
    arena: &mut BoneArena,
    groups: &mut BTreeMap<String, VertexWeights>,
    vertex_positions: &[Vec3],
    entry: &SplitEntry,
    side: Side,
    prefix: &str,
    strictness: Strictness,
) -> Result<()> {
    let original_name = side.apply(entry.base);
    let Some(original_index) = arena.lookup(&original_name) else {
        match strictness {
            Strictness::Lenient => {
                warn!("split `{}`: bone `{original_name}` not in rig, skipping", entry.base);
                return Ok(());
            }
            Strictness::Strict => {
                return Err(RigError::missing("split_bones", RefKind::Bone, &original_name));
            }
        }
    };
    let Some(original) = arena.get(original_index).cloned() else {
        return Ok(());
    };

    let n = entry.pieces;
    let target = side.apply(entry.target);

    let piece_names: Vec<String> = (1..=n)
        .map(|k| piece_name(prefix, entry.base, k, entry.numbering, side))
        .collect();

    let mut previous: Option<usize> = None;
    let mut first_piece: Option<usize> = None;
    for (k, name) in piece_names.iter().enumerate() {
        let t0 = k as f64 / n as f64;
        let t1 = (k + 1) as f64 / n as f64;

        let mut bone = Bone::new(name.clone());
        bone.head = geometry::lerp(&original.head, &original.tail, t0);
        bone.tail = geometry::lerp(&original.head, &original.tail, t1);
        bone.roll = original.roll;
        bone.options = BoneOptions::DEFORM | BoneOptions::RESTRICT_SELECT;
        bone.layers = LayerSet::DEFORM;
        bone.lock_location = [true; 3];

        if k == 0 {
            bone.parent = original.parent;
            bone.constraints.push(Constraint::Ik {
                target: target.clone(),
                chain_len: 1,
                pole: None,
            });
        } else {
            bone.parent = previous;
            bone.options |= BoneOptions::CONNECTED;
            let influence = if entry.follow_next {
                k as f64 / (n - 1) as f64
            } else {
                0.5
            };
            bone.constraints.push(Constraint::CopyRotation {
                target: target.clone(),
                influence,
            });
        }

        let index = arena.insert(bone)?;
        if k == 0 {
            first_piece = Some(index);
        }
        previous = Some(index);
    }

    // Weight blending by projected fraction along the original axis.
    if let Some(weights) = groups.remove(&original_name) {
        let mut piece_weights: Vec<VertexWeights> = vec![Vec::new(); n];
        let mut warned_degenerate = false;

        for (vertex, weight) in weights {
            let Some(position) = vertex_positions.get(vertex) else {
                warn!("split `{original_name}`: weight for out-of-range vertex {vertex}");
                continue;
            };

            match geometry::axis_fraction(position, &original.head, &original.tail) {
                Some(fraction) => {
                    let x = fraction.clamp(0.0, 1.0);
                    let scaled = x * (n - 1) as f64;
                    let lower = (scaled.floor() as usize).min(n - 2);
                    let frac = scaled - lower as f64;

                    let first_share = (1.0 - frac) * weight;
                    let second_share = frac * weight;
                    if first_share > 0.0 {
                        piece_weights[lower].push((vertex, first_share));
                    }
                    if second_share > 0.0 {
                        piece_weights[lower + 1].push((vertex, second_share));
                    }
                }
                None => {
                    if !warned_degenerate {
                        warn!("split `{original_name}`: zero-length axis, weights stay on piece 1");
                        warned_degenerate = true;
                    }
                    piece_weights[0].push((vertex, weight));
                }
            }
        }

        for (name, list) in piece_names.iter().zip(piece_weights) {
            if !list.is_empty() {
                groups.insert(name.clone(), list);
            }
        }
    }

    if let Some(first) = first_piece {
        arena.reparent_children(original_index, first);
    }
    arena.remove(original_index);

    Ok(())
}
