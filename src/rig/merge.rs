use std::collections::{BTreeMap, HashMap};

use log::warn;

use crate::error::{RefKind, Result, RigError};
use crate::mesh::VertexWeights;
use crate::rig::bones::BoneArena;
use crate::rig::config::Strictness;

/// One row of the merge table: the surviving bone absorbs the listed bones
/// in order.
#[derive(Debug, Clone, Copy)]
pub struct MergeEntry {
    pub survivor: &'static str,
    pub merged: &'static [&'static str],
}

/// Merge bone groups: the survivor's tail extends to the last merged bone's
/// tail, vertex weights concatenate (shared vertices sum), children reparent
/// to the survivor and the merged bones leave the active set. Constraints
/// that targeted a merged bone re-target the survivor.
pub fn merge_bones(
    arena: &mut BoneArena,
    groups: &mut BTreeMap<String, VertexWeights>,
    entries: &[MergeEntry],
    strictness: Strictness,
) -> Result<()> {
    for entry in entries {
        let Some(survivor_index) = arena.lookup(entry.survivor) else {
            match strictness {
                Strictness::Lenient => {
                    warn!("merge: survivor `{}` not in rig, skipping", entry.survivor);
                    continue;
                }
                Strictness::Strict => {
                    return Err(RigError::missing("merge_bones", RefKind::Bone, entry.survivor));
                }
            }
        };

        for merged_name in entry.merged {
            let Some(merged_index) = arena.lookup(merged_name) else {
                match strictness {
                    Strictness::Lenient => {
                        warn!("merge: `{merged_name}` not in rig, skipping");
                        continue;
                    }
                    Strictness::Strict => {
                        return Err(RigError::missing(entry.survivor, RefKind::Bone, merged_name));
                    }
                }
            };

            arena.reparent_children(merged_index, survivor_index);
            let Some(merged) = arena.remove(merged_index) else {
                continue;
            };

            if let Some(survivor) = arena.get_mut(survivor_index) {
                survivor.tail = merged.tail;
            }

            if let Some(absorbed) = groups.remove(*merged_name) {
                let surviving = groups.entry(entry.survivor.to_string()).or_default();
                *surviving = sum_weights(surviving, &absorbed);
            }

            retarget_constraints(arena, merged_name, entry.survivor);
        }
    }
    Ok(())
}

/// Concatenate two weight lists, collapsing duplicate vertices by summation.
fn sum_weights(a: &VertexWeights, b: &VertexWeights) -> VertexWeights {
    let mut accumulated: BTreeMap<usize, f64> = BTreeMap::new();
    for &(vertex, weight) in a.iter().chain(b.iter()) {
        *accumulated.entry(vertex).or_insert(0.0) += weight;
    }
    accumulated.into_iter().collect()
}

fn retarget_constraints(arena: &mut BoneArena, from: &str, to: &str) {
    for (_, bone) in arena.iter_mut() {
        for constraint in &mut bone.constraints {
            for target in constraint.targets_mut() {
                if target == from {
                    *target = to.to_string();
                }
            }
        }
    }
}

/// Apply the deform-bone naming convention: every deform bone whose name
/// lacks `prefix` is renamed (bone and vertex group), and every constraint
/// target is re-resolved under the original or prefixed name. A target that
/// resolves under neither is a dangling constraint.
pub fn rename_deform_bones(
    arena: &mut BoneArena,
    groups: &mut BTreeMap<String, VertexWeights>,
    prefix: &str,
) -> Result<()> {
    if prefix.is_empty() {
        return Ok(());
    }

    let pending: Vec<(usize, String)> = arena
        .iter()
        .filter(|(_, bone)| bone.deform() && !bone.name.starts_with(prefix))
        .map(|(index, bone)| (index, bone.name.clone()))
        .collect();

    let mut renamed: HashMap<String, String> = HashMap::new();
    for (index, old_name) in pending {
        let new_name = format!("{prefix}{old_name}");
        arena.rename(index, new_name.clone())?;
        if let Some(weights) = groups.remove(&old_name) {
            groups.insert(new_name.clone(), weights);
        }
        renamed.insert(old_name, new_name);
    }

    // Re-resolve every constraint target; renamed bones are looked up under
    // their new name, anything else must still exist as-is.
    let mut fixups: Vec<(usize, String)> = Vec::new();
    for (index, bone) in arena.iter() {
        for constraint in &bone.constraints {
            let mut probe = constraint.clone();
            for target in probe.targets_mut() {
                if arena.contains(target) {
                    continue;
                }
                if renamed.contains_key(target.as_str()) {
                    fixups.push((index, target.clone()));
                    continue;
                }
                let prefixed = format!("{prefix}{target}");
                if arena.contains(&prefixed) {
                    fixups.push((index, target.clone()));
                    continue;
                }
                return Err(RigError::DanglingConstraint {
                    bone: bone.name.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    for (index, old_target) in fixups {
        let new_target = renamed
            .get(&old_target)
            .cloned()
            .unwrap_or_else(|| format!("{prefix}{old_target}"));
        if let Some(bone) = arena.get_mut(index) {
            for constraint in &mut bone.constraints {
                for target in constraint.targets_mut() {
                    if *target == old_target {
                        *target = new_target.clone();
                    }
                }
            }
        }
    }

    Ok(())
}
