use std::collections::{HashMap, HashSet};

use bitflags::bitflags;
use log::warn;

use crate::error::{RefKind, Result, RigError};
use crate::geometry::{self, EPSILON, Vec3};
use crate::rig::config::Strictness;
use crate::rig::constraints::Constraint;
use crate::rig::joints::JointTable;
use crate::rig::planes::PlaneTable;

bitflags! {
    /// Per-bone option bits carried by the armature tables.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BoneOptions: u32 {
        /// Transform drives mesh skinning.
        const DEFORM = 1 << 0;
        /// Head welded to the parent's tail.
        const CONNECTED = 1 << 1;
        /// Hidden from interactive selection.
        const RESTRICT_SELECT = 1 << 2;
        /// Wireframe display (control/marker bones).
        const WIRE = 1 << 3;
        /// Do not inherit parent scale.
        const NO_INHERIT_SCALE = 1 << 4;
        /// Opt out of the default parented-bone translation lock.
        const NO_LOCK = 1 << 5;
        /// Lock all rotation axes.
        const LOCK_ROTATION = 1 << 6;
        /// Lock all scale axes.
        const LOCK_SCALE = 1 << 7;
    }
}

bitflags! {
    /// Visibility/function layer bitmask grouping bones into sets.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerSet: u32 {
        const MAIN      = 1 << 0;
        const SPINE     = 1 << 1;
        const ARM_FK    = 1 << 2;
        const ARM_IK    = 1 << 3;
        const LEG_FK    = 1 << 4;
        const LEG_IK    = 1 << 5;
        const TWEAK     = 1 << 6;
        const FACE      = 1 << 7;
        const FINGER    = 1 << 8;
        const PANEL     = 1 << 9;
        const MUSCLE    = 1 << 10;
        const DEFORM    = 1 << 11;
        /// Hidden mechanism bones (constraint plumbing).
        const MECHANISM = 1 << 12;
    }
}

/// Rotation mode hint exported with control bones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    Quaternion,
    EulerXyz,
    EulerZxy,
}

impl RotationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RotationMode::Quaternion => "QUATERNION",
            RotationMode::EulerXyz => "XYZ",
            RotationMode::EulerZxy => "ZXY",
        }
    }
}

/// Roll field of an armature entry, fully typed instead of the original
/// "string that might be a plane or a bone" convention.
#[derive(Debug, Clone, Copy)]
pub enum RollSpec {
    Explicit(f64),
    FromPlane(&'static str),
    FromBone(&'static str),
    FromBoneOffset(&'static str, f64),
}

/// Head or tail position source for a bone.
#[derive(Debug, Clone, Copy)]
pub enum HeadTailSpec {
    Joint(&'static str),
    /// Joint position plus a scale-multiplied local offset.
    Offset(&'static str, [f64; 3]),
    /// Weighted blend of two joints.
    Blend((f64, &'static str), (f64, &'static str)),
}

#[derive(Debug, Clone, Copy)]
pub struct HeadTailEntry {
    pub bone: &'static str,
    pub head: HeadTailSpec,
    pub tail: HeadTailSpec,
}

/// One armature-table row: structure and display attributes of a bone.
/// Geometry and roll resolve in later passes.
#[derive(Debug, Clone, Copy)]
pub struct ArmatureEntry {
    pub name: &'static str,
    pub roll: RollSpec,
    pub parent: Option<&'static str>,
    pub options: BoneOptions,
    pub layers: LayerSet,
    pub rotation_mode: Option<RotationMode>,
}

/// A bone under construction. Mutable during the build, frozen into the
/// output list at the end.
#[derive(Debug, Clone)]
pub struct Bone {
    pub name: String,
    /// Arena index of the parent; authoritative direction is child → parent.
    pub parent: Option<usize>,
    pub head: Vec3,
    pub tail: Vec3,
    pub roll: f64,
    pub options: BoneOptions,
    pub layers: LayerSet,
    pub lock_location: [bool; 3],
    pub lock_rotation: [bool; 3],
    pub lock_scale: [bool; 3],
    pub rotation_mode: Option<RotationMode>,
    pub constraints: Vec<Constraint>,
}

impl Bone {
    pub fn new(name: impl Into<String>) -> Self {
        Bone {
            name: name.into(),
            parent: None,
            head: Vec3::zeros(),
            tail: Vec3::zeros(),
            roll: 0.0,
            options: BoneOptions::empty(),
            layers: LayerSet::MAIN,
            lock_location: [false; 3],
            lock_rotation: [false; 3],
            lock_scale: [false; 3],
            rotation_mode: None,
            constraints: Vec::new(),
        }
    }

    pub fn length(&self) -> f64 {
        (self.tail - self.head).norm()
    }

    pub fn deform(&self) -> bool {
        self.options.contains(BoneOptions::DEFORM)
    }
}

/// Arena-backed bone store: stable integer indices, tombstones on removal,
/// and a name index kept in sync through renames.
#[derive(Debug, Default)]
pub struct BoneArena {
    slots: Vec<Option<Bone>>,
    index: HashMap<String, usize>,
}

impl BoneArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, bone: Bone) -> Result<usize> {
        if self.index.contains_key(&bone.name) {
            return Err(RigError::config(
                "bones",
                format!("duplicate bone name `{}`", bone.name),
            ));
        }
        let slot = self.slots.len();
        self.index.insert(bone.name.clone(), slot);
        self.slots.push(Some(bone));
        Ok(slot)
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn require(&self, referrer: &str, name: &str) -> Result<usize> {
        self.lookup(name)
            .ok_or_else(|| RigError::missing(referrer, RefKind::Bone, name))
    }

    pub fn get(&self, index: usize) -> Option<&Bone> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bone> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.get(index).map(|bone| bone.name.as_str())
    }

    pub fn rename(&mut self, index: usize, new_name: String) -> Result<()> {
        if self.index.contains_key(&new_name) {
            return Err(RigError::config(
                "bones",
                format!("rename collision on `{new_name}`"),
            ));
        }
        let Some(bone) = self.slots.get_mut(index).and_then(Option::as_mut) else {
            return Ok(());
        };
        self.index.remove(&bone.name);
        self.index.insert(new_name.clone(), index);
        bone.name = new_name;
        Ok(())
    }

    /// Tombstone the slot. Callers reparent children first.
    pub fn remove(&mut self, index: usize) -> Option<Bone> {
        let bone = self.slots.get_mut(index)?.take()?;
        self.index.remove(&bone.name);
        Some(bone)
    }

    pub fn reparent_children(&mut self, from: usize, to: usize) {
        for slot in self.slots.iter_mut().flatten() {
            if slot.parent == Some(from) {
                slot.parent = Some(to);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Bone)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|bone| (index, bone)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Bone)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|bone| (index, bone)))
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Final-output invariants: every parent link points at a live bone and
    /// the parent graph is acyclic.
    pub fn validate(&self) -> Result<()> {
        for (index, bone) in self.iter() {
            if let Some(parent) = bone.parent {
                if self.get(parent).is_none() {
                    return Err(RigError::missing(&bone.name, RefKind::Bone, &format!("#{parent}")));
                }
            }

            let mut cursor = bone.parent;
            let mut hops = 0usize;
            while let Some(next) = cursor {
                if next == index || hops > self.slots.len() {
                    return Err(RigError::config(
                        "bones",
                        format!("parent cycle through `{}`", bone.name),
                    ));
                }
                cursor = self.get(next).and_then(|b| b.parent);
                hops += 1;
            }
        }
        Ok(())
    }
}

fn resolve_head_tail(
    bone: &str,
    spec: HeadTailSpec,
    joints: &JointTable,
    scale: f64,
) -> Result<Vec3> {
    match spec {
        HeadTailSpec::Joint(name) => joints.require(bone, name),
        HeadTailSpec::Offset(name, delta) => {
            Ok(joints.require(bone, name)? + Vec3::from(delta) * scale)
        }
        HeadTailSpec::Blend((w1, a), (w2, b)) => {
            Ok(joints.require(bone, a)? * w1 + joints.require(bone, b)? * w2)
        }
    }
}

/// Instantiate the bone graph from the armature tables in three passes:
/// structure (parent links, flag decoding), geometry (head/tail), roll.
///
/// Entries are processed in table order; parents and roll-source bones must
/// appear before their dependents, which the hand-ordered tables guarantee.
pub fn build_hierarchy(
    entries: &[ArmatureEntry],
    head_tails: &[HeadTailEntry],
    joints: &JointTable,
    planes: &PlaneTable,
    scale: f64,
    strictness: Strictness,
) -> Result<BoneArena> {
    let mut arena = BoneArena::new();

    // Pass 1: structure and flags.
    for entry in entries {
        let parent = match entry.parent {
            Some(parent_name) => Some(arena.require(entry.name, parent_name)?),
            None => None,
        };

        let mut bone = Bone::new(entry.name);
        bone.parent = parent;
        bone.options = entry.options;
        bone.layers = entry.layers;
        bone.rotation_mode = entry.rotation_mode;

        // Parented bones default to locked translation unless opted out.
        let locked = parent.is_some() && !entry.options.contains(BoneOptions::NO_LOCK);
        bone.lock_location = [locked; 3];
        if entry.options.contains(BoneOptions::LOCK_ROTATION) {
            bone.lock_rotation = [true; 3];
        }
        if entry.options.contains(BoneOptions::LOCK_SCALE) {
            bone.lock_scale = [true; 3];
        }

        arena.insert(bone)?;
    }

    // Pass 2: head/tail geometry.
    let geometry_by_bone: HashMap<&str, &HeadTailEntry> = head_tails
        .iter()
        .map(|entry| (entry.bone, entry))
        .collect();

    for entry in entries {
        let Some(geo) = geometry_by_bone.get(entry.name) else {
            return Err(RigError::config(
                "head_tail",
                format!("no head/tail entry for bone `{}`", entry.name),
            ));
        };
        let head = resolve_head_tail(entry.name, geo.head, joints, scale)?;
        let tail = resolve_head_tail(entry.name, geo.tail, joints, scale)?;

        if (tail - head).norm() < EPSILON {
            match strictness {
                Strictness::Lenient => {
                    warn!("bone `{}` has zero length", entry.name)
                }
                Strictness::Strict => {
                    return Err(RigError::DegenerateGeometry(format!(
                        "bone `{}` has zero length",
                        entry.name
                    )));
                }
            }
        }

        if let Some(index) = arena.lookup(entry.name) {
            if let Some(bone) = arena.get_mut(index) {
                bone.head = head;
                bone.tail = tail;
            }
        }
    }

    // Pass 3: roll, in table order so bone-to-bone copies see resolved values.
    let mut resolved: HashSet<&str> = HashSet::new();
    for entry in entries {
        let roll = resolve_roll(entry, &arena, planes, &resolved, strictness)?;
        resolved.insert(entry.name);
        if let Some(index) = arena.lookup(entry.name) {
            if let Some(bone) = arena.get_mut(index) {
                bone.roll = roll;
            }
        }
    }

    Ok(arena)
}

/// Source bones for `FromBone`/`FromBoneOffset` must already carry their own
/// resolved roll; a later table row still holds the 0.0 placeholder.
fn require_resolved_roll(
    entry: &ArmatureEntry,
    source: &str,
    resolved: &HashSet<&str>,
    strictness: Strictness,
) -> Result<()> {
    if resolved.contains(source) {
        return Ok(());
    }
    match strictness {
        Strictness::Lenient => {
            warn!(
                "bone `{}`: roll source `{source}` appears later in the table, copying its unresolved placeholder",
                entry.name
            );
            Ok(())
        }
        Strictness::Strict => Err(RigError::config(
            "armature",
            format!(
                "bone `{}` copies roll from `{source}` before that bone's roll is resolved",
                entry.name
            ),
        )),
    }
}

fn resolve_roll(
    entry: &ArmatureEntry,
    arena: &BoneArena,
    planes: &PlaneTable,
    resolved: &HashSet<&str>,
    strictness: Strictness,
) -> Result<f64> {
    match entry.roll {
        RollSpec::Explicit(roll) => Ok(roll),
        RollSpec::FromPlane(plane) => {
            let Some(normal) = planes.require(entry.name, plane)? else {
                warn!(
                    "bone `{}`: plane `{plane}` has no normal, falling back to zero roll",
                    entry.name
                );
                return Ok(0.0);
            };
            let index = arena.require(entry.name, entry.name)?;
            let Some(bone) = arena.get(index) else {
                return Ok(0.0);
            };
            Ok(
                geometry::roll_from_normal(&bone.head, &bone.tail, normal.as_ref())
                    .unwrap_or_else(|| {
                        warn!("bone `{}`: degenerate roll frame, using zero roll", entry.name);
                        0.0
                    }),
            )
        }
        RollSpec::FromBone(source) => {
            let index = arena.require(entry.name, source)?;
            require_resolved_roll(entry, source, resolved, strictness)?;
            Ok(arena.get(index).map(|bone| bone.roll).unwrap_or(0.0))
        }
        RollSpec::FromBoneOffset(source, delta) => {
            let index = arena.require(entry.name, source)?;
            require_resolved_roll(entry, source, resolved, strictness)?;
            Ok(arena.get(index).map(|bone| bone.roll).unwrap_or(0.0) + delta)
        }
    }
}
