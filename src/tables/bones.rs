//! Armature tables: bone structure rows, head/tail geometry rows, custom
//! display shapes and rotation limits. Rows are parent-first; the hierarchy
//! builder relies on that order.

use std::f64::consts::PI;

use crate::rig::bones::{
    ArmatureEntry, BoneOptions, HeadTailEntry, HeadTailSpec, LayerSet, RollSpec, RotationMode,
};
use crate::rig::constraints::RotationLimit;

const DEFORM: BoneOptions = BoneOptions::DEFORM;
const LINKED: BoneOptions = BoneOptions::DEFORM.union(BoneOptions::CONNECTED);
const MARKER: BoneOptions = BoneOptions::WIRE;
const POLE: BoneOptions = BoneOptions::WIRE.union(BoneOptions::NO_LOCK);
const SLIDER: BoneOptions = BoneOptions::WIRE
    .union(BoneOptions::NO_LOCK)
    .union(BoneOptions::LOCK_ROTATION)
    .union(BoneOptions::LOCK_SCALE);

const QUAT: Option<RotationMode> = Some(RotationMode::Quaternion);
const HINGE: Option<RotationMode> = Some(RotationMode::EulerXyz);

// ─── base skeleton ──────────────────────────────────────────────────────────

pub const BASE_ARMATURE: &[ArmatureEntry] = &[
    ArmatureEntry { name: "root", roll: RollSpec::Explicit(0.0), parent: None, options: BoneOptions::WIRE.union(BoneOptions::NO_INHERIT_SCALE), layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "hips", roll: RollSpec::FromPlane("PlaneSpine"), parent: Some("root"), options: DEFORM.union(BoneOptions::NO_LOCK), layers: LayerSet::SPINE, rotation_mode: QUAT },
    ArmatureEntry { name: "spine", roll: RollSpec::FromPlane("PlaneSpine"), parent: Some("hips"), options: LINKED, layers: LayerSet::SPINE, rotation_mode: QUAT },
    ArmatureEntry { name: "chest", roll: RollSpec::FromPlane("PlaneSpine"), parent: Some("spine"), options: LINKED, layers: LayerSet::SPINE, rotation_mode: QUAT },
    ArmatureEntry { name: "neck", roll: RollSpec::FromPlane("PlaneSpine"), parent: Some("chest"), options: LINKED, layers: LayerSet::SPINE, rotation_mode: QUAT },
    ArmatureEntry { name: "head", roll: RollSpec::FromBone("neck"), parent: Some("neck"), options: LINKED, layers: LayerSet::SPINE, rotation_mode: QUAT },

    ArmatureEntry { name: "clavicle.L", roll: RollSpec::Explicit(0.0), parent: Some("chest"), options: DEFORM, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "upper_arm.L", roll: RollSpec::FromPlane("PlaneArm.L"), parent: Some("clavicle.L"), options: DEFORM, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "forearm.L", roll: RollSpec::FromPlane("PlaneArm.L"), parent: Some("upper_arm.L"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: HINGE },
    ArmatureEntry { name: "hand.L", roll: RollSpec::FromPlane("PlaneHand.L"), parent: Some("forearm.L"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "elbowPT.L", roll: RollSpec::Explicit(0.0), parent: Some("chest"), options: POLE, layers: LayerSet::ARM_IK, rotation_mode: None },

    ArmatureEntry { name: "clavicle.R", roll: RollSpec::Explicit(0.0), parent: Some("chest"), options: DEFORM, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "upper_arm.R", roll: RollSpec::FromPlane("PlaneArm.R"), parent: Some("clavicle.R"), options: DEFORM, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "forearm.R", roll: RollSpec::FromPlane("PlaneArm.R"), parent: Some("upper_arm.R"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: HINGE },
    ArmatureEntry { name: "hand.R", roll: RollSpec::FromPlane("PlaneHand.R"), parent: Some("forearm.R"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "elbowPT.R", roll: RollSpec::Explicit(0.0), parent: Some("chest"), options: POLE, layers: LayerSet::ARM_IK, rotation_mode: None },

    ArmatureEntry { name: "thigh.L", roll: RollSpec::FromPlane("PlaneLeg.L"), parent: Some("hips"), options: DEFORM, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "shin.L", roll: RollSpec::FromPlane("PlaneLeg.L"), parent: Some("thigh.L"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: HINGE },
    ArmatureEntry { name: "foot.L", roll: RollSpec::FromPlane("PlaneFoot.L"), parent: Some("shin.L"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "toe.L", roll: RollSpec::FromBone("foot.L"), parent: Some("foot.L"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "heel.L", roll: RollSpec::FromBoneOffset("foot.L", PI), parent: Some("foot.L"), options: MARKER, layers: LayerSet::TWEAK, rotation_mode: None },
    ArmatureEntry { name: "kneePT.L", roll: RollSpec::Explicit(0.0), parent: Some("hips"), options: POLE, layers: LayerSet::LEG_IK, rotation_mode: None },

    ArmatureEntry { name: "thigh.R", roll: RollSpec::FromPlane("PlaneLeg.R"), parent: Some("hips"), options: DEFORM, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "shin.R", roll: RollSpec::FromPlane("PlaneLeg.R"), parent: Some("thigh.R"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: HINGE },
    ArmatureEntry { name: "foot.R", roll: RollSpec::FromPlane("PlaneFoot.R"), parent: Some("shin.R"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "toe.R", roll: RollSpec::FromBone("foot.R"), parent: Some("foot.R"), options: LINKED, layers: LayerSet::MAIN, rotation_mode: QUAT },
    ArmatureEntry { name: "heel.R", roll: RollSpec::FromBoneOffset("foot.R", PI), parent: Some("foot.R"), options: MARKER, layers: LayerSet::TWEAK, rotation_mode: None },
    ArmatureEntry { name: "kneePT.R", roll: RollSpec::Explicit(0.0), parent: Some("hips"), options: POLE, layers: LayerSet::LEG_IK, rotation_mode: None },
];

pub const BASE_HEAD_TAILS: &[HeadTailEntry] = &[
    HeadTailEntry { bone: "root", head: HeadTailSpec::Joint("ground"), tail: HeadTailSpec::Offset("ground", [0.0, -0.6, 0.0]) },
    HeadTailEntry { bone: "hips", head: HeadTailSpec::Joint("pelvis"), tail: HeadTailSpec::Joint("spine-1") },
    HeadTailEntry { bone: "spine", head: HeadTailSpec::Joint("spine-1"), tail: HeadTailSpec::Joint("spine-2") },
    HeadTailEntry { bone: "chest", head: HeadTailSpec::Joint("spine-2"), tail: HeadTailSpec::Joint("spine-3") },
    HeadTailEntry { bone: "neck", head: HeadTailSpec::Joint("spine-3"), tail: HeadTailSpec::Joint("neck") },
    HeadTailEntry { bone: "head", head: HeadTailSpec::Joint("neck"), tail: HeadTailSpec::Joint("head-top") },

    HeadTailEntry { bone: "clavicle.L", head: HeadTailSpec::Joint("clavicle.L"), tail: HeadTailSpec::Joint("shoulder.L") },
    HeadTailEntry { bone: "upper_arm.L", head: HeadTailSpec::Joint("shoulder.L"), tail: HeadTailSpec::Joint("elbow.L") },
    HeadTailEntry { bone: "forearm.L", head: HeadTailSpec::Joint("elbow.L"), tail: HeadTailSpec::Joint("wrist.L") },
    HeadTailEntry { bone: "hand.L", head: HeadTailSpec::Joint("wrist.L"), tail: HeadTailSpec::Joint("palm.L") },
    HeadTailEntry { bone: "elbowPT.L", head: HeadTailSpec::Joint("elbowPT.L"), tail: HeadTailSpec::Offset("elbowPT.L", [0.0, 0.2, 0.0]) },

    HeadTailEntry { bone: "clavicle.R", head: HeadTailSpec::Joint("clavicle.R"), tail: HeadTailSpec::Joint("shoulder.R") },
    HeadTailEntry { bone: "upper_arm.R", head: HeadTailSpec::Joint("shoulder.R"), tail: HeadTailSpec::Joint("elbow.R") },
    HeadTailEntry { bone: "forearm.R", head: HeadTailSpec::Joint("elbow.R"), tail: HeadTailSpec::Joint("wrist.R") },
    HeadTailEntry { bone: "hand.R", head: HeadTailSpec::Joint("wrist.R"), tail: HeadTailSpec::Joint("palm.R") },
    HeadTailEntry { bone: "elbowPT.R", head: HeadTailSpec::Joint("elbowPT.R"), tail: HeadTailSpec::Offset("elbowPT.R", [0.0, 0.2, 0.0]) },

    HeadTailEntry { bone: "thigh.L", head: HeadTailSpec::Joint("hip.L"), tail: HeadTailSpec::Joint("knee.L") },
    HeadTailEntry { bone: "shin.L", head: HeadTailSpec::Joint("knee.L"), tail: HeadTailSpec::Joint("ankle.L") },
    HeadTailEntry { bone: "foot.L", head: HeadTailSpec::Joint("ankle.L"), tail: HeadTailSpec::Joint("toe.L") },
    HeadTailEntry { bone: "toe.L", head: HeadTailSpec::Joint("toe.L"), tail: HeadTailSpec::Joint("toe-tip.L") },
    HeadTailEntry { bone: "heel.L", head: HeadTailSpec::Blend((0.5, "ankle.L"), (0.5, "heel.L")), tail: HeadTailSpec::Joint("heel-base.L") },
    HeadTailEntry { bone: "kneePT.L", head: HeadTailSpec::Joint("kneePT.L"), tail: HeadTailSpec::Offset("kneePT.L", [0.0, -0.2, 0.0]) },

    HeadTailEntry { bone: "thigh.R", head: HeadTailSpec::Joint("hip.R"), tail: HeadTailSpec::Joint("knee.R") },
    HeadTailEntry { bone: "shin.R", head: HeadTailSpec::Joint("knee.R"), tail: HeadTailSpec::Joint("ankle.R") },
    HeadTailEntry { bone: "foot.R", head: HeadTailSpec::Joint("ankle.R"), tail: HeadTailSpec::Joint("toe.R") },
    HeadTailEntry { bone: "toe.R", head: HeadTailSpec::Joint("toe.R"), tail: HeadTailSpec::Joint("toe-tip.R") },
    HeadTailEntry { bone: "heel.R", head: HeadTailSpec::Blend((0.5, "ankle.R"), (0.5, "heel.R")), tail: HeadTailSpec::Joint("heel-base.R") },
    HeadTailEntry { bone: "kneePT.R", head: HeadTailSpec::Joint("kneePT.R"), tail: HeadTailSpec::Offset("kneePT.R", [0.0, -0.2, 0.0]) },
];

// ─── muscle helpers ─────────────────────────────────────────────────────────

pub const MUSCLE_ARMATURE: &[ArmatureEntry] = &[
    ArmatureEntry { name: "deltoid.L", roll: RollSpec::FromPlane("PlaneDeltoid.L"), parent: Some("clavicle.L"), options: DEFORM, layers: LayerSet::MUSCLE, rotation_mode: None },
    ArmatureEntry { name: "elbow_fan.L", roll: RollSpec::FromBone("forearm.L"), parent: Some("upper_arm.L"), options: DEFORM, layers: LayerSet::MUSCLE, rotation_mode: None },
    ArmatureEntry { name: "knee_fan.L", roll: RollSpec::FromBone("shin.L"), parent: Some("thigh.L"), options: DEFORM, layers: LayerSet::MUSCLE, rotation_mode: None },
    ArmatureEntry { name: "deltoid.R", roll: RollSpec::FromPlane("PlaneDeltoid.R"), parent: Some("clavicle.R"), options: DEFORM, layers: LayerSet::MUSCLE, rotation_mode: None },
    ArmatureEntry { name: "elbow_fan.R", roll: RollSpec::FromBone("forearm.R"), parent: Some("upper_arm.R"), options: DEFORM, layers: LayerSet::MUSCLE, rotation_mode: None },
    ArmatureEntry { name: "knee_fan.R", roll: RollSpec::FromBone("shin.R"), parent: Some("thigh.R"), options: DEFORM, layers: LayerSet::MUSCLE, rotation_mode: None },
];

pub const MUSCLE_HEAD_TAILS: &[HeadTailEntry] = &[
    HeadTailEntry { bone: "deltoid.L", head: HeadTailSpec::Joint("shoulder.L"), tail: HeadTailSpec::Joint("deltoid.L") },
    HeadTailEntry { bone: "elbow_fan.L", head: HeadTailSpec::Joint("elbow.L"), tail: HeadTailSpec::Joint("elbow-fan.L") },
    HeadTailEntry { bone: "knee_fan.L", head: HeadTailSpec::Joint("knee.L"), tail: HeadTailSpec::Joint("knee-fan.L") },
    HeadTailEntry { bone: "deltoid.R", head: HeadTailSpec::Joint("shoulder.R"), tail: HeadTailSpec::Joint("deltoid.R") },
    HeadTailEntry { bone: "elbow_fan.R", head: HeadTailSpec::Joint("elbow.R"), tail: HeadTailSpec::Joint("elbow-fan.R") },
    HeadTailEntry { bone: "knee_fan.R", head: HeadTailSpec::Joint("knee.R"), tail: HeadTailSpec::Joint("knee-fan.R") },
];

// ─── fingers ────────────────────────────────────────────────────────────────

pub const FINGER_ARMATURE: &[ArmatureEntry] = &[
    ArmatureEntry { name: "thumb.01.L", roll: RollSpec::FromBone("hand.L"), parent: Some("hand.L"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "thumb.02.L", roll: RollSpec::FromBone("thumb.01.L"), parent: Some("thumb.01.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "thumb.03.L", roll: RollSpec::FromBone("thumb.02.L"), parent: Some("thumb.02.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "index.01.L", roll: RollSpec::FromBone("hand.L"), parent: Some("hand.L"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "index.02.L", roll: RollSpec::FromBone("index.01.L"), parent: Some("index.01.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "index.03.L", roll: RollSpec::FromBone("index.02.L"), parent: Some("index.02.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "middle.01.L", roll: RollSpec::FromBone("hand.L"), parent: Some("hand.L"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "middle.02.L", roll: RollSpec::FromBone("middle.01.L"), parent: Some("middle.01.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "middle.03.L", roll: RollSpec::FromBone("middle.02.L"), parent: Some("middle.02.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "ring.01.L", roll: RollSpec::FromBone("hand.L"), parent: Some("hand.L"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "ring.02.L", roll: RollSpec::FromBone("ring.01.L"), parent: Some("ring.01.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "ring.03.L", roll: RollSpec::FromBone("ring.02.L"), parent: Some("ring.02.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "pinky.01.L", roll: RollSpec::FromBone("hand.L"), parent: Some("hand.L"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "pinky.02.L", roll: RollSpec::FromBone("pinky.01.L"), parent: Some("pinky.01.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "pinky.03.L", roll: RollSpec::FromBone("pinky.02.L"), parent: Some("pinky.02.L"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },

    ArmatureEntry { name: "thumb.01.R", roll: RollSpec::FromBone("hand.R"), parent: Some("hand.R"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "thumb.02.R", roll: RollSpec::FromBone("thumb.01.R"), parent: Some("thumb.01.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "thumb.03.R", roll: RollSpec::FromBone("thumb.02.R"), parent: Some("thumb.02.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "index.01.R", roll: RollSpec::FromBone("hand.R"), parent: Some("hand.R"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "index.02.R", roll: RollSpec::FromBone("index.01.R"), parent: Some("index.01.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "index.03.R", roll: RollSpec::FromBone("index.02.R"), parent: Some("index.02.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "middle.01.R", roll: RollSpec::FromBone("hand.R"), parent: Some("hand.R"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "middle.02.R", roll: RollSpec::FromBone("middle.01.R"), parent: Some("middle.01.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "middle.03.R", roll: RollSpec::FromBone("middle.02.R"), parent: Some("middle.02.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "ring.01.R", roll: RollSpec::FromBone("hand.R"), parent: Some("hand.R"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "ring.02.R", roll: RollSpec::FromBone("ring.01.R"), parent: Some("ring.01.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "ring.03.R", roll: RollSpec::FromBone("ring.02.R"), parent: Some("ring.02.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "pinky.01.R", roll: RollSpec::FromBone("hand.R"), parent: Some("hand.R"), options: DEFORM, layers: LayerSet::FINGER, rotation_mode: QUAT },
    ArmatureEntry { name: "pinky.02.R", roll: RollSpec::FromBone("pinky.01.R"), parent: Some("pinky.01.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
    ArmatureEntry { name: "pinky.03.R", roll: RollSpec::FromBone("pinky.02.R"), parent: Some("pinky.02.R"), options: LINKED, layers: LayerSet::FINGER, rotation_mode: HINGE },
];

pub const FINGER_HEAD_TAILS: &[HeadTailEntry] = &[
    HeadTailEntry { bone: "thumb.01.L", head: HeadTailSpec::Joint("thumb-1.L"), tail: HeadTailSpec::Joint("thumb-2.L") },
    HeadTailEntry { bone: "thumb.02.L", head: HeadTailSpec::Joint("thumb-2.L"), tail: HeadTailSpec::Joint("thumb-3.L") },
    HeadTailEntry { bone: "thumb.03.L", head: HeadTailSpec::Joint("thumb-3.L"), tail: HeadTailSpec::Joint("thumb-4.L") },
    HeadTailEntry { bone: "index.01.L", head: HeadTailSpec::Joint("index-1.L"), tail: HeadTailSpec::Joint("index-2.L") },
    HeadTailEntry { bone: "index.02.L", head: HeadTailSpec::Joint("index-2.L"), tail: HeadTailSpec::Joint("index-3.L") },
    HeadTailEntry { bone: "index.03.L", head: HeadTailSpec::Joint("index-3.L"), tail: HeadTailSpec::Joint("index-4.L") },
    HeadTailEntry { bone: "middle.01.L", head: HeadTailSpec::Joint("middle-1.L"), tail: HeadTailSpec::Joint("middle-2.L") },
    HeadTailEntry { bone: "middle.02.L", head: HeadTailSpec::Joint("middle-2.L"), tail: HeadTailSpec::Joint("middle-3.L") },
    HeadTailEntry { bone: "middle.03.L", head: HeadTailSpec::Joint("middle-3.L"), tail: HeadTailSpec::Joint("middle-4.L") },
    HeadTailEntry { bone: "ring.01.L", head: HeadTailSpec::Joint("ring-1.L"), tail: HeadTailSpec::Joint("ring-2.L") },
    HeadTailEntry { bone: "ring.02.L", head: HeadTailSpec::Joint("ring-2.L"), tail: HeadTailSpec::Joint("ring-3.L") },
    HeadTailEntry { bone: "ring.03.L", head: HeadTailSpec::Joint("ring-3.L"), tail: HeadTailSpec::Joint("ring-4.L") },
    HeadTailEntry { bone: "pinky.01.L", head: HeadTailSpec::Joint("pinky-1.L"), tail: HeadTailSpec::Joint("pinky-2.L") },
    HeadTailEntry { bone: "pinky.02.L", head: HeadTailSpec::Joint("pinky-2.L"), tail: HeadTailSpec::Joint("pinky-3.L") },
    HeadTailEntry { bone: "pinky.03.L", head: HeadTailSpec::Joint("pinky-3.L"), tail: HeadTailSpec::Joint("pinky-4.L") },

    HeadTailEntry { bone: "thumb.01.R", head: HeadTailSpec::Joint("thumb-1.R"), tail: HeadTailSpec::Joint("thumb-2.R") },
    HeadTailEntry { bone: "thumb.02.R", head: HeadTailSpec::Joint("thumb-2.R"), tail: HeadTailSpec::Joint("thumb-3.R") },
    HeadTailEntry { bone: "thumb.03.R", head: HeadTailSpec::Joint("thumb-3.R"), tail: HeadTailSpec::Joint("thumb-4.R") },
    HeadTailEntry { bone: "index.01.R", head: HeadTailSpec::Joint("index-1.R"), tail: HeadTailSpec::Joint("index-2.R") },
    HeadTailEntry { bone: "index.02.R", head: HeadTailSpec::Joint("index-2.R"), tail: HeadTailSpec::Joint("index-3.R") },
    HeadTailEntry { bone: "index.03.R", head: HeadTailSpec::Joint("index-3.R"), tail: HeadTailSpec::Joint("index-4.R") },
    HeadTailEntry { bone: "middle.01.R", head: HeadTailSpec::Joint("middle-1.R"), tail: HeadTailSpec::Joint("middle-2.R") },
    HeadTailEntry { bone: "middle.02.R", head: HeadTailSpec::Joint("middle-2.R"), tail: HeadTailSpec::Joint("middle-3.R") },
    HeadTailEntry { bone: "middle.03.R", head: HeadTailSpec::Joint("middle-3.R"), tail: HeadTailSpec::Joint("middle-4.R") },
    HeadTailEntry { bone: "ring.01.R", head: HeadTailSpec::Joint("ring-1.R"), tail: HeadTailSpec::Joint("ring-2.R") },
    HeadTailEntry { bone: "ring.02.R", head: HeadTailSpec::Joint("ring-2.R"), tail: HeadTailSpec::Joint("ring-3.R") },
    HeadTailEntry { bone: "ring.03.R", head: HeadTailSpec::Joint("ring-3.R"), tail: HeadTailSpec::Joint("ring-4.R") },
    HeadTailEntry { bone: "pinky.01.R", head: HeadTailSpec::Joint("pinky-1.R"), tail: HeadTailSpec::Joint("pinky-2.R") },
    HeadTailEntry { bone: "pinky.02.R", head: HeadTailSpec::Joint("pinky-2.R"), tail: HeadTailSpec::Joint("pinky-3.R") },
    HeadTailEntry { bone: "pinky.03.R", head: HeadTailSpec::Joint("pinky-3.R"), tail: HeadTailSpec::Joint("pinky-4.R") },
];

// ─── face and control panel ─────────────────────────────────────────────────

pub const FACE_ARMATURE: &[ArmatureEntry] = &[
    ArmatureEntry { name: "eye.L", roll: RollSpec::Explicit(0.0), parent: Some("head"), options: DEFORM, layers: LayerSet::FACE, rotation_mode: QUAT },
    ArmatureEntry { name: "eye.R", roll: RollSpec::Explicit(0.0), parent: Some("head"), options: DEFORM, layers: LayerSet::FACE, rotation_mode: QUAT },
    ArmatureEntry { name: "jaw", roll: RollSpec::Explicit(0.0), parent: Some("head"), options: DEFORM, layers: LayerSet::FACE, rotation_mode: QUAT },
];

pub const FACE_HEAD_TAILS: &[HeadTailEntry] = &[
    HeadTailEntry { bone: "eye.L", head: HeadTailSpec::Joint("eye.L"), tail: HeadTailSpec::Offset("eye.L", [0.0, -0.12, 0.0]) },
    HeadTailEntry { bone: "eye.R", head: HeadTailSpec::Joint("eye.R"), tail: HeadTailSpec::Offset("eye.R", [0.0, -0.12, 0.0]) },
    HeadTailEntry { bone: "jaw", head: HeadTailSpec::Joint("jaw"), tail: HeadTailSpec::Joint("chin") },
];

pub const PANEL_ARMATURE: &[ArmatureEntry] = &[
    ArmatureEntry { name: "p_face", roll: RollSpec::Explicit(0.0), parent: Some("head"), options: SLIDER, layers: LayerSet::PANEL, rotation_mode: None },
    ArmatureEntry { name: "p_brow.L", roll: RollSpec::Explicit(0.0), parent: Some("p_face"), options: SLIDER, layers: LayerSet::PANEL, rotation_mode: None },
    ArmatureEntry { name: "p_brow.R", roll: RollSpec::Explicit(0.0), parent: Some("p_face"), options: SLIDER, layers: LayerSet::PANEL, rotation_mode: None },
    ArmatureEntry { name: "p_eye.L", roll: RollSpec::Explicit(0.0), parent: Some("p_face"), options: SLIDER, layers: LayerSet::PANEL, rotation_mode: None },
    ArmatureEntry { name: "p_eye.R", roll: RollSpec::Explicit(0.0), parent: Some("p_face"), options: SLIDER, layers: LayerSet::PANEL, rotation_mode: None },
    ArmatureEntry { name: "p_mouth", roll: RollSpec::Explicit(0.0), parent: Some("p_face"), options: SLIDER, layers: LayerSet::PANEL, rotation_mode: None },
];

pub const PANEL_HEAD_TAILS: &[HeadTailEntry] = &[
    HeadTailEntry { bone: "p_face", head: HeadTailSpec::Joint("p-face"), tail: HeadTailSpec::Offset("p-face", [0.0, 0.0, 0.08]) },
    HeadTailEntry { bone: "p_brow.L", head: HeadTailSpec::Joint("p-brow.L"), tail: HeadTailSpec::Offset("p-brow.L", [0.0, 0.0, 0.04]) },
    HeadTailEntry { bone: "p_brow.R", head: HeadTailSpec::Joint("p-brow.R"), tail: HeadTailSpec::Offset("p-brow.R", [0.0, 0.0, 0.04]) },
    HeadTailEntry { bone: "p_eye.L", head: HeadTailSpec::Joint("p-eye.L"), tail: HeadTailSpec::Offset("p-eye.L", [0.0, 0.0, 0.04]) },
    HeadTailEntry { bone: "p_eye.R", head: HeadTailSpec::Joint("p-eye.R"), tail: HeadTailSpec::Offset("p-eye.R", [0.0, 0.0, 0.04]) },
    HeadTailEntry { bone: "p_mouth", head: HeadTailSpec::Joint("p-mouth"), tail: HeadTailSpec::Offset("p-mouth", [0.0, 0.0, 0.04]) },
];

// ─── display shapes and rotation limits ─────────────────────────────────────

pub const CUSTOM_SHAPES: &[(&str, &str)] = &[
    ("root", "GZM_Root"),
    ("hips", "GZM_CircleHips"),
    ("chest", "GZM_CircleChest"),
    ("head", "GZM_CircleHead"),
    ("upper_arm.L", "GZM_Circle025"),
    ("upper_arm.R", "GZM_Circle025"),
    ("forearm.L", "GZM_Circle025"),
    ("forearm.R", "GZM_Circle025"),
    ("hand.L", "GZM_Hand"),
    ("hand.R", "GZM_Hand"),
    ("thigh.L", "GZM_Circle025"),
    ("thigh.R", "GZM_Circle025"),
    ("shin.L", "GZM_Circle025"),
    ("shin.R", "GZM_Circle025"),
    ("foot.L", "GZM_Foot"),
    ("foot.R", "GZM_Foot"),
    ("elbowPT.L", "GZM_Ball025"),
    ("elbowPT.R", "GZM_Ball025"),
    ("kneePT.L", "GZM_Ball025"),
    ("kneePT.R", "GZM_Ball025"),
];

pub const ROTATION_LIMITS: &[(&str, RotationLimit)] = &[
    ("head", RotationLimit { min_deg: [-60.0, -60.0, -40.0], max_deg: [40.0, 60.0, 40.0] }),
    ("forearm.L", RotationLimit { min_deg: [-5.0, 0.0, 0.0], max_deg: [160.0, 0.0, 0.0] }),
    ("forearm.R", RotationLimit { min_deg: [-5.0, 0.0, 0.0], max_deg: [160.0, 0.0, 0.0] }),
    ("shin.L", RotationLimit { min_deg: [-5.0, 0.0, 0.0], max_deg: [170.0, 0.0, 0.0] }),
    ("shin.R", RotationLimit { min_deg: [-5.0, 0.0, 0.0], max_deg: [170.0, 0.0, 0.0] }),
];
