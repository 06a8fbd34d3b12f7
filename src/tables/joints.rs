//! Declarative joint tables. Entries are hand-ordered so every operand
//! references an earlier entry; `solve_joints` never re-sorts them.

use crate::rig::joints::{JointDef, JointSpec, OffsetOperand};

// ─── base skeleton ──────────────────────────────────────────────────────────

pub const BASE_JOINTS: &[JointDef] = &[
    // Center column.
    JointDef { name: "pelvis", spec: JointSpec::MarkerCentroid("pelvis") },
    JointDef { name: "spine-1", spec: JointSpec::MarkerCentroid("spine-1") },
    JointDef { name: "spine-2", spec: JointSpec::MarkerCentroid("spine-2") },
    JointDef { name: "spine-3", spec: JointSpec::MarkerCentroid("spine-3") },
    JointDef { name: "neck", spec: JointSpec::MarkerCentroid("neck") },
    JointDef { name: "head", spec: JointSpec::MarkerCentroid("head") },
    JointDef { name: "head-top", spec: JointSpec::MarkerCentroid("head-top") },
    // Pelvis plan position dropped to the lowest sole vertex.
    JointDef { name: "ground", spec: JointSpec::ZClamp(5102, "pelvis") },

    // Left arm.
    JointDef { name: "shoulder.L", spec: JointSpec::MarkerCentroid("l-shoulder") },
    JointDef { name: "clavicle.L", spec: JointSpec::WeightedPair((0.8, "spine-3"), (0.2, "shoulder.L")) },
    JointDef { name: "elbow.L", spec: JointSpec::MarkerCentroid("l-elbow") },
    JointDef { name: "wrist.L", spec: JointSpec::MarkerCentroid("l-wrist") },
    JointDef { name: "palm.L", spec: JointSpec::MarkerCentroid("l-hand-middle") },
    // Back of the wrist, lifted off the hand plane.
    JointDef { name: "wrist-top.L", spec: JointSpec::VertexOffset(3015, [0.0, 0.0, 0.1]) },
    JointDef { name: "elbowPT.L", spec: JointSpec::RelativeOffset("elbow.L", OffsetOperand::Vector([0.0, 1.2, 0.0])) },

    // Right arm.
    JointDef { name: "shoulder.R", spec: JointSpec::MarkerCentroid("r-shoulder") },
    JointDef { name: "clavicle.R", spec: JointSpec::WeightedPair((0.8, "spine-3"), (0.2, "shoulder.R")) },
    JointDef { name: "elbow.R", spec: JointSpec::MarkerCentroid("r-elbow") },
    JointDef { name: "wrist.R", spec: JointSpec::MarkerCentroid("r-wrist") },
    JointDef { name: "palm.R", spec: JointSpec::MarkerCentroid("r-hand-middle") },
    JointDef { name: "wrist-top.R", spec: JointSpec::VertexOffset(7015, [0.0, 0.0, 0.1]) },
    JointDef { name: "elbowPT.R", spec: JointSpec::RelativeOffset("elbow.R", OffsetOperand::Vector([0.0, 1.2, 0.0])) },

    // Left leg.
    JointDef { name: "hip.L", spec: JointSpec::MarkerCentroid("l-hip") },
    JointDef { name: "knee.L", spec: JointSpec::MarkerCentroid("l-knee") },
    JointDef { name: "ankle.L", spec: JointSpec::MarkerCentroid("l-ankle") },
    JointDef { name: "heel.L", spec: JointSpec::MarkerCentroid("l-heel") },
    JointDef { name: "toe.L", spec: JointSpec::MarkerCentroid("l-toe") },
    JointDef { name: "toe-tip.L", spec: JointSpec::MarkerCentroid("l-toe-tip") },
    JointDef { name: "heel-base.L", spec: JointSpec::AxisPick { x: "heel.L", y: "heel.L", z: "ground" } },
    JointDef { name: "kneePT.L", spec: JointSpec::RelativeOffset("knee.L", OffsetOperand::Vector([0.0, -1.2, 0.0])) },

    // Right leg.
    JointDef { name: "hip.R", spec: JointSpec::MarkerCentroid("r-hip") },
    JointDef { name: "knee.R", spec: JointSpec::MarkerCentroid("r-knee") },
    JointDef { name: "ankle.R", spec: JointSpec::MarkerCentroid("r-ankle") },
    JointDef { name: "heel.R", spec: JointSpec::MarkerCentroid("r-heel") },
    JointDef { name: "toe.R", spec: JointSpec::MarkerCentroid("r-toe") },
    JointDef { name: "toe-tip.R", spec: JointSpec::MarkerCentroid("r-toe-tip") },
    JointDef { name: "heel-base.R", spec: JointSpec::AxisPick { x: "heel.R", y: "heel.R", z: "ground" } },
    JointDef { name: "kneePT.R", spec: JointSpec::RelativeOffset("knee.R", OffsetOperand::Vector([0.0, -1.2, 0.0])) },
];

// ─── muscle helpers ─────────────────────────────────────────────────────────

pub const MUSCLE_JOINTS: &[JointDef] = &[
    JointDef { name: "shoulder-tangent.L", spec: JointSpec::CrossOffset("shoulder.L", [0.0, 0.0, 1.0]) },
    JointDef { name: "deltoid.L", spec: JointSpec::Projection { raw: "shoulder.L", head: "clavicle.L", tail: "elbow.L", offset: [0.0, 0.0, 0.08] } },
    JointDef { name: "elbow-fan.L", spec: JointSpec::PlaneOffset((0.75, "elbow.L"), (0.25, "wrist.L")) },
    JointDef { name: "knee-fan.L", spec: JointSpec::PlaneOffset((0.75, "knee.L"), (0.25, "ankle.L")) },

    JointDef { name: "shoulder-tangent.R", spec: JointSpec::CrossOffset("shoulder.R", [0.0, 0.0, 1.0]) },
    JointDef { name: "deltoid.R", spec: JointSpec::Projection { raw: "shoulder.R", head: "clavicle.R", tail: "elbow.R", offset: [0.0, 0.0, 0.08] } },
    JointDef { name: "elbow-fan.R", spec: JointSpec::PlaneOffset((0.75, "elbow.R"), (0.25, "wrist.R")) },
    JointDef { name: "knee-fan.R", spec: JointSpec::PlaneOffset((0.75, "knee.R"), (0.25, "ankle.R")) },
];

// ─── fingers ────────────────────────────────────────────────────────────────

pub const FINGER_JOINTS: &[JointDef] = &[
    JointDef { name: "thumb-1.L", spec: JointSpec::MarkerCentroid("l-thumb-1") },
    JointDef { name: "thumb-2.L", spec: JointSpec::MarkerCentroid("l-thumb-2") },
    JointDef { name: "thumb-3.L", spec: JointSpec::MarkerCentroid("l-thumb-3") },
    JointDef { name: "thumb-4.L", spec: JointSpec::MarkerCentroid("l-thumb-4") },
    JointDef { name: "index-1.L", spec: JointSpec::MarkerCentroid("l-index-1") },
    JointDef { name: "index-2.L", spec: JointSpec::MarkerCentroid("l-index-2") },
    JointDef { name: "index-3.L", spec: JointSpec::MarkerCentroid("l-index-3") },
    JointDef { name: "index-4.L", spec: JointSpec::MarkerCentroid("l-index-4") },
    JointDef { name: "middle-1.L", spec: JointSpec::MarkerCentroid("l-middle-1") },
    JointDef { name: "middle-2.L", spec: JointSpec::MarkerCentroid("l-middle-2") },
    JointDef { name: "middle-3.L", spec: JointSpec::MarkerCentroid("l-middle-3") },
    JointDef { name: "middle-4.L", spec: JointSpec::MarkerCentroid("l-middle-4") },
    JointDef { name: "ring-1.L", spec: JointSpec::MarkerCentroid("l-ring-1") },
    JointDef { name: "ring-2.L", spec: JointSpec::MarkerCentroid("l-ring-2") },
    JointDef { name: "ring-3.L", spec: JointSpec::MarkerCentroid("l-ring-3") },
    JointDef { name: "ring-4.L", spec: JointSpec::MarkerCentroid("l-ring-4") },
    JointDef { name: "pinky-1.L", spec: JointSpec::MarkerCentroid("l-pinky-1") },
    JointDef { name: "pinky-2.L", spec: JointSpec::MarkerCentroid("l-pinky-2") },
    JointDef { name: "pinky-3.L", spec: JointSpec::MarkerCentroid("l-pinky-3") },
    JointDef { name: "pinky-4.L", spec: JointSpec::MarkerCentroid("l-pinky-4") },

    JointDef { name: "thumb-1.R", spec: JointSpec::MarkerCentroid("r-thumb-1") },
    JointDef { name: "thumb-2.R", spec: JointSpec::MarkerCentroid("r-thumb-2") },
    JointDef { name: "thumb-3.R", spec: JointSpec::MarkerCentroid("r-thumb-3") },
    JointDef { name: "thumb-4.R", spec: JointSpec::MarkerCentroid("r-thumb-4") },
    JointDef { name: "index-1.R", spec: JointSpec::MarkerCentroid("r-index-1") },
    JointDef { name: "index-2.R", spec: JointSpec::MarkerCentroid("r-index-2") },
    JointDef { name: "index-3.R", spec: JointSpec::MarkerCentroid("r-index-3") },
    JointDef { name: "index-4.R", spec: JointSpec::MarkerCentroid("r-index-4") },
    JointDef { name: "middle-1.R", spec: JointSpec::MarkerCentroid("r-middle-1") },
    JointDef { name: "middle-2.R", spec: JointSpec::MarkerCentroid("r-middle-2") },
    JointDef { name: "middle-3.R", spec: JointSpec::MarkerCentroid("r-middle-3") },
    JointDef { name: "middle-4.R", spec: JointSpec::MarkerCentroid("r-middle-4") },
    JointDef { name: "ring-1.R", spec: JointSpec::MarkerCentroid("r-ring-1") },
    JointDef { name: "ring-2.R", spec: JointSpec::MarkerCentroid("r-ring-2") },
    JointDef { name: "ring-3.R", spec: JointSpec::MarkerCentroid("r-ring-3") },
    JointDef { name: "ring-4.R", spec: JointSpec::MarkerCentroid("r-ring-4") },
    JointDef { name: "pinky-1.R", spec: JointSpec::MarkerCentroid("r-pinky-1") },
    JointDef { name: "pinky-2.R", spec: JointSpec::MarkerCentroid("r-pinky-2") },
    JointDef { name: "pinky-3.R", spec: JointSpec::MarkerCentroid("r-pinky-3") },
    JointDef { name: "pinky-4.R", spec: JointSpec::MarkerCentroid("r-pinky-4") },
];

// ─── face and control panel ─────────────────────────────────────────────────

pub const FACE_JOINTS: &[JointDef] = &[
    JointDef { name: "eye.L", spec: JointSpec::MarkerCentroid("l-eye") },
    JointDef { name: "eye.R", spec: JointSpec::MarkerCentroid("r-eye") },
    JointDef { name: "jaw", spec: JointSpec::MarkerCentroid("jaw") },
    JointDef { name: "chin", spec: JointSpec::MarkerCentroid("chin") },
];

// Panel slider positions are authored, not measured; literals are engine Y-up.
pub const PANEL_JOINTS: &[JointDef] = &[
    JointDef { name: "p-face", spec: JointSpec::Literal([1.2, 1.7, 0.0]) },
    JointDef { name: "p-brow.L", spec: JointSpec::RelativeOffset("p-face", OffsetOperand::Vector([0.1, 0.0, 0.15])) },
    JointDef { name: "p-brow.R", spec: JointSpec::RelativeOffset("p-face", OffsetOperand::Vector([-0.1, 0.0, 0.15])) },
    JointDef { name: "p-eye.L", spec: JointSpec::RelativeOffset("p-face", OffsetOperand::Vector([0.1, 0.0, 0.05])) },
    JointDef { name: "p-eye.R", spec: JointSpec::RelativeOffset("p-face", OffsetOperand::Vector([-0.1, 0.0, 0.05])) },
    JointDef { name: "p-mouth", spec: JointSpec::RelativeOffset("p-face", OffsetOperand::Vector([0.0, 0.0, -0.1])) },
];
