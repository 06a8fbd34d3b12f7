//! Reference planes. Right-side joint order is reversed so mirrored planes
//! produce mirrored normals.

use crate::rig::planes::PlaneDef;

pub const BASE_PLANES: &[PlaneDef] = &[
    PlaneDef { name: "PlaneSpine", joints: ["pelvis", "spine-2", "neck"] },
    PlaneDef { name: "PlaneArm.L", joints: ["shoulder.L", "elbow.L", "wrist.L"] },
    PlaneDef { name: "PlaneArm.R", joints: ["wrist.R", "elbow.R", "shoulder.R"] },
    PlaneDef { name: "PlaneHand.L", joints: ["wrist.L", "palm.L", "wrist-top.L"] },
    PlaneDef { name: "PlaneHand.R", joints: ["wrist-top.R", "palm.R", "wrist.R"] },
    PlaneDef { name: "PlaneLeg.L", joints: ["hip.L", "knee.L", "ankle.L"] },
    PlaneDef { name: "PlaneLeg.R", joints: ["ankle.R", "knee.R", "hip.R"] },
    PlaneDef { name: "PlaneFoot.L", joints: ["ankle.L", "toe.L", "heel.L"] },
    PlaneDef { name: "PlaneFoot.R", joints: ["heel.R", "toe.R", "ankle.R"] },
];

pub const MUSCLE_PLANES: &[PlaneDef] = &[
    PlaneDef { name: "PlaneDeltoid.L", joints: ["shoulder.L", "deltoid.L", "shoulder-tangent.L"] },
    PlaneDef { name: "PlaneDeltoid.R", joints: ["shoulder-tangent.R", "deltoid.R", "shoulder.R"] },
];
