use serde::Serialize;

/// IK pole target: a helper bone the chain plane aims at, plus the pole angle
/// (radians, mirrored per side).
#[derive(Debug, Clone, Serialize)]
pub struct PoleTarget {
    pub bone: String,
    pub angle: f64,
}

/// A constraint attached to a bone. Targets are weak name references into the
/// bone set, resolved (and re-resolved after renames) by the post-processor.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Constraint {
    CopyRotation {
        target: String,
        influence: f64,
    },
    CopyTransform {
        target: String,
        influence: f64,
    },
    Ik {
        target: String,
        chain_len: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        pole: Option<PoleTarget>,
    },
    LimitRotation {
        min: [f64; 3],
        max: [f64; 3],
    },
    LimitLocation {
        min: [f64; 3],
        max: [f64; 3],
    },
}

impl Constraint {
    /// All bone-name references carried by this constraint, mutably, for
    /// rename fixups.
    pub fn targets_mut(&mut self) -> Vec<&mut String> {
        match self {
            Constraint::CopyRotation { target, .. } | Constraint::CopyTransform { target, .. } => {
                vec![target]
            }
            Constraint::Ik { target, pole, .. } => {
                let mut refs = vec![target];
                if let Some(pole) = pole {
                    refs.push(&mut pole.bone);
                }
                refs
            }
            Constraint::LimitRotation { .. } | Constraint::LimitLocation { .. } => Vec::new(),
        }
    }
}

/// Rotation-limit table entry (degrees in the tables, radians in constraints).
#[derive(Debug, Clone, Copy)]
pub struct RotationLimit {
    pub min_deg: [f64; 3],
    pub max_deg: [f64; 3],
}

impl RotationLimit {
    pub fn to_constraint(self) -> Constraint {
        Constraint::LimitRotation {
            min: self.min_deg.map(f64::to_radians),
            max: self.max_deg.map(f64::to_radians),
        }
    }
}
