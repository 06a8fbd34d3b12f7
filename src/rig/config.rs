use nalgebra::Vector3;

use crate::error::{Result, RigError};

/// Named rig-variant presets selecting which optional table groups merge into
/// the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigVariant {
    /// Base humanoid skeleton with IK arms/legs and bone splitting.
    Default,
    /// Game-friendly reduced rig: spine chain merged, no helper layers.
    Game,
    /// Everything on: fingers, face panel, muscle helpers.
    Full,
}

impl RigVariant {
    /// Parse a variant identifier from the interchange/CLI boundary. Unknown
    /// identifiers are a configuration error, not a fallback.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(RigVariant::Default),
            "game" => Ok(RigVariant::Game),
            "full" => Ok(RigVariant::Full),
            other => Err(RigError::config(
                "rig_variant",
                format!("unknown rig variant `{other}`"),
            )),
        }
    }
}

/// How missing-table-entry and zero-length-bone situations are handled.
///
/// The reference behavior is warn-and-skip; `Strict` turns those warnings
/// into hard errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    #[default]
    Lenient,
    Strict,
}

/// Immutable build configuration. Selects optional subsystems and carries the
/// uniform placement transform applied to mesh coordinates.
#[derive(Debug, Clone)]
pub struct RigConfiguration {
    pub variant: RigVariant,
    pub finger_rig: bool,
    pub face_panel: bool,
    pub muscle_layer: bool,
    pub ik_arms: bool,
    pub ik_legs: bool,
    pub split_bones: bool,
    pub merge_spine: bool,
    /// Prefix applied to deform-bone (and vertex-group) names, e.g. `DEF-`.
    pub deform_prefix: String,
    pub strictness: Strictness,
    pub scale: f64,
    pub offset: Vector3<f64>,
}

impl Default for RigConfiguration {
    fn default() -> Self {
        Self::for_variant(RigVariant::Default)
    }
}

impl RigConfiguration {
    pub fn for_variant(variant: RigVariant) -> Self {
        let base = RigConfiguration {
            variant,
            finger_rig: false,
            face_panel: false,
            muscle_layer: false,
            ik_arms: true,
            ik_legs: true,
            split_bones: true,
            merge_spine: false,
            deform_prefix: "DEF-".to_string(),
            strictness: Strictness::Lenient,
            scale: 1.0,
            offset: Vector3::zeros(),
        };
        match variant {
            RigVariant::Default => base,
            RigVariant::Game => RigConfiguration {
                merge_spine: true,
                ik_arms: false,
                ik_legs: false,
                split_bones: false,
                ..base
            },
            RigVariant::Full => RigConfiguration {
                finger_rig: true,
                face_panel: true,
                muscle_layer: true,
                ..base
            },
        }
    }
}
