//! Humanoid armature solver.
//!
//! Derives a full skeletal rig from a fixed-topology mesh: symbolic joint
//! locations, reference planes, a bone hierarchy with rolls, FK/IK chains,
//! deform-bone splitting and spine merging, exported through an MHX2-style
//! JSON interchange document.

pub mod error;
pub mod geometry;
pub mod interchange;
pub mod mesh;
pub mod rig;
pub mod tables;

pub use error::{Result, RigError};
pub use rig::config::{RigConfiguration, RigVariant, Strictness};
pub use rig::{BuildReport, RigOutput, build_rig};
