use std::fmt;

use thiserror::Error;

/// What kind of named entity a failed lookup expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Joint,
    Plane,
    Bone,
    VertexGroup,
    Marker,
    Vertex,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RefKind::Joint => "joint",
            RefKind::Plane => "plane",
            RefKind::Bone => "bone",
            RefKind::VertexGroup => "vertex group",
            RefKind::Marker => "marker group",
            RefKind::Vertex => "vertex",
        };
        f.write_str(label)
    }
}

/// Errors produced by the rig build.
///
/// The build is all-or-nothing: every variant aborts the solve and propagates
/// to the `build_rig` entry point. Only degenerate geometry is handled locally
/// (absent normal, clamped split fraction) and escalates to an error solely
/// under the strict policy.
#[derive(Error, Debug)]
pub enum RigError {
    #[error("configuration error in table `{table}`: {detail}")]
    Configuration { table: String, detail: String },

    #[error(
        "`{referrer}` references unknown {kind} `{name}`; \
         check that the mesh topology matches the rig tables"
    )]
    MissingReference {
        referrer: String,
        kind: RefKind,
        name: String,
    },

    #[error(
        "constraint on `{bone}` targets `{target}`, which resolves under \
         neither its original nor its deform-prefixed name"
    )]
    DanglingConstraint { bone: String, target: String },

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed interchange document: {0}")]
    Json(#[from] serde_json::Error),
}

impl RigError {
    pub fn config(table: &str, detail: impl Into<String>) -> Self {
        RigError::Configuration {
            table: table.to_string(),
            detail: detail.into(),
        }
    }

    pub fn missing(referrer: &str, kind: RefKind, name: &str) -> Self {
        RigError::MissingReference {
            referrer: referrer.to_string(),
            kind,
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RigError>;
