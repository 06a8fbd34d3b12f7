//! JSON interchange boundary: the mesh document the host exports and the rig
//! document shipped back.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mesh::{Mesh, VertexWeights};
use crate::rig::config::RigConfiguration;
use crate::rig::{RigBone, RigOutput};

pub const FORMAT_VERSION: &str = "0.3";

/// Input document: the fixed-topology mesh plus an optional placement
/// transform. Unknown top-level fields are ignored so hosts can attach their
/// own metadata.
#[derive(Debug, Deserialize)]
pub struct MeshDocument {
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub offset: Option<[f64; 3]>,
    pub mesh: MeshSection,
}

#[derive(Debug, Deserialize)]
pub struct MeshSection {
    pub vertices: Vec<[f64; 3]>,
    #[serde(default)]
    pub markers: BTreeMap<String, Vec<usize>>,
    #[serde(default)]
    pub weights: BTreeMap<String, VertexWeights>,
}

impl MeshDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Split the document into the mesh view and a configuration carrying its
    /// placement transform.
    pub fn into_parts(self, mut config: RigConfiguration) -> (Mesh, RigConfiguration) {
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(offset) = self.offset {
            config.offset = Vector3::from(offset);
        }
        let mesh = Mesh {
            vertices: self.mesh.vertices.into_iter().map(Vector3::from).collect(),
            marker_groups: self.mesh.markers,
            weights: self.mesh.weights,
        };
        (mesh, config)
    }
}

#[derive(Serialize)]
struct RigDocument<'a> {
    mhx2_version: &'static str,
    skeleton: SkeletonSection<'a>,
    weights: &'a BTreeMap<String, VertexWeights>,
    properties: &'a BTreeMap<String, f64>,
}

#[derive(Serialize)]
struct SkeletonSection<'a> {
    name: &'a str,
    scale: f64,
    offset: [f64; 3],
    bones: &'a [RigBone],
}

/// Write the finished rig as a pretty-printed interchange document.
pub fn write_rig(
    path: &Path,
    name: &str,
    config: &RigConfiguration,
    output: &RigOutput,
) -> Result<()> {
    let document = RigDocument {
        mhx2_version: FORMAT_VERSION,
        skeleton: SkeletonSection {
            name,
            scale: config.scale,
            offset: config.offset.into(),
            bones: &output.bones,
        },
        weights: &output.weights,
        properties: &output.properties,
    };
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    // Dropping a BufWriter swallows flush errors; surface them instead.
    writer.flush()?;
    Ok(())
}
