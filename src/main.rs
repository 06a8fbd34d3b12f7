use std::{env, path::PathBuf, process};

use mhx2rig::interchange::{self, MeshDocument};
use mhx2rig::{RigConfiguration, RigVariant, build_rig};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if !(3..=4).contains(&args.len()) {
        eprintln!("Usage: mhx2rig <mesh.json> <rig.json> [default|game|full]");
        process::exit(2);
    }

    let input = PathBuf::from(&args[1]);
    let output = PathBuf::from(&args[2]);
    let variant = match args.get(3) {
        Some(name) => RigVariant::parse(name)?,
        None => RigVariant::Default,
    };

    let document = MeshDocument::load(&input)?;
    let (mesh, config) = document.into_parts(RigConfiguration::for_variant(variant));

    let rig = build_rig(&mesh, &config)?;

    let name = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("character");
    interchange::write_rig(&output, name, &config, &rig)?;

    println!("Rig: {name} ({variant:?})");
    println!(
        "Joints: {}, Planes: {}",
        rig.report.joints, rig.report.planes
    );
    println!(
        "Bones: {} ({} deform), Constraints: {}",
        rig.report.bones, rig.report.deform_bones, rig.report.constraints
    );
    println!(
        "Vertex groups: {}, Switch properties: {}",
        rig.report.vertex_groups,
        rig.properties.len()
    );

    Ok(())
}
