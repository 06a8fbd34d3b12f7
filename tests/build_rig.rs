//! End-to-end builds against a synthetic fixed-topology mesh.

use std::collections::HashSet;

use nalgebra::Vector3;

use mhx2rig::mesh::Mesh;
use mhx2rig::rig::constraints::Constraint;
use mhx2rig::{RigConfiguration, RigError, RigVariant, Strictness, build_rig};

const FOREARM_VERTS: std::ops::Range<usize> = 2000..2006;
const SHIN_VERTS: std::ops::Range<usize> = 2100..2105;

fn marker_anchors() -> Vec<(String, Vector3<f64>)> {
    let mut anchors: Vec<(String, Vector3<f64>)> = vec![
        ("pelvis".into(), Vector3::new(0.0, 0.0, 1.0)),
        ("spine-1".into(), Vector3::new(0.0, 0.02, 1.12)),
        ("spine-2".into(), Vector3::new(0.0, 0.03, 1.3)),
        ("spine-3".into(), Vector3::new(0.0, 0.02, 1.48)),
        ("neck".into(), Vector3::new(0.0, 0.0, 1.62)),
        ("head".into(), Vector3::new(0.0, -0.05, 1.72)),
        ("head-top".into(), Vector3::new(0.0, 0.0, 1.85)),
        ("jaw".into(), Vector3::new(0.0, -0.05, 1.68)),
        ("chin".into(), Vector3::new(0.0, -0.1, 1.64)),
        ("l-eye".into(), Vector3::new(0.03, -0.09, 1.75)),
        ("r-eye".into(), Vector3::new(-0.03, -0.09, 1.75)),
    ];

    for (sign, prefix) in [(1.0, "l"), (-1.0, "r")] {
        let side = |x: f64, y: f64, z: f64| Vector3::new(sign * x, y, z);
        anchors.push((format!("{prefix}-shoulder"), side(0.18, 0.0, 1.5)));
        anchors.push((format!("{prefix}-elbow"), side(0.45, 0.06, 1.49)));
        anchors.push((format!("{prefix}-wrist"), side(0.7, 0.0, 1.48)));
        anchors.push((format!("{prefix}-hand-middle"), side(0.8, 0.0, 1.47)));
        anchors.push((format!("{prefix}-hip"), side(0.1, 0.0, 0.95)));
        anchors.push((format!("{prefix}-knee"), side(0.11, -0.04, 0.52)));
        anchors.push((format!("{prefix}-ankle"), side(0.11, 0.02, 0.08)));
        anchors.push((format!("{prefix}-heel"), side(0.11, 0.1, 0.05)));
        anchors.push((format!("{prefix}-toe"), side(0.11, -0.12, 0.02)));
        anchors.push((format!("{prefix}-toe-tip"), side(0.11, -0.2, 0.02)));

        for (fi, finger) in ["thumb", "index", "middle", "ring", "pinky"].iter().enumerate() {
            for k in 1..=4usize {
                let x = 0.78 + 0.035 * k as f64;
                let y = -0.04 + 0.02 * fi as f64;
                let z = 1.47 - 0.005 * fi as f64;
                anchors.push((format!("{prefix}-{finger}-{k}"), side(x, y, z)));
            }
        }
    }
    anchors
}

fn synthetic_mesh() -> Mesh {
    let mut vertices = vec![Vector3::zeros(); 7016];
    for (i, v) in vertices.iter_mut().enumerate() {
        let t = i as f64;
        *v = Vector3::new(
            (t * 0.37).sin() * 0.3,
            (t * 0.53).cos() * 0.2,
            0.9 + (t * 0.11).sin() * 0.8,
        );
    }

    let mut mesh = Mesh::default();
    let mut next = 0usize;
    for (name, anchor) in marker_anchors() {
        let delta = Vector3::new(0.01, 0.005, 0.008);
        vertices[next] = anchor + delta;
        vertices[next + 1] = anchor - delta;
        mesh.marker_groups.insert(name, vec![next, next + 1]);
        next += 2;
    }
    assert!(next < FOREARM_VERTS.start, "marker block overruns weight vertices");

    // Back-of-wrist vertices and the lowest sole vertex used by raw lookups.
    vertices[3015] = Vector3::new(0.7, 0.02, 1.53);
    vertices[7015] = Vector3::new(-0.7, 0.02, 1.53);
    vertices[5102] = Vector3::new(0.05, 0.0, 0.0);

    // Weighted vertices laid out along the limbs they skin.
    let elbow = Vector3::new(0.45, 0.06, 1.49);
    let wrist = Vector3::new(0.7, 0.0, 1.48);
    for (k, index) in FOREARM_VERTS.enumerate() {
        let t = k as f64 / 5.0;
        vertices[index] = elbow + (wrist - elbow) * t;
    }
    let knee = Vector3::new(0.11, -0.04, 0.52);
    let ankle = Vector3::new(0.11, 0.02, 0.08);
    for (k, index) in SHIN_VERTS.enumerate() {
        let t = k as f64 / 4.0;
        vertices[index] = knee + (ankle - knee) * t;
    }

    mesh.weights.insert("forearm.L".into(), FOREARM_VERTS.map(|v| (v, 0.8)).collect());
    mesh.weights.insert("shin.L".into(), SHIN_VERTS.map(|v| (v, 1.0)).collect());
    mesh.weights.insert("hips".into(), vec![(2200, 1.0), (2201, 0.5)]);
    mesh.weights.insert("spine".into(), vec![(2210, 1.0)]);
    mesh.weights.insert("chest".into(), vec![(2210, 0.25), (2220, 1.0)]);
    mesh.weights.insert("hand.L".into(), vec![(2230, 1.0)]);

    mesh.vertices = vertices;
    mesh
}

fn constraint_targets(constraint: &Constraint) -> Vec<&str> {
    match constraint {
        Constraint::CopyRotation { target, .. } | Constraint::CopyTransform { target, .. } => {
            vec![target]
        }
        Constraint::Ik { target, pole, .. } => {
            let mut refs = vec![target.as_str()];
            if let Some(pole) = pole {
                refs.push(&pole.bone);
            }
            refs
        }
        Constraint::LimitRotation { .. } | Constraint::LimitLocation { .. } => Vec::new(),
    }
}

#[test]
fn given_default_variant_when_building_then_expected_bones_exist() {
    let rig = build_rig(&synthetic_mesh(), &RigConfiguration::default()).unwrap();
    let names: HashSet<&str> = rig.bones.iter().map(|b| b.name.as_str()).collect();

    for name in [
        "root", "DEF-hips", "DEF-spine", "DEF-chest", "DEF-neck", "DEF-head",
        "DEF-clavicle.L", "DEF-upper_arm.L", "upper_arm.fk.L", "upper_arm.ik.L",
        "forearm.fk.R", "forearm.ik.R", "hand.fk.L", "DEF-hand.L",
        "thigh.ik.R", "shin.fk.L", "foot.fk.R", "toe.fk.L", "DEF-toe.L",
        "DEF-forearm.01.L", "DEF-forearm.02.L", "DEF-forearm.03.R",
        "DEF-shin.01.L", "DEF-shin.02.R",
        "heel.L", "elbowPT.R", "kneePT.L",
    ] {
        assert!(names.contains(name), "missing bone `{name}`");
    }
    // Split consumed the originals.
    assert!(!names.contains("forearm.L"));
    assert!(!names.contains("shin.R"));
    // No optional layers in the default variant.
    assert!(!names.contains("thumb.01.L"));
    assert!(!names.contains("p_face"));
}

#[test]
fn given_default_variant_when_building_then_references_are_closed() {
    let rig = build_rig(&synthetic_mesh(), &RigConfiguration::default()).unwrap();
    let names: HashSet<&str> = rig.bones.iter().map(|b| b.name.as_str()).collect();

    for bone in &rig.bones {
        if let Some(parent) = &bone.parent {
            assert!(names.contains(parent.as_str()), "`{}` has dead parent `{parent}`", bone.name);
        }
        for constraint in &bone.constraints {
            for target in constraint_targets(constraint) {
                assert!(names.contains(target), "`{}` targets dead bone `{target}`", bone.name);
            }
        }
    }
    for group in rig.weights.keys() {
        assert!(names.contains(group.as_str()), "vertex group `{group}` has no bone");
    }
}

#[test]
fn given_default_variant_when_building_then_switch_properties_cover_both_sides() {
    let rig = build_rig(&synthetic_mesh(), &RigConfiguration::default()).unwrap();
    let keys: Vec<&str> = rig.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["ArmIk.L", "ArmIk.R", "LegIk.L", "LegIk.R"]);
    assert!(rig.properties.values().all(|v| *v == 0.0));
}

#[test]
fn given_split_forearm_when_building_then_weights_are_conserved() {
    let rig = build_rig(&synthetic_mesh(), &RigConfiguration::default()).unwrap();

    assert!(!rig.weights.contains_key("forearm.L"));
    let pieces = ["DEF-forearm.01.L", "DEF-forearm.02.L", "DEF-forearm.03.L"];
    for vertex in FOREARM_VERTS {
        let total: f64 = pieces
            .iter()
            .filter_map(|piece| rig.weights.get(*piece))
            .flat_map(|weights| weights.iter())
            .filter(|(v, _)| *v == vertex)
            .map(|(_, w)| *w)
            .sum();
        assert!((total - 0.8).abs() < 1e-9, "vertex {vertex}: total {total}");
    }
}

#[test]
fn given_ik_expansion_when_building_then_original_is_mechanism_with_blend() {
    let rig = build_rig(&synthetic_mesh(), &RigConfiguration::default()).unwrap();
    let shin = rig.bones.iter().find(|b| b.name == "DEF-shin.01.L").unwrap();
    match shin.constraints.first() {
        Some(Constraint::Ik { target, chain_len, .. }) => {
            assert_eq!(target, "DEF-foot.L");
            assert_eq!(*chain_len, 1);
        }
        other => panic!("expected IK on split piece, got {other:?}"),
    }

    let thigh = rig.bones.iter().find(|b| b.name == "DEF-thigh.L").unwrap();
    match &thigh.constraints[..] {
        [
            Constraint::CopyTransform { target: ik, influence: ik_inf },
            Constraint::CopyTransform { target: fk, influence: fk_inf },
        ] => {
            assert_eq!(ik, "thigh.ik.L");
            assert_eq!(*ik_inf, 0.0);
            assert_eq!(fk, "thigh.fk.L");
            assert_eq!(*fk_inf, 1.0);
        }
        other => panic!("unexpected blend stack: {other:?}"),
    }
}

#[test]
fn given_rotation_limits_when_chains_expand_then_limit_follows_fk_duplicate() {
    let rig = build_rig(&synthetic_mesh(), &RigConfiguration::default()).unwrap();
    let fk = rig.bones.iter().find(|b| b.name == "forearm.fk.L").unwrap();
    assert!(
        fk.constraints.iter().any(|c| matches!(c, Constraint::LimitRotation { .. })),
        "forearm.fk.L carries no rotation limit"
    );
}

#[test]
fn given_game_variant_when_building_then_spine_is_merged_and_chains_are_off() {
    let rig = build_rig(&synthetic_mesh(), &RigConfiguration::for_variant(RigVariant::Game)).unwrap();
    let names: HashSet<&str> = rig.bones.iter().map(|b| b.name.as_str()).collect();

    assert!(!names.contains("DEF-chest"));
    assert!(!names.iter().any(|n| n.contains(".fk.") || n.contains(".ik.")));
    assert!(rig.properties.is_empty());

    let neck = rig.bones.iter().find(|b| b.name == "DEF-neck").unwrap();
    assert_eq!(neck.parent.as_deref(), Some("DEF-spine"));

    // Chest weights folded into the surviving spine group, shared vertex summed.
    let spine = rig.weights.get("DEF-spine").unwrap();
    assert!(spine.contains(&(2210, 1.25)));
    assert!(spine.contains(&(2220, 1.0)));
}

#[test]
fn given_full_variant_when_building_then_optional_layers_are_present() {
    let rig = build_rig(&synthetic_mesh(), &RigConfiguration::for_variant(RigVariant::Full)).unwrap();
    let names: HashSet<&str> = rig.bones.iter().map(|b| b.name.as_str()).collect();

    for name in [
        "DEF-thumb.01.L", "DEF-pinky.03.R", "DEF-eye.L", "DEF-jaw",
        "p_face", "p_mouth", "p_brow.R",
        "DEF-deltoid.L", "DEF-elbow_fan.R", "DEF-knee_fan.L",
    ] {
        assert!(names.contains(name), "missing bone `{name}`");
    }
    let panel = rig.bones.iter().find(|b| b.name == "p_face").unwrap();
    assert!(!panel.deform);
}

#[test]
fn given_clean_mesh_when_building_strictly_then_no_lenient_fallback_is_needed() {
    let mut config = RigConfiguration::for_variant(RigVariant::Full);
    config.strictness = Strictness::Strict;
    build_rig(&synthetic_mesh(), &config).unwrap();
}

#[test]
fn given_missing_marker_when_building_then_error_names_the_joint() {
    let mut mesh = synthetic_mesh();
    mesh.marker_groups.remove("l-knee");
    let err = build_rig(&mesh, &RigConfiguration::default()).unwrap_err();
    match err {
        RigError::MissingReference { referrer, name, .. } => {
            assert_eq!(referrer, "knee.L");
            assert_eq!(name, "l-knee");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn given_placement_transform_when_building_then_bones_are_placed() {
    let mut config = RigConfiguration::default();
    config.scale = 0.1;
    config.offset = Vector3::new(0.0, 0.0, 1.0);
    let rig = build_rig(&synthetic_mesh(), &config).unwrap();

    let hips = rig.bones.iter().find(|b| b.name == "DEF-hips").unwrap();
    let head = Vector3::from(hips.head);
    assert!((head - Vector3::new(0.0, 0.0, 1.1)).norm() < 1e-9);
}
