//! FK/IK chain, split-bone and merge tables. Bases are side-agnostic; the
//! expanders instantiate both sides.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::rig::bones::LayerSet;
use crate::rig::ik::{ChainEntry, ChainTopology};
use crate::rig::merge::MergeEntry;
use crate::rig::side::NumberStyle;
use crate::rig::split::SplitEntry;

// Elbow and knee are hinges; the IK duplicates keep only the bend axis free.
const HINGE_LOCK: Option<[bool; 3]> = Some([false, true, true]);

pub const ARM_CHAINS: &[ChainEntry] = &[
    ChainEntry {
        base: "upper_arm",
        topology: ChainTopology::Upstream,
        fk_layer: LayerSet::ARM_FK,
        ik_layer: LayerSet::ARM_IK,
        switch: "ArmIk",
    },
    ChainEntry {
        base: "forearm",
        topology: ChainTopology::Leaf {
            target: "hand",
            chain_len: 2,
            pole: Some(("elbowPT", PI)),
            ik_lock_rotation: HINGE_LOCK,
        },
        fk_layer: LayerSet::ARM_FK,
        ik_layer: LayerSet::ARM_IK,
        switch: "ArmIk",
    },
    ChainEntry {
        base: "hand",
        topology: ChainTopology::DownStream,
        fk_layer: LayerSet::ARM_FK,
        ik_layer: LayerSet::ARM_IK,
        switch: "ArmIk",
    },
];

pub const LEG_CHAINS: &[ChainEntry] = &[
    ChainEntry {
        base: "thigh",
        topology: ChainTopology::Upstream,
        fk_layer: LayerSet::LEG_FK,
        ik_layer: LayerSet::LEG_IK,
        switch: "LegIk",
    },
    ChainEntry {
        base: "shin",
        topology: ChainTopology::Leaf {
            target: "foot",
            chain_len: 2,
            pole: Some(("kneePT", FRAC_PI_2)),
            ik_lock_rotation: HINGE_LOCK,
        },
        fk_layer: LayerSet::LEG_FK,
        ik_layer: LayerSet::LEG_IK,
        switch: "LegIk",
    },
    ChainEntry {
        base: "foot",
        topology: ChainTopology::DownStream,
        fk_layer: LayerSet::LEG_FK,
        ik_layer: LayerSet::LEG_IK,
        switch: "LegIk",
    },
    ChainEntry {
        base: "toe",
        topology: ChainTopology::DownStream,
        fk_layer: LayerSet::LEG_FK,
        ik_layer: LayerSet::LEG_IK,
        switch: "LegIk",
    },
];

pub const SPLITS: &[SplitEntry] = &[
    SplitEntry { base: "forearm", pieces: 3, target: "hand", numbering: NumberStyle::BeforeSide, follow_next: true },
    SplitEntry { base: "shin", pieces: 2, target: "foot", numbering: NumberStyle::BeforeSide, follow_next: false },
];

pub const SPINE_MERGE: &[MergeEntry] = &[
    MergeEntry { survivor: "spine", merged: &["chest"] },
];
