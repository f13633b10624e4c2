//! Muscle taxonomy.
//!
//! The catalog is a closed set of identifiers backed by one static table. Every relation
//! (parent, sub-groups, the always-visible exception set) lives in that table, and
//! `tests::taxonomy` checks that the relations agree with each other.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Muscle {
    Abs,
    Biceps,
    Calves,
    Chest,
    Deltoids,
    Feet,
    Forearm,
    Gluteal,
    Hamstring,
    Hands,
    Head,
    Knees,
    LowerBack,
    Obliques,
    Quadriceps,
    Tibialis,
    Trapezius,
    Triceps,
    UpperBack,

    RotatorCuff,
    Serratus,
    Rhomboids,

    UpperChest,
    LowerChest,
    InnerQuad,
    OuterQuad,
    HipFlexors,
    UpperAbs,
    LowerAbs,
    FrontDeltoid,
    RearDeltoid,
    UpperTrapezius,
    LowerTrapezius,
    Ankles,
    Adductors,
    Neck,
}

/// Which side of the body a region belongs to, from the subject's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MuscleSide {
    Left,
    Right,
    /// The region straddles the midline (e.g. abs, neck).
    Both,
}

impl MuscleSide {
    pub fn as_str(self) -> &'static str {
        match self {
            MuscleSide::Left => "left",
            MuscleSide::Right => "right",
            MuscleSide::Both => "both",
        }
    }
}

impl fmt::Display for MuscleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct MuscleInfo {
    muscle: Muscle,
    raw: &'static str,
    display_name: &'static str,
    parent: Option<Muscle>,
    sub_groups: &'static [Muscle],
    cosmetic: bool,
    always_visible: bool,
}

const fn primary(muscle: Muscle, raw: &'static str, display_name: &'static str) -> MuscleInfo {
    MuscleInfo {
        muscle,
        raw,
        display_name,
        parent: None,
        sub_groups: &[],
        cosmetic: false,
        always_visible: false,
    }
}

const fn parent(
    muscle: Muscle,
    raw: &'static str,
    display_name: &'static str,
    sub_groups: &'static [Muscle],
) -> MuscleInfo {
    MuscleInfo {
        sub_groups,
        ..primary(muscle, raw, display_name)
    }
}

const fn sub_group(
    muscle: Muscle,
    raw: &'static str,
    display_name: &'static str,
    parent: Muscle,
) -> MuscleInfo {
    MuscleInfo {
        parent: Some(parent),
        ..primary(muscle, raw, display_name)
    }
}

const fn always_visible(info: MuscleInfo) -> MuscleInfo {
    MuscleInfo {
        always_visible: true,
        ..info
    }
}

const fn cosmetic(info: MuscleInfo) -> MuscleInfo {
    MuscleInfo {
        cosmetic: true,
        ..info
    }
}

use Muscle::*;

// Indexed by `Muscle as usize`; must follow the enum declaration order.
static MUSCLE_INFO: [MuscleInfo; Muscle::COUNT] = [
    parent(Abs, "abs", "Abs", &[UpperAbs, LowerAbs]),
    primary(Biceps, "biceps", "Biceps"),
    primary(Calves, "calves", "Calves"),
    parent(Chest, "chest", "Chest", &[UpperChest, LowerChest]),
    parent(Deltoids, "deltoids", "Deltoids", &[FrontDeltoid, RearDeltoid]),
    parent(Feet, "feet", "Feet", &[Ankles]),
    primary(Forearm, "forearm", "Forearm"),
    primary(Gluteal, "gluteal", "Gluteal"),
    parent(Hamstring, "hamstring", "Hamstring", &[Adductors]),
    primary(Hands, "hands", "Hands"),
    cosmetic(parent(Head, "head", "Head", &[Neck])),
    primary(Knees, "knees", "Knees"),
    primary(LowerBack, "lower-back", "Lower Back"),
    parent(Obliques, "obliques", "Obliques", &[Serratus]),
    parent(
        Quadriceps,
        "quadriceps",
        "Quadriceps",
        &[InnerQuad, OuterQuad, HipFlexors],
    ),
    primary(Tibialis, "tibialis", "Tibialis"),
    parent(
        Trapezius,
        "trapezius",
        "Trapezius",
        &[UpperTrapezius, LowerTrapezius],
    ),
    primary(Triceps, "triceps", "Triceps"),
    primary(UpperBack, "upper-back", "Upper Back"),
    primary(RotatorCuff, "rotator-cuff", "Rotator Cuff"),
    sub_group(Serratus, "serratus", "Serratus", Obliques),
    primary(Rhomboids, "rhomboids", "Rhomboids"),
    sub_group(UpperChest, "upper-chest", "Upper Chest", Chest),
    sub_group(LowerChest, "lower-chest", "Lower Chest", Chest),
    sub_group(InnerQuad, "inner-quad", "Inner Quad", Quadriceps),
    sub_group(OuterQuad, "outer-quad", "Outer Quad", Quadriceps),
    sub_group(HipFlexors, "hip-flexors", "Hip Flexors", Quadriceps),
    sub_group(UpperAbs, "upper-abs", "Upper Abs", Abs),
    sub_group(LowerAbs, "lower-abs", "Lower Abs", Abs),
    sub_group(FrontDeltoid, "front-deltoid", "Front Deltoid", Deltoids),
    sub_group(RearDeltoid, "rear-deltoid", "Rear Deltoid", Deltoids),
    sub_group(UpperTrapezius, "upper-trapezius", "Upper Trapezius", Trapezius),
    sub_group(LowerTrapezius, "lower-trapezius", "Lower Trapezius", Trapezius),
    always_visible(sub_group(Ankles, "ankles", "Ankles", Feet)),
    always_visible(sub_group(Adductors, "adductors", "Adductors", Hamstring)),
    always_visible(sub_group(Neck, "neck", "Neck", Head)),
];

impl Muscle {
    /// 19 primary groups, 3 later additions and 14 sub-groups.
    pub const COUNT: usize = 36;

    pub const ALL: [Muscle; Muscle::COUNT] = [
        Abs,
        Biceps,
        Calves,
        Chest,
        Deltoids,
        Feet,
        Forearm,
        Gluteal,
        Hamstring,
        Hands,
        Head,
        Knees,
        LowerBack,
        Obliques,
        Quadriceps,
        Tibialis,
        Trapezius,
        Triceps,
        UpperBack,
        RotatorCuff,
        Serratus,
        Rhomboids,
        UpperChest,
        LowerChest,
        InnerQuad,
        OuterQuad,
        HipFlexors,
        UpperAbs,
        LowerAbs,
        FrontDeltoid,
        RearDeltoid,
        UpperTrapezius,
        LowerTrapezius,
        Ankles,
        Adductors,
        Neck,
    ];

    fn info(self) -> &'static MuscleInfo {
        &MUSCLE_INFO[self as usize]
    }

    /// Stable kebab-case identifier, e.g. `rotator-cuff`.
    pub fn as_str(self) -> &'static str {
        self.info().raw
    }

    /// Human-readable English label. Localization is left to the embedding application.
    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// Decorative parts are drawn but never selectable.
    pub fn is_cosmetic_part(self) -> bool {
        self.info().cosmetic
    }

    pub fn is_sub_group(self) -> bool {
        self.info().parent.is_some()
    }

    pub fn parent_group(self) -> Option<Muscle> {
        self.info().parent
    }

    /// Sub-groups in their fixed declaration order; empty for sub-groups and leaf primaries.
    pub fn sub_groups(self) -> &'static [Muscle] {
        self.info().sub_groups
    }

    /// Sub-groups that stay selectable under their own identity even when sub-groups are hidden.
    pub fn is_always_visible_sub_group(self) -> bool {
        self.info().always_visible
    }

    /// The muscle itself for primaries, the parent for sub-groups.
    pub fn primary_group(self) -> Muscle {
        self.parent_group().unwrap_or(self)
    }

    pub fn slug(self) -> crate::body::BodySlug {
        crate::body::BodySlug::from_muscle(self)
    }
}

impl fmt::Display for Muscle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Muscle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Muscle::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownMuscle {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
pub(crate) fn table_order_matches_declaration() -> bool {
    MUSCLE_INFO
        .iter()
        .zip(Muscle::ALL.iter())
        .all(|(info, m)| info.muscle == *m)
}
