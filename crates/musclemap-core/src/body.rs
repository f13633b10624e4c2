use crate::muscle::{Muscle, MuscleSide};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyGender {
    #[default]
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodySide {
    #[default]
    Front,
    Back,
}

impl BodyGender {
    pub const ALL: [BodyGender; 2] = [BodyGender::Male, BodyGender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyGender::Male => "male",
            BodyGender::Female => "female",
        }
    }
}

impl BodySide {
    pub const ALL: [BodySide; 2] = [BodySide::Front, BodySide::Back];

    pub fn as_str(self) -> &'static str {
        match self {
            BodySide::Front => "front",
            BodySide::Back => "back",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            BodySide::Front => BodySide::Back,
            BodySide::Back => BodySide::Front,
        }
    }
}

impl FromStr for BodyGender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(Error::UnknownGender {
                name: other.to_string(),
            }),
        }
    }
}

impl FromStr for BodySide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            other => Err(Error::UnknownSide {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BodyGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BodySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering-layer key of one drawable shape.
///
/// Every muscle has a slug of the same name; `Hair` is a decorative outline with no muscle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodySlug {
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
    Hair,
}

impl BodySlug {
    pub fn muscle(self) -> Option<Muscle> {
        Some(match self {
            BodySlug::Abs => Muscle::Abs,
            BodySlug::Biceps => Muscle::Biceps,
            BodySlug::Calves => Muscle::Calves,
            BodySlug::Chest => Muscle::Chest,
            BodySlug::Deltoids => Muscle::Deltoids,
            BodySlug::Feet => Muscle::Feet,
            BodySlug::Forearm => Muscle::Forearm,
            BodySlug::Gluteal => Muscle::Gluteal,
            BodySlug::Hamstring => Muscle::Hamstring,
            BodySlug::Hands => Muscle::Hands,
            BodySlug::Head => Muscle::Head,
            BodySlug::Knees => Muscle::Knees,
            BodySlug::LowerBack => Muscle::LowerBack,
            BodySlug::Obliques => Muscle::Obliques,
            BodySlug::Quadriceps => Muscle::Quadriceps,
            BodySlug::Tibialis => Muscle::Tibialis,
            BodySlug::Trapezius => Muscle::Trapezius,
            BodySlug::Triceps => Muscle::Triceps,
            BodySlug::UpperBack => Muscle::UpperBack,
            BodySlug::RotatorCuff => Muscle::RotatorCuff,
            BodySlug::Serratus => Muscle::Serratus,
            BodySlug::Rhomboids => Muscle::Rhomboids,
            BodySlug::UpperChest => Muscle::UpperChest,
            BodySlug::LowerChest => Muscle::LowerChest,
            BodySlug::InnerQuad => Muscle::InnerQuad,
            BodySlug::OuterQuad => Muscle::OuterQuad,
            BodySlug::HipFlexors => Muscle::HipFlexors,
            BodySlug::UpperAbs => Muscle::UpperAbs,
            BodySlug::LowerAbs => Muscle::LowerAbs,
            BodySlug::FrontDeltoid => Muscle::FrontDeltoid,
            BodySlug::RearDeltoid => Muscle::RearDeltoid,
            BodySlug::UpperTrapezius => Muscle::UpperTrapezius,
            BodySlug::LowerTrapezius => Muscle::LowerTrapezius,
            BodySlug::Ankles => Muscle::Ankles,
            BodySlug::Adductors => Muscle::Adductors,
            BodySlug::Neck => Muscle::Neck,
            BodySlug::Hair => return None,
        })
    }

    pub fn from_muscle(muscle: Muscle) -> Self {
        match muscle {
            Muscle::Abs => BodySlug::Abs,
            Muscle::Biceps => BodySlug::Biceps,
            Muscle::Calves => BodySlug::Calves,
            Muscle::Chest => BodySlug::Chest,
            Muscle::Deltoids => BodySlug::Deltoids,
            Muscle::Feet => BodySlug::Feet,
            Muscle::Forearm => BodySlug::Forearm,
            Muscle::Gluteal => BodySlug::Gluteal,
            Muscle::Hamstring => BodySlug::Hamstring,
            Muscle::Hands => BodySlug::Hands,
            Muscle::Head => BodySlug::Head,
            Muscle::Knees => BodySlug::Knees,
            Muscle::LowerBack => BodySlug::LowerBack,
            Muscle::Obliques => BodySlug::Obliques,
            Muscle::Quadriceps => BodySlug::Quadriceps,
            Muscle::Tibialis => BodySlug::Tibialis,
            Muscle::Trapezius => BodySlug::Trapezius,
            Muscle::Triceps => BodySlug::Triceps,
            Muscle::UpperBack => BodySlug::UpperBack,
            Muscle::RotatorCuff => BodySlug::RotatorCuff,
            Muscle::Serratus => BodySlug::Serratus,
            Muscle::Rhomboids => BodySlug::Rhomboids,
            Muscle::UpperChest => BodySlug::UpperChest,
            Muscle::LowerChest => BodySlug::LowerChest,
            Muscle::InnerQuad => BodySlug::InnerQuad,
            Muscle::OuterQuad => BodySlug::OuterQuad,
            Muscle::HipFlexors => BodySlug::HipFlexors,
            Muscle::UpperAbs => BodySlug::UpperAbs,
            Muscle::LowerAbs => BodySlug::LowerAbs,
            Muscle::FrontDeltoid => BodySlug::FrontDeltoid,
            Muscle::RearDeltoid => BodySlug::RearDeltoid,
            Muscle::UpperTrapezius => BodySlug::UpperTrapezius,
            Muscle::LowerTrapezius => BodySlug::LowerTrapezius,
            Muscle::Ankles => BodySlug::Ankles,
            Muscle::Adductors => BodySlug::Adductors,
            Muscle::Neck => BodySlug::Neck,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self.muscle() {
            Some(muscle) => muscle.as_str(),
            None => "hair",
        }
    }
}

impl fmt::Display for BodySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodySlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "hair" {
            return Ok(BodySlug::Hair);
        }
        s.parse::<Muscle>()
            .map(BodySlug::from_muscle)
            .map_err(|_| Error::UnknownSlug {
                name: s.to_string(),
            })
    }
}

/// One drawable unit of a (gender, side) catalog.
///
/// Shapes are SVG path data in body view box coordinates. `left`/`right` are anatomical sides,
/// `common` shapes straddle the midline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPart {
    pub slug: BodySlug,
    pub common: &'static [&'static str],
    pub left: &'static [&'static str],
    pub right: &'static [&'static str],
}

impl BodyPart {
    pub fn muscle(&self) -> Option<Muscle> {
        self.slug.muscle()
    }

    /// Every shape of this part with the side it belongs to, in `common`, `left`, `right` order.
    pub fn shapes(&self) -> impl Iterator<Item = (MuscleSide, &'static str)> + '_ {
        let common = self.common.iter().map(|d| (MuscleSide::Both, *d));
        let left = self.left.iter().map(|d| (MuscleSide::Left, *d));
        let right = self.right.iter().map(|d| (MuscleSide::Right, *d));
        common.chain(left).chain(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_muscle_round_trips_through_its_slug() {
        for muscle in Muscle::ALL {
            assert_eq!(muscle.slug().muscle(), Some(muscle));
            assert_eq!(muscle.slug().as_str(), muscle.as_str());
        }
        assert_eq!(BodySlug::Hair.muscle(), None);
    }

    #[test]
    fn slug_names_parse() {
        assert_eq!("hair".parse::<BodySlug>().unwrap(), BodySlug::Hair);
        assert_eq!(
            "rotator-cuff".parse::<BodySlug>().unwrap(),
            BodySlug::RotatorCuff
        );
        assert!(matches!(
            "eyebrows".parse::<BodySlug>(),
            Err(Error::UnknownSlug { .. })
        ));
    }

    #[test]
    fn gender_and_side_parse_case_insensitively() {
        assert_eq!(" Female ".parse::<BodyGender>().unwrap(), BodyGender::Female);
        assert_eq!("BACK".parse::<BodySide>().unwrap(), BodySide::Back);
        assert!("left".parse::<BodySide>().is_err());
    }

    #[test]
    fn part_shapes_are_tagged_with_their_side() {
        let part = BodyPart {
            slug: BodySlug::Chest,
            common: &["M0 0 L1 0 L1 1 Z"],
            left: &["M2 0 L3 0 L3 1 Z"],
            right: &[],
        };
        let sides: Vec<MuscleSide> = part.shapes().map(|(side, _)| side).collect();
        assert_eq!(sides, vec![MuscleSide::Both, MuscleSide::Left]);
    }
}
