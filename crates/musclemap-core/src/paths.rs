//! Body part path catalog, one static table per (gender, side).

use crate::body::{BodyGender, BodyPart, BodySide};
use crate::generated::body_paths;
use crate::geom::{Rect, point, size};
use crate::muscle::MuscleSide;
use crate::path::PathGeometry;
use crate::{Error, Result};
use std::convert::Infallible;
use std::sync::OnceLock;

/// Shared coordinate space of every catalog: `0 0 200 400`.
pub fn view_box() -> Rect {
    Rect::new(point(0.0, 0.0), size(200.0, 400.0))
}

/// Ordered body parts for a view. The same slice is returned on every call.
pub fn paths(gender: BodyGender, side: BodySide) -> &'static [BodyPart] {
    match (gender, side) {
        (BodyGender::Male, BodySide::Front) => body_paths::MALE_FRONT,
        (BodyGender::Male, BodySide::Back) => body_paths::MALE_BACK,
        (BodyGender::Female, BodySide::Front) => body_paths::FEMALE_FRONT,
        (BodyGender::Female, BodySide::Back) => body_paths::FEMALE_BACK,
    }
}

#[derive(Debug, Clone)]
pub struct ShapeGeometry {
    pub side: MuscleSide,
    pub d: &'static str,
    pub geometry: PathGeometry,
}

#[derive(Debug, Clone)]
pub struct PartGeometry {
    pub part: &'static BodyPart,
    pub shapes: Vec<ShapeGeometry>,
}

impl PartGeometry {
    /// The side of the first shape containing `p`, if any.
    pub fn side_containing(&self, p: crate::geom::Point) -> Option<MuscleSide> {
        self.shapes
            .iter()
            .find(|s| s.geometry.contains(p))
            .map(|s| s.side)
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .filter_map(|s| s.geometry.bounds())
            .reduce(|a, b| a.union(&b))
    }
}

/// Flattened geometry for one catalog, index-aligned with [`paths`].
#[derive(Debug, Clone)]
pub struct BodyGeometry {
    pub gender: BodyGender,
    pub side: BodySide,
    pub parts: Vec<PartGeometry>,
}

impl BodyGeometry {
    /// Parses every shape of a catalog, failing on the first malformed path.
    pub fn try_build(gender: BodyGender, side: BodySide) -> Result<Self> {
        Self::build_with(gender, side, Err)
    }

    /// Lenient variant used for the shared arena: a malformed shape is logged and skipped.
    fn build_lenient(gender: BodyGender, side: BodySide) -> Self {
        let built = Self::build_with(gender, side, |err| {
            tracing::warn!(%gender, %side, error = %err, "skipping malformed body path");
            Ok::<(), Infallible>(())
        });
        match built {
            Ok(geometry) => geometry,
            Err(never) => match never {},
        }
    }

    /// `on_error` decides whether a malformed shape aborts the build or is skipped.
    fn build_with<E>(
        gender: BodyGender,
        side: BodySide,
        mut on_error: impl FnMut(Error) -> std::result::Result<(), E>,
    ) -> std::result::Result<Self, E> {
        let mut shape_count = 0usize;
        let mut parts = Vec::new();
        for part in paths(gender, side) {
            let mut shapes = Vec::new();
            for (shape_side, d) in part.shapes() {
                match shape_geometry(part, shape_side, d) {
                    Ok(shape) => shapes.push(shape),
                    Err(err) => on_error(err)?,
                }
            }
            shape_count += shapes.len();
            parts.push(PartGeometry { part, shapes });
        }
        tracing::debug!(
            %gender,
            %side,
            parts = parts.len(),
            shapes = shape_count,
            "built body geometry"
        );
        Ok(Self {
            gender,
            side,
            parts,
        })
    }
}

fn shape_geometry(part: &BodyPart, side: MuscleSide, d: &'static str) -> Result<ShapeGeometry> {
    let geometry = PathGeometry::parse(d).map_err(|err| Error::InvalidPath {
        slug: part.slug.to_string(),
        message: err.to_string(),
    })?;
    Ok(ShapeGeometry { side, d, geometry })
}

/// Shared, lazily built geometry for a view. Built once per process and never mutated.
pub fn geometry(gender: BodyGender, side: BodySide) -> &'static BodyGeometry {
    static CELLS: [OnceLock<BodyGeometry>; 4] = [
        OnceLock::new(),
        OnceLock::new(),
        OnceLock::new(),
        OnceLock::new(),
    ];
    let idx = match (gender, side) {
        (BodyGender::Male, BodySide::Front) => 0,
        (BodyGender::Male, BodySide::Back) => 1,
        (BodyGender::Female, BodySide::Front) => 2,
        (BodyGender::Female, BodySide::Back) => 3,
    };
    CELLS[idx].get_or_init(|| BodyGeometry::build_lenient(gender, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodySlug;
    use crate::muscle::Muscle;

    fn all_views() -> impl Iterator<Item = (BodyGender, BodySide)> {
        BodyGender::ALL
            .into_iter()
            .flat_map(|g| BodySide::ALL.into_iter().map(move |s| (g, s)))
    }

    #[test]
    fn every_catalog_path_parses() {
        for (gender, side) in all_views() {
            let geometry = BodyGeometry::try_build(gender, side).unwrap();
            assert_eq!(geometry.parts.len(), paths(gender, side).len());
            for part in &geometry.parts {
                assert!(
                    !part.shapes.is_empty(),
                    "{gender}/{side}/{} has no shapes",
                    part.part.slug
                );
            }
        }
    }

    #[test]
    fn malformed_shape_reports_its_slug() {
        static BROKEN: BodyPart = BodyPart {
            slug: BodySlug::Chest,
            common: &["M0 0 L10"],
            left: &[],
            right: &[],
        };
        let err = shape_geometry(&BROKEN, MuscleSide::Both, BROKEN.common[0]).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { ref slug, .. } if slug == "chest"));
    }

    #[test]
    fn shared_arena_matches_the_strict_build() {
        for (gender, side) in all_views() {
            let strict = BodyGeometry::try_build(gender, side).unwrap();
            let mut skipped = 0;
            let lenient = BodyGeometry::build_with(gender, side, |_| {
                skipped += 1;
                Ok::<(), Infallible>(())
            })
            .unwrap();
            assert_eq!(skipped, 0, "{gender}/{side}");
            let arena = geometry(gender, side);
            for built in [&lenient, arena] {
                assert_eq!(built.parts.len(), strict.parts.len());
                for (a, b) in built.parts.iter().zip(&strict.parts) {
                    assert_eq!(a.part.slug, b.part.slug);
                    let da: Vec<_> = a.shapes.iter().map(|s| (s.side, s.d)).collect();
                    let db: Vec<_> = b.shapes.iter().map(|s| (s.side, s.d)).collect();
                    assert_eq!(da, db);
                }
            }
        }
    }

    #[test]
    fn catalog_geometry_stays_inside_the_view_box() {
        for (gender, side) in all_views() {
            for part in &geometry(gender, side).parts {
                let b = part.bounds().unwrap();
                assert!(
                    view_box().contains_rect(&b),
                    "{gender}/{side}/{} out of bounds",
                    part.part.slug
                );
            }
        }
    }

    #[test]
    fn paths_are_referentially_stable() {
        let a = paths(BodyGender::Male, BodySide::Front);
        let b = paths(BodyGender::Male, BodySide::Front);
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(
            geometry(BodyGender::Female, BodySide::Back),
            geometry(BodyGender::Female, BodySide::Back)
        ));
    }

    #[test]
    fn slugs_are_unique_within_a_catalog() {
        for (gender, side) in all_views() {
            let parts = paths(gender, side);
            for (i, a) in parts.iter().enumerate() {
                assert!(
                    parts[i + 1..].iter().all(|b| b.slug != a.slug),
                    "{gender}/{side} repeats {}",
                    a.slug
                );
            }
        }
    }

    #[test]
    fn ordinary_sub_groups_nest_inside_their_parent_and_draw_after_it() {
        for (gender, side) in all_views() {
            let geometry = geometry(gender, side);
            let index_of =
                |slug: BodySlug| geometry.parts.iter().position(|p| p.part.slug == slug);
            for (idx, part) in geometry.parts.iter().enumerate() {
                let Some(muscle) = part.part.muscle() else {
                    continue;
                };
                let Some(parent) = muscle.parent_group() else {
                    continue;
                };
                if muscle.is_always_visible_sub_group() {
                    continue;
                }
                let parent_idx = index_of(parent.slug())
                    .unwrap_or_else(|| panic!("{gender}/{side}: {muscle} has no {parent} shape"));
                assert!(parent_idx < idx, "{gender}/{side}: {muscle} drawn before {parent}");

                let parent_part = &geometry.parts[parent_idx];
                for shape in &part.shapes {
                    let outer = parent_part
                        .shapes
                        .iter()
                        .filter(|s| s.side == shape.side)
                        .filter_map(|s| s.geometry.bounds())
                        .reduce(|a, b| a.union(&b))
                        .unwrap();
                    let inner = shape.geometry.bounds().unwrap();
                    assert!(
                        outer.contains_rect(&inner),
                        "{gender}/{side}: {muscle} ({}) escapes {parent}",
                        shape.side
                    );
                }
            }
        }
    }

    #[test]
    fn placeholder_shapes_are_absent_from_back_views() {
        for gender in BodyGender::ALL {
            let slugs: Vec<BodySlug> = paths(gender, BodySide::Back)
                .iter()
                .map(|p| p.slug)
                .collect();
            assert!(!slugs.contains(&BodySlug::RearDeltoid));
            assert!(!slugs.contains(&BodySlug::UpperTrapezius));
            assert!(!slugs.contains(&BodySlug::LowerTrapezius));
        }
    }

    #[test]
    fn front_views_carry_the_refined_sub_groups() {
        for gender in BodyGender::ALL {
            let slugs: Vec<BodySlug> = paths(gender, BodySide::Front)
                .iter()
                .map(|p| p.slug)
                .collect();
            for slug in [
                BodySlug::Serratus,
                BodySlug::HipFlexors,
                BodySlug::UpperChest,
                BodySlug::LowerChest,
                BodySlug::FrontDeltoid,
                BodySlug::InnerQuad,
                BodySlug::OuterQuad,
                BodySlug::UpperAbs,
                BodySlug::LowerAbs,
            ] {
                assert!(slugs.contains(&slug), "{gender}/front lacks {slug}");
            }
        }
    }

    #[test]
    fn front_and_back_catalogs_are_not_symmetric() {
        let front: Vec<Option<Muscle>> = paths(BodyGender::Male, BodySide::Front)
            .iter()
            .map(|p| p.muscle())
            .collect();
        let back: Vec<Option<Muscle>> = paths(BodyGender::Male, BodySide::Back)
            .iter()
            .map(|p| p.muscle())
            .collect();
        assert!(front.contains(&Some(Muscle::Chest)) && !back.contains(&Some(Muscle::Chest)));
        assert!(
            back.contains(&Some(Muscle::Rhomboids)) && !front.contains(&Some(Muscle::Rhomboids))
        );
    }
}
