use super::{all_views, canvas, grid};
use crate::BodyRenderer;
use musclemap_core::geom::{point, size};
use musclemap_core::{BodyGender, BodySide, Muscle, MuscleSide};

#[test]
fn front_view_reports_anatomical_sides() {
    let renderer = BodyRenderer::new(BodyGender::Male, BodySide::Front);
    let cases = [
        ((172.5, 112.5), Some((Muscle::Chest, MuscleSide::Left))),
        ((127.5, 112.5), Some((Muscle::Chest, MuscleSide::Right))),
        ((150.0, 180.0), Some((Muscle::Abs, MuscleSide::Both))),
        ((150.0, 66.0), Some((Muscle::Neck, MuscleSide::Both))),
        ((0.0, 0.0), None),
    ];
    for ((x, y), expected) in cases {
        assert_eq!(renderer.hit_test(point(x, y), canvas()), expected, "({x}, {y})");
    }
}

#[test]
fn back_view_keeps_the_subject_left_on_the_viewer_left() {
    let renderer = BodyRenderer::new(BodyGender::Male, BodySide::Back);
    let cases = [
        ((108.0, 252.0), (Muscle::Gluteal, MuscleSide::Left)),
        ((156.0, 240.0), (Muscle::Gluteal, MuscleSide::Right)),
        ((144.0, 102.0), (Muscle::Rhomboids, MuscleSide::Left)),
        ((180.0, 102.0), (Muscle::RotatorCuff, MuscleSide::Right)),
        ((138.0, 192.0), (Muscle::LowerBack, MuscleSide::Both)),
        ((108.0, 144.0), (Muscle::UpperBack, MuscleSide::Left)),
    ];
    for ((x, y), expected) in cases {
        assert_eq!(
            renderer.hit_test(point(x, y), canvas()),
            Some(expected),
            "({x}, {y})"
        );
    }
}

#[test]
fn female_catalog_is_used_for_female_renderers() {
    let renderer = BodyRenderer::new(BodyGender::Female, BodySide::Front);
    assert_eq!(
        renderer.hit_test(point(156.0, 90.0), canvas()),
        Some((Muscle::Chest, MuscleSide::Left))
    );
    assert_eq!(
        renderer.hit_test(point(114.0, 96.0), canvas()),
        Some((Muscle::Chest, MuscleSide::Right))
    );
}

#[test]
fn topmost_visible_part_wins() {
    let renderer = BodyRenderer::new(BodyGender::Male, BodySide::Front).hide_sub_groups(false);
    assert_eq!(
        renderer.hit_test(point(172.5, 112.5), canvas()),
        Some((Muscle::LowerChest, MuscleSide::Left))
    );
    assert_eq!(
        renderer.hit_test(point(172.5, 94.5), canvas()),
        Some((Muscle::UpperChest, MuscleSide::Left))
    );
    assert_eq!(
        renderer.hit_test(point(127.5, 112.5), canvas()),
        Some((Muscle::LowerChest, MuscleSide::Right))
    );
}

#[test]
fn cosmetic_head_is_transparent() {
    for hide in [true, false] {
        let renderer = BodyRenderer::new(BodyGender::Male, BodySide::Front).hide_sub_groups(hide);
        assert_eq!(renderer.hit_test(point(150.0, 33.0), canvas()), None);
        assert_eq!(renderer.hit_test(point(150.0, 20.0), canvas()), None);
        assert_eq!(renderer.bounding_rect(Muscle::Head, canvas()), None);
    }
}

#[test]
fn cosmetic_parts_are_never_hit_anywhere() {
    for (gender, side) in all_views() {
        for hide in [true, false] {
            let renderer = BodyRenderer::new(gender, side).hide_sub_groups(hide);
            for p in grid(canvas(), 3.0) {
                if let Some((muscle, _)) = renderer.hit_test(p, canvas()) {
                    assert!(
                        !muscle.is_cosmetic_part(),
                        "{gender} {side} hide={hide}: {muscle} hit at {p:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn wide_canvas_centers_the_body() {
    let renderer = BodyRenderer::new(BodyGender::Male, BodySide::Front);
    let wide = size(400.0, 600.0);
    assert_eq!(
        renderer.hit_test(point(222.5, 112.5), wide),
        Some((Muscle::Chest, MuscleSide::Left))
    );
    // The 50px letterbox on each side belongs to nothing.
    assert_eq!(renderer.hit_test(point(25.0, 300.0), wide), None);
}

#[test]
fn degenerate_canvas_hits_nothing() {
    let renderer = BodyRenderer::new(BodyGender::Male, BodySide::Front);
    for bad in [size(0.0, 600.0), size(300.0, -1.0), size(f64::NAN, 600.0)] {
        assert_eq!(renderer.hit_test(point(150.0, 180.0), bad), None);
        assert_eq!(renderer.bounding_rect(Muscle::Chest, bad), None);
        assert!(renderer.render(bad).is_none());
    }
}

#[test]
fn muscles_absent_from_a_view_have_no_rect() {
    let back = BodyRenderer::new(BodyGender::Male, BodySide::Back);
    assert_eq!(back.bounding_rect(Muscle::Chest, canvas()), None);
    let front = BodyRenderer::new(BodyGender::Male, BodySide::Front);
    assert_eq!(front.bounding_rect(Muscle::Gluteal, canvas()), None);
}
