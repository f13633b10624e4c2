use crate::render::{HeatmapColorScale, MuscleIntensity, SvgRenderOptions};
use crate::*;
use musclemap_core::geom::{point, size};

fn canvas() -> geom::Size {
    size(300.0, 600.0)
}

#[test]
fn default_map_is_male_front_without_state() {
    let map = MuscleMap::default();
    assert_eq!(map.gender, BodyGender::Male);
    assert_eq!(map.side, BodySide::Front);
    assert!(!map.show_sub_groups);
    assert!(map.highlights().is_empty());
    assert!(map.selected_muscles().is_empty());
}

#[test]
fn highlight_defaults_and_batches() {
    let mut map = MuscleMap::default();
    map.highlight(Muscle::Chest, Color::RED, 1.0);
    assert_eq!(map.highlights()[&Muscle::Chest].muscle, Muscle::Chest);
    assert_eq!(map.highlights()[&Muscle::Chest].opacity, 1.0);

    map.highlight_all([Muscle::Chest, Muscle::Biceps, Muscle::Abs], Color::BLUE, 0.8);
    assert_eq!(map.highlights().len(), 3);
    assert_eq!(map.highlights()[&Muscle::Chest].opacity, 0.8);
    assert_eq!(map.highlights()[&Muscle::Chest].color, Color::BLUE);
}

#[test]
fn highlight_named_reports_bad_input() {
    let mut map = MuscleMap::default();
    map.highlight_named("rotator-cuff", "#00ff00", 0.5).unwrap();
    assert_eq!(map.highlights()[&Muscle::RotatorCuff].color, Color::GREEN);

    assert!(matches!(
        map.highlight_named("pecs", "#00ff00", 1.0),
        Err(MapError::Core(Error::UnknownMuscle { .. }))
    ));
    assert!(matches!(
        map.highlight_named("chest", "red", 1.0),
        Err(MapError::Core(Error::InvalidColor { .. }))
    ));
}

#[test]
fn intensities_clamp_and_replace() {
    let scale = HeatmapColorScale::workout();
    let mut map = MuscleMap::default();
    map.highlight(Muscle::Triceps, Color::RED, 1.0);
    map.set_intensities(
        [(Muscle::Chest, 4), (Muscle::Biceps, 2), (Muscle::Abs, 0), (Muscle::Calves, 9)],
        &scale,
    );
    let highlights = map.highlights();
    assert_eq!(highlights.len(), 4);
    assert!(!highlights.contains_key(&Muscle::Triceps));
    assert_eq!(highlights[&Muscle::Chest].color, scale.colors[4]);
    assert_eq!(highlights[&Muscle::Biceps].color, scale.colors[2]);
    assert_eq!(highlights[&Muscle::Abs].color, scale.colors[0]);
    assert_eq!(highlights[&Muscle::Calves].color, scale.colors[4]);
    assert!(highlights.values().all(|h| h.opacity == 1.0));
}

#[test]
fn heatmap_replaces_highlights_and_honors_overrides() {
    let scale = HeatmapColorScale::thermal();
    let mut map = MuscleMap::default();
    map.highlight(Muscle::Triceps, Color::RED, 1.0);
    map.set_heatmap(
        &[
            MuscleIntensity::new(Muscle::Chest, 1.0),
            MuscleIntensity::new(Muscle::Biceps, 0.5).with_color(Color::WHITE),
        ],
        &scale,
    );
    assert_eq!(map.highlights().len(), 2);
    assert_eq!(map.highlights()[&Muscle::Chest].color, scale.colors[4]);
    assert_eq!(map.highlights()[&Muscle::Biceps].color, Color::WHITE);

    map.clear_highlights();
    assert!(map.highlights().is_empty());
}

#[test]
fn selection_operations() {
    let mut map = MuscleMap::default();
    map.select(Muscle::Chest).select(Muscle::Biceps);
    assert_eq!(map.selected_muscles().len(), 2);
    map.deselect(Muscle::Chest);
    assert!(!map.selected_muscles().contains(&Muscle::Chest));
    assert!(map.toggle_selection(Muscle::Abs));
    assert!(!map.toggle_selection(Muscle::Abs));
    map.clear_selection();
    assert!(map.selected_muscles().is_empty());
}

#[test]
fn sub_group_flag_drives_hit_testing() {
    let mut map = MuscleMap::default();
    let p = point(172.5, 112.5);
    assert_eq!(map.hit_test(p, canvas()), Some((Muscle::Chest, MuscleSide::Left)));
    map.show_sub_groups = true;
    assert_eq!(
        map.hit_test(p, canvas()),
        Some((Muscle::LowerChest, MuscleSide::Left))
    );
}

#[test]
fn tap_toggles_the_hit_muscle() {
    let mut map = MuscleMap::default();
    let p = point(150.0, 180.0);
    assert_eq!(map.tap(p, canvas()), Some((Muscle::Abs, MuscleSide::Both)));
    assert!(map.selected_muscles().contains(&Muscle::Abs));
    map.tap(p, canvas());
    assert!(map.selected_muscles().is_empty());
    assert_eq!(map.tap(point(0.0, 0.0), canvas()), None);
}

#[test]
fn flipping_switches_catalogs() {
    let mut map = MuscleMap::new(BodyGender::Female, BodySide::Front);
    map.flip();
    assert_eq!(map.side, BodySide::Back);
    let items = map.accessibility_items(canvas());
    assert!(items.iter().any(|item| item.muscle == Muscle::Gluteal));
    assert!(items.iter().all(|item| item.muscle != Muscle::Chest));
}

#[test]
fn config_round_trip_preserves_state() {
    let mut map = MuscleMap::new(BodyGender::Female, BodySide::Back);
    map.style = render::BodyViewStyle::neon();
    map.show_sub_groups = true;
    map.highlight(Muscle::Gluteal, Color::RED, 0.6);
    map.select(Muscle::UpperBack);

    let json = map.to_config().to_json().unwrap();
    assert_eq!(MuscleMap::from_json(&json).unwrap(), map);
}

#[test]
fn config_heatmap_overrides_highlights() {
    let map = MuscleMap::from_json(
        r##"{
            "highlights": [{ "muscle": "triceps", "color": "#ff0000" }],
            "heatmap": { "scale": "thermal", "entries": [{ "muscle": "chest", "intensity": 0 }] }
        }"##,
    )
    .unwrap();
    assert_eq!(map.highlights().len(), 1);
    assert_eq!(
        map.highlights()[&Muscle::Chest].color,
        HeatmapColorScale::thermal().colors[0]
    );
}

#[test]
fn svg_reflects_state() {
    let mut map = MuscleMap::default();
    map.highlight(Muscle::Chest, Color::RED, 1.0);
    map.select(Muscle::Abs);
    let svg = map.render_svg(canvas(), &SvgRenderOptions::default());
    assert!(svg.contains(r##"fill="#ff0000""##));
    assert!(svg.contains(r#"data-muscle="abs" data-side="both" aria-selected="true""#));
}

#[test]
fn style_presets_set_by_name() {
    let mut map = MuscleMap::default();
    map.set_style_named("Medical").unwrap();
    assert_eq!(map.style, render::BodyViewStyle::medical());

    assert!(matches!(
        map.set_style_named("glossy"),
        Err(MapError::Render(musclemap_render::Error::UnknownStylePreset { .. }))
    ));
    assert_eq!(map.style, render::BodyViewStyle::medical());
}
