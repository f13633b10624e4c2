//! The single sub-group visibility decision shared by drawing, hit testing, bounding rects and
//! the accessibility extractor.

use musclemap_core::{BodySlug, Muscle};

/// How one body part takes part in the current configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Suppressed: not drawn, not hittable. Its area belongs to the parent drawn beneath it.
    Hidden,
    /// Drawn, never hittable: cosmetic muscles and outline slugs without a muscle.
    Decorative,
    /// Drawn and hittable under this identity.
    Interactive(Muscle),
}

impl Visibility {
    pub fn muscle(self) -> Option<Muscle> {
        match self {
            Visibility::Interactive(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_drawn(self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityPolicy {
    pub hide_sub_groups: bool,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            hide_sub_groups: true,
        }
    }
}

impl VisibilityPolicy {
    pub fn new(hide_sub_groups: bool) -> Self {
        Self { hide_sub_groups }
    }

    pub fn resolve(self, muscle: Muscle) -> Visibility {
        if muscle.is_cosmetic_part() {
            Visibility::Decorative
        } else if self.hide_sub_groups
            && muscle.is_sub_group()
            && !muscle.is_always_visible_sub_group()
        {
            Visibility::Hidden
        } else {
            Visibility::Interactive(muscle)
        }
    }

    pub fn resolve_slug(self, slug: BodySlug) -> Visibility {
        match slug.muscle() {
            Some(muscle) => self.resolve(muscle),
            None => Visibility::Decorative,
        }
    }

    pub fn is_interactive(self, muscle: Muscle) -> bool {
        self.resolve(muscle) == Visibility::Interactive(muscle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_suppresses_only_ordinary_sub_groups() {
        let hide = VisibilityPolicy::new(true);
        assert_eq!(hide.resolve(Muscle::UpperChest), Visibility::Hidden);
        assert_eq!(hide.resolve(Muscle::Serratus), Visibility::Hidden);
        assert_eq!(hide.resolve(Muscle::Chest), Visibility::Interactive(Muscle::Chest));
        for m in [Muscle::Ankles, Muscle::Adductors, Muscle::Neck] {
            assert_eq!(hide.resolve(m), Visibility::Interactive(m));
        }
    }

    #[test]
    fn showing_exposes_every_non_cosmetic_muscle() {
        let show = VisibilityPolicy::new(false);
        for m in Muscle::ALL {
            if m.is_cosmetic_part() {
                assert_eq!(show.resolve(m), Visibility::Decorative);
            } else {
                assert!(show.is_interactive(m), "{m}");
            }
        }
    }

    #[test]
    fn cosmetic_and_outline_parts_are_decorative_under_both_policies() {
        for hide in [true, false] {
            let policy = VisibilityPolicy::new(hide);
            assert_eq!(policy.resolve(Muscle::Head), Visibility::Decorative);
            assert_eq!(policy.resolve_slug(BodySlug::Hair), Visibility::Decorative);
        }
    }

    #[test]
    fn default_policy_hides_sub_groups() {
        assert!(VisibilityPolicy::default().hide_sub_groups);
    }
}
