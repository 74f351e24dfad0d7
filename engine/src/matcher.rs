//! Recognises anchor drawings by their dimensions.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{document::Drawing, error::ConfigurationError};

/// Default absolute tolerance, in PDF points, when comparing dimensions.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Expected dimensions of an anchor drawing, keyed by dimension name.
///
/// Recognised keys are `height` and `width`. Other keys are rejected when the criteria are
/// used, not when they are parsed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Criteria(pub HashMap<String, f32>);

impl Criteria {
    /// Checks that every key names a recognised dimension.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for key in self.0.keys() {
            Dimension::parse(key)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
enum Dimension {
    Height,
    Width,
}

impl Dimension {
    fn parse(key: &str) -> Result<Self, ConfigurationError> {
        match key {
            "height" => Ok(Self::Height),
            "width" => Ok(Self::Width),
            _ => Err(ConfigurationError::UnknownCriterion(key.to_owned())),
        }
    }

    fn of(self, drawing: &Drawing) -> f32 {
        match self {
            Self::Height => drawing.rect.height(),
            Self::Width => drawing.rect.width(),
        }
    }
}

/// Returns true if every criterion is within `tolerance` of the drawing's dimension, that is
/// `|actual - expected| < tolerance`. Empty criteria match every drawing.
///
/// Fails on any unrecognised criterion key, whether or not the other criteria match.
pub fn matches(
    drawing: &Drawing,
    criteria: &Criteria,
    tolerance: f32,
) -> Result<bool, ConfigurationError> {
    let mut all_match = true;
    for (key, &expected) in &criteria.0 {
        let actual = Dimension::parse(key)?.of(drawing);
        all_match &= (actual - expected).abs() < tolerance;
    }
    Ok(all_match)
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use map_macro::hashbrown::hash_map;
    use test_casing::{TestCases, cases, test_casing};

    use super::{Criteria, DEFAULT_TOLERANCE, matches};
    use crate::{document::Drawing, error::ConfigurationError, geometry::Rect};

    fn drawing(width: f32, height: f32) -> Drawing {
        Drawing {
            rect: Rect::new(0, 0.0, 0.0, width, height),
        }
    }

    fn criteria(entries: &[(&str, f32)]) -> Criteria {
        Criteria(
            entries
                .iter()
                .map(|&(key, value)| (key.to_owned(), value))
                .collect(),
        )
    }

    const MATCH_CASES: TestCases<(Drawing, Criteria, bool)> = cases! {
        [
            (drawing(10.0, 20.0), Criteria::default(), true),
            (drawing(10.0, 20.0), criteria(&[("height", 20.0)]), true),
            (drawing(10.0, 20.0), criteria(&[("width", 10.0)]), true),
            (drawing(10.0, 20.0), criteria(&[("width", 10.05), ("height", 19.95)]), true),
            (drawing(10.0, 20.0), criteria(&[("width", 10.0), ("height", 21.0)]), false),
            (drawing(10.0, 20.0), criteria(&[("width", 11.0), ("height", 20.0)]), false),
            (drawing(10.0, 20.0), criteria(&[("height", 20.5)]), false),
        ]
    };

    #[test]
    fn test_match_cases_len() {
        assert_eq!(7, MATCH_CASES.into_iter().count());
    }

    #[test_casing(7, MATCH_CASES)]
    #[gtest]
    fn test_matches(drawing: Drawing, criteria: Criteria, expected: bool) {
        expect_that!(
            matches(&drawing, &criteria, DEFAULT_TOLERANCE),
            ok(eq(&expected))
        );
    }

    #[gtest]
    fn test_difference_equal_to_tolerance_does_not_match() {
        // Values exactly representable in binary floating point.
        let criteria = Criteria(hash_map! { "height".to_owned() => 20.0 });
        let tolerance = 0.5;

        expect_that!(
            matches(&drawing(1.0, 20.5), &criteria, tolerance),
            ok(eq(&false))
        );
        expect_that!(
            matches(&drawing(1.0, 19.5), &criteria, tolerance),
            ok(eq(&false))
        );
        expect_that!(
            matches(&drawing(1.0, 20.4375), &criteria, tolerance),
            ok(eq(&true))
        );
        expect_that!(
            matches(&drawing(1.0, 19.5625), &criteria, tolerance),
            ok(eq(&true))
        );
    }

    #[gtest]
    fn test_default_tolerance_boundary() {
        let criteria = Criteria(hash_map! { "height".to_owned() => 10.0 });

        expect_that!(
            matches(&drawing(1.0, 10.0 + DEFAULT_TOLERANCE), &criteria, DEFAULT_TOLERANCE),
            ok(eq(&false))
        );
        expect_that!(
            matches(&drawing(1.0, 10.09), &criteria, DEFAULT_TOLERANCE),
            ok(eq(&true))
        );
    }

    const UNKNOWN_CRITERION_CASES: TestCases<Criteria> = cases! {
        [
            criteria(&[("depth", 1.0)]),
            criteria(&[("height", 20.0), ("depth", 1.0)]),
            criteria(&[("height", 99.0), ("width", 10.0), ("Height", 20.0)]),
        ]
    };

    #[test_casing(3, UNKNOWN_CRITERION_CASES)]
    #[gtest]
    fn test_rejects_unknown_criterion(criteria: Criteria) {
        expect_that!(
            matches(&drawing(10.0, 20.0), &criteria, DEFAULT_TOLERANCE),
            err(anything())
        );
        expect_that!(criteria.validate(), err(anything()));
    }

    #[gtest]
    fn test_unknown_criterion_names_key() {
        let criteria = criteria(&[("depth", 1.0)]);
        expect_that!(
            matches(&drawing(10.0, 20.0), &criteria, DEFAULT_TOLERANCE),
            err(eq(&ConfigurationError::UnknownCriterion("depth".into())))
        );
    }
}
