//! Integration tests for configuration layering and validation.

use ordo_core::{CalendarType, ChristmastideEnds, Config, ConfigBuilder, ConfigOverrides, Error};
use ordo_core::{MAX_YEAR, MIN_YEAR};
use proptest::prelude::*;

// ─── Layering ─────────────────────────────────────────────────────────────────

#[test]
fn user_locale_and_type_survive_resolution() {
    let user = ConfigOverrides {
        year: Some(2019),
        locale: Some("lt".into()),
        calendar_type: Some(CalendarType::Liturgical),
        ..ConfigOverrides::default()
    };
    let config = Config::resolve(&ConfigOverrides::default(), None, &user, 2000).unwrap();
    assert_eq!(config.locale, "lt");
    assert_eq!(config.calendar_type, CalendarType::Liturgical);
    assert_eq!(config.christmastide_ends, ChristmastideEnds::OrdinaryBaptism);
}

#[test]
fn merge_keeps_unset_fields() {
    let base = ConfigOverrides {
        corpus_christi_on_thursday: Some(true),
        ..ConfigOverrides::default()
    };
    let top = ConfigOverrides {
        ascension_on_sunday: Some(true),
        ..ConfigOverrides::default()
    };
    let merged = base.merged_with(&top);
    assert_eq!(merged.corpus_christi_on_thursday, Some(true));
    assert_eq!(merged.ascension_on_sunday, Some(true));
    assert_eq!(merged.year, None);
}

#[test]
fn inconsistent_layers_are_rejected_after_merging() {
    let country = ConfigOverrides {
        christmastide_ends: Some(ChristmastideEnds::ExtraordinaryPresentation),
        ..ConfigOverrides::default()
    };
    let user = ConfigOverrides {
        christmastide_includes_the_season_of_epiphany: Some(false),
        ..ConfigOverrides::default()
    };
    let result = Config::resolve(&ConfigOverrides::default(), Some(&country), &user, 2024);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn empty_locale_is_rejected() {
    let err = ConfigBuilder::new(2024).locale("  ").build().unwrap_err();
    assert_eq!(err.to_string(), "invalid configuration: locale must not be empty");
}

// ─── Year range ───────────────────────────────────────────────────────────────

#[test]
fn liturgical_year_needs_the_preceding_advent() {
    let err = ConfigBuilder::new(MIN_YEAR)
        .calendar_type(CalendarType::Liturgical)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidYear {
            year: MIN_YEAR,
            min: MIN_YEAR + 1,
            max: MAX_YEAR,
        }
    );
}

proptest! {
    #[test]
    fn supported_years_validate(year in MIN_YEAR..=MAX_YEAR) {
        prop_assert!(ConfigBuilder::new(year).build().is_ok());
    }

    #[test]
    fn unsupported_years_fail(year in prop_oneof![i32::MIN..MIN_YEAR, (MAX_YEAR + 1)..=i32::MAX]) {
        let is_invalid_year = matches!(
            ConfigBuilder::new(year).build(),
            Err(Error::InvalidYear { .. })
        );
        prop_assert!(is_invalid_year);
    }
}
