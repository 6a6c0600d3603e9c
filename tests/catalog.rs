//! 단위 카탈로그 무결성 테스트.
use unit_converter_toolbox::conversion::unit_category;
use unit_converter_toolbox::quantity::UnitCategory;

#[test]
fn every_catalog_name_resolves_to_its_own_category() {
    for cat in UnitCategory::ALL {
        for name in cat.units() {
            assert_eq!(
                unit_category(name),
                Some(cat),
                "{name} should belong to {:?}",
                cat
            );
        }
    }
}

#[test]
fn catalog_sizes_are_fixed() {
    assert_eq!(UnitCategory::Length.units().len(), 6);
    assert_eq!(UnitCategory::Mass.units().len(), 5);
    assert_eq!(UnitCategory::Temperature.units().len(), 3);
    assert_eq!(UnitCategory::Volume.units().len(), 4);
    assert_eq!(UnitCategory::Speed.units().len(), 3);
    assert_eq!(UnitCategory::Energy.units().len(), 3);
}

#[test]
fn temperature_catalog_is_exactly_the_affine_set() {
    assert_eq!(
        UnitCategory::Temperature.units(),
        &["celsius", "fahrenheit", "kelvin"]
    );
}

#[test]
fn default_unit_pairs_come_from_the_catalog() {
    for cat in UnitCategory::ALL {
        let (from, to) = cat.default_units();
        assert!(cat.units().contains(&from), "{from} missing in {:?}", cat);
        assert!(cat.units().contains(&to), "{to} missing in {:?}", cat);
        assert_ne!(from, to);
    }
}

#[test]
fn names_outside_the_catalog_do_not_resolve() {
    for name in ["parsec", "stone", "rankine", "cup", "knot", "watt_hour", ""] {
        assert_eq!(unit_category(name), None, "{name} should not resolve");
    }
}
