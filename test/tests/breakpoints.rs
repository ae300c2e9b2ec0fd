//! Boundary behaviour of the default breakpoint table.
//!
//! Widths equal to a threshold always belong to the higher tier.

use responsive_test::prelude::*;

fn classify(width: u32) -> Tier {
    ResizeHarness::new_with_size(width, 600).classifier().breakpoint()
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(classify(767), Tier::Mobile);
    assert_eq!(classify(768), Tier::Tablet);
    assert_eq!(classify(1023), Tier::Tablet);
    assert_eq!(classify(1024), Tier::Desktop);
    assert_eq!(classify(1279), Tier::Desktop);
    assert_eq!(classify(1280), Tier::Wide);
}

#[test]
fn test_wide_threshold_only_used_by_queries() {
    let harness = ResizeHarness::new_with_size(1400, 900);
    let classifier = harness.classifier();
    assert_eq!(classifier.breakpoint(), Tier::Wide);
    assert!(classifier.is_below(Tier::Wide));
    assert!(!classifier.is_above(Tier::Wide));
}

#[test]
fn test_between_tablet_and_desktop() {
    let mut harness = ResizeHarness::new_with_size(1024, 600);
    assert!(harness.classifier().is_between(Tier::Tablet, Tier::Desktop));

    harness.resize_width(1023);
    assert!(!harness.classifier().is_between(Tier::Tablet, Tier::Desktop));

    harness.resize_width(1280);
    assert!(!harness.classifier().is_between(Tier::Tablet, Tier::Desktop));
}

#[test]
fn test_inverted_range_is_false() {
    let harness = ResizeHarness::new_with_size(1100, 600);
    let classifier = harness.classifier();
    assert!(classifier.is_between(Tier::Tablet, Tier::Desktop));
    assert!(!classifier.is_between(Tier::Desktop, Tier::Tablet));
    assert!(!classifier.is_between(1280, 768));
}

#[test]
fn test_mixed_named_and_pixel_thresholds() {
    let harness = ResizeHarness::new_with_size(900, 600);
    let classifier = harness.classifier();
    assert!(classifier.is_between(Tier::Mobile, 1000));
    assert!(classifier.is_above(900));
    assert!(classifier.is_below(901));
    assert!(classifier.is_below("tablet".parse::<Threshold>().unwrap()));
}

#[test]
fn test_custom_table_in_columns() {
    let table = BreakpointTable::new(60, 100, 140, 200).unwrap();
    let mut harness =
        ResizeHarness::new_with_config(80, 24, ClassifierConfig::default().with_breakpoints(table));
    assert_eq!(harness.classifier().breakpoint(), Tier::Tablet);

    harness.resize(59, 24);
    assert!(harness.classifier().is_mobile());

    harness.resize(140, 24);
    assert!(harness.classifier().is_wide());
}
