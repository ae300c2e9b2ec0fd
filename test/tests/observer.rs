//! How and when the observer hears about resizes.

use responsive_test::prelude::*;

#[test]
fn test_every_resize_is_reported() {
    let mut harness = ResizeHarness::new_with_size(1000, 600);
    for width in [1001, 1002, 1003, 1004] {
        harness.resize_width(width);
    }
    assert_eq!(harness.tracker().change_count(), 4);
    assert_eq!(
        harness.tracker().last(),
        Some((ViewportSize::new(1004, 600), Tier::Tablet))
    );
}

#[test]
fn test_unchanged_size_still_reported() {
    let mut harness = ResizeHarness::new_with_size(1000, 600);
    harness.resize(1000, 600).resize(1000, 600);
    assert_eq!(harness.tracker().change_count(), 2);
}

#[test]
fn test_tier_change_policy_skips_same_tier() {
    let config = ClassifierConfig::default().with_notify(NotifyPolicy::TierChange);
    let mut harness = ResizeHarness::new_with_config(800, 600, config);

    harness.resize_width(900).resize_width(1000);
    assert_eq!(harness.tracker().change_count(), 0);
    assert_eq!(harness.classifier().current().width, 1000);

    harness.resize_width(1100).resize_width(1200).resize_width(100);
    assert_eq!(harness.tracker().tiers(), vec![Tier::Desktop, Tier::Mobile]);
}

#[test]
fn test_height_changes_reach_current() {
    let mut harness = ResizeHarness::new_with_size(1000, 600);
    harness.resize(1000, 900);
    assert_eq!(harness.classifier().current().height, 900);
    assert_eq!(harness.tracker().last().map(|(size, _)| size.height), Some(900));
}

#[test]
fn test_tracker_reset() {
    let mut harness = ResizeHarness::new_with_size(1000, 600);
    harness.resize_width(200);
    harness.tracker().reset();
    assert_eq!(harness.tracker().change_count(), 0);

    harness.resize_width(1500);
    assert_eq!(harness.tracker().changes().len(), 1);
}
