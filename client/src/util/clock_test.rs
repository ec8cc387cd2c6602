use super::*;

#[test]
fn format_clock_afternoon() {
    assert_eq!(format_clock(14, 45), "2:45 PM");
}

#[test]
fn format_clock_pads_minutes() {
    assert_eq!(format_clock(9, 5), "9:05 AM");
}

#[test]
fn format_clock_midnight_and_noon() {
    assert_eq!(format_clock(0, 0), "12:00 AM");
    assert_eq!(format_clock(12, 30), "12:30 PM");
}

#[test]
fn now_label_is_placeholder_outside_browser() {
    #[cfg(not(feature = "hydrate"))]
    assert_eq!(now_label(), PLACEHOLDER_TIME);
}
