//! Business profile replacement and the derived schedule metrics.

use booking_core::business::{Business, BusinessProfile, DayHours, Weekday};
use booking_core::core::services::ProfileService;
use booking_core::errors::BookingError;
use chrono::NaiveTime;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn replace_is_wholesale() {
    let mut business = Business::new("Old");
    business.profile.phone = "+1 555 0000".into();

    let mut profile = BusinessProfile::new("BookingPro Business");
    profile.category = "professional".into();
    ProfileService::replace(&mut business, profile).unwrap();

    assert_eq!(business.profile.name, "BookingPro Business");
    assert_eq!(
        business.profile.phone, "",
        "fields absent from the new profile do not survive"
    );
}

#[test]
fn replace_keeps_old_profile_on_invalid_input() {
    let mut business = Business::new("Studio");
    let err = ProfileService::replace(&mut business, BusinessProfile::new(""))
        .expect_err("empty name rejected");
    assert!(matches!(err, BookingError::InvalidInput(_)));
    assert_eq!(business.profile.name, "Studio");
}

#[test]
fn schedule_metrics_match_the_dashboard_defaults() {
    // Mon-Fri 09:00-17:00 plus Saturday 10:00-15:00 is the sample
    // dashboard schedule: 6 open days, 45 weekly hours.
    let mut profile = BusinessProfile::new("Studio");
    *profile.hours.day_mut(Weekday::Saturday) = DayHours::open_between(at(10, 0), at(15, 0));

    assert_eq!(profile.hours.open_day_count(), 6);
    assert_eq!(profile.hours.weekly_hours(), 45.0);
}

#[test]
fn half_open_days_are_counted_but_contribute_no_hours() {
    let mut profile = BusinessProfile::new("Studio");
    *profile.hours.day_mut(Weekday::Sunday) = DayHours {
        open: true,
        start: Some(at(9, 0)),
        end: None,
    };

    assert_eq!(profile.hours.open_day_count(), 6);
    assert_eq!(profile.hours.weekly_hours(), 40.0);
}

#[test]
fn fractional_weeks_round_to_one_decimal() {
    let mut profile = BusinessProfile::new("Studio");
    profile.hours = booking_core::business::WeekSchedule::closed();
    *profile.hours.day_mut(Weekday::Monday) = DayHours::open_between(at(9, 0), at(12, 20));

    assert_eq!(profile.hours.weekly_hours(), 3.3);
}
