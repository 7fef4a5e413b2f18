//! Filter and sort behavior of the appointment query, driven through
//! a populated business.

use booking_core::business::{AppointmentStatus, Business, Customer, ServiceDraft};
use booking_core::core::services::{
    AppointmentFilter, AppointmentService, CatalogService, DateFilter, StatusFilter,
    SummaryService,
};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

const TODAY: (i32, u32, u32) = (2024, 6, 10);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

struct Fixture {
    business: Business,
    service: Uuid,
}

impl Fixture {
    fn new() -> Self {
        let mut business = Business::new("Studio");
        let service = CatalogService::add(
            &mut business,
            ServiceDraft {
                name: "Deep Tissue Massage".into(),
                description: String::new(),
                duration_minutes: 90,
                price: 120.0,
                category: "Wellness".into(),
            },
        )
        .unwrap();
        Self { business, service }
    }

    fn book(&mut self, name: &str, date: NaiveDate, time: NaiveTime) -> Uuid {
        AppointmentService::book(
            &mut self.business,
            self.service,
            date,
            time,
            Customer {
                name: name.into(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: None,
                notes: None,
            },
        )
        .unwrap()
    }
}

fn names(results: Vec<&booking_core::business::Appointment>) -> Vec<String> {
    results
        .into_iter()
        .map(|apt| apt.customer_name.clone())
        .collect()
}

#[test]
fn results_sort_by_date_then_time() {
    let mut fixture = Fixture::new();
    let tomorrow = today().succ_opt().unwrap();
    fixture.book("Third", tomorrow, at(8, 0));
    fixture.book("Second", today(), at(16, 0));
    fixture.book("First", today(), at(9, 30));

    let results =
        AppointmentService::search(&fixture.business, &AppointmentFilter::default(), today());
    assert_eq!(names(results), ["First", "Second", "Third"]);
}

#[test]
fn status_and_date_filters_compose_with_search() {
    let mut fixture = Fixture::new();
    let yesterday = today().pred_opt().unwrap();
    let tomorrow = today().succ_opt().unwrap();

    let past = fixture.book("Ana", yesterday, at(10, 0));
    fixture.book("Ben", today(), at(10, 0));
    let future = fixture.book("Anabel", tomorrow, at(10, 0));
    AppointmentService::set_status(&mut fixture.business, past, AppointmentStatus::Completed)
        .unwrap();
    AppointmentService::set_status(&mut fixture.business, future, AppointmentStatus::Cancelled)
        .unwrap();

    let completed_only = AppointmentFilter {
        status: StatusFilter::Only(AppointmentStatus::Completed),
        ..AppointmentFilter::default()
    };
    assert_eq!(
        names(AppointmentService::search(
            &fixture.business,
            &completed_only,
            today()
        )),
        ["Ana"]
    );

    let upcoming_anas = AppointmentFilter {
        search: Some("ana".into()),
        date: DateFilter::Upcoming,
        ..AppointmentFilter::default()
    };
    assert_eq!(
        names(AppointmentService::search(
            &fixture.business,
            &upcoming_anas,
            today()
        )),
        ["Anabel"],
        "cancelled still shows in listings; only the date and term filter"
    );

    let past_bucket = AppointmentFilter {
        date: DateFilter::Past,
        ..AppointmentFilter::default()
    };
    assert_eq!(
        names(AppointmentService::search(
            &fixture.business,
            &past_bucket,
            today()
        )),
        ["Ana"]
    );
}

#[test]
fn today_bucket_ignores_time_of_day() {
    let mut fixture = Fixture::new();
    fixture.book("Early", today(), at(0, 30));
    fixture.book("Late", today(), at(23, 30));
    fixture.book("NextDay", today().succ_opt().unwrap(), at(0, 0));

    let todays = AppointmentFilter {
        date: DateFilter::Today,
        ..AppointmentFilter::default()
    };
    assert_eq!(
        names(AppointmentService::search(
            &fixture.business,
            &todays,
            today()
        )),
        ["Early", "Late"]
    );
}

#[test]
fn overview_matches_query_buckets() {
    let mut fixture = Fixture::new();
    let done = fixture.book("Done", today(), at(9, 0));
    AppointmentService::set_status(&mut fixture.business, done, AppointmentStatus::Completed)
        .unwrap();
    let gone = fixture.book("Gone", today().succ_opt().unwrap(), at(9, 0));
    AppointmentService::set_status(&mut fixture.business, gone, AppointmentStatus::Cancelled)
        .unwrap();
    fixture.book("Next", today().succ_opt().unwrap(), at(9, 0));

    let overview = SummaryService::overview(&fixture.business, today());
    assert_eq!(overview.appointments_today, 1);
    assert_eq!(overview.upcoming_appointments, 2);
    assert_eq!(overview.completed_revenue, 120.0);
    assert_eq!(overview.completion_rate_percent, 33);
}
