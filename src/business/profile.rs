use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Singleton business profile: contact details plus the weekly
/// operating schedule. Saved wholesale; there is no field-level merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessProfile {
    pub name: String,
    pub description: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub hours: WeekSchedule,
}

impl BusinessProfile {
    /// Profile for a freshly created business: empty contact fields
    /// and a Monday-to-Friday nine-to-five schedule.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            hours: WeekSchedule::weekdays_nine_to_five(),
        }
    }
}

/// Operating hours for one day. A closed day keeps whatever bounds it
/// had; open days with a missing bound contribute nothing to derived
/// totals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayHours {
    pub open: bool,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl DayHours {
    pub fn open_between(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            open: true,
            start: Some(start),
            end: Some(end),
        }
    }

    pub const fn closed() -> Self {
        Self {
            open: false,
            start: None,
            end: None,
        }
    }

    /// Minutes this day is open, or 0 when closed, unset, or inverted.
    fn open_minutes(&self) -> i64 {
        if !self.open {
            return 0;
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                let span = (end - start).num_minutes();
                span.max(0)
            }
            _ => 0,
        }
    }
}

/// Days of the week, Monday-first, used to index a `WeekSchedule`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    /// Maps chrono's weekday so appointment dates can be checked
    /// against the schedule.
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

/// The seven-day operating schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekSchedule {
    days: [DayHours; 7],
}

impl WeekSchedule {
    pub fn closed() -> Self {
        Self {
            days: [DayHours::closed(); 7],
        }
    }

    /// Monday through Friday 09:00-17:00, weekend closed.
    pub fn weekdays_nine_to_five() -> Self {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).expect("valid constant time");
        let five = NaiveTime::from_hms_opt(17, 0, 0).expect("valid constant time");
        let mut schedule = Self::closed();
        for day in &Weekday::ALL[..5] {
            *schedule.day_mut(*day) = DayHours::open_between(nine, five);
        }
        schedule
    }

    pub fn day(&self, day: Weekday) -> &DayHours {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayHours {
        &mut self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        Weekday::ALL.iter().map(move |day| (*day, self.day(*day)))
    }

    /// Number of days marked open.
    pub fn open_day_count(&self) -> usize {
        self.days.iter().filter(|day| day.open).count()
    }

    /// Total weekly open time in hours, rounded to one decimal place.
    pub fn weekly_hours(&self) -> f64 {
        let minutes: i64 = self.days.iter().map(DayHours::open_minutes).sum();
        (minutes as f64 / 60.0 * 10.0).round() / 10.0
    }
}
