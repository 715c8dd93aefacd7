//! # Day filtering and calendar arithmetic
//!
//! Appointments are stored as UTC instants but the calendar is read in the
//! viewer's time zone, so every function here takes a `TimeZone`. The UI passes
//! `chrono::Local`; tests pass `Utc` or a `FixedOffset`.
//!
//! [`MonthGrid`] lays out a month as Sunday-first weeks for the date picker.

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc,
};

use crate::models::Appointment;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Calendar day of `instant` as seen in `tz`.
pub fn local_day<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

pub fn is_same_day<Tz: TimeZone>(instant: &DateTime<Utc>, day: NaiveDate, tz: &Tz) -> bool {
    local_day(instant, tz) == day
}

/// Appointments falling on `day`, earliest first.
pub fn appointments_on<Tz: TimeZone>(
    appointments: &[Appointment],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<Appointment> {
    let mut found: Vec<Appointment> = appointments
        .iter()
        .filter(|a| is_same_day(&a.date, day, tz))
        .cloned()
        .collect();
    found.sort_by_key(|a| a.date);
    found
}

pub fn has_appointments_on<Tz: TimeZone>(
    appointments: &[Appointment],
    day: NaiveDate,
    tz: &Tz,
) -> bool {
    appointments.iter().any(|a| is_same_day(&a.date, day, tz))
}

/// Groups appointments by local day, days ascending and times ascending.
pub fn group_by_day<Tz: TimeZone>(
    appointments: &[Appointment],
    tz: &Tz,
) -> Vec<(NaiveDate, Vec<Appointment>)> {
    let mut sorted = appointments.to_vec();
    sorted.sort_by_key(|a| a.date);

    let mut groups: Vec<(NaiveDate, Vec<Appointment>)> = Vec::new();
    for appointment in sorted {
        let day = local_day(&appointment.date, tz);
        match groups.last_mut() {
            Some((last, items)) if *last == day => items.push(appointment),
            _ => groups.push((day, vec![appointment])),
        }
    }
    groups
}

/// First and last millisecond of `day` in `tz`, as UTC instants.
///
/// Returns `None` only when midnight does not exist in `tz` on that day.
pub fn day_bounds<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = tz
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()?;
    let end_time = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
    let end = tz.from_local_datetime(&day.and_time(end_time)).latest()?;
    Some((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS[(month.clamp(1, 12) - 1) as usize]
}

/// Card label such as `"12 May at 14:30"`.
pub fn format_when<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = instant.with_timezone(tz);
    format!(
        "{:02} {} at {}",
        local.day(),
        month_name(local.month()),
        local.format("%H:%M")
    )
}

/// Heading for a day, e.g. `"12/05/2025"`.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%d/%m/%Y").to_string()
}

pub fn format_money(value: f64, symbol: &str) -> String {
    format!("{symbol} {value:.2}")
}

/// One month laid out as Sunday-first weeks; cells outside the month are `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    /// Grid for the given month. Out-of-range months clamp into 1..=12.
    pub fn new(year: i32, month: u32) -> Self {
        let month = month.clamp(1, 12);
        let mut weeks = Vec::new();
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Self { year, month, weeks };
        };

        let lead = first.weekday().num_days_from_sunday() as usize;
        let mut week = [None; 7];
        let mut slot = lead;
        let mut day = first;
        while day.month() == month {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
            day += Duration::days(1);
        }
        if slot > 0 {
            weeks.push(week);
        }

        Self { year, month, weeks }
    }

    pub fn containing(day: NaiveDate) -> Self {
        Self::new(day.year(), day.month())
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flat_map(|w| w.iter().flatten().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentKind, AppointmentStatus};
    use chrono::FixedOffset;

    fn at(id: &str, date: DateTime<Utc>) -> Appointment {
        Appointment {
            id: id.into(),
            provider_id: "p1".into(),
            client_id: "c1".into(),
            service_id: "s1".into(),
            date,
            status: AppointmentStatus::Pending,
            kind: AppointmentKind::Repair,
            location: "Rua A".into(),
            tenant: "Ana".into(),
            description: "Fix".into(),
            approved_value: None,
            rating: None,
            feedback: None,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_selecting_a_day_keeps_same_day_entries() {
        let list = vec![
            at("late", Utc.with_ymd_and_hms(2025, 5, 12, 18, 0, 0).unwrap()),
            at("other", Utc.with_ymd_and_hms(2025, 5, 13, 9, 0, 0).unwrap()),
            at("early", Utc.with_ymd_and_hms(2025, 5, 12, 8, 0, 0).unwrap()),
        ];
        let found = appointments_on(&list, ymd(2025, 5, 12), &Utc);
        let ids: Vec<_> = found.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["early", "late"]);
        assert!(appointments_on(&list, ymd(2025, 5, 14), &Utc).is_empty());
    }

    #[test]
    fn test_day_equality_uses_local_zone() {
        // 01:30 UTC on the 13th is still the 12th in UTC-3.
        let list = vec![at("a", Utc.with_ymd_and_hms(2025, 5, 13, 1, 30, 0).unwrap())];
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert!(has_appointments_on(&list, ymd(2025, 5, 12), &brt));
        assert!(!has_appointments_on(&list, ymd(2025, 5, 13), &brt));
        assert!(has_appointments_on(&list, ymd(2025, 5, 13), &Utc));
    }

    #[test]
    fn test_day_bounds() {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        let (start, end) = day_bounds(ymd(2025, 5, 12), &brt).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 5, 12, 3, 0, 0).unwrap());
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2025, 5, 13, 2, 59, 59).unwrap() + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_month_grid_layout() {
        // May 2025 starts on a Thursday and spans five weeks.
        let grid = MonthGrid::new(2025, 5);
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[0][3], None);
        assert_eq!(grid.weeks[0][4], Some(ymd(2025, 5, 1)));
        assert_eq!(grid.days().count(), 31);
        assert_eq!(grid.title(), "May 2025");
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let dec = MonthGrid::new(2024, 12);
        assert_eq!((dec.next().year, dec.next().month), (2025, 1));
        let jan = MonthGrid::new(2025, 1);
        assert_eq!((jan.prev().year, jan.prev().month), (2024, 12));
    }

    #[test]
    fn test_group_by_day_orders_days() {
        let list = vec![
            at("b", Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap()),
            at("a", Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()),
            at("c", Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()),
        ];
        let groups = group_by_day(&list, &Utc);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, ymd(2025, 6, 1));
        let second: Vec<_> = groups[1].1.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(second, ["c", "b"]);
    }

    #[test]
    fn test_formatting() {
        let when = Utc.with_ymd_and_hms(2025, 5, 12, 14, 30, 0).unwrap();
        assert_eq!(format_when(&when, &Utc), "12 May at 14:30");
        assert_eq!(format_money(1234.5, "R$"), "R$ 1234.50");
        assert_eq!(format_day(ymd(2025, 5, 2)), "02/05/2025");
    }
}
