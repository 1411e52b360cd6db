use time::{Date, Duration, Month};

/// Days ahead (inclusive) that count as an upcoming birthday.
const WINDOW_DAYS: i64 = 7;

/// Where the birthday of `birth` is observed in `year`. Feb 29 falls on
/// Mar 1 in non-leap years.
fn observed_on(year: i32, birth: Date) -> Date {
    Date::from_calendar_date(year, birth.month(), birth.day())
        .or_else(|_| Date::from_calendar_date(year, Month::March, 1))
        .unwrap_or(birth)
}

/// True when the next occurrence of the birthday (month/day only, the stored
/// year is ignored) falls within `[today, today + 7 days]` inclusive. Checks
/// this year and the next so a late-December window reaches into January.
pub fn in_upcoming_window(birth: Date, today: Date) -> bool {
    let end = today + Duration::days(WINDOW_DAYS);
    for year in [today.year(), today.year() + 1] {
        let occurrence = observed_on(year, birth);
        if occurrence >= today && occurrence <= end {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn matches_today_and_plus_three_but_not_plus_eight_or_yesterday() {
        let today = date!(2024 - 06 - 10);
        // Stored years are historical; only month/day matters.
        assert!(in_upcoming_window(date!(1990 - 06 - 10), today));
        assert!(in_upcoming_window(date!(1985 - 06 - 13), today));
        assert!(!in_upcoming_window(date!(1990 - 06 - 18), today));
        assert!(!in_upcoming_window(date!(1990 - 06 - 09), today));
    }

    #[test]
    fn window_end_is_inclusive() {
        let today = date!(2024 - 06 - 10);
        assert!(in_upcoming_window(date!(2000 - 06 - 17), today));
    }

    #[test]
    fn wraps_across_new_year() {
        let today = date!(2024 - 12 - 28);
        assert!(in_upcoming_window(date!(1979 - 01 - 02), today));
        assert!(in_upcoming_window(date!(1979 - 12 - 31), today));
        assert!(!in_upcoming_window(date!(1979 - 01 - 05), today));
    }

    #[test]
    fn feb_29_observed_on_mar_1_in_non_leap_years() {
        // 2023 is not a leap year.
        assert!(in_upcoming_window(date!(1996 - 02 - 29), date!(2023 - 02 - 25)));
        assert!(!in_upcoming_window(date!(1996 - 02 - 29), date!(2023 - 03 - 02)));
        // 2024 is: the real Feb 29 counts.
        assert!(in_upcoming_window(date!(1996 - 02 - 29), date!(2024 - 02 - 25)));
    }

    #[test]
    fn birthday_eleven_months_away_does_not_match() {
        let today = date!(2024 - 06 - 10);
        assert!(!in_upcoming_window(date!(1990 - 05 - 10), today));
    }
}
