use super::CalendarApp;
use crate::ui::views::agenda_view::AGENDA_SPAN_DAYS;
use crate::ui::ViewType;
use chrono::{Datelike, Local, NaiveDate};

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.current_date = match self.current_view {
            ViewType::Week => self.current_date - chrono::Duration::weeks(1),
            ViewType::Month => shift_month_preserving_day(self.current_date, -1),
            ViewType::Agenda => self.current_date - chrono::Duration::days(AGENDA_SPAN_DAYS),
        };
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = match self.current_view {
            ViewType::Week => self.current_date + chrono::Duration::weeks(1),
            ViewType::Month => shift_month_preserving_day(self.current_date, 1),
            ViewType::Agenda => self.current_date + chrono::Duration::days(AGENDA_SPAN_DAYS),
        };
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }
}

fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    clamp_day(new_year, new_month as u32, current.day())
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> NaiveDate {
    let max_day = last_day_of_month(year, month);
    let day = desired_day.min(max_day);
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, max_day))
        .expect("valid calendar date")
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_month_forward() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(
            shift_month_preserving_day(date, 1),
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
    }

    #[test]
    fn test_shift_month_clamps_to_shorter_month() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(
            shift_month_preserving_day(date, 1),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_shift_month_across_year_boundary() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(
            shift_month_preserving_day(date, -1),
            NaiveDate::from_ymd_opt(2024, 12, 10).unwrap()
        );
    }
}
