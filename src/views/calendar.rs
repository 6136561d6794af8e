//! Month calendar grid
//!
//! The history page shows one month at a time as a Sunday-first grid. Leading
//! blanks pad the first week, and each day is flagged when any order falls on
//! it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::snapshot::OrderSnapshot;
use crate::domain::MonthKey;

/// One day cell of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    pub has_order: bool,
}

/// A grid cell: `None` pads the week before the 1st
pub type CalendarCell = Option<CalendarDay>;

/// Build the grid for `month`
pub fn calendar_cells(month: MonthKey, orders: &OrderSnapshot) -> Vec<CalendarCell> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };

    let order_dates: HashSet<NaiveDate> = orders
        .iter()
        .map(|order| order.date)
        .filter(|date| month.contains(*date))
        .collect();

    let leading_blanks = first.weekday().num_days_from_sunday() as usize;
    let days = first
        .iter_days()
        .take_while(|date| month.contains(*date))
        .map(|date| {
            Some(CalendarDay {
                day: date.day(),
                date,
                has_order: order_dates.contains(&date),
            })
        });

    std::iter::repeat_n(None, leading_blanks).chain(days).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Order;
    use rstest::rstest;

    fn order_on(date: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": format!("o-{date}"),
            "store": "A Tea",
            "date": date,
            "timestamp": 0,
        }))
        .unwrap()
    }

    fn month(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    #[rstest]
    #[case(2024, 2, 4, 29)] // Thursday
    #[case(2023, 2, 3, 28)] // Wednesday
    #[case(2024, 9, 0, 30)] // Sunday
    #[case(2024, 6, 6, 30)] // Saturday
    #[case(2025, 3, 6, 31)] // Saturday
    fn grid_shape_matches_the_gregorian_calendar(
        #[case] year: i32,
        #[case] month_number: u32,
        #[case] blanks: usize,
        #[case] days: usize,
    ) {
        let cells = calendar_cells(month(year, month_number), &OrderSnapshot::default());

        assert_eq!(cells.len(), blanks + days);
        assert!(cells[..blanks].iter().all(Option::is_none));
        assert!(cells[blanks..].iter().all(Option::is_some));
        assert_eq!(cells[blanks].map(|d| d.day), Some(1));
        assert_eq!(cells.last().copied().flatten().map(|d| d.day), Some(days as u32));
    }

    #[test]
    fn days_with_orders_are_flagged() {
        let orders = OrderSnapshot::new(vec![
            order_on("2024-06-01"),
            order_on("2024-06-15"),
            order_on("2024-06-15"),
            order_on("2024-07-01"),
        ]);

        let flagged: Vec<u32> = calendar_cells(month(2024, 6), &orders)
            .into_iter()
            .flatten()
            .filter(|day| day.has_order)
            .map(|day| day.day)
            .collect();

        assert_eq!(flagged, vec![1, 15]);
    }

    #[test]
    fn cells_carry_their_iso_date() {
        let cells = calendar_cells(month(2024, 6), &OrderSnapshot::default());
        let first = cells.into_iter().flatten().next().unwrap();
        assert_eq!(first.date.to_string(), "2024-06-01");
    }
}
