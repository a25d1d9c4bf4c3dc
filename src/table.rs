use crate::models::{DailySeries, DailyTemperature};
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

const TABLE_HEAD: &str = "<table>\n<thead>\n<tr>\n<th>Day</th>\n<th>Date</th>\n<th>Min Temperature</th>\n<th>Max Temperature</th>\n</tr>\n</thead>\n<tbody>\n";
const TABLE_TAIL: &str = "</tbody>\n</table>";

pub fn render_table(series: &DailySeries) -> String {
    let mut table = String::from(TABLE_HEAD);
    for day in series.days() {
        push_row(&mut table, day);
    }
    table.push_str(TABLE_TAIL);
    table
}

fn push_row(table: &mut String, day: &DailyTemperature) {
    // Writing into a String cannot fail.
    let _ = write!(
        table,
        "<tr>\n<td>{}</td>\n<td>{}</td>\n<td>{} &deg;C</td>\n<td>{} &deg;C</td>\n</tr>\n",
        weekday_name(day.date),
        us_date(day.date),
        day.min,
        day.max,
    );
}

/// Long English weekday name, e.g. `Monday`.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// en-US short date, e.g. `3/1/2024`.
pub fn us_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DailySeries {
        let dates = (4..=6)
            .map(|d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
            .collect();
        DailySeries::from_columns(dates, vec![1.5, -0.4, 3.0], vec![11.2, 9.0, 14.75]).unwrap()
    }

    #[test]
    fn en_us_formatting() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(weekday_name(date), "Friday");
        assert_eq!(us_date(date), "3/1/2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(us_date(date), "12/25/2023");
    }

    #[test]
    fn one_body_row_per_day_in_order() {
        let table = render_table(&sample());
        assert_eq!(table.matches("<tr>").count(), 4);
        let monday = table.find("<td>Monday</td>").unwrap();
        let tuesday = table.find("<td>Tuesday</td>").unwrap();
        let wednesday = table.find("<td>Wednesday</td>").unwrap();
        assert!(monday < tuesday && tuesday < wednesday);
        assert!(table.contains("<td>3/4/2024</td>"));
    }

    #[test]
    fn temperatures_carry_degree_marker() {
        let table = render_table(&sample());
        assert!(table.contains("<td>1.5 &deg;C</td>"));
        assert!(table.contains("<td>-0.4 &deg;C</td>"));
        assert!(table.contains("<td>3 &deg;C</td>"));
        assert!(table.contains("<td>14.75 &deg;C</td>"));
        assert_eq!(table.matches("&deg;C</td>").count(), 6);
    }

    #[test]
    fn empty_series_renders_header_only() {
        let table = render_table(&DailySeries::default());
        assert_eq!(table, format!("{TABLE_HEAD}{TABLE_TAIL}"));
        assert!(table.contains("<th>Min Temperature</th>"));
    }
}
