//! Laying out a month calendar with the table layout and date helpers.

use std::fs;

use chrono::{Datelike, NaiveDate};
use extrautils::collections::FrequencyExt;
use extrautils::text::tokenize;
use extrautils::time::{is_czech_holiday, YearMonth};
use extrautils::{FillOrder, TableSpec};
use tempfile::TempDir;

fn month_spec(month: YearMonth, height: i64) -> TableSpec {
    let days = month.days().count() as i64;
    let padding = month.first_day().unwrap().weekday().num_days_from_monday();
    TableSpec::builder()
        .width(7)
        .height(height)
        .list_size(days)
        .start_padding(i64::from(padding))
        .fill_order(FillOrder::TopLeftRight)
        .build()
        .unwrap()
}

#[test]
fn may_2019_as_week_rows() {
    let may = YearMonth::new(2019, 5).unwrap();
    let days: Vec<NaiveDate> = may.days().collect();
    let spec = month_spec(may, 0);
    assert_eq!(spec.height(), 5);

    let weeks = spec.table_map_or(&days, String::from("  "), |day| {
        if is_czech_holiday(*day) {
            format!("{:>2}*", day.day())
        } else {
            format!("{:>2}", day.day())
        }
    });

    let rendered: Vec<String> = weeks.iter().map(|week| week.join(" ")).collect();
    assert_eq!(rendered[0], "       1*  2  3  4*  5*");
    assert_eq!(rendered[1], " 6  7  8*  9 10 11* 12*");
    assert_eq!(rendered[4], "27 28 29 30 31      ");
}

#[test]
fn every_day_lands_in_its_weekday_column() {
    let month = YearMonth::new(2021, 8).unwrap();
    let days: Vec<NaiveDate> = month.days().collect();
    let spec = month_spec(month, 6);

    for week in spec.table(&days) {
        for (column, cell) in week.into_iter().enumerate() {
            if let Some(day) = cell {
                assert_eq!(day.weekday().num_days_from_monday() as usize, column);
            }
        }
    }
}

#[test]
fn layout_read_from_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.yaml");
    fs::write(
        &path,
        "height: 3\nlist_size: 7\nfill_order: bottom-left-top\n",
    )
    .unwrap();

    let spec = TableSpec::from_path(&path).unwrap();
    let words = tokenize(r#"one two "three and a half" four five six seven"#);
    assert_eq!(words.len(), 7);
    assert!(!words.iter().has_multiple());

    let rows = spec.table_or(&words, String::new());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2][0], "one");
    assert_eq!(rows[0][0], "three and a half");
    assert_eq!(rows[2][2], "seven");
    assert_eq!(rows[0][2], "");
}
