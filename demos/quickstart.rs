use calspan::{CalendarError, CycleOptions, Grain, Interval, TileOptions};
use chrono::NaiveDate;

fn main() -> Result<(), CalendarError> {
    let d = |m, day| NaiveDate::from_ymd_opt(2020, m, day).unwrap();
    let year = Interval::from_bounds(Some(d(1, 1)), Some(d(12, 31)));

    println!("parent: {year}");

    for month in year.tiles(Grain::Month, TileOptions::new().snap().full())? {
        println!("month tile: {month}");
    }

    let firsts: Vec<_> = year.months(CycleOptions::new().snap())?.collect();
    println!("month starts: {firsts:?}");

    Ok(())
}
