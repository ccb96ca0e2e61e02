use chrono::Timelike;

/// `h:mm AM/PM`, twelve-hour, no leading zero on the hour.
pub fn format_clock<T: Timelike>(time: &T) -> String {
    let (pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if pm { "PM" } else { "AM" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32) -> String {
        format_clock(&NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn twelve_hour_format() {
        assert_eq!(at(15, 7), "3:07 PM");
        assert_eq!(at(0, 0), "12:00 AM");
        assert_eq!(at(12, 30), "12:30 PM");
        assert_eq!(at(9, 59), "9:59 AM");
    }
}
