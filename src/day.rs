//! Days of the week and weekday/weekend classification.

use crate::error::ParseWeekdayError;
use std::fmt;
use std::str::FromStr;

/// The seven days, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
    /// Every day in ordinal order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based position, Monday = 0.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Weekday> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    pub fn name(self) -> &'static str {
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
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    /// Case-insensitive full English name, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|day| day.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseWeekdayError { input: s.to_owned() })
    }
}

/// Kind of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn label(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Saturday and Sunday are the weekend.
pub fn classify(day: Weekday) -> DayType {
    match day {
        Weekday::Saturday | Weekday::Sunday => DayType::Weekend,
        Weekday::Monday
        | Weekday::Tuesday
        | Weekday::Wednesday
        | Weekday::Thursday
        | Weekday::Friday => DayType::Weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_days() {
        assert_eq!(classify(Weekday::Saturday), DayType::Weekend);
        assert_eq!(classify(Weekday::Sunday), DayType::Weekend);
        assert_eq!(classify(Weekday::Saturday).to_string(), "Weekend");
    }

    #[test]
    fn working_days() {
        assert_eq!(classify(Weekday::Wednesday).label(), "Weekday");
        let weekdays = Weekday::ALL.iter().filter(|d| classify(**d) == DayType::Weekday).count();
        assert_eq!(weekdays, 5);
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        for (index, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(day.ordinal()), index);
            assert_eq!(Weekday::from_ordinal(day.ordinal()), Some(*day));
        }
        assert_eq!(Weekday::from_ordinal(7), None);
        assert!(Weekday::Monday < Weekday::Sunday);
    }

    #[test]
    fn parse_names() {
        assert_eq!(" saturday ".parse::<Weekday>(), Ok(Weekday::Saturday));
        assert_eq!("MONDAY".parse::<Weekday>(), Ok(Weekday::Monday));
        let err = "Caturday".parse::<Weekday>().unwrap_err();
        assert_eq!(err.input(), "Caturday");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for day in Weekday::ALL {
            assert_eq!(day.to_string().parse::<Weekday>(), Ok(day));
        }
    }
}
