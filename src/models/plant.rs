use chrono::{Days, NaiveDate};

use super::Category;

/// Text format for watering dates, both on disk and at the prompt.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A plant in the collection.
///
/// Only the calendar date of the last watering is kept; time of day never
/// affects whether a plant is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    pub category: Category,
    pub name: String,
    /// Days between required waterings.
    pub water_interval_days: u32,
    pub last_watered: NaiveDate,
}

impl Plant {
    pub fn new(
        category: Category,
        name: impl Into<String>,
        water_interval_days: u32,
        last_watered: NaiveDate,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            water_interval_days,
            last_watered,
        }
    }

    /// Build a plant from a `DD-MM-YYYY` date.
    ///
    /// Unparseable text falls back to `today` instead of failing.
    pub fn from_date_text(
        category: Category,
        name: impl Into<String>,
        water_interval_days: u32,
        last_watered: &str,
        today: NaiveDate,
    ) -> Self {
        let last_watered = parse_date(last_watered).unwrap_or_else(|e| {
            tracing::debug!("Unparseable date '{}' ({}), using {}", last_watered, e, today);
            today
        });
        Self::new(category, name, water_interval_days, last_watered)
    }

    /// The first date on which the plant needs water again.
    ///
    /// `None` if the date falls outside the supported calendar.
    pub fn next_due(&self) -> Option<NaiveDate> {
        self.last_watered
            .checked_add_days(Days::new(u64::from(self.water_interval_days)))
    }

    /// Due on or after `next_due`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_due().is_some_and(|due| today >= due)
    }

    /// Days left until the plant is due. Zero on the due date, negative once overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.next_due().map(|due| (due - today).num_days())
    }

    pub fn mark_watered(&mut self, today: NaiveDate) {
        self.last_watered = today;
    }
}

/// The plants that need water on `today`, in collection order.
pub fn filter_due(plants: &[Plant], today: NaiveDate) -> Vec<&Plant> {
    plants.iter().filter(|p| p.is_due(today)).collect()
}

pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The current local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fern(interval: u32, last_watered: NaiveDate) -> Plant {
        Plant::new(Category::IndoorPlant, "Fern", interval, last_watered)
    }

    #[test]
    fn test_due_on_boundary_day() {
        let plant = fern(3, date(2024, 1, 1));
        assert!(!plant.is_due(date(2024, 1, 3)));
        assert!(plant.is_due(date(2024, 1, 4)));
    }

    #[test]
    fn test_stays_due_once_due() {
        let plant = fern(3, date(2024, 1, 1));
        let mut day = date(2024, 1, 4);
        for _ in 0..400 {
            assert!(plant.is_due(day));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_not_due_right_after_watering() {
        let mut plant = fern(1, date(2023, 6, 1));
        let today = date(2024, 2, 29);
        assert!(plant.is_due(today));

        plant.mark_watered(today);

        assert_eq!(plant.last_watered, today);
        assert!(!plant.is_due(today));
        assert!(plant.is_due(date(2024, 3, 1)));
    }

    #[test]
    fn test_zero_interval_is_always_due() {
        let plant = fern(0, date(2024, 5, 5));
        assert!(plant.is_due(date(2024, 5, 5)));
    }

    #[test]
    fn test_watered_in_future_is_not_due() {
        let plant = fern(2, date(2030, 1, 1));
        assert!(!plant.is_due(date(2024, 1, 1)));
    }

    #[test]
    fn test_calendar_overflow_is_never_due() {
        let plant = fern(u32::MAX, NaiveDate::MAX);
        assert_eq!(plant.next_due(), None);
        assert!(!plant.is_due(NaiveDate::MAX));
    }

    #[test]
    fn test_days_until_due() {
        let plant = fern(7, date(2024, 1, 1));
        assert_eq!(plant.days_until_due(date(2024, 1, 1)), Some(7));
        assert_eq!(plant.days_until_due(date(2024, 1, 8)), Some(0));
        assert_eq!(plant.days_until_due(date(2024, 1, 10)), Some(-2));
    }

    #[test]
    fn test_from_date_text_parses_day_month_year() {
        let plant = Plant::from_date_text(
            Category::Flower,
            "Rose",
            4,
            "15-03-2024",
            date(2025, 1, 1),
        );
        assert_eq!(plant.last_watered, date(2024, 3, 15));
        assert_eq!(plant.water_interval_days, 4);
    }

    #[test]
    fn test_from_date_text_falls_back_to_today() {
        let today = date(2024, 7, 9);
        let plant = Plant::from_date_text(Category::Flower, "Rose", 4, "not-a-date", today);
        assert_eq!(plant.last_watered, today);

        let plant = Plant::from_date_text(Category::Flower, "Rose", 4, "2024-03-15", today);
        assert_eq!(plant.last_watered, today);
    }

    #[test]
    fn test_fallback_uses_current_date() {
        let now = today();
        let plant = Plant::from_date_text(Category::Vegetable, "Leek", 5, "not-a-date", today());
        assert_eq!(plant.last_watered, now);
    }

    #[test]
    fn test_filter_due_preserves_order() {
        let today = date(2024, 1, 10);
        let plants = vec![
            Plant::new(Category::Flower, "A", 2, date(2024, 1, 1)),
            Plant::new(Category::Vegetable, "B", 30, date(2024, 1, 1)),
            Plant::new(Category::IndoorPlant, "C", 9, date(2024, 1, 1)),
            Plant::new(Category::Flower, "D", 10, date(2024, 1, 1)),
        ];

        let names: Vec<&str> = filter_due(&plants, today)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_date_text_format() {
        assert_eq!(format_date(date(2024, 1, 4)), "04-01-2024");
        assert_eq!(parse_date("04-01-2024").unwrap(), date(2024, 1, 4));
        assert!(parse_date("31-02-2024").is_err());
        assert!(parse_date("").is_err());
    }
}
