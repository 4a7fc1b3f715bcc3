//! Text formatting for plant listings.

use chrono::NaiveDate;

use crate::models::Plant;

/// A numbered line for the full listing.
///
/// Example: `1. Rose (Flower) - Water every 3 day - Last: 2024-01-01`
pub fn plant_line(number: usize, plant: &Plant) -> String {
    format!(
        "{}. {} ({}) - Water every {} day - Last: {}",
        number,
        plant.name,
        plant.category,
        plant.water_interval_days,
        plant.last_watered.format("%Y-%m-%d")
    )
}

pub fn due_line(plant: &Plant) -> String {
    format!("{} ({}) needs watering!", plant.name, plant.category)
}

/// Due line with how long the plant has been waiting, for the CLI.
pub fn due_line_detailed(plant: &Plant, today: NaiveDate) -> String {
    match plant.days_until_due(today) {
        Some(days) if days < 0 => format!("{} ({} days overdue)", due_line(plant), -days),
        _ => due_line(plant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn rose() -> Plant {
        Plant::new(
            Category::Flower,
            "Rose",
            3,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_plant_line() {
        assert_eq!(
            plant_line(1, &rose()),
            "1. Rose (Flower) - Water every 3 day - Last: 2024-01-01"
        );
    }

    #[test]
    fn test_due_line_uses_stored_tag() {
        let plant = Plant::new(
            Category::IndoorPlant,
            "Pothos",
            5,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(due_line(&plant), "Pothos (Indoor_plant) needs watering!");
    }

    #[test]
    fn test_due_line_detailed() {
        let on_time = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        assert_eq!(
            due_line_detailed(&rose(), on_time),
            "Rose (Flower) needs watering!"
        );

        let late = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        assert_eq!(
            due_line_detailed(&rose(), late),
            "Rose (Flower) needs watering! (2 days overdue)"
        );
    }
}
