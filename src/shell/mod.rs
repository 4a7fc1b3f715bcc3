//! Interactive numbered menu over a [`PlantRegistry`].
//!
//! Bad input never ends the session: each action prints a message and
//! returns to the menu without touching the collection. Reaching end of
//! input behaves like choosing Exit.

pub mod render;

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::{parse_date, today, Category, Plant};
use crate::registry::{PlantRegistry, RegistryError};

pub struct Shell<'a, R, W> {
    registry: &'a mut PlantRegistry,
    input: R,
    output: W,
    clock: fn() -> NaiveDate,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(registry: &'a mut PlantRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            clock: today,
        }
    }

    /// Replace the source of "today", for deterministic sessions.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        if self.registry.load_warning().is_some() {
            writeln!(
                self.output,
                "Error loading JSON file. Starting with empty list."
            )?;
        }

        loop {
            writeln!(self.output, "\n========== PLANT CARE TRACKER ==========")?;
            writeln!(self.output, "1. Add a new plant")?;
            writeln!(self.output, "2. View all plants")?;
            writeln!(self.output, "3. Check plants needing water")?;
            writeln!(self.output, "4. Mark a plant as watered")?;
            writeln!(self.output, "5. Exit")?;

            let Some(choice) = self.prompt("Enter a choice: ")? else {
                writeln!(self.output)?;
                break;
            };

            match choice.trim() {
                "1" => self.add_plant()?,
                "2" => self.view_plants()?,
                "3" => self.check_plants()?,
                "4" => self.mark_plant_watered()?,
                "5" => break,
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }

        writeln!(self.output, "Exiting program...")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add_plant(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Add a new Plant ---")?;
        let Some(name) = self.prompt("Plant name: ")? else {
            return Ok(());
        };

        writeln!(self.output, "Select Plant Type: ")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, category.label())?;
        }
        let Some(choice) = self.prompt("Enter choice (1-3): ")? else {
            return Ok(());
        };
        let Some(category) = Category::from_menu_choice(choice.trim()) else {
            writeln!(self.output, "Invalid choice")?;
            return Ok(());
        };

        let Some(interval) = self.prompt("Water interval (days): ")? else {
            return Ok(());
        };
        let Ok(interval) = interval.trim().parse::<u32>() else {
            writeln!(self.output, "Invalid number!")?;
            return Ok(());
        };

        let Some(last_watered) = self.prompt("Last watered date (DD-MM-YYYY): ")? else {
            return Ok(());
        };
        let Ok(last_watered) = parse_date(last_watered.trim()) else {
            writeln!(self.output, "Date format is wrong! Use DD-MM-YYYY")?;
            return Ok(());
        };

        self.registry
            .add(Plant::new(category, name, interval, last_watered))?;
        writeln!(self.output, "Plant added successfully!")?;
        Ok(())
    }

    fn view_plants(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Your plants ---")?;
        if self.registry.is_empty() {
            writeln!(self.output, "No plants available!")?;
            return Ok(());
        }

        for (i, plant) in self.registry.plants().iter().enumerate() {
            writeln!(self.output, "{}", render::plant_line(i + 1, plant))?;
        }
        Ok(())
    }

    fn check_plants(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Plants That Need Water ---")?;
        let due = self.registry.due((self.clock)());
        if due.is_empty() {
            writeln!(self.output, "No plant needs water today.")?;
            return Ok(());
        }

        for plant in due {
            writeln!(self.output, "{}", render::due_line(plant))?;
        }
        Ok(())
    }

    fn mark_plant_watered(&mut self) -> Result<()> {
        self.view_plants()?;
        if self.registry.is_empty() {
            return Ok(());
        }

        let Some(number) = self.prompt("\nEnter plant number to mark watered: ")? else {
            return Ok(());
        };
        let Ok(number) = number.trim().parse::<i64>() else {
            writeln!(self.output, "Invalid input")?;
            return Ok(());
        };
        // Zero and negative numbers fall through as out of range.
        let number = usize::try_from(number).unwrap_or(0);

        match self.registry.mark_watered(number, (self.clock)()) {
            Ok(plant) => writeln!(self.output, "{} marked as watered!", plant.name)?,
            Err(RegistryError::NoSuchPlant { .. }) => writeln!(self.output, "Invalid selection")?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
