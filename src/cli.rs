//! Command-line interface: one-shot subcommands over a [`PlantRegistry`].
//!
//! With no subcommand the binary runs the interactive [`Shell`](crate::shell::Shell).

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::models::{parse_date, Category, Plant};
use crate::registry::PlantRegistry;
use crate::shell::render;

#[derive(Debug, Parser)]
#[command(name = "plant-care")]
#[command(about = "Track when your plants need watering")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a plant to the collection
    Add {
        /// Name of the plant
        #[arg(short, long)]
        name: String,

        /// flower, vegetable or indoor
        #[arg(short, long)]
        category: Category,

        /// Days between waterings
        #[arg(short, long)]
        interval: u32,

        /// Date it was last watered (DD-MM-YYYY)
        #[arg(short, long)]
        last_watered: String,
    },
    /// List every plant
    List,
    /// List plants that need water today
    Due,
    /// Mark a plant as watered today, by its number in `list`
    Water { number: usize },
}

/// Run one subcommand, writing its report to `out`.
///
/// Invalid input is returned as an error and leaves the collection untouched.
pub fn execute(
    command: Commands,
    registry: &mut PlantRegistry,
    today: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Add {
            name,
            category,
            interval,
            last_watered,
        } => {
            let last_watered = parse_date(&last_watered).with_context(|| {
                format!("Date format is wrong! Use DD-MM-YYYY (got '{}')", last_watered)
            })?;
            registry.add(Plant::new(category, name, interval, last_watered))?;
            writeln!(out, "Plant added successfully!")?;
        }
        Commands::List => {
            if registry.is_empty() {
                writeln!(out, "No plants available!")?;
            }
            for (i, plant) in registry.plants().iter().enumerate() {
                writeln!(out, "{}", render::plant_line(i + 1, plant))?;
            }
        }
        Commands::Due => {
            let due = registry.due(today);
            if due.is_empty() {
                writeln!(out, "No plant needs water today.")?;
            }
            for plant in due {
                writeln!(out, "{}", render::due_line_detailed(plant, today))?;
            }
        }
        Commands::Water { number } => {
            let plant = registry.mark_watered(number, today)?;
            writeln!(out, "{} marked as watered!", plant.name)?;
        }
    }

    Ok(())
}
