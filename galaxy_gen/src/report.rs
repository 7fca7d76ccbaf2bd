// Plain-text detail reports for systems and planets.

use crate::types::{Planet, StarSystem};
use std::fmt;

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn names(list: &[String]) -> String {
    if list.is_empty() {
        "none".to_string()
    } else {
        list.join(" ")
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance: {:.2}", self.distance_from_star)?;
        writeln!(f, "Diameter: {:.2}", self.diameter)?;
        writeln!(f, "Color: {}", self.color)?;
        writeln!(f, "Flora: {}", yes_no(self.has_flora))?;
        writeln!(f, "Minerals: {}", names(&self.minerals))?;
        writeln!(f, "Water: {}", yes_no(self.has_water))?;
        writeln!(f, "Gasses: {}", names(&self.gasses))?;
        writeln!(f, "Temperature: {} °C", self.temperature_celsius)?;
        writeln!(f, "Population: {}", self.population)?;
        writeln!(f, "Ring: {}", yes_no(self.has_ring))?;
        if self.moons.is_empty() {
            write!(f, "Moons: none")
        } else {
            let diameters: Vec<String> = self.moons.iter().map(|d| format!("{d:.2}")).collect();
            write!(f, "Moons: {}", diameters.join(", "))
        }
    }
}

impl fmt::Display for StarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(star) = self.star else {
            return write!(f, "Empty sector");
        };
        write!(f, "Star: diameter {:.2}, color {}", star.diameter, star.color)?;
        if !self.is_full() {
            return Ok(());
        }
        write!(f, "\nPlanets: {}", self.planets.len())?;
        for (i, planet) in self.planets.iter().enumerate() {
            write!(f, "\n\n[{}]", i + 1)?;
            for line in planet.to_string().lines() {
                write!(f, "\n  {line}")?;
            }
        }
        Ok(())
    }
}
