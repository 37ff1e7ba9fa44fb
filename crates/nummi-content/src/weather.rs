//! Weather Readings
//!
//! Fixed set of readings the header picks from once per page load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Degrees Celsius
    pub temp: i32,
    pub location: String,
    pub condition: String,
}

impl WeatherReading {
    pub fn new(temp: i32, location: &str, condition: &str) -> Self {
        Self {
            temp,
            location: location.to_string(),
            condition: condition.to_string(),
        }
    }

    pub fn display_temperature(&self) -> String {
        format!("{}°C", self.temp)
    }
}

/// October readings for Kirkkonummi
pub fn default_readings() -> Vec<WeatherReading> {
    vec![
        WeatherReading::new(7, "Kirkkonummi", "Rainy"),
        WeatherReading::new(10, "Kirkkonummi", "Cloudy"),
        WeatherReading::new(12, "Kirkkonummi", "Partly Sunny"),
        WeatherReading::new(5, "Kirkkonummi", "Windy"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_temperature() {
        assert_eq!(WeatherReading::new(-3, "Kirkkonummi", "Snow").display_temperature(), "-3°C");
        assert_eq!(default_readings()[0].display_temperature(), "7°C");
    }
}
