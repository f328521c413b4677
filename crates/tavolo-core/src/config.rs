use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::time::Weekday;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub venue: VenueConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueConfig {
    #[serde(default)]
    pub hours: HoursConfig,
    pub capacity: CapacityConfig,
}

impl VenueConfig {
    /// ## Summary
    /// Parses a venue settings document as stored by the admin surface.
    ///
    /// ## Errors
    /// Returns an error if the JSON does not match the expected shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Raw per-weekday opening slots as "HH:MM" string pairs.
///
/// An empty list means closed that day; validation happens when the
/// scheduling layer builds its weekly hours from this.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoursConfig {
    #[serde(default)]
    pub sunday: Vec<SlotConfig>,
    #[serde(default)]
    pub monday: Vec<SlotConfig>,
    #[serde(default)]
    pub tuesday: Vec<SlotConfig>,
    #[serde(default)]
    pub wednesday: Vec<SlotConfig>,
    #[serde(default)]
    pub thursday: Vec<SlotConfig>,
    #[serde(default)]
    pub friday: Vec<SlotConfig>,
    #[serde(default)]
    pub saturday: Vec<SlotConfig>,
}

impl HoursConfig {
    /// Returns the configured slots for a weekday.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &[SlotConfig] {
        match weekday {
            Weekday::Sunday => &self.sunday,
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotConfig {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CapacityConfig {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
    pub count_by: CountBy,
}

/// What a booking is charged against a band's limit as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountBy {
    /// Occupancy sums party sizes.
    Seats,
    /// Occupancy counts bookings.
    Bookings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "debug")?
            .set_default("venue.capacity.morning", 40)?
            .set_default("venue.capacity.afternoon", 40)?
            .set_default("venue.capacity.evening", 40)?
            .set_default("venue.capacity.count_by", "seats")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;

    tracing::debug!(settings = ?settings, "Configuration loaded");

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn load_applies_defaults() {
        let settings = Settings::load().expect("defaults should satisfy the schema");

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.venue.capacity.morning, 40);
        assert_eq!(settings.venue.capacity.count_by, CountBy::Seats);
        assert!(settings.venue.hours.monday.is_empty());
    }

    #[test]
    fn venue_config_from_json() {
        let raw = r#"{
            "hours": {
                "monday": [{"open": "11:00", "close": "23:00"}],
                "friday": [{"open": "11:00", "close": "00:30"}]
            },
            "capacity": {"morning": 20, "afternoon": 30, "evening": 40, "count_by": "bookings"}
        }"#;

        let venue = VenueConfig::from_json(raw).expect("valid settings document");

        assert_eq!(venue.hours.monday.len(), 1);
        assert_eq!(venue.hours.friday[0].close, "00:30");
        assert!(venue.hours.sunday.is_empty());
        assert_eq!(venue.capacity.count_by, CountBy::Bookings);
    }

    #[test]
    fn hours_config_day_lookup() {
        let venue = VenueConfig::from_json(
            r#"{
                "hours": {"tuesday": [{"open": "09:00", "close": "17:00"}]},
                "capacity": {"morning": 1, "afternoon": 1, "evening": 1, "count_by": "seats"}
            }"#,
        )
        .expect("valid settings document");

        assert_eq!(venue.hours.day(Weekday::Tuesday).len(), 1);
        assert!(venue.hours.day(Weekday::Wednesday).is_empty());
    }
}
