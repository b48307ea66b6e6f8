//! Text rendering of the dashboard.

use crate::dashboard::state::View;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{self, Display};

const TITLE: &str = "🌡️  Pi Weather Station";

/// Short timestamp format: month abbreviation, day, 12-hour time with seconds.
pub const TIME_FORMAT: &str = "%b %-d, %I:%M:%S %p";

/// Temperature rounded to one decimal place with its unit.
pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}°C", celsius)
}

/// Timestamp in the local time zone.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Timestamp in the given time zone.
pub fn format_timestamp_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format(TIME_FORMAT).to_string()
}

/// Render a view as terminal text.
pub fn render(view: &View<'_>) -> String {
    view.to_string()
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(self, View::Loading) {
            return writeln!(f, "Loading temperature data");
        }

        writeln!(f, "{}", TITLE)?;
        writeln!(f, "==========================================")?;
        writeln!(f)?;

        match self {
            View::Loading => Ok(()),
            View::Error(message) => writeln!(f, "❌ Error: {}", message),
            View::Empty => {
                writeln!(f, "No temperature readings yet")?;
                writeln!(f, "Waiting for data collection to begin...")
            }
            View::Populated {
                current,
                stats,
                history,
            } => {
                writeln!(f, "Current Temperature: {}", format_temperature(current.temperature))?;
                writeln!(f, "Last updated: {}", format_timestamp(&current.timestamp))?;
                writeln!(f)?;

                writeln!(f, "📊 Statistics:")?;
                writeln!(f, "  Maximum: {}", format_temperature(stats.max))?;
                writeln!(f, "  Minimum: {}", format_temperature(stats.min))?;
                writeln!(f, "  Average: {}", format_temperature(stats.avg))?;
                writeln!(f)?;

                writeln!(f, "Temperature History ({} readings)", history.len())?;
                for reading in history.iter() {
                    writeln!(
                        f,
                        "  {:>8}  {}",
                        format_temperature(reading.temperature),
                        format_timestamp(&reading.timestamp)
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::stats::Stats;
    use crate::reading::Reading;

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(21.456), "21.5°C");
        assert_eq!(format_temperature(20.0), "20.0°C");
        assert_eq!(format_temperature(-3.04), "-3.0°C");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 7, 14, 3, 9).unwrap();
        assert_eq!(format_timestamp_in(&ts, &Utc), "Oct 7, 02:03:09 PM");

        let ts = Utc.with_ymd_and_hms(2026, 1, 21, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp_in(&ts, &Utc), "Jan 21, 12:30:00 AM");
    }

    #[test]
    fn test_render_states() {
        assert_eq!(render(&View::Loading), "Loading temperature data\n");

        let error = render(&View::Error("Failed to fetch readings"));
        assert!(error.contains("Error: Failed to fetch readings"));

        assert!(render(&View::Empty).contains("No temperature readings yet"));
        assert_eq!(View::Empty.to_string(), render(&View::Empty));
    }

    #[test]
    fn test_render_populated() {
        let history = vec![
            Reading {
                id: 2,
                temperature: 20.04,
                timestamp: Utc::now(),
            },
            Reading {
                id: 1,
                temperature: 10.0,
                timestamp: Utc::now(),
            },
        ];
        let view = View::Populated {
            current: &history[0],
            stats: Stats {
                max: 20.04,
                min: 10.0,
                avg: 15.02,
            },
            history: &history,
        };

        let text = render(&view);
        assert!(text.contains("Current Temperature: 20.0°C"));
        assert!(text.contains("Average: 15.0°C"));
        assert!(text.contains("Temperature History (2 readings)"));
    }
}
