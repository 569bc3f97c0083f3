use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use amlich_calendar::{
    CalendarConfig, DEFAULT_TZ_HOURS, DayInfo, LunarDate, SolarDate, Upcoming, WeekdayNames,
    day_in_week, lunar_to_solar, lunar_year_info, solar_to_lunar, zodiac_day, zodiac_month,
    zodiac_year,
};

#[derive(Parser)]
#[command(name = "amlich", about = "Vietnamese lunar calendar (âm lịch)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solar date to lunar date
    ToLunar {
        /// Solar date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(allow_hyphen_values = true)]
        date: SolarDate,
        /// Offset from UTC in hours
        #[arg(long, default_value_t = DEFAULT_TZ_HOURS, allow_negative_numbers = true)]
        tz: f64,
    },
    /// Lunar date to solar date
    ToSolar {
        /// Lunar day (1-30)
        day: u32,
        /// Lunar month (1-12)
        month: u32,
        /// Lunar year
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// The month is the leap (nhuận) month
        #[arg(long)]
        leap: bool,
        /// Offset from UTC in hours
        #[arg(long, default_value_t = DEFAULT_TZ_HOURS, allow_negative_numbers = true)]
        tz: f64,
    },
    /// Can-chi names of the year, month and day of a solar date
    Zodiac {
        /// Solar date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(allow_hyphen_values = true)]
        date: SolarDate,
        /// Offset from UTC in hours
        #[arg(long, default_value_t = DEFAULT_TZ_HOURS, allow_negative_numbers = true)]
        tz: f64,
    },
    /// Weekday of a solar date
    Weekday {
        /// Solar date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(allow_hyphen_values = true)]
        date: SolarDate,
        /// Print the English short name
        #[arg(long)]
        english: bool,
    },
    /// Month starts and leap month of a lunar year
    Year {
        /// Lunar year
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Offset from UTC in hours
        #[arg(long, default_value_t = DEFAULT_TZ_HOURS, allow_negative_numbers = true)]
        tz: f64,
    },
    /// Everything about one day; defaults to today's local date
    Today {
        /// Solar date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long, allow_hyphen_values = true)]
        date: Option<SolarDate>,
        /// Offset from UTC in hours
        #[arg(long, default_value_t = DEFAULT_TZ_HOURS, allow_negative_numbers = true)]
        tz: f64,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::ToLunar { date, tz } => {
            let config = require_config(tz);
            println!("{}", solar_to_lunar(date, config.tz_hours));
        }

        Commands::ToSolar {
            day,
            month,
            year,
            leap,
            tz,
        } => {
            let config = require_config(tz);
            if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
                eprintln!("Error: invalid lunar date {day}/{month}/{year}");
                std::process::exit(1);
            }
            let lunar = LunarDate::new(day, month, year, leap);
            match lunar_to_solar(lunar, config.tz_hours) {
                Ok(solar) => println!("{solar}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Zodiac { date, tz } => {
            let config = require_config(tz);
            let lunar = solar_to_lunar(date, config.tz_hours);
            println!("Year:  {}", zodiac_year(lunar.year));
            println!("Month: {}", zodiac_month(lunar.month, lunar.year));
            println!("Day:   {}", zodiac_day(date));
        }

        Commands::Weekday { date, english } => {
            let names = if english {
                WeekdayNames::English
            } else {
                WeekdayNames::Vietnamese
            };
            println!("{}", day_in_week(date, names));
        }

        Commands::Year { year, tz } => {
            let config = require_config(tz);
            let info = lunar_year_info(year, config.tz_hours);
            println!("Lunar year {} ({})", info.year, info.can_chi);
            match info.leap_month {
                Some(m) => println!("Leap month: {m}"),
                None => println!("Leap month: none"),
            }
            for m in &info.months {
                let leap = if m.leap { " (nhuận)" } else { "" };
                println!(
                    "  Month {:>2}{:<9} {}  {} days",
                    m.month, leap, m.start, m.days
                );
            }
            println!("Total: {} days", info.total_days());
        }

        Commands::Today { date, tz } => {
            let config = require_config(tz);
            let date = date.unwrap_or_else(local_today);
            let info = DayInfo::for_date(date, &config).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            print_day(&info);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn require_config(tz: f64) -> CalendarConfig {
    CalendarConfig::new(tz).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn local_today() -> SolarDate {
    let now = Local::now().date_naive();
    debug!(%now, "using local date");
    SolarDate::new(now.day(), now.month(), now.year())
}

fn print_day(info: &DayInfo) {
    println!("Solar:    {} ({})", info.solar, info.weekday);
    println!("Lunar:    {}", info.summary());
    println!("Day:      {}", info.day_name);
    println!("Month:    {}", info.month_name);
    println!("Marker:   {}", info.marker.label());
    println!("Next 1st:  {}", upcoming_line(info.next_first));
    println!("Next 15th: {}", upcoming_line(info.next_fifteenth));
}

fn upcoming_line(next: Option<Upcoming>) -> String {
    match next {
        Some(u) => {
            let leap = if u.leap { " (nhuận)" } else { "" };
            format!(
                "{} (month {}{}/{}, in {} days)",
                u.solar, u.lunar_month, leap, u.lunar_year, u.days_until
            )
        }
        None => "unavailable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_both_date_forms() {
        let cli = Cli::try_parse_from(["amlich", "to-lunar", "2024-02-10"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::ToLunar { date, tz } if date == SolarDate::new(10, 2, 2024) && tz == 7.0
        ));
        let cli = Cli::try_parse_from(["amlich", "weekday", "10/02/2024", "--english"]).unwrap();
        assert!(matches!(cli.command, Commands::Weekday { english: true, .. }));
    }

    #[test]
    fn negative_offset() {
        let cli = Cli::try_parse_from(["amlich", "year", "2024", "--tz", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Year { year: 2024, tz } if tz == -5.0));
    }

    #[test]
    fn negative_iso_year() {
        let cli = Cli::try_parse_from(["amlich", "weekday", "-0044-03-15"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Weekday { date, .. } if date == SolarDate::new(15, 3, -44)
        ));
    }

    #[test]
    fn rejects_invalid_date() {
        assert!(Cli::try_parse_from(["amlich", "to-lunar", "2024-02-30"]).is_err());
    }

    #[test]
    fn upcoming_formatting() {
        let u = Upcoming {
            solar: SolarDate::new(9, 11, 2026),
            lunar_month: 10,
            lunar_year: 2026,
            leap: false,
            days_until: 22,
        };
        assert_eq!(
            upcoming_line(Some(u)),
            "09/11/2026 (month 10/2026, in 22 days)"
        );
        let leap = Upcoming {
            solar: SolarDate::new(21, 3, 2023),
            lunar_month: 2,
            lunar_year: 2023,
            leap: true,
            days_until: 11,
        };
        assert_eq!(
            upcoming_line(Some(leap)),
            "21/03/2023 (month 2 (nhuận)/2023, in 11 days)"
        );
        assert_eq!(upcoming_line(None), "unavailable");
    }
}
