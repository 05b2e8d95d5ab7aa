use chrono::{FixedOffset, NaiveDate, Utc, Weekday};
use clap::{Parser, Subcommand};
use log::info;
use tirtha_ephem::{GeoLocation, LowPrecisionEphemeris};
use tirtha_panchang::{
    KaalKind, MoonPhase, NorthIndianPanchang, PanchangConfig, TamilPanchang, Variant, Zodiac,
    elongation_deg, illumination_percent, karana_from_elongation, nakshatra_from_longitude,
    north_indian_panchang_with, search_special_days, tamil_panchang_with, tamil_year,
    tithi_from_elongation, vara_names, vikram_samvat, yoga_from_longitudes,
};
use tirtha_time::{EvaluationInstant, utc_offset};

#[derive(Parser)]
#[command(name = "tirtha", about = "Tamil and North Indian panchang")]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchang for one civil date
    Panchang {
        /// Civil date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Latitude in degrees, north positive (default: variant city)
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive (default: variant city)
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Altitude in meters
        #[arg(long, default_value = "0")]
        alt: f64,
        /// tamil, north or both
        #[arg(long, default_value = "tamil")]
        variant: String,
        /// UTC offset in minutes (330 = IST)
        #[arg(long, default_value = "330", allow_negative_numbers = true)]
        offset: i32,
        /// local-noon, local-midnight, utc-noon or utc-midnight
        #[arg(long, default_value = "local-noon")]
        instant: String,
        /// tropical, lahiri, raman, kp or fagan-bradley
        #[arg(long, default_value = "tropical")]
        zodiac: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List special days in a date range
    SpecialDays {
        /// First date (YYYY-MM-DD), default today
        #[arg(long)]
        start: Option<String>,
        /// Number of days to scan
        #[arg(long, default_value = "30")]
        days: u32,
        /// tamil or north
        #[arg(long, default_value = "tamil")]
        variant: String,
        /// UTC offset in minutes (330 = IST)
        #[arg(long, default_value = "330", allow_negative_numbers = true)]
        offset: i32,
        /// tropical, lahiri, raman, kp or fagan-bradley
        #[arg(long, default_value = "tropical")]
        zodiac: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Tithi from Moon and Sun longitudes
    Tithi {
        /// Moon ecliptic longitude in degrees
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        moon: f64,
        /// Sun ecliptic longitude in degrees
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        sun: f64,
    },
    /// Nakshatra from the Moon's longitude
    Nakshatra {
        /// Moon ecliptic longitude in degrees
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Yoga from Moon and Sun longitudes
    Yoga {
        /// Moon ecliptic longitude in degrees
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        moon: f64,
        /// Sun ecliptic longitude in degrees
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        sun: f64,
    },
    /// Karana from Moon and Sun longitudes
    Karana {
        /// Moon ecliptic longitude in degrees
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        moon: f64,
        /// Sun ecliptic longitude in degrees
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        sun: f64,
    },
    /// Rahu Kaal, Yamagandam and Gulika Kaal for a weekday
    Kaal {
        /// Weekday name (mon, tuesday, ...) or index 0-6 from Sunday
        weekday: String,
    },
    /// Moon phase from the Moon-Sun elongation
    MoonPhase {
        /// Elongation in degrees (0 new, 180 full)
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        angle: f64,
        /// Illuminated fraction 0-1
        #[arg(long, value_parser = parse_finite)]
        fraction: Option<f64>,
    },
    /// Tamil year name and Vikram Samvat for a Gregorian year
    Year {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
}

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

/// Number argument that must be finite; clap's f64 parser accepts `NaN` and `inf`.
fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("'{s}': {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

fn require_offset(minutes: i32) -> FixedOffset {
    utc_offset(minutes).unwrap_or_else(|e| fail(e))
}

fn require_date(s: Option<&str>, offset: FixedOffset) -> NaiveDate {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .unwrap_or_else(|e| fail(format!("Invalid date '{s}': {e} (expected YYYY-MM-DD)"))),
        None => Utc::now().with_timezone(&offset).date_naive(),
    }
}

fn require_variant(s: &str) -> Variant {
    s.parse().unwrap_or_else(|e: String| {
        eprintln!("{e}");
        fail("Valid: tamil, north")
    })
}

fn require_zodiac(s: &str) -> Zodiac {
    s.parse().unwrap_or_else(|e: String| {
        eprintln!("{e}");
        fail("Valid: tropical, lahiri, raman, kp, fagan-bradley")
    })
}

fn require_instant(s: &str) -> EvaluationInstant {
    s.parse()
        .unwrap_or_else(|e| fail(format!("{e} (local-noon, local-midnight, utc-noon, utc-midnight)")))
}

fn require_weekday(s: &str) -> u8 {
    if let Ok(i) = s.parse::<u8>() {
        if i < 7 {
            return i;
        }
        fail(format!("Invalid weekday index: {i} (0-6, Sunday = 0)"));
    }
    s.parse::<Weekday>()
        .map(|w| w.num_days_from_sunday() as u8)
        .unwrap_or_else(|_| fail(format!("Invalid weekday: {s}")))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("JSON error: {e}")),
    }
}

fn print_tamil(p: &TamilPanchang) {
    println!("Tamil Panchang for {}", p.date);
    println!("  Vara:        {} ({})", p.vara.english, p.vara.native);
    println!(
        "  Tithi:       {} ({}) #{}, {}",
        p.tithi.english, p.tithi.native, p.tithi_number, p.paksha.english
    );
    println!(
        "  Nakshatra:   {} ({}) #{}",
        p.nakshatra.english, p.nakshatra.native, p.nakshatra_number
    );
    println!("  Yoga:        {} ({})", p.yoga.english, p.yoga.native);
    println!("  Karana:      {} ({})", p.karana.english, p.karana.native);
    println!("  Month:       {} ({})", p.tamil_month.english, p.tamil_month.native);
    println!("  Year:        {} ({})", p.tamil_year.english, p.tamil_year.native);
    println!("  Sunrise:     {}", p.sunrise);
    println!("  Sunset:      {}", p.sunset);
    println!(
        "  Moon:        {} ({}), {}% lit",
        p.moon_phase.english, p.moon_phase.native, p.moon_illumination
    );
    println!("  Rahu Kaal:   {}", p.rahu_kaal);
    println!("  Yamagandam:  {}", p.yamagandam);
    println!("  Gulika Kaal: {}", p.gulika_kaal);
    println!("  Auspicious:  {}", if p.auspicious { "yes" } else { "no" });
    if let Some(day) = p.special_day {
        println!("  Special:     {} ({})", day.english, day.native);
    }
}

fn print_north(p: &NorthIndianPanchang) {
    println!("North Indian Panchang for {}", p.date);
    println!("  Vara:        {} ({})", p.vara.english, p.vara.native);
    println!(
        "  Tithi:       {} ({}) #{}, {}",
        p.tithi.english, p.tithi.native, p.tithi_number, p.paksha.native
    );
    println!(
        "  Nakshatra:   {} ({}) #{}",
        p.nakshatra.english, p.nakshatra.native, p.nakshatra_number
    );
    println!("  Yoga:        {} ({})", p.yoga.english, p.yoga.native);
    println!("  Karana:      {} ({})", p.karana.english, p.karana.native);
    println!("  Month:       {} ({})", p.month.english, p.month.native);
    println!("  Samvat:      {}", p.vikram_samvat);
    println!("  Sunrise:     {}", p.sunrise);
    println!("  Sunset:      {}", p.sunset);
    println!(
        "  Moon:        {} ({}), {}% lit",
        p.moon_phase.english, p.moon_phase.native, p.moon_illumination
    );
    println!("  Rahu Kaal:   {}", p.rahu_kaal);
    println!("  Auspicious:  {}", if p.auspicious { "yes" } else { "no" });
    if let Some(day) = p.special_day {
        println!("  Special:     {} ({})", day.english, day.native);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Panchang {
            date,
            lat,
            lon,
            alt,
            variant,
            offset,
            instant,
            zodiac,
            json,
        } => {
            let fixed = require_offset(offset);
            let date = require_date(date.as_deref(), fixed);
            let variants: Vec<Variant> = if variant.eq_ignore_ascii_case("both") {
                Variant::ALL.to_vec()
            } else {
                vec![require_variant(&variant)]
            };
            let config = PanchangConfig {
                instant: require_instant(&instant),
                utc_offset_minutes: offset,
                zodiac: require_zodiac(&zodiac),
                ..Default::default()
            };
            let location_for = |v: Variant| match (lat, lon) {
                (Some(lat), Some(lon)) => GeoLocation::new(lat, lon, alt),
                (None, None) => v.default_location(),
                _ => fail("Give both --lat and --lon, or neither"),
            };
            let eph = LowPrecisionEphemeris::new();

            let mut tamil = None;
            let mut north = None;
            for v in variants {
                let location = location_for(v);
                info!(
                    "{v} panchang for {date} at ({}, {}), {} zodiac",
                    location.latitude_deg, location.longitude_deg, config.zodiac
                );
                match v {
                    Variant::Tamil => {
                        tamil = Some(
                            tamil_panchang_with(&eph, date, &location, &config)
                                .unwrap_or_else(|e| fail(format!("Error: {e}"))),
                        );
                    }
                    Variant::NorthIndian => {
                        north = Some(
                            north_indian_panchang_with(&eph, date, &location, &config)
                                .unwrap_or_else(|e| fail(format!("Error: {e}"))),
                        );
                    }
                }
            }

            if json {
                match (&tamil, &north) {
                    (Some(t), Some(n)) => print_json(&serde_json::json!({ "tamil": t, "north": n })),
                    (Some(t), None) => print_json(t),
                    (None, Some(n)) => print_json(n),
                    (None, None) => {}
                }
            } else {
                if let Some(t) = &tamil {
                    print_tamil(t);
                }
                if tamil.is_some() && north.is_some() {
                    println!();
                }
                if let Some(n) = &north {
                    print_north(n);
                }
            }
        }

        Commands::SpecialDays {
            start,
            days,
            variant,
            offset,
            zodiac,
            json,
        } => {
            let fixed = require_offset(offset);
            let start = require_date(start.as_deref(), fixed);
            let variant = require_variant(&variant);
            let config = PanchangConfig {
                utc_offset_minutes: offset,
                zodiac: require_zodiac(&zodiac),
                ..Default::default()
            };
            let eph = LowPrecisionEphemeris::new();
            let found = search_special_days(&eph, start, days, variant, &config)
                .unwrap_or_else(|e| fail(format!("Error: {e}")));
            if json {
                print_json(&found);
            } else if found.is_empty() {
                println!("No special days in {days} days from {start}");
            } else {
                for entry in &found {
                    println!("{}  {} ({})", entry.date, entry.name.english, entry.name.native);
                }
            }
        }

        Commands::Tithi { moon, sun } => {
            let info = tithi_from_elongation(elongation_deg(moon, sun));
            let names = info.names();
            println!(
                "Tithi {}: {} / {} / {} ({}, {} of 15)",
                info.number,
                names.latin,
                names.tamil,
                names.hindi,
                info.paksha.names().latin,
                info.tithi_in_paksha()
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            let names = info.names();
            println!(
                "Nakshatra {}: {} / {} / {}",
                info.number, names.latin, names.tamil, names.hindi
            );
        }

        Commands::Yoga { moon, sun } => {
            let info = yoga_from_longitudes(moon, sun);
            let names = info.names();
            println!(
                "Yoga {}: {} / {} / {}",
                info.number, names.latin, names.tamil, names.hindi
            );
        }

        Commands::Karana { moon, sun } => {
            let info = karana_from_elongation(elongation_deg(moon, sun));
            let names = info.names();
            println!(
                "Karana {}: {} / {} / {}",
                info.index, names.latin, names.tamil, names.hindi
            );
        }

        Commands::Kaal { weekday } => {
            let day = require_weekday(&weekday);
            let names = vara_names(day);
            println!("{} ({})", names.latin, names.tamil);
            for kind in KaalKind::ALL {
                println!("  {:<11} {}", kind.name(), kind.window(day));
            }
        }

        Commands::MoonPhase { angle, fraction } => {
            let phase = MoonPhase::from_phase_angle(angle);
            let names = phase.names();
            print!("{} / {} / {}", names.latin, names.tamil, names.hindi);
            match fraction {
                Some(f) => println!(", {}% lit", illumination_percent(f)),
                None => println!(),
            }
        }

        Commands::Year { year } => {
            let name = tamil_year(year);
            println!("Tamil year:    {} ({})", name.english, name.native);
            println!("Vikram Samvat: {}", vikram_samvat(year));
        }
    }
}
