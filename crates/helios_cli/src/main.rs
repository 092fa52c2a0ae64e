use chrono::{DateTime, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use helios_frames::{
    AtmosphericConditions, EquatorialCoords, Nutation, Observer, Refraction,
    apparent_sidereal_time_deg, equatorial_to_horizontal, mean_obliquity_deg,
    true_altitude_from_apparent, true_obliquity_deg,
};
use helios_sun::{GeoLocation, SunConfig, sun_position_detail};
use helios_time::{
    CivilDateTime, SECONDS_PER_DAY, TimeArg, UNIX_EPOCH_JD, deg_to_dms, deg_to_hms,
    jd_to_centuries, local_sidereal_time_deg, mean_sidereal_time_deg, normalize_360,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "helios", about = "Helios solar position CLI")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// Nutation series selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum NutationArg {
    /// 63-term series (0.01″)
    Full,
    /// Dominant terms only (0.5″)
    TwoTerm,
}

impl From<NutationArg> for helios_frames::NutationModel {
    fn from(arg: NutationArg) -> Self {
        match arg {
            NutationArg::Full => Self::Meeus63,
            NutationArg::TwoTerm => Self::TwoTerm,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Apparent azimuth/altitude of the Sun
    Sun {
        /// Date/time (YYYY-MM-DDThh:mm:ss[Z|±hh:mm])
        #[arg(long)]
        date: String,
        /// IANA time zone for the date (e.g. America/Denver)
        #[arg(long)]
        tz: Option<String>,
        /// Longitude in degrees, west positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Read --lon as east positive
        #[arg(long)]
        east: bool,
        /// Nutation series
        #[arg(long, value_enum, default_value = "full")]
        nutation: NutationArg,
        /// Surface pressure in millibars
        #[arg(long, default_value = "1010")]
        pressure: f64,
        /// Surface temperature in degrees Celsius
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        temperature: f64,
        /// Report the geometric altitude
        #[arg(long)]
        no_refraction: bool,
        /// Print every intermediate value
        #[arg(long)]
        detail: bool,
    },
    /// Julian Day for a civil date/time
    Jd {
        /// Date/time (YYYY-MM-DDThh:mm:ss[Z|±hh:mm])
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// IANA time zone for the date
        #[arg(long)]
        tz: Option<String>,
    },
    /// Civil date/time for a Julian Day
    Calendar {
        /// Julian Day (UT)
        jd: f64,
        /// IANA time zone for the output
        #[arg(long)]
        tz: Option<String>,
    },
    /// Nutation in longitude and obliquity
    Nutation {
        /// Julian Day
        jd: f64,
        /// Nutation series
        #[arg(long, value_enum, default_value = "full")]
        model: NutationArg,
    },
    /// Mean and true obliquity of the ecliptic
    Obliquity {
        /// Julian Day
        jd: f64,
        /// Nutation series for the true obliquity
        #[arg(long, value_enum, default_value = "full")]
        model: NutationArg,
    },
    /// Mean and apparent Greenwich sidereal time
    Sidereal {
        /// Julian Day (UT)
        jd: f64,
        /// Nutation series
        #[arg(long, value_enum, default_value = "full")]
        model: NutationArg,
        /// Longitude (west positive) for local sidereal time
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Horizontal coordinates of a body from its RA/Dec
    Horizontal {
        /// Right ascension in hours
        #[arg(long)]
        ra: f64,
        /// Declination in degrees
        #[arg(long, allow_hyphen_values = true)]
        dec: f64,
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
        /// Longitude in degrees, west positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Nutation series for apparent sidereal time
        #[arg(long, value_enum, default_value = "full")]
        model: NutationArg,
    },
    /// Atmospheric refraction for an altitude
    Refraction {
        /// Altitude in degrees (true, or apparent with --apparent)
        #[arg(allow_hyphen_values = true)]
        altitude: f64,
        /// Treat the altitude as apparent and return the true altitude
        #[arg(long)]
        apparent: bool,
        /// Surface pressure in millibars
        #[arg(long, default_value = "1010")]
        pressure: f64,
        /// Surface temperature in degrees Celsius
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        temperature: f64,
    },
    /// Convert degrees to DMS and HMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_tz(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>()
        .map_err(|_| format!("unknown time zone: {name}"))
}

/// Parse a civil instant. With `tz`, the clock fields are read as local
/// time in that zone and any offset in `date` is replaced.
fn parse_instant(date: &str, tz: Option<&str>) -> Result<CivilDateTime, String> {
    let parsed: CivilDateTime = date.parse().map_err(|e| format!("{e}"))?;
    let Some(name) = tz else {
        return Ok(parsed);
    };
    let zone = parse_tz(name)?;

    let naive = wall_clock_naive(&parsed)?;
    let local = zone
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| format!("{date} is ambiguous or skipped in {name}"))?;
    let offset = local.offset().fix().local_minus_utc();
    debug!(tz = name, offset, "resolved time zone");

    CivilDateTime::new(
        parsed.year(),
        parsed.month(),
        parsed.day(),
        parsed.hour(),
        parsed.minute(),
        parsed.second(),
        offset,
    )
    .map_err(|e| format!("{e}"))
}

/// The wall-clock fields of `t` as a chrono naive date-time.
///
/// Goes through the Julian Day, so dates before 1582-10-15 (Julian
/// calendar) map onto the proleptic Gregorian day chrono expects.
fn wall_clock_naive(t: &CivilDateTime) -> Result<NaiveDateTime, String> {
    let wall = CivilDateTime::utc(t.year(), t.month(), t.day(), t.hour(), t.minute(), t.second())
        .map_err(|e| format!("{e}"))?;
    let secs = unix_seconds(wall.to_jd()).round() as i64;
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| format!("{wall} is outside the range chrono supports"))
}

/// Seconds since the Unix epoch for a Julian Day.
fn unix_seconds(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// UTC offset of `zone` at Julian Day `jd`, in seconds.
fn offset_at_jd(zone: &Tz, jd: f64) -> Result<i32, String> {
    let secs = unix_seconds(jd).floor() as i64;
    let utc = Utc
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| format!("JD {jd} is outside the range chrono supports"))?;
    Ok(utc.with_timezone(zone).offset().fix().local_minus_utc())
}

fn or_exit<T>(result: Result<T, String>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn format_hms(deg: f64) -> String {
    deg_to_hms(deg).to_string()
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Sun {
            date,
            tz,
            lon,
            lat,
            east,
            nutation,
            pressure,
            temperature,
            no_refraction,
            detail,
        } => {
            let instant = or_exit(parse_instant(&date, tz.as_deref()));
            let location = if east {
                GeoLocation::from_east(lon, lat)
            } else {
                GeoLocation::new(lon, lat)
            };
            let location = location.unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let config = SunConfig {
                nutation: nutation.into(),
                refraction: (!no_refraction)
                    .then(|| AtmosphericConditions::new(pressure, temperature)),
            };

            let d = sun_position_detail(&instant, &location, &config);
            if detail {
                println!("Instant:              {instant}");
                println!("JD (UT):              {:.6}", d.jd);
                println!("T (centuries):        {:.12}", d.t);
                println!("Mean longitude L0:    {:.6} deg", d.mean_longitude_deg);
                println!("Mean anomaly M:       {:.6} deg", d.mean_anomaly_deg);
                println!("Equation of centre C: {:.6} deg", d.equation_of_center_deg);
                println!("True longitude:       {:.6} deg", d.true_longitude_deg);
                println!("Apparent longitude:   {:.6} deg", d.apparent_longitude_deg);
                println!("Nutation dpsi:        {:.4}\"", d.nutation.delta_psi_arcsec);
                println!("Nutation deps:        {:.4}\"", d.nutation.delta_eps_arcsec);
                println!("True obliquity:       {}", deg_to_dms(d.true_obliquity_deg));
                println!(
                    "RA:                   {} ({:.6} deg)",
                    format_hms(d.equatorial.ra_deg),
                    d.equatorial.ra_deg
                );
                println!("Dec:                  {}", deg_to_dms(d.equatorial.dec_deg));
                println!(
                    "Apparent sidereal:    {} ({:.6} deg)",
                    format_hms(d.apparent_sidereal_time_deg),
                    d.apparent_sidereal_time_deg
                );
                println!("Hour angle:           {:.6} deg", d.hour_angle_deg);
                println!("Geometric altitude:   {:.6} deg", d.horizontal.altitude_deg);
                println!("Refraction:           {:.4}'", d.refraction_arcmin);
            }
            println!("Azimuth:  {:.4} deg (from north)", d.position.azimuth_deg);
            println!("Altitude: {:.4} deg", d.position.altitude_deg);
        }

        Commands::Jd { date, tz } => {
            let instant = or_exit(parse_instant(&date, tz.as_deref()));
            println!("{:.6}", instant.to_jd());
        }

        Commands::Calendar { jd, tz } => {
            let offset = match tz.as_deref() {
                Some(name) => or_exit(parse_tz(name).and_then(|zone| offset_at_jd(&zone, jd))),
                None => 0,
            };
            match CivilDateTime::from_jd_with_offset(jd, offset) {
                Ok(civil) => println!("{civil}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Nutation { jd, model } => {
            let n = Nutation::compute(model.into(), TimeArg::JulianDay(jd));
            println!("T:    {:.12}", jd_to_centuries(jd));
            println!("dpsi: {:.4}\"", n.delta_psi_arcsec);
            println!("deps: {:.4}\"", n.delta_eps_arcsec);
        }

        Commands::Obliquity { jd, model } => {
            let t = jd_to_centuries(jd);
            let mean = mean_obliquity_deg(t);
            let truth = true_obliquity_deg(t, model.into());
            println!("Mean: {} ({mean:.8} deg)", deg_to_dms(mean));
            println!("True: {} ({truth:.8} deg)", deg_to_dms(truth));
        }

        Commands::Sidereal { jd, model, lon } => {
            let mean = normalize_360(mean_sidereal_time_deg(jd));
            let apparent = normalize_360(apparent_sidereal_time_deg(jd, model.into()));
            println!("Mean GST:     {} ({mean:.6} deg)", format_hms(mean));
            println!("Apparent GST: {} ({apparent:.6} deg)", format_hms(apparent));
            if let Some(lon) = lon {
                let lst = local_sidereal_time_deg(apparent, lon);
                println!("Apparent LST: {} ({lst:.6} deg)", format_hms(lst));
            }
        }

        Commands::Horizontal {
            ra,
            dec,
            jd,
            lon,
            lat,
            model,
        } => {
            let eq = EquatorialCoords::from_hours(ra, dec);
            let gast = apparent_sidereal_time_deg(jd, model.into());
            let hor = equatorial_to_horizontal(&eq, gast, &Observer::new(lon, lat));
            println!(
                "Azimuth:  {:.4} deg from south ({:.4} deg from north)",
                hor.azimuth_deg,
                hor.azimuth_from_north_deg()
            );
            println!("Altitude: {:.4} deg", hor.altitude_deg);
        }

        Commands::Refraction {
            altitude,
            apparent,
            pressure,
            temperature,
        } => {
            let cond = AtmosphericConditions::new(pressure, temperature);
            if apparent {
                let h = true_altitude_from_apparent(altitude, &cond);
                println!("True altitude: {h:.6} deg");
                println!("Refraction:    {:.4}'", (altitude - h) * 60.0);
            } else {
                let r = Refraction::from_true_altitude(altitude, &cond);
                println!("Apparent altitude: {:.6} deg", r.apparent_altitude_deg);
                println!("Refraction:        {:.4}'", r.refraction_arcmin);
            }
        }

        Commands::Dms { deg } => {
            println!("{}", deg_to_dms(deg));
            println!("{}", deg_to_hms(deg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helios_time::calendar_to_jd;

    #[test]
    fn tz_winter_and_summer_offsets() {
        let winter = parse_instant("2012-12-21T12:12:12", Some("America/Denver")).unwrap();
        assert_eq!(winter.utc_offset_seconds(), -7 * 3600);
        assert!((winter.to_jd() - 2_456_283.300_138_889).abs() < 1e-8);

        let summer = parse_instant("2012-07-01T12:00:00", Some("America/Denver")).unwrap();
        assert_eq!(summer.utc_offset_seconds(), -6 * 3600);
    }

    #[test]
    fn tz_replaces_explicit_offset() {
        let t = parse_instant("2012-12-21T12:12:12+05:00", Some("America/Denver")).unwrap();
        assert_eq!(t.utc_offset_seconds(), -7 * 3600);
        assert_eq!(t.hour(), 12);
    }

    #[test]
    fn tz_before_gregorian_reform_keeps_julian_date() {
        // London kept local mean time, 0:01:15 behind Greenwich.
        let t = parse_instant("1500-03-01T12:00:00", Some("Europe/London")).unwrap();
        assert_eq!((t.year(), t.month(), t.day(), t.hour()), (1500, 3, 1, 12));
        assert_eq!(t.utc_offset_seconds(), -75);
        let expected = calendar_to_jd(1500, 3, 1.5) + 75.0 / SECONDS_PER_DAY;
        assert!((t.to_jd() - expected).abs() < 1e-8);
    }

    #[test]
    fn wall_clock_maps_julian_to_gregorian() {
        let t = CivilDateTime::utc(1500, 3, 1, 6, 30, 0.0).unwrap();
        let naive = wall_clock_naive(&t).unwrap();
        // Julian 1500-03-01 is Gregorian 1500-03-10.
        assert_eq!(naive.to_string(), "1500-03-10 06:30:00");
    }

    #[test]
    fn tz_rejects_skipped_and_unknown() {
        assert!(parse_instant("2021-03-14T02:30:00", Some("America/Denver")).is_err());
        assert!(parse_instant("2021-03-14T02:30:00", Some("Mars/Olympus")).is_err());
    }

    #[test]
    fn calendar_offset_follows_dst() {
        let zone = parse_tz("America/Denver").unwrap();
        let jd = parse_instant("2012-07-01T18:00:00Z", None).unwrap().to_jd();
        assert_eq!(offset_at_jd(&zone, jd).unwrap(), -6 * 3600);
    }
}
