use anyhow::Result;
use clap::Parser;
use georadius::{lenient_f64, BindStyle, DistanceCalculator, MeasurementUnit, Point};

#[derive(Parser, Debug)]
#[command(
    name = "radius-probe",
    author,
    version,
    about = "Inspect the bounding box and distance SQL a radius query produces",
    long_about = "Builds a radius query around a reference point and prints the pieces a \
                  caller would splice into SQL: the bounding-box ranges, the BETWEEN \
                  pre-filter, and the exact great-circle distance expression.\n\n\
                  Coordinates and the distance are parsed leniently: the longest numeric \
                  prefix wins and junk coerces to 0, matching the library's tolerance for \
                  untyped input."
)]
struct Args {
    /// Reference latitude in degrees (lenient parse, e.g. "39.9" or "39.9N")
    #[arg(long)]
    lat: String,

    /// Reference longitude in degrees (lenient parse)
    #[arg(long)]
    lng: String,

    /// Query radius, in the chosen unit (lenient parse)
    #[arg(short, long)]
    distance: String,

    /// Unit key: miles/m, kilometers/km, meters, feet, nautical_miles
    /// (case-insensitive; defaults to miles)
    #[arg(short, long)]
    unit: Option<String>,

    /// Latitude column name referenced by the SQL
    #[arg(long, default_value = "lat")]
    lat_column: String,

    /// Longitude column name referenced by the SQL
    #[arg(long, default_value = "lng")]
    lng_column: String,

    /// Build a "farther than" query instead (no bounding box)
    #[arg(long)]
    outside: bool,

    /// Also print parameterized SQL ($n and ? styles) with the bind values
    #[arg(short, long)]
    parameterized: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    // Resolve the unit key first so a typo fails before any output.
    let unit = args
        .unit
        .as_deref()
        .map(MeasurementUnit::from_key)
        .transpose()?;

    let origin = Point::new(lenient_f64(&args.lng), lenient_f64(&args.lat));
    let distance = lenient_f64(&args.distance);
    log::debug!(
        "origin=({}, {}) distance={} unit={}",
        origin.y(),
        origin.x(),
        distance,
        unit.unwrap_or_default().as_key()
    );

    let calc = DistanceCalculator::new().with_columns(&args.lat_column, &args.lng_column);

    let expression = if args.outside {
        let query = calc.outside(distance, unit, Some(origin));
        log::info!(
            "outside {} {} of ({}, {})",
            query.distance,
            query.unit.as_key(),
            origin.y(),
            origin.x()
        );
        query.expression
    } else {
        let query = calc.within(distance, unit, Some(origin));
        log::info!(
            "within {} {} of ({}, {})",
            query.distance,
            query.unit.as_key(),
            origin.y(),
            origin.x()
        );

        let (min_lat, max_lat) = query.bounds.lat_range();
        let (min_lng, max_lng) = query.bounds.lng_range();
        println!("lat range:  {min_lat} .. {max_lat}");
        println!("lng range:  {min_lng} .. {max_lng}");
        println!("pre-filter: {}", query.prefilter_sql());
        query.expression
    };

    println!("distance:   {expression}");

    if args.parameterized {
        let (sql, params) = expression.to_sql(BindStyle::Numbered);
        println!("numbered:   {sql}");
        println!("            params = {params:?}");
        let (sql, params) = expression.to_sql(BindStyle::Question);
        println!("question:   {sql}");
        println!("            params = {params:?}");
    }

    Ok(())
}
