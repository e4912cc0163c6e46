use chrono::Local;
use polars::prelude::{col, lit};
use std::env;
use weather_odds::{
    export_file_name, Activity, AnalysisCache, DateRange, ExportDocument, ExportFormat, LatLon,
    Location, PlanningInsight, SyntheticProvider, WeatherOdds, WeatherOddsError,
};

#[tokio::main]
async fn main() -> Result<(), WeatherOddsError> {
    configure_polars_display();
    let odds = WeatherOdds::new();
    let provider = SyntheticProvider::builder().years_of_history(20).build();
    let cache = AnalysisCache::builder().build();

    let activity: Activity = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(Activity::Hiking);
    let location = Location::new("Paris, France", LatLon(48.8566, 2.3522));
    let trip = DateRange::between("2026-06-12", "2026-06-20")?;
    let thresholds = activity.thresholds(odds.registry())?;

    let analysis = cache
        .get_or_analyze(&odds, &provider, &location, &trip, &thresholds)
        .await?;

    println!("{} in {}", activity, location.name);
    for result in analysis.probabilities() {
        println!(
            "  {:<40} {:>5.1}%  {}",
            result.threshold().describe(odds.registry()),
            result.probability(),
            result.interpretation()
        );
    }
    println!("Risk score {} ({})", analysis.risk_score(), analysis.risk_level());
    println!("{}\n", analysis.summary());

    let insight = PlanningInsight::generate(&analysis, Some(activity));
    println!("{}", insight.summary);
    for recommendation in &insight.recommendations {
        println!("  - {recommendation}");
    }

    let stats = odds.compute_statistics(analysis.historical_data(), "temperature")?;
    println!("\nTemperature: {:#?}", stats);

    let wet_days = odds
        .frame(analysis.historical_data())?
        .filter(col("rainfall").gt(lit(10.0f64)))
        .frame
        .collect()?;
    println!("Days with more than 10mm of rain:\n{}", wet_days);

    let json = ExportDocument::new(&analysis).to_json()?;
    let file_name = export_file_name(&location, Local::now().date_naive(), ExportFormat::Json);
    println!("{} would hold {} bytes", file_name, json.len());

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
