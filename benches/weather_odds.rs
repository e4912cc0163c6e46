use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weather_odds::{
    Activity, DateRange, HistoricalDataProvider, LatLon, Location, SyntheticProvider, WeatherOdds,
};

fn bench_analysis(c: &mut Criterion) {
    let odds = WeatherOdds::new();
    let location = Location::new("Paris, France", LatLon(48.8566, 2.3522));
    let summer = DateRange::between("2025-06-01", "2025-08-31").expect("valid range");
    let provider = SyntheticProvider::builder()
        .years_of_history(40)
        .seed(1)
        .today(NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"))
        .build();
    let series = provider.generate(&location, &summer).expect("synthetic series");
    let thresholds = Activity::Hiking
        .thresholds(odds.registry())
        .expect("preset thresholds");

    c.bench_function("build_analysis_40_summers", |b| {
        b.iter(|| odds.build_analysis(black_box(&location), &summer, black_box(&series), &thresholds))
    });
    c.bench_function("statistics_40_summers", |b| {
        b.iter(|| odds.compute_statistics(black_box(&series), "temperature"))
    });

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    c.bench_function("synthetic_fetch_series", |b| {
        b.to_async(&runtime)
            .iter(|| provider.fetch_series(black_box(&location), &summer))
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
