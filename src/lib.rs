mod cache;
mod engine;
mod error;
mod evaluator;
mod export;
mod frame;
mod insights;
mod presets;
mod provider;
mod types;
mod utils;

pub use error::WeatherOddsError;

pub use engine::error::StatisticsError;
pub use engine::statistics::{DescriptiveStatistics, Distribution, HistogramBin};
pub use engine::WeatherOdds;
pub use evaluator::ThresholdEvaluator;

pub use types::analysis::{Likelihood, ProbabilityResult, RiskLevel, WeatherAnalysis};
pub use types::date_range::DateRange;
pub use types::location::{LatLon, Location};
pub use types::observation::Observation;
pub use types::query::QueryParameters;
pub use types::series::{HistoricalSeries, SYNTHETIC_SOURCE};
pub use types::threshold::{Operator, OperatorKind, Threshold, ThresholdError};
pub use types::variable::{
    Accessor, VariableRegistry, WeatherVariable, BUILTIN_VARIABLES, DEFAULT_RISK_WEIGHT,
};

pub use types::traits::any::any_date::AnyDate;
pub use types::traits::period::date_period::DatePeriod;
pub use types::traits::types::{DaySpan, Month};
pub use types::traits::types::Year;

pub use frame::SeriesFrame;

pub use provider::error::ProviderError;
pub use provider::static_provider::StaticProvider;
pub use provider::synthetic::SyntheticProvider;
pub use provider::HistoricalDataProvider;

pub use presets::{Activity, UnknownActivity};
pub use insights::PlanningInsight;

pub use export::csv::series_to_csv;
pub use export::error::ExportError;
pub use export::json::{ExportDocument, ExportMetadata, FORMAT_VERSION};
pub use export::{export_file_name, ExportFormat};

pub use cache::AnalysisCache;
