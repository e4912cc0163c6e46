//! In-memory memoization of analyses, keyed on the query that produced them.

use crate::engine::WeatherOdds;
use crate::provider::HistoricalDataProvider;
use crate::types::analysis::WeatherAnalysis;
use crate::types::date_range::DateRange;
use crate::types::location::Location;
use crate::types::query::QueryParameters;
use crate::types::threshold::Threshold;
use crate::WeatherOddsError;
use bon::bon;
use log::debug;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

const DEFAULT_MAX_ENTRIES: usize = 50;
const DEFAULT_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

struct CachedAnalysis {
    key: String,
    analysis: WeatherAnalysis,
    cached_at: Instant,
}

/// Remembers recent analyses so repeated queries skip the provider.
///
/// Entries are kept most recent first; inserting beyond `max_entries` drops
/// the oldest. An entry older than `ttl` is treated as absent and is removed
/// by [`AnalysisCache::clear_expired`]. Two queries share an entry when
/// location, date range and thresholds (in order) are equal.
pub struct AnalysisCache {
    entries: Mutex<VecDeque<CachedAnalysis>>,
    max_entries: usize,
    ttl: Duration,
}

#[bon]
impl AnalysisCache {
    /// # Arguments
    ///
    /// * `.max_entries(usize)`: Optional. Defaults to `50`.
    /// * `.ttl(Duration)`: Optional. Defaults to 7 days.
    #[builder]
    pub fn new(max_entries: Option<usize>, ttl: Option<Duration>) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            max_entries: max_entries.unwrap_or(DEFAULT_MAX_ENTRIES),
            ttl: ttl.unwrap_or(DEFAULT_TTL),
        }
    }

    /// The cached analysis for `query`, if present and fresh.
    pub async fn get(
        &self,
        query: &QueryParameters,
    ) -> Result<Option<WeatherAnalysis>, WeatherOddsError> {
        let key = query.canonical_key()?;
        let entries = self.entries.lock().await;
        let hit = entries
            .iter()
            .find(|entry| entry.key == key)
            .filter(|entry| entry.cached_at.elapsed() <= self.ttl)
            .map(|entry| entry.analysis.clone());
        debug!(
            "Analysis cache {} for {}",
            if hit.is_some() { "hit" } else { "miss" },
            query.location.name
        );
        Ok(hit)
    }

    /// Stores `analysis` as the most recent entry, replacing any entry for the same query.
    pub async fn insert(&self, analysis: WeatherAnalysis) -> Result<(), WeatherOddsError> {
        let key = QueryParameters::from_analysis(&analysis).canonical_key()?;
        let mut entries = self.entries.lock().await;
        entries.retain(|entry| entry.key != key);
        entries.push_front(CachedAnalysis {
            key,
            analysis,
            cached_at: Instant::now(),
        });
        entries.truncate(self.max_entries);
        Ok(())
    }

    /// Returns the cached analysis for the query, or runs it through `odds`
    /// with data from `provider` and caches the result.
    pub async fn get_or_analyze<P: HistoricalDataProvider>(
        &self,
        odds: &WeatherOdds,
        provider: &P,
        location: &Location,
        date_range: &DateRange,
        thresholds: &[Threshold],
    ) -> Result<WeatherAnalysis, WeatherOddsError> {
        let query = QueryParameters::new(location.clone(), *date_range, thresholds.to_vec());
        if let Some(cached) = self.get(&query).await? {
            return Ok(cached);
        }

        // The provider call runs without holding the lock.
        let analysis = odds
            .analyze(provider, location, date_range, thresholds)
            .await?;
        self.insert(analysis.clone()).await?;
        Ok(analysis)
    }

    /// Drops every expired entry and returns how many were removed.
    pub async fn clear_expired(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|entry| entry.cached_at.elapsed() <= self.ttl);
        before - entries.len()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::builder().build()
    }
}
