use crate::cache::{CacheError, CacheKey, CachedReport, InterpretationCache};
use crate::source::{ChartRequest, ChartSource};
use anyhow::Context;
use apollo::{facts, Comparator};
use chrono::Utc;

/// Fetch both charts, compare them and keep the report in the cache.
///
/// Read-through: a cached report is returned as-is unless `regenerate` is
/// set. Concurrent runs for the same key are not deduplicated; the last
/// write wins.
pub struct SolarReturnPipeline<S, C> {
    source: S,
    cache: C,
    comparator: Comparator,
}

impl<S: ChartSource, C: InterpretationCache> SolarReturnPipeline<S, C> {
    pub fn new(source: S, cache: C, comparator: Comparator) -> Self {
        Self {
            source,
            cache,
            comparator,
        }
    }

    pub async fn run(&self, user: &str, year: i32, regenerate: bool) -> anyhow::Result<CachedReport> {
        let key = CacheKey::solar_return(user, year);

        if !regenerate {
            match self.cache.get(&key).await {
                Ok(Some(report)) => {
                    log::info!("using cached solar return for {} ({})", user, year);
                    return Ok(report);
                }
                Ok(None) => {}
                Err(e @ CacheError::Corrupt { .. }) => {
                    log::warn!("{}; regenerating", e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let natal = self
            .source
            .fetch(&ChartRequest::natal(user))
            .await
            .context("natal chart unavailable")?;
        let solar_return = self
            .source
            .fetch(&ChartRequest::solar_return(user, year))
            .await
            .with_context(|| format!("solar return chart for {} unavailable", year))?;

        let comparison = self.comparator.compare(&natal, &solar_return);
        let report = CachedReport {
            user: user.to_string(),
            year,
            generated_at: Utc::now(),
            facts: facts::describe(&comparison),
            comparison,
        };

        self.cache.put(&key, &report).await?;
        log::info!(
            "generated solar return for {} ({}): {} cross aspects",
            user,
            year,
            report.comparison.cross_aspects.len()
        );
        Ok(report)
    }
}
