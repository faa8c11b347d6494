//! Unified country catalog with a single-flight cache

use super::samples::{graph_sample, rest_sample, SAMPLE_SIZE};
use crate::adapters::{
    GraphCountrySource, GraphQlCountryClient, RestCountryClient, RestCountrySource,
};
use crate::config::ExplorerConfig;
use crate::core::query::{self, CountryView};
use crate::core::reconcile::merge_countries;
use crate::domain::{CatalogError, Result, UnifiedCountry};
use crate::log_catalog_loaded;
use crate::logging::{NoticeSink, TracingNoticeSink};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Outcome shared by every caller waiting on one fetch-and-merge cycle
pub type CatalogResult = std::result::Result<Arc<[UnifiedCountry]>, CatalogError>;

type LoadFuture = Shared<BoxFuture<'static, CatalogResult>>;

/// A load only settles the slot while that same load is still installed in it
enum CacheSlot {
    Empty,
    Fetching(LoadFuture),
    Ready(Arc<[UnifiedCountry]>),
}

/// Observable cache state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    Empty,
    Fetching,
    Ready { countries: usize },
}

/// The unified data service
///
/// Owns both source clients and caches the merged catalog for the lifetime of
/// the value (or until [`CountryCatalog::clear_cache`]). Concurrent callers of
/// [`CountryCatalog::get_all_countries`] share one in-flight load, so each
/// source is called once per cycle.
///
/// # Example
///
/// ```no_run
/// use country_explorer::config::ExplorerConfig;
/// use country_explorer::core::catalog::CountryCatalog;
///
/// # async fn example() -> country_explorer::domain::Result<()> {
/// let catalog = CountryCatalog::from_config(&ExplorerConfig::default())?;
/// let countries = catalog.get_all_countries().await?;
/// let mexico = catalog.get_country_by_code("mx").await?;
/// println!("{} countries, {} has {} people", countries.len(), mexico.name, mexico.population);
/// # Ok(())
/// # }
/// ```
pub struct CountryCatalog {
    graph: Arc<dyn GraphCountrySource>,
    rest: Arc<dyn RestCountrySource>,
    notices: Arc<dyn NoticeSink>,
    slot: Mutex<CacheSlot>,
}

impl CountryCatalog {
    /// Create a catalog over the given sources, reporting notices to `tracing`
    pub fn new(graph: Arc<dyn GraphCountrySource>, rest: Arc<dyn RestCountrySource>) -> Self {
        Self {
            graph,
            rest,
            notices: Arc::new(TracingNoticeSink),
            slot: Mutex::new(CacheSlot::Empty),
        }
    }

    /// Build both HTTP clients from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either HTTP client cannot be built.
    pub fn from_config(config: &ExplorerConfig) -> Result<Self> {
        let graph = GraphQlCountryClient::new(&config.sources.graphql)?;
        let rest = RestCountryClient::new(&config.sources.rest)?;

        tracing::debug!(
            graphql = %graph.endpoint(),
            rest = %rest.endpoint(),
            "Country catalog configured"
        );

        Ok(Self::new(Arc::new(graph), Arc::new(rest)))
    }

    /// Replace the notice sink
    pub fn with_notices(mut self, notices: Arc<dyn NoticeSink>) -> Self {
        self.notices = notices;
        self
    }

    /// Every unified country, in source-A order
    ///
    /// Returns the cached list when present, otherwise joins (or starts) the
    /// single in-flight load.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Batch`] when the load fails as a whole. The cache is
    /// left empty so the next call retries.
    pub async fn get_all_countries(&self) -> CatalogResult {
        let load = {
            let mut slot = self.slot.lock().await;
            let pending = match &*slot {
                CacheSlot::Ready(countries) => return Ok(Arc::clone(countries)),
                CacheSlot::Fetching(load) => Some(load.clone()),
                CacheSlot::Empty => None,
            };
            match pending {
                Some(load) => load,
                None => {
                    let load = self.start_load();
                    *slot = CacheSlot::Fetching(load.clone());
                    load
                }
            }
        };

        let result = load.clone().await;
        self.settle(&load, &result).await;
        result
    }

    /// Look up one country by alpha-2 or alpha-3 code, case-insensitively
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] when no country matches; the cache is kept.
    /// Load failures propagate as from [`CountryCatalog::get_all_countries`].
    pub async fn get_country_by_code(
        &self,
        code: &str,
    ) -> std::result::Result<UnifiedCountry, CatalogError> {
        let wanted = code.trim();
        let countries = self.get_all_countries().await?;

        countries
            .iter()
            .find(|c| c.has_code(wanted))
            .cloned()
            .ok_or_else(|| {
                tracing::debug!(code = %wanted, "Country lookup missed");
                CatalogError::NotFound(wanted.to_string())
            })
    }

    /// Drop the cached catalog
    ///
    /// Callers already awaiting an in-flight load still receive its result,
    /// but that load no longer fills the cache.
    pub async fn clear_cache(&self) {
        let mut slot = self.slot.lock().await;
        let was_fetching = matches!(*slot, CacheSlot::Fetching(_));
        *slot = CacheSlot::Empty;
        tracing::info!(was_fetching, "Country catalog cache cleared");
    }

    /// Current cache state
    pub async fn state(&self) -> CatalogState {
        match &*self.slot.lock().await {
            CacheSlot::Empty => CatalogState::Empty,
            CacheSlot::Fetching(_) => CatalogState::Fetching,
            CacheSlot::Ready(countries) => CatalogState::Ready {
                countries: countries.len(),
            },
        }
    }

    /// The catalog narrowed and ordered by `view`
    pub async fn query(
        &self,
        view: &CountryView,
    ) -> std::result::Result<Vec<UnifiedCountry>, CatalogError> {
        let countries = self.get_all_countries().await?;
        Ok(view.apply(&countries))
    }

    /// Distinct continent names in the catalog
    pub async fn continents(&self) -> std::result::Result<Vec<String>, CatalogError> {
        let countries = self.get_all_countries().await?;
        Ok(query::continents(&countries))
    }

    fn start_load(&self) -> LoadFuture {
        let graph = Arc::clone(&self.graph);
        let rest = Arc::clone(&self.rest);
        let notices = Arc::clone(&self.notices);

        AssertUnwindSafe(fetch_and_merge(graph, rest, Arc::clone(&notices)))
            .catch_unwind()
            .map(move |outcome| {
                outcome.map_err(|panic| {
                    let message = panic_message(panic.as_ref());
                    tracing::error!(error = %message, "Country catalog load failed");
                    notices.error(&format!("Failed to load countries: {message}"));
                    CatalogError::Batch(message)
                })
            })
            .boxed()
            .shared()
    }

    async fn settle(&self, load: &LoadFuture, result: &CatalogResult) {
        let mut slot = self.slot.lock().await;
        let current = matches!(&*slot, CacheSlot::Fetching(installed) if installed.ptr_eq(load));
        if !current {
            return;
        }
        *slot = match result {
            Ok(countries) => CacheSlot::Ready(Arc::clone(countries)),
            Err(_) => CacheSlot::Empty,
        };
    }
}

async fn fetch_and_merge(
    graph: Arc<dyn GraphCountrySource>,
    rest: Arc<dyn RestCountrySource>,
    notices: Arc<dyn NoticeSink>,
) -> Arc<[UnifiedCountry]> {
    let start = Instant::now();
    notices.info("Fetching countries from both sources");

    let (graph_countries, rest_countries) = tokio::join!(graph.fetch(), rest.fetch());

    if graph_countries.is_empty() && rest_countries.is_empty() {
        tracing::warn!(
            graph = graph.name(),
            rest = rest.name(),
            "Both sources returned no countries"
        );
    }

    notices.success("Country data fetched from both sources");
    notices.info(&format!(
        "{} returned {} countries, {} returned {} countries",
        graph.name(),
        graph_countries.len(),
        rest.name(),
        rest_countries.len()
    ));
    notices.table(
        &format!("{} sample (first {SAMPLE_SIZE})", graph.name()),
        &graph_sample(&graph_countries),
    );
    notices.table(
        &format!("{} sample (first {SAMPLE_SIZE})", rest.name()),
        &rest_sample(&rest_countries),
    );

    let merged: Arc<[UnifiedCountry]> = merge_countries(&graph_countries, &rest_countries).into();

    log_catalog_loaded!(
        graph_countries.len(),
        rest_countries.len(),
        merged.len(),
        start.elapsed()
    );

    merged
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "fetch-and-merge task panicked".to_string()
    }
}
