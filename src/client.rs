use tracing::{info, instrument};

use crate::error::Result;
use crate::model::*;
use crate::provider;
use crate::scenario::{ScenarioSession, ScenarioStore};

const DEFAULT_BASE_URL: &str = "https://site.web.api.espn.com/apis/site/v2/sports/cricket";

/// Which tournament edition to load and where from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub series_id: u32,
    pub season: u16,
    pub lang: String,
    pub region: String,
    pub limit: u16,
}

impl Default for ProviderConfig {
    /// ICC Cricket World Cup 2019.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            series_id: 8039,
            season: 2019,
            lang: "en".to_string(),
            region: "bd".to_string(),
            limit: 300,
        }
    }
}

impl ProviderConfig {
    pub fn scoreboard_url(&self) -> String {
        format!(
            "{}/{}/scoreboard?lang={}&limit={}&region={}&season={}&section=cricinfo&sort=events%3Aasc",
            self.base_url.trim_end_matches('/'),
            self.series_id,
            self.lang,
            self.limit,
            self.region,
            self.season,
        )
    }
}

/// Loads a tournament's match list from the cricinfo scoreboard feed.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cricket_whatif::Result<()> {
/// use cricket_whatif::{CricinfoClient, MemoryStore};
///
/// let client = CricinfoClient::new();
/// let session = client.open_scenario(MemoryStore::new()).await?;
/// for (team, standing) in session.scenario().standings() {
///     println!("{team}: {} pts", standing.points);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CricinfoClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl CricinfoClient {
    /// Create a new client for the default tournament.
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::default())
    }

    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetch every scheduled match, in tournament order, with the results
    /// the provider reports.
    #[instrument(skip(self), fields(series = self.config.series_id, season = self.config.season))]
    pub async fn get_matches(&self) -> Result<Vec<Match>> {
        let url = self.config.scoreboard_url();
        let matches = provider::scoreboard::get_matches(&self.http, &url).await?;
        info!(count = matches.len(), "loaded matches");
        Ok(matches)
    }

    /// Fetch the matches and open a scenario session over them.
    #[instrument(skip(self, store))]
    pub async fn open_scenario<S: ScenarioStore>(&self, store: S) -> Result<ScenarioSession<S>> {
        let matches = self.get_matches().await?;
        ScenarioSession::open(store, matches)
    }
}

impl Default for CricinfoClient {
    fn default() -> Self {
        Self::new()
    }
}
