use clap::Parser;
use url::Url;

/// Football match prediction client
#[derive(Parser, Debug, Clone)]
#[command(name = "tikidata", version, about)]
pub struct Config {
    /// Prediction service base URL (endpoints `/teams` and `/predict` live under it)
    #[arg(
        long,
        env = "PREDICTOR_API_URL",
        default_value = "http://localhost:8000/api"
    )]
    pub api_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "PREDICTOR_REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,

    /// Home team (defaults to the first team in the catalog)
    #[arg(long)]
    pub home: Option<String>,

    /// Away team (defaults to the second team in the catalog)
    #[arg(long)]
    pub away: Option<String>,

    /// Print the team catalog and exit
    #[arg(long, default_value = "false")]
    pub list_teams: bool,

    /// Print the final workflow state as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("api_url '{}' is not a valid URL: {}", self.api_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api_url must use http or https, got '{}'", url.scheme());
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be positive");
        }
        Ok(())
    }
}
