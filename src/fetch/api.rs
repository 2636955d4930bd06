use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use super::FetchRequest;
use crate::error::AcsError;

pub const API_BASE: &str = "https://api.census.gov/data";

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 800;

/// Build the subject-dataset group query for one (table, tract) pair:
/// `/data/{year}/acs/{product}/subject?get=group({table})&ucgid=1400000US{tract}`.
pub fn request_url(req: &FetchRequest, api_key: Option<&str>) -> Url {
    let endpoint = format!(
        "{}/{}/acs/{}/subject",
        API_BASE,
        req.year,
        req.product.as_str()
    );
    let mut params = vec![
        ("get", format!("group({})", req.table)),
        ("ucgid", format!("1400000US{}", req.tract)),
    ];
    if let Some(key) = api_key {
        params.push(("key", key.to_string()));
    }
    Url::parse_with_params(&endpoint, params).expect("census endpoint URL should be well formed")
}

async fn get_payload(client: &Client, url: &Url) -> Result<Vec<Vec<Option<String>>>, reqwest::Error> {
    client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Issue the request for one (table, tract) pair, retrying transient failures
/// with exponential backoff. Returns the raw array-of-arrays payload, headers
/// in the first row.
pub async fn fetch_table(
    client: &Client,
    req: &FetchRequest,
    api_key: Option<&str>,
) -> Result<Vec<Vec<Option<String>>>, AcsError> {
    let url = request_url(req, api_key);
    debug!(table = %req.table, tract = %req.tract, "requesting subject table");

    let mut attempts = 0;
    loop {
        match get_payload(client, &url).await {
            Ok(payload) => return Ok(payload),
            Err(e) if attempts + 1 < MAX_RETRIES => {
                attempts += 1;
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempts - 1);
                warn!(
                    table = %req.table,
                    tract = %req.tract,
                    attempt = attempts,
                    delay_ms = backoff,
                    error = %e,
                    "retrying"
                );
                sleep(Duration::from_millis(backoff)).await;
            }
            Err(source) => {
                return Err(AcsError::Fetch {
                    table: req.table.clone(),
                    tract: req.tract.clone(),
                    source,
                })
            }
        }
    }
}
