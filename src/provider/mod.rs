pub(crate) mod scoreboard;

use tracing::debug;

use crate::error::{Result, WhatIfError};

/// Fetch a URL and return the response body as text.
pub(crate) async fn get_body(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching scoreboard");

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json, text/plain, */*")
        .send()
        .await
        .map_err(|e| WhatIfError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(WhatIfError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| WhatIfError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}
