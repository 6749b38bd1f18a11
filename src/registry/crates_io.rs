use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

const USER_AGENT: &str = concat!(
    "upstream-licenses/",
    env!("CARGO_PKG_VERSION"),
    " (license attribution tool)"
);

/// Fetch the declared license of one crate version from crates.io.
pub async fn fetch_license(client: &Client, name: &str, version: &str) -> Result<Option<String>> {
    let url = format!("https://crates.io/api/v1/crates/{}/{}", name, version);

    let response = client
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let data: Value = response.json().await?;
    Ok(license_from_response(&data))
}

fn license_from_response(data: &Value) -> Option<String> {
    data.get("version")
        .and_then(|v| v.get("license"))
        .and_then(|l| l.as_str())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_license_from_version_response() {
        let data = json!({
            "version": {
                "crate": "serde",
                "num": "1.0.200",
                "license": "MIT OR Apache-2.0"
            }
        });
        assert_eq!(license_from_response(&data).as_deref(), Some("MIT OR Apache-2.0"));
    }

    #[test]
    fn test_license_missing_or_null() {
        assert_eq!(license_from_response(&json!({"version": {"license": null}})), None);
        assert_eq!(license_from_response(&json!({"version": {"license": ""}})), None);
        assert_eq!(license_from_response(&json!({"errors": [{"detail": "Not Found"}]})), None);
    }
}
