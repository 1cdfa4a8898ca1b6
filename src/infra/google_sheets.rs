use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::app::ports::SheetSource;
use crate::common::{Domain, RawTable};
use crate::config::{SheetCredentials, SheetsConfig};
use crate::error::{DashboardError, Result};

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`.
/// `values` is left out entirely when the range is empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default)]
    range: Option<String>,
    #[serde(default)]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Reads ranges through the Google Sheets values API using an API key.
pub struct GoogleSheetsSource {
    client: reqwest::Client,
    api_base: String,
    credentials: SheetCredentials,
}

impl GoogleSheetsSource {
    pub fn new(config: &SheetsConfig, credentials: SheetCredentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            credentials,
        })
    }

    pub fn values_url(&self, range: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_base).map_err(|e| {
            DashboardError::Config(format!("Invalid sheets api_base '{}': {}", self.api_base, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| DashboardError::Config(format!("api_base '{}' cannot carry a path", self.api_base)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.credentials.spreadsheet_id.as_str(), "values", range]);
        url.query_pairs_mut()
            .append_pair("key", &self.credentials.api_key);
        Ok(url)
    }
}

/// Decode a values response body into a raw table.
pub fn decode_value_range(bytes: &[u8]) -> Result<RawTable> {
    let body: ValueRange = serde_json::from_slice(bytes)?;
    if let Some(dim) = body.major_dimension.as_deref() {
        if dim != "ROWS" {
            return Err(DashboardError::Api {
                status: 200,
                range: body.range.unwrap_or_default(),
                message: format!("unsupported majorDimension {dim}"),
            });
        }
    }
    Ok(RawTable::from_json_values(body.values))
}

fn error_message(bytes: &[u8]) -> String {
    match serde_json::from_slice::<ApiErrorBody>(bytes) {
        Ok(body) if !body.error.message.is_empty() => body.error.message,
        _ => String::from_utf8_lossy(bytes).chars().take(200).collect(),
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsSource {
    fn name(&self) -> &str {
        "google_sheets"
    }

    #[instrument(skip(self), fields(domain = %domain))]
    async fn fetch(&self, domain: Domain, range: &str) -> Result<RawTable> {
        let url = self.values_url(range)?;
        let t0 = Instant::now();
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            return Err(DashboardError::Api {
                status: status.as_u16(),
                range: range.to_string(),
                message: error_message(&bytes),
            });
        }

        let table = decode_value_range(&bytes)?;
        debug!(
            rows = table.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched sheet range"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> GoogleSheetsSource {
        let config = SheetsConfig {
            api_base: base.to_string(),
            ..SheetsConfig::default()
        };
        GoogleSheetsSource::new(
            &config,
            SheetCredentials {
                spreadsheet_id: "sheet123".into(),
                api_key: "k&y".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_values_url() {
        let url = source("https://sheets.googleapis.com/").values_url("Estoque!A:C").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet123/values/Estoque!A:C?key=k%26y"
        );
    }

    #[test]
    fn test_range_with_space_is_escaped() {
        let url = source("http://localhost:8080").values_url("Fluxo Caixa!A:F").unwrap();
        assert!(url.path().ends_with("/values/Fluxo%20Caixa!A:F"));
    }

    #[test]
    fn test_decode_values() {
        let body = br#"{"range":"Estoque!A1:C4","majorDimension":"ROWS","values":[["Tipo","Qtd"],["Brita 0","1250"],["Pedrisco"]]}"#;
        let table = decode_value_range(body).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[2], vec!["Pedrisco"]);
    }

    #[test]
    fn test_decode_empty_range() {
        let body = br#"{"range":"Vendas!A1:G1000","majorDimension":"ROWS"}"#;
        let table = decode_value_range(body).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_decode_rejects_columns_major() {
        let body = br#"{"range":"ROI!A:D","majorDimension":"COLUMNS","values":[["1"]]}"#;
        assert!(matches!(decode_value_range(body), Err(DashboardError::Api { .. })));
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = br#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(error_message(body), "API key not valid");
        assert_eq!(error_message(b"Bad Gateway"), "Bad Gateway");
    }
}
