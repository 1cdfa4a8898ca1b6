use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::common::constants::*;
use crate::common::Domain;
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheets: SheetsConfig,
    pub refresh: RefreshConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    pub spreadsheet_id: Option<String>,
    pub api_key: Option<String>,
    pub api_base: String,
    pub timeout_seconds: u64,
    pub tabs: SheetTabs,
}

/// Sheet (tab) name per domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetTabs {
    pub stock: String,
    pub costs: String,
    pub roi: String,
    pub cash_flow: String,
    pub equipment: String,
    pub maintenance: String,
    pub sales: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub currency: String,
    pub locale: String,
}

/// Spreadsheet id and API key, both present and not placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCredentials {
    pub spreadsheet_id: String,
    pub api_key: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            api_key: None,
            api_base: SHEETS_API_BASE.to_string(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            tabs: SheetTabs::default(),
        }
    }
}

impl Default for SheetTabs {
    fn default() -> Self {
        Self {
            stock: Domain::Stock.default_sheet().to_string(),
            costs: Domain::Costs.default_sheet().to_string(),
            roi: Domain::Roi.default_sheet().to_string(),
            cash_flow: Domain::CashFlow.default_sheet().to_string(),
            equipment: Domain::Equipment.default_sheet().to_string(),
            maintenance: Domain::Maintenance.default_sheet().to_string(),
            sales: Domain::Sales.default_sheet().to_string(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_REFRESH_SECS,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            currency: CURRENCY.to_string(),
            locale: LOCALE.to_string(),
        }
    }
}

/// Read one environment variable. Unset is `None`; a value that is not
/// valid unicode is an error.
pub fn env_var(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Config {
    /// Load `config.toml` from the working directory (defaults if absent),
    /// then apply `QUARRY_*` environment overrides, including those from `.env`.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let mut config = Self::load_from(Path::new(DEFAULT_CONFIG_PATH))?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Read a TOML file. A missing file is not an error and yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay the `QUARRY_*` variables of the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        let mut values = HashMap::new();
        for key in [ENV_SPREADSHEET_ID, ENV_API_KEY, ENV_REFRESH_SECS, ENV_OUTPUT_DIR] {
            if let Some(value) = env_var(key)? {
                values.insert(key, value);
            }
        }
        self.apply_overrides(|key| values.get(key).cloned())
    }

    /// Overlay values from an environment-like lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup(ENV_SPREADSHEET_ID) {
            self.sheets.spreadsheet_id = Some(id);
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.sheets.api_key = Some(key);
        }
        if let Some(secs) = lookup(ENV_REFRESH_SECS) {
            self.refresh.interval_seconds = secs.trim().parse().map_err(|_| {
                DashboardError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_REFRESH_SECS, secs))
            })?;
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.report.output_dir = PathBuf::from(dir);
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.refresh.interval_seconds == 0 {
            return Err(DashboardError::Config(
                "refresh.interval_seconds must be greater than zero".into(),
            ));
        }
        if self.sheets.timeout_seconds == 0 {
            return Err(DashboardError::Config(
                "sheets.timeout_seconds must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh.interval_seconds)
    }
}

impl SheetsConfig {
    /// Credentials to reach the spreadsheet, or `None` when the source is not
    /// configured (missing, blank, or still the shipped placeholder).
    pub fn credentials(&self) -> Option<SheetCredentials> {
        let id = usable(self.spreadsheet_id.as_deref(), PLACEHOLDER_SPREADSHEET_IDS)?;
        let key = usable(self.api_key.as_deref(), PLACEHOLDER_API_KEYS)?;
        Some(SheetCredentials {
            spreadsheet_id: id.to_string(),
            api_key: key.to_string(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn usable<'a>(value: Option<&'a str>, placeholders: &[&str]) -> Option<&'a str> {
    let value = value?.trim();
    if value.is_empty() || placeholders.contains(&value) {
        None
    } else {
        Some(value)
    }
}

impl SheetTabs {
    pub fn sheet_for(&self, domain: Domain) -> &str {
        match domain {
            Domain::Stock => &self.stock,
            Domain::Costs => &self.costs,
            Domain::Roi => &self.roi,
            Domain::CashFlow => &self.cash_flow,
            Domain::Equipment => &self.equipment,
            Domain::Maintenance => &self.maintenance,
            Domain::Sales => &self.sales,
        }
    }

    pub fn range_for(&self, domain: Domain) -> String {
        domain.range_on(self.sheet_for(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_dashboard_sheets() {
        let config = Config::default();
        assert_eq!(config.refresh_interval(), Duration::from_secs(300));
        assert_eq!(config.sheets.tabs.range_for(Domain::Stock), "Estoque!A:C");
        assert_eq!(config.sheets.tabs.range_for(Domain::Costs), "Custos!A:E");
        assert_eq!(config.sheets.tabs.range_for(Domain::Roi), "ROI!A:D");
        assert_eq!(config.sheets.tabs.range_for(Domain::CashFlow), "FluxoCaixa!A:F");
        assert_eq!(config.sheets.tabs.range_for(Domain::Equipment), "Equipamentos!A:E");
        assert_eq!(config.sheets.tabs.range_for(Domain::Maintenance), "Manutencao!A:D");
        assert_eq!(config.sheets.tabs.range_for(Domain::Sales), "Vendas!A:G");
        assert!(config.sheets.credentials().is_none());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [sheets]
            spreadsheet_id = "abc123"
            api_key = "key"

            [sheets.tabs]
            stock = "Stock"
            "#,
        )
        .unwrap();
        assert_eq!(config.sheets.tabs.range_for(Domain::Stock), "Stock!A:C");
        assert_eq!(config.sheets.tabs.sales, "Vendas");
        assert_eq!(config.refresh.interval_seconds, DEFAULT_REFRESH_SECS);
        let creds = config.sheets.credentials().unwrap();
        assert_eq!(creds.spreadsheet_id, "abc123");
    }

    #[test]
    fn test_placeholders_are_not_credentials() {
        let mut config = Config::default();
        config.sheets.spreadsheet_id = Some("SEU_ID_DA_PLANILHA_AQUI".into());
        config.sheets.api_key = Some("real-key".into());
        assert!(config.sheets.credentials().is_none());

        config.sheets.spreadsheet_id = Some("real-id".into());
        config.sheets.api_key = Some("  ".into());
        assert!(config.sheets.credentials().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_SPREADSHEET_ID, "sheet-1"),
            (ENV_API_KEY, "key-1"),
            (ENV_REFRESH_SECS, "60"),
            (ENV_OUTPUT_DIR, "/tmp/reports"),
        ]);
        let mut config = Config::default();
        config
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.report.output_dir, PathBuf::from("/tmp/reports"));
        assert!(config.sheets.credentials().is_some());
    }

    #[test]
    fn test_bad_refresh_override_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(|k| (k == ENV_REFRESH_SECS).then(|| "soon".to_string()));
        assert!(matches!(result, Err(DashboardError::Config(_))));

        let result = config.apply_overrides(|k| (k == ENV_REFRESH_SECS).then(|| "0".to_string()));
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_env_value_is_an_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "QUARRY_TEST_NON_UNICODE_VALUE";
        std::env::set_var(key, OsStr::from_bytes(&[0x66, 0x6f, 0xff]));
        let result = env_var(key);
        std::env::remove_var(key);
        assert!(matches!(result, Err(DashboardError::Env(VarError::NotUnicode(_)))));

        assert!(env_var("QUARRY_TEST_UNSET_VALUE").unwrap().is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.sheets.api_base, SHEETS_API_BASE);
    }
}
