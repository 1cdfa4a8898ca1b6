/// Sheet (tab) names used by the quarry spreadsheet.
/// These are the defaults; `config.toml` may override any of them.
pub const STOCK_SHEET: &str = "Estoque";
pub const COSTS_SHEET: &str = "Custos";
pub const ROI_SHEET: &str = "ROI";
pub const CASH_FLOW_SHEET: &str = "FluxoCaixa";
pub const EQUIPMENT_SHEET: &str = "Equipamentos";
pub const MAINTENANCE_SHEET: &str = "Manutencao";
pub const SALES_SHEET: &str = "Vendas";

// Column spans read from each sheet
pub const STOCK_COLUMNS: &str = "A:C";
pub const COSTS_COLUMNS: &str = "A:E";
pub const ROI_COLUMNS: &str = "A:D";
pub const CASH_FLOW_COLUMNS: &str = "A:F";
pub const EQUIPMENT_COLUMNS: &str = "A:E";
pub const MAINTENANCE_COLUMNS: &str = "A:D";
pub const SALES_COLUMNS: &str = "A:G";

/// Google Sheets REST endpoint root.
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Placeholder values shipped in the sample configuration. Treated as "not configured".
pub const PLACEHOLDER_SPREADSHEET_IDS: &[&str] =
    &["SEU_ID_DA_PLANILHA_AQUI", "YOUR_SPREADSHEET_ID_HERE"];
pub const PLACEHOLDER_API_KEYS: &[&str] = &["SUA_CHAVE_API_AQUI", "YOUR_API_KEY_HERE"];

/// Dashboard refresh cadence (5 minutes).
pub const DEFAULT_REFRESH_SECS: u64 = 5 * 60;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const LOG_DIR: &str = "logs";

pub const CURRENCY: &str = "BRL";
pub const LOCALE: &str = "pt-BR";

/// Months in a year; the monthly sales target is the annual target spread evenly.
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Periods shown on the sales-vs-target chart.
pub const TARGET_WINDOW: usize = 6;

/// Export file name prefix (`relatorio-pedreira-YYYY-MM-DD.json`).
pub const REPORT_FILE_PREFIX: &str = "relatorio-pedreira";

// Environment overrides
pub const ENV_SPREADSHEET_ID: &str = "QUARRY_SPREADSHEET_ID";
pub const ENV_API_KEY: &str = "QUARRY_SHEETS_API_KEY";
pub const ENV_REFRESH_SECS: &str = "QUARRY_REFRESH_SECS";
pub const ENV_OUTPUT_DIR: &str = "QUARRY_OUTPUT_DIR";
pub const ENV_METRICS_ADDR: &str = "QUARRY_METRICS_ADDR";
