// Build-time configuration and fixed external endpoints.

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// SLERF token contract on Base.
pub const SLERF_CONTRACT: &str = "0x233df63325933fa3f2dac8e695cd84bb2f91ab07";

/// Base URL of the claim API, taken from `API_URL` at compile time.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn chart_widget_url(contract: &str) -> String {
    format!(
        "https://www.dextools.io/widget-chart/en/base/pe-light/{}?theme=light&chartType=2&chartResolution=30&drawingToolbars=false",
        contract
    )
}

pub fn pair_explorer_url(contract: &str) -> String {
    format!("https://www.dextools.io/app/en/base/pair-explorer/{}", contract)
}
