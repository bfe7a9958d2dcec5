use anyhow::{Context, Result};
use shared::RegisterConfig;

/// Id of the `<script type="application/json">` element holding page overrides
pub const CONFIG_ELEMENT_ID: &str = "donation-register-config";

/// Load the register configuration from the page, falling back to defaults
pub fn load_config() -> RegisterConfig {
    match read_config_override() {
        Ok(Some(config)) => config,
        Ok(None) => RegisterConfig::default(),
        Err(e) => {
            // The logger is configured from this result, so report straight to the console
            gloo::console::warn!(format!("Using default configuration: {:#}", e));
            RegisterConfig::default()
        }
    }
}

fn read_config_override() -> Result<Option<RegisterConfig>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context("no document to read configuration from")?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(None);
    }

    let config = RegisterConfig::from_json(&json)
        .with_context(|| format!("parsing #{}", CONFIG_ELEMENT_ID))?;
    Ok(Some(config))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_element_uses_defaults() {
        assert_eq!(load_config(), RegisterConfig::default());
    }
}
