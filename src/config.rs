//! Page Configuration
//!
//! The host page may set `window.menuTreeConfig` before the module loads:
//!
//! ```js
//! window.menuTreeConfig = { storageKey: "docs-menu", defaultExpanded: ["install"] };
//! ```
//!
//! Missing fields keep their defaults.

use menu_state::MenuConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "menuTreeConfig";

/// Read the page config. `Ok(default)` when the page sets none.
pub fn load() -> Result<MenuConfig, String> {
    let window = web_sys::window().ok_or("no window")?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(MenuConfig::default());
    }
    let config: MenuConfig = serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
