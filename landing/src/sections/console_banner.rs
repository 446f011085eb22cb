//! Greeting for developers who open the browser console.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn banner(brand: &str) -> String {
    format!(
        r#"
   _   _ _        ___                       _
  /_\ | | |_  _  / __|___ _ _  _ _  ___ __| |_
 / _ \| | | || || (__/ _ \ ' \| ' \/ -_) _|  _|
/_/ \_\_|_|\_, | \___\___/_||_|_||_\___\__|\__|
           |__/

  {brand} - students and alumni, connected.
"#
    )
}

/// Prints the banner once on mount. Renders nothing.
#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner(brand: String) -> impl IntoView {
    Effect::new(move || {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", banner(&brand))),
            &JsValue::from_str("color: #1e40af; font-family: monospace; font-size: 11px;"),
        );
        web_sys::console::log_2(
            &JsValue::from_str("%cMentor someone this month: connect@allyconnect.edu"),
            &JsValue::from_str("color: #f59e0b; font-weight: bold;"),
        );
    });

    view! {}
}
