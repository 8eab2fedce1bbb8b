pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod pages;
pub mod services;

#[cfg(feature = "hydrate")]
pub mod dom;

// Re-export for convenience
pub use app::App;
pub use config::LandingConfig;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let config = dom::embedded_config();
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
