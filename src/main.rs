#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use auraailyf::{App, LandingConfig};
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    // Load env vars
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Page tunables, overridable through LANDING_CONFIG
    let landing = LandingConfig::from_env().unwrap_or_else(|e| panic!("Failed to load landing config: {e}"));
    tracing::info!(typewriter = %landing.typewriter_text, "Landing config loaded");

    // Leptos config
    let conf = get_configuration(None).expect("Failed to load Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    // The page is static apart from hydration, so the router only serves
    // the rendered shell and the site assets.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(landing.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));
    tracing::info!("Listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server stopped: {e}");
    }
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::config::LeptosOptions) -> impl leptos::IntoView {
    use auraailyf::config::{use_landing_config, CONFIG_ELEMENT_ID};
    use auraailyf::App;
    use leptos::prelude::*;
    use leptos_meta::*;

    // The wasm side reads the same tunables back from this element
    let embedded = use_landing_config().to_embedded_json().unwrap_or_else(|e| {
        tracing::error!("Failed to embed landing config: {e}");
        "{}".to_string()
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=embedded></script>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side entry point handled by hydrate() in lib.rs
}
