//! Signup client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use signup_client::{
    log_error, log_info, views::Landing, ApiClient, ClientConfig, ModalProvider, ToastProvider,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = signup_client::logging::init() {
        eprintln!("{err:#}");
    }

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log_error!("{err:#}; using {}", signup_client::config::DEFAULT_API_URL);
            ClientConfig::default()
        }
    };
    log_info!("using API at {}", config.api_base_url);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ClientConfig>();
    use_context_provider(|| ApiClient::new().with_base_url(config.api_base_url.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }

        ToastProvider {
            ModalProvider {
                Landing {}
            }
        }
    }
}
