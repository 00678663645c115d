use leptos::leptos_dom::logging::{console_error, console_warn};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::config::ChromeConfig;
use crate::routes::{RoutesMenu, unrouted};

fn load_config() -> ChromeConfig {
    let config = ChromeConfig::embedded().unwrap_or_else(|e| {
        console_error(&format!("{e:#}"));
        ChromeConfig::default()
    });

    for item in unrouted(&config.nav_items) {
        console_warn(&format!(
            "nav item {:?} links to {}, which has no route",
            item.label, item.path
        ));
    }

    config
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let title = config.brand.name.clone();
    provide_context(config);

    view! {
      <Title text=title/>
      <Meta name="description" content="Gadget Heaven storefront"/>
      <Router>
        <RoutesMenu/>
      </Router>
    }
}
