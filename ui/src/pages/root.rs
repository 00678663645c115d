use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::config::ChromeConfig;
use crate::pages::error::ErrorPage;

/// Layout shared by every page: nav, routed content, footer.
#[component]
pub fn Root() -> impl IntoView {
    let ChromeConfig {
        brand,
        nav_items,
        footer,
    } = use_context::<ChromeConfig>().unwrap_or_default();
    let brand_name = brand.name.clone();

    view! {
      <div class="sora-font">
        <NavBar brand=brand_name items=nav_items/>
        <ErrorBoundary fallback=|_| view! { <ErrorPage/> }>
          <Outlet/>
        </ErrorBoundary>
        <Footer brand footer/>
      </div>
    }
}
