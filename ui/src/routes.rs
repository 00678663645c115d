// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::view;
use leptos_router::components::ParentRoute;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::config::NavItem;
use crate::pages::{error::ErrorPage, home::Home, root::Root};

/// Paths with a route below. Keep in sync with `RoutesMenu`.
pub const REGISTERED_PATHS: &[&str] = &["/"];

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <ErrorPage/> }>
        <ParentRoute path=path!("")         view=Root>
          <Route path=path!("")             view=Home/>
        </ParentRoute>
      </Routes>
    }
}

/// Nav items that point at a path nothing is routed to.
pub fn unrouted(items: &[NavItem]) -> Vec<&NavItem> {
    items
        .iter()
        .filter(|item| !REGISTERED_PATHS.contains(&item.path.as_str()))
        .collect()
}
