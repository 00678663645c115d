use leptos::ev::MouseEvent;
use leptos::leptos_dom::logging::console_error;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::anim::FrameLoop;
use crate::components::icons::{CloseIcon, HeartIcon, MenuIcon};
use crate::config::NavItem;

use super::menu::Menu;
use super::utils::{active_index, desktop_link_class, panel_link_class};

#[component]
pub fn NavBar(brand: String, items: Vec<NavItem>) -> impl IntoView {
    let pathname = use_location().pathname;
    let nav_items = items.clone();
    let active = Memo::new(move |_| pathname.with(|p| active_index(&nav_items, p)));

    // nav links plus the wishlist row
    let wishlist_row = items.len();
    let menu = RwSignal::new(Menu::new(wishlist_row + 1));

    let frames = StoredValue::new_local(FrameLoop::new(move |dt_ms| {
        menu.try_update(|m| m.advance(dt_ms / 1000.0))
            .unwrap_or(false)
    }));
    on_cleanup(move || {
        frames.try_with_value(|f| f.cancel());
    });

    let animate = move || {
        frames.with_value(|f| {
            if let Err(e) = f.kick() {
                console_error(&format!("menu animation: {e:#}"));
            }
        });
    };
    let toggle_menu = move |_: MouseEvent| {
        menu.update(Menu::toggle);
        animate();
    };
    let close_menu = move |_: MouseEvent| {
        menu.update(Menu::close);
        animate();
    };

    let desktop_links = items
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, item)| {
            let is_active = move || active.get() == Some(i);
            view! {
                <li class="transition-all duration-300 hover:text-purple-400 font-medium">
                    <a href=item.path class=move || desktop_link_class(is_active())>
                        {item.label}
                        { move || is_active().then(|| view! {
                            <span class="absolute bottom-0 left-0 w-full h-0.5 bg-purple-700 rounded-full"/>
                        })}
                    </a>
                </li>
            }
        })
        .collect_view();

    let panel_links = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            view! {
                <li
                    class="transition-all duration-300"
                    style=move || menu.with(|m| m.item_style(i))
                >
                    <a
                        href=item.path
                        class=move || panel_link_class(active.get() == Some(i))
                        on:click=close_menu
                    >
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="py-4 px-4 md:px-6 max-w-7xl mx-auto relative">
            <div class="flex items-center justify-between">
                <a
                    href="/"
                    class="text-xl md:text-2xl font-bold tracking-tight cursor-pointer transition-all duration-300 hover:text-purple-400"
                >
                    {brand}
                </a>

                <ul class="hidden md:flex items-center gap-8">
                    {desktop_links}
                </ul>

                <div class="hidden md:block">
                    <button
                        class="flex items-center justify-center border border-gray-300 rounded-full w-10 h-10 transition-all hover:border-purple-600 hover:text-purple-400 hover:scale-105 duration-300 cursor-pointer"
                        aria-label="Wishlist"
                    >
                        <HeartIcon/>
                    </button>
                </div>

                <button
                    class="md:hidden flex items-center justify-center w-10 h-10 text-gray-700 focus:outline-none transition-all duration-300 cursor-pointer"
                    aria-label=move || menu.with(|m| m.state().toggle_label())
                    aria-expanded=move || menu.with(|m| m.is_open()).to_string()
                    on:click=toggle_menu
                >
                    <Show
                        when=move || menu.with(|m| m.is_open())
                        fallback=|| view! { <MenuIcon class="w-6 h-6 transition-transform duration-300"/> }
                    >
                        <CloseIcon class="w-6 h-6 transition-transform duration-300"/>
                    </Show>
                </button>
            </div>

            <div
                class="absolute top-16 left-0 right-0 bg-white shadow-lg rounded-b-lg z-50 md:hidden"
                style=move || menu.with(|m| m.panel_style())
                aria-hidden=move || (!menu.with(|m| m.is_open())).to_string()
            >
                <div class="p-4">
                    <ul class="space-y-3">
                        {panel_links}

                        <li
                            class="border-t border-gray-100 mt-2 pt-2"
                            style=move || menu.with(|m| m.item_style(wishlist_row))
                        >
                            <button
                                class="flex items-center gap-2 py-2 px-2 rounded-md hover:bg-gray-50"
                                on:click=close_menu
                            >
                                <span>"Wishlist"</span>
                            </button>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
