//! Inline SVG icons. Stroke icons follow `currentColor`.

use leptos::prelude::*;

use crate::config::SocialIcon;

#[component]
fn StrokeIcon(class: &'static str, d: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=d/>
        </svg>
    }
}

#[component]
pub fn HeartIcon(#[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <StrokeIcon
            class=class
            d="M20.8 4.6a5.5 5.5 0 0 0-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 0 0-7.8 7.8l1 1.1L12 21l7.8-7.5 1-1.1a5.5 5.5 0 0 0 0-7.8z"
        />
    }
}

#[component]
pub fn MenuIcon(#[prop(default = "w-6 h-6")] class: &'static str) -> impl IntoView {
    view! { <StrokeIcon class=class d="M4 6h16M4 12h16M4 18h16"/> }
}

#[component]
pub fn CloseIcon(#[prop(default = "w-6 h-6")] class: &'static str) -> impl IntoView {
    view! { <StrokeIcon class=class d="M6 18L18 6M6 6l12 12"/> }
}

#[component]
pub fn ArrowUpIcon(#[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! { <StrokeIcon class=class d="M12 19V5M5 12l7-7 7 7"/> }
}

#[component]
pub fn PhoneIcon(#[prop(default = "flex-shrink-0 w-4 h-4")] class: &'static str) -> impl IntoView {
    view! {
        <StrokeIcon
            class=class
            d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1 1 .4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z"
        />
    }
}

#[component]
pub fn MailIcon(#[prop(default = "flex-shrink-0 w-4 h-4")] class: &'static str) -> impl IntoView {
    view! { <StrokeIcon class=class d="M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6"/> }
}

#[component]
pub fn PinIcon(#[prop(default = "flex-shrink-0 w-4 h-4")] class: &'static str) -> impl IntoView {
    view! {
        <StrokeIcon
            class=class
            d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
        />
    }
}

impl SocialIcon {
    fn path(self) -> &'static str {
        match self {
            SocialIcon::Twitter => {
                "M23 3a10.9 10.9 0 0 1-3.1 1.5 4.5 4.5 0 0 0-7.9 3v1A10.7 10.7 0 0 1 3 4s-4 9 5 13a11.6 11.6 0 0 1-7 2c9 5 20 0 20-11.5 0-.3 0-.6-.1-.8A7.7 7.7 0 0 0 23 3z"
            }
            SocialIcon::Instagram => {
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.4A4 4 0 1 1 12.6 8 4 4 0 0 1 16 11.4zM17.5 6.5h.01"
            }
            SocialIcon::Facebook => {
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"
            }
            SocialIcon::Youtube => {
                "M22.5 6.4a2.8 2.8 0 0 0-1.9-2C18.9 4 12 4 12 4s-6.9 0-8.6.5a2.8 2.8 0 0 0-1.9 2A29 29 0 0 0 1 12a29 29 0 0 0 .5 5.6 2.8 2.8 0 0 0 1.9 2c1.7.4 8.6.4 8.6.4s6.9 0 8.6-.5a2.8 2.8 0 0 0 1.9-2A29 29 0 0 0 23 12a29 29 0 0 0-.5-5.6zM9.8 15.5V8.5l5.7 3.5-5.7 3.5z"
            }
        }
    }

    pub fn icon(self, class: &'static str) -> impl IntoView + use<> {
        view! { <StrokeIcon class=class d=self.path()/> }
    }
}
