use chrono::Datelike;
use leptos::ev::SubmitEvent;
use leptos::leptos_dom::logging::console_log;
use leptos::prelude::*;
use leptos_use::{UseTimeoutFnReturn, use_timeout_fn};

use crate::components::icons::{ArrowUpIcon, MailIcon, PhoneIcon, PinIcon};
use crate::config::{Brand, Contact, FooterConfig, SocialLink};

use super::newsletter::{NewsletterForm, SubmitOutcome};
use super::utils::{copyright, link_href, payment_badge};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

#[component]
fn LinkColumn(title: &'static str, labels: Vec<String>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h3 class="text-lg font-semibold text-white">{title}</h3>
            <ul class="space-y-2">
                {labels
                    .into_iter()
                    .map(|label| {
                        let href = link_href(&label);
                        view! {
                            <li class="transition-transform duration-300 hover:translate-x-1">
                                <a
                                    href=href
                                    class="text-sm transition-colors duration-300 hover:text-[var(--brand)]"
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Socials(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="flex space-x-4 pt-2">
            {links
                .into_iter()
                .map(|s| view! {
                    <a
                        href=s.url
                        aria-label=s.label
                        class="text-[var(--brand)] transition-colors duration-300 hover:opacity-80"
                    >
                        {s.icon.icon("w-6 h-6")}
                    </a>
                })
                .collect_view()}
        </div>
    }
}

/// Subscribe form. Submissions stay local; the "Subscribed!" state clears
/// itself after `reset_ms` and the pending reset dies with the component.
///
/// The timer only calls `NewsletterForm::reset`, so the state transitions are
/// tested on the model; restart-on-resubmit and stop-on-cleanup come from
/// `use_timeout_fn` itself.
#[component]
fn Newsletter(reset_ms: u32) -> impl IntoView {
    let form = RwSignal::new(NewsletterForm::default());

    let UseTimeoutFnReturn { start: start_reset, .. } = use_timeout_fn(
        move |_: ()| form.update(NewsletterForm::reset),
        f64::from(reset_ms),
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(SubmitOutcome::Accepted) = form.try_update(NewsletterForm::submit) {
            console_log("Newsletter subscription submitted");
            start_reset(());
        }
    };

    view! {
        <form on:submit=on_submit class="flex flex-col space-y-2">
            <input
                type="email"
                placeholder="Your email address"
                required=true
                class="px-4 py-2 bg-gray-800 rounded-md focus:outline-none focus:ring-2 focus:ring-[var(--brand)] text-sm"
                prop:value=move || form.with(|f| f.email().to_owned())
                on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
            />
            <button
                type="submit"
                class="text-white px-4 py-2 rounded-md text-sm font-medium transition-colors duration-300 bg-[var(--brand)] hover:bg-[var(--brand-dark)]"
            >
                {move || form.with(|f| f.button_label())}
            </button>
        </form>
    }
}

#[component]
fn ContactRows(contact: Contact) -> impl IntoView {
    view! {
        <div class="space-y-2 pt-4">
            <div class="flex items-center space-x-2 text-sm">
                <span class="text-[var(--brand)]"><PhoneIcon/></span>
                <span>{contact.phone}</span>
            </div>
            <div class="flex items-center space-x-2 text-sm">
                <span class="text-[var(--brand)]"><MailIcon/></span>
                <span>{contact.email}</span>
            </div>
            <div class="flex items-center space-x-2 text-sm">
                <span class="text-[var(--brand)]"><PinIcon/></span>
                <span>{contact.address}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Footer(brand: Brand, footer: FooterConfig) -> impl IntoView {
    let (accent, rest) = brand.split_name();
    let (accent, rest) = (accent.to_owned(), rest.to_owned());
    let year = chrono::Local::now().year();

    let badges = footer
        .payment_methods
        .iter()
        .map(|method| view! {
            <div
                class="w-8 h-5 rounded flex items-center justify-center text-xs font-bold text-gray-800 bg-white"
                style=format!("border:1px solid {}30;", brand.primary)
            >
                {payment_badge(method)}
            </div>
        })
        .collect_view();

    view! {
        <footer class="bg-gray-900 text-gray-300" style=brand.css_vars()>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <div class="space-y-4">
                        <h2 class="text-xl font-bold text-white">
                            <span class="text-[var(--brand)]">{accent}</span>
                            {rest}
                        </h2>
                        <p class="text-sm leading-relaxed">{footer.blurb}</p>
                        <Socials links=footer.socials/>
                    </div>

                    <LinkColumn title="Quick Links" labels=footer.quick_links/>
                    <LinkColumn title="Customer Support" labels=footer.support_links/>

                    <div class="space-y-4">
                        <h3 class="text-lg font-semibold text-white">"Stay Updated"</h3>
                        <p class="text-sm">"Subscribe to our newsletter for exclusive deals and updates."</p>
                        <Newsletter reset_ms=footer.newsletter_reset_ms/>
                        <ContactRows contact=footer.contact/>
                    </div>
                </div>
            </div>

            <div class="border-t" style=format!("border-color:{}20;", brand.primary)>
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-sm text-center md:text-left">{copyright(year, &brand.name)}</p>

                    <div class="mt-4 md:mt-0 flex items-center space-x-3">
                        <span class="text-xs">"We accept:"</span>
                        <div class="flex space-x-2">{badges}</div>
                    </div>

                    <button
                        class="mt-4 md:mt-0 p-2 rounded-full transition-colors duration-300 text-white bg-[var(--brand)] hover:bg-[var(--brand-dark)]"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_top()
                    >
                        <ArrowUpIcon/>
                    </button>
                </div>
            </div>
        </footer>
    }
}
