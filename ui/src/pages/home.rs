use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::component;
use leptos::IntoView;
use leptos::view;

/// Index content for `/`.
#[component]
pub fn Home() -> impl IntoView {
    view! {
      <main class="max-w-7xl mx-auto px-4 md:px-6 py-16">
        <section class="rounded-3xl bg-[#9538E2] text-white text-center px-6 py-20">
          <h1 class="text-3xl md:text-5xl font-bold mb-4">
            "Upgrade Your Tech Accessorize with Gadget Heaven Accessories"
          </h1>
          <p class="max-w-2xl mx-auto text-white/80">
            "Explore the latest gadgets that will take your experience to the next level."
          </p>
        </section>
      </main>
    }
}
