use leptos::prelude::*;

/// Static page for unmatched routes and render failures.
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
      <div id="error-page" class="min-h-screen flex flex-col items-center justify-center gap-4 text-center px-6">
        <h1 class="text-4xl font-bold">"Oops!"</h1>
        <p>"Sorry, an unexpected error has occurred."</p>
        <p class="text-gray-500"><i>"Not Found"</i></p>
        <a href="/" class="px-6 py-3 rounded-full bg-[#9538E2] text-white font-medium hover:bg-[#7d2bc4]">
          "Back to home"
        </a>
      </div>
    }
}
