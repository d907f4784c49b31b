use leptos::either::Either;
use leptos::prelude::*;

use crate::icons::{CloseIcon, MenuIcon};

const SECTION_LINKS: [(&str, &str); 3] = [
    ("#projects", "Projects"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

/// Flip the collapsed-menu flag. This is the toggle button's click handler,
/// kept as a free function so the transition can be driven without a browser.
pub fn toggle_menu(open: RwSignal<bool>) {
    open.update(|open| *open = !*open);
}

/// The collapsed list only exists in the output while `open` is true; the wide
/// list is always mounted and the stylesheet picks one based on viewport width.
#[component]
pub fn NavBar(#[prop(optional, into)] open: Option<RwSignal<bool>>) -> impl IntoView {
    // Menu starts closed. Nothing outside the nav reads or writes this.
    let open = open.unwrap_or_else(|| RwSignal::new(false));

    view! {
        <nav class="site-nav">
            <div class="nav-row">
                <span class="brand">"Portfolio"</span>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| toggle_menu(open)
                >
                    {move || if open.get() {
                        Either::Left(view! { <CloseIcon/> })
                    } else {
                        Either::Right(view! { <MenuIcon/> })
                    }}
                </button>
                <ul class="nav-links">
                    {SECTION_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                        .collect_view()}
                </ul>
            </div>
            {move || {
                open.get()
                    .then(|| view! {
                        <ul class="nav-collapsed">
                            {SECTION_LINKS
                                .into_iter()
                                .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                                .collect_view()}
                        </ul>
                    })
            }}
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>{format!("\u{a9} {} Brooklynne Matos. All rights reserved.", current_year())}</p>
        </footer>
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        /// Recomputed on every render pass; the system clock is the only input.
        pub fn current_year() -> i32 {
            use chrono::Datelike;
            chrono::Utc::now().year()
        }
    } else {
        /// Recomputed on every render pass; chrono has no clock on
        /// wasm32-unknown-unknown, so ask the host through js-sys.
        pub fn current_year() -> i32 {
            js_sys::Date::new_0().get_full_year() as i32
        }
    }
}
