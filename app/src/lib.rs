pub mod components;
pub mod icons;
pub mod pages;
pub mod projects;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Brooklynne Matos, web developer and designer. Front-end work in HTML, CSS, JavaScript, and React, with side quests into machine learning and AI."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        // sets the document title
        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from("Brooklynne Matos")
            } else {
                format!("{} - Brooklynne Matos", text)
            }
        }/>

        // A single page; everything else on the site is a section anchor.
        // Async SSR so the server sends fully rendered markup.
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
