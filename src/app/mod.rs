use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::content::ContentConfig;

mod contact;
mod home;
mod sections;

pub use contact::{Acknowledgement, ContactField, ContactFormState};
pub use home::ContentView;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="de">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ContentConfig::from_build_env());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio-site.css" />

        <Title
            formatter=|text: String| {
                if text.is_empty() {
                    "David Hoffert".to_string()
                } else {
                    format!("{text} | David Hoffert")
                }
            }
            text=""
        />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("") view=home::Page />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 - Not Found
#[component]
fn NotFound() -> impl IntoView {
    // the status can only be set during the initial server-side render,
    // client-side navigation to this page leaves it untouched
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_actix::ResponseOptions>();
        resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Nicht gefunden" />
        <div class="flex min-h-screen flex-col items-center justify-center gap-4">
            <h1 class="text-5xl font-black">"404"</h1>
            <a class="underline decoration-4" href="/">
                "Zur Startseite"
            </a>
        </div>
    }
}
