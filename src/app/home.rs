use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Meta;

use super::contact::ContactSection;
use super::sections::{AboutSection, Footer, Hero, HobbiesSection, TechSection};
use crate::content::{
    ContentConfig, ContentPayload, HttpContentSource, LoadPhase, MountLifetime, SharedDiagnostics,
    load_for_mount,
};

#[component]
pub fn Page() -> impl IntoView {
    let config = use_context::<ContentConfig>().unwrap_or_default();

    view! { <ContentView config /> }
}

/// Fetches the CMS content once per mount and renders the whole page with
/// it, or with the fallback content if the fetch failed.
///
/// Load failures go to `diagnostics`, then to a [`SharedDiagnostics`] from
/// context, and to the `log` facade when neither is given.
#[component]
pub fn ContentView(
    config: ContentConfig,
    #[prop(optional)] diagnostics: Option<SharedDiagnostics>,
) -> impl IntoView {
    let phase = RwSignal::new(LoadPhase::Loading);
    let diagnostics = diagnostics
        .or_else(use_context::<SharedDiagnostics>)
        .unwrap_or_default();

    let lifetime = MountLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    // effects only run in the browser, and this one tracks nothing, so it
    // runs exactly once per mount
    Effect::new(move |_| {
        let config = config.clone();
        let lifetime = lifetime.clone();
        let diagnostics = diagnostics.clone();
        spawn_local(async move {
            load_for_mount(
                &HttpContentSource,
                &config,
                &diagnostics,
                &lifetime,
                |content| {
                    phase.update(|p| {
                        p.settle(content);
                    })
                },
            )
            .await;
        });
    });

    move || match phase.with(LoadPhase::content) {
        None => view! { <LoadingIndicator /> }.into_any(),
        Some(content) => view! { <PortfolioPage content /> }.into_any(),
    }
}

#[component]
fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center gap-4" aria-busy="true">
            <div class="loading-spinner" />
            <p>"Lade Inhalte..."</p>
        </div>
    }
}

#[component]
fn PortfolioPage(content: ContentPayload) -> impl IntoView {
    view! {
        <Meta name="description" content=content.description.clone() />
        <div class="portfolio">
            <Hero />
            <AboutSection content />
            <TechSection />
            <HobbiesSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn first_render_shows_only_the_loading_indicator() {
        let html = Owner::new().with(|| {
            view! { <ContentView config=ContentConfig::new("http://cms.test") /> }.to_html()
        });

        assert!(html.contains("Lade Inhalte..."));
        assert!(!html.contains("id=\"about\""));
        assert!(!html.contains("David Hoffert"));
    }
}
