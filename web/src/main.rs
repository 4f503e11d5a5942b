use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::theme::{self, Theme};
use ui::dashboard::{ShareButton, ThemeToggle};
use ui::data::DashboardSource;
use ui::views::{ConfigErrorScreen, Home, Methodology};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/methodology")]
    Methodology {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared unified theme (ui/assets/theme/main.css); inlined so web and desktop stay in sync.

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_methodology(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Methodology {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register localized navigation builder
        register_nav(NavBuilder {
            home: nav_home,
            methodology: nav_methodology,
        });
    }

    // Global reactive language code signal (AppNavbar updates it on selection).
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Theme state, seeded from the stored preference.
    let theme_signal = use_signal(|| theme::load_preference().unwrap_or(Theme::Light));
    use_context_provider(|| theme_signal);

    // Resolve the data source once. A missing connection setting is fatal:
    // the router never mounts.
    let source = use_hook(DashboardSource::initialize);
    use_context_provider(|| source.clone());

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{MAIN_CSS_INLINE}" }

        div { class: "app {theme_signal().css_class()}",
            match &source {
                Ok(_) => rsx! { Router::<Route> {} },
                Err(err) => rsx! { ConfigErrorScreen { message: err.to_string() } },
            }
        }
    }
}

/// A web-specific shell around the shared navbar and floating controls
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar { }
        ThemeToggle { }
        ShareButton { }
        Outlet::<Route> {}
    }
}
