#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/methodology")]
    Methodology {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    // Desktop builds read the store credentials from the process
    // environment; pick up a local .env first.
    dotenvy::dotenv().ok();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("ParkPulse – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_methodology(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Methodology {}, "{label}" })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Provide global reactive language code signal (mirrors web approach)
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Register localized navigation builder (desktop)
    register_nav(NavBuilder {
        home: nav_home,
        methodology: nav_methodology,
    });

    let theme_signal = use_signal(|| theme::load_preference().unwrap_or(Theme::Light));
    use_context_provider(|| theme_signal);

    let source = use_hook(DashboardSource::initialize);
    use_context_provider(|| source.clone());

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        div { class: "app {theme_signal().css_class()}",
            // Key the routed subtree by current language to force full remount on change
            div {
                key: "{lang_code()}",
                div { style: "display:none", "{lang_code()}" }
                match &source {
                    Ok(_) => rsx! { Router::<Route> {} },
                    Err(err) => rsx! { ConfigErrorScreen { message: err.to_string() } },
                }
            }
        }
    }
}

/// A desktop-specific shell around the shared navbar and floating
/// controls which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppNavbar { }
        ThemeToggle { }
        ShareButton { }
        Outlet::<Route> {}
    }
}
