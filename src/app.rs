use dioxus::prelude::*;
use tourails_core::Theme;

use crate::context::get_config;
use crate::pages::{
    Community, Dashboard, Explore, Home, Messages, NotFound, Onboarding, Safety, Signup,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with hero, features and call to action
/// - `/explore` - Destination search with region/category filters
/// - `/community` - Story strip and post feed
/// - `/messages` - Conversation list and chat view
/// - `/onboarding` - Four-step profile wizard
/// - `/safety` - Safety features and privacy switches
/// - `/signup` - Account creation form
/// - `/dashboard` - Signed-in overview with collapsible sidebar
/// - anything else - NotFound
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/explore")]
    Explore {},
    #[route("/community")]
    Community {},
    #[route("/messages")]
    Messages {},
    #[route("/onboarding")]
    Onboarding {},
    #[route("/safety")]
    Safety {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Where "Log in" points. There is no login screen, so it lands on
    /// NotFound like any other unknown path.
    pub fn login() -> Route {
        Route::NotFound {
            segments: vec!["login".to_string()],
        }
    }
}

/// Root application component.
///
/// Provides global styles, the theme signal and routing. The theme class
/// sits on the outermost element so every page inherits its palette.
#[component]
pub fn App() -> Element {
    let theme: Signal<Theme> = use_signal(|| get_config().initial_theme);
    use_context_provider(|| theme);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root {theme().class()}",
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_routes_render_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Explore {}.to_string(), "/explore");
        assert_eq!(Route::Onboarding {}.to_string(), "/onboarding");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/login".parse().unwrap();
        assert_eq!(route, Route::login());
        assert!(matches!(
            "/explore".parse::<Route>(),
            Ok(Route::Explore {})
        ));
    }
}
