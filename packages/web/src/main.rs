use dioxus::prelude::*;

use ui::{Gallery, SocialLinks, UserPanel};

use bootstrap::SiteState;

mod bootstrap;
mod config;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // The whole page model is assembled before the first render; components
    // only ever see this immutable snapshot.
    let state = bootstrap::init(&current_href());
    dioxus::LaunchBuilder::new().with_context(state).launch(App);
}

/// Full URL of the current page, fragment included. Off-browser there is no
/// location, which boots the page signed-out.
fn current_href() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[component]
fn App() -> Element {
    let state = use_context::<SiteState>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            id: "top",
            header {
                id: "social-header",
                SocialLinks { links: state.header_links().to_vec() }
            }
            section {
                id: "photo-album",
                Gallery { config: state.config.gallery }
            }
            section {
                id: "user-content",
                UserPanel { model: state.user_panel_model() }
            }
            footer {
                id: "social-footer",
                SocialLinks { links: state.config.footer.clone() }
            }
        }
    }
}
