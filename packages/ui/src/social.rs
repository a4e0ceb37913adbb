//! Social and action icon links.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaFacebook;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRightFromBracket, FaArrowRightToBracket, FaCircleArrowUp, FaCreditCard, FaDollarSign,
    FaLink,
};
use dioxus_free_icons::Icon;

/// One icon link. `icon` is a font-awesome style name such as `facebook` or
/// `arrow-circle-up`; [`glyph`] resolves it to a drawable icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub href: String,
    pub icon: String,
    pub title: String,
}

impl SocialLink {
    pub fn new(
        href: impl Into<String>,
        icon: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            icon: icon.into(),
            title: title.into(),
        }
    }

    /// In-page anchors stay in the current tab; everything else opens a new
    /// one. The href itself is never validated.
    pub fn target(&self) -> &'static str {
        if self.href.starts_with('#') {
            "_self"
        } else {
            "_blank"
        }
    }
}

/// Row of icon links, one anchor per record, in record order.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> Element {
    rsx! {
        div {
            class: "social-wrap",
            for link in links {
                a {
                    key: "{link.title}",
                    class: "social-data",
                    title: "{link.title}",
                    target: link.target(),
                    href: "{link.href}",
                    {glyph(&link.icon)}
                }
            }
        }
    }
}

/// Resolve an icon name to its glyph. Names an operator could put in the
/// config but that have no registered glyph fall back to a plain link icon.
fn glyph(name: &str) -> Element {
    match name {
        "facebook" => rsx! {
            span { class: "accent", Icon { icon: FaFacebook, width: 20, height: 20 } }
        },
        "usd" => rsx! {
            span { class: "accent", Icon { icon: FaDollarSign, width: 20, height: 20 } }
        },
        "credit-card" => rsx! {
            span { class: "accent", Icon { icon: FaCreditCard, width: 20, height: 20 } }
        },
        "arrow-circle-up" => rsx! {
            span { class: "accent", Icon { icon: FaCircleArrowUp, width: 20, height: 20 } }
        },
        "sign-in" => rsx! {
            span { class: "accent", Icon { icon: FaArrowRightToBracket, width: 20, height: 20 } }
        },
        "sign-out" => rsx! {
            span { class: "accent", Icon { icon: FaArrowRightFromBracket, width: 20, height: 20 } }
        },
        other => {
            tracing::warn!("no glyph registered for icon {other:?}");
            rsx! {
                span { class: "accent", Icon { icon: FaLink, width: 20, height: 20 } }
            }
        }
    }
}
