//! Profile panel / sign-in prompt.

use auth::IdentityClaims;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowRightToBracket;
use dioxus_free_icons::Icon;

/// Everything the user panel needs: the hosted-login URL for the prompt
/// branch and the decoded claims, if the redirect carried any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserViewModel {
    pub login_url: String,
    pub user: Option<IdentityClaims>,
}

impl UserViewModel {
    /// The panel (and the header icon set) treat a non-empty claim name as
    /// the signed-in signal; the other claims never affect the branch.
    pub fn signed_in(&self) -> bool {
        self.user.as_ref().is_some_and(IdentityClaims::has_name)
    }
}

/// Profile panel component.
///
/// Signed in: name, address, email, phone in that order, unset fields as
/// empty lines. Signed out: a prompt linking to the hosted login page.
#[component]
pub fn UserPanel(model: UserViewModel) -> Element {
    if !model.signed_in() {
        return rsx! {
            div {
                class: "background--secondary floating-content",
                h3 { class: "content-header", "Profile" }
                span { class: "user-data", "It looks like you're not signed in." }
                span {
                    class: "user-data",
                    "Please sign in or sign up!\u{a0}\u{a0}"
                    a {
                        title: "Sign In",
                        target: "_blank",
                        href: "{model.login_url}",
                        span { class: "accent", Icon { icon: FaArrowRightToBracket, width: 20, height: 20 } }
                    }
                }
            }
        };
    }

    let user = model.user.unwrap_or_default();
    let name = user.name.unwrap_or_default();
    let address = user.address.unwrap_or_default();
    let email = user.email.unwrap_or_default();
    let phone = user.phone.unwrap_or_default();
    rsx! {
        div {
            class: "background--secondary floating-content",
            h3 { class: "content-header", "Profile" }
            span { class: "user-data", "{name}" }
            span { class: "user-data", "{address}" }
            span { class: "user-data", "{email}" }
            span { class: "user-data", "{phone}" }
        }
    }
}
