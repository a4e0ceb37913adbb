//! This crate contains all shared UI for the workspace.
//!
//! Every component is a stateless function of its props. The page renders
//! once from an immutable snapshot, so there are no signals or effects here.

// Re-export icon library
pub use dioxus_free_icons::Icon;

mod gallery;
pub use gallery::{photo_entries, Gallery, GalleryConfig, PhotoEntry, PhotoVariant};

mod social;
pub use social::{SocialLink, SocialLinks};

mod user_panel;
pub use user_panel::{UserPanel, UserViewModel};
