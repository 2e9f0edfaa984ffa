//! # blocky-ui
//!
//! Leptos components with a shared "3D blocky" look: buttons, dropdowns,
//! cards, tags, info overlays, modals and full-screen pages.
//!
//! Stateless factories live in [`components`] as Leptos components. The two
//! stateful pieces, the overlay lifecycle (modal and page) and the page
//! border color cycle, run against a [`host::Host`] so the same controller
//! code drives the browser (`hydrate` feature) and the deterministic
//! [`host::headless::HeadlessHost`] used in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`components`] | Factories, overlay controllers and the dialog shortcuts |
//! | [`state`] | Explicit lifecycle record and gradient selection |
//! | [`host`] | Display environment: timers, key subscriptions, attach/detach, style writes |
//! | [`theme`] | Variants, title colors and CSS class names |
//! | [`content`] | Markup-or-view content accepted by every factory |
//! | [`config`] | Animation and timer durations |
//! | [`handler`] | Callback type carried by option records |
//! | [`ui`] | `BlockyUi` facade and the `show_*` dialog shortcuts |
//! | [`util`] | Browser logging setup |

pub mod components;
pub mod config;
pub mod content;
pub mod handler;
pub mod host;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;

pub use components::button::{BlockyButton, ButtonOptions};
pub use components::card::{BlockyCard, CardOptions};
pub use components::dropdown::{BlockyDropdown, DropdownOption, DropdownOptions};
pub use components::info::{BlockyInfo, InfoOptions};
pub use components::modal::{ModalController, ModalOptions};
pub use components::page::{PageController, PageOptions};
pub use components::tag::{BlockyTag, TagOptions};
pub use config::Timings;
pub use content::Content;
pub use handler::Handler;
pub use state::overlay::{OverlayError, OverlayId, OverlayPhase, OverlayTrigger};
pub use theme::{TitleColor, Variant};
pub use ui::{BlockyUi, show_confirmation, show_error, show_notification};
