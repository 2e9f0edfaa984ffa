//! Leptos components and the overlay controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Button, dropdown, card, tag and info are stateless: options in, view out.
//! Modal and page own an overlay lifecycle driven through
//! [`crate::host::Host`]; [`dialogs`] builds the canned modal layouts.

pub mod button;
pub mod card;
pub mod dialogs;
pub mod dropdown;
pub mod info;
pub mod modal;
pub(crate) mod overlay;
pub mod page;
pub mod tag;
