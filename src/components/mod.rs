//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feed and form surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod notice_toast;
pub mod post_form;
pub mod spot_card;
pub mod spot_list;
