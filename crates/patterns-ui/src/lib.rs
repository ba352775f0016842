//! patterns-ui: the interactive widgets of the demo page.
//!
//! Each widget owns its state, resolves its elements through a
//! [`Document`](patterns_types::Document) when attached, and renders an
//! enumerated visual state back onto the document after every transition.
//! [`DemoPage`] mounts all of them in startup order and routes clicks.

pub mod attempt_gate;
pub mod choice_group;
pub mod layout;
pub mod media_switch;
pub mod mode_toggle;
pub mod page;
pub mod router;
pub mod scaler;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use page::{DemoPage, PageSnapshot};
pub use widget::{Binding, Widget};
