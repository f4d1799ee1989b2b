mod health_check;
mod helpers;
mod preferences;
mod render_email;
mod subscriptions;

pub use health_check::health_check;
pub use helpers::error_chain_fmt;
pub use preferences::preference_options;
pub use render_email::{RenderEmailError, method_not_allowed, render_email};
pub use subscriptions::{SubscribeError, subscribe, unreadable_subscription};
