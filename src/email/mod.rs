mod content;
mod renderer;
mod webhook;

pub use content::{
    AlertLinks, DEFAULT_LISTINGS_OVERVIEW_URL, DESCRIPTION_LIMIT, EmailContentModel,
    truncate_description,
};
pub use renderer::{AlertEmailRenderer, RenderError, XHTML_DOCTYPE};
pub use webhook::{Embed, EmbedField, Thumbnail, WebhookMessage};
