use tera::{Context, Tera};

use super::EmailContentModel;

pub const XHTML_DOCTYPE: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#;

const TEMPLATE_NAME: &str = "alert_email.html";
const TEMPLATE: &str = include_str!("../../templates/alert_email.html");

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to compile the alert email template.")]
    Template(#[source] tera::Error),
    #[error("Failed to render the alert email.")]
    Render(#[source] tera::Error),
}

/// Turns an [`EmailContentModel`] into a self-contained HTML document.
///
/// All styles are inline and every interpolated value is HTML-escaped. The
/// output depends on nothing but the model, so equal models render to
/// byte-identical documents.
pub struct AlertEmailRenderer {
    tera: Tera,
}

impl AlertEmailRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.set_escape_fn(escape_markup);
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(RenderError::Template)?;
        Ok(Self { tera })
    }

    #[tracing::instrument(name = "Rendering alert email", skip_all)]
    pub fn render(&self, content: &EmailContentModel) -> Result<String, RenderError> {
        let mut ctx = Context::new();
        ctx.insert("email", content);
        ctx.insert("preview", &content.preview_text());

        let body = self
            .tera
            .render(TEMPLATE_NAME, &ctx)
            .map_err(RenderError::Render)?;
        Ok(format!("{XHTML_DOCTYPE}{body}"))
    }
}

/// Escapes the characters that can open or close markup (`& < > " '`) and
/// leaves everything else, `/` included, as written.
fn escape_markup(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}
