//! Tool page → body text

use crate::common::dom::{self, HtmlPage, Selector};
use crate::error::CodecError;
use crate::ir::ToolPage;
use crate::variant::PageVariant;
use markup5ever_rcdom::{Handle, NodeData};

pub const CONTENT_FENCE: &str = "## Content\n```html\n";
pub const SCRIPT_FENCE: &str = "## Script\n```javascript\n";
pub const FENCE_END: &str = "\n```";

pub fn extract(page: &HtmlPage) -> Result<ToolPage, CodecError> {
    let container = page
        .find(Selector::tag("div").with_class("container"))
        .ok_or_else(|| CodecError::missing(PageVariant::Tool, "div.container"))?;

    let script_js = page.body().and_then(|body| {
        dom::find_all(&body, Selector::tag("script"))
            .into_iter()
            .filter(|script| dom::attr(script, "src").is_none())
            .map(|script| raw_text(&script))
            .find(|js| !js.trim().is_empty())
            .map(|js| js.trim().to_string())
    });

    Ok(ToolPage {
        content_html: dom::pretty(&container),
        script_js,
    })
}

/// Script source exactly as written, no whitespace collapsing.
fn raw_text(script: &Handle) -> String {
    script
        .children
        .borrow()
        .iter()
        .filter_map(|child| match &child.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        })
        .collect()
}

pub fn write_body(page: &ToolPage) -> String {
    let mut parts = vec![format!("{CONTENT_FENCE}{}{FENCE_END}", page.content_html)];
    if let Some(js) = &page.script_js {
        parts.push(format!("\n{SCRIPT_FENCE}{js}{FENCE_END}"));
    }
    parts.join("\n\n")
}
