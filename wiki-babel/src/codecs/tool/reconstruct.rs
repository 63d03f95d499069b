//! Body text → tool page fragment

use super::deconstruct::{CONTENT_FENCE, FENCE_END, SCRIPT_FENCE};
use crate::codec::Fragment;
use crate::ir::ToolPage;

/// Text between `opening` and the next closing fence.
fn fenced<'b>(body: &'b str, opening: &str) -> Option<&'b str> {
    let start = body.find(opening)? + opening.len();
    let len = body[start..].find(FENCE_END)?;
    Some(&body[start..start + len])
}

pub fn parse_body(body: &str) -> ToolPage {
    ToolPage {
        content_html: fenced(body, CONTENT_FENCE).unwrap_or_default().to_string(),
        script_js: fenced(body, SCRIPT_FENCE).map(str::to_string),
    }
}

pub fn render(page: &ToolPage) -> Fragment {
    Fragment {
        content: page.content_html.clone(),
        scripts: page
            .script_js
            .as_deref()
            .filter(|js| !js.is_empty())
            .map(|js| format!("<script>{js}</script>"))
            .unwrap_or_default(),
    }
}
