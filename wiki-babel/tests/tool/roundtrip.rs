use crate::common::{template_store, TOOL_PAGE};
use wiki_babel::common::dom::{self, Selector};
use wiki_babel::ir::ToolPage;
use wiki_babel::{CodecRegistry, HtmlPage, Intermediate, PageCodec};

fn tool(intermediate: Intermediate) -> ToolPage {
    match intermediate {
        Intermediate::Tool(page) => page,
        other => panic!("expected a tool page, got {:?}", other.variant()),
    }
}

#[test]
fn test_first_inline_script_is_kept() {
    let registry = CodecRegistry::default();
    let codec = registry.for_file("breadcrumbs.html").unwrap();
    let page = tool(codec.extract(&HtmlPage::parse(TOOL_PAGE)).unwrap());

    let script = page.script_js.unwrap();
    assert!(script.starts_with("const input = document.getElementById('path');"));
    assert!(script.ends_with("render(input.value));"));
}

#[test]
fn test_content_and_script_round_trip() {
    let registry = CodecRegistry::default();
    let codec = registry.for_file("breadcrumbs.html").unwrap();
    let source = HtmlPage::parse(TOOL_PAGE);
    let page = tool(codec.extract(&source).unwrap());

    let container = source
        .find(Selector::tag("div").with_class("container"))
        .unwrap();
    assert_eq!(page.content_html, dom::pretty(&container));
    assert!(page.content_html.contains(" <!-- controls -->\n"));
    assert!(page.content_html.contains("value=\"a &amp; b\""));

    let body = codec.deconstruct(&source).unwrap();
    let fragment = codec.reconstruct(&body, &template_store()).unwrap();
    assert_eq!(fragment.content, page.content_html);
    assert_eq!(
        fragment.scripts,
        format!("<script>{}</script>", page.script_js.as_deref().unwrap())
    );
}

#[test]
fn test_pretty_form_is_stable() {
    let registry = CodecRegistry::default();
    let codec = registry.for_file("breadcrumbs.html").unwrap();
    let page = tool(codec.extract(&HtmlPage::parse(TOOL_PAGE)).unwrap());

    let reparsed = HtmlPage::parse(&page.content_html);
    let container = reparsed
        .find(Selector::tag("div").with_class("container"))
        .unwrap();
    assert_eq!(dom::pretty(&container), page.content_html);
}
