//! Read-only queries over a parsed HTML page
//!
//! Pages are parsed with `html5ever` into a `markup5ever_rcdom` tree. The codecs only need a
//! tiny query surface (find by tag + class, direct children, text extraction, inner markup),
//! so that is all we expose here. Searches are depth first, in document order, and never
//! include the node they start from.

use crate::common::inline::{escape_attr, escape_text};
use crate::error::CodecError;
use html5ever::tendril::TendrilSink;
use html5ever::{
    parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope, ParseOpts,
};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A parsed HTML document.
pub struct HtmlPage {
    dom: RcDom,
}

impl HtmlPage {
    /// Parse a full HTML document. html5ever never fails: malformed input is repaired the way
    /// browsers do it.
    pub fn parse(source: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);
        Self { dom }
    }

    pub fn document(&self) -> &Handle {
        &self.dom.document
    }

    pub fn find(&self, selector: Selector<'_>) -> Option<Handle> {
        find(&self.dom.document, selector)
    }

    /// Text of the `<title>` element
    pub fn title(&self) -> Option<String> {
        self.find(Selector::tag("title")).map(|title| text(&title))
    }

    pub fn body(&self) -> Option<Handle> {
        self.find(Selector::tag("body"))
    }
}

/// Tag name plus an optional class the element must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'a> {
    tag: &'a str,
    class: Option<&'a str>,
}

impl<'a> Selector<'a> {
    pub const fn tag(tag: &'a str) -> Self {
        Self { tag, class: None }
    }

    pub const fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn matches(&self, node: &Handle) -> bool {
        tag_name(node) == Some(self.tag) && self.class.map_or(true, |class| has_class(node, class))
    }
}

pub fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| String::from(&*attr.value)),
        _ => None,
    }
}

/// Class list in source order
pub fn classes(node: &Handle) -> Vec<String> {
    attr(node, "class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn has_class(node: &Handle, class: &str) -> bool {
    attr(node, "class").is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|weak| weak.upgrade());
    node.parent.set(weak);
    parent
}

/// Direct element children, text and comments skipped
pub fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// First matching descendant
pub fn find(node: &Handle, selector: Selector<'_>) -> Option<Handle> {
    for child in node.children.borrow().iter() {
        if selector.matches(child) {
            return Some(child.clone());
        }
        if let Some(found) = find(child, selector) {
            return Some(found);
        }
    }
    None
}

/// All matching descendants, in document order
pub fn find_all(node: &Handle, selector: Selector<'_>) -> Vec<Handle> {
    let mut found = Vec::new();
    collect_matching(node, selector, &mut found);
    found
}

fn collect_matching(node: &Handle, selector: Selector<'_>, found: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if selector.matches(child) {
            found.push(child.clone());
        }
        collect_matching(child, selector, found);
    }
}

/// Matching direct children only
pub fn children_matching(node: &Handle, selector: Selector<'_>) -> Vec<Handle> {
    element_children(node)
        .into_iter()
        .filter(|child| selector.matches(child))
        .collect()
}

/// Plain text of a subtree with whitespace runs collapsed to single spaces.
pub fn text(node: &Handle) -> String {
    let mut raw = String::new();
    collect_text(node, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}

/// Every text fragment of a subtree, trimmed, empty ones dropped, joined with `separator`.
///
/// This is how line structure is kept when flattening blocks such as image captions
/// (`<br>` separator) or chat previews (`\n` separator).
pub fn text_fragments(node: &Handle, separator: &str) -> String {
    fragments(node).join(separator)
}

/// The trimmed, non-empty text fragments of a subtree in document order.
pub fn fragments(node: &Handle) -> Vec<String> {
    let mut fragments = Vec::new();
    collect_fragments(node, &mut fragments);
    fragments
}

fn collect_fragments(node: &Handle, out: &mut Vec<String>) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                let trimmed = contents.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
            NodeData::Element { .. } => collect_fragments(child, out),
            _ => {}
        }
    }
}

/// Serialized markup of the node's children, as html5ever writes it.
pub fn inner_html(node: &Handle) -> Result<String, CodecError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| CodecError::Serialization(format!("HTML serialization failed: {e}")))?;

    String::from_utf8(output)
        .map_err(|e| CodecError::Serialization(format!("UTF-8 conversion failed: {e}")))
}

/// Canonical pretty-printed form of a subtree, the node itself included.
///
/// One element per line, one space of indentation per level, text nodes trimmed onto their
/// own lines. The output carries no trailing newline.
pub fn pretty(node: &Handle) -> String {
    let mut out = String::new();
    write_pretty(node, 0, &mut out);
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out
}

fn write_pretty(node: &Handle, depth: usize, out: &mut String) {
    let indent = " ".repeat(depth);
    match &node.data {
        NodeData::Document => {
            for child in node.children.borrow().iter() {
                write_pretty(child, depth, out);
            }
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = &*name.local;
            out.push_str(&indent);
            out.push('<');
            out.push_str(tag);
            for attr in attrs.borrow().iter() {
                out.push(' ');
                out.push_str(&attr.name.local);
                out.push_str("=\"");
                out.push_str(&escape_attr(&attr.value));
                out.push('"');
            }
            out.push_str(">\n");

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            let raw_text = RAW_TEXT_ELEMENTS.contains(&tag);
            for child in node.children.borrow().iter() {
                match &child.data {
                    NodeData::Text { contents } if raw_text => {
                        let contents = contents.borrow();
                        let trimmed = contents.trim();
                        if !trimmed.is_empty() {
                            out.push_str(&indent);
                            out.push(' ');
                            out.push_str(trimmed);
                            out.push('\n');
                        }
                    }
                    _ => write_pretty(child, depth + 1, out),
                }
            }

            out.push_str(&indent);
            out.push_str("</");
            out.push_str(tag);
            out.push_str(">\n");
        }
        NodeData::Text { contents } => {
            let contents = contents.borrow();
            let trimmed = contents.trim();
            if !trimmed.is_empty() {
                out.push_str(&indent);
                out.push_str(&escape_text(trimmed));
                out.push('\n');
            }
        }
        NodeData::Comment { contents } => {
            out.push_str(&indent);
            out.push_str("<!--");
            out.push_str(contents);
            out.push_str("-->\n");
        }
        _ => {}
    }
}
