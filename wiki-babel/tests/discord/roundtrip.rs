use crate::common::{template_store, DISCORD_PAGE};
use wiki_babel::ir::{Block, ClassList, ContentSection, DiscordPage};
use wiki_babel::{CodecRegistry, HtmlPage, Intermediate, PageCodec};

fn community(intermediate: Intermediate) -> DiscordPage {
    match intermediate {
        Intermediate::Discord(page) => page,
        other => panic!("expected a community page, got {:?}", other.variant()),
    }
}

fn section(page: &DiscordPage) -> &ContentSection {
    page.blocks
        .iter()
        .find_map(|block| match block {
            Block::ContentSection(section) => Some(section),
            _ => None,
        })
        .expect("content section")
}

#[test]
fn test_blocks_in_document_order() {
    let registry = CodecRegistry::default();
    let codec = registry.for_file("discord.html").unwrap();
    let page = community(codec.extract(&HtmlPage::parse(DISCORD_PAGE)).unwrap());

    // the breadcrumbs nav is not a recognized block
    assert_eq!(page.blocks.len(), 4);
    assert!(matches!(page.blocks[0], Block::PageHeader { .. }));
    assert!(matches!(page.blocks[1], Block::ContentSection(_)));
    assert!(matches!(page.blocks[2], Block::InfoBlock { .. }));
    assert!(matches!(page.blocks[3], Block::CommunityInfo { .. }));
}

#[test]
fn test_body_headers() {
    let registry = CodecRegistry::default();
    let codec = registry.for_file("discord.html").unwrap();
    let body = codec.deconstruct(&HtmlPage::parse(DISCORD_PAGE)).unwrap();

    assert!(body.starts_with("## Page Header\n### Title\nJoin the Community\n"));
    assert!(body.contains("\n\n## Section: Server Rules {.content-section highlight}\n"));
    assert!(body.contains("\n\n* No spam\n* No self promotion\n* Have fun\n"));
    assert!(body.contains("\n### Preview\nalice: hi all\nbob: welcome!"));
    assert!(body.contains("\n\n## Info: Support Us {.patreon-info}\nBackers get early access."));
    assert!(body.contains("\n\n## Community Info {.community-info}\n\n### Card: Events\nGame night every Friday."));
}

#[test]
fn test_content_section_survives_round_trip() {
    let registry = CodecRegistry::default();
    let codec = registry.for_file("discord.html").unwrap();
    let original = community(codec.extract(&HtmlPage::parse(DISCORD_PAGE)).unwrap());

    let before = section(&original);
    assert_eq!(before.paragraphs.len(), 2);
    assert_eq!(before.list_items.len(), 3);

    let body = Intermediate::Discord(original.clone()).to_body();
    let fragment = codec.reconstruct(&body, &template_store()).unwrap();
    let regenerated = community(codec.extract(&HtmlPage::parse(&fragment.content)).unwrap());

    let after = section(&regenerated);
    assert_eq!(after.paragraphs, before.paragraphs);
    assert_eq!(after.list_items, before.list_items);
    assert!(after
        .classes
        .same_set(&ClassList::new(["highlight", "content-section"])));
    assert_eq!(after.preview, before.preview);
    assert_eq!(regenerated, original);
}

#[test]
fn test_titles_are_not_inlined() {
    let registry = CodecRegistry::default();
    let codec = registry.for_template("discord.html").unwrap();
    let body = "## Section: Use *stars* & <tags> {.content-section}\n\nSome *emphasis*.";
    let fragment = codec.reconstruct(body, &template_store()).unwrap();

    assert!(fragment
        .content
        .starts_with("<div class=\"content-section\"><h2>Use *stars* &amp; &lt;tags&gt;</h2>"));
    assert!(fragment.content.contains("<em>emphasis</em>"));
}

#[test]
fn test_markdown_looking_prose_keeps_paragraph_count() {
    let page = r#"<div class="wrap">
        <div class="page-header"><h1>Join</h1><p>Hi</p></div>
        <div class="content-section">
            <h2>Rules</h2>
            <p>* Terms apply</p>
            <p>1. Be nice</p>
            <p>## Not a block</p>
            <ul><li>2. second</li><li>&gt; quoted</li></ul>
        </div>
        <div class="patreon-info"><h3>Support</h3><p>- dash first</p></div>
    </div>"#;
    let registry = CodecRegistry::default();
    let codec = registry.for_file("discord.html").unwrap();
    let original = community(codec.extract(&HtmlPage::parse(page)).unwrap());

    let before = section(&original);
    assert_eq!(
        before.paragraphs,
        vec!["* Terms apply", "1. Be nice", "## Not a block"]
    );
    assert_eq!(before.list_items, vec!["2. second", "> quoted"]);

    let body = Intermediate::Discord(original.clone()).to_body();
    let fragment = codec.reconstruct(&body, &template_store()).unwrap();
    assert!(!fragment.content.contains("<ol>"));

    let regenerated = community(codec.extract(&HtmlPage::parse(&fragment.content)).unwrap());
    assert_eq!(regenerated.blocks.len(), 3);
    assert_eq!(regenerated, original);
}
