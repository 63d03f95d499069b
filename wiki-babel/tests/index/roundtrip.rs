use crate::common::{template_store, INDEX_PAGE};
use wiki_babel::{CodecRegistry, HtmlPage, Intermediate, PageCodec};

fn listing(intermediate: Intermediate) -> wiki_babel::ir::IndexPage {
    match intermediate {
        Intermediate::Index(page) => page,
        other => panic!("expected a listing, got {:?}", other.variant()),
    }
}

#[test]
fn test_posts_keep_document_order() {
    let registry = CodecRegistry::default();
    let codec = registry.for_file("index.html").unwrap();
    let page = listing(codec.extract(&HtmlPage::parse(INDEX_PAGE)).unwrap());

    assert_eq!(page.page_title, "Latest Posts");
    let titles: Vec<_> = page.posts.iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, vec!["Hello World", "Learning Rust", "Garden Notes"]);
    assert_eq!(page.posts[0].image_text, "Sunrise<br>over the hills");
    assert_eq!(page.posts[2].image_text, "Tomatoes<br>Basil");
    assert!(page.posts[1]
        .meta_html
        .starts_with("<span class=\"date\">Feb 2, 2024</span>"));

    let body = codec.deconstruct(&HtmlPage::parse(INDEX_PAGE)).unwrap();
    assert_eq!(body.matches("\n---\n").count(), 3);
}

#[test]
fn test_regenerated_listing_extracts_identically() {
    let registry = CodecRegistry::default();
    let codec = registry.for_file("index.html").unwrap();
    let original = codec.extract(&HtmlPage::parse(INDEX_PAGE)).unwrap();

    let fragment = codec
        .reconstruct(&original.to_body(), &template_store())
        .unwrap();
    assert!(fragment.content.contains("<aside class=\"sidebar\">"));

    let regenerated = codec.extract(&HtmlPage::parse(&fragment.content)).unwrap();
    assert_eq!(regenerated, original);

    let links: Vec<_> = listing(regenerated)
        .posts
        .into_iter()
        .map(|post| post.link)
        .collect();
    assert_eq!(links, vec!["/posts/hello", "/posts/rust", "/posts/garden"]);
}

#[test]
fn test_caption_markup_stays_text() {
    let page = r#"<main class="blog-section"><h2>Blog</h2>
        <article class="blog-post">
            <div class="blog-image">Use &lt;b&gt; tags<br>&amp; more</div>
            <h3><a href="/posts/tags">Tags</a></h3>
        </article>
        <p class="after">still here</p>
    </main>"#;
    let registry = CodecRegistry::default();
    let codec = registry.for_file("index.html").unwrap();
    let original = listing(codec.extract(&HtmlPage::parse(page)).unwrap());
    assert_eq!(
        original.posts[0].image_text,
        "Use &lt;b&gt; tags<br>&amp; more"
    );

    let fragment = codec
        .reconstruct(&Intermediate::Index(original.clone()).to_body(), &template_store())
        .unwrap();
    assert!(!fragment.content.contains("<b>"));

    let regenerated = listing(codec.extract(&HtmlPage::parse(&fragment.content)).unwrap());
    assert_eq!(regenerated.posts, original.posts);
}
