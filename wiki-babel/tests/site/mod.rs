//! Whole pipeline: pages → documents → site

use crate::common::{fixtures_dir, template_store};
use std::fs;
use tempfile::tempdir;
use wiki_babel::publish::{self, FileOutcome};
use wiki_babel::{CodecRegistry, TemplateBackend, TemplateRenderer};

#[test]
fn test_pages_to_documents_to_site() {
    let dir = tempdir().unwrap();
    let wiki = dir.path().join("wiki");
    let site = dir.path().join("website");
    let registry = CodecRegistry::default();

    let pages = ["index.html", "discord.html", "breadcrumbs.html", "templates/sidebar.html"]
        .map(|name| fixtures_dir().join(name));
    let reports = publish::deconstruct_batch(&pages, &wiki, &registry);
    assert!(reports.iter().all(|report| !report.is_failure()));
    assert!(matches!(reports[3].outcome, FileOutcome::Skipped));

    let document = fs::read_to_string(wiki.join("discord.md")).unwrap();
    assert!(document.starts_with("---\ntitle: Community\ntemplate: discord.html\n---\n## Page Header\n"));

    let backend = TemplateBackend::new(registry, template_store(), TemplateRenderer::default());
    let reports = publish::generate_site(&wiki, &site, &backend, "tools").unwrap();
    assert_eq!(reports.len(), 3);

    // documents are processed in path order: breadcrumbs, discord, index
    match &reports[1].outcome {
        FileOutcome::Written { path, fallback } => {
            assert_eq!(path, &site.join("discord.html"));
            let fallback = fallback.as_ref().expect("discord.html template is not provided");
            assert_eq!(fallback.used, "main_template.html");
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    let tool = fs::read_to_string(site.join("tools").join("breadcrumbs.html")).unwrap();
    assert!(tool.contains("<title>Breadcrumbs Tool</title>"));
    assert!(tool.contains("<script>const input"));

    let index = fs::read_to_string(site.join("index.html")).unwrap();
    assert!(index.contains("<title>My Blog</title>"));
    assert!(index.contains("<a href=\"/posts/rust\">Learning Rust</a>"));
    assert!(index.contains("<p class=\"blog-excerpt\">What grew and what did not.</p>"));
}
