//! Frontmatter round trip properties

use proptest::prelude::*;
use wiki_babel::frontmatter::{self, Frontmatter};

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            "[a-z_][a-z0-9_-]{0,12}",
            "([A-Za-z0-9./_-]([A-Za-z0-9 ./:_-]{0,20}[A-Za-z0-9./_-])?)?",
        ),
        0..8,
    )
    .prop_map(|mut entries| {
        let mut seen = std::collections::HashSet::new();
        entries.retain(|(key, _)| seen.insert(key.clone()));
        entries
    })
}

proptest! {
    #[test]
    fn test_parse_inverts_serialize(entries in entries(), body in "\\PC*") {
        let meta: Frontmatter = entries.iter().cloned().collect();
        let text = frontmatter::serialize(&meta, &body);
        let (parsed, parsed_body) = frontmatter::parse(&text);

        prop_assert_eq!(&parsed, &meta);
        prop_assert_eq!(parsed_body, body.as_str());
        let order: Vec<_> = parsed.iter().map(|(key, _)| key.to_string()).collect();
        let expected: Vec<_> = entries.iter().map(|(key, _)| key.clone()).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn test_text_without_block_is_body(text in "[^-\\n][^\\n]*(\\n[^\\n]*)*") {
        let (meta, body) = frontmatter::parse(&text);
        prop_assert!(meta.is_empty());
        prop_assert_eq!(body, text.as_str());
    }
}
