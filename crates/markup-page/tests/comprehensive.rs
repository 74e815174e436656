//! Comprehensive tests for markup-page
//!
//! Renders pages and writes them to disk.

use std::path::PathBuf;

use markup_dom::{ChildKind, Element, Grammar, GrammarRule, Tag, TextNode};
use markup_page::{DOCTYPE, Page, PageConfig, PageError, sample};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("markup-page-{}-{}", std::process::id(), name))
}

fn invalid_document() -> Element {
    Tag::Html
        .with(vec![
            Tag::Head
                .with(vec![
                    Tag::Title.with(TextNode::new("Title 1")).unwrap(),
                    Tag::Title.with(TextNode::new("Title 2")).unwrap(),
                ])
                .unwrap(),
            Tag::Body.element(),
        ])
        .unwrap()
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_sample_page_render() {
    let page = Page::new(sample::sample_document().unwrap());
    assert!(page.is_valid());

    let expected = "\
<!DOCTYPE html>
<html>
  <head>
    <title>
      &quot;Hello ground!&quot;
    </title>
    <meta charset=\"UTF-8\" />
  </head>
  <body>
    <h1>
      &quot;Oh no, not again!&quot;
    </h1>
    <img src=\"http://i.imgur.com/pfp3T.jpg\" />
    <hr />
    <p>
      This is a paragraph.
    </p>
    <div>
      <span>
        This is a span inside a div.
      </span>
    </div>
    <ul>
      <li>
        Item 1
      </li>
      <li>
        Item 2
      </li>
    </ul>
  </body>
</html>";
    assert_eq!(page.render(), expected);
    assert_eq!(page.to_string(), expected);
}

#[test]
fn test_render_is_deterministic() {
    let page = Page::new(sample::sample_document().unwrap());
    assert_eq!(page.render(), page.render());
}

#[test]
fn test_escaped_attributes_config() {
    let root = Tag::Div.element().with_attribute("title", "a<b");
    let plain = Page::new(root.clone());
    assert_eq!(plain.render(), "<div title=\"a<b\"></div>");

    let config =
        PageConfig::from_json(r#"{ "serialize": { "escape_attributes": true } }"#).unwrap();
    let hardened = Page::with_config(root, config);
    assert_eq!(hardened.render(), "<div title=\"a&lt;b\"></div>");
}

#[test]
fn test_custom_grammar() {
    // a grammar that lets <head> go without a title
    let grammar = Grammar::standard().with_rule(
        Tag::Head,
        GrammarRule::exact(&[ChildKind::Tag(Tag::Title), ChildKind::Tag(Tag::Meta)]),
    );
    let root = Tag::Html
        .with(vec![Tag::Head.element(), Tag::Body.element()])
        .unwrap();
    assert!(!Page::new(root.clone()).is_valid());
    assert!(Page::new(root).with_grammar(grammar).is_valid());
}

// ============================================================================
// FILE OUTPUT
// ============================================================================

#[test]
fn test_write_to_file() {
    let path = temp_path("valid.html");
    let page = Page::new(sample::sample_document().unwrap());
    page.write_to_file(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(DOCTYPE));
    assert_eq!(written, page.render());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_invalid_page_still_written_by_default() {
    let path = temp_path("invalid.html");
    let page = Page::new(invalid_document());
    assert!(!page.is_valid());
    page.write_to_file(&path).unwrap();
    assert!(path.exists());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_require_valid_refuses_invalid_page() {
    let path = temp_path("refused.html");
    let config = PageConfig {
        require_valid: true,
        ..Default::default()
    };
    let page = Page::with_config(invalid_document(), config);
    let err = page.write_to_file(&path).unwrap_err();
    match err {
        PageError::Invalid(violation) => assert_eq!(violation.path, ["html", "head"]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_write_to_missing_directory() {
    let path = temp_path("no-such-dir").join("page.html");
    let err = Page::new(Tag::Div.element()).write_to_file(&path).unwrap_err();
    assert!(matches!(err, PageError::Io(_)));
}

#[test]
fn test_load_config_file() {
    let path = temp_path("config.json");
    std::fs::write(&path, r#"{ "doctype": false, "serialize": { "indent": 4 } }"#).unwrap();
    let config = PageConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(!config.doctype);
    assert_eq!(config.serialize.indent, 4);

    let page = Page::with_config(
        Tag::Ul.with(Tag::Li.with(TextNode::new("x")).unwrap()).unwrap(),
        config,
    );
    assert_eq!(page.render(), "<ul>\n    <li>\n        x\n    </li>\n</ul>");
}
