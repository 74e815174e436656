//! Grammar Validator
//!
//! Structural rules for a document tree. Every catalog tag has a
//! [`GrammarRule`] describing which children it may hold, how many, and
//! whether they may be mixed. Validation is a depth-first, pre-order walk
//! that stops at the first element whose children break its rule.
//!
//! Validation never mutates the tree and never raises: a structurally legal
//! but ill-formed document is reported as a [`Violation`].

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::catalog::Tag;
use crate::element::Element;
use crate::node::Node;

use self::ChildKind::{Tag as T, Text};

/// Kind of a child as seen by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKind {
    Text,
    Tag(Tag),
}

impl ChildKind {
    /// Kind of a node; `None` for elements outside the catalog
    pub fn of(node: &Node) -> Option<ChildKind> {
        match node {
            Node::Text(_) => Some(ChildKind::Text),
            Node::Element(e) => Tag::of(e).map(ChildKind::Tag),
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildKind::Text => f.write_str("text"),
            ChildKind::Tag(tag) => write!(f, "<{tag}>"),
        }
    }
}

/// How strictly the allowed set applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Membership {
    /// Every child, text included, must be in the allowed set
    #[default]
    Exact,
    /// Element children must be in the allowed set; text is tolerated
    Permissive,
}

/// Constraint on the immediate children of one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    pub allowed: &'static [ChildKind],
    pub membership: Membership,
    pub min_children: usize,
    /// Kinds that must appear exactly once
    pub exactly_one: &'static [ChildKind],
    /// All element children must share one tag
    pub exclusive: bool,
}

impl GrammarRule {
    /// Rule where every child must be one of `allowed`
    pub const fn exact(allowed: &'static [ChildKind]) -> Self {
        Self {
            allowed,
            membership: Membership::Exact,
            min_children: 0,
            exactly_one: &[],
            exclusive: false,
        }
    }

    /// Rule where element children must be one of `allowed`
    pub const fn permissive(allowed: &'static [ChildKind]) -> Self {
        Self {
            membership: Membership::Permissive,
            ..Self::exact(allowed)
        }
    }

    pub const fn at_least(mut self, min_children: usize) -> Self {
        self.min_children = min_children;
        self
    }

    pub const fn exactly_one(mut self, kinds: &'static [ChildKind]) -> Self {
        self.exactly_one = kinds;
        self
    }

    pub const fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Check the immediate children of `element`
    pub fn check(&self, element: &Element) -> Result<(), ViolationKind> {
        let children = element.children();

        if children.len() < self.min_children {
            return Err(ViolationKind::TooFewChildren {
                expected: self.min_children,
                found: children.len(),
            });
        }

        if self.exclusive {
            let mut first: Option<&str> = None;
            for child in element.child_elements() {
                match first {
                    None => first = Some(child.tag()),
                    Some(tag) if tag != child.tag() => {
                        return Err(ViolationKind::MixedChildKinds {
                            first: tag.to_string(),
                            second: child.tag().to_string(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        for child in children {
            let permitted = match (child, self.membership) {
                (Node::Text(_), Membership::Permissive) => true,
                _ => ChildKind::of(child).is_some_and(|kind| self.allowed.contains(&kind)),
            };
            if !permitted {
                return Err(ViolationKind::DisallowedChild {
                    child: describe(child),
                });
            }
        }

        for kind in self.exactly_one {
            let found = children
                .iter()
                .filter(|c| ChildKind::of(c) == Some(*kind))
                .count();
            if found != 1 {
                return Err(ViolationKind::WrongCount {
                    child: kind.to_string(),
                    expected: 1,
                    found,
                });
            }
        }

        Ok(())
    }
}

fn describe(node: &Node) -> String {
    match node {
        Node::Text(_) => "text".to_string(),
        Node::Element(e) => format!("<{}>", e.tag()),
    }
}

/// Why an element failed its rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViolationKind {
    #[error("root is not <html>")]
    NotDocumentRoot,

    #[error("no grammar rule for <{tag}>")]
    UnknownTag { tag: String },

    #[error("expected at least {expected} children, found {found}")]
    TooFewChildren { expected: usize, found: usize },

    #[error("children mix <{first}> and <{second}>")]
    MixedChildKinds { first: String, second: String },

    #[error("{child} is not allowed here")]
    DisallowedChild { child: String },

    #[error("expected exactly {expected} {child}, found {found}")]
    WrongCount {
        child: String,
        expected: usize,
        found: usize,
    },
}

/// First grammar failure found in a tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {}", .path.join(" > "), .kind)]
pub struct Violation {
    /// Tag names from the root down to the failing element
    pub path: Vec<String>,
    pub kind: ViolationKind,
}

/// Per-tag rule table
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: HashMap<Tag, GrammarRule>,
}

const SECTION_CONTENT: &[ChildKind] = &[
    T(Tag::H1),
    T(Tag::H2),
    T(Tag::Div),
    T(Tag::Table),
    T(Tag::Ul),
    T(Tag::Ol),
    T(Tag::Span),
    T(Tag::P),
    Text,
];

const BODY_CONTENT: &[ChildKind] = &[
    T(Tag::H1),
    T(Tag::H2),
    T(Tag::Div),
    T(Tag::Table),
    T(Tag::Ul),
    T(Tag::Ol),
    T(Tag::Span),
    T(Tag::P),
    Text,
    T(Tag::Hr),
    T(Tag::Br),
    T(Tag::Img),
];

const TEXT_ONLY: GrammarRule = GrammarRule::exact(&[Text]).exactly_one(&[Text]);
const NO_CHILDREN: GrammarRule = GrammarRule::exact(&[]);
const LIST: GrammarRule = GrammarRule::exact(&[T(Tag::Li)]).at_least(1);

impl Grammar {
    /// The document grammar
    pub fn standard() -> Self {
        let rules = [
            (
                Tag::Html,
                GrammarRule::exact(&[T(Tag::Head), T(Tag::Body)])
                    .exactly_one(&[T(Tag::Head), T(Tag::Body)]),
            ),
            (
                Tag::Head,
                GrammarRule::exact(&[T(Tag::Title), T(Tag::Meta)]).exactly_one(&[T(Tag::Title)]),
            ),
            (Tag::Body, GrammarRule::exact(BODY_CONTENT)),
            (Tag::Div, GrammarRule::exact(SECTION_CONTENT)),
            (Tag::Title, TEXT_ONLY),
            (Tag::H1, TEXT_ONLY),
            (Tag::H2, TEXT_ONLY),
            (Tag::Li, TEXT_ONLY),
            (Tag::Th, TEXT_ONLY),
            (Tag::Td, TEXT_ONLY),
            (Tag::P, TEXT_ONLY),
            (Tag::Span, GrammarRule::exact(&[Text, T(Tag::P)])),
            (Tag::Ul, LIST),
            (Tag::Ol, LIST),
            (
                Tag::Tr,
                GrammarRule::exact(&[T(Tag::Th), T(Tag::Td)])
                    .at_least(1)
                    .exclusive(),
            ),
            (Tag::Table, GrammarRule::exact(&[T(Tag::Tr)]).at_least(1)),
            (Tag::Meta, NO_CHILDREN),
            (Tag::Img, NO_CHILDREN),
            (Tag::Hr, NO_CHILDREN),
            (Tag::Br, NO_CHILDREN),
        ];
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Grammar with no rules; every tag is unknown until added
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Replace or add the rule for `tag`
    pub fn with_rule(mut self, tag: Tag, rule: GrammarRule) -> Self {
        self.rules.insert(tag, rule);
        self
    }

    /// Rule for a tag
    pub fn rule(&self, tag: Tag) -> Option<&GrammarRule> {
        self.rules.get(&tag)
    }

    /// Whether `root` and its whole subtree form a valid document
    pub fn is_valid(&self, root: &Element) -> bool {
        self.validate(root).is_ok()
    }

    /// Validate a document, reporting the first failure
    pub fn validate(&self, root: &Element) -> Result<(), Violation> {
        if Tag::of(root) != Some(Tag::Html) {
            tracing::debug!("Validation failed: root <{}> is not <html>", root.tag());
            return Err(Violation {
                path: vec![root.tag().to_string()],
                kind: ViolationKind::NotDocumentRoot,
            });
        }
        self.validate_subtree(root)
    }

    /// Validate a subtree without requiring a document root
    pub fn validate_subtree(&self, element: &Element) -> Result<(), Violation> {
        let mut path = Vec::new();
        self.walk(element, &mut path)
    }

    fn walk(&self, element: &Element, path: &mut Vec<String>) -> Result<(), Violation> {
        path.push(element.tag().to_string());
        tracing::trace!("Validating <{}>", path.join(" > "));

        let outcome = match Tag::of(element).and_then(|tag| self.rules.get(&tag)) {
            Some(rule) => rule.check(element),
            None => Err(ViolationKind::UnknownTag {
                tag: element.tag().to_string(),
            }),
        };
        if let Err(kind) = outcome {
            let violation = Violation {
                path: path.clone(),
                kind,
            };
            tracing::debug!("Validation failed: {}", violation);
            return Err(violation);
        }

        for child in element.child_elements() {
            self.walk(child, path)?;
        }
        path.pop();
        Ok(())
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_grammar() -> &'static Grammar {
    static STANDARD: OnceLock<Grammar> = OnceLock::new();
    STANDARD.get_or_init(Grammar::standard)
}

/// Check a document against the standard grammar
pub fn is_valid(root: &Element) -> bool {
    standard_grammar().is_valid(root)
}

/// Validate a document against the standard grammar
pub fn validate(root: &Element) -> Result<(), Violation> {
    standard_grammar().validate(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TextNode;

    fn text(s: &str) -> TextNode {
        TextNode::new(s)
    }

    fn page(head: Vec<Element>, body: Vec<Node>) -> Element {
        Tag::Html
            .with(vec![
                Tag::Head.with(head).unwrap(),
                Tag::Body.with(body).unwrap(),
            ])
            .unwrap()
    }

    fn titled(body: Vec<Node>) -> Element {
        page(vec![Tag::Title.with(text("T")).unwrap()], body)
    }

    #[test]
    fn test_minimal_document() {
        assert!(is_valid(&titled(vec![])));
    }

    #[test]
    fn test_root_must_be_html() {
        let body = Tag::Body.element();
        let err = validate(&body).unwrap_err();
        assert_eq!(err.kind, ViolationKind::NotDocumentRoot);
        assert!(!is_valid(&Element::void("html")));
    }

    #[test]
    fn test_two_titles() {
        let doc = page(
            vec![
                Tag::Title.with(text("a")).unwrap(),
                Tag::Title.with(text("b")).unwrap(),
            ],
            vec![],
        );
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path, ["html", "head"]);
        assert!(matches!(err.kind, ViolationKind::WrongCount { found: 2, .. }));
    }

    #[test]
    fn test_meta_outside_head() {
        let meta = Tag::Meta.build([("charset", "UTF-8")], None::<Node>).unwrap();
        let doc = titled(vec![meta.into()]);
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path, ["html", "body"]);
        assert_eq!(
            err.kind,
            ViolationKind::DisallowedChild {
                child: "<meta>".into()
            }
        );
    }

    #[test]
    fn test_html_needs_head_and_body() {
        let doc = Tag::Html.with(Tag::Body.element()).unwrap();
        assert!(!is_valid(&doc));

        let doc = Tag::Html
            .with(vec![Tag::Head.with(Tag::Title.with(text("x")).unwrap()).unwrap()])
            .unwrap();
        assert!(!is_valid(&doc));
    }

    #[test]
    fn test_mixed_row() {
        let row = Tag::Tr
            .with(vec![
                Tag::Th.with(text("h")).unwrap(),
                Tag::Td.with(text("d")).unwrap(),
            ])
            .unwrap();
        let doc = titled(vec![Tag::Table.with(row).unwrap().into()]);
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path, ["html", "body", "table", "tr"]);
        assert!(matches!(err.kind, ViolationKind::MixedChildKinds { .. }));
    }

    #[test]
    fn test_data_row() {
        let row = Tag::Tr
            .with(vec![
                Tag::Td.with(text("a")).unwrap(),
                Tag::Td.with(text("b")).unwrap(),
            ])
            .unwrap();
        let doc = titled(vec![Tag::Table.with(row).unwrap().into()]);
        assert!(is_valid(&doc));
    }

    #[test]
    fn test_empty_list() {
        let doc = titled(vec![Tag::Ul.element().into()]);
        assert!(matches!(
            validate(&doc).unwrap_err().kind,
            ViolationKind::TooFewChildren { expected: 1, found: 0 }
        ));

        let doc = titled(vec![Tag::Ul.with(Tag::Li.with(text("one")).unwrap()).unwrap().into()]);
        assert!(is_valid(&doc));
    }

    #[test]
    fn test_text_only_rejects_elements() {
        let p = Tag::P.with(Tag::H1.with(text("x")).unwrap()).unwrap();
        let doc = titled(vec![p.into()]);
        assert!(!is_valid(&doc));
    }

    #[test]
    fn test_text_only_needs_text() {
        let doc = titled(vec![Tag::P.element().into()]);
        assert!(!is_valid(&doc));
    }

    #[test]
    fn test_text_only_rejects_second_text() {
        for tag in [Tag::P, Tag::Li, Tag::Td] {
            let mut elem = tag.with(text("first")).unwrap();
            elem.add_content(text("second")).unwrap();
            let err = GrammarRule::check(&TEXT_ONLY, &elem).unwrap_err();
            assert!(
                matches!(err, ViolationKind::WrongCount { found: 2, .. }),
                "{tag}: {err}"
            );
        }

        let p = Tag::P.with(vec![text("one"), text("two")]).unwrap();
        let err = validate(&titled(vec![p.into()])).unwrap_err();
        assert_eq!(err.path, ["html", "body", "p"]);
        assert!(matches!(err.kind, ViolationKind::WrongCount { found: 2, .. }));
    }

    #[test]
    fn test_two_bodies() {
        let doc = Tag::Html
            .with(vec![
                Tag::Head.with(Tag::Title.with(text("t")).unwrap()).unwrap(),
                Tag::Body.element(),
                Tag::Body.element(),
            ])
            .unwrap();
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path, ["html"]);
        assert_eq!(
            err.kind,
            ViolationKind::WrongCount {
                child: "<body>".into(),
                expected: 1,
                found: 2,
            }
        );
    }

    #[test]
    fn test_unknown_tag() {
        let doc = titled(vec![Element::paired("section").into()]);
        let err = validate(&doc).unwrap_err();
        assert_eq!(err.path, ["html", "body"]);

        let subtree = Element::paired("section");
        let err = Grammar::standard().validate_subtree(&subtree).unwrap_err();
        assert_eq!(
            err.kind,
            ViolationKind::UnknownTag {
                tag: "section".into()
            }
        );
    }

    #[test]
    fn test_body_allows_void_elements() {
        let doc = titled(vec![
            Tag::Hr.element().into(),
            Tag::Br.element().into(),
            Tag::Img.element().into(),
            Node::Text(text("loose text")),
        ]);
        assert!(is_valid(&doc));
    }

    #[test]
    fn test_div_rejects_void_elements() {
        let div = Tag::Div.with(Tag::Hr.element()).unwrap();
        assert!(!is_valid(&titled(vec![div.into()])));
    }

    #[test]
    fn test_span_allows_text_and_paragraph() {
        let span = Tag::Span
            .with(vec![Node::Text(text("a")), Tag::P.with(text("b")).unwrap().into()])
            .unwrap();
        assert!(is_valid(&titled(vec![span.into()])));
    }

    #[test]
    fn test_permissive_rule_tolerates_text() {
        let doc = page(
            vec![Tag::Title.with(text("T")).unwrap()],
            vec![Tag::Ul
                .with(vec![Node::Text(text("stray")), Tag::Li.with(text("x")).unwrap().into()])
                .unwrap()
                .into()],
        );
        assert!(!is_valid(&doc));

        let relaxed = Grammar::standard()
            .with_rule(Tag::Ul, GrammarRule::permissive(&[ChildKind::Tag(Tag::Li)]).at_least(1));
        assert!(relaxed.is_valid(&doc));
    }

    #[test]
    fn test_empty_grammar_knows_nothing() {
        assert!(!Grammar::empty().is_valid(&titled(vec![])));
        assert!(Grammar::empty().rule(Tag::Html).is_none());
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation {
            path: vec!["html".into(), "body".into(), "ul".into()],
            kind: ViolationKind::TooFewChildren { expected: 1, found: 0 },
        };
        assert_eq!(
            violation.to_string(),
            "html > body > ul: expected at least 1 children, found 0"
        );
    }
}
