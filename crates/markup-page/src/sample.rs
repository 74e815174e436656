//! Demo document used by the driver when no description is given

use markup_dom::{Content, Element, Node, Result, Tag, TextNode};

/// Build the demo page tree
pub fn sample_document() -> Result<Element> {
    let head = Tag::Head.with(vec![
        Tag::Title.with(TextNode::new("\"Hello ground!\""))?,
        Tag::Meta.build([("charset", "UTF-8")], Content::Empty)?,
    ])?;

    let body = Tag::Body.with(vec![
        Node::from(Tag::H1.with(TextNode::new("\"Oh no, not again!\""))?),
        Node::from(Tag::Img.build([("src", "http://i.imgur.com/pfp3T.jpg")], Content::Empty)?),
        Node::from(Tag::Hr.element()),
        Node::from(Tag::P.with(TextNode::new("This is a paragraph."))?),
        Node::from(Tag::Div.with(Tag::Span.with(TextNode::new("This is a span inside a div."))?)?),
        Node::from(Tag::Ul.with(vec![
            Tag::Li.with(TextNode::new("Item 1"))?,
            Tag::Li.with(TextNode::new("Item 2"))?,
        ])?),
    ])?;

    Tag::Html.with(vec![head, body])
}
