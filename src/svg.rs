//! SVG output.
//!
//! A [`Surface`] turns a coloured [`CloudLayout`] into its final form.
//! [`MarkupSurface`] writes markup directly, [`ElementSurface`] builds an
//! [`SvgElement`] tree inside a caller supplied container. For the same layout
//! the serialised tree and the markup are byte for byte identical.

use std::fmt::{self, Write};

use crate::cloud::{CloudLayout, StyledWord};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const CLOUD_CLASS: &str = "wordcloud";

pub trait Surface {
    type Output;

    fn draw(&mut self, cloud: &CloudLayout) -> Self::Output;
}

#[derive(Clone, Debug, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        SvgElement {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(SvgNode::Text(text.into()));
        self
    }

    /// Replaces the value in place if the attribute exists, appends otherwise.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, child: SvgElement) {
        self.children.push(SvgNode::Element(child));
    }

    pub fn elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|child| match child {
            SvgNode::Element(element) => Some(element),
            SvgNode::Text(_) => None,
        })
    }

    /// Every descendant element named `name`, depth first.
    pub fn descendants<'a>(&'a self, name: &'a str) -> Vec<&'a SvgElement> {
        let mut found = Vec::new();
        for element in self.elements() {
            if element.name == name {
                found.push(element);
            }
            found.extend(element.descendants(name));
        }
        found
    }

    /// Concatenated text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                SvgNode::Text(text) => Some(text.as_str()),
                SvgNode::Element(_) => None,
            })
            .collect()
    }

    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}=\"{}\"", Escaped(value))?;
        }
        f.write_char('>')?;
        for child in &self.children {
            match child {
                SvgNode::Element(element) => fmt::Display::fmt(element, f)?,
                SvgNode::Text(text) => fmt::Display::fmt(&Escaped(text), f)?,
            }
        }
        write!(f, "</{}>", self.name)
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0;
        let mut start = 0;
        for (i, b) in text.bytes().enumerate() {
            let esc = match b {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                b'\'' => "&#39;",
                _ => continue,
            };
            f.write_str(&text[start..i])?;
            f.write_str(esc)?;
            start = i + 1;
        }
        f.write_str(&text[start..])
    }
}

/// Shortest decimal with at most three fraction digits.
pub fn fmt_number(value: f32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut out = format!("{value:.3}");
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}

fn word_transform(word: &StyledWord) -> String {
    format!(
        "translate({},{}) rotate({})",
        fmt_number(word.x),
        fmt_number(word.y),
        fmt_number(word.rotation)
    )
}

fn centre_transform(cloud: &CloudLayout) -> String {
    format!(
        "translate({},{})",
        fmt_number(cloud.width as f32 / 2.0),
        fmt_number(cloud.height as f32 / 2.0)
    )
}

/// Serialises straight to a string.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupSurface;

impl Surface for MarkupSurface {
    type Output = String;

    fn draw(&mut self, cloud: &CloudLayout) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{}" height="{}" class="{CLOUD_CLASS}">"#,
            cloud.width, cloud.height
        );
        let _ = write!(out, r#"<g transform="{}">"#, centre_transform(cloud));

        let font_family = Escaped(&cloud.font_family);
        for word in &cloud.words {
            let _ = write!(
                out,
                r#"<text text-anchor="middle" transform="{}" font-size="{}px" font-family="{font_family}" fill="{}">{}</text>"#,
                word_transform(word),
                fmt_number(word.font_size),
                Escaped(&word.fill),
                Escaped(&word.text),
            );
        }

        out.push_str("</g></svg>");
        out
    }
}

/// Draws into an existing `<svg>` element, replacing whatever it held.
#[derive(Debug)]
pub struct ElementSurface<'a> {
    container: &'a mut SvgElement,
}

impl<'a> ElementSurface<'a> {
    pub fn new(container: &'a mut SvgElement) -> Self {
        ElementSurface { container }
    }
}

impl Surface for ElementSurface<'_> {
    type Output = ();

    fn draw(&mut self, cloud: &CloudLayout) {
        let svg = &mut *self.container;
        svg.children.clear();
        svg.set_attribute("xmlns", SVG_NS);
        svg.set_attribute("width", cloud.width.to_string());
        svg.set_attribute("height", cloud.height.to_string());
        svg.set_attribute("class", CLOUD_CLASS);

        let mut group = SvgElement::new("g").with_attribute("transform", centre_transform(cloud));
        for word in &cloud.words {
            group.push(
                SvgElement::new("text")
                    .with_attribute("text-anchor", "middle")
                    .with_attribute("transform", word_transform(word))
                    .with_attribute("font-size", format!("{}px", fmt_number(word.font_size)))
                    .with_attribute("font-family", cloud.font_family.as_str())
                    .with_attribute("fill", word.fill.as_str())
                    .with_text(word.text.as_str()),
            );
        }
        svg.push(group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CloudLayout {
        CloudLayout {
            width: 200,
            height: 100,
            font_family: "Noto \"Sans\"".to_string(),
            words: vec![
                StyledWord {
                    text: "rock & roll".to_string(),
                    font_size: 60.0,
                    rotation: 0.0,
                    x: -12.0,
                    y: 3.5,
                    fill: "#1f77b4".to_string(),
                },
                StyledWord {
                    text: "<tag>".to_string(),
                    font_size: 12.5,
                    rotation: 90.0,
                    x: 40.0,
                    y: -7.25,
                    fill: "#ff7f0e".to_string(),
                },
            ],
            dropped: vec![],
        }
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_number(60.0), "60");
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_number(1.0 / 3.0), "0.333");
        assert_eq!(fmt_number(-0.0001), "0");
        assert_eq!(fmt_number(f32::NAN), "0");
        assert_eq!(fmt_number(-7.25), "-7.25");
    }

    #[test]
    fn markup_escapes_text_and_attributes() {
        let markup = MarkupSurface.draw(&sample());
        assert!(markup.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" class="wordcloud"><g transform="translate(100,50)">"#
        ));
        assert!(markup.contains(
            r##"<text text-anchor="middle" transform="translate(-12,3.5) rotate(0)" font-size="60px" font-family="Noto &quot;Sans&quot;" fill="#1f77b4">rock &amp; roll</text>"##
        ));
        assert!(markup.contains(">&lt;tag&gt;</text>"));
        assert!(markup.ends_with("</g></svg>"));
    }

    #[test]
    fn element_tree_serialises_to_the_same_markup() {
        let cloud = sample();
        let mut container = SvgElement::new("svg");
        ElementSurface::new(&mut container).draw(&cloud);

        assert_eq!(container.to_markup(), MarkupSurface.draw(&cloud));

        let texts = container.descendants("text");
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].text(), "rock & roll");
        assert_eq!(texts[1].attribute("transform"), Some("translate(40,-7.25) rotate(90)"));
    }

    #[test]
    fn element_surface_replaces_previous_contents() {
        let mut container = SvgElement::new("svg").with_attribute("id", "cloud");
        container.push(SvgElement::new("circle"));

        let mut empty = sample();
        empty.words.clear();
        ElementSurface::new(&mut container).draw(&empty);

        assert_eq!(container.attribute("id"), Some("cloud"));
        assert_eq!(container.attribute("width"), Some("200"));
        assert!(container.descendants("circle").is_empty());
        assert!(container.descendants("text").is_empty());
        assert_eq!(container.descendants("g").len(), 1);
    }
}
