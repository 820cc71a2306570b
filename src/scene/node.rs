use std::fmt::Write as _;

use crate::animation::keyframes::{AnimTarget, AnimationSpec};
use crate::foundation::format::fmt_num;

/// SVG elements the renderer emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tag {
    Svg,
    G,
    Rect,
    Path,
    Text,
    Title,
    Style,
    Defs,
    Pattern,
    LinearGradient,
    Stop,
    Animate,
    AnimateTransform,
}

impl Tag {
    /// Element name as written in markup.
    pub fn name(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::G => "g",
            Self::Rect => "rect",
            Self::Path => "path",
            Self::Text => "text",
            Self::Title => "title",
            Self::Style => "style",
            Self::Defs => "defs",
            Self::Pattern => "pattern",
            Self::LinearGradient => "linearGradient",
            Self::Stop => "stop",
            Self::Animate => "animate",
            Self::AnimateTransform => "animateTransform",
        }
    }
}

/// Child of an [`Element`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A scene graph node. Attributes keep insertion order so serialization is stable.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Numeric attribute, formatted with [`fmt_num`].
    pub fn attr_num(self, name: &'static str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(mut self, el: Element) -> Self {
        self.push(el);
        self
    }

    pub fn push(&mut self, el: Element) {
        self.children.push(Node::Element(el));
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Element children, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search for every descendant (including `self`) with `tag`.
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(el) = stack.pop() {
            if el.tag == tag {
                out.push(el);
            }
            stack.extend(el.elements().collect::<Vec<_>>().into_iter().rev());
        }
        out
    }

    /// Serialize to compact markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let name = self.tag.name();
        out.push('<');
        out.push_str(name);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {k}=\"{}\"", escape(v, true));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_markup(out),
                Node::Text(t) => out.push_str(&escape(t, false)),
            }
        }
        let _ = write!(out, "</{name}>");
    }
}

fn escape(s: &str, in_attr: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl From<&AnimationSpec> for Element {
    fn from(spec: &AnimationSpec) -> Self {
        let el = match spec.target {
            AnimTarget::Attribute(name) => {
                Element::new(Tag::Animate).attr("attributeName", name)
            }
            AnimTarget::Translate => Element::new(Tag::AnimateTransform)
                .attr("attributeName", "transform")
                .attr("type", "translate"),
        };
        let el = el
            .attr("values", spec.values.to_string())
            .attr("dur", spec.dur.to_string());
        let el = match spec.begin {
            Some(begin) => el.attr("begin", begin.to_string()),
            None => el,
        };
        el.attr("repeatCount", spec.repeat.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
