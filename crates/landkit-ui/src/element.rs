//! Element tree and the `h` element builder.
//!
//! Elements are shared handles (`Rc<RefCell<_>>`) so event listeners can hold
//! on to the nodes they update after the tree has been assembled. Listeners
//! that need to reach an ancestor should capture a [`WeakElement`] to avoid
//! reference cycles.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::event::{Event, Listener};

/// A value in an [`Attrs`] map.
#[derive(Clone)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Listener(Listener),
}

impl AttrValue {
    /// Coerce to the literal attribute string.
    #[must_use]
    pub fn to_attr_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Listener(_) => "[listener]".to_string(),
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listener(_) => f.write_str("Listener(..)"),
            other => write!(f, "{:?}", other.to_attr_string()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Listener> for AttrValue {
    fn from(value: Listener) -> Self {
        Self::Listener(value)
    }
}

/// Wrap a closure as a listener attribute value.
pub fn listener(f: impl Fn(&Event) + 'static) -> AttrValue {
    AttrValue::Listener(Rc::new(f))
}

/// Ordered attribute map passed to [`h`].
///
/// Keys are interpreted by convention: `class` sets the class name, `html`
/// sets raw inner markup, `on<event>` bound to a listener registers it, and
/// every other pair becomes a literal attribute.
#[derive(Debug, Clone, Default)]
pub struct Attrs(Vec<(String, AttrValue)>);

impl Attrs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.push((key.into(), value.into()));
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build an [`Attrs`] map from `key => value` pairs.
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attrs::new();
        $(attrs.push($key, $value);)+
        attrs
    }};
}

/// Children argument for [`h`].
#[derive(Debug, Clone, Default)]
pub enum ChildSpec {
    #[default]
    Empty,
    Text(String),
    Single(Node),
    Many(Vec<ChildSpec>),
}

impl From<()> for ChildSpec {
    fn from((): ()) -> Self {
        Self::Empty
    }
}

impl From<&str> for ChildSpec {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ChildSpec {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ChildSpec {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ChildSpec {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<usize> for ChildSpec {
    fn from(value: usize) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for ChildSpec {
    fn from(value: f64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Node> for ChildSpec {
    fn from(value: Node) -> Self {
        Self::Single(value)
    }
}

impl From<Element> for ChildSpec {
    fn from(value: Element) -> Self {
        Self::Single(Node::Element(value))
    }
}

impl<T: Into<ChildSpec>> From<Option<T>> for ChildSpec {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<ChildSpec>> From<Vec<T>> for ChildSpec {
    fn from(value: Vec<T>) -> Self {
        Self::Many(value.into_iter().map(Into::into).collect())
    }
}

/// A node in the element tree.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(el) => el.text_content(),
            Self::Text(text) => text.clone(),
        }
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

#[derive(Default)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) class_name: String,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) style: Vec<(String, String)>,
    pub(crate) inner_html: Option<String>,
    pub(crate) value: Option<String>,
    pub(crate) children: Vec<Node>,
    listeners: Vec<(String, Listener)>,
}

/// Shared handle to an element.
///
/// Cloning the handle does not copy the element.
#[derive(Clone)]
pub struct Element(Rc<RefCell<ElementData>>);

/// Non-owning handle to an element.
#[derive(Clone, Default)]
pub struct WeakElement(Weak<RefCell<ElementData>>);

impl WeakElement {
    #[must_use]
    pub fn upgrade(&self) -> Option<Element> {
        self.0.upgrade().map(Element)
    }
}

impl fmt::Debug for WeakElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(el) => write!(f, "WeakElement(<{}>)", el.tag()),
            None => f.write_str("WeakElement(dropped)"),
        }
    }
}

/// Construct an element from a tag, an attribute map, and children.
///
/// A top-level text child replaces all content. In a list, text items become
/// text nodes and [`ChildSpec::Empty`] items are skipped, which is how
/// conditional content is written.
pub fn h(tag: &str, attrs: Attrs, children: impl Into<ChildSpec>) -> Element {
    let el = Element::new(tag);

    for (key, value) in attrs.0 {
        match (key.as_str(), value) {
            ("class", value) => el.set_class_name(value.to_attr_string()),
            ("html", value) => el.set_inner_html(value.to_attr_string()),
            (name, AttrValue::Listener(f)) if name.len() > 2 && name.starts_with("on") => {
                el.add_event_listener(&name[2..], f);
            }
            (name, value) => el.set_attribute(name, value.to_attr_string()),
        }
    }

    match children.into() {
        ChildSpec::Empty => {}
        ChildSpec::Text(text) => el.set_text_content(text),
        ChildSpec::Single(node) => el.append_child(node),
        ChildSpec::Many(items) => el.append_many(items),
    }

    el
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_ascii_lowercase(),
            ..ElementData::default()
        })))
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    /// Whether both handles point at the same element.
    #[must_use]
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn data(&self) -> std::cell::Ref<'_, ElementData> {
        self.0.borrow()
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        self.0.borrow_mut().id = Some(id.into());
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        self.0.borrow().class_name.clone()
    }

    pub fn set_class_name(&self, class_name: impl Into<String>) {
        self.0.borrow_mut().class_name = class_name.into();
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.0
            .borrow()
            .class_name
            .split_whitespace()
            .any(|c| c == class)
    }

    pub fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            let mut data = self.0.borrow_mut();
            if !data.class_name.trim().is_empty() {
                data.class_name.push(' ');
            }
            data.class_name.push_str(class);
        }
    }

    pub fn remove_class(&self, class: &str) {
        let mut data = self.0.borrow_mut();
        data.class_name = data
            .class_name
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
    }

    /// Toggle a class, returning whether it is now present.
    pub fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Read an attribute. `id` and `class` are served from their properties.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        let data = self.0.borrow();
        match name {
            "id" => data.id.clone(),
            "class" => Some(data.class_name.clone()).filter(|c| !c.is_empty()),
            _ => data
                .attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone()),
        }
    }

    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name {
            "id" => self.set_id(value),
            "class" => self.set_class_name(value),
            _ => {
                let mut data = self.0.borrow_mut();
                if let Some(slot) = data.attrs.iter_mut().find(|(k, _)| k == name) {
                    slot.1 = value;
                } else {
                    data.attrs.push((name.to_string(), value));
                }
            }
        }
    }

    pub fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attrs.retain(|(k, _)| k != name);
    }

    /// Inline style property, as set through [`Element::set_style`].
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.0
            .borrow()
            .style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.clone())
    }

    pub fn set_style(&self, property: &str, value: impl Into<String>) {
        let value = value.into();
        let mut data = self.0.borrow_mut();
        if let Some(slot) = data.style.iter_mut().find(|(k, _)| k == property) {
            slot.1 = value;
        } else {
            data.style.push((property.to_string(), value));
        }
    }

    /// Form control value (`input`, `textarea`, `select`).
    #[must_use]
    pub fn value(&self) -> String {
        self.0.borrow().value.clone().unwrap_or_default()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.0.borrow_mut().value = Some(value.into());
    }

    #[must_use]
    pub fn inner_html(&self) -> Option<String> {
        self.0.borrow().inner_html.clone()
    }

    /// Set raw inner markup, replacing all children. The markup is trusted.
    pub fn set_inner_html(&self, html: impl Into<String>) {
        let mut data = self.0.borrow_mut();
        data.children.clear();
        data.inner_html = Some(html.into());
    }

    /// Concatenated descendant text. Raw inner markup is not parsed and does
    /// not contribute.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.0
            .borrow()
            .children
            .iter()
            .map(Node::text_content)
            .collect()
    }

    /// Replace all content with a single text node.
    pub fn set_text_content(&self, text: impl Into<String>) {
        let mut data = self.0.borrow_mut();
        data.inner_html = None;
        data.children.clear();
        data.children.push(Node::Text(text.into()));
    }

    pub fn append_child(&self, node: impl Into<Node>) {
        self.0.borrow_mut().children.push(node.into());
    }

    pub fn append_text(&self, text: impl Into<String>) {
        self.append_child(Node::Text(text.into()));
    }

    fn append_many(&self, items: Vec<ChildSpec>) {
        for item in items {
            match item {
                ChildSpec::Empty => {}
                ChildSpec::Text(text) => self.append_text(text),
                ChildSpec::Single(node) => self.append_child(node),
                ChildSpec::Many(nested) => self.append_many(nested),
            }
        }
    }

    /// Remove every child and any raw inner markup.
    pub fn clear_children(&self) {
        let mut data = self.0.borrow_mut();
        data.inner_html = None;
        data.children.clear();
    }

    #[must_use]
    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    #[must_use]
    pub fn child_elements(&self) -> Vec<Element> {
        self.0
            .borrow()
            .children
            .iter()
            .filter_map(|n| n.as_element().cloned())
            .collect()
    }

    /// Find this element or a descendant by id.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        if self.0.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.child_elements()
            .iter()
            .find_map(|child| child.get_element_by_id(id))
    }

    /// Descendants carrying `class`, in document order.
    #[must_use]
    pub fn query_class(&self, class: &str) -> Vec<Element> {
        self.descendants(&|el: &Element| el.has_class(class))
    }

    /// Descendants with the given tag, in document order.
    #[must_use]
    pub fn query_tag(&self, tag: &str) -> Vec<Element> {
        let tag = tag.to_ascii_lowercase();
        self.descendants(&|el: &Element| el.0.borrow().tag == tag)
    }

    fn descendants(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<Element> {
        let mut out = Vec::new();
        for child in self.child_elements() {
            if pred(&child) {
                out.push(child.clone());
            }
            out.extend(child.descendants(pred));
        }
        out
    }

    pub fn add_event_listener(&self, kind: &str, listener: Listener) {
        self.0
            .borrow_mut()
            .listeners
            .push((kind.to_ascii_lowercase(), listener));
    }

    #[must_use]
    pub fn listener_count(&self, kind: &str) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| k == kind)
            .count()
    }

    /// Invoke this element's listeners for the event, in registration order.
    ///
    /// Returns `false` when a listener called `prevent_default`.
    pub fn dispatch_event(&self, event: &Event) -> bool {
        // Listeners may mutate this element, so release the borrow first.
        let listeners: Vec<Listener> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| k == event.kind())
            .map(|(_, f)| Rc::clone(f))
            .collect();

        tracing::trace!(kind = event.kind(), listeners = listeners.len(), "dispatching event");
        for f in listeners {
            f(event);
        }
        !event.default_prevented()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("id", &data.id)
            .field("class", &data.class_name)
            .field("children", &data.children.len())
            .finish()
    }
}
