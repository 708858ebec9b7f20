// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Toolkit-independent view of the counter
//!
//! [`render`] maps a [`CounterState`] to a small tree of [`Node`]s. Each
//! node carries a stable test id. The kas widget builds its buttons from
//! this tree and takes its label text from [`labels`].

use crate::state::{Control, CounterState};

pub const COMPONENT_APP: &str = "component-app";
pub const COUNTER_DISPLAY: &str = "counter-display";
pub const INCREMENT_BUTTON: &str = "increment-button";
pub const DECREMENT_BUTTON: &str = "decrement-button";
pub const ERROR_MESSAGE: &str = "error-message";

pub const INCREMENT_LABEL: &str = "Increment counter";
pub const DECREMENT_LABEL: &str = "Decrement counter";
pub const ERROR_TEXT: &str = "The counter cannot go below zero";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Container,
    Heading,
    Button(Control),
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub test_id: &'static str,
    pub kind: Kind,
    text: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(test_id: &'static str, kind: Kind, text: impl ToString) -> Self {
        Node {
            test_id,
            kind,
            text: text.to_string(),
            children: vec![],
        }
    }

    /// Text content: own text followed by that of all descendants
    pub fn text(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text());
        }
        out
    }

    /// The control dispatched on activation, if this is a button
    pub fn control(&self) -> Option<Control> {
        match self.kind {
            Kind::Button(control) => Some(control),
            _ => None,
        }
    }

    /// Direct children which are buttons, with the control each dispatches
    pub fn buttons(&self) -> impl Iterator<Item = (&Node, Control)> + '_ {
        self.children
            .iter()
            .filter_map(|node| node.control().map(|control| (node, control)))
    }

    /// All nodes (depth-first, including `self`) with the given test id
    #[cfg(test)]
    pub fn find_by_test_attr(&self, test_id: &str) -> Vec<&Node> {
        let mut found = vec![];
        self.collect(test_id, &mut found);
        found
    }

    #[cfg(test)]
    fn collect<'a>(&'a self, test_id: &str, found: &mut Vec<&'a Node>) {
        if self.test_id == test_id {
            found.push(self);
        }
        for child in &self.children {
            child.collect(test_id, found);
        }
    }
}

pub fn display_text(state: &CounterState) -> String {
    format!("The counter is currently {}", state.counter)
}

/// Text of the display and error labels
///
/// The error text is empty while the error element is absent.
pub fn labels(state: &CounterState) -> (String, String) {
    let error = if state.error_msg { ERROR_TEXT } else { "" };
    (display_text(state), error.to_string())
}

pub fn render(state: &CounterState) -> Node {
    let mut children = vec![
        Node::leaf(COUNTER_DISPLAY, Kind::Heading, display_text(state)),
        Node::leaf(
            INCREMENT_BUTTON,
            Kind::Button(Control::Increment),
            INCREMENT_LABEL,
        ),
        Node::leaf(
            DECREMENT_BUTTON,
            Kind::Button(Control::Decrement),
            DECREMENT_LABEL,
        ),
    ];
    if state.error_msg {
        children.push(Node::leaf(ERROR_MESSAGE, Kind::Text, ERROR_TEXT));
    }

    Node {
        test_id: COMPONENT_APP,
        kind: Kind::Container,
        text: String::new(),
        children,
    }
}
