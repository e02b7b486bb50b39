// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-composition conveniences over an opaque node type.
//!
//! Nothing here knows how a node renders. Each helper takes a node by value
//! and returns a wrapper describing what the host toolkit should do with it:
//! keep it, transform it, hide it, stretch it over a background, or pin it to
//! a square frame.
//!
//! ```
//! use understory_color::Color;
//! use understory_modifier::compose::{apply_if, push_out_if, Conditional};
//!
//! #[derive(Debug, PartialEq)]
//! struct Label(&'static str);
//!
//! let compact = true;
//! let node = apply_if(Label("Inbox"), || compact, |_| Label("In"));
//! assert_eq!(node.into_inner(), Label("In"));
//!
//! let framed = push_out_if(Label("Empty"), false, Color::WHITE);
//! assert!(matches!(framed, Conditional::Unchanged(Label("Empty"))));
//! ```

use understory_color::Color;

/// Result of a conditional transform: either the transformed node or the
/// original one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conditional<A, B> {
    /// The condition held and the transform ran.
    Applied(A),
    /// The condition did not hold; the node is untouched.
    Unchanged(B),
}

impl<A, B> Conditional<A, B> {
    /// Returns `true` if the transform ran.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The transformed node, if any.
    pub fn applied(self) -> Option<A> {
        match self {
            Self::Applied(node) => Some(node),
            Self::Unchanged(_) => None,
        }
    }
}

impl<N> Conditional<N, N> {
    /// Collapse to the node when both branches have the same type.
    pub fn into_inner(self) -> N {
        match self {
            Self::Applied(node) | Self::Unchanged(node) => node,
        }
    }
}

/// Apply `transform` to `node` if `condition` returns `true`.
///
/// The condition is evaluated lazily, exactly once.
pub fn apply_if<N, M>(
    node: N,
    condition: impl FnOnce() -> bool,
    transform: impl FnOnce(N) -> M,
) -> Conditional<M, N> {
    if condition() {
        Conditional::Applied(transform(node))
    } else {
        Conditional::Unchanged(node)
    }
}

/// Whether a node is drawn. A hidden node still takes part in layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility<N> {
    /// Drawn normally.
    Shown(N),
    /// Laid out but not drawn.
    Hidden(N),
}

impl<N> Visibility<N> {
    /// Returns `true` for [`Visibility::Hidden`].
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden(_))
    }

    /// The wrapped node.
    pub fn node(&self) -> &N {
        match self {
            Self::Shown(node) | Self::Hidden(node) => node,
        }
    }

    /// Unwrap the node regardless of visibility.
    pub fn into_node(self) -> N {
        match self {
            Self::Shown(node) | Self::Hidden(node) => node,
        }
    }
}

/// Hide `node` when `hide` is `true`.
pub fn hidden_if<N>(node: N, hide: bool) -> Visibility<N> {
    if hide {
        Visibility::Hidden(node)
    } else {
        Visibility::Shown(node)
    }
}

/// A node layered over a background that fills all offered space.
///
/// This turns a node that sizes to its content into one that expands to its
/// container, with the node centered on top.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PushOut<N> {
    /// Fill drawn behind the content; transparent by default.
    pub background: Color,
    /// The wrapped node.
    pub content: N,
}

impl<N> PushOut<N> {
    /// Wrap `content` over a transparent background.
    pub fn new(content: N) -> Self {
        Self {
            background: Color::TRANSPARENT,
            content,
        }
    }

    /// Replace the background.
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

/// Stretch `node` over `background`.
pub fn push_out<N>(node: N, background: Color) -> PushOut<N> {
    PushOut::new(node).with_background(background)
}

/// Stretch `node` over `background` only when `enabled` is `true`.
pub fn push_out_if<N>(node: N, enabled: bool, background: Color) -> Conditional<PushOut<N>, N> {
    apply_if(node, || enabled, |node| push_out(node, background))
}

/// A node placed in a fixed frame, centered.
///
/// `None` on an axis means the node keeps its own sizing on that axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Framed<N> {
    /// Fixed width, if any.
    pub width: Option<f64>,
    /// Fixed height, if any.
    pub height: Option<f64>,
    /// The wrapped node.
    pub content: N,
}

/// Frame `node` with equal width and height.
pub fn square_frame<N>(node: N, length: Option<f64>) -> Framed<N> {
    Framed {
        width: length,
        height: length,
        content: node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn apply_if_transforms_when_true() {
        let node = apply_if(2_u32, || true, |n| n * 10);
        assert_eq!(node, Conditional::Applied(20));
        assert!(node.is_applied());
    }

    #[test]
    fn apply_if_keeps_node_when_false() {
        let ran = Cell::new(false);
        let node = apply_if(
            "label",
            || false,
            |s| {
                ran.set(true);
                s.len()
            },
        );
        assert_eq!(node, Conditional::Unchanged("label"));
        assert_eq!(node.applied(), None);
        assert!(!ran.get());
    }

    #[test]
    fn condition_is_evaluated_once() {
        let calls = Cell::new(0);
        let _ = apply_if(
            (),
            || {
                calls.set(calls.get() + 1);
                true
            },
            |n| n,
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn into_inner_collapses_same_typed_branches() {
        assert_eq!(apply_if(1, || true, |n| n + 1).into_inner(), 2);
        assert_eq!(apply_if(1, || false, |n| n + 1).into_inner(), 1);
    }

    #[test]
    fn hidden_if_keeps_the_node() {
        let shown = hidden_if('x', false);
        let hidden = hidden_if('x', true);
        assert!(!shown.is_hidden());
        assert!(hidden.is_hidden());
        assert_eq!(hidden.node(), &'x');
        assert_eq!(hidden.into_node(), 'x');
    }

    #[test]
    fn push_out_defaults_to_transparent() {
        let wrapped = PushOut::new(5);
        assert_eq!(wrapped.background, Color::TRANSPARENT);
        assert_eq!(push_out(5, Color::BLACK).background, Color::BLACK);
    }

    #[test]
    fn push_out_if_respects_flag() {
        let on = push_out_if("cell", true, Color::WHITE);
        assert_eq!(
            on,
            Conditional::Applied(PushOut {
                background: Color::WHITE,
                content: "cell",
            })
        );
        assert_eq!(
            push_out_if("cell", false, Color::WHITE),
            Conditional::Unchanged("cell")
        );
    }

    #[test]
    fn square_frame_uses_one_length_for_both_axes() {
        let framed = square_frame((), Some(44.0));
        assert_eq!(framed.width, Some(44.0));
        assert_eq!(framed.height, Some(44.0));

        let unconstrained = square_frame((), None);
        assert_eq!(unconstrained.width, None);
        assert_eq!(unconstrained.height, None);
    }
}
