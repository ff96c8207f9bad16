//! Swap builder: fluent construction of `htmx.swap` directives.
//!
//! The payload mirrors the arguments of `htmx.swap(target, content, spec,
//! option)`. `spec` starts from htmx defaults; every optional field is left
//! out of the JSON until a setter touches it, so the client falls back to
//! its own configuration.
//!
//! Rules:
//! - Setters never validate. Selector syntax and keyword values are the
//!   client's business.
//! - `build` consumes the builder; clone first to derive several envelopes
//!   from one configuration.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::envelope::{Envelope, KIND_SWAP};

/// htmx default pause (ms) between swap and settle.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 20;

/// Insertion mode (`hx-swap` values).
///
/// The eight built-in htmx styles have their own variants; anything else
/// (extension styles such as idiomorph's `morph`) travels as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SwapStyle {
    /// Replace the target's children.
    #[default]
    InnerHtml,
    /// Replace the target itself.
    OuterHtml,
    /// Insert before the target.
    BeforeBegin,
    /// Insert before the target's first child.
    AfterBegin,
    /// Insert after the target's last child.
    BeforeEnd,
    /// Insert after the target.
    AfterEnd,
    /// Remove the target regardless of content.
    Delete,
    /// Swap nothing (out-of-band content is still processed).
    None,
    /// Any other style name, sent as-is.
    Custom(String),
}

impl SwapStyle {
    /// String representation used in JSON.
    pub fn as_str(&self) -> &str {
        match self {
            SwapStyle::InnerHtml => "innerHTML",
            SwapStyle::OuterHtml => "outerHTML",
            SwapStyle::BeforeBegin => "beforebegin",
            SwapStyle::AfterBegin => "afterbegin",
            SwapStyle::BeforeEnd => "beforeend",
            SwapStyle::AfterEnd => "afterend",
            SwapStyle::Delete => "delete",
            SwapStyle::None => "none",
            SwapStyle::Custom(name) => name,
        }
    }
}

impl fmt::Display for SwapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SwapStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<&str> for SwapStyle {
    /// Known htmx names map to their variant (case-sensitive, as in htmx).
    fn from(name: &str) -> Self {
        match name {
            "innerHTML" => SwapStyle::InnerHtml,
            "outerHTML" => SwapStyle::OuterHtml,
            "beforebegin" => SwapStyle::BeforeBegin,
            "afterbegin" => SwapStyle::AfterBegin,
            "beforeend" => SwapStyle::BeforeEnd,
            "afterend" => SwapStyle::AfterEnd,
            "delete" => SwapStyle::Delete,
            "none" => SwapStyle::None,
            other => SwapStyle::Custom(other.to_owned()),
        }
    }
}

impl From<String> for SwapStyle {
    fn from(name: String) -> Self {
        match SwapStyle::from(name.as_str()) {
            SwapStyle::Custom(_) => SwapStyle::Custom(name),
            known => known,
        }
    }
}

/// Scroll position: `"top"`, `"bottom"` or a pixel offset.
///
/// Integer offsets stay JSON integers; `Fractional` is emitted as a JSON
/// float (non-finite values become `null`, as serde_json writes them).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scroll {
    Top,
    Bottom,
    Offset(i64),
    Fractional(f64),
}

impl Serialize for Scroll {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scroll::Top => serializer.serialize_str("top"),
            Scroll::Bottom => serializer.serialize_str("bottom"),
            Scroll::Offset(px) => serializer.serialize_i64(*px),
            Scroll::Fractional(px) => serializer.serialize_f64(*px),
        }
    }
}

impl From<i64> for Scroll {
    fn from(px: i64) -> Self {
        Scroll::Offset(px)
    }
}

impl From<f64> for Scroll {
    fn from(px: f64) -> Self {
        Scroll::Fractional(px)
    }
}

/// Core swap behavior (`swapSpec`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapSpec {
    pub swap_style: SwapStyle,
    pub swap_delay: u32,
    pub settle_delay: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_title: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub head: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<Scroll>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scroll_target: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub show: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub show_target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_scroll: Option<bool>,
}

impl Default for SwapSpec {
    fn default() -> Self {
        Self {
            swap_style: SwapStyle::InnerHtml,
            swap_delay: 0,
            settle_delay: DEFAULT_SETTLE_DELAY_MS,
            transition: None,
            ignore_title: None,
            head: String::new(),
            scroll: None,
            scroll_target: String::new(),
            show: String::new(),
            show_target: String::new(),
            focus_scroll: None,
        }
    }
}

/// Per-call overrides (`swapOptions`). Serialized as `option`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub select: String,
    #[serde(rename = "selectOOB", skip_serializing_if = "String::is_empty")]
    pub select_oob: String,
    #[serde(skip_serializing_if = "is_unset_value")]
    pub event_info: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub anchor: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub context_element: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_request: Option<bool>,
}

fn is_unset_value(v: &Option<serde_json::Value>) -> bool {
    matches!(v, None | Some(serde_json::Value::Null))
}

/// Payload of a `swap` envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapDirective {
    target: String,
    content: String,
    spec: SwapSpec,
    #[serde(rename = "option")]
    options: SwapOptions,
}

impl SwapDirective {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn spec(&self) -> &SwapSpec {
        &self.spec
    }

    pub fn options(&self) -> &SwapOptions {
        &self.options
    }
}

/// Fluent builder for a `swap` envelope.
#[derive(Debug, Clone)]
#[must_use = "a Swap does nothing until `build` is called"]
pub struct Swap {
    target: String,
    content: String,
    spec: SwapSpec,
    options: SwapOptions,
}

/// Shorthand for [`Swap::new`].
pub fn new_swap(target: impl Into<String>, content: impl Into<String>) -> Swap {
    Swap::new(target, content)
}

impl Swap {
    /// Start a swap of `content` into `target` with htmx default timing and
    /// `innerHTML` style.
    pub fn new(target: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            content: content.into(),
            spec: SwapSpec::default(),
            options: SwapOptions::default(),
        }
    }

    /// Finish into a `swap` envelope.
    pub fn build(self) -> Envelope {
        tracing::debug!(
            selector = %self.target,
            style = self.spec.swap_style.as_str(),
            content_len = self.content.len(),
            "swap directive built"
        );
        Envelope::new(
            KIND_SWAP,
            SwapDirective {
                target: self.target,
                content: self.content,
                spec: self.spec,
                options: self.options,
            },
        )
    }

    // --- spec ---

    /// Insert mode; accepts a [`SwapStyle`] or any style name.
    pub fn with_swap_style(mut self, style: impl Into<SwapStyle>) -> Self {
        self.spec.swap_style = style.into();
        self
    }

    /// Pause (ms) before swapping.
    pub fn with_swap_delay(mut self, ms: u32) -> Self {
        self.spec.swap_delay = ms;
        self
    }

    /// Pause (ms) between swap and settle.
    pub fn with_settle_delay(mut self, ms: u32) -> Self {
        self.spec.settle_delay = ms;
        self
    }

    /// Enable or disable the View Transition API for this swap.
    pub fn with_transition(mut self, on: bool) -> Self {
        self.spec.transition = Some(on);
        self
    }

    /// Stop a `<title>` in the response from updating `document.title`.
    pub fn with_ignore_title(mut self, on: bool) -> Self {
        self.spec.ignore_title = Some(on);
        self
    }

    /// Extra `<head>` content.
    pub fn with_head(mut self, html: impl Into<String>) -> Self {
        self.spec.head = html.into();
        self
    }

    /// Scroll position after the swap: [`Scroll::Top`], [`Scroll::Bottom`]
    /// or a pixel offset.
    pub fn with_scroll(mut self, scroll: impl Into<Scroll>) -> Self {
        self.spec.scroll = Some(scroll.into());
        self
    }

    /// Element whose scroll position `with_scroll` applies to.
    pub fn with_scroll_target(mut self, selector: impl Into<String>) -> Self {
        self.spec.scroll_target = selector.into();
        self
    }

    /// Show position, usually `"top"` or `"bottom"`.
    pub fn with_show(mut self, show: impl Into<String>) -> Self {
        self.spec.show = show.into();
        self
    }

    /// Element whose show position `with_show` applies to.
    pub fn with_show_target(mut self, selector: impl Into<String>) -> Self {
        self.spec.show_target = selector.into();
        self
    }

    /// Override `htmx.config.defaultFocusScroll`.
    pub fn with_focus_scroll(mut self, on: bool) -> Self {
        self.spec.focus_scroll = Some(on);
        self
    }

    // --- options ---

    /// Keep only the response elements matching `selector`.
    pub fn with_select(mut self, selector: impl Into<String>) -> Self {
        self.options.select = selector.into();
        self
    }

    /// Out-of-band elements to apply.
    pub fn with_select_oob(mut self, selector: impl Into<String>) -> Self {
        self.options.select_oob = selector.into();
        self
    }

    /// Metadata attached to the htmx events fired by this swap. `null`
    /// counts as unset.
    pub fn with_event_info(mut self, info: impl Into<serde_json::Value>) -> Self {
        self.options.event_info = match info.into() {
            serde_json::Value::Null => None,
            v => Some(v),
        };
        self
    }

    /// Element id scrolled into view after settling.
    pub fn with_anchor(mut self, id: impl Into<String>) -> Self {
        self.options.anchor = id.into();
        self
    }

    /// Scope the swap to a sub-tree (shadow root or fragment).
    pub fn with_context_element(mut self, selector: impl Into<String>) -> Self {
        self.options.context_element = selector.into();
        self
    }

    /// Title to use when the response carries no `<title>` of its own.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.title = title.into();
        self
    }

    /// Render only `hx-history-elt` content from the fragment.
    pub fn with_history_request(mut self, on: bool) -> Self {
        self.options.history_request = Some(on);
        self
    }
}

impl From<Swap> for Envelope {
    fn from(swap: Swap) -> Self {
        swap.build()
    }
}
