//! Badge variants and rendering.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Classes shared by every badge.
pub const BADGE_BASE_CLASS: &str =
    "inline-flex items-center rounded border px-2 py-0.5 text-[11px] font-medium tracking-wide";

/// Visual style of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Success,
    Warning,
    Destructive,
    Accent,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Accent => "accent",
        }
    }

    /// Color classes for this variant.
    pub fn class_names(&self) -> &'static str {
        match self {
            Self::Default => {
                "border-transparent bg-[hsl(var(--primary))] text-[hsl(var(--primary-foreground))]"
            }
            Self::Secondary => {
                "border-transparent bg-[hsl(var(--muted))] text-[hsl(var(--muted-foreground))]"
            }
            Self::Outline => {
                "border-[hsl(var(--border))] bg-transparent text-[hsl(var(--muted-foreground))]"
            }
            Self::Success => "border-transparent bg-[hsl(var(--success))] text-white",
            Self::Warning => "border-transparent bg-[hsl(var(--warning))] text-white",
            Self::Destructive => "border-transparent bg-[hsl(var(--destructive))] text-white",
            Self::Accent => {
                "border-transparent bg-[hsl(var(--accent))] text-[hsl(var(--accent-foreground))]"
            }
        }
    }
}

impl std::fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full class attribute for a badge.
pub fn badge_class(variant: BadgeVariant, extra: Option<&str>) -> String {
    let mut class = format!("{} {}", BADGE_BASE_CLASS, variant.class_names());
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Small inline label with a colored background.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = badge_class(variant, class.as_deref());

    view! { <div class=class>{children()}</div> }
}

/// Render a badge to an HTML string.
pub fn render_badge(variant: BadgeVariant, label: &str, extra: Option<&str>) -> String {
    format!(
        r#"<div class="{class}">{label}</div>"#,
        class = escape_html(&badge_class(variant, extra)),
        label = escape_html(label)
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
