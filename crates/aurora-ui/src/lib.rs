//! Presentational components for the Aurora dashboard.
//!
//! This crate provides:
//! - `ScorePill` - Badge showing a signal score, colored by category
//! - `Badge` - Inline label component with seven visual variants
//! - `ScoreCategory` - Threshold mapping from score to emphasis
//! - `render_*` - HTML string renderers for server-side sections
//!
//! # Example
//!
//! ```rust,ignore
//! use aurora_ui::ScorePill;
//! use leptos::prelude::*;
//!
//! #[component]
//! fn LeadRow(score: f64) -> impl IntoView {
//!     view! { <ScorePill score=score/> }
//! }
//! ```

mod badge;
mod category;
mod score_pill;

pub use badge::{badge_class, render_badge, Badge, BadgeProps, BadgeVariant, BADGE_BASE_CLASS};
pub use category::*;
pub use score_pill::*;
