//! UI building blocks shared across rendering and state modules.

/// Initials badges standing in for avatar pictures.
pub mod avatar;
pub mod pill;
/// Pill row and text field rendering.
pub mod prompt;
/// Suggestion list row construction and match highlighting.
pub mod suggestions;

pub use avatar::{avatar_color, avatar_span, initials};
pub use pill::{DISMISS_GLYPH, Pill};
pub use prompt::{PromptContext, PromptLayout, ProgressState, render_prompt};
pub use suggestions::build_suggestion_rows;
