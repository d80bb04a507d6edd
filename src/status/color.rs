//! Status -> display color token lookup.

use super::label::StatusLabel;

/// Display color token for a status. Carries the CSS custom property the
/// dashboard themes resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Good,
    Attention,
    Critical,
}

impl ColorToken {
    /// CSS custom-property reference for this token.
    pub fn css_var(&self) -> &'static str {
        match self {
            ColorToken::Good => "var(--status-good)",
            ColorToken::Attention => "var(--status-attention)",
            ColorToken::Critical => "var(--status-critical)",
        }
    }
}

/// Color token for a status label.
///
/// `Unknown` takes the critical token: the dashboard colors "we don't
/// know" as if it were bad. Fail-safe on purpose - keep it that way until
/// product says otherwise.
pub fn color_for(status: StatusLabel) -> ColorToken {
    match status {
        StatusLabel::Good => ColorToken::Good,
        StatusLabel::Attention => ColorToken::Attention,
        StatusLabel::Critical | StatusLabel::Unknown => ColorToken::Critical,
    }
}
