/// How the canvas is treated after a frame is shown and before the next one is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DisposalMode {
    /// Unspecified disposal. Composited like [`DisposalMode::Reset`].
    #[default]
    Replace,
    /// Keep the canvas and draw the next frame on top of it.
    Accumulate,
    /// Clear the canvas to transparent before the next frame.
    Reset,
}

impl DisposalMode {
    /// Whether the canvas must be cleared before painting the following frame.
    pub fn clears_canvas(self) -> bool {
        match self {
            Self::Accumulate => false,
            // Replace is approximated as a full clear.
            Self::Replace | Self::Reset => true,
        }
    }

    pub fn to_gif(self) -> gif::DisposalMethod {
        match self {
            Self::Replace => gif::DisposalMethod::Any,
            Self::Accumulate => gif::DisposalMethod::Keep,
            Self::Reset => gif::DisposalMethod::Background,
        }
    }
}

impl From<gif::DisposalMethod> for DisposalMode {
    fn from(method: gif::DisposalMethod) -> Self {
        match method {
            gif::DisposalMethod::Keep => Self::Accumulate,
            gif::DisposalMethod::Background => Self::Reset,
            gif::DisposalMethod::Any | gif::DisposalMethod::Previous => Self::Replace,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/disposal.rs"]
mod tests;
