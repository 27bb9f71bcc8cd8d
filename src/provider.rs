use std::fmt;

/// LLM provider a model identifier is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
    OpenAi,
}

impl Provider {
    /// Pick the provider serving `model`. Anything not recognised as an
    /// OpenAI model goes to Anthropic.
    pub fn for_model(model: &str) -> Self {
        if is_openai_model(model) {
            Provider::OpenAi
        } else {
            Provider::Anthropic
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Anthropic => write!(f, "Anthropic"),
            Provider::OpenAi => write!(f, "OpenAI"),
        }
    }
}

pub fn is_openai_model(model: &str) -> bool {
    model.starts_with("gpt-") || model.starts_with("o1") || model.starts_with("o3")
}
