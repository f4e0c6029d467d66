/// Outcome of turning raw file bytes into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Text(String),
    /// The bytes are not valid UTF-8. Carries no detail on purpose: every
    /// failure is treated the same way downstream.
    Failure,
}

impl Decoded {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Decoded::Text(text) => Some(text),
            Decoded::Failure => None,
        }
    }
}

/// Decodes raw bytes as strict UTF-8 with universal newlines.
///
/// Never errors: invalid input yields `Decoded::Failure`. `\r\n` and lone
/// `\r` become `\n`, so line-anchored patterns see the same lines on every
/// platform.
pub fn decode(bytes: Vec<u8>) -> Decoded {
    match String::from_utf8(bytes) {
        Ok(text) => Decoded::Text(normalize_newlines(text)),
        Err(_) => Decoded::Failure,
    }
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
