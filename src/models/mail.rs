use serde::{Deserialize, Serialize};

/// Raw header block as handed over by the platform: either one multi-line
/// string or a list of `Name: Value` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderInput {
    Raw(String),
    Lines(Vec<String>),
}

impl Default for HeaderInput {
    fn default() -> Self {
        HeaderInput::Raw(String::new())
    }
}

impl HeaderInput {
    /// Ordered header lines. `\r\n` and `\n` both terminate a line in the raw form.
    pub fn lines(&self) -> Vec<String> {
        match self {
            HeaderInput::Raw(raw) => raw
                .replace("\r\n", "\n")
                .split('\n')
                .map(str::to_string)
                .collect(),
            HeaderInput::Lines(lines) => lines.clone(),
        }
    }
}

impl From<&str> for HeaderInput {
    fn from(raw: &str) -> Self {
        HeaderInput::Raw(raw.to_string())
    }
}

impl From<Vec<String>> for HeaderInput {
    fn from(lines: Vec<String>) -> Self {
        HeaderInput::Lines(lines)
    }
}

/// Mail the platform wants delivered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailRequest {
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub headers: HeaderInput,
}

/// Sender parsed out of the `From:` header. Empty strings when there is none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderIdentity {
    pub name: String,
    pub email: String,
}

/// Mailjet v3.1 send body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailPayload {
    #[serde(rename = "Messages")]
    pub messages: Vec<OutboundMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundMessage {
    pub from: Contact,
    pub to: Vec<Contact>,
    pub subject: String,
    pub text_part: String,
    #[serde(rename = "HTMLPart")]
    pub html_part: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    pub email: String,
    pub name: String,
}

/// Response for the mail hook
#[derive(Debug, Serialize)]
pub struct MailSentResponse {
    pub sent: bool,
}
