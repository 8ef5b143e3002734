pub mod mail;
pub mod settings;

pub use mail::{
    Contact,
    EmailPayload,
    HeaderInput,
    MailRequest,
    MailSentResponse,
    OutboundMessage,
    SenderIdentity,
};

pub use settings::{
    ApiKeys,
    Credentials,
    MailjetOptions,
    UpdateSettingsRequest,
    UpdateSettingsResponse,
};
