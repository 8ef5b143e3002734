pub mod headers;
pub mod html;
pub mod mailjet;

pub use headers::parse_from_header;
pub use html::strip_tags;
pub use mailjet::{EmailTransport, MailjetClient, TransportResponse};

use uuid::Uuid;

use crate::models::{
    Contact, Credentials, EmailPayload, MailRequest, OutboundMessage, SenderIdentity,
};

/// Display name every recipient is sent with
pub const RECIPIENT_NAME: &str = "Passenger";

/// Why a mail was not delivered to the provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("Error sending mail: Mailjet API/private key not set")]
    MissingCredentials,

    #[error("Error sending mail: {reason}")]
    Rejected { reason: String },

    #[error("Error sending mail: {0}")]
    Transport(String),
}

/// Build the provider request for `request` sent as `sender`.
pub fn build_payload(request: &MailRequest, sender: &SenderIdentity) -> EmailPayload {
    EmailPayload {
        messages: vec![OutboundMessage {
            from: Contact {
                email: sender.email.clone(),
                name: sender.name.clone(),
            },
            to: vec![Contact {
                email: request.to.clone(),
                name: RECIPIENT_NAME.to_string(),
            }],
            subject: request.subject.clone(),
            text_part: strip_tags(&request.message),
            html_part: request.message.clone(),
        }],
    }
}

/// Send one mail through `transport`.
///
/// Missing credentials fail before any network call. Exactly one request is
/// made otherwise; failures are not retried.
pub async fn send_mail(
    request: &MailRequest,
    credentials: &Credentials,
    transport: &dyn EmailTransport,
) -> Result<(), SendError> {
    let Some(keys) = credentials.keys() else {
        tracing::warn!("Mail not sent: Mailjet keys are not configured");
        return Err(SendError::MissingCredentials);
    };

    let sender = parse_from_header(&request.headers);
    let payload = build_payload(request, &sender);

    let mail_id = Uuid::new_v4();
    tracing::debug!(
        mail_id = %mail_id,
        from = %sender.email,
        to = %request.to,
        "Dispatching mail to Mailjet"
    );

    let response = transport.send(keys, &payload).await.map_err(|e| {
        tracing::error!(mail_id = %mail_id, error = %e, "Mailjet request failed");
        e
    })?;

    if !response.success {
        tracing::warn!(
            mail_id = %mail_id,
            reason = %response.reason_phrase,
            "Mailjet rejected mail"
        );
        return Err(SendError::Rejected {
            reason: response.reason_phrase,
        });
    }

    tracing::info!(mail_id = %mail_id, to = %request.to, "Mail sent");
    Ok(())
}
