//! SMTP notifier implementation using lettre

use crate::config::Config;
use crate::error::{Error, Result};
use crate::notify::Notifier;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::path::Path;
use tracing::{debug, info};

/// Spreadsheet MIME type for the attachment
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// SMTP notifier using lettre's async Tokio transport
pub struct SmtpNotifier {
    sender: Mailbox,
    recipients: Vec<Mailbox>,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    /// Create a notifier from run configuration.
    ///
    /// Parses all addresses and builds the STARTTLS transport up front;
    /// nothing connects until a send is attempted.
    pub fn new(config: &Config) -> Result<Self> {
        if config.recipients.is_empty() {
            return Err(Error::Config("TEAM_EMAILS lists no recipients".to_string()));
        }

        let sender: Mailbox = config
            .email_sender
            .parse()
            .map_err(|e| Error::Config(format!("EMAIL_SENDER is not a valid address: {e}")))?;

        let recipients = config
            .recipients
            .iter()
            .map(|addr| {
                addr.parse().map_err(|e| {
                    Error::Config(format!("recipient '{addr}' is not a valid address: {e}"))
                })
            })
            .collect::<Result<Vec<Mailbox>>>()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.email_sender.clone(),
                config.email_password.clone(),
            ))
            .build();

        Ok(Self {
            sender,
            recipients,
            transport,
        })
    }

    fn message_builder(&self, subject: &str) -> lettre::message::MessageBuilder {
        let mut builder = Message::builder()
            .from(self.sender.clone())
            .subject(subject);
        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }
        builder
    }

    /// Build the outgoing message with the report attached.
    fn build_report_message(&self, report: &Path, subject: &str, body: &str) -> Result<Message> {
        let payload = std::fs::read(report).map_err(|e| {
            Error::Delivery(format!(
                "attachment file '{}' could not be read: {e}",
                report.display()
            ))
        })?;

        let filename = report
            .file_name()
            .map_or_else(|| "report.xlsx".to_string(), |n| n.to_string_lossy().into_owned());

        let content_type = ContentType::parse(XLSX_MIME)
            .map_err(|e| Error::Delivery(format!("invalid attachment content type: {e}")))?;

        let message = self
            .message_builder(subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(body.to_string()))
                    .singlepart(Attachment::new(filename).body(payload, content_type)),
            )?;

        Ok(message)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_report(&self, report: &Path, subject: &str, body: &str) -> Result<()> {
        let message = self.build_report_message(report, subject, body)?;

        debug!(
            recipients = self.recipients.len(),
            attachment = %report.display(),
            "submitting report email"
        );
        self.transport.send(message).await?;
        info!(recipients = self.recipients.len(), "report email accepted for delivery");
        Ok(())
    }

    async fn send_notice(&self, subject: &str, body: &str) -> Result<()> {
        let message = self
            .message_builder(subject)
            .singlepart(SinglePart::plain(body.to_string()))?;

        debug!(recipients = self.recipients.len(), "submitting notice email");
        self.transport.send(message).await?;
        info!(recipients = self.recipients.len(), "notice email accepted for delivery");
        Ok(())
    }
}
