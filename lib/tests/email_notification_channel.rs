
#[cfg(test)]
mod test {
    use crate::commons::{DefaultData, SesMock, SesTestContext};
    use lambdacron::email_notification_channel::{EmailNotificationChannel, EmailTransport, OutgoingEmail};
    use lambdacron::error::ErrorKind;
    use lambdacron::notification::RenderedSet;
    use lambdacron::notification_channel::NotificationChannel;
    use serde_json::Map;
    use test_context::test_context;

    fn rendered() -> RenderedSet {
        RenderedSet::from([
            ("subject".to_string(), "Backup finished".to_string()),
            ("text".to_string(), "All good".to_string()),
            ("html".to_string(), "<p>All good</p>".to_string()),
        ])
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            source: "alerts@example.com".to_string(),
            to_addresses: vec!["ops@example.com".to_string()],
            reply_to_addresses: None,
            configuration_set_name: None,
            subject: "Backup finished".to_string(),
            text: "All good".to_string(),
            html: "<p>All good</p>".to_string(),
        }
    }

    #[test_context(SesTestContext)]
    #[tokio::test]
    async fn should_return_ses_message_id(ctx: &mut SesTestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SesMock::accept(ctx, "0100-abc").await;

        let message_id = ctx.ses_client.send_email(&email()).await.map_err(|error| error.to_string())?;

        assert_eq!("0100-abc", message_id);

        Ok(())
    }

    #[test_context(SesTestContext)]
    #[tokio::test]
    async fn should_expose_ses_rejection_details(ctx: &mut SesTestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SesMock::reject(ctx, "req-42").await;

        let error = ctx.ses_client.send_email(&email()).await.unwrap_err();

        assert_eq!(Some("MessageRejected".to_string()), error.error_code);
        assert_eq!(Some("req-42".to_string()), error.request_id);
        assert_eq!(Some(400), error.http_status);

        Ok(())
    }

    #[test_context(SesTestContext)]
    #[tokio::test]
    async fn should_fail_notification_when_ses_rejects(ctx: &mut SesTestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SesMock::reject(ctx, "req-43").await;

        let channel = EmailNotificationChannel::new(ctx.ses_client.clone(), "alerts@example.com", vec!["ops@example.com".to_string()])?;

        let error = channel.notify(&Map::new(), &rendered(), &DefaultData::sqs_message(Some("msg-1"), "{}")).await.unwrap_err();

        assert_eq!(ErrorKind::Delivery, error.kind);

        Ok(())
    }

    #[test_context(SesTestContext)]
    #[tokio::test]
    async fn should_notify_through_ses(ctx: &mut SesTestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SesMock::accept(ctx, "0100-def").await;

        let channel = EmailNotificationChannel::new(ctx.ses_client.clone(), "alerts@example.com", vec!["ops@example.com".to_string()])?
            .with_reply_to(vec!["noreply@example.com".to_string()]);

        channel.notify(&Map::new(), &rendered(), &DefaultData::sqs_message(Some("msg-1"), "{}")).await?;

        Ok(())
    }

    #[tokio::test]
    async fn should_require_sender_and_recipients() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = <SesTestContext as test_context::AsyncTestContext>::setup().await;

        let no_recipients = EmailNotificationChannel::new(ctx.ses_client.clone(), "alerts@example.com", vec![]);
        assert_eq!(ErrorKind::Configuration, no_recipients.err().map(|error| error.kind).unwrap());

        let no_sender = EmailNotificationChannel::new(ctx.ses_client.clone(), "", vec!["ops@example.com".to_string()]);
        assert_eq!(ErrorKind::Configuration, no_sender.err().map(|error| error.kind).unwrap());

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_rendered_template_missing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = <SesTestContext as test_context::AsyncTestContext>::setup().await;

        let channel = EmailNotificationChannel::new(ctx.ses_client.clone(), "alerts@example.com", vec!["ops@example.com".to_string()])?;

        let mut partial = rendered();
        partial.remove("html");

        let error = channel.notify(&Map::new(), &partial, &DefaultData::sqs_message(Some("msg-1"), "{}")).await.unwrap_err();

        assert_eq!(ErrorKind::Delivery, error.kind);
        assert!(ctx.mock_server.received_requests().await.unwrap_or_default().is_empty());

        Ok(())
    }
}
