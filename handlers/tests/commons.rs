use async_trait::async_trait;
use lambdacron::email_notification_channel::{EmailTransport, OutgoingEmail, TransportError};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait]
impl EmailTransport for RecordingTransport {
    async fn send_email(
        &self,
        email: &OutgoingEmail,
    ) -> Result<String, TransportError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok("ses-1".to_string())
    }
}

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
