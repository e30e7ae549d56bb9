use contact_core::message::OutboundMessage;

pub trait MailSender {
    fn send_email(&self, message: &OutboundMessage) -> Result<(), String>;
}
