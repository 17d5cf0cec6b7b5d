/// Sink for controller status and error messages
pub trait Reporter: Send + Sync {
    fn report(&self, message: &str);
    fn report_error(&self, message: &str);
}
