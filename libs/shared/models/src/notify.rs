/// Blocking user notifications, provided by the embedding UI. Controllers
/// report gateway failures and ask for delete confirmation through this seam
/// instead of owning any widget code.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;
}
