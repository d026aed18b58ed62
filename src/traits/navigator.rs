/// Client-wide reaction to the backend reporting that there is no valid session.
pub trait Navigator: Send + Sync {
    /// Drop the current session and send the user back to the unauthenticated entry point.
    fn invalidate_session(&self);
}
