//! Modal dialog surface consumed by the settings host.

use async_trait::async_trait;

/// Modal confirmation and error surface.
///
/// The host awaits the operator's answer; implementations decide how the
/// prompt is rendered.
#[async_trait]
pub trait DialogSurface: Send + Sync {
    /// Show a yes/no prompt and await the operator's answer.
    async fn confirm(&self, title: &str, message: &str) -> bool;

    /// Show a dismissable error message.
    async fn show_error(&self, title: &str, message: &str);
}
