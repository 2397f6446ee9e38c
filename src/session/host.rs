use std::path::PathBuf;

use crate::foundation::core::Rgb8;

/// Services the editing host provides to a [`crate::Tracker`].
///
/// Every call happens on the host's dispatch thread, between or during the tracker's own
/// callbacks; implementations never see concurrent use.
pub trait Host {
    /// Pixel type of the host's frame buffer.
    type Pixel: Copy;

    /// Convert a user RGB choice into the frame buffer's device color.
    fn device_color(&self, rgb: Rgb8) -> Self::Pixel;

    /// Whether this filter is the active one in the host UI.
    fn is_filter_active(&self) -> bool;

    /// Whether the host is in an editing/preview context (as opposed to final output).
    fn is_editing(&self) -> bool;

    /// Ask the operator for a destination path. `None` means the dialog was dismissed.
    fn prompt_save_path(&mut self, filter: &str, default_name: &str) -> Option<PathBuf>;

    /// Replace the filter window title / status line.
    fn set_status(&mut self, text: &str);

    /// Show a modal informational message.
    fn message_box(&mut self, title: &str, body: &str);
}
