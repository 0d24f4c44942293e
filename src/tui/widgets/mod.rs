//! Reusable TUI widgets

pub mod input;
pub mod notification;

pub use input::{TextInput, TextInputWidget};
pub use notification::{Notification, NotificationType, NotificationWidget};
