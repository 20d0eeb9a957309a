pub mod notification;
pub mod responses;

pub use notification::{CardSlot, ListKind, NotificationId};
