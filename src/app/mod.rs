pub mod controller;
pub mod events;
pub mod states;

pub use controller::{Completion, NotificationPanelController};
pub use events::{Control, PanelEvent};
pub use states::{EmptyStates, PanelCounts};
