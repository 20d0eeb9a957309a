use crate::dom::Region;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelCounts {
    pub unread: usize,
    pub read: usize,
}

impl PanelCounts {
    pub fn is_empty(&self) -> bool {
        self.unread == 0 && self.read == 0
    }
}

/// Visibility of every count-driven region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStates {
    pub unread_list: bool,
    pub read_list: bool,
    pub empty_all: bool,
    pub no_new: bool,
    pub no_read: bool,
}

impl EmptyStates {
    pub fn from_counts(counts: PanelCounts) -> Self {
        Self {
            unread_list: counts.unread > 0,
            read_list: counts.read > 0,
            empty_all: counts.is_empty(),
            no_new: counts.unread == 0,
            no_read: counts.read == 0,
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::UnreadList => self.unread_list,
            Region::ReadList => self.read_list,
            Region::EmptyAll => self.empty_all,
            Region::NoNew => self.no_new,
            Region::NoRead => self.no_read,
        }
    }
}
