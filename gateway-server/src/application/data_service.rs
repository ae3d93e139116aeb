use std::sync::Arc;

use tracing::debug;

use super::clock::{Clock, iso_timestamp};
use crate::data::mock_data::{self, MAX_ITEM_ID};
use crate::domain::data_item::{self, DataItem, DataItemPatch, NewDataItem};
use crate::domain::error::DomainError;
use crate::domain::id::RecordId;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::stats::DataStats;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItemsQuery {
    pub kind: Option<String>,
    pub page: PageRequest,
}

pub struct DataService {
    items: &'static [DataItem],
    stats: &'static DataStats,
    clock: Arc<dyn Clock>,
}

impl DataService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: mock_data::items(),
            stats: mock_data::stats(),
            clock,
        }
    }

    /// Filters by kind first, then pages through the filtered rows.
    pub fn list_items(&self, query: &ListItemsQuery) -> Page<DataItem> {
        match query.kind.as_deref().filter(|k| !k.is_empty()) {
            Some(kind) => {
                let filtered: Vec<DataItem> = self
                    .items
                    .iter()
                    .filter(|item| item.kind == kind)
                    .cloned()
                    .collect();
                query.page.slice(&filtered)
            }
            None => query.page.slice(self.items),
        }
    }

    pub fn get_item(&self, id: RecordId) -> Result<DataItem, DomainError> {
        match id.get() {
            Some(id) if (1..=MAX_ITEM_ID).contains(&id) => Ok(DataItem::detailed(id)),
            _ => Err(DomainError::NotFound {
                message: data_item::NOT_FOUND_MESSAGE,
            }),
        }
    }

    pub fn create_item(&self, req: NewDataItem) -> DataItem {
        let now = self.clock.now();
        let item = req.into_item(now.timestamp_millis(), iso_timestamp(now));
        debug!(item_id = %item.id, kind = %item.kind, "data item created");
        item
    }

    pub fn update_item(&self, id: RecordId, patch: DataItemPatch) -> DataItem {
        patch.apply(id, iso_timestamp(self.clock.now()))
    }

    pub fn delete_item(&self, id: RecordId) {
        debug!(item_id = %id, "data item deleted");
    }

    pub fn stats(&self) -> DataStats {
        self.stats.clone()
    }
}
