use crate::error::{CatalogError, Result};
use crate::pagination::{can_go_next, can_go_previous, PaginationController};
use dex_protocol::text::title_case;
use dex_protocol::{sprite_url, CatalogListing, NamedResource};
use serde::{Deserialize, Serialize};

/// One entry of a catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub name: String,

    /// Id parsed from the entry's reference URL; `None` when it has no numeric tail.
    pub reference_id: Option<u32>,
}

impl CatalogSummary {
    pub fn from_resource(resource: &NamedResource) -> Self {
        Self {
            name: resource.name.clone(),
            reference_id: resource.reference_id(),
        }
    }

    pub fn title(&self) -> String {
        title_case(&self.name)
    }

    /// Entries without an id cannot be opened and have no sprite.
    pub fn is_selectable(&self) -> bool {
        self.reference_id.is_some()
    }

    pub fn sprite_url(&self, sprite_base: &str) -> Option<String> {
        self.reference_id.map(|id| sprite_url(sprite_base, id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub items: Vec<CatalogSummary>,
    pub total_count: u64,
    pub page_index: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl CatalogPage {
    /// Build a page from a fetched listing, enforcing `1 <= page_index <= max(total_pages, 1)`.
    pub fn from_listing(
        listing: &CatalogListing,
        page_index: u32,
        pagination: &PaginationController,
    ) -> Result<Self> {
        if page_index < 1 {
            return Err(CatalogError::InvalidPage(page_index));
        }
        let total_pages = pagination.derive_totals(listing.count);
        if page_index > total_pages.max(1) {
            log::debug!(
                "Listing of {} entries has {total_pages} pages; page {page_index} is past the end",
                listing.count
            );
            return Err(CatalogError::PageOutOfRange {
                page_index,
                total_pages,
            });
        }

        let items: Vec<CatalogSummary> = listing
            .results
            .iter()
            .map(CatalogSummary::from_resource)
            .collect();
        let unselectable = items.iter().filter(|item| !item.is_selectable()).count();
        if unselectable > 0 {
            log::debug!("Page {page_index}: {unselectable} entries have no numeric id");
        }

        Ok(Self {
            items,
            total_count: listing.count,
            page_index,
            page_size: pagination.page_size(),
            total_pages,
        })
    }

    pub fn can_go_previous(&self) -> bool {
        can_go_previous(self.page_index)
    }

    pub fn can_go_next(&self) -> bool {
        can_go_next(self.page_index, self.total_pages)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
