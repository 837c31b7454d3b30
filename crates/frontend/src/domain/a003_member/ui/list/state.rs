use contracts::shared::envelope::{ListQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MemberListState {
    // filters
    pub keyword: String,
    pub store_id: Option<String>,
    pub sales_id: Option<String>,

    // pagination
    pub page: usize,
    pub page_size: usize,
}

impl Default for MemberListState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            store_id: None,
            sales_id: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MemberListState {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            keyword: if self.keyword.trim().is_empty() {
                None
            } else {
                Some(self.keyword.clone())
            },
            store_id: self.store_id.clone(),
            sales_id: self.sales_id.clone(),
            ..ListQuery::page(self.page, self.page_size)
        }
    }
}

pub fn create_state() -> RwSignal<MemberListState> {
    RwSignal::new(MemberListState::default())
}
