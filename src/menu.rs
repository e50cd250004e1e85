//! State model behind the `paginated-menu` widget: a set of named pages of
//! which at most one is shown.

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageVisibility {
    pub page: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PaginatedMenu {
    pages: Vec<String>,
    selected: Option<String>,
}

impl PaginatedMenu {
    /// `selected` is the initial `data-selected-page`, if any.
    pub fn new<I, S>(pages: I, selected: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            selected,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn select(&mut self, page: impl Into<String>) {
        let page = page.into();
        debug!("menu: selecting page {:?}", page);
        self.selected = Some(page);
    }

    /// A click whose target carries no `data-change-page` changes nothing.
    pub fn click(&mut self, change_page: Option<&str>) {
        match change_page {
            Some(page) if !page.is_empty() => self.select(page),
            _ => {}
        }
    }

    pub fn is_visible(&self, page: &str) -> bool {
        self.selected.as_deref() == Some(page)
    }

    pub fn visibility(&self) -> Vec<PageVisibility> {
        self.pages
            .iter()
            .map(|page| PageVisibility {
                page: page.clone(),
                hidden: !self.is_visible(page),
            })
            .collect()
    }
}
