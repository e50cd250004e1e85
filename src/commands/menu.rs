use crate::OutputFormat;
use crate::menu::PaginatedMenu;
use anyhow::Result;

/// Show which pages are visible after the given clicks
pub fn menu(
    pages: &[String],
    selected: Option<String>,
    clicks: &[String],
    format: OutputFormat,
) -> Result<()> {
    if pages.is_empty() {
        anyhow::bail!("At least one page name is required");
    }

    let mut menu = PaginatedMenu::new(pages.iter().cloned(), selected);
    for page in clicks {
        menu.click(Some(page.as_str()));
    }

    format.emit(&menu.visibility(), |pages| {
        for page in pages {
            let marker = if page.hidden { " " } else { "*" };
            println!("{} {}", marker, page.page);
        }
    })
}
