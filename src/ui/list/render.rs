use crate::grocery::GroceryItem;

pub const LIMIT_NOTICE_TITLE: &str = "Maximum Items Reached";
pub const LIMIT_NOTICE_MESSAGE: &str = "Please remove some items before adding more.";

/// One line per item: position, checkbox, name and category.
pub fn render_rows(items: &[&GroceryItem]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(pos, item)| {
            let mark = if item.is_checked() { "x" } else { " " };
            format!("{:>3}. [{}] {} ({})", pos, mark, item.name(), item.category())
        })
        .collect()
}

pub fn limit_notice() -> String {
    format!("{}: {}", LIMIT_NOTICE_TITLE, LIMIT_NOTICE_MESSAGE)
}
