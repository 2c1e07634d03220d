use crate::models::InventoryItem;
use chrono::NaiveDate;

/// One line per record: `- Milk: 2 pcs (expires 2024-05-01)`.
pub fn format_inventory_summary(items: &[InventoryItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "- {}: {} {} (expires {})",
                item.name,
                item.quantity,
                item.unit,
                item.expiry_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(items: &[InventoryItem], today: NaiveDate) -> String {
    format!(
        "Today is {today}. These ingredients are in my kitchen:\n\
         {summary}\n\n\
         Suggest up to three simple recipes that use the items expiring \
         soonest first. For each recipe give a title, the ingredients from \
         the list it uses and short preparation steps.",
        today = today.format("%Y-%m-%d"),
        summary = format_inventory_summary(items),
    )
}
