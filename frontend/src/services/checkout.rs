use crate::state::cart::CartLine;

/// WhatsApp number orders are handed off to.
pub const ORDER_PHONE: &str = "212654352802";

/// Human-readable order summary, `%0A`-encoded for the deep link: one
/// line per cart line plus a bolded total.
pub fn order_message(lines: &[CartLine], total: u32) -> String {
    let items = lines
        .iter()
        .map(|line| {
            format!(
                "- {}x {} ({} DH)",
                line.quantity,
                line.product.name,
                line.product.price * line.quantity
            )
        })
        .collect::<Vec<_>>()
        .join("%0A");
    format!(
        "Bonjour, je souhaite commander:%0A%0A{}%0A%0A*Total: {} DH*",
        items, total
    )
}

/// Deep link that opens the order conversation.
pub fn order_url(lines: &[CartLine], total: u32) -> String {
    format!("https://wa.me/{}?text={}", ORDER_PHONE, order_message(lines, total))
}

/// Open the order conversation in a new tab. The caller clears the cart
/// only after this hand-off has been initiated.
pub fn open_order(lines: &[CartLine], total: u32) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&order_url(lines, total), "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{NutritionFacts, Product};
    use std::rc::Rc;

    fn line(name: &str, price: u32, quantity: u32) -> CartLine {
        CartLine {
            product: Rc::new(Product {
                id: name.to_string(),
                slug: name.to_string(),
                name: name.to_string(),
                category: String::new(),
                sub_category: String::new(),
                price,
                description: String::new(),
                full_description: String::new(),
                image: String::new(),
                nutrition: NutritionFacts::default(),
                ingredients: vec![],
                created_at: String::new(),
            }),
            quantity,
        }
    }

    #[test]
    fn test_order_message_lists_each_line_and_total() {
        let lines = vec![line("Almond Energy Balls", 45, 2), line("Green Detox Juice", 35, 1)];
        let message = order_message(&lines, 125);

        assert!(message.starts_with("Bonjour, je souhaite commander:%0A%0A"));
        assert!(message.contains("- 2x Almond Energy Balls (90 DH)"));
        assert!(message.contains("- 1x Green Detox Juice (35 DH)"));
        assert!(message.ends_with("*Total: 125 DH*"));
    }

    #[test]
    fn test_order_url_targets_the_store_number() {
        let lines = vec![line("Granola", 65, 1)];
        let url = order_url(&lines, 65);
        assert!(url.starts_with("https://wa.me/212654352802?text=Bonjour"));
    }
}
