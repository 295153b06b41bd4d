use super::{check, ui};
use crate::core::{FundDiscount, FundListProvider, PriceProvider};
use anyhow::Result;
use comfy_table::Cell;

pub fn display_as_table(discounts: &[FundDiscount], threshold: i64) -> String {
    if discounts.is_empty() {
        return ui::style_text(
            &format!("No funds at or above {threshold}% discount"),
            ui::StyleType::Subtle,
        );
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Symbol"),
        ui::header_cell("NAV"),
        ui::header_cell("Price"),
        ui::header_cell("Discount (%)"),
    ]);

    for d in discounts {
        table.add_row(vec![
            Cell::new(&d.symbol),
            ui::value_cell(&d.nav),
            ui::value_cell(&d.price),
            ui::discount_cell(d.discount),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text(
            &format!("Funds at or above {threshold}% discount"),
            ui::StyleType::Title
        ),
        table
    )
}

pub async fn run(
    fund_provider: &(dyn FundListProvider + Send + Sync),
    price_provider: &(dyn PriceProvider + Send + Sync),
    threshold: i64,
) -> Result<()> {
    let discounts = check::find_qualifying(fund_provider, price_provider, threshold).await?;
    println!("{}", display_as_table(&discounts, threshold));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_as_table() {
        let discounts = vec![FundDiscount {
            symbol: "GUT".to_string(),
            nav: "1.20".to_string(),
            price: "1.00".to_string(),
            discount: 20,
        }];

        let output = console::strip_ansi_codes(&display_as_table(&discounts, 10)).to_string();
        assert!(output.contains("Funds at or above 10% discount"));
        assert!(output.contains("Symbol"));
        assert!(output.contains("Discount (%)"));
        assert!(output.contains("GUT"));
        assert!(output.contains("1.20"));
        assert!(output.contains("20%"));
    }

    #[test]
    fn test_display_empty() {
        let output = console::strip_ansi_codes(&display_as_table(&[], 15)).to_string();
        assert_eq!(output, "No funds at or above 15% discount");
    }
}
