//! The interactive session: a product entry loop followed by the main
//! menu loop.

use std::io::{self, BufRead, Write};

use stockbook_catalog::{Catalog, RESTOCK_AMOUNT};
use stockbook_products::Product;

use crate::input::{read_line, read_number, read_yes_no};

/// Drive a full session over `input`/`output` against `catalog`.
pub fn run(
    input: &mut impl BufRead,
    output: &mut impl Write,
    catalog: &mut Catalog,
) -> io::Result<()> {
    writeln!(output, "=== Inventory Management System ===")?;
    entry_loop(input, output, catalog)?;
    menu_loop(input, output, catalog)
}

fn entry_loop(
    input: &mut impl BufRead,
    output: &mut impl Write,
    catalog: &mut Catalog,
) -> io::Result<()> {
    loop {
        if !read_yes_no(input, output, "\nAdd a new product? (yes/no): ")? {
            return Ok(());
        }

        let name = read_line(input, output, "Enter product name: ")?;
        let price: f64 = read_number(input, output, "Enter product price: $", 0.0)?;
        let stock: i64 = read_number(input, output, "Enter stock quantity: ", 0)?;

        let kind = read_line(input, output, "Enter product type (Electronics or Food): ")?;
        let product = match kind.to_lowercase().as_str() {
            "electronics" => {
                let warranty: u32 =
                    read_number(input, output, "Enter warranty period (months): ", 0)?;
                Product::durable(name, price, stock, warranty)
            }
            "food" => {
                let expiration = read_line(input, output, "Enter expiration date (YYYY-MM-DD): ")?;
                Product::perishable(name, price, stock, expiration)
            }
            _ => {
                writeln!(output, "Invalid product type. Skipping...")?;
                continue;
            }
        };

        if let Err(err) = catalog.add_product(product) {
            writeln!(output, "{err}. Skipping...")?;
        }
    }
}

fn menu_loop(
    input: &mut impl BufRead,
    output: &mut impl Write,
    catalog: &mut Catalog,
) -> io::Result<()> {
    loop {
        writeln!(
            output,
            "\n=== Menu ===\n\
             1. Display Inventory\n\
             2. Sell Product\n\
             3. Apply Discount\n\
             4. Restock Low Inventory\n\
             5. Save Inventory to File\n\
             6. Exit"
        )?;
        let option: i64 = read_number(input, output, "Choose an option: ", 1)?;

        match option {
            1 => display_inventory(output, catalog)?,
            2 => sell(input, output, catalog)?,
            3 => discount(input, output, catalog)?,
            4 => restock(input, output, catalog)?,
            5 => {
                catalog.export_snapshot();
                writeln!(output, "Inventory saved.")?;
            }
            6 => {
                writeln!(output, "Exiting program. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Please try again.")?,
        }
    }
}

fn display_inventory(output: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    if catalog.is_empty() {
        return writeln!(output, "Inventory is empty.");
    }
    for description in catalog.list_all() {
        writeln!(output, "{description}")?;
    }
    Ok(())
}

fn sell(
    input: &mut impl BufRead,
    output: &mut impl Write,
    catalog: &mut Catalog,
) -> io::Result<()> {
    writeln!(output, "\n=== Inventory ===")?;
    display_inventory(output, catalog)?;

    let name = read_line(input, output, "Enter product name to sell: ")?;
    let quantity: i64 = read_number(input, output, "Enter quantity to sell: ", 1)?;

    match catalog.sell(&name, quantity) {
        Ok(()) => writeln!(output, "Sale successful!"),
        Err(err) => writeln!(output, "Sale failed: {err}."),
    }
}

fn discount(
    input: &mut impl BufRead,
    output: &mut impl Write,
    catalog: &mut Catalog,
) -> io::Result<()> {
    let name = read_line(input, output, "Enter product name for discount: ")?;
    let percent: f64 = read_number(input, output, "Enter discount percentage: ", 0.0)?;

    match catalog.discount(&name, percent) {
        Ok(()) => writeln!(output, "Discount applied."),
        Err(err) => writeln!(output, "{err}."),
    }
}

fn restock(
    input: &mut impl BufRead,
    output: &mut impl Write,
    catalog: &mut Catalog,
) -> io::Result<()> {
    let threshold: i64 = read_number(input, output, "Enter stock threshold for restocking: ", 0)?;
    for name in catalog.check_and_restock(threshold) {
        writeln!(output, "Restocked {name} by {RESTOCK_AMOUNT} units.")?;
    }
    Ok(())
}
