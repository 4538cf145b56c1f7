//! Pharmacy inventory lookup over a [`ChainedTable`].
//!
//! Reads `N`, then `N` records `NAME pos price stock` (names are uppercased,
//! `pos` is `1` for POS, anything else for NEG) into a table of `2N+1`
//! buckets. Then consumes query pairs, a drug name line followed by an order
//! quantity line, until the line `END`: an unknown drug prints `not found`;
//! a known one prints its record, then either `order placed` (decrementing
//! the stock) or `insufficient stock`.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};

use hashtab::ChainedTable;

#[derive(Debug, Clone)]
struct Drug {
    positive: bool,
    price: u32,
    stock: u32,
}

impl fmt::Display for Drug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            if self.positive { "POS" } else { "NEG" },
            self.price,
            self.stock
        )
    }
}

fn next_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String, Box<dyn Error>> {
    Ok(lines.next().ok_or("unexpected end of input")??)
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let n: usize = next_line(&mut lines)?.trim().parse()?;
    let mut table = ChainedTable::with_capacity(2 * n + 1);
    for _ in 0..n {
        let line = next_line(&mut lines)?;
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or("missing drug name")?.to_uppercase();
        let positive = parts.next().ok_or("missing POS/NEG flag")? == "1";
        let price: u32 = parts.next().ok_or("missing price")?.parse()?;
        let stock: u32 = parts.next().ok_or("missing stock")?.parse()?;
        table.insert(
            name,
            Drug {
                positive,
                price,
                stock,
            },
        );
    }

    loop {
        let line = next_line(&mut lines)?;
        let query = line.trim();
        if query == "END" {
            break;
        }
        let name = query.to_uppercase();
        let quantity: u32 = next_line(&mut lines)?.trim().parse()?;

        // Clone out of the table so the order below can update it.
        let found = table
            .search(&name)
            .map(|entry| (entry.value().clone(), entry.to_string()));
        match found {
            None => println!("not found"),
            Some((drug, rendered)) => {
                println!("{}", name);
                println!("{}", if drug.positive { "POS" } else { "NEG" });
                println!("{}", drug.price);
                println!("{}", drug.stock);
                println!("{}", rendered);
                if quantity <= drug.stock {
                    let updated = Drug {
                        stock: drug.stock - quantity,
                        ..drug
                    };
                    table.insert(name, updated);
                    println!("order placed");
                } else {
                    println!("insufficient stock");
                }
            }
        }
    }
    Ok(())
}
