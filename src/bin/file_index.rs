//! File/keyword index over a [`ProbingTable`].
//!
//! Reads `N`, then `N` records `path file keyword` into a table of `2N+1`
//! slots mapping each keyword to its `;`-joined list of `path file`
//! occurrences. Then reads `M` operations `add|find|delete path file
//! keyword`: `add` appends an occurrence, `find` prints `true`/`false` for
//! exact occurrence membership, `delete` removes the occurrence and drops
//! the keyword once its list empties. A final keyword line is wrapped as
//! `(keyword)` and looked up, printing `/` when absent or every occurrence
//! echoed with the wrapped keyword otherwise.

use std::error::Error;
use std::io::{self, BufRead};

use hashtab::ProbingTable;

fn next_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String, Box<dyn Error>> {
    Ok(lines.next().ok_or("unexpected end of input")??)
}

fn add_occurrence(
    index: &mut ProbingTable<String, String>,
    keyword: String,
    occurrence: &str,
) -> hashtab::Result<()> {
    let value = match index.get(&keyword) {
        Some(existing) => format!("{};{}", existing, occurrence),
        None => occurrence.to_string(),
    };
    index.insert(keyword, value)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let n: usize = next_line(&mut lines)?.trim().parse()?;
    let mut index: ProbingTable<String, String> = ProbingTable::with_capacity(2 * n + 1);
    for _ in 0..n {
        let line = next_line(&mut lines)?;
        let mut parts = line.split_whitespace();
        let path = parts.next().ok_or("missing path")?;
        let file = parts.next().ok_or("missing file")?;
        let keyword = parts.next().ok_or("missing keyword")?.to_string();
        let occurrence = format!("{} {}", path, file);
        add_occurrence(&mut index, keyword, &occurrence)?;
    }

    let m: usize = next_line(&mut lines)?.trim().parse()?;
    for _ in 0..m {
        let line = next_line(&mut lines)?;
        let mut parts = line.split_whitespace();
        let op = parts.next().ok_or("missing operation")?;
        let path = parts.next().ok_or("missing path")?;
        let file = parts.next().ok_or("missing file")?;
        let keyword = parts.next().ok_or("missing keyword")?.to_string();
        let occurrence = format!("{} {}", path, file);

        match op {
            "add" => add_occurrence(&mut index, keyword, &occurrence)?,
            "find" => {
                let present = match index.search(&keyword) {
                    None => false,
                    Some(slot) => index
                        .entry(slot)
                        .map(|e| e.value().split(';').any(|occ| occ == occurrence))
                        .unwrap_or(false),
                };
                println!("{}", present);
            }
            "delete" => {
                if let Some(list) = index.get(&keyword).cloned() {
                    let remaining: Vec<&str> = list
                        .split(';')
                        .filter(|occ| *occ != occurrence.as_str())
                        .collect();
                    if remaining.is_empty() {
                        index.delete(&keyword);
                    } else {
                        index.insert(keyword, remaining.join(";"))?;
                    }
                }
            }
            other => return Err(format!("unknown operation: {}", other).into()),
        }
    }

    let keyword = format!("({})", next_line(&mut lines)?.trim());
    match index.get(&keyword) {
        None => println!("/"),
        Some(list) => {
            let out: Vec<String> = list
                .split(';')
                .map(|occ| format!("{} {}", occ, keyword))
                .collect();
            println!("{}", out.join(" "));
        }
    }
    Ok(())
}
