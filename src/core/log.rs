use crate::errors::AppResult;
use crate::store::audit::{AuditRecord, read_all};
use ansi_term::Colour;
use std::path::Path;

/// Colour of the operation column.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "end" => Colour::Cyan,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "lunch" => Colour::Purple,
        "rollover" => Colour::RGB(255, 153, 51),
        "backup" | "export" => Colour::Blue,
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store_path: &Path) -> AppResult<()> {
        let entries: Vec<AuditRecord> = read_all(store_path)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Internal log:\n");

        for (i, e) in entries.iter().enumerate() {
            let visible = truncate(&op_target(e), 40);
            let pad = op_w.saturating_sub(visible.chars().count());

            // only the operation word is coloured
            let coloured = match visible.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                }
                None => color_for_operation(&e.operation).paint(visible.clone()).to_string(),
            };

            println!(
                "{:>id_w$}  {:<date_w$}  {}{}  {}",
                i + 1,
                e.date,
                coloured,
                " ".repeat(pad),
                e.message,
                id_w = id_w,
                date_w = date_w,
            );
        }

        Ok(())
    }
}

fn op_target(e: &AuditRecord) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
