//! Interactive numbered menu (the default when no subcommand is given).

use crate::cli::parser::Cli;
use crate::cli::commands::open_worklog;
use crate::config::Config;
use crate::core::Worklog;
use crate::core::lunch::{PRESETS, parse_minutes, preset};
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::prompt::{ask, confirm};
use crate::ui::render;
use crate::utils::date::{format_date, parse_date_arg};
use crate::utils::formatting::describe_lunch;
use crate::utils::time::{format_time, parse_optional_time};
use std::io::{self, BufRead};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut worklog = open_worklog(cli, cfg)?;
    run(&mut worklog, &mut io::stdin().lock())
}

fn print_menu() {
    println!("=== Work Hours Logger ===");
    println!("1. Log today's workday start");
    println!("2. Log today's workday end");
    println!("3. View today's log");
    println!("4. View this week's log");
    println!("5. View all logs");
    println!("6. Edit past day");
    println!("7. Delete day");
    println!("8. Configure lunch break");
    println!("9. Exit");
}

/// One command per cycle until `9` or end of input.
/// Errors are reported and the loop continues; only fatal ones propagate.
pub fn run(worklog: &mut Worklog, input: &mut impl BufRead) -> AppResult<()> {
    loop {
        if let Some(p) = worklog.session() {
            render::session(&p);
        }

        print_menu();
        let Some(choice) = ask(input, "\nEnter your choice (1-9): ")? else {
            println!("Goodbye!");
            return Ok(());
        };

        let result = match choice.as_str() {
            "1" => prompt_start(worklog, input),
            "2" => prompt_end(worklog, input),
            "3" => {
                render::today(&worklog.view_today());
                Ok(())
            }
            "4" => {
                render::week(&worklog.view_week());
                Ok(())
            }
            "5" => {
                render::all(&worklog.view_all());
                Ok(())
            }
            "6" => prompt_edit(worklog, input),
            "7" => prompt_delete(worklog, input),
            "8" => prompt_lunch(worklog, input),
            "9" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => {
                warning("Invalid choice. Please try again.");
                Ok(())
            }
        };

        if let Err(e) = result {
            if e.is_fatal() {
                return Err(e);
            }
            error(e);
        }
    }
}

fn prompt_start(worklog: &mut Worklog, input: &mut impl BufRead) -> AppResult<()> {
    let Some(time) = ask(input, "Enter start time (HH:MM) or press Enter for current time: ")?
    else {
        return Ok(());
    };

    let outcome = worklog.log_start(Some(&time))?;
    render::start(&outcome);
    Ok(())
}

fn prompt_end(worklog: &mut Worklog, input: &mut impl BufRead) -> AppResult<()> {
    let Some(time) = ask(input, "Enter end time (HH:MM) or press Enter for current time: ")?
    else {
        return Ok(());
    };

    let outcome = worklog.log_end(Some(&time))?;
    render::end(&outcome);
    Ok(())
}

fn prompt_edit(worklog: &mut Worklog, input: &mut impl BufRead) -> AppResult<()> {
    if worklog.store().entries.is_empty() {
        info("No work logs found to edit.");
        return Ok(());
    }

    header("Edit Past Day");
    render::available_dates(worklog.store());

    let date = match ask(
        input,
        "\nEnter date to edit (YYYY-MM-DD) or press Enter to cancel: ",
    )? {
        Some(d) if !d.is_empty() => d,
        _ => return Ok(()),
    };
    let d = parse_date_arg(&date)?;

    let current = worklog.store().entry(d).cloned().unwrap_or_default();
    let current_start = current.start.map(format_time).unwrap_or_else(|| "Not set".into());
    let current_end = current.end.map(format_time).unwrap_or_else(|| "Not set".into());

    println!("\nCurrent times for {}:", format_date(d));
    println!("Start: {}", current_start);
    println!("End: {}", current_end);

    let new_start = ask(
        input,
        &format!("Enter new start time (HH:MM) or press Enter to keep '{current_start}': "),
    )?
    .unwrap_or_default();
    // reject a bad start before asking for the end
    parse_optional_time(Some(&new_start))?;

    let new_end = ask(
        input,
        &format!("Enter new end time (HH:MM) or press Enter to keep '{current_end}': "),
    )?
    .unwrap_or_default();

    let outcome = worklog.edit_day(&date, Some(&new_start), Some(&new_end))?;
    render::edit(&outcome);
    Ok(())
}

fn prompt_delete(worklog: &mut Worklog, input: &mut impl BufRead) -> AppResult<()> {
    if worklog.store().entries.is_empty() {
        info("No work logs found to delete.");
        return Ok(());
    }

    header("Delete Day");
    render::available_dates(worklog.store());

    let date = match ask(
        input,
        "\nEnter date to delete (YYYY-MM-DD) or press Enter to cancel: ",
    )? {
        Some(d) if !d.is_empty() => d,
        _ => return Ok(()),
    };
    let d = worklog.existing_date(&date)?;

    if !confirm(
        input,
        &format!("Are you sure you want to delete the entry for {}?", format_date(d)),
    )? {
        info("Deletion cancelled.");
        return Ok(());
    }

    worklog.delete_day(&date)?;
    success(format!("Entry for {} deleted.", format_date(d)));
    Ok(())
}

/// Lunch break sub-menu: five presets, a custom value or cancel.
pub fn prompt_lunch(worklog: &mut Worklog, input: &mut impl BufRead) -> AppResult<()> {
    let current = worklog.store().lunch_minutes();

    header("Configure Lunch Break");
    if current == 0 {
        println!("Current lunch break: Disabled");
    } else {
        println!(
            "Current lunch break: {} ({} minutes)",
            describe_lunch(current),
            current
        );
    }

    println!("\nOptions:");
    for (i, (label, minutes)) in PRESETS.iter().enumerate() {
        println!("{}. {} ({} minutes)", i + 1, label, minutes);
    }
    println!("{}. Custom duration", PRESETS.len() + 1);
    println!("{}. Cancel", PRESETS.len() + 2);

    let Some(choice) = ask(input, "\nSelect an option (1-7): ")? else {
        return Ok(());
    };

    let minutes = match choice.as_str() {
        "6" => {
            let Some(raw) = ask(
                input,
                "Enter custom lunch break duration in minutes (0-120): ",
            )?
            else {
                return Ok(());
            };
            parse_minutes(&raw)?
        }
        "7" => {
            info("Configuration cancelled.");
            return Ok(());
        }
        other => match other.parse::<usize>().ok().and_then(preset) {
            Some(m) => m,
            None => {
                warning("Invalid choice.");
                return Ok(());
            }
        },
    };

    let outcome = worklog.configure_lunch(minutes)?;
    render::lunch(&outcome);
    Ok(())
}
