//! Menu-driven controller. Thin by design: every choice routes to one
//! App operation, and any single failure is reported without ending
//! the session.

use crate::app::App;
use crate::core::analysis::Analysis;
use crate::core::report::ProjectSummary;
use crate::db::Repository;
use crate::errors::AppResult;
use crate::models::{Client, ProjectWithClient};
use crate::ui::{messages, prompt};
use crate::utils::table::{Column, Table};
use std::path::Path;

/// Report an operation's outcome at the boundary and keep going.
fn attempt(result: AppResult<()>) {
    if let Err(e) = result {
        messages::error(e);
    }
}

pub fn main_menu<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    loop {
        println!("\n===== Freelance Time Tracker =====");
        println!("1. Manage Clients");
        println!("2. Manage Projects");
        println!("3. Track Time");
        println!("4. Reporting & Invoicing");
        println!("5. Analyze Data");
        println!("6. Exit");

        let Some(choice) = prompt::read_line("Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => client_menu(app)?,
            "2" => project_menu(app)?,
            "3" => time_tracking_menu(app)?,
            "4" => reporting_menu(app)?,
            "5" => attempt(run_analysis(app)),
            "6" => {
                println!("Exiting. Goodbye!");
                break;
            }
            _ => messages::warning("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

fn client_menu<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    loop {
        messages::header("Client Management");
        println!("1. Add Client");
        println!("2. List Clients");
        println!("3. Back to Main Menu");

        let Some(choice) = prompt::read_line("Enter your choice: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => attempt(add_client(app)),
            "2" => attempt(list_clients(app).map(|_| ())),
            "3" => return Ok(()),
            _ => messages::warning("Invalid choice."),
        }
    }
}

fn project_menu<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    loop {
        messages::header("Project Management");
        println!("1. Add Project");
        println!("2. List Projects");
        println!("3. Back to Main Menu");

        let Some(choice) = prompt::read_line("Enter your choice: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => attempt(add_project(app)),
            "2" => attempt(list_projects(app).map(|_| ())),
            "3" => return Ok(()),
            _ => messages::warning("Invalid choice."),
        }
    }
}

fn time_tracking_menu<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    loop {
        messages::header("Time Tracking");
        println!("1. Start Timer");
        println!("2. Stop Timer");
        println!("3. View Active Timers");
        println!("4. Back to Main Menu");

        let Some(choice) = prompt::read_line("Enter your choice: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => attempt(start_timer(app)),
            "2" => attempt(stop_timer(app)),
            "3" => view_active_timers(app),
            "4" => return Ok(()),
            _ => messages::warning("Invalid choice."),
        }
    }
}

fn reporting_menu<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    loop {
        messages::header("Reporting & Invoicing");
        println!("1. Generate Project Summary");
        println!("2. Export Invoice to CSV");
        println!("3. Import Time Entries from JSON");
        println!("4. Back to Main Menu");

        let Some(choice) = prompt::read_line("Enter your choice: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => attempt(show_summary(app)),
            "2" => attempt(export_invoice(app)),
            "3" => attempt(import_entries(app)),
            "4" => return Ok(()),
            _ => messages::warning("Invalid choice."),
        }
    }
}

// ---------------------------
// Clients
// ---------------------------

fn add_client<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    let name = prompt::read_text("Enter client name: ")?;
    app.add_client(&name)?;
    messages::success(format!("Client '{}' added successfully.", name.trim()));
    Ok(())
}

/// List clients; returns whether any exist so callers can guard flows
/// that need at least one.
fn list_clients<R: Repository>(app: &App<R>) -> AppResult<bool> {
    let clients: Vec<Client> = app.list_clients()?;
    if clients.is_empty() {
        messages::info("No clients found.");
        return Ok(false);
    }

    messages::header("Clients");
    let mut table = Table::new(vec![Column::new("ID", 6), Column::new("Name", 30)]);
    for c in &clients {
        table.add_row(vec![c.id.to_string(), c.name.clone()]);
    }
    print!("{}", table.render());
    Ok(true)
}

// ---------------------------
// Projects
// ---------------------------

fn add_project<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    if !list_clients(app)? {
        messages::warning("Please add a client first.");
        return Ok(());
    }

    let client_id = prompt::read_id("Enter the client ID for this project: ")?;
    let name = prompt::read_text("Enter project name: ")?;
    let rate = prompt::read_f64("Enter hourly rate for this project: ")?;

    app.add_project(&name, rate, client_id)?;
    messages::success(format!("Project '{}' added successfully.", name.trim()));
    Ok(())
}

fn list_projects<R: Repository>(app: &App<R>) -> AppResult<bool> {
    let projects: Vec<ProjectWithClient> = app.list_projects()?;
    if projects.is_empty() {
        messages::info("No projects found.");
        return Ok(false);
    }

    messages::header("Projects");
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("Name", 24),
        Column::new("Client", 24),
        Column::new("Rate", 12),
    ]);
    for p in &projects {
        table.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            p.client_name.clone(),
            format!("${:.2}/hr", p.hourly_rate),
        ]);
    }
    print!("{}", table.render());
    Ok(true)
}

// ---------------------------
// Time tracking
// ---------------------------

fn start_timer<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    if !list_projects(app)? {
        messages::warning("Please add a project first.");
        return Ok(());
    }

    let project_id = prompt::read_id("Enter the project ID to start tracking: ")?;
    let task = prompt::read_text("Enter a brief description for this task: ")?;

    let started = app.start_timer(project_id, &task)?;
    messages::success(format!(
        "Timer started for project ID {} at {}",
        project_id,
        started.format("%H:%M:%S")
    ));
    Ok(())
}

fn stop_timer<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    if !app.has_active_timers() {
        messages::info("No active timers to stop.");
        return Ok(());
    }

    view_active_timers(app);
    let project_id = prompt::read_id("Enter the project ID to stop the timer for: ")?;

    let entry = app.stop_timer(project_id)?;
    messages::success(format!(
        "Timer stopped. Logged {:.2} hours for project ID {}.",
        entry.duration_hours, project_id
    ));
    Ok(())
}

fn view_active_timers<R: Repository>(app: &App<R>) {
    let timers = app.active_timers();
    if timers.is_empty() {
        messages::info("No active timers.");
        return;
    }

    messages::header("Active Timers");
    for t in &timers {
        println!(
            "Project ID: {}, Task: {}, Started: {}, Elapsed: {:.2} h",
            t.project_id,
            t.task,
            t.started_at.format("%H:%M:%S"),
            t.elapsed_hours
        );
    }
}

// ---------------------------
// Reporting & invoicing
// ---------------------------

fn show_summary<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    if !list_projects(app)? {
        return Ok(());
    }

    let project_id = prompt::read_id("Enter the project ID for the summary: ")?;
    let summary = app.project_summary(project_id)?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &ProjectSummary) {
    messages::header(format!("Summary for Project: {}", summary.project_name));
    println!("Client: {}", summary.client_name);
    println!("Hourly Rate: ${:.2}/hr", summary.hourly_rate);

    println!("\nTime Entries:");
    for line in &summary.lines {
        println!(
            "  - Task: {}, Duration: {:.2} hours (from {} to {})",
            line.task,
            line.duration_hours,
            line.start_time.format("%Y-%m-%d %H:%M"),
            line.end_time.format("%H:%M")
        );
    }

    println!("\n--- Totals ---");
    println!("Total Billable Hours: {:.2}", summary.total_hours);
    println!("Total Project Cost: ${:.2}", summary.total_cost);
}

fn export_invoice<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    if !list_projects(app)? {
        return Ok(());
    }

    let project_id = prompt::read_id("Enter the project ID to invoice: ")?;
    let path = app.export_invoice(project_id)?;
    messages::success(format!(
        "Invoice successfully exported to {}",
        path.display()
    ));
    Ok(())
}

fn import_entries<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    let path = prompt::read_text("Enter the full path to the JSON file to import: ")?;
    let report = app.import_from_file(Path::new(&path))?;

    for skip in &report.skipped {
        messages::warning(format!("Skipping invalid {skip}"));
    }
    messages::success(format!(
        "Successfully imported {} time entries into the database.",
        report.imported
    ));
    Ok(())
}

// ---------------------------
// Analysis
// ---------------------------

fn run_analysis<R: Repository>(app: &mut App<R>) -> AppResult<()> {
    let analysis = app.analyze()?;
    if analysis.is_empty() {
        messages::info("No time entries to analyze.");
        return Ok(());
    }
    print_analysis(&analysis);
    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    messages::header("Data Analysis");

    println!("\nTotal Billable Hours per Project:");
    for (name, hours) in &analysis.hours_by_project {
        println!("  {name}: {hours:.2}");
    }

    println!("\nTotal Earnings per Project:");
    for (name, cost) in &analysis.cost_by_project {
        println!("  {name}: ${cost:.2}");
    }

    println!("\nWork Trend (Total Hours per Day):");
    for (date, hours) in &analysis.hours_by_date {
        println!("  {date}: {hours:.2}");
    }
}
