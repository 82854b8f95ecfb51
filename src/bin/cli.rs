use cpm_tool::{Task, load_project};
use std::env;
use std::process;
use tracing::info;

const COLUMNS: [&str; 9] = [
    "id",
    "duration",
    "dependencies",
    "early_start",
    "early_finish",
    "late_start",
    "late_finish",
    "total_float",
    "is_critical",
];

fn fmt_opt_i64(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn task_row(task: &Task) -> Vec<String> {
    vec![
        task.id.clone(),
        task.duration.to_string(),
        task.dependencies.join(","),
        fmt_opt_i64(task.early_start),
        fmt_opt_i64(task.early_finish),
        fmt_opt_i64(task.late_start),
        fmt_opt_i64(task.late_finish),
        fmt_opt_i64(task.total_float),
        task.is_critical
            .map(|v| v.to_string())
            .unwrap_or_default(),
    ]
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (ci, cell) in cells.iter().enumerate() {
        out.push(' ');
        out.push_str(cell);
        let pad = widths[ci].saturating_sub(cell.len());
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
}

fn render_task_table(tasks: &[Task]) -> String {
    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    let rows: Vec<Vec<String>> = tasks.iter().map(task_row).collect();

    // Compute column widths
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    // Build horizontal separator
    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &header, &widths);
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn main() {
    cpm_tool::logging::init_logging();

    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: cli <project.json|project.csv>");
            process::exit(2);
        }
    };

    let mut schedule = match load_project(&path) {
        Ok(schedule) => schedule,
        Err(err) => {
            eprintln!("Error loading project: {err}");
            process::exit(1);
        }
    };

    let summary = match schedule.refresh() {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Invalid project graph: {err}");
            process::exit(1);
        }
    };
    info!(project = schedule.project_name(), "{}", summary.to_cli_summary());

    let tasks: Vec<Task> = schedule.tasks().cloned().collect();
    print!("{}", render_task_table(&tasks));
    println!(
        "Earliest time all tasks will be completed: {}",
        summary.earliest_completion
    );
    println!(
        "Latest time all tasks will be completed: {}",
        summary.latest_completion
    );
}
