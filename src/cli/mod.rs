use colored::Colorize;
use macros_rs::{crashln, string, ternary};
use serde::Serialize;

use taskmgr::{collect_stats, helpers, list_processes, list_third_party_processes, start_process, stop_process, Native, ProcessInfo, QueryError};

use tabled::{
    settings::{
        object::{Columns, Rows},
        style::{BorderColor, Style},
        themes::Colorization,
        Color, Modify, Rotate, Width,
    },
    Table, Tabled,
};

pub fn get_version(short: bool) -> String {
    match short {
        true => format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        false => format!("{} [{}]", env!("CARGO_PKG_VERSION"), ternary!(cfg!(debug_assertions), "debug", "release")),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(err) => crashln!("{} Cannot serialize output.\n{}", *helpers::FAIL, string!(err).white()),
    }
}

fn query<T>(result: Result<T, QueryError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => crashln!("{} {}", *helpers::FAIL, string!(err).white()),
    }
}

fn colored_status(status: &str) -> String {
    match status {
        "running" => status.green().bold().to_string(),
        "zombie" | "dead" | "unknown" => status.red().bold().to_string(),
        "stopped" | "tracingstop" => status.yellow().bold().to_string(),
        _ => status.white().to_string(),
    }
}

pub fn list(format: &String, surface: bool) {
    #[derive(Tabled, Debug)]
    struct ProcessItem {
        pid: String,
        name: String,
        status: String,
        cpu: String,
        mem: String,
        uptime: String,
    }

    let processes: Vec<ProcessInfo> = match surface {
        true => query(list_third_party_processes(&Native)),
        false => query(list_processes(&Native)),
    };

    match format.as_str() {
        "json" => return print_json(&processes),
        "raw" => return println!("{:?}", processes),
        _ => {}
    }

    if processes.is_empty() {
        return println!("{} Process table empty", *helpers::SUCCESS);
    }

    let items: Vec<ProcessItem> = processes
        .iter()
        .map(|process| ProcessItem {
            pid: format!("{}  ", process.pid).cyan().bold().to_string(),
            name: format!("{}   ", process.name),
            status: colored_status(&process.status),
            cpu: format!("{:.2}%   ", process.cpu_percent),
            mem: format!("{:.2}%   ", process.memory_percent),
            uptime: format!("{}  ", helpers::format_uptime(process.create_time)),
        })
        .collect();

    let table = Table::new(&items)
        .with(Style::rounded().remove_verticals())
        .with(BorderColor::filled(Color::FG_BRIGHT_BLACK))
        .with(Colorization::exact([Color::FG_BRIGHT_CYAN], Rows::first()))
        .with(Modify::new(Columns::single(1)).with(Width::truncate(35).suffix("...  ")))
        .to_string();

    println!("{table}");
}

pub fn stats(format: &String) {
    #[derive(Clone, Debug, Tabled)]
    struct Info {
        #[tabled(rename = "cpu percent")]
        cpu_percent: String,
        #[tabled(rename = "cpu count")]
        cpu_count: u64,
        #[tabled(rename = "memory total")]
        total: String,
        #[tabled(rename = "memory available")]
        available: String,
        #[tabled(rename = "memory used")]
        used: String,
        #[tabled(rename = "memory percent")]
        used_percent: String,
    }

    let stats = query(collect_stats(&Native));

    match format.as_str() {
        "json" => return print_json(&stats),
        "raw" => return println!("{:?}", stats),
        _ => {}
    }

    let memory = &stats.memory_info;
    let data = vec![Info {
        cpu_count: stats.cpu_count,
        cpu_percent: format!("{:.2}%", stats.cpu_percent),
        total: helpers::format_memory(memory.total),
        available: helpers::format_memory(memory.available),
        used: helpers::format_memory(memory.used),
        used_percent: format!("{:.2}%", memory.used_percent),
    }];

    let table = Table::new(data)
        .with(Rotate::Left)
        .with(Style::rounded().remove_horizontals())
        .with(Colorization::exact([Color::FG_CYAN], Columns::first()))
        .with(BorderColor::filled(Color::FG_BRIGHT_BLACK))
        .to_string();

    println!("{}\n{table}\n", "System information".on_bright_white().black());
}

pub fn start(command: &String, args: &[String]) {
    match start_process(command, args) {
        Ok(pid) => println!("{} Process started successfully (pid={pid}, command={command})", *helpers::SUCCESS),
        Err(err) => crashln!("{} {}", *helpers::FAIL, string!(err).white()),
    }
}

pub fn stop(pid: i64) {
    match stop_process(pid) {
        Ok(()) => println!("{} Process {pid} stopped successfully", *helpers::SUCCESS),
        Err(err) => crashln!("{} {}", *helpers::FAIL, string!(err).white()),
    }
}
