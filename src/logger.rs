use std::io::Write;

// Diagnostics go to stderr; the icon file is the only thing written to disk.

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_line(line: &str) -> String {
    format!("[{}] {}", timestamp(), line)
}

pub fn log_line(line: &str) {
    let _ = writeln!(std::io::stderr().lock(), "{}", format_line(line));
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}
