use owo_colors::OwoColorize;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::time::Duration;

pub fn print_response_box(status: StatusCode, duration: Duration, body_size: usize, headers: &HeaderMap) {
    println!("╭─ Response ─────────────────────────────╮");

    let status_text = format!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or(""));
    let status_colored = if status.is_success() {
        status_text.green().to_string()
    } else if status.is_client_error() || status.is_server_error() {
        status_text.red().to_string()
    } else {
        status_text.yellow().to_string()
    };

    println!(
        "│ {} • {}ms • {}            │",
        status_colored,
        duration.as_millis(),
        format_size(body_size)
    );

    for (name, value) in headers {
        if let Ok(value_str) = value.to_str() {
            let display_line = format!("{}: {}", name.as_str(), value_str);
            if display_line.chars().count() <= 38 {
                println!("│ {}         │", display_line);
            } else {
                let truncated: String = display_line.chars().take(35).collect();
                println!("│ {}... │", truncated);
            }
        }
    }

    println!("╰────────────────────────────────────────╯");
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
