use owo_colors::OwoColorize;
use reqwest::header::AUTHORIZATION;
use reqwest::Request;

use crate::utils::mask_authorization;

/// Header lines as shown to the user, with the API key masked.
pub fn display_headers(request: &Request) -> Vec<String> {
    request
        .headers()
        .iter()
        .map(|(name, value)| {
            let value = value.to_str().unwrap_or("[binary]");
            if *name == AUTHORIZATION {
                format!("{}: {}", name, mask_authorization(value))
            } else {
                format!("{}: {}", name, value)
            }
        })
        .collect()
}

pub fn print_request_box(request: &Request) {
    let method = request.method().as_str();
    let url = request.url().as_str();
    let headers = display_headers(request);

    // Size the box to its content within sane bounds
    let content_plain = format!("{} {}", method, url);
    let max_width = headers
        .iter()
        .map(|h| h.chars().count() + 4)
        .chain(std::iter::once(content_plain.chars().count() + 4))
        .max()
        .unwrap_or(0)
        .clamp(50, 100);

    let title = " Request ";
    let title_padding = (max_width - title.len() - 2) / 2;
    let remaining_padding = max_width - title.len() - 2 - title_padding;

    println!(
        "╭─{}{}{}─╮",
        "─".repeat(title_padding),
        title,
        "─".repeat(remaining_padding)
    );

    let padding = max_width.saturating_sub(content_plain.chars().count() + 2);
    println!("│ {} {}{} │", method.bright_green(), url, " ".repeat(padding));

    for header in &headers {
        let padding = max_width.saturating_sub(header.chars().count() + 2);
        println!("│ {}{} │", header, " ".repeat(padding));
    }

    println!("╰{}╯", "─".repeat(max_width));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::Credential;
    use crate::http::{ApplianceClient, ClientOptions};

    #[test]
    fn test_display_headers_mask_key() {
        let client = ApplianceClient::new(&ClientOptions::default()).unwrap();
        let cred = Credential::new("abc123", "eh.example.com");
        let request = client.build_request("GET", "devices", "", &cred).unwrap();

        let headers = display_headers(&request);
        assert!(headers.contains(&"authorization: ExtraHop ****".to_string()));
        assert!(headers.contains(&"content-type: application/json".to_string()));
        assert!(headers.iter().all(|h| !h.contains("abc123")));
    }
}
