use reqwest;
use std::io;
use std::path::Path;
use tokio;

/// Fetch a page and return its body as text.
pub async fn fetch_page_text(client: &reqwest::Client, url: &str) -> io::Result<String> {
    let response = client
        .get(url)
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Request error: {}", e)))?;

    if !response.status().is_success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("HTTP {} for URL: {}", response.status(), url),
        ));
    }

    response.text().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to read response body: {}", e),
        )
    })
}

/// Download a single icon and write its bytes to `file_path`.
pub async fn download_icon(
    client: &reqwest::Client,
    url: &str,
    file_path: &Path,
) -> io::Result<()> {
    let response = client
        .get(url)
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Request error: {}", e)))?;

    if !response.status().is_success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("HTTP {} for URL: {}", response.status(), url),
        ));
    }

    let bytes = response.bytes().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to read response bytes: {}", e),
        )
    })?;

    tokio::fs::write(file_path, &bytes).await.map_err(|e| {
        io::Error::new(io::ErrorKind::Other, format!("Failed to write file: {}", e))
    })?;

    Ok(())
}

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "EmojiFetch"
}
