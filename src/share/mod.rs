//! Share and export actions for the current quote.
//!
//! The three derived views of a quote live here: the clipboard block, the
//! `quote.txt` payload, and the prefilled tweet intent link. The formatters
//! are pure so the action paths and the UI preview stay in agreement.

use crate::quotes::Quote;
use anyhow::Context;
use reqwest::Url;
use std::path::PathBuf;
use std::process::Command;

pub const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";
pub const SAVE_FILENAME: &str = "quote.txt";

/// Plain attribution block, suitable for the clipboard.
pub fn copy_text(quote: &Quote) -> String {
    format!("{}\n— {}", quote.text, quote.author)
}

/// File payload for the save action. Same block with a trailing newline.
pub fn file_contents(quote: &Quote) -> String {
    format!("{}\n— {}\n", quote.text, quote.author)
}

/// Tweet intent link carrying the quote and the hashtag as query parameters.
pub fn share_url(quote: &Quote, hashtag: &str) -> anyhow::Result<Url> {
    let text = format!("{} — {}", quote.text, quote.author);
    let params = [("text", text.as_str()), ("hashtags", hashtag)];
    Url::parse_with_params(TWEET_INTENT_URL, &params)
        .with_context(|| "Failed to build share URL")
}

/// Puts the attribution block on the system clipboard.
pub fn copy_to_clipboard(quote: &Quote) -> anyhow::Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().with_context(|| "Failed to access the clipboard")?;
    clipboard
        .set_text(copy_text(quote))
        .with_context(|| "Failed to write to the clipboard")?;
    Ok(())
}

/// Opens the share link in the system browser.
pub fn open_share_link(quote: &Quote, hashtag: &str) -> anyhow::Result<()> {
    let url = share_url(quote, hashtag)?;
    open_url(url.as_str())
}

fn open_url(url: &str) -> anyhow::Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        // The empty quoted argument is the window title "start" expects.
        c.args(["/C", "start", "", url]);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(url);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    let status = cmd
        .status()
        .with_context(|| "Failed to launch the browser opener")?;
    if !status.success() {
        return Err(anyhow::anyhow!("Browser opener exited with {}", status));
    }
    Ok(())
}

/// Writes the quote to `quote.txt` under `dir`, creating the directory if
/// needed. Returns the path written.
pub fn save_to_file(quote: &Quote, dir: &str) -> anyhow::Result<PathBuf> {
    let dir = crate::config::expand_tilde(dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(SAVE_FILENAME);
    std::fs::write(&path, file_contents(quote))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quote {
        Quote::new("Talk is cheap.", "Linus Torvalds")
    }

    #[test]
    fn test_copy_text_format() {
        assert_eq!(copy_text(&sample()), "Talk is cheap.\n— Linus Torvalds");
    }

    #[test]
    fn test_file_contents_ends_with_newline() {
        assert_eq!(
            file_contents(&sample()),
            "Talk is cheap.\n— Linus Torvalds\n"
        );
    }

    #[test]
    fn test_formatters_are_idempotent() {
        let quote = sample();
        assert_eq!(copy_text(&quote), copy_text(&quote));
        assert_eq!(file_contents(&quote), file_contents(&quote));
    }

    #[test]
    fn test_share_url_round_trips_the_text() {
        let url = share_url(&sample(), "DevQuote").unwrap();
        assert!(url.as_str().starts_with(TWEET_INTENT_URL));

        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(text, "Talk is cheap. — Linus Torvalds");
    }

    #[test]
    fn test_share_url_carries_the_hashtag() {
        let url = share_url(&sample(), "DevQuote").unwrap();
        let hashtags = url
            .query_pairs()
            .find(|(key, _)| key == "hashtags")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(hashtags, "DevQuote");
    }

    #[test]
    fn test_save_writes_the_payload() {
        let dir = tempfile::tempdir().unwrap();
        let quote = sample();

        let path = save_to_file(&quote, dir.path().to_str().unwrap()).unwrap();
        assert_eq!(path.file_name().unwrap(), SAVE_FILENAME);
        assert_eq!(std::fs::read_to_string(path).unwrap(), file_contents(&quote));
    }
}
