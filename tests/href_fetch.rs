mod common;

use assert_cmd::prelude::*;
use common::{pull_cmd, spawn_server, web_mock};
use predicates::prelude::*;
use pull::clipboard::MemoryClipboard;
use pull::config::Action;
use pull::errors::Error;
use pull::{execute, ConfigBuilder, OutputDestination};

#[test]
fn test_href_bodies_are_verbatim_and_newline_terminated() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_server(web_mock::app());
    let page = format!("{}/page", base);
    let lines = format!("{}/lines", base);

    pull_cmd()
        .args(["href", page.as_str(), lines.as_str(), "--stdout"])
        .assert()
        .success()
        .stdout(format!(
            "href: {}\nhello page\nhref: {}\n# not a comment here\n\nkept\n",
            page, lines
        ));
    Ok(())
}

#[test]
fn test_href_404_is_fatal() {
    let base = spawn_server(web_mock::app());
    let missing = format!("{}/missing", base);

    pull_cmd()
        .args(["href", missing.as_str()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Copied").not())
        .stderr(predicate::str::contains("404"));
}

#[test]
fn test_href_404_never_writes_clipboard() -> anyhow::Result<()> {
    let base = spawn_server(web_mock::app());
    let config = ConfigBuilder::new()
        .action(Action::Href(vec![
            format!("{}/page", base),
            format!("{}/missing", base),
        ]))
        .build()?;
    let mut clipboard = MemoryClipboard::with_content("previous");

    let err = execute(&config, &mut clipboard, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, Error::HrefStatus { ref status, .. } if status.starts_with("404")));
    assert_eq!(clipboard.writes, 0);
    assert_eq!(clipboard.content, "previous");
    Ok(())
}

#[test]
fn test_href_body_at_ceiling_succeeds() {
    let base = spawn_server(web_mock::app());

    pull_cmd()
        .arg("href")
        .arg(format!("{}/exact", base))
        .args(["--stdout", "--max-size", "16"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!("{}\n", "x".repeat(15))));
}

#[test]
fn test_href_body_over_ceiling_is_too_large() {
    let base = spawn_server(web_mock::app());

    pull_cmd()
        .arg("href")
        .arg(format!("{}/over", base))
        .args(["--stdout", "--max-size", "16"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_href_append_to_clipboard() -> anyhow::Result<()> {
    let base = spawn_server(web_mock::app());
    let url = format!("{}/page", base);
    let config = ConfigBuilder::new()
        .action(Action::Href(vec![url.clone()]))
        .append(true)
        .build()?;
    assert_eq!(config.output_destination, OutputDestination::Clipboard);
    let mut clipboard = MemoryClipboard::with_content("previous");

    execute(&config, &mut clipboard, &mut Vec::new())?;
    assert_eq!(
        clipboard.content,
        format!("previous\nhref: {}\nhello page\n", url)
    );
    Ok(())
}
