use anyhow::Result;
use axum::http::StatusCode;
use employee_viewer::{DisplayOptions, config::AppConfig, run, view::OutputFormat};
use products_hr::RosterState;
use viewer_tests::{StubDirectory, refused_url};

fn config_for(url: &str) -> Result<AppConfig> {
    AppConfig::from_lookup(|_| None)?.with_overrides(Some(url), Some(5))
}

async fn run_against(url: &str, display: DisplayOptions) -> Result<(products_hr::Roster, String)> {
    let mut out = Vec::new();
    let roster = run(&config_for(url)?, display, &mut out).await?;
    Ok((roster, String::from_utf8(out)?))
}

#[tokio::test]
async fn single_employee_is_listed() -> Result<()> {
    let stub = StubDirectory::serving(
        r#"{"message":"ok","employees":[{"name":"Asha","profile":"Engineer"}]}"#,
    )
    .await?;

    let (roster, text) = run_against(&stub.url(), DisplayOptions::default()).await?;
    assert_eq!(roster.count(), 1);
    assert_eq!(roster.row_at(0)?.as_tuple(), ("Asha", "Engineer"));

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Asha  Engineer"));
    assert!(lines.next().unwrap_or_default().starts_with("1-1 of 1 employees | ok"));
    Ok(())
}

#[tokio::test]
async fn empty_list_renders_no_rows() -> Result<()> {
    let stub = StubDirectory::serving(r#"{"message":"ok","employees":[]}"#).await?;

    let (roster, text) = run_against(&stub.url(), DisplayOptions::default()).await?;
    assert_eq!(roster.count(), 0);
    assert_eq!(roster.state(), RosterState::Populated);
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("0 of 0 employees"));
    Ok(())
}

#[tokio::test]
async fn refused_connection_leaves_list_empty() -> Result<()> {
    let url = refused_url().await?;

    let (roster, text) = run_against(&url, DisplayOptions::default()).await?;
    assert_eq!(roster.state(), RosterState::Empty);
    assert_eq!(roster.count(), 0);
    assert_eq!(text, "no employees loaded\n");
    Ok(())
}

#[tokio::test]
async fn malformed_body_leaves_list_empty() -> Result<()> {
    let stub = StubDirectory::serving("not valid json").await?;

    let (roster, text) = run_against(&stub.url(), DisplayOptions::default()).await?;
    assert_eq!(roster.state(), RosterState::Empty);
    assert_eq!(text, "no employees loaded\n");
    Ok(())
}

#[tokio::test]
async fn error_status_leaves_list_empty() -> Result<()> {
    let stub = StubDirectory::responding(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"message":"ok","employees":[{"name":"Ghost","profile":"Nobody"}]}"#,
    )
    .await?;

    let (roster, _) = run_against(&stub.url(), DisplayOptions::default()).await?;
    assert_eq!(roster.state(), RosterState::Empty);
    Ok(())
}

#[tokio::test]
async fn json_window_matches_wire_order() -> Result<()> {
    let stub = StubDirectory::serving(
        r#"{"message":"ok","employees":[
            {"name":"Asha","profile":"Engineer"},
            {"name":"Li","profile":"QA"},
            {"name":"Ravi","profile":"Ops"}
        ]}"#,
    )
    .await?;
    let display = DisplayOptions {
        format: OutputFormat::Json,
        offset: 1,
        height: Some(2),
    };

    let (roster, text) = run_against(&stub.url(), display).await?;
    assert_eq!(roster.count(), 3);
    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(
        value,
        serde_json::json!([
            {"name": "Li", "profile": "QA"},
            {"name": "Ravi", "profile": "Ops"}
        ])
    );
    Ok(())
}
