use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_config(dir: &Path, base_url: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "access_token: pul-test-token\nbase_url: {base_url}\nmax_retries: 0\nretry_delay_secs: 0.01\n"
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn pulumi_cloud(config_path: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pulumi-cloud"));
    cmd.arg("--config")
        .arg(config_path)
        .env_remove("PULUMI_ACCESS_TOKEN")
        .env_remove("PULUMI_BACKEND_URL")
        .env_remove("PULUMI_CLOUD_FORMAT")
        .env_remove("PULUMI_CLOUD_DEBUG");
    cmd
}

#[test]
fn version_prints_package_version() {
    Command::new(assert_cmd::cargo::cargo_bin!("pulumi-cloud"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_token_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "timeout_secs: 5\n")?;

    pulumi_cloud(&config_path)
        .args(["org", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PULUMI_ACCESS_TOKEN"));

    Ok(())
}

#[test]
fn org_list_renders_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/user/organizations")
        .match_header("authorization", "token pul-test-token")
        .with_status(200)
        .with_body(r#"[{"name": "acme", "displayName": "Acme Corp"}]"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    pulumi_cloud(&config_path)
        .args(["org", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme").and(predicate::str::contains("Acme Corp")));

    mock.assert();
    Ok(())
}

#[test]
fn environment_token_overrides_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/user/organizations")
        .match_header("authorization", "token from-env")
        .with_status(200)
        .with_body("[]")
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    pulumi_cloud(&config_path)
        .env("PULUMI_ACCESS_TOKEN", "from-env")
        .args(["org", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found."));

    mock.assert();
    Ok(())
}

#[test]
fn stack_list_json_wraps_data() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/stacks/acme/web")
        .with_status(200)
        .with_body(
            r#"[{"name": "dev", "orgName": "acme", "projectName": "web", "resourceCount": 4}]"#,
        )
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    let assert = pulumi_cloud(&config_path)
        .args(["--format", "json", "stack", "list", "--org", "acme", "--project", "web"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let output: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(output["data"][0]["name"], "dev");
    assert_eq!(output["data"][0]["resourceCount"], 4);
    assert!(output["meta"]["version"].is_string());

    Ok(())
}

#[test]
fn api_error_exits_with_status_and_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/organizations/ghost")
        .with_status(404)
        .with_body(r#"{"code": 404, "message": "Organization 'ghost' not found"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    pulumi_cloud(&config_path)
        .args(["org", "get", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Pulumi API Error (404): Organization 'ghost' not found",
        ));

    Ok(())
}

#[test]
fn transfer_all_dry_run_makes_no_transfers() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _list = server
        .mock("GET", "/api/stacks/old")
        .with_status(200)
        .with_body(
            r#"[
                {"name": "dev", "orgName": "old", "projectName": "web"},
                {"name": "prod", "orgName": "old", "projectName": "web"}
            ]"#,
        )
        .create();
    let transfers = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    pulumi_cloud(&config_path)
        .args(["stack", "transfer-all", "-s", "old", "-d", "new", "--dry-run"])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Found 2 stacks")
                .and(predicate::str::contains("Would transfer old/web/dev to new")),
        );

    transfers.assert();
    Ok(())
}

#[test]
fn transfer_all_reports_partial_failure() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _list = server
        .mock("GET", "/api/stacks/old/web")
        .with_status(200)
        .with_body(
            r#"[
                {"name": "dev", "orgName": "old", "projectName": "web"},
                {"name": "prod", "orgName": "old", "projectName": "web"}
            ]"#,
        )
        .create();
    let _ok = server
        .mock("POST", "/api/stacks/old/web/dev/transfer")
        .with_status(200)
        .with_body(r#"{"name": "dev", "orgName": "new", "projectName": "web"}"#)
        .create();
    let _conflict = server
        .mock("POST", "/api/stacks/old/web/prod/transfer")
        .with_status(409)
        .with_body(r#"{"message": "stack already exists"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    let assert = pulumi_cloud(&config_path)
        .args([
            "--format", "json", "stack", "transfer-all", "-s", "old", "-d", "new", "-p", "web",
            "--yes",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let output: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(output["data"]["summary"]["total"], 2);
    assert_eq!(output["data"]["summary"]["successful"], 1);
    assert_eq!(output["data"]["summary"]["failed"], 1);

    Ok(())
}
