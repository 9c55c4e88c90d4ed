use clap::Parser;
use hello_client::utils::validation::Validate;
use hello_client::{CliConfig, HelloClient};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_end_to_end_from_toml_file() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/service-instances/client2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"serviceId": "client2", "host": "10.0.0.7", "port": 8080}
            ]));
    });

    let file = write_config(&format!(
        r#"
[client]
service_name = "client1"
timeout_seconds = 5

[registry]
client1 = ["{}"]
"#,
        server.base_url()
    ));

    let config = CliConfig::try_parse_from([
        "hello-client",
        "client2",
        "--config",
        file.path().to_str().unwrap(),
        "--pretty",
    ])?;
    config.validate()?;

    let client = config.build_client()?;
    let body = client.hello(&config.application_name).await?;

    mock.assert();
    let printed = config.format_body(&body);
    assert!(printed.contains("\"serviceId\": \"client2\""));
    Ok(())
}

#[tokio::test]
async fn test_cli_service_overrides_extend_registry() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/apps/client2");
        then.status(200).body("from-cli");
    });

    let file = write_config(
        r#"
[client]
service_name = "registry"
path_template = "/apps/{name}"
parameter_name = "name"
"#,
    );

    let service = format!("registry={}", server.base_url());
    let config = CliConfig::try_parse_from([
        "hello-client",
        "client2",
        "--config",
        file.path().to_str().unwrap(),
        "--service",
        service.as_str(),
    ])?;

    let client = config.build_client()?;
    assert_eq!(client.hello("client2").await?, "from-cli");
    mock.assert();
    Ok(())
}

#[test]
fn test_invalid_file_config_fails_build() {
    let file = write_config(
        r#"
[client]
path_template = "/service-instances/{applicationName}"
parameter_name = "appName"
"#,
    );

    let config = CliConfig::try_parse_from([
        "hello-client",
        "client2",
        "--config",
        file.path().to_str().unwrap(),
    ])
    .unwrap();

    let err = config.build_client().unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_cli_service_replaces_file_registry_entry() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/service-instances/client2");
        then.status(200).body("from-cli");
    });

    // Nothing listens on port 9 of this address; only the CLI entry is reachable.
    let file = write_config(
        r#"
[client]
timeout_seconds = 2

[registry]
client1 = ["http://127.0.0.1:9"]
"#,
    );

    let service = format!("client1={}", server.base_url());
    let config = CliConfig::try_parse_from([
        "hello-client",
        "client2",
        "--config",
        file.path().to_str().unwrap(),
        "--service",
        service.as_str(),
    ])?;

    let client = config.build_client()?;
    assert_eq!(client.hello("client2").await?, "from-cli");
    mock.assert();
    Ok(())
}
