use serde_json::json;
use std::io::Write;
use std::process::{Command, Stdio};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn camctl(server: &MockServer) -> Command {
    let addr = server.address();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_camctl"));
    cmd.arg("-i")
        .arg(addr.ip().to_string())
        .arg("--port")
        .arg(addr.port().to_string());
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_command_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/system/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": 1,
            "data": {"model": "CNC81BA-V4"}
        })))
        .mount(&server)
        .await;

    let output = camctl(&server).arg("info").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CNC81BA-V4"));
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_command_exits_one_and_reports_to_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/system/info"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = camctl(&server).arg("info").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_reboot_confirmation_issues_no_request() {
    let server = MockServer::start().await;
    // expect(0): verified on drop, any POST here fails the test.
    Mock::given(method("POST"))
        .and(path("/api/v1/system/reboot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let mut child = camctl(&server)
        .arg("reboot")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"no\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Reboot cancelled"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn factory_reset_blocks_on_inexact_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/system/reset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let mut child = camctl(&server)
        .arg("reset")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Wrong case: the prompt demands the exact string.
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"factory reset\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Factory reset cancelled"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn confirmed_reboot_issues_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/system/reboot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let mut child = camctl(&server)
        .arg("reboot")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"yes\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
}

#[tokio::test(flavor = "multi_thread")]
async fn juanctl_exits_one_when_the_camera_rejects_settings() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/netsdk/video/encode/channel/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 4})))
        .mount(&server)
        .await;

    // juanctl has no --port flag; point it at the mock via the defaults file.
    let addr = server.address();
    let mut defaults = tempfile::NamedTempFile::new().unwrap();
    writeln!(defaults, "port: {}", addr.port()).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_juanctl"))
        .arg("--ip")
        .arg(addr.ip().to_string())
        .arg("-c")
        .arg(defaults.path())
        .arg("--set-codec")
        .arg("H.264")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
