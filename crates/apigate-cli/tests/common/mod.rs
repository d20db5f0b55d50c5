use std::process::{Command, Output};

/// Run the CLI against `api_url` with isolated configuration.
///
/// All `APIGATE_*` variables from the outer environment are cleared so a
/// developer's shell settings cannot leak into a test.
pub fn run_cli(args: &[&str], api_url: &str, password: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_apigate"));
    for (key, _) in std::env::vars() {
        if key.starts_with("APIGATE_") {
            cmd.env_remove(key);
        }
    }
    cmd.args(args);
    cmd.env("APIGATE_API_URL", api_url);
    cmd.env("APIGATE_USERNAME", "demo");
    cmd.env("APIGATE_PASSWORD", password);
    cmd.env("NO_COLOR", "1");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so the mock server keeps serving.
pub async fn run_cli_async(args: Vec<String>, api_url: String, password: &'static str) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&args, &api_url, password)
    })
    .await
    .expect("CLI task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
