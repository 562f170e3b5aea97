use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with an isolated config directory
fn run(config_home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tana-stdio"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("TANA_STDIO_COLOR")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tana-stdio")
}

fn plain(args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    let mut full = vec!["--color", "never"];
    full.extend_from_slice(args);
    run(&home, &full)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn log_prints_single_line() {
    let out = plain(&["log", "build", "compiling contract..."]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[build] compiling contract...\n");
}

#[test]
fn header_prints_three_lines() {
    let out = plain(&["header", "configuration"]);
    assert_eq!(stdout(&out), format!("\nconfiguration\n{}\n", "─".repeat(40)));
}

#[test]
fn blank_prints_empty_line() {
    assert_eq!(stdout(&plain(&["blank"])), "\n");
}

#[test]
fn status_and_warn_forms() {
    assert_eq!(stdout(&plain(&["status", "db", "connected"])), "● [db] connected\n");
    assert_eq!(
        stdout(&plain(&["status", "db", "refused", "--fail"])),
        "○ [db] refused\n"
    );
    assert_eq!(stdout(&plain(&["warn", "cache", "stale"])), "● [cache] stale\n");
    assert_eq!(stdout(&plain(&["warn", "low disk"])), "● low disk\n");
}

#[test]
fn info_pads_label() {
    assert_eq!(stdout(&plain(&["info", "port", "8506"])), "  port       8506\n");
}

#[test]
fn next_steps_prints_in_order() {
    let out = plain(&["next-steps", "install=npm install", "start=npm run dev"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "  → install: npm install\n  → start: npm run dev\n"
    );
}

#[test]
fn next_steps_without_arguments_prints_nothing() {
    let out = plain(&["next-steps"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn next_steps_rejects_malformed_argument() {
    let out = plain(&["next-steps", "install=npm install", "oops"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout(&out),
        "[next-steps] expected DESCRIPTION=COMMAND, got 'oops'\n"
    );
}

#[test]
fn fatal_prints_error_and_exits_with_one() {
    let error = plain(&["error", "deploy", "target unreachable"]);
    let fatal = plain(&["fatal", "deploy", "target unreachable"]);
    assert!(error.status.success());
    assert_eq!(fatal.status.code(), Some(1));
    assert_eq!(stdout(&fatal), stdout(&error));
}

#[test]
fn color_always_emits_escape_codes() {
    let home = TempDir::new().unwrap();
    let out = run(&home, &["--color", "always", "log", "build", "ok"]);
    assert_eq!(stdout(&out), "\x1b[36m[build]\x1b[0m ok\n");
}

#[test]
fn env_override_applies_without_flag() {
    let home = TempDir::new().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_tana-stdio"))
        .args(["success", "done"])
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env("TANA_STDIO_COLOR", "always")
        .output()
        .unwrap();
    assert_eq!(stdout(&out), "\x1b[32m✓\x1b[0m done\n");
}

#[test]
fn output_is_repeatable() {
    let a = plain(&["diagnostic", "sync", "peer lagging"]);
    let b = plain(&["diagnostic", "sync", "peer lagging"]);
    assert_eq!(a.stdout, b.stdout);
    assert_eq!(stdout(&a), "⚠ [sync] peer lagging\n");
}

#[cfg(target_os = "linux")]
#[test]
fn config_set_is_used_by_later_runs() {
    let home = TempDir::new().unwrap();

    let set = run(&home, &["--color", "never", "config", "set", "color", "always"]);
    assert!(set.status.success());
    assert_eq!(stdout(&set), "✓ Set 'color' to 'always'\n");

    let get = run(&home, &["config", "get", "color"]);
    assert_eq!(stdout(&get), "always\n");

    let out = run(&home, &["fail", "broken"]);
    assert_eq!(stdout(&out), "\x1b[31m✗\x1b[0m broken\n");
}

#[cfg(target_os = "linux")]
#[test]
fn config_get_unknown_key_is_fatal() {
    let home = TempDir::new().unwrap();
    let out = run(&home, &["--color", "never", "config", "get", "nope"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "[config] Unknown config key: nope\n");
}

#[cfg(target_os = "linux")]
#[test]
fn broken_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("tana-stdio");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "color = \"rainbow\"\n").unwrap();

    let out = run(&home, &["--color", "never", "hint", "still works"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "  still works\n");
}

#[test]
fn detail_and_next_step() {
    assert_eq!(stdout(&plain(&["detail", "wrote 3 files"])), "    → wrote 3 files\n");
    assert_eq!(
        stdout(&plain(&["next-step", "start the server", "npm run dev"])),
        "  → start the server: npm run dev\n"
    );
}

#[test]
fn success_and_fail_markers() {
    assert_eq!(stdout(&plain(&["success", "build complete"])), "✓ build complete\n");
    assert_eq!(stdout(&plain(&["fail", "build failed"])), "✗ build failed\n");
}

#[cfg(target_os = "linux")]
fn write_config(home: &TempDir, contents: &str) {
    let dir = home.path().join("tana-stdio");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
}

#[cfg(target_os = "linux")]
fn run_with_env_color(home: &TempDir, color: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tana-stdio"))
        .args(args)
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env("TANA_STDIO_COLOR", color)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[cfg(target_os = "linux")]
#[test]
fn env_color_applies_over_broken_config_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "color = \"rainbow\"\n");

    let out = run_with_env_color(&home, "always", &["log", "build", "ok"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "\x1b[36m[build]\x1b[0m ok\n");
}

#[cfg(target_os = "linux")]
#[test]
fn invalid_env_color_keeps_config_file_value() {
    let home = TempDir::new().unwrap();
    write_config(&home, "color = \"always\"\n");

    let out = run_with_env_color(&home, "rainbow", &["log", "build", "ok"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "\x1b[36m[build]\x1b[0m ok\n");
}

#[cfg(target_os = "linux")]
#[test]
fn config_set_repairs_broken_config_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "color = \"rainbow\"\n");

    let set = run(&home, &["--color", "never", "config", "set", "color", "never"]);
    assert!(set.status.success());
    assert_eq!(stdout(&set), "✓ Set 'color' to 'never'\n");

    let get = run(&home, &["config", "get", "color"]);
    assert!(get.status.success());
    assert_eq!(stdout(&get), "never\n");
}

#[test]
fn messages_may_start_with_hyphen() {
    let out = plain(&["detail", "-n skips the build"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "    → -n skips the build\n");
}
