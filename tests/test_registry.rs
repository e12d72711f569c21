use agent_mounts::{
    get_all_mounts, get_mounts, get_mounts_with, list_agents, list_default_credential_env_vars,
    select_credential_env, Agent, Mount, MountConfig,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_every_agent_mounts_under_home() {
    init_tracing();
    let home = Path::new("/home/u");

    for descriptor in list_agents() {
        for mount in get_mounts(descriptor, home) {
            assert!(
                mount.host_path.starts_with(home),
                "{}: {} not under {}",
                descriptor.name,
                mount.host_path.display(),
                home.display()
            );
        }
    }
}

#[test]
fn test_claude_example() {
    init_tracing();
    let mounts = get_mounts(Agent::Claude.descriptor(), "/home/u");
    assert_eq!(
        mounts,
        vec![Mount {
            host_path: PathBuf::from("/home/u/.claude"),
            container_path: PathBuf::from("/home/vscode/.claude"),
            read_only: false,
        }]
    );
    assert!(Agent::Claude.descriptor().requires_special_handling);
}

#[test]
fn test_credential_vars_cover_every_agent() {
    let vars = list_default_credential_env_vars();
    for agent in Agent::all() {
        assert!(vars.contains(agent.descriptor().default_credential_env_var));
    }
}

#[test]
fn test_mount_config_from_file_drives_volume_args() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("mounts.json");
    std::fs::write(
        &config_path,
        r#"{"container_home": "/home/agent", "read_only": true}"#,
    )
    .unwrap();
    let config = MountConfig::load(&config_path).unwrap();

    let args: Vec<String> = get_all_mounts("/home/u", &config)
        .iter()
        .map(Mount::volume_arg)
        .collect();
    assert_eq!(args.len(), list_agents().len());
    assert_eq!(args[0], "/home/u/.claude:/home/agent/.claude:ro");
    assert!(args.contains(&"/home/u/.config/amp:/home/agent/.config/amp:ro".to_string()));
}

#[test]
fn test_relative_home_is_joined_as_is() {
    init_tracing();
    let mounts = get_mounts_with(
        Agent::Codex.descriptor(),
        "relative/home",
        &MountConfig::default(),
    );
    assert_eq!(mounts[0].host_path, PathBuf::from("relative/home/.codex"));
}

#[test]
fn test_mounts_serialize_to_json() {
    let mounts = get_mounts(Agent::Qwen.descriptor(), "/home/u");
    let json = serde_json::to_value(&mounts).unwrap();
    assert_eq!(json[0]["host_path"], "/home/u/.qwen");
    assert_eq!(json[0]["container_path"], "/home/vscode/.qwen");
    assert_eq!(json[0]["read_only"], false);
}

#[test]
fn test_select_credential_env_keeps_fallbacks() {
    let selected = select_credential_env([
        ("GOOGLE_API_KEY".to_string(), "g".to_string()),
        ("HOME".to_string(), "/home/u".to_string()),
        ("GH_TOKEN".to_string(), "t".to_string()),
    ]);
    let names: Vec<&str> = selected.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["GOOGLE_API_KEY", "GH_TOKEN"]);
}
