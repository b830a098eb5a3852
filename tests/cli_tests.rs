//! Integration tests for the vcf-secrets CLI
//!
//! These tests run the compiled binary against a throwaway project directory.

use std::path::Path;
use std::process::{Command, Stdio};

const SECRET_VARS: [&str; 4] = [
    "VCF_ESXI_ROOT_PASSWORD",
    "VCF_INSTALLER_ROOT_PASSWORD",
    "VCF_INSTALLER_ADMIN_PASSWORD",
    "VCF_VCENTER_PASSWORD",
];

/// Get the path to the vcf-secrets binary
fn vcf_secrets_binary() -> std::path::PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test executable name
    path.pop(); // Remove deps directory

    path.push("vcf-secrets");

    if cfg!(windows) {
        path.set_extension("exe");
    }

    path
}

/// Command with a clean credential environment and no terminal on stdin
fn vcf_secrets(
    project_dir: &Path,
    args: &[&str],
    vars: &[(&str, &str)],
) -> std::process::Output {
    let mut command = Command::new(vcf_secrets_binary());
    command
        .arg("--project-dir")
        .arg(project_dir)
        .args(args)
        .env_remove("VCF_PROJECT_DIR")
        .env_remove("VCF_LOG")
        .stdin(Stdio::null());
    for var in SECRET_VARS {
        command.env_remove(var);
    }
    for (name, value) in vars {
        command.env(name, value);
    }
    command.output().expect("Failed to execute vcf-secrets")
}

fn write_project_file(project: &Path, relative: &str, contents: &str) {
    let path = project.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[test]
fn test_version() {
    let output = Command::new(vcf_secrets_binary())
        .arg("--version")
        .output()
        .expect("Failed to execute vcf-secrets");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("vcf-secrets"));
}

#[test]
fn test_help_lists_commands() {
    let output = Command::new(vcf_secrets_binary())
        .arg("--help")
        .output()
        .expect("Failed to execute vcf-secrets");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_check_masks_environment_values() {
    let project = tempfile::tempdir().unwrap();

    let output = vcf_secrets(
        project.path(),
        &["check"],
        &[("VCF_ESXI_ROOT_PASSWORD", "supersecret-value")],
    );

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("VCF Secrets Status"));
    assert!(stdout.contains("✓ VCF_ESXI_ROOT_PASSWORD is set"));
    assert!(stdout.contains("VCF_VCENTER_PASSWORD not set"));
    assert!(stdout.contains("Secrets file not found"));
    assert!(!stdout.contains("supersecret-value"));
}

#[test]
fn test_check_finds_secrets_file() {
    let project = tempfile::tempdir().unwrap();
    write_project_file(
        project.path(),
        "config/vcf-secrets.yaml",
        "esxi_root_password: file-only-value\n",
    );

    let output = vcf_secrets(project.path(), &["check"], &[]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Secrets file found"));
    assert!(!stdout.contains("file-only-value"));
}

#[test]
fn test_config_missing_file_fails() {
    let project = tempfile::tempdir().unwrap();

    let output = vcf_secrets(project.path(), &["config"], &[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR:"));
    assert!(stderr.contains("Config file not found"));
}

#[test]
fn test_config_uses_environment_override() {
    let project = tempfile::tempdir().unwrap();
    write_project_file(
        project.path(),
        "config/vcf-config.yaml",
        "common:\n  root_password: \"\"\n  esxi_iso_path: /isos/esxi.iso\n",
    );

    let output = vcf_secrets(
        project.path(),
        &["config", "--format", "yaml"],
        &[("VCF_ESXI_ROOT_PASSWORD", "hunter2")],
    );

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("esxi_iso_path: /isos/esxi.iso"));
    assert!(stdout.contains("********"));
    assert!(!stdout.contains("hunter2"));
}

#[test]
fn test_config_without_terminal_fails_instead_of_hanging() {
    let project = tempfile::tempdir().unwrap();
    write_project_file(
        project.path(),
        "config/vcf-config.yaml",
        "common:\n  root_password: \"\"\n",
    );

    let output = vcf_secrets(project.path(), &["config"], &[]);

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR:"));
    assert!(stderr.contains("common.root_password"));
    assert!(stderr.contains("no interactive terminal"));
}

#[test]
fn test_config_malformed_secrets_file_warns_and_falls_back() {
    let project = tempfile::tempdir().unwrap();
    write_project_file(
        project.path(),
        "config/vcf-config.yaml",
        "vcenter:\n  password: config-value\n",
    );
    write_project_file(
        project.path(),
        "config/vcf-secrets.yaml",
        "vcenter_password: [unterminated\n",
    );

    let output = vcf_secrets(project.path(), &["config"], &[]);

    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARNING:"));
    assert!(stderr.contains("secrets file"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vcenter.password"));
    assert!(stdout.contains("config file"));
}

#[test]
fn test_config_explicit_path_roots_secrets_next_to_it() {
    let project = tempfile::tempdir().unwrap();
    write_project_file(
        project.path(),
        "lab/config/vcf-config.yaml",
        "vcf_installer:\n  root_password: ''\n  admin_password: ''\n",
    );
    write_project_file(
        project.path(),
        "lab/config/vcf-secrets.yaml",
        "vcf_installer_root_password: r\nvcf_installer_admin_password: a\n",
    );
    let config = project.path().join("lab/config/vcf-config.yaml");

    let output = vcf_secrets(
        project.path(),
        &["config", "--config", config.to_str().unwrap()],
        &[],
    );

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vcf_installer.root_password"));
    assert!(stdout.contains("vcf_installer.admin_password"));
    assert!(stdout.contains("secrets file"));
}

#[test]
fn test_verbose_logging_never_prints_secret_values() {
    let project = tempfile::tempdir().unwrap();
    write_project_file(
        project.path(),
        "config/vcf-config.yaml",
        "common:\n  root_password: ''\nvcf_installer:\n  root_password: cfg-installer-root-8841\n  admin_password: ''\nvcenter:\n  password: ''\n",
    );
    write_project_file(
        project.path(),
        "config/vcf-secrets.yaml",
        "vcenter_password: file-vcenter-5527\n",
    );

    let output = vcf_secrets(
        project.path(),
        &["-v", "config", "--format", "yaml"],
        &[
            ("VCF_ESXI_ROOT_PASSWORD", "env-esxi-root-3319"),
            ("VCF_INSTALLER_ADMIN_PASSWORD", "env-installer-admin-7702"),
        ],
    );

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("secret resolved from environment"));
    assert!(stderr.contains("secret resolved from secrets file"));
    assert!(stderr.contains("secret resolved from config file"));

    for value in [
        "env-esxi-root-3319",
        "env-installer-admin-7702",
        "file-vcenter-5527",
        "cfg-installer-root-8841",
    ] {
        assert!(!stdout.contains(value), "stdout leaked {}", value);
        assert!(!stderr.contains(value), "stderr leaked {}", value);
    }
}
