//! End-to-end tests of the storectl binary
//!
//! Requests go to a closed local port so that failure paths are exercised
//! without a real catalog service.

#![allow(deprecated)]

use std::fs;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const UNREACHABLE: &str = "http://127.0.0.1:9";

fn storectl() -> Command {
    let mut cmd = Command::new(cargo_bin("storectl"));
    cmd.env_remove("STORECTL_BASE_URL")
        .env_remove("STORECTL_PLACEHOLDER__DESCRIPTION")
        .env_remove("STORECTL_PLACEHOLDER__IMAGE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn given_no_arguments_when_running_then_prints_usage_and_succeeds() {
    storectl()
        .assert()
        .success()
        .stdout(predicate::str::contains("Uso: storectl <comando> [opciones]"))
        .stdout(predicate::str::contains("DELETE products/<productId>"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn given_post_with_too_few_args_when_running_then_usage_exit_code() {
    storectl()
        .args(["--base-url", UNREACHABLE, "POST", "products", "Shoe"])
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid arguments"))
        .stderr(predicate::str::contains("POST products <title> <price> <category>"));
}

#[test]
fn given_non_numeric_delete_id_when_running_then_no_request_is_made() {
    storectl()
        .args(["--base-url", UNREACHABLE, "DELETE", "products/abc"])
        .assert()
        .code(64)
        .stdout(predicate::str::contains("Eliminando").not())
        .stderr(predicate::str::contains("invalid product id"))
        .stderr(predicate::str::contains("request failed").not());
}

#[test]
fn given_unreachable_service_when_listing_then_reports_and_exits_zero() {
    storectl()
        .args(["--base-url", UNREACHABLE, "GET", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Consultando todos los productos..."))
        .stdout(predicate::str::contains("[").not())
        .stderr(predicate::str::contains("request failed: GET http://127.0.0.1:9/products"));
}

#[test]
fn given_unreachable_service_when_creating_then_prints_failure_message() {
    storectl()
        .args([
            "--base-url",
            UNREACHABLE,
            "POST",
            "products",
            "Shoe",
            "19.99",
            "footwear",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Creando producto: Shoe, Precio: 19.99, Categoría: footwear...",
        ))
        .stdout(predicate::str::contains("No se pudo crear el producto."))
        .stderr(predicate::str::contains("request failed: POST"));
}

#[test]
fn given_extra_post_args_when_running_then_warns_and_proceeds() {
    storectl()
        .args([
            "--base-url",
            UNREACHABLE,
            "POST",
            "products",
            "Shoe",
            "19.99",
            "footwear",
            "extra",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring extra arguments: extra"))
        .stdout(predicate::str::contains("No se pudo crear el producto."));
}

#[test]
fn given_base_url_env_var_when_running_then_used_for_requests() {
    storectl()
        .env("STORECTL_BASE_URL", UNREACHABLE)
        .args(["GET", "products/1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Consultando producto con ID: 1..."))
        .stderr(predicate::str::contains("http://127.0.0.1:9/products/1"));
}

#[test]
fn given_config_file_when_running_then_base_url_taken_from_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("storectl.toml");
    fs::write(&config, format!("base_url = \"{UNREACHABLE}/\"\n")).unwrap();

    storectl()
        .arg("--config")
        .arg(&config)
        .args(["DELETE", "products/3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Eliminando producto con ID: 3..."))
        .stdout(predicate::str::contains("eliminado").not())
        .stderr(predicate::str::contains("DELETE http://127.0.0.1:9/products/3"));
}

#[test]
fn given_invalid_config_file_when_running_then_config_exit_code() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "base_url = [unterminated").unwrap();

    storectl()
        .arg("--config")
        .arg(&config)
        .args(["GET", "products"])
        .assert()
        .code(78)
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn given_generate_flag_when_running_then_prints_completions() {
    storectl()
        .args(["--generate", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storectl"));
}
