//! End-to-end tests for the o2ox binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ORDER: &str = "class Order {
    private String orderId;
    private String status;

    OrderDTO toDto() {
        
    }

    void log() {
        
    }
}
";

const ORDER_DTO: &str = "class OrderDTO {
    public void setOrderId(String orderId) {}
    public void setStatus(String status) {}
    public void setTag(String tag) {}
}
";

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pom.xml"), "<project/>").unwrap();
    fs::write(dir.path().join("Order.java"), ORDER).unwrap();
    fs::write(dir.path().join("OrderDTO.java"), ORDER_DTO).unwrap();
    dir
}

fn o2ox(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("o2ox").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_generate_prints_snippet() {
    let dir = project();
    o2ox(dir.path())
        .args(["generate", "Order.java:6"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "var result = new OrderDTO();\nresult.setOrderId(orderId);\nresult.setStatus(status);\nresult.setTag(null);\nreturn result;",
        ));
}

#[test]
fn test_generate_write_inserts_into_file() {
    let dir = project();
    o2ox(dir.path())
        .args(["generate", "--write", "Order.java:6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2/3 setters matched"));

    let written = fs::read_to_string(dir.path().join("Order.java")).unwrap();
    assert!(written.contains(
        "    OrderDTO toDto() {\n        var result = new OrderDTO();\n        result.setOrderId(orderId);\n"
    ));
    assert!(written.contains("        return result;\n    }\n"));
}

#[test]
fn test_write_on_signature_line_fills_the_body() {
    let dir = project();
    o2ox(dir.path())
        .args(["generate", "--write", "Order.java:5"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("Order.java")).unwrap();
    assert!(written.contains(
        "    OrderDTO toDto() {\n        var result = new OrderDTO();\n        result.setOrderId(orderId);\n"
    ));
    assert!(written.contains("        return result;\n    }\n"));
}

#[test]
fn test_void_method_aborts_without_touching_file() {
    let dir = project();
    o2ox(dir.path())
        .args(["generate", "--write", "Order.java:10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The enclosing method has no return type to map into",
        ));

    let untouched = fs::read_to_string(dir.path().join("Order.java")).unwrap();
    assert_eq!(untouched, ORDER);
}

#[test]
fn test_cursor_outside_method_aborts() {
    let dir = project();
    o2ox(dir.path())
        .args(["generate", "Order.java:2:5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please put the cursor into method body"));
}

#[test]
fn test_generate_json() {
    let dir = project();
    let output = o2ox(dir.path())
        .args(["generate", "--json", "Order.java:6"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "imperative_assignment");
    assert_eq!(json["target"], "OrderDTO");
    assert_eq!(json["matches"][2]["field"], serde_json::Value::Null);
}

#[test]
fn test_analyze_shows_matches() {
    let dir = project();
    o2ox(dir.path())
        .args(["analyze", "Order.java:6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Method: toDto"))
        .stdout(predicate::str::contains("Setters (2/3 matched)"))
        .stdout(predicate::str::contains("setTag      ← null"));
}

#[test]
fn test_analyze_uses_configured_null_literal() {
    let dir = project();
    fs::write(
        dir.path().join(".o2ox.json"),
        r#"{ "null_literal": "Optional.empty()" }"#,
    )
    .unwrap();

    o2ox(dir.path())
        .args(["analyze", "Order.java:6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("setTag      ← Optional.empty()"))
        .stdout(predicate::str::contains("result.setTag(Optional.empty());"))
        .stdout(predicate::str::contains("← null").not());
}

#[test]
fn test_init_respects_existing_config() {
    let dir = TempDir::new().unwrap();
    o2ox(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));
    assert!(dir.path().join(".o2ox.json").is_file());

    o2ox(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_changes_local_variable() {
    let dir = project();
    fs::write(
        dir.path().join(".o2ox.json"),
        r#"{ "local_variable": "dto", "declaration_style": "explicit" }"#,
    )
    .unwrap();

    o2ox(dir.path())
        .args(["generate", "Order.java:6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OrderDTO dto = new OrderDTO();"))
        .stdout(predicate::str::contains("return dto;"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    o2ox(dir.path())
        .args(["generate", "Nope.java:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
