mod common;
use common::DeskTest;

#[test]
fn test_logged_out_defaults_to_employee_layout() {
    let desk = DeskTest::new();
    let output = desk.run_success(&["dashboard"]);
    assert!(output.contains("Employee Dashboard"));
    assert!(output.contains("not logged in"));
}

#[test]
fn test_role_override_selects_layout() {
    let desk = DeskTest::new();
    let agent = desk.run_success(&["dashboard", "--role", "agent"]);
    assert!(agent.contains("Agent Dashboard"));
    assert!(agent.contains("Ticket Queue"));

    let admin = desk.run_success(&["dashboard", "--role", "admin"]);
    assert!(admin.contains("Admin Dashboard"));
    assert!(admin.contains("Open Escalations"));
}

#[test]
fn test_layout_follows_session_role() {
    let desk = DeskTest::new();

    desk.login("john.smith@company.com");
    let output = desk.run_success(&["dashboard"]);
    assert!(output.contains("Agent Dashboard"));

    desk.login("sarah.wilson@company.com");
    let output = desk.run_success(&["dashboard"]);
    assert!(output.contains("Admin Dashboard"));

    desk.login("bob@company.com");
    let output = desk.run_success(&["dashboard"]);
    assert!(output.contains("Employee Dashboard"));
}

#[test]
fn test_override_beats_session_role() {
    let desk = DeskTest::new();
    desk.login("sarah.wilson@company.com");
    let output = desk.run_success(&["dashboard", "--role", "employee"]);
    assert!(output.contains("Employee Dashboard"));
}

#[test]
fn test_employee_layout_scopes_to_viewer() {
    let desk = DeskTest::new();
    desk.login("bob@company.com");
    let json = desk.run_json(&["dashboard", "--json"]);
    assert_eq!(json["kind"], "employee");
    // Bob requested HD-002 and HD-008
    let ids: Vec<&str> = json["tickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["HD-002", "HD-008"]);
    assert!(!json["articles"].as_array().unwrap().is_empty());
}

#[test]
fn test_admin_layout_stats() {
    let desk = DeskTest::new();
    let json = desk.run_json(&["dashboard", "--role", "admin", "--json"]);
    assert_eq!(json["kind"], "admin");

    let stats = json["stats"].as_array().unwrap();
    let total = stats
        .iter()
        .find(|s| s["label"] == "tickets")
        .and_then(|s| s["value"].as_str())
        .unwrap();
    assert_eq!(total, "8");
    let users = stats
        .iter()
        .find(|s| s["label"] == "users")
        .and_then(|s| s["value"].as_str())
        .unwrap();
    assert_eq!(users, "8");
}

#[test]
fn test_agent_queue_is_most_urgent_first() {
    let desk = DeskTest::new();
    let json = desk.run_json(&["dashboard", "--role", "agent", "--json"]);
    let first = &json["tickets"][0];
    // The only open critical ticket leads the queue
    assert_eq!(first["id"], "HD-006");
    assert_eq!(first["priority"], "critical");
}

#[test]
fn test_unknown_role_rejected() {
    let desk = DeskTest::new();
    desk.run_failure(&["dashboard", "--role", "manager"]);
}
