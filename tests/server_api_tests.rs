use heroes_vs::battle::ScriptedRng;
use heroes_vs::history::MemoryHistory;
use heroes_vs::server::routes::route_request;
use heroes_vs::session::Session;

fn session(draws: &[u32]) -> Session<MemoryHistory, ScriptedRng> {
    Session::new(MemoryHistory::default(), ScriptedRng::new(draws.iter().copied()))
}

fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("response should be valid json")
}

#[test]
fn health_endpoint_returns_ok_json() {
    let mut session = session(&[]);
    let response = route_request(&mut session, "GET", "/api/health", "");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert!(response.body.contains("\"status\": \"ok\""));
}

#[test]
fn index_serves_the_battle_page() {
    let mut session = session(&[]);
    let response = route_request(&mut session, "GET", "/", "");
    assert_eq!(response.status_code, 200);
    assert!(response.content_type.starts_with("text/html"));
    assert!(response.body.contains("Fight!"));
    assert!(response.body.contains("name=\"villain-weapon\""));
}

#[test]
fn fight_endpoint_resolves_logs_and_scores() {
    let mut session = session(&[10, 2, 5, 2]);
    let body = r#"{"hero_name":"Zed","hero_weapon":"sword","villain_name":"Roc","villain_weapon":"bow"}"#;
    let response = route_request(&mut session, "POST", "/api/fight", body);

    assert_eq!(response.status_code, 200);
    let payload = json(&response.body);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["result"]["hero_damage"], 20);
    assert_eq!(payload["result"]["villain_damage"], 10);
    assert_eq!(payload["result"]["winner"]["side"], "hero");
    assert_eq!(payload["result"]["winner"]["name"], "Zed");
    assert_eq!(
        payload["message"],
        "Zed strikes Roc for 20 damage. Roc strikes Zed for 10 damage. Zed wins!"
    );
    assert_eq!(payload["scoreboard"]["hero"]["wins"], 1);
    assert_eq!(payload["scoreboard"]["villain"]["losses"], 1);
    assert_eq!(session.history().records.len(), 1);

    let board = route_request(&mut session, "GET", "/api/scoreboard", "");
    assert_eq!(board.status_code, 200);
    assert_eq!(json(&board.body)["hero"]["wins"], 1);
}

#[test]
fn fight_endpoint_rejects_missing_weapon_without_logging() {
    let mut session = session(&[]);
    let body = r#"{"hero_name":"Zed","hero_weapon":"sword","villain_name":"Roc","villain_weapon":null}"#;
    let response = route_request(&mut session, "POST", "/api/fight", body);

    assert_eq!(response.status_code, 422);
    let payload = json(&response.body);
    assert_eq!(payload["code"], "weapon_not_chosen");
    assert_eq!(
        payload["message"],
        "You need a weapon to survive in this world. Please choose one."
    );
    assert!(session.history().records.is_empty());
}

#[test]
fn fight_endpoint_checks_names_first() {
    let mut session = session(&[]);
    let body = r#"{"hero_name":"  ","villain_name":"Roc"}"#;
    let response = route_request(&mut session, "POST", "/api/fight", body);
    assert_eq!(response.status_code, 422);
    assert_eq!(json(&response.body)["code"], "name_too_short");
}

#[test]
fn fight_endpoint_rejects_bad_json_and_unknown_weapons() {
    let mut session = session(&[]);
    let bad = route_request(&mut session, "POST", "/api/fight", "{not json");
    assert_eq!(bad.status_code, 400);
    assert!(bad.body.contains("Invalid request body"));

    let body = r#"{"hero_name":"Zed","hero_weapon":"axe","villain_name":"Roc","villain_weapon":"bow"}"#;
    let unknown = route_request(&mut session, "POST", "/api/fight", body);
    assert_eq!(unknown.status_code, 400);
    assert!(unknown.body.contains("unknown weapon 'axe'"));
}

#[test]
fn unknown_route_is_not_found() {
    let mut session = session(&[]);
    let response = route_request(&mut session, "DELETE", "/api/scoreboard", "");
    assert_eq!(response.status_code, 404);
}
