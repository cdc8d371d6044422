use maplit::hashmap;

use ccs_webclient::{http::StatusCode, *};

mod stub;
use stub::StubServer;

const CONTEST: &str = r#"{
    "id": "nwerc18", "name": "NWERC 2018", "formal_name": "NWERC 2018",
    "start_time": "2018-11-25T10:00:00+01:00", "duration": "5:00:00.000",
    "scoreboard_freeze_duration": "1:00:00.000", "penalty_time": 20
}"#;

const PROBLEMS: &str = r#"[
    {"id": "b", "label": "B", "name": "Brexit", "ordinal": 1},
    {"id": "a", "label": "A", "name": "Access Points", "ordinal": 0},
    {"id": "c", "label": "C", "name": "Circuit Board", "ordinal": 2}
]"#;

const BROKEN_PROBLEMS: &str = r#"[
    {"id": "a", "ordinal": 0},
    {"id": "b", "ordinal": 1},
    {"id": "c", "ordinal": "two"},
    {"id": "d", "ordinal": 3}
]"#;

const SUBMISSION: &str = r#"{
    "id": "187", "language_id": "cpp", "problem_id": "accesspoints", "team_id": "3",
    "time": "2018-11-25T10:21:03.000+01:00", "contest_time": "0:21:03.000",
    "entry_point": null, "files": [{"href": "contests/nwerc18/submissions/187/files", "mime": "application/zip"}]
}"#;

fn admin() -> Option<Credentials> {
    Some(Credentials::new("admin", "admin"))
}

async fn bound(server: &StubServer) -> Session {
    Session::connect(&server.base_url, admin(), "nwerc18", false)
        .await
        .unwrap()
}

#[tokio::test]
async fn connect_checks_contest_and_lists_in_order() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "GET /api/contests/nwerc18/problems" => (200, PROBLEMS),
    })
    .await;

    let session = bound(&server).await;
    assert_eq!(session.contest_id().unwrap(), "nwerc18");

    let problems = session.problems().await.unwrap();
    let ids: Vec<_> = problems.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
    assert_eq!(problems[1].name, "Access Points");

    assert_eq!(
        server.paths(),
        ["GET /api/contests/nwerc18", "GET /api/contests/nwerc18/problems"]
    );
}

#[tokio::test]
async fn every_request_carries_basic_auth() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "GET /api/contests/nwerc18/problems" => (200, PROBLEMS),
    })
    .await;

    let session = bound(&server).await;
    session.problems().await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    for r in requests {
        // base64("admin:admin")
        assert_eq!(r.headers["authorization"], "Basic YWRtaW46YWRtaW4=");
    }
}

#[tokio::test]
async fn anonymous_session_sends_no_auth() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests" => (200, "[]"),
    })
    .await;

    let session = Session::new(&server.base_url, None, false).unwrap();
    assert!(session.contests().await.unwrap().is_empty());
    assert!(!server.requests()[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn base_url_is_normalized() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests" => (200, "[]"),
    })
    .await;

    let session = Session::new(&format!("{}///", server.base_url), None, false).unwrap();
    session.contests().await.unwrap();
    assert_eq!(server.paths(), ["GET /api/contests"]);
}

#[tokio::test]
async fn binding_to_unknown_contest_fails() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nope" => (404, "<html><body>Not Found</body></html>"),
    })
    .await;

    let unbound = Session::new(&server.base_url, admin(), false).unwrap();
    let err = unbound.to_contest("nope").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().starts_with("Could not find contest 'nope'"), "{}", err);
    assert!(!unbound.is_bound());
}

#[tokio::test]
async fn binding_to_empty_contest_is_rejected_locally() {
    let server = StubServer::start(hashmap! {}).await;

    let unbound = Session::new(&server.base_url, admin(), false).unwrap();
    let err = unbound.to_contest("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn unbound_session_only_reaches_contests() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests" => (200, r#"[{"id": "nwerc18", "name": "NWERC 2018"}]"#),
        "GET /api/contests/nwerc18" => (200, CONTEST),
    })
    .await;

    let unbound = Session::new(&server.base_url, admin(), false).unwrap();
    let contests = unbound.contests().await.unwrap();
    assert_eq!(contests.len(), 1);

    let err = unbound.problems().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(matches!(err.root(), Error::ContestNotBound { path: "problems" }));
    let err = unbound.scoreboard().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert_eq!(unbound.contest().await.unwrap_err().kind(), ErrorKind::Usage);

    // the bound copy is independent of the original
    let bound = unbound.to_contest("nwerc18").await.unwrap();
    assert!(bound.is_bound());
    assert!(!unbound.is_bound());
    assert_eq!(bound.contest().await.unwrap().name, "NWERC 2018");

    assert_eq!(
        server.paths(),
        [
            "GET /api/contests",
            "GET /api/contests/nwerc18",
            "GET /api/contests/nwerc18",
        ]
    );
}

#[tokio::test]
async fn partial_list_keeps_decoded_prefix() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "GET /api/contests/nwerc18/problems" => (200, BROKEN_PROBLEMS),
    })
    .await;

    let session = bound(&server).await;
    let partial = session.list::<Problem>().await.unwrap_err();
    let ids: Vec<_> = partial.decoded.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert!(matches!(
        partial.error,
        Error::Decode {
            resource: "problem",
            index: Some(2),
            ..
        }
    ));

    let err = session.problems().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().starts_with("Could not retrieve problems: "), "{}", err);
}

#[tokio::test]
async fn get_by_id_requires_exactly_one_object() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "GET /api/contests/nwerc18/problems/a" => (200, r#"[{"id": "a", "label": "A"}]"#),
        "GET /api/contests/nwerc18/problems/b" => (200, r#"{"id": "b", "label": "B"}"#),
        "GET /api/contests/nwerc18/problems/none" => (200, "[]"),
        "GET /api/contests/nwerc18/problems/twice" => (200, r#"[{"id": "x"}, {"id": "x"}]"#),
        "GET /api/contests/nwerc18/problems/empty" => (200, ""),
    })
    .await;

    let session = bound(&server).await;
    assert_eq!(session.problem_by_id("a").await.unwrap().label, "A");
    assert_eq!(session.problem_by_id("b").await.unwrap().label, "B");

    for (id, n) in [("none", 0), ("twice", 2), ("empty", 0)] {
        let err = session.problem_by_id(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure, "{}", id);
        assert!(matches!(err.root(), Error::UnexpectedObjectCount { got } if *got == n));
    }
}

#[tokio::test]
async fn by_id_rejects_empty_id() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests" => (200, r#"[{"id": "nwerc18"}]"#),
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "GET /api/contests/nwerc18/problems" => (200, r#"[{"id": "a"}]"#),
    })
    .await;

    let session = bound(&server).await;
    let err = session.problem_by_id("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(matches!(err.root(), Error::EmptyId { resource: "problem" }));

    let err = session.contest_by_id("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    let err = session.get_by_id::<Team>("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);

    // only the bind request went out
    assert_eq!(server.paths(), ["GET /api/contests/nwerc18"]);
}

#[tokio::test]
async fn status_codes_are_classified() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "GET /api/contests/nwerc18/teams" => (401, "Unauthorized"),
        "GET /api/contests/nwerc18/accounts" => (403, r#"{"code": 403, "message": "Access denied"}"#),
        "GET /api/contests/nwerc18/groups" => (500, "internal error\n"),
    })
    .await;

    let session = bound(&server).await;

    let err = session.teams().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

    let err = session.judgements().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = session.accounts().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert!(err.to_string().ends_with(": Access denied (error code 403)"), "{}", err);

    let err = session.groups().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(err.to_string().ends_with(": internal error"), "{}", err);
}

#[tokio::test]
async fn singletons_have_no_trailing_id() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "GET /api/contests/nwerc18/scoreboard" => (200, r#"{"event_id": "10", "rows": [{"rank": 1, "team_id": "3"}]}"#),
        "GET /api/contests/nwerc18/state" => (200, r#"{"started": "2018-11-25T10:00:00+01:00", "ended": null}"#),
        "GET /api/contests/nwerc18/account" => (200, r#"{"id": "admin", "username": "admin", "type": "admin"}"#),
    })
    .await;

    let session = bound(&server).await;
    let sb = session.scoreboard().await.unwrap();
    assert_eq!(sb.rows[0].team_id, "3");
    assert!(session.state().await.unwrap().is_running());
    assert_eq!(session.account().await.unwrap().kind, "admin");

    assert_eq!(
        server.paths()[1..],
        [
            "GET /api/contests/nwerc18/scoreboard",
            "GET /api/contests/nwerc18/state",
            "GET /api/contests/nwerc18/account",
        ]
    );
}

#[tokio::test]
async fn post_submission_sends_zip_bundle() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "POST /api/contests/nwerc18/submissions" => (200, SUBMISSION),
    })
    .await;

    let session = bound(&server).await;
    let source = "#include <cstdio>\nint main() { puts(\"hi\"); }\n";
    let files = LocalFileReference::new().with_string("sample.cpp", source);
    let created = session
        .post_submission("accesspoints", "cpp", "", files)
        .await
        .unwrap();
    assert_eq!(created.id, "187");
    assert_eq!(created.team_id, "3");

    let req = server.requests().pop().unwrap();
    assert_eq!(req.method, "POST");
    assert_eq!(req.headers["content-type"], "application/json");

    let body = req.json();
    assert_eq!(body["problem_id"], "accesspoints");
    assert_eq!(body["language_id"], "cpp");
    assert!(body.get("entry_point").is_none());
    assert!(body.get("id").is_none());
    assert_eq!(body["files"][0]["mime"], "application/zip");

    let bundle = LocalFileReference::from_base64(body["files"][0]["data"].as_str().unwrap()).unwrap();
    assert_eq!(bundle.len(), 1);
    assert_eq!(bundle.files()[0].filename, "sample.cpp");
    assert_eq!(bundle.files()[0].contents, source.as_bytes());
}

#[tokio::test]
async fn post_submission_reports_server_refusal() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "POST /api/contests/nwerc18/submissions" =>
            (400, r#"{"code": 400, "message": "Problem 'zzz' not found or not submittable"}"#),
    })
    .await;

    let session = bound(&server).await;
    let files = LocalFileReference::new().with_string("a.py", "print(1)");
    let err = session
        .post_submission("zzz", "python3", "", files)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert!(err.to_string().starts_with("Could not submit submission: "), "{}", err);
    assert!(err.to_string().contains("not submittable (error code 400)"), "{}", err);
}

#[tokio::test]
async fn post_clarification_sends_text() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "POST /api/contests/nwerc18/clarifications" => (200, r#"{
            "id": "5", "from_team_id": "3", "to_team_id": null, "reply_to_id": null,
            "problem_id": "accesspoints", "text": "testing clarification",
            "time": "2018-11-25T10:30:00+01:00", "contest_time": "0:30:00.000"
        }"#),
    })
    .await;

    let session = bound(&server).await;
    let c = session
        .post_clarification("accesspoints", "testing clarification")
        .await
        .unwrap();
    assert_eq!(c.id, "5");
    assert!(!c.is_from_jury());

    let body = server.requests().pop().unwrap().json();
    assert_eq!(
        body,
        serde_json::json!({"problem_id": "accesspoints", "text": "testing clarification"})
    );
}

#[tokio::test]
async fn clones_share_the_session() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "GET /api/contests/nwerc18/problems" => (200, PROBLEMS),
        "GET /api/contests/nwerc18/languages" => (200, r#"[{"id": "cpp", "name": "C++", "extensions": ["cpp", "cc"]}]"#),
    })
    .await;

    let session = bound(&server).await;
    let other = session.clone();
    let (problems, languages) = tokio::join!(session.problems(), other.languages());
    assert_eq!(problems.unwrap().len(), 3);
    assert_eq!(languages.unwrap()[0].extensions, ["cpp", "cc"]);
}

#[tokio::test]
async fn session_from_config() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
    })
    .await;

    let config = SessionConfig {
        base_url: server.base_url.clone(),
        username: "admin".to_owned(),
        password: "admin".to_owned(),
        contest: "nwerc18".to_owned(),
        insecure: false,
    };
    let session = Session::from_config(&config).await.unwrap();
    assert_eq!(session.contest_id().unwrap(), "nwerc18");

    let config = SessionConfig {
        contest: String::new(),
        ..config
    };
    let session = Session::from_config(&config).await.unwrap();
    assert!(!session.is_bound());
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn submit_sends_custom_value() {
    let server = StubServer::start(hashmap! {
        "GET /api/contests/nwerc18" => (200, CONTEST),
        "POST /api/contests/nwerc18/clarifications" => (200, r#"{
            "id": "6", "from_team_id": null, "to_team_id": "3", "reply_to_id": "5",
            "problem_id": "accesspoints", "text": "No, read the statement.",
            "time": "2018-11-25T10:35:00+01:00", "contest_time": "0:35:00.000"
        }"#),
    })
    .await;

    let session = bound(&server).await;
    let reply = Clarification {
        to_team_id: "3".into(),
        reply_to_id: "5".into(),
        ..Clarification::new("accesspoints", "No, read the statement.")
    };
    let created = session.submit(&reply).await.unwrap();
    assert_eq!(created.id, "6");
    assert!(created.is_from_jury());

    let req = server.requests().pop().unwrap();
    assert_eq!(req.path, "/api/contests/nwerc18/clarifications");
    assert_eq!(
        req.json(),
        serde_json::json!({
            "to_team_id": "3",
            "reply_to_id": "5",
            "problem_id": "accesspoints",
            "text": "No, read the statement."
        })
    );
}
