#![allow(dead_code)] // not every test binary uses every helper

use std::collections::HashMap;

use axum::http::StatusCode;
use axum_test::TestServer;
use edtech::{Config, build_server_with_store, model::MemoryStore, web::AppState};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

pub const QUERY_PATH: &str = "/query";

/// Server over a fresh seeded store. Every test gets its own store, nothing leaks between them.
pub fn setup_server() -> (AppState, TestServer) {
    setup_server_with_config(&Config::default())
}

pub fn setup_server_with_config(config: &Config) -> (AppState, TestServer) {
    let (state, app) = build_server_with_store(MemoryStore::seeded(), config);
    (state, TestServer::new(app).unwrap())
}

#[derive(Debug)]
pub struct FlowContext {
    pub store: HashMap<&'static str, Value>, // a way to pass data between steps
}

impl FlowContext {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn store(&mut self, key: &'static str, val: Value) {
        self.store.insert(key, val);
    }

    pub fn get(&self, key: &str) -> &Value {
        self.store.get(key).expect("missing store key")
    }

    /// String found at `pointer` (JSON pointer) inside the data saved under `key`.
    pub fn get_str(&self, key: &str, pointer: &str) -> String {
        self.get(key)
            .pointer(pointer)
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("no string at {pointer} in {key}"))
            .to_string()
    }

    #[allow(unused)]
    pub fn get_json<T>(&self, key: &str, pointer: &str) -> T
    where
        T: DeserializeOwned,
    {
        let obj = self
            .get(key)
            .pointer(pointer)
            .unwrap_or_else(|| panic!("nothing at {pointer} in {key}"));
        serde_json::from_value(obj.clone()).expect("Invalid json format")
    }
}

pub struct Action {
    pub name: &'static str,
    pub query: &'static str,
    pub variables: Option<Value>,
    pub dyn_variables: Option<Box<dyn Fn(&FlowContext) -> Value + Send + Sync>>,
    pub expect_error: Option<&'static str>,
    pub data_asserts: Vec<Box<dyn Fn(&Value) + Send + Sync>>,
    pub save_as: Option<&'static str>,
}

impl Action {
    pub fn new(name: &'static str, query: &'static str) -> Self {
        Self {
            name,
            query,
            variables: None,
            dyn_variables: None,
            expect_error: None,
            data_asserts: vec![],
            save_as: None,
        }
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn with_dyn_variables<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowContext) -> Value + Send + Sync + 'static,
    {
        self.dyn_variables = Some(Box::new(f));
        self
    }

    /// The operation must fail with exactly this message.
    pub fn with_expect_error(mut self, message: &'static str) -> Self {
        self.expect_error = Some(message);
        self
    }

    pub fn with_save_as(mut self, key: &'static str) -> Self {
        self.save_as = Some(key);
        self
    }

    pub fn assert_data<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.data_asserts.push(Box::new(check));
        self
    }
}

pub struct Flow {
    actions: Vec<Action>,
}

impl Flow {
    pub fn new() -> Self {
        Self { actions: vec![] }
    }

    pub fn step(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub async fn run(self, server: &TestServer) -> FlowContext {
        let mut ctx = FlowContext::new(); // create new context for this flow
        for action in self.actions {
            println!("==> Running test action `{}`", action.name);

            let variables = match (action.dyn_variables, action.variables) {
                (Some(f), _) => f(&ctx),
                (_, Some(json)) => json,
                _ => json!({}),
            };

            let body = graphql(server, action.query, variables).await;

            match action.expect_error {
                Some(message) => {
                    assert_eq!(
                        body["errors"][0]["message"], message,
                        "unexpected errors in `{}`: {body}",
                        action.name
                    );
                    assert_eq!(
                        body["errors"][0]["extensions"]["code"],
                        "REFERENCE_NOT_FOUND"
                    );
                }
                None => assert!(
                    body.get("errors").is_none(),
                    "`{}` failed: {body}",
                    action.name
                ),
            }

            for check in action.data_asserts {
                check(&body["data"]);
            }

            if let Some(save_key) = action.save_as {
                ctx.store(save_key, body["data"].clone());
            }
        }
        ctx
    }
}

pub async fn graphql(server: &TestServer, query: &str, variables: Value) -> Value {
    let resp = server
        .post(QUERY_PATH)
        .json(&json!({ "query": query, "variables": variables }))
        .await;
    resp.assert_status(StatusCode::OK);
    resp.json::<Value>()
}

// Common actions builders

pub const CREATE_COURSE: &str = r#"
    mutation CreateCourse($input: CreateCourseInput!) {
        createCourse(input: $input) { id grade title subject { id name } }
    }
"#;

pub const CREATE_UNIT: &str = r#"
    mutation CreateUnit($input: CreateUnitInput!) {
        createUnit(input: $input) { id title order course { id } }
    }
"#;

pub const CREATE_LESSON: &str = r#"
    mutation CreateLesson($input: CreateLessonInput!) {
        createLesson(input: $input) { id title order version status unit { id } }
    }
"#;

pub fn create_course_action(subject_id: &str, grade: i32, title: &str) -> Action {
    Action::new("create_course", CREATE_COURSE).with_variables(json!({
        "input": { "subjectId": subject_id, "grade": grade, "title": title }
    }))
}

/// Unit under the course saved as `course_key`.
pub fn create_unit_action(course_key: &'static str, title: &'static str) -> Action {
    Action::new("create_unit", CREATE_UNIT).with_dyn_variables(move |ctx| {
        json!({
            "input": { "courseId": ctx.get_str(course_key, "/createCourse/id"), "title": title }
        })
    })
}

/// Lesson under the unit saved as `unit_key`.
pub fn create_lesson_action(unit_key: &'static str, title: &'static str) -> Action {
    Action::new("create_lesson", CREATE_LESSON).with_dyn_variables(move |ctx| {
        json!({
            "input": { "unitId": ctx.get_str(unit_key, "/createUnit/id"), "title": title }
        })
    })
}
