//! 测试用的 axum 模拟后端，监听 127.0.0.1 随机端口

#![allow(dead_code)]

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures_util::StreamExt;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// 模拟后端的可观察状态
#[derive(Default)]
pub struct MockState {
    pub worlds: Mutex<Vec<Value>>,
    /// 收到的 POST /worlds 请求体
    pub created: Mutex<Vec<Value>>,
    /// 收到的 PUT /worlds/{id} 请求体
    pub updated: Mutex<Vec<Value>>,
    /// 收到的列表查询参数
    pub list_queries: Mutex<Vec<HashMap<String, String>>>,
    /// 删除这些 id 时返回 500
    pub failing_deletes: Mutex<Vec<String>>,
    /// 删除失败时附带的包装消息
    pub delete_failure_message: Mutex<Option<String>>,
    /// 作品列表接口返回的业务码
    pub projects_code: Mutex<i64>,
    /// 对话流按这些块推送
    pub stream_chunks: Mutex<Vec<Vec<u8>>>,
    pub chat_requests: Mutex<Vec<Value>>,
    pub context_cleared: Mutex<bool>,
    next_id: Mutex<u64>,
}

impl MockState {
    pub fn with_worlds(worlds: Vec<Value>) -> Arc<Self> {
        let state = Self::default();
        *state.worlds.lock().unwrap() = worlds;
        *state.projects_code.lock().unwrap() = 200;
        *state.next_id.lock().unwrap() = 100;
        Arc::new(state)
    }
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({"code": 200, "message": "success", "data": data}))
}

fn fail(code: i64, message: &str) -> Json<Value> {
    Json(json!({"code": code, "message": message, "data": null}))
}

fn id_of(world: &Value) -> String {
    match &world["id"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

async fn list_worlds(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.list_queries.lock().unwrap().push(query);
    let worlds = state.worlds.lock().unwrap().clone();
    ok(json!({"records": worlds, "total": worlds.len()}))
}

async fn create_world(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Json<Value> {
    state.created.lock().unwrap().push(body.clone());

    let id = {
        let mut next = state.next_id.lock().unwrap();
        *next += 1;
        *next
    };
    let mut world = body;
    world["id"] = json!(id);
    state.worlds.lock().unwrap().push(world.clone());
    ok(world)
}

async fn get_world(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Json<Value> {
    let world = state
        .worlds
        .lock()
        .unwrap()
        .iter()
        .find(|w| id_of(w) == id)
        .cloned();
    match world {
        Some(world) => ok(world),
        None => fail(404, "世界不存在"),
    }
}

async fn update_world(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.updated.lock().unwrap().push(body.clone());
    let mut worlds = state.worlds.lock().unwrap();
    match worlds.iter_mut().find(|w| id_of(w) == id) {
        Some(slot) => {
            *slot = body.clone();
            ok(body)
        }
        None => fail(404, "世界不存在"),
    }
}

async fn delete_world(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    if state.failing_deletes.lock().unwrap().contains(&id) {
        return match state.delete_failure_message.lock().unwrap().clone() {
            Some(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, fail(500, &message)).into_response()
            }
            None => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        };
    }
    state.worlds.lock().unwrap().retain(|w| id_of(w) != id);
    ok(Value::Null).into_response()
}

async fn list_projects(State(state): State<Arc<MockState>>) -> Json<Value> {
    let code = *state.projects_code.lock().unwrap();
    if code != 200 {
        return fail(code, "登录已过期，请重新登录");
    }
    ok(json!({"records": [
        {"id": 7, "title": "星海远航", "genre": "科幻", "metadata": {"tags": ["太空"], "status": "in-progress"}}
    ]}))
}

async fn list_chapters(Path(project_id): Path<String>) -> Json<Value> {
    if project_id != "7" {
        return ok(json!({"records": []}));
    }
    ok(json!({"records": [
        {"id": 1, "title": "第一章 苏醒", "sortOrder": 1, "status": "completed", "wordCount": 3200},
        {"id": 2, "title": "第二章 航迹", "sortOrder": 2, "status": "in-progress", "wordCount": 800, "targetWordCount": 4000}
    ]}))
}

async fn chat_stream(
    State(state): State<Arc<MockState>>,
    Path(project_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.chat_requests.lock().unwrap().push(body);
    if project_id == "503" {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            fail(503, "AI 服务繁忙"),
        )
            .into_response();
    }

    let chunks = state.stream_chunks.lock().unwrap().clone();
    // 每块之间停顿，让客户端分多次读到
    let stream = futures_util::stream::iter(chunks).then(|chunk| async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok::<Vec<u8>, Infallible>(chunk)
    });

    Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "text/plain; charset=utf-8")
        .body(Body::from_stream(stream))
        .unwrap()
}

async fn chat_history(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let limit: usize = query.get("limit").and_then(|l| l.parse().ok()).unwrap_or(50);
    let messages: Vec<Value> = [
        json!({"role": "user", "content": "主角叫什么？"}),
        json!({"role": "assistant", "content": "林舟，殖民舰的维修工。"}),
        json!({"role": "user", "content": "给他一个秘密"}),
    ]
    .into_iter()
    .rev()
    .take(limit)
    .rev()
    .collect();
    ok(json!(messages))
}

async fn chat_context(State(state): State<Arc<MockState>>) -> Json<Value> {
    if *state.context_cleared.lock().unwrap() {
        return ok(json!({"messages": []}));
    }
    ok(json!({
        "messages": [{"role": "user", "content": "主角叫什么？"}],
        "summary": "讨论主角设定",
        "tokenCount": 128
    }))
}

async fn clear_chat_context(State(state): State<Arc<MockState>>) -> Json<Value> {
    *state.context_cleared.lock().unwrap() = true;
    ok(Value::Null)
}

/// 启动模拟后端，返回 `http://127.0.0.1:{port}/api`
pub async fn spawn_backend(state: Arc<MockState>) -> String {
    let api = Router::new()
        .route("/worlds", get(list_worlds).post(create_world))
        .route(
            "/worlds/:id",
            get(get_world).put(update_world).delete(delete_world),
        )
        .route("/projects", get(list_projects))
        .route("/projects/:id/chapters", get(list_chapters))
        .route("/projects/:id/chat/stream", post(chat_stream))
        .route("/projects/:id/chat/history", get(chat_history))
        .route(
            "/projects/:id/chat/context",
            get(chat_context).delete(clear_chat_context),
        )
        .with_state(state);
    let app = Router::new().nest("/api", api);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

pub fn world_json(id: u64, name: &str) -> Value {
    json!({"id": id, "name": name, "description": "", "elements": [], "notes": ""})
}
