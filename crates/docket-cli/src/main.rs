//! docket-cli
//!
//! デモ: インメモリストアを差し込んだ TaskService で、task リソースの
//! ライフサイクル（create / list / update / delete）を一通り流す。
//! 本番のエンドポイント層（HTTP など）はこのサービスの薄い写像になる。

use std::sync::Arc;

use docket_core::app::ServiceBuilder;
use docket_core::domain::{ListQuery, TaskDraft, TaskPatch, TaskStatus};
use docket_core::impls::InMemoryTaskStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,docket_core=debug")),
        )
        .init();

    // (A) ストアとサービスを用意（ストアは明示的に注入する）
    let store = Arc::new(InMemoryTaskStore::new());
    let service = ServiceBuilder::new()
        .store(store)
        .build()
        .expect("service wiring");

    // (B) タスクを作成
    let groceries = service
        .create(&TaskDraft::new("Buy groceries"))
        .await
        .expect("create groceries");
    let report = service
        .create(&TaskDraft {
            description: Some("Quarterly numbers for the team meeting".to_string()),
            ..TaskDraft::new("Write report")
        })
        .await
        .expect("create report");
    println!("created: {}", render(&groceries));
    println!("created: {}", render(&report));

    // (C) 一覧（フィルタなし → 作成順）
    let all = service.list(&ListQuery::all()).await.expect("list all");
    println!("listed {} tasks", all.len());

    // (D) 更新（status 遷移 + updated_at の更新）
    let in_progress = service
        .update(
            groceries.id,
            &TaskPatch {
                status: Some("in_progress".to_string()),
                ..TaskPatch::default()
            },
        )
        .await
        .expect("start groceries");
    println!("updated: {}", render(&in_progress));

    let done = service
        .update(
            groceries.id,
            &TaskPatch {
                status: Some("completed".to_string()),
                ..TaskPatch::default()
            },
        )
        .await
        .expect("finish groceries");
    println!("updated: {}", render(&done));

    // (E) completed だけを一覧
    let completed = service
        .list(&ListQuery::with_status(TaskStatus::Completed))
        .await
        .expect("list completed");
    println!("completed tasks: {}", completed.len());

    // (F) 削除。2 回目は NotFound になる（削除は一度きりのイベント）
    service.delete(groceries.id).await.expect("delete groceries");
    match service.delete(groceries.id).await {
        Ok(()) => unreachable!("second delete must fail"),
        Err(err) => println!("second delete rejected: {err}"),
    }

    let remaining = service.list(&ListQuery::all()).await.expect("list remaining");
    println!("remaining tasks: {}", remaining.len());
}

fn render(task: &docket_core::domain::Task) -> String {
    serde_json::to_string(task).expect("task serializes")
}
