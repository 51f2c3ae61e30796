//! docket-core
//!
//! Core building blocks for the Docket task service: a resource-oriented
//! CRUD core for task records, storage-agnostic behind a `TaskStore` port.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, status, task, spec, query, errors）
//! - **ports**: 抽象化レイヤー（TaskStore, Clock, IdGenerator）
//! - **impls**: 実装（InMemoryTaskStore など開発用）
//! - **app**: アプリケーションロジック（TaskService, ServiceBuilder）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
