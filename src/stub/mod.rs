//! In-memory actix-web implementation of the employees API.
//!
//! Used for local runs (`STUB_SERVER_ADDR`) and end-to-end tests.

mod employee;
mod routes;
mod store;

use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use reqwest::Url;
use tracing::info;

use crate::model::employee::EmployeeRecord;
use store::EmployeeStore;

pub struct StubServer {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl StubServer {
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&format!("http://{}/", self.addr)).context("stub address is not a valid URL")
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Bind `addr` (port 0 picks a free port) and serve in the background.
pub fn spawn(addr: &str, seed: Vec<EmployeeRecord>) -> Result<StubServer> {
    let store = Data::new(EmployeeStore::with_records(seed));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .workers(1)
    .disable_signals()
    .bind(addr)
    .with_context(|| format!("failed to bind stub API on {addr}"))?;

    let bound = server
        .addrs()
        .first()
        .copied()
        .context("stub API bound no address")?;
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    info!(addr = %bound, "stub employees API listening");
    Ok(StubServer {
        addr: bound,
        handle,
    })
}

pub fn demo_records() -> Vec<EmployeeRecord> {
    vec![
        EmployeeRecord::new(0, "Ana", "Silva", "ana.silva@example.com", "120.45678.90-1"),
        EmployeeRecord::new(0, "Bruno", "Costa", "bruno.costa@example.com", "209.87654.32-1"),
        EmployeeRecord::new(0, "Carla", "Souza", "carla.souza@example.com", "301.23456.78-9"),
    ]
}
