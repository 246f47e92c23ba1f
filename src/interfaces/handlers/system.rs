use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;
use sysinfo::System;

use crate::{constants::START_TIME, use_cases::extractors::AdminSession, AppState};

#[derive(Serialize)]
struct SystemInfo {
    os: String,
    hostname: String,
    cpu_count: usize,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    database: String,
    version: String,
    system: SystemInfo,
}

pub async fn admin_health_check(
    _admin: AdminSession,
    state: web::Data<AppState>,
) -> impl Responder {
    let now_utc = Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime =
        format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "OK",
        Err(_) => "Unavailable",
    };

    let mut sys = System::new();
    sys.refresh_cpu_all();

    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        system: SystemInfo {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
            cpu_count: sys.cpus().len(),
        },
    };

    HttpResponse::Ok().json(response)
}
