use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use board_service::handlers;
use chrono::Utc;
use db_pool::{create_pool as create_pg_pool, DbConfig as DbPoolConfig};
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct HealthState {
    db_pool: sqlx::Pool<sqlx::Postgres>,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    status: ComponentStatus,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

impl HealthState {
    fn new(db_pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self { db_pool }
    }

    async fn check_postgres(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.db_pool)
            .await
            .map(|_| ())
    }
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match state.check_postgres().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "board-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "board-service"
        })),
    }
}

async fn readiness_summary(state: web::Data<HealthState>) -> HttpResponse {
    let mut checks = HashMap::new();

    let start = Instant::now();
    let (ready, status) = match state.check_postgres().await {
        Ok(_) => {
            checks.insert(
                "postgres".to_string(),
                ComponentCheck {
                    status: ComponentStatus::Healthy,
                    message: "connected".to_string(),
                    latency_ms: Some(start.elapsed().as_millis() as u64),
                },
            );
            (true, ComponentStatus::Healthy)
        }
        Err(e) => {
            checks.insert(
                "postgres".to_string(),
                ComponentCheck {
                    status: ComponentStatus::Unhealthy,
                    message: e.to_string(),
                    latency_ms: None,
                },
            );
            (false, ComponentStatus::Unhealthy)
        }
    };

    let response = ReadinessResponse {
        ready,
        status,
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

/// Board Service
///
/// A service that handles the Plaza community board: posts with tags, the
/// like toggle with its denormalized counter, comments, and reports.
///
/// # Routes
///
/// - `/api/v1/posts/*` - Save, read, list, delete posts; comments and reports
/// - `/api/v1/likes/toggle` - Toggle a like on a post
/// - `/api/v1/tags` - Tag listing
///
/// # Deployment
///
/// Board-service runs on port 8082 (configurable via BOARD_SERVICE_PORT).
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match board_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting board-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Create database pool
    let db_config = DbPoolConfig {
        service_name: "board-service".to_string(),
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..DbPoolConfig::default()
    };
    db_config.log_config();

    let db_pool = create_pg_pool(db_config).await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to create database pool: {}", e),
        )
    })?;

    // Run pending migrations
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Migrations failed: {}", e))
        })?;

    let health_state = web::Data::new(HealthState::new(db_pool.clone()));
    let http_bind_address = format!("{}:{}", config.app.host, config.app.port);

    tracing::info!("HTTP server listening on {}", http_bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            // Health check endpoints
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/ready", web::get().to(readiness_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::post().to(handlers::create_post))
                                    .route(web::get().to(handlers::list_posts)),
                            )
                            .service(
                                web::resource("/{post_id}")
                                    .route(web::get().to(handlers::get_post))
                                    .route(web::delete().to(handlers::delete_post)),
                            )
                            .service(
                                web::resource("/{post_id}/comments")
                                    .route(web::post().to(handlers::create_comment))
                                    .route(web::get().to(handlers::get_post_comments)),
                            )
                            .service(
                                web::resource("/{post_id}/reports")
                                    .route(web::post().to(handlers::report_post)),
                            ),
                    )
                    .service(
                        web::scope("/likes")
                            .route("/toggle", web::post().to(handlers::toggle_like)),
                    )
                    .service(web::scope("/tags").route("", web::get().to(handlers::list_tags))),
            )
    })
    .bind(&http_bind_address)?
    .workers(4)
    .run()
    .await
}
