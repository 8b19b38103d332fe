use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // 提前加载 .env，使 RUST_LOG / LOG_FORMAT / CONFIG_PATH 可从中读取
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "personas", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：未捕获的 panic 写入错误日志
    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "personas",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(
                service = "personas",
                event = "config_invalid",
                error = %e,
                "cannot load configuration"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    // 线程数：环境变量 TOKIO_WORKER_THREADS 优先，其次 config.toml
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|w| *w > 0)
        .or(cfg.server.worker_threads);

    // 构建 Tokio 运行时
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "personas",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "personas",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        database = %cfg.db.database,
        addr = %cfg.server.bind_addr(),
        "personas server starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(
                service = "personas",
                event = "stop",
                %service_id,
                pid,
                "server stopped normally"
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                service = "personas",
                event = "run_failed",
                error = %e,
                "server::run returned error"
            );
            std::process::ExitCode::FAILURE
        }
    }
}
