use algoviz::cli::{CliArgs, OutputFormatter, Runner};
use algoviz::config::{AlgovizConfig, LoggingConfig};
use algoviz::Result;
use tracing::{debug, Level};

fn main() -> Result<()> {
    let args = CliArgs::parse_args();

    // 验证参数
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // 生成默认配置文件
    if args.generate_config {
        let config = AlgovizConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        println!("📝 You can edit this file to change the defaults.");
        return Ok(());
    }

    // 加载配置
    let mut config = AlgovizConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }
    if args.steps {
        config.visualization.record_steps = true;
    }
    if args.json {
        config.visualization.format = "json".to_string();
    }

    // 验证配置
    config.validate()?;

    // 初始化日志系统
    init_logging(&config.logging)?;
    debug!(version = env!("CARGO_PKG_VERSION"), "algoviz starting");

    if args.show_config {
        config.print_summary();
    }

    let Some(command) = args.command else {
        return Ok(());
    };

    let json = config.visualization.format == "json";
    let mut runner = Runner::new(config);
    match runner.run(&command) {
        Ok(report) if json => println!("{}", OutputFormatter::format_json(&report)?),
        Ok(report) => println!("{}", OutputFormatter::format_report(&report)),
        Err(e) => {
            eprintln!("{}", OutputFormatter::format_error(&e));
            std::process::exit(1);
        }
    }

    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| format!("Failed to open log file '{}': {}", log_file.display(), e))?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
        _ => {
            // 控制台日志写到 stderr，stdout 只输出报告
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }

    Ok(())
}
