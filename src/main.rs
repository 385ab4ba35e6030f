// ==========================================
// 学生实习数据汇总 - 命令行主入口
// ==========================================

use internship_consolidator::cli::{self, CliArgs, Command};
use internship_consolidator::logging::{self, LogFormat};

fn main() {
    let parsed = CliArgs::parse_from(std::env::args().skip(1));

    // 初始化日志系统 (格式取决于 --log-json)
    let format = match &parsed {
        Ok(Command::Run(args)) => args.log_format(),
        _ => LogFormat::Text,
    };
    logging::init_with(format);

    tracing::info!("{} v{}", internship_consolidator::APP_NAME, internship_consolidator::VERSION);

    let code = match parsed {
        Ok(Command::Help) => {
            println!("{}", cli::HELP);
            cli::EXIT_OK
        }
        Ok(Command::Run(args)) => match cli::run(&args) {
            Ok(code) => code,
            Err(e) => {
                tracing::error!("汇总失败: {:#}", e);
                eprintln!("error: {:#}", e);
                cli::EXIT_FATAL
            }
        },
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, cli::HELP);
            cli::EXIT_FATAL
        }
    };

    std::process::exit(code);
}
