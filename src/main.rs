// src/main.rs

use ecs_exec_pf::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level, args.debug) {
        eprintln!("ecs-exec-pf error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        eprintln!("ecs-exec-pf error: {err}");
        std::process::exit(err.exit_code());
    }
}
