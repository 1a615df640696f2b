use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use heat_pump_roi_toolbox::app::{self, AppError};
use heat_pump_roi_toolbox::config::{self, Config};
use heat_pump_roi_toolbox::i18n::{self, Translator};

#[derive(Parser)]
#[command(
    name = "heat_pump_roi_toolbox_cli",
    version,
    about = "Hot-water heat pump sizing and payback calculator"
)]
struct Cli {
    /// 표시 언어 (auto/ko/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 시나리오 파일(TOML) 하나를 계산한다
    Size {
        #[arg(long)]
        scenario: PathBuf,
        /// 후보 카탈로그(.json/.toml). 없으면 설정값을 쓴다
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 후보 카탈로그를 출력한다
    Catalog {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut cfg = match config::load_from(&cli.config) {
        Ok(cfg) => cfg,
        // 설정을 못 읽으면 CLI 언어만으로 오류 문구를 고른다
        Err(err) => exit_with(&Translator::new(&i18n::resolve_language(&cli.lang, None)), &err),
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);
    if let Err(err) = run_command(cli.command, &cli.config, &mut cfg, &tr) {
        exit_with(&tr, &err);
    }
}

fn run_command(
    command: Option<Command>,
    config_path: &Path,
    cfg: &mut Config,
    tr: &Translator,
) -> Result<(), AppError> {
    match command {
        Some(Command::Size {
            scenario,
            catalog,
            json,
        }) => app::run_scenario(cfg, tr, &scenario, catalog.as_deref(), json),
        Some(Command::Catalog { catalog }) => app::list_catalog(cfg, tr, catalog.as_deref()),
        None => app::run(cfg, config_path, tr),
    }
}

fn exit_with(tr: &Translator, err: &dyn std::fmt::Display) -> ! {
    eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
    std::process::exit(1);
}
