// ==========================================
// 订单查询助手 - 命令行
// ==========================================
// 子命令: customers / ask；无子命令时进入交互页面
// stdout 只输出查询结果，日志与错误写 stderr
// ==========================================

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;

use crate::api::ApiError;
use crate::app::interactive::InteractiveSession;
use crate::app::page::{Palette, PageRenderer};
use crate::app::state::AppState;
use crate::config::{AppConfig, ColorMode, ConfigOverrides};
use crate::domain::QueryKind;
use crate::logging::LogFormat;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "order-lookup")]
#[command(about = "Static order lookup assistant (price, status, details)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 配置文件路径
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 订单数据文件（.csv / .xlsx / .xls）
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[arg(long, global = true)]
    pub currency: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// 日志输出为 JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 列出客户
    Customers,

    /// 查询一个客户的订单
    Ask {
        customer: String,

        #[arg(long, default_value = "price")]
        kind: QueryKind,

        /// 渲染完整页面
        #[arg(long)]
        page: bool,
    },
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            locale: self.locale.clone(),
            currency_symbol: self.currency.clone(),
            data_file: self.data.clone(),
            color: self.color,
        }
    }
}

/// 解析配置、装配状态并执行命令（使用进程的标准输入输出）
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::resolve(cli.config.as_deref(), &cli.overrides())?;
    let color = config.color.enabled(io::stdout().is_terminal());
    let state = AppState::new(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = execute(
        &cli,
        &state,
        color,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(ExitCode::from(status))
}

/// 客户不存在时的退出码
pub const EXIT_NOT_FOUND: u8 = 1;

/// 执行命令
///
/// # 返回
/// - 0: 正常结束
/// - EXIT_NOT_FOUND: 客户不存在
pub fn execute<R, W, E>(
    cli: &Cli,
    state: &AppState,
    color: bool,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<u8>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let api = state.lookup_api.as_ref();
    let palette = Palette::new(color && cli.format == OutputFormat::Plain);
    let renderer = PageRenderer::new(api, palette);

    match &cli.command {
        None => {
            let answered = InteractiveSession::new(renderer).run(input, out)?;
            tracing::debug!(answered, "交互会话结束");
        }

        Some(Commands::Customers) => {
            let customers = api.list_customers();
            match cli.format {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&customers)?)?;
                }
                OutputFormat::Plain => {
                    for customer in &customers {
                        writeln!(out, "{}", customer)?;
                    }
                }
            }
        }

        Some(Commands::Ask {
            customer,
            kind,
            page,
        }) => match api.answer(customer, *kind) {
            Ok(answer) => match cli.format {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&answer)?)?;
                }
                OutputFormat::Plain if *page => {
                    renderer.render_page(out, customer, *kind, &answer)?;
                }
                OutputFormat::Plain => {
                    renderer.write_answer(out, &answer)?;
                }
            },
            Err(e @ ApiError::NotFound { .. }) => {
                match cli.format {
                    OutputFormat::Json => {
                        writeln!(out, "{}", serde_json::to_string_pretty(&e.to_response())?)?;
                    }
                    OutputFormat::Plain => {
                        renderer.write_not_found(err, customer)?;
                    }
                }
                return Ok(EXIT_NOT_FOUND);
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(0)
}
