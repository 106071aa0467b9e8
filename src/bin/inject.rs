//! 报文注入命令行
//!
//! 在两个拓扑节点之间注入合成报文（ICMP / TCP / UDP）。

use std::process::ExitCode;

use clap::Parser;
use pktinject_rs::InjectError;
use pktinject_rs::form::{InjectForm, InjectionType, NodeRef};
use pktinject_rs::highlight::{HighlightSet, Highlighter};
use pktinject_rs::submit::{
    ClientConfig, DEFAULT_BASE_URL, Notification, Notifier, ReqwestClient, Submitter,
};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "inject", about = "报文注入：在两个拓扑节点之间注入合成报文")]
struct Args {
    /// 注入类型：icmp4, icmp6, tcp4, tcp6, udp4, udp6
    #[arg(long = "type", default_value_t = InjectionType::Icmp4)]
    kind: InjectionType,
    /// 源节点 ID
    #[arg(long)]
    from: Option<String>,
    /// 目的节点 ID
    #[arg(long)]
    to: Option<String>,
    /// 当前聚焦的节点；未给出 --from 时作为源节点
    #[arg(long)]
    current_node: Option<String>,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    count: i64,
    /// ICMP identifier
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    id: i64,
    /// 两个报文的间隔（毫秒）
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    interval: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    src_port: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dst_port: i64,
    #[arg(long, default_value_t = 0)]
    payload_length: usize,
    /// Analyzer 地址
    #[arg(long, env = "PKTINJECT_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// 只打印请求 JSON，不发送
    #[arg(long)]
    dry_run: bool,
}

/// 成功写 stdout，失败写 stderr
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::Success(msg) => println!("{msg}"),
            Notification::Error(msg) => eprintln!("error: {msg}"),
        }
    }
}

fn fill_form<H: Highlighter>(form: &mut InjectForm<H>, args: &Args) {
    if let Some(from) = &args.from {
        form.set_node1(NodeRef::new(from.as_str()));
    }
    form.set_node2(args.to.clone().and_then(NodeRef::new));
    form.set_kind(args.kind);
    form.set_count(args.count);
    form.set_id(args.id);
    form.set_interval(args.interval);
    form.set_port1(args.src_port);
    form.set_port2(args.dst_port);
    form.set_payload_length(args.payload_length);
}

async fn run<H: Highlighter>(form: &InjectForm<H>, args: &Args) -> Result<(), InjectError> {
    if args.dry_run {
        let request = form.request().inspect_err(|err| {
            ConsoleNotifier.notify(Notification::Error(err.to_string()));
        })?;
        println!("{}", serde_json::to_string(&request)?);
        return Ok(());
    }

    let client = ReqwestClient::new().inspect_err(|err| {
        ConsoleNotifier.notify(Notification::Error(err.to_string()));
    })?;
    let submitter = Submitter::new(
        ClientConfig::new(args.base_url.as_str()),
        client,
        ConsoleNotifier,
    );
    submitter.submit(form.state()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化 tracing（写 stderr，stdout 留给请求 JSON 与结果）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let highlights = HighlightSet::default();
    let current = args.current_node.clone().and_then(NodeRef::new);
    let mut form = InjectForm::new(highlights.clone(), current.as_ref());
    fill_form(&mut form, &args);

    debug!(fields = ?form.visible_fields(), kind = %args.kind, "当前类型可见字段");
    debug!(highlighted = ?highlights.snapshot(), "高亮节点");
    info!(kind = %args.kind, base_url = %args.base_url, dry_run = args.dry_run, "准备注入");

    let code = match run(&form, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    };

    form.teardown();
    debug!(remaining = highlights.len(), "表单已销毁");
    code
}
