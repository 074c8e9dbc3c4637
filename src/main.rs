//! Inkdesk - AI 小说写作工作台命令行
//!
//! 每个子命令驱动库中对应的页面状态，输出页面最终呈现的内容

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use inkdesk::application::{
    ApplicationError, ChapterListPage, ChatPanel, ChatPort, ChatRole, ListPage, ProjectListPage,
    Resource, ResourceGateway, SortOrder, TitleRequest, TitleSuggester, WorldForm, WorldListPage,
};
use inkdesk::config::{load_config, load_config_from_path, print_config, AppConfig};
use inkdesk::domain::project::{Chapter, NovelProject};
use inkdesk::domain::world::World;
use inkdesk::domain::EntityId;
use inkdesk::infrastructure::{
    HttpApiClient, HttpApiClientConfig, HttpResourceGateway, InMemoryBackend, MockTitleSuggester,
    MockTitleSuggesterConfig,
};

#[derive(Parser, Debug)]
#[command(name = "inkdesk", about = "AI 小说写作工作台命令行", version)]
struct Cli {
    /// 配置文件路径（默认搜索 inkdesk.toml / inkdesk.local.toml）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 使用内置示例数据的内存后端，不访问网络
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 世界观管理
    Worlds(WorldsCommand),
    /// 作品管理
    Projects(ProjectsCommand),
    /// 章节管理
    Chapters(ChaptersCommand),
    /// AI 助手对话
    Chat(ChatCommand),
    /// 书名建议
    Titles {
        #[arg(long)]
        genre: String,
        #[arg(long)]
        style: Option<String>,
    },
}

#[derive(Args, Debug)]
struct WorldsCommand {
    #[command(subcommand)]
    command: WorldsSubcommand,
}

#[derive(Subcommand, Debug)]
enum WorldsSubcommand {
    List {
        /// 按名称过滤（不区分大小写）
        #[arg(long)]
        filter: Option<String>,
        /// default | name | name-desc
        #[arg(long, default_value = "default")]
        sort: SortOrder,
    },
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct ProjectsCommand {
    #[command(subcommand)]
    command: ProjectsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProjectsSubcommand {
    List,
}

#[derive(Args, Debug)]
struct ChaptersCommand {
    #[command(subcommand)]
    command: ChaptersSubcommand,
}

#[derive(Subcommand, Debug)]
enum ChaptersSubcommand {
    List { project_id: String },
}

#[derive(Args, Debug)]
struct ChatCommand {
    #[command(subcommand)]
    command: ChatSubcommand,
}

#[derive(Subcommand, Debug)]
enum ChatSubcommand {
    Send {
        project_id: String,
        message: String,
    },
    History {
        project_id: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    Context {
        project_id: String,
    },
    Clear {
        project_id: String,
    },
}

/// 数据来源：远端后端或离线内存后端
enum Backend {
    Http(HttpApiClient),
    Memory(Arc<InMemoryBackend>),
}

impl Backend {
    fn from_config(config: &AppConfig, offline: bool) -> anyhow::Result<Self> {
        if offline {
            tracing::info!("Using offline in-memory backend");
            let backend = InMemoryBackend::with_sample_data()
                .map_err(|e| anyhow::anyhow!("Failed to seed offline data: {}", e))?;
            return Ok(Backend::Memory(backend.arc()));
        }

        let client = HttpApiClient::new(HttpApiClientConfig::from(&config.api))?;
        Ok(Backend::Http(client))
    }

    fn worlds(&self) -> Arc<dyn ResourceGateway<World>> {
        match self {
            Backend::Http(client) => Arc::new(HttpResourceGateway::worlds(client.clone())),
            Backend::Memory(memory) => memory.worlds(),
        }
    }

    fn projects(&self) -> Arc<dyn ResourceGateway<NovelProject>> {
        match self {
            Backend::Http(client) => Arc::new(HttpResourceGateway::projects(client.clone())),
            Backend::Memory(memory) => memory.projects(),
        }
    }

    fn chapters(&self, project_id: &EntityId) -> Arc<dyn ResourceGateway<Chapter>> {
        match self {
            Backend::Http(client) => {
                Arc::new(HttpResourceGateway::chapters(client.clone(), project_id))
            }
            Backend::Memory(memory) => memory.chapters(project_id),
        }
    }

    fn chat(&self) -> Arc<dyn ChatPort> {
        match self {
            Backend::Http(client) => Arc::new(client.clone()),
            Backend::Memory(memory) => memory.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = match &cli.config {
        Some(path) => load_config_from_path(Some(path.as_path())),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    let backend = Backend::from_config(&config, cli.offline)?;

    match cli.command {
        Command::Worlds(cmd) => run_worlds(cmd.command, &backend, &config).await,
        Command::Projects(cmd) => match cmd.command {
            ProjectsSubcommand::List => run_projects_list(&backend, &config).await,
        },
        Command::Chapters(cmd) => match cmd.command {
            ChaptersSubcommand::List { project_id } => {
                run_chapters_list(&EntityId::new(project_id), &backend, &config).await
            }
        },
        Command::Chat(cmd) => run_chat(cmd.command, &backend, &config).await,
        Command::Titles { genre, style } => run_titles(genre, style, &config).await,
    }
}

/// 初始化日志，输出到 stderr，stdout 只留给命令结果
fn init_tracing(config: &AppConfig) {
    let log_filter = format!("{},inkdesk={}", config.log.level, config.log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 把页面上展示的错误文案作为命令失败原因
fn page_failure<T: Resource>(page: &ListPage<T>, err: ApplicationError) -> anyhow::Error {
    let message = page
        .error()
        .or(page.alert())
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());
    anyhow::anyhow!(message)
}

fn print_success<T: Resource>(page: &ListPage<T>) {
    if let Some(message) = page.success_message() {
        println!("{}", message);
    }
}

fn print_world_row(world: &World) {
    println!(
        "{}\t{}\t{} 个设定\t{}",
        world.id,
        world.name,
        world.element_count(),
        world.description
    );
}

async fn run_worlds(
    command: WorldsSubcommand,
    backend: &Backend,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let mut page = WorldListPage::new(backend.worlds(), config.ui.list_page());

    match command {
        WorldsSubcommand::List { filter, sort } => {
            page.fetch_list()
                .await
                .map_err(|e| page_failure(&page, e))?;
            if let Some(filter) = filter {
                page.set_filter(filter);
            }
            page.set_sort(sort);

            let visible = page.visible_items();
            if visible.is_empty() {
                println!("暂无世界观");
            }
            for world in visible {
                print_world_row(world);
            }
        }
        WorldsSubcommand::Show { id } => {
            page.handle_edit(&EntityId::new(id))
                .await
                .map_err(|e| page_failure(&page, e))?;
            if let Some(world) = page.modal().target() {
                println!("{}", serde_json::to_string_pretty(world)?);
            }
        }
        WorldsSubcommand::Create {
            name,
            description,
            notes,
        } => {
            let mut form = WorldForm::create();
            form.set_name(name);
            form.set_description(description);
            if let Some(notes) = notes {
                form.set_notes(notes);
            }

            page.open_add();
            page.submit_form(&form)
                .await
                .map_err(|e| page_failure(&page, e))?;
            print_success(&page);
        }
        WorldsSubcommand::Update {
            id,
            name,
            description,
            notes,
        } => {
            page.handle_edit(&EntityId::new(id))
                .await
                .map_err(|e| page_failure(&page, e))?;
            let current = page
                .modal()
                .target()
                .cloned()
                .context("No world loaded for editing")?;

            let mut form = WorldForm::edit(&current);
            if let Some(name) = name {
                form.set_name(name);
            }
            if let Some(description) = description {
                form.set_description(description);
            }
            if let Some(notes) = notes {
                form.set_notes(notes);
            }

            page.submit_form(&form)
                .await
                .map_err(|e| page_failure(&page, e))?;
            print_success(&page);
        }
        WorldsSubcommand::Delete { id } => {
            page.handle_edit(&EntityId::new(id))
                .await
                .map_err(|e| page_failure(&page, e))?;
            let target = page
                .modal()
                .target()
                .cloned()
                .context("No world loaded for deletion")?;

            page.open_delete(target);
            page.handle_confirm_delete()
                .await
                .map_err(|e| page_failure(&page, e))?;
            print_success(&page);
        }
    }

    Ok(())
}

async fn run_projects_list(backend: &Backend, config: &AppConfig) -> anyhow::Result<()> {
    let mut page = ProjectListPage::new(backend.projects(), config.ui.list_page());
    page.fetch_list()
        .await
        .map_err(|e| page_failure(&page, e))?;

    if page.items().is_empty() {
        println!("暂无作品");
    }
    for project in page.items() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            project.id,
            project.title,
            project.genre,
            project.status().as_str(),
            project.metadata.tags.join(",")
        );
    }
    Ok(())
}

async fn run_chapters_list(
    project_id: &EntityId,
    backend: &Backend,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let mut page = ChapterListPage::new(backend.chapters(project_id), config.ui.list_page());
    page.fetch_list()
        .await
        .map_err(|e| page_failure(&page, e))?;

    let mut chapters: Vec<&Chapter> = page.items().iter().collect();
    chapters.sort_by_key(|c| c.sort_order);

    if chapters.is_empty() {
        println!("暂无章节");
    }
    for chapter in chapters {
        let progress = chapter
            .progress_percent()
            .map(|p| format!("{}%", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}\t{}\t{}\t{} 字\t{}",
            chapter.sort_order,
            chapter.title,
            chapter.status.label(),
            chapter.word_count,
            progress
        );
    }
    Ok(())
}

async fn run_chat(
    command: ChatSubcommand,
    backend: &Backend,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let history_limit = config.ui.chat_history_limit;

    match command {
        ChatSubcommand::Send {
            project_id,
            message,
        } => {
            let mut panel = ChatPanel::new(backend.chat(), EntityId::new(project_id))
                .with_history_limit(history_limit);

            // Ctrl-C 只中断本次回复
            let cancel = CancellationToken::new();
            let guard = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    guard.cancel();
                }
            });

            let result = panel
                .send_with(&message, cancel, &mut |line: &str| println!("{}", line))
                .await;
            if let Err(e) = result {
                let message = panel
                    .error()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.user_message("AI 回复失败"));
                anyhow::bail!(message);
            }
        }
        ChatSubcommand::History { project_id, limit } => {
            let mut panel = ChatPanel::new(backend.chat(), EntityId::new(project_id))
                .with_history_limit(limit.unwrap_or(history_limit));
            panel
                .load_history()
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("获取对话历史失败")))?;

            if panel.messages().is_empty() {
                println!("暂无对话记录");
            }
            for message in panel.messages() {
                let role = match message.role {
                    ChatRole::User => "我",
                    ChatRole::Assistant => "AI",
                    ChatRole::System => "系统",
                };
                println!("[{}] {}", role, message.content);
            }
        }
        ChatSubcommand::Context { project_id } => {
            let mut panel = ChatPanel::new(backend.chat(), EntityId::new(project_id));
            let context = panel
                .context()
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("获取对话上下文失败")))?;

            println!("消息数: {}", context.messages.len());
            if let Some(tokens) = context.token_count {
                println!("Token 数: {}", tokens);
            }
            if let Some(summary) = context.summary {
                println!("摘要: {}", summary);
            }
        }
        ChatSubcommand::Clear { project_id } => {
            let mut panel = ChatPanel::new(backend.chat(), EntityId::new(project_id));
            panel
                .clear_context()
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("清空对话上下文失败")))?;
            println!("对话上下文已清空");
        }
    }

    Ok(())
}

async fn run_titles(
    genre: String,
    style: Option<String>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let suggester = MockTitleSuggester::new(
        MockTitleSuggesterConfig::default()
            .with_delay(Duration::from_millis(config.ui.suggestion_delay_ms)),
    );

    let mut request = TitleRequest::new(genre);
    if let Some(style) = style {
        request = request.with_style(style);
    }

    for title in suggester.suggest_titles(&request).await {
        println!("{}", title);
    }
    Ok(())
}
