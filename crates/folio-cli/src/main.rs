mod commands;
mod render;
mod store;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use folio_client::ReviewQuery;
use folio_core::{FolioConfig, GatewayConfig, RegistrationForm};
use folio_session::SessionStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::Context;
use commands::catalog::{BookEditArgs, NewBookArgs};
use commands::stock::PriceArgs;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Folio bookstore client")]
struct Cli {
    /// Configuration file (YAML). Missing file means defaults.
    #[arg(long, global = true, default_value = "folio.yaml")]
    config: PathBuf,

    /// API gateway URL, overriding the configuration file
    #[arg(long, global = true)]
    gateway_url: Option<String>,

    /// Where the session is kept between invocations
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "FOLIO_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session.
    Logout,

    /// Show who is logged in.
    Whoami,

    /// Print the URL that starts a Google login.
    OauthUrl,

    /// Complete a Google login from the URL the browser was redirected to.
    OauthCallback { url: String },

    /// Create an account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "FOLIO_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        /// Agree to the Terms of Service and Privacy Policy
        #[arg(long, default_value_t = false)]
        accept_terms: bool,
    },

    /// Verify an email address with the token from the verification mail.
    Verify { token: String },

    /// Send the verification mail again.
    ResendVerification {
        #[arg(long)]
        email: String,
    },

    /// Your account.
    Profile {
        #[command(subcommand)]
        cmd: ProfileCommand,
    },

    /// Browse and manage books.
    Books {
        #[command(subcommand)]
        cmd: BooksCommand,
    },

    /// Browse and manage categories.
    Categories {
        #[command(subcommand)]
        cmd: CategoriesCommand,
    },

    /// Manage book prices (admin).
    Prices {
        #[command(subcommand)]
        cmd: PricesCommand,
    },

    /// Manage stock (admin).
    Inventory {
        #[command(subcommand)]
        cmd: InventoryCommand,
    },

    /// Read and write reviews.
    Reviews {
        #[command(subcommand)]
        cmd: ReviewsCommand,
    },

    /// Manage user accounts (admin).
    Users {
        #[command(subcommand)]
        cmd: UsersCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    Show,

    /// Change username and/or email.
    Update {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Permanently delete your account.
    Delete {
        /// Your username, typed again to confirm
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Subcommand, Debug)]
enum BooksCommand {
    List {
        /// Zero-based page number
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long)]
        size: Option<u32>,
        /// Only books in this category
        #[arg(long)]
        category: Option<i64>,
    },

    Show {
        id: i64,
        /// Also list the first page of reviews
        #[arg(long, default_value_t = false)]
        reviews: bool,
    },

    Create(NewBookArgs),

    Update {
        id: i64,
        #[command(flatten)]
        fields: BookEditArgs,
    },

    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
enum CategoriesCommand {
    List,

    Show { id: i64 },

    /// Create a category, or rename an existing one with --id.
    Save {
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        name: String,
    },

    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
enum PricesCommand {
    /// Show the price of a book.
    Show { book_id: i64 },

    Create(PriceArgs),

    Update {
        price_id: i64,
        #[command(flatten)]
        fields: PriceArgs,
    },

    /// Delete the price of a book.
    Delete { book_id: i64 },
}

#[derive(Subcommand, Debug)]
enum InventoryCommand {
    /// Show the stock of a book.
    Show { book_id: i64 },

    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },

    Create {
        #[arg(long)]
        book: i64,
        #[arg(long)]
        quantity: i64,
    },

    Update {
        inventory_id: i64,
        #[arg(long)]
        book: i64,
        #[arg(long)]
        quantity: i64,
        /// Override availability (defaults to quantity > 0)
        #[arg(long)]
        available: Option<bool>,
    },

    /// Delete the stock entry of a book.
    Delete { book_id: i64 },
}

#[derive(Subcommand, Debug)]
enum ReviewsCommand {
    /// Reviews of a book.
    List {
        book_id: i64,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long)]
        size: Option<u32>,
        /// newest, oldest, highest or lowest
        #[arg(long, default_value = "newest")]
        sort: String,
    },

    /// Your own reviews.
    Mine {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long)]
        size: Option<u32>,
    },

    /// Write a review, or edit one with --id.
    Save {
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        book: i64,
        /// 0-5 stars
        #[arg(long)]
        rating: i64,
        #[arg(long)]
        comment: String,
    },

    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },

    Show { id: i64 },

    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = FolioConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config.display()))?;
    if let Some(url) = cli.gateway_url {
        config.gateway = GatewayConfig {
            timeout_secs: config.gateway.timeout_secs,
            ..GatewayConfig::with_base_url(url)
        };
    }
    let session_file = cli
        .session_file
        .unwrap_or_else(|| config.session.file.clone());

    let session = SessionStore::new();
    store::load(&session_file, &session)?;
    let ctx = Context::new(config, session)?;
    tracing::debug!(gateway = ctx.client.base_url(), "using gateway");

    let result = run(&ctx, cli.cmd).await;

    // Persist whatever the command left behind, including a cleared session
    let saved = store::save(&session_file, &ctx.session);
    result.and(saved)
}

async fn run(ctx: &Context, cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Login { email, password } => commands::auth::login(ctx, &email, &password).await?,
        Command::Logout => commands::auth::logout(ctx),
        Command::Whoami => commands::auth::whoami(ctx)?,
        Command::OauthUrl => commands::auth::oauth_url(ctx),
        Command::OauthCallback { url } => commands::auth::oauth_callback(ctx, &url)?,
        Command::Register {
            username,
            email,
            password,
            confirm_password,
            accept_terms,
        } => {
            let form = RegistrationForm {
                username,
                email,
                password,
                confirm_password,
                accepted_terms: accept_terms,
            };
            commands::auth::register(ctx, form).await?
        }
        Command::Verify { token } => commands::auth::verify(ctx, &token).await?,
        Command::ResendVerification { email } => {
            commands::auth::resend_verification(ctx, &email).await?
        }

        Command::Profile { cmd } => match cmd {
            ProfileCommand::Show => commands::profile::show(ctx).await?,
            ProfileCommand::Update { username, email } => {
                commands::profile::update(ctx, username, email).await?
            }
            ProfileCommand::Delete { confirm } => commands::profile::delete(ctx, &confirm).await?,
        },

        Command::Books { cmd } => match cmd {
            BooksCommand::List {
                page,
                size,
                category,
            } => commands::catalog::list_books(ctx, page, size, category).await?,
            BooksCommand::Show { id, reviews } => {
                commands::catalog::show_book(ctx, id, reviews).await?
            }
            BooksCommand::Create(args) => commands::catalog::create_book(ctx, args).await?,
            BooksCommand::Update { id, fields } => {
                commands::catalog::update_book(ctx, id, fields).await?
            }
            BooksCommand::Delete { id } => commands::catalog::delete_book(ctx, id).await?,
        },

        Command::Categories { cmd } => match cmd {
            CategoriesCommand::List => commands::catalog::list_categories(ctx).await?,
            CategoriesCommand::Show { id } => commands::catalog::show_category(ctx, id).await?,
            CategoriesCommand::Save { id, name } => {
                commands::catalog::save_category(ctx, id, &name).await?
            }
            CategoriesCommand::Delete { id } => commands::catalog::delete_category(ctx, id).await?,
        },

        Command::Prices { cmd } => match cmd {
            PricesCommand::Show { book_id } => commands::stock::show_price(ctx, book_id).await?,
            PricesCommand::Create(args) => commands::stock::create_price(ctx, args).await?,
            PricesCommand::Update { price_id, fields } => {
                commands::stock::update_price(ctx, price_id, fields).await?
            }
            PricesCommand::Delete { book_id } => commands::stock::delete_price(ctx, book_id).await?,
        },

        Command::Inventory { cmd } => match cmd {
            InventoryCommand::Show { book_id } => {
                commands::stock::show_inventory(ctx, book_id).await?
            }
            InventoryCommand::List { page, size } => {
                commands::stock::list_inventory(ctx, page, size).await?
            }
            InventoryCommand::Create { book, quantity } => {
                commands::stock::create_inventory(ctx, book, quantity).await?
            }
            InventoryCommand::Update {
                inventory_id,
                book,
                quantity,
                available,
            } => commands::stock::update_inventory(ctx, inventory_id, book, quantity, available).await?,
            InventoryCommand::Delete { book_id } => {
                commands::stock::delete_inventory(ctx, book_id).await?
            }
        },

        Command::Reviews { cmd } => match cmd {
            ReviewsCommand::List {
                book_id,
                page,
                size,
                sort,
            } => {
                let (sort_by, sort_dir) = commands::reviews::parse_sort(&sort)?;
                let query = ReviewQuery {
                    page,
                    size: size.unwrap_or(ctx.config.catalog.review_page_size),
                    sort_by,
                    sort_dir,
                };
                commands::reviews::list(ctx, book_id, query).await?
            }
            ReviewsCommand::Mine { page, size } => commands::reviews::mine(ctx, page, size).await?,
            ReviewsCommand::Save {
                id,
                book,
                rating,
                comment,
            } => commands::reviews::save(ctx, id, book, rating, &comment).await?,
            ReviewsCommand::Delete { id } => commands::reviews::delete(ctx, id).await?,
        },

        Command::Users { cmd } => match cmd {
            UsersCommand::List { page, size } => commands::users::list(ctx, page, size).await?,
            UsersCommand::Show { id } => commands::users::show(ctx, id).await?,
            UsersCommand::Delete { id } => commands::users::delete(ctx, id).await?,
        },
    }

    Ok(())
}
