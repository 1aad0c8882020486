//! Menu Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use menu_app::{
    context::AppContext,
    database,
    domain::menu_items::{
        MenuItemsService,
        ordering::SortKey,
        records::{Category, MenuItemUuid},
    },
};

#[derive(Debug, Parser)]
#[command(name = "menu-app", about = "Menu catalog CLI", long_about = None)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// List the menu items of a category
    List(ListArgs),
    /// Delete a menu item
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Category, e.g. DRINKS
    #[arg(long)]
    category: Category,

    /// One of AZ, ZA, PRICE_ASC, PRICE_DESC, DATE_ASC, DATE_DESC
    #[arg(long, default_value = "AZ")]
    sort: SortKey,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Menu item UUID
    #[arg(long)]
    uuid: MenuItemUuid,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let database_url = cli
        .database_url
        .ok_or_else(|| "DATABASE_URL is required".to_string())?;

    match cli.command {
        Commands::Migrate => migrate(&database_url).await,
        Commands::List(args) => list(&database_url, args).await,
        Commands::Delete(args) => delete(&database_url, args).await,
    }
}

async fn migrate(database_url: &str) -> Result<(), String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}

async fn context(database_url: &str) -> Result<AppContext, String> {
    AppContext::from_database_url(database_url)
        .await
        .map_err(|error| format!("failed to initialise application: {error}"))
}

async fn list(database_url: &str, args: ListArgs) -> Result<(), String> {
    let items = context(database_url)
        .await?
        .menu_items
        .list_menu_items(args.category, args.sort)
        .await
        .map_err(|error| format!("failed to list menu items: {error}"))?;

    for item in items {
        println!(
            "{}\t{}\t{}\t{}",
            item.uuid, item.name, item.price, item.created_at
        );
    }

    Ok(())
}

async fn delete(database_url: &str, args: DeleteArgs) -> Result<(), String> {
    context(database_url)
        .await?
        .menu_items
        .delete_menu_item(args.uuid)
        .await
        .map_err(|error| format!("failed to delete menu item {}: {error}", args.uuid))?;

    println!("deleted {}", args.uuid);

    Ok(())
}
